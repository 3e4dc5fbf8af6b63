//! Damage application and kill reporting shared by every damage source.

use glam::Vec2;
use hecs::{Entity, World};

use nightfall_core::components::Enemy;
use nightfall_core::enums::EnemyKind;
use nightfall_core::types::Position;

/// An enemy killed this tick, credited by the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kill {
    pub entity: Entity,
    pub kind: EnemyKind,
    pub reward_xp: f32,
    pub is_boss: bool,
}

/// A living enemy as seen at the start of a damage pass.
#[derive(Debug, Clone, Copy)]
pub struct Target {
    pub entity: Entity,
    pub serial: u64,
    pub position: Vec2,
    pub size: f32,
}

/// Living enemies in spawn order.
pub fn living_targets(world: &World) -> Vec<Target> {
    let mut targets: Vec<Target> = world
        .query::<(&Position, &Enemy)>()
        .iter()
        .filter(|(_, (_, enemy))| enemy.alive)
        .map(|(entity, (pos, enemy))| Target {
            entity,
            serial: enemy.serial,
            position: pos.0,
            size: enemy.size,
        })
        .collect();
    targets.sort_by_key(|t| t.serial);
    targets
}

pub fn is_alive(world: &World, entity: Entity) -> bool {
    world
        .get::<&Enemy>(entity)
        .map(|enemy| enemy.alive)
        .unwrap_or(false)
}

/// Damage one enemy; records a kill if this blow was fatal.
pub fn strike(world: &World, entity: Entity, amount: f32, kills: &mut Vec<Kill>) {
    let Ok(mut enemy) = world.get::<&mut Enemy>(entity) else {
        return;
    };
    if enemy.take_damage(amount) {
        kills.push(Kill {
            entity,
            kind: enemy.kind,
            reward_xp: enemy.reward_xp,
            is_boss: enemy.is_boss,
        });
    }
}

/// Damage every living enemy within `radius` of `center` (inclusive).
pub fn strike_area(
    world: &World,
    targets: &[Target],
    center: Vec2,
    radius: f32,
    amount: f32,
    kills: &mut Vec<Kill>,
) {
    for target in targets {
        if target.position.distance(center) <= radius && is_alive(world, target.entity) {
            strike(world, target.entity, amount, kills);
        }
    }
}

/// Nearest living enemy to `center` within `radius`, other than `exclude`.
pub fn nearest_other(
    world: &World,
    targets: &[Target],
    center: Vec2,
    radius: f32,
    exclude: Entity,
) -> Option<Entity> {
    let mut best: Option<(f32, Entity)> = None;
    for target in targets {
        if target.entity == exclude || !is_alive(world, target.entity) {
            continue;
        }
        let d = target.position.distance(center);
        if d <= radius && best.map_or(true, |(bd, _)| d < bd) {
            best = Some((d, target.entity));
        }
    }
    best.map(|(_, entity)| entity)
}
