//! Collision system: projectile/enemy hits and enemy/player contact.
//!
//! Enemies are scanned in spawn order and the first enemy passing the hit
//! test takes the hit. A finite-pierce shot never hits the same enemy twice;
//! a melee sweep strikes every enemy in its cone on every tick it lives.

use glam::Vec2;
use hecs::World;

use nightfall_core::components::{Enemy, Projectile};
use nightfall_core::constants::MELEE_REACH_PER_RADIAN;
use nightfall_core::enums::WeaponKind;
use nightfall_core::math;
use nightfall_core::types::Position;

use crate::player::Player;
use crate::systems::combat::{self, Kill};

/// Point test for ranged shots, cone test for melee sweeps.
pub fn projectile_hits(proj_pos: Vec2, proj: &Projectile, enemy_pos: Vec2, enemy_size: f32) -> bool {
    let d = proj_pos.distance(enemy_pos);
    match proj.kind {
        WeaponKind::Melee => {
            if d > proj.arc * MELEE_REACH_PER_RADIAN {
                return false;
            }
            let angle_to_enemy = math::heading(enemy_pos - proj_pos);
            math::angle_diff(angle_to_enemy, proj.rotation) <= proj.arc
        }
        WeaponKind::Ranged => d < enemy_size,
    }
}

/// Resolve projectile hits. `chain_spark` is `(fraction, radius)` when the
/// chain upgrade is active.
pub fn handle_projectiles(world: &World, chain_spark: Option<(f32, f32)>, kills: &mut Vec<Kill>) {
    let targets = combat::living_targets(world);
    if targets.is_empty() {
        return;
    }

    let mut query = world.query::<(&Position, &mut Projectile)>();
    for (_entity, (pos, proj)) in query.iter() {
        if !proj.alive {
            continue;
        }
        for target in &targets {
            if proj.has_struck(target.serial) || !combat::is_alive(world, target.entity) {
                continue;
            }
            if !projectile_hits(pos.0, proj, target.position, target.size) {
                continue;
            }

            if proj.splash_radius > 0.0 {
                combat::strike_area(
                    world,
                    &targets,
                    target.position,
                    proj.splash_radius,
                    proj.damage,
                    kills,
                );
            } else {
                combat::strike(world, target.entity, proj.damage, kills);
            }

            if let Some((fraction, radius)) = chain_spark {
                if let Some(next) =
                    combat::nearest_other(world, &targets, target.position, radius, target.entity)
                {
                    combat::strike(world, next, proj.damage * fraction, kills);
                }
            }

            proj.record_hit(target.serial);
            if !proj.pierce.register_hit() {
                proj.alive = false;
                break;
            }
        }
    }
}

/// Continuous contact damage: every living enemy within `size + pad` of the
/// player deals `damage * dt`.
pub fn handle_player(world: &World, player: &mut Player, pad: f32, dt: f32) {
    for (_entity, (pos, enemy)) in world.query::<(&Position, &Enemy)>().iter() {
        if !enemy.alive {
            continue;
        }
        if pos.0.distance(player.position) < enemy.size + pad {
            player.take_damage(enemy.damage * dt);
        }
    }
}
