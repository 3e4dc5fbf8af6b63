//! Boss gate: at most one boss alive, re-armed a fixed interval after the
//! previous boss dies.

use glam::Vec2;
use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use nightfall_core::components::Enemy;
use nightfall_core::config::Tuning;
use nightfall_core::enums::EnemyKind;

use crate::world_setup;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BossGate {
    pub active: Option<Entity>,
    /// Elapsed time at which the next boss may appear.
    pub next_at: f32,
}

impl BossGate {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            active: None,
            next_at: tuning.boss_interval_secs,
        }
    }

    /// Clear the gate and re-arm from `elapsed` if `boss` is the gated boss.
    /// Returns whether it was. Extra bosses placed by hand leave the gate
    /// alone.
    pub fn on_boss_killed(&mut self, boss: Entity, tuning: &Tuning, elapsed: f32) -> bool {
        if self.active != Some(boss) {
            return false;
        }
        self.active = None;
        self.next_at = elapsed + tuning.boss_interval_secs;
        true
    }

    /// Health ratio of the living boss.
    pub fn health_ratio(&self, world: &World) -> Option<f32> {
        let entity = self.active?;
        let enemy = world.get::<&Enemy>(entity).ok()?;
        enemy.alive.then(|| enemy.health_ratio())
    }

    fn boss_alive(&self, world: &World) -> bool {
        self.active
            .and_then(|e| world.get::<&Enemy>(e).ok().map(|enemy| enemy.alive))
            .unwrap_or(false)
    }
}

/// Boss spawn distance: the tuned distance, pushed past the attack radius
/// the same way the regular spawn ring is.
pub fn spawn_distance(tuning: &Tuning, attack_radius: f32) -> f32 {
    tuning
        .boss_spawn_distance
        .max(attack_radius + tuning.spawn_ring_clearance)
}

/// Spawn a boss when due. Returns the spawned boss's max health.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    gate: &mut BossGate,
    tuning: &Tuning,
    elapsed: f32,
    player_pos: Vec2,
    attack_radius: f32,
    next_serial: &mut u64,
) -> Option<f32> {
    if gate.boss_alive(world) || elapsed < gate.next_at {
        return None;
    }
    let distance = spawn_distance(tuning, attack_radius);
    let position = world_setup::random_ring_point(rng, player_pos, distance, distance);
    let multiplier = 1.0 + elapsed / tuning.boss_difficulty_divisor;
    let entity = world_setup::spawn_enemy(
        world,
        EnemyKind::GraveLord,
        position,
        multiplier,
        false,
        *next_serial,
    );
    *next_serial += 1;
    gate.active = Some(entity);
    let max_health = world.get::<&Enemy>(entity).map(|e| e.max_health).unwrap_or(0.0);
    log::info!("boss spawned at t={elapsed:.1}s with {max_health:.0} health");
    Some(max_health)
}
