//! Spawn system: a single countdown that releases batches of enemies on a
//! ring around the player, scaled by elapsed run time.

use glam::Vec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use nightfall_core::config::Tuning;
use nightfall_core::constants::{MIN_DIFFICULTY, SKELETON_DIFFICULTY_FACTOR};
use nightfall_core::enums::EnemyKind;

use crate::world_setup;

/// Countdown to the next batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnSchedule {
    pub timer: f32,
}

impl SpawnSchedule {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            timer: tuning.spawn_initial_delay,
        }
    }
}

/// Where and when a batch is being spawned.
#[derive(Debug, Clone, Copy)]
pub struct SpawnContext {
    pub elapsed: f32,
    pub player_pos: Vec2,
    pub attack_radius: f32,
}

/// Difficulty multiplier at `elapsed` seconds. Non-decreasing.
pub fn difficulty(tuning: &Tuning, elapsed: f32) -> f32 {
    1.0 + elapsed / tuning.spawn_difficulty_divisor
}

/// Delay until the following batch. Non-increasing, floored.
pub fn spawn_interval(tuning: &Tuning, elapsed: f32) -> f32 {
    (tuning.spawn_interval_base - elapsed / tuning.spawn_interval_decay_secs)
        .max(tuning.spawn_interval_floor)
}

/// Enemies per batch.
pub fn spawn_count(tuning: &Tuning, elapsed: f32) -> u32 {
    let mut count = 1 + (elapsed / tuning.spawn_count_step_secs).floor() as u32;
    if elapsed > tuning.spawn_late_game_secs {
        count += tuning.spawn_late_burst;
    }
    count
}

/// Pick an archetype from a uniform roll in `[0, 1)`. Late game shifts the
/// roster toward skeletons.
pub fn roll_kind(tuning: &Tuning, elapsed: f32, roll: f64) -> EnemyKind {
    if elapsed > tuning.spawn_late_game_secs && roll > 0.3 {
        EnemyKind::Skeleton
    } else if roll > 0.82 {
        EnemyKind::Vampire
    } else if roll > 0.55 {
        EnemyKind::Undead
    } else {
        EnemyKind::Vampire
    }
}

/// Inner and outer spawn ring distance. The inner edge always clears the
/// player's attack radius.
pub fn spawn_ring(tuning: &Tuning, attack_radius: f32) -> (f32, f32) {
    let min = tuning
        .spawn_ring_min
        .max(attack_radius + tuning.spawn_ring_clearance);
    let max = tuning.spawn_ring_max.max(min);
    (min, max)
}

/// Count down and spawn a batch when due. Returns the number spawned.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    schedule: &mut SpawnSchedule,
    tuning: &Tuning,
    ctx: SpawnContext,
    dt: f32,
    next_serial: &mut u64,
) -> u32 {
    schedule.timer -= dt;
    if schedule.timer > 0.0 {
        return 0;
    }
    schedule.timer = spawn_interval(tuning, ctx.elapsed);

    let count = spawn_count(tuning, ctx.elapsed);
    let difficulty = difficulty(tuning, ctx.elapsed);
    let (ring_min, ring_max) = spawn_ring(tuning, ctx.attack_radius);
    for _ in 0..count {
        let kind = roll_kind(tuning, ctx.elapsed, rng.gen::<f64>());
        let position = world_setup::random_ring_point(rng, ctx.player_pos, ring_min, ring_max);
        let elite = rng.gen::<f64>() < tuning.elite_chance;
        let (multiplier, is_elite) = if kind == EnemyKind::Skeleton {
            ((difficulty * SKELETON_DIFFICULTY_FACTOR).max(MIN_DIFFICULTY), false)
        } else if elite {
            (difficulty * tuning.elite_boost, true)
        } else {
            (difficulty, false)
        };
        world_setup::spawn_enemy(world, kind, position, multiplier, is_elite, *next_serial);
        *next_serial += 1;
    }
    log::debug!(
        "spawned {count} enemies at t={:.1}s (difficulty {difficulty:.2}, next in {:.2}s)",
        ctx.elapsed,
        schedule.timer
    );
    count
}
