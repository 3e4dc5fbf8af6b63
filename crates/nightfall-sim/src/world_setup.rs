//! Entity spawn factories.
//!
//! Creates enemy and projectile entities with the appropriate component
//! bundles.

use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use std::f32::consts::TAU;

use nightfall_core::components::{Enemy, Follow};
use nightfall_core::enums::EnemyKind;
use nightfall_core::math;
use nightfall_core::types::{Position, Velocity};

use crate::player::Shot;

/// Spawn an enemy of `kind` scaled by `difficulty`.
pub fn spawn_enemy(
    world: &mut World,
    kind: EnemyKind,
    position: Vec2,
    difficulty: f32,
    is_elite: bool,
    serial: u64,
) -> Entity {
    let stats = kind.preset().scaled(difficulty);
    world.spawn((
        Position(position),
        Enemy::new(kind, serial, stats, is_elite),
    ))
}

/// Spawn a projectile fired by the player.
pub fn spawn_shot(world: &mut World, shot: Shot) -> Entity {
    let entity = world.spawn((
        Position(shot.position),
        Velocity(shot.velocity),
        shot.projectile,
    ));
    if shot.follow {
        let _ = world.insert_one(entity, Follow);
    }
    entity
}

/// Uniformly random angle, distance in `[min, max]` from `center`.
pub fn random_ring_point(rng: &mut ChaCha8Rng, center: Vec2, min: f32, max: f32) -> Vec2 {
    let angle = rng.gen::<f32>() * TAU;
    let distance = min + rng.gen::<f32>() * (max - min).max(0.0);
    math::point_on_ring(center, angle, distance)
}
