//! Kinematic integration system.
//!
//! Enemies home straight at the player; projectiles either integrate their
//! velocity or snap to the player when they carry a `Follow` marker.

use glam::Vec2;
use hecs::World;

use nightfall_core::components::{Enemy, Follow, Projectile};
use nightfall_core::constants::{ENEMY_WALK_CYCLE_SCALE, PROJECTILE_SPIN_RATE};
use nightfall_core::enums::WeaponKind;
use nightfall_core::math;
use nightfall_core::types::{Position, Velocity};

/// Move every living enemy `speed * dt` toward the player. No pathfinding or
/// separation; overlap is allowed.
pub fn run_enemies(world: &mut World, player_pos: Vec2, dt: f32) {
    for (_entity, (pos, enemy)) in world.query_mut::<(&mut Position, &mut Enemy)>() {
        if !enemy.alive {
            continue;
        }
        let dir = math::normalize(player_pos - pos.0);
        let step = dir * enemy.speed * dt;
        // Never overshoot onto the far side of the player.
        if step.length_squared() > pos.0.distance_squared(player_pos) {
            pos.0 = player_pos;
        } else {
            pos.0 += step;
        }
        enemy.walk_cycle += dt * (enemy.speed / ENEMY_WALK_CYCLE_SCALE);
        enemy.hurt_timer = (enemy.hurt_timer - dt).max(0.0);
    }
}

/// Advance projectiles and expire the ones whose lifespan ran out.
pub fn run_projectiles(world: &mut World, player_pos: Vec2, dt: f32) {
    for (_entity, (pos, vel, proj, follow)) in
        world.query_mut::<(&mut Position, &Velocity, &mut Projectile, Option<&Follow>)>()
    {
        if !proj.alive {
            continue;
        }
        if follow.is_some() {
            pos.0 = player_pos;
        } else {
            pos.0 += vel.0 * dt;
        }
        if proj.kind != WeaponKind::Melee {
            proj.rotation += dt * PROJECTILE_SPIN_RATE;
        }
        proj.lifespan -= dt;
        if proj.lifespan <= 0.0 {
            proj.alive = false;
        }
    }
}
