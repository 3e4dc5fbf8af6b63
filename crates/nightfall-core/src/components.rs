//! ECS components for hecs entities.
//!
//! Components are plain data structs. Game logic lives in systems.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::presets::ScaledStats;
use crate::types::Pierce;

/// A hostile unit homing on the player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    /// Spawn order; collision resolution walks enemies in ascending serial.
    pub serial: u64,
    pub health: f32,
    pub max_health: f32,
    pub speed: f32,
    /// Contact damage per second.
    pub damage: f32,
    /// Collision radius.
    pub size: f32,
    pub reward_xp: f32,
    pub is_boss: bool,
    pub is_elite: bool,
    pub hurt_timer: f32,
    pub walk_cycle: f32,
    pub alive: bool,
}

impl Enemy {
    pub fn new(kind: EnemyKind, serial: u64, stats: ScaledStats, is_elite: bool) -> Self {
        Self {
            kind,
            serial,
            health: stats.max_health,
            max_health: stats.max_health,
            speed: stats.speed,
            damage: stats.damage,
            size: stats.size,
            reward_xp: stats.reward_xp,
            is_boss: kind.preset().is_boss,
            is_elite,
            hurt_timer: 0.0,
            walk_cycle: 0.0,
            alive: true,
        }
    }

    /// Apply raw damage. Returns `true` if this hit killed the enemy.
    /// Damage to an already dead enemy is ignored.
    pub fn take_damage(&mut self, amount: f32) -> bool {
        if !self.alive {
            return false;
        }
        self.health -= amount;
        self.hurt_timer = crate::constants::ENEMY_HURT_SECS;
        if self.health <= 0.0 {
            self.alive = false;
            return true;
        }
        false
    }

    pub fn health_ratio(&self) -> f32 {
        if self.max_health <= 0.0 {
            return 0.0;
        }
        (self.health / self.max_health).clamp(0.0, 1.0)
    }
}

/// Damage carrier fired by the player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub kind: WeaponKind,
    pub damage: f32,
    /// Seconds until expiry.
    pub lifespan: f32,
    pub sprite: ProjectileSprite,
    /// Heading for rendering; for melee sweeps, the cone axis.
    pub rotation: f32,
    pub pierce: Pierce,
    pub splash_radius: f32,
    /// Melee cone half-width in radians; 0 for ranged shots.
    pub arc: f32,
    /// Serials of enemies already struck by a piercing shot. Unused for
    /// sweeps, which damage everything in the cone every tick they live.
    pub struck: Vec<u64>,
    pub alive: bool,
}

impl Projectile {
    pub fn has_struck(&self, serial: u64) -> bool {
        self.pierce != Pierce::Infinite && self.struck.contains(&serial)
    }

    /// Remember `serial` so a finite-pierce shot never spends a charge on
    /// the same enemy twice.
    pub fn record_hit(&mut self, serial: u64) {
        if self.pierce != Pierce::Infinite {
            self.struck.push(serial);
        }
    }
}

/// Marks a projectile that tracks the player's position every tick instead
/// of integrating its velocity.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Follow;

/// A damage point circling the player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Orbital {
    pub angle: f32,
    pub radius: f32,
    /// Radians per second.
    pub speed: f32,
    /// Damage per tick is `damage * dt * ORBITAL_DPS_FACTOR`.
    pub damage: f32,
    pub sprite: OrbitalSprite,
}

impl Orbital {
    /// World point of this orbital around `center`.
    pub fn point(&self, center: Vec2) -> Vec2 {
        crate::math::point_on_ring(center, self.angle, self.radius)
    }
}
