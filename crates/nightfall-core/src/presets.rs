//! Enemy base stats and difficulty scaling.

use crate::enums::EnemyKind;

/// Base stats of an enemy archetype at multiplier 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyPreset {
    pub speed: f32,
    pub health: f32,
    pub damage: f32,
    pub size: f32,
    pub reward_xp: f32,
    pub is_boss: bool,
}

impl EnemyKind {
    pub fn preset(&self) -> EnemyPreset {
        match self {
            EnemyKind::Undead => EnemyPreset {
                speed: 70.0,
                health: 32.0,
                damage: 8.0,
                size: 18.0,
                reward_xp: 9.0,
                is_boss: false,
            },
            EnemyKind::Vampire => EnemyPreset {
                speed: 95.0,
                health: 60.0,
                damage: 14.0,
                size: 22.0,
                reward_xp: 16.0,
                is_boss: false,
            },
            EnemyKind::Skeleton => EnemyPreset {
                speed: 80.0,
                health: 18.0,
                damage: 7.0,
                size: 16.0,
                reward_xp: 6.0,
                is_boss: false,
            },
            EnemyKind::GraveLord => EnemyPreset {
                speed: 70.0,
                health: 800.0,
                damage: 28.0,
                size: 38.0,
                reward_xp: 150.0,
                is_boss: true,
            },
        }
    }
}

/// Stats of a spawned enemy after applying a difficulty multiplier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledStats {
    pub speed: f32,
    pub max_health: f32,
    pub damage: f32,
    pub size: f32,
    pub reward_xp: f32,
}

impl EnemyPreset {
    /// Scale by a difficulty multiplier. Every output is non-decreasing in
    /// `difficulty`.
    pub fn scaled(&self, difficulty: f32) -> ScaledStats {
        let speed_scale = (0.9 + difficulty * 0.12).max(0.8);
        let health_scale = if self.is_boss {
            difficulty * 1.4
        } else {
            difficulty
        };
        ScaledStats {
            speed: self.speed * speed_scale,
            max_health: self.health * health_scale,
            damage: self.damage * (0.8 + difficulty * 0.15),
            size: self.size,
            reward_xp: (self.reward_xp * (0.9 + difficulty * 0.1)).round(),
        }
    }
}
