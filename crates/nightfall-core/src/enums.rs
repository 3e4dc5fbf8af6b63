//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Top-level run state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No run in progress, no active entities.
    #[default]
    Idle,
    Playing,
    /// Frozen while an upgrade offer is pending.
    Paused,
    /// Player died; the run summary is available.
    Ended,
}

/// How a weapon delivers damage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeaponKind {
    /// Short-lived cone sweep that follows the player.
    Melee,
    /// Straight-flying projectiles.
    #[default]
    Ranged,
}

/// Selectable starting weapons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponId {
    /// Balanced ranged default, also the fallback for unknown ids.
    #[default]
    Shard,
    Sword,
    Knife,
    Crossbow,
    Bow,
    Staff,
}

impl WeaponId {
    pub const ALL: [WeaponId; 6] = [
        WeaponId::Shard,
        WeaponId::Sword,
        WeaponId::Knife,
        WeaponId::Crossbow,
        WeaponId::Bow,
        WeaponId::Staff,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            WeaponId::Shard => "shard",
            WeaponId::Sword => "sword",
            WeaponId::Knife => "knife",
            WeaponId::Crossbow => "crossbow",
            WeaponId::Bow => "bow",
            WeaponId::Staff => "staff",
        }
    }

    /// Look up a weapon by key. Unknown keys fall back to [`WeaponId::Shard`].
    pub fn from_key(key: &str) -> WeaponId {
        let key = key.trim().to_ascii_lowercase();
        match WeaponId::ALL.iter().find(|id| id.key() == key) {
            Some(id) => *id,
            None => {
                log::warn!("unknown weapon '{key}', falling back to shard");
                WeaponId::default()
            }
        }
    }
}

/// Enemy archetype; selects base stats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Slow shambler, the default preset for unknown keys.
    #[default]
    Undead,
    Vampire,
    Skeleton,
    /// The boss.
    GraveLord,
}

impl EnemyKind {
    pub fn key(&self) -> &'static str {
        match self {
            EnemyKind::Undead => "undead",
            EnemyKind::Vampire => "vampire",
            EnemyKind::Skeleton => "skeleton",
            EnemyKind::GraveLord => "grave_lord",
        }
    }

    /// Unknown keys fall back to [`EnemyKind::Undead`].
    pub fn from_key(key: &str) -> EnemyKind {
        match key {
            "undead" => EnemyKind::Undead,
            "vampire" => EnemyKind::Vampire,
            "skeleton" => EnemyKind::Skeleton,
            "grave_lord" | "graveLord" => EnemyKind::GraveLord,
            _ => EnemyKind::default(),
        }
    }
}

/// Projectile sprite key for the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileSprite {
    Shard,
    Sword,
    Knife,
    Bolt,
    #[default]
    Arrow,
    Orb,
}

/// Orbital sprite key for the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrbitalSprite {
    #[default]
    Core,
    Spirit,
}

/// Player stat targeted by an upgrade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stat {
    Speed,
    Damage,
    AttackRadius,
    AttackCooldown,
    ProjectileSpeed,
}
