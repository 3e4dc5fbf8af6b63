//! Upgrade definitions as data.
//!
//! An upgrade is a title, a description and a list of typed effects. The
//! simulation applies effects through one dispatcher, so every effect kind is
//! matched exhaustively at compile time.

use serde::{Deserialize, Serialize};

use crate::enums::{OrbitalSprite, Stat};

/// One stat or behavior change applied when an upgrade is picked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum UpgradeEffect {
    /// Multiply a stat.
    ScaleStat { stat: Stat, factor: f32 },
    /// Add a flat amount to a stat.
    AddStat { stat: Stat, amount: f32 },
    /// More projectiles per volley, capped at `max`.
    AddProjectiles { amount: u32, max: u32 },
    /// Change the fan spread; the result never drops below `floor`.
    AdjustSpread { delta: f32, floor: f32 },
    /// Widen or narrow the melee cone.
    ScaleArc { factor: f32 },
    AddPierce { amount: u32 },
    /// Scale the splash radius (rounded). A weapon without splash starts
    /// from `fallback`.
    ScaleSplash { factor: f32, fallback: f32 },
    ScaleLifespan { factor: f32 },
    /// Raise max health and heal by `heal` (clamped to the new max).
    AddMaxHealth { amount: f32, heal: f32 },
    /// New orbital dealing `damage_factor` times the current damage.
    AddOrbital {
        radius: f32,
        speed: f32,
        damage_factor: f32,
        sprite: OrbitalSprite,
    },
    /// Strengthen every existing orbital.
    BoostOrbitals { damage_factor: f32, speed_factor: f32 },
    /// Temporary mitigation after each attack.
    ParryGuard { duration: f32, mitigation: f32 },
    /// Projectile hits arc to one more nearby enemy.
    ChainSpark { fraction: f32 },
    /// Periodic damage burst around the player.
    PulseNova { damage_factor: f32 },
}

/// A pickable upgrade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpgradeDefinition {
    pub title: &'static str,
    pub description: &'static str,
    pub effects: &'static [UpgradeEffect],
}
