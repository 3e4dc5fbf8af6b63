//! Runtime tuning loaded from a TOML file.
//!
//! [`Tuning`] mirrors the balance constants in [`crate::constants`]. Missing
//! keys fall back to those defaults, so a file can override just the values
//! being tuned:
//!
//! ```toml
//! spawn_initial_delay = 4.0
//! boss_interval_secs = 180.0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{ConfigError, ConfigResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // ── Frame ────────────────────────────────────────────────────────────────
    pub max_frame_dt: f32,

    // ── Player ───────────────────────────────────────────────────────────────
    pub player_max_health: f32,
    pub contact_pad: f32,

    // ── Leveling ─────────────────────────────────────────────────────────────
    pub xp_first_threshold: f32,
    pub xp_growth_factor: f32,
    pub xp_growth_offset: f32,
    pub upgrade_choices: usize,

    // ── Spawning ─────────────────────────────────────────────────────────────
    pub spawn_initial_delay: f32,
    pub spawn_interval_base: f32,
    pub spawn_interval_decay_secs: f32,
    pub spawn_interval_floor: f32,
    pub spawn_count_step_secs: f32,
    pub spawn_late_game_secs: f32,
    pub spawn_late_burst: u32,
    pub spawn_difficulty_divisor: f32,
    pub elite_chance: f64,
    pub elite_boost: f32,
    pub spawn_ring_min: f32,
    pub spawn_ring_max: f32,
    pub spawn_ring_clearance: f32,

    // ── Boss ─────────────────────────────────────────────────────────────────
    pub boss_interval_secs: f32,
    pub boss_spawn_distance: f32,
    pub boss_difficulty_divisor: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            max_frame_dt: MAX_FRAME_DT,
            player_max_health: PLAYER_MAX_HEALTH,
            contact_pad: CONTACT_PAD,
            xp_first_threshold: XP_FIRST_THRESHOLD,
            xp_growth_factor: XP_GROWTH_FACTOR,
            xp_growth_offset: XP_GROWTH_OFFSET,
            upgrade_choices: UPGRADE_CHOICES,
            spawn_initial_delay: SPAWN_INITIAL_DELAY,
            spawn_interval_base: SPAWN_INTERVAL_BASE,
            spawn_interval_decay_secs: SPAWN_INTERVAL_DECAY_SECS,
            spawn_interval_floor: SPAWN_INTERVAL_FLOOR,
            spawn_count_step_secs: SPAWN_COUNT_STEP_SECS,
            spawn_late_game_secs: SPAWN_LATE_GAME_SECS,
            spawn_late_burst: SPAWN_LATE_BURST,
            spawn_difficulty_divisor: SPAWN_DIFFICULTY_DIVISOR,
            elite_chance: ELITE_CHANCE,
            elite_boost: ELITE_BOOST,
            spawn_ring_min: SPAWN_RING_MIN,
            spawn_ring_max: SPAWN_RING_MAX,
            spawn_ring_clearance: SPAWN_RING_CLEARANCE,
            boss_interval_secs: BOSS_INTERVAL_SECS,
            boss_spawn_distance: BOSS_SPAWN_DISTANCE,
            boss_difficulty_divisor: BOSS_DIFFICULTY_DIVISOR,
        }
    }
}

fn positive(field: &'static str, value: f32) -> ConfigResult<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            value: value as f64,
            reason: "must be positive and finite",
        })
    }
}

fn non_negative(field: &'static str, value: f32) -> ConfigResult<()> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            value: value as f64,
            reason: "must be non-negative and finite",
        })
    }
}

impl Tuning {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> ConfigResult<Tuning> {
        let tuning: Tuning = toml::from_str(text)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: &Path) -> ConfigResult<Tuning> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tuning = Self::from_toml_str(&text)?;
        log::info!("loaded tuning from {}", path.display());
        Ok(tuning)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        positive("max_frame_dt", self.max_frame_dt)?;
        positive("player_max_health", self.player_max_health)?;
        non_negative("contact_pad", self.contact_pad)?;
        positive("xp_first_threshold", self.xp_first_threshold)?;
        non_negative("xp_growth_offset", self.xp_growth_offset)?;
        if !(self.xp_growth_factor >= 1.0 && self.xp_growth_factor.is_finite()) {
            return Err(ConfigError::Invalid {
                field: "xp_growth_factor",
                value: self.xp_growth_factor as f64,
                reason: "must be at least 1.0",
            });
        }
        if self.upgrade_choices == 0 {
            return Err(ConfigError::Invalid {
                field: "upgrade_choices",
                value: 0.0,
                reason: "must offer at least one choice",
            });
        }
        non_negative("spawn_initial_delay", self.spawn_initial_delay)?;
        positive("spawn_interval_base", self.spawn_interval_base)?;
        positive("spawn_interval_decay_secs", self.spawn_interval_decay_secs)?;
        positive("spawn_interval_floor", self.spawn_interval_floor)?;
        positive("spawn_count_step_secs", self.spawn_count_step_secs)?;
        non_negative("spawn_late_game_secs", self.spawn_late_game_secs)?;
        positive("spawn_difficulty_divisor", self.spawn_difficulty_divisor)?;
        if !(0.0..=1.0).contains(&self.elite_chance) {
            return Err(ConfigError::Invalid {
                field: "elite_chance",
                value: self.elite_chance,
                reason: "must be a probability in [0, 1]",
            });
        }
        positive("elite_boost", self.elite_boost)?;
        positive("spawn_ring_min", self.spawn_ring_min)?;
        non_negative("spawn_ring_clearance", self.spawn_ring_clearance)?;
        if self.spawn_ring_max < self.spawn_ring_min {
            return Err(ConfigError::Invalid {
                field: "spawn_ring_max",
                value: self.spawn_ring_max as f64,
                reason: "must not be smaller than spawn_ring_min",
            });
        }
        positive("boss_interval_secs", self.boss_interval_secs)?;
        positive("boss_spawn_distance", self.boss_spawn_distance)?;
        positive("boss_difficulty_divisor", self.boss_difficulty_divisor)?;
        Ok(())
    }

    /// Next level threshold after reaching `threshold`.
    pub fn next_threshold(&self, threshold: f32) -> f32 {
        (threshold * self.xp_growth_factor + self.xp_growth_offset).ceil()
    }
}
