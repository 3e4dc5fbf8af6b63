//! Game state snapshot: the complete visible state handed to the host after
//! each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Position, SimTime};

/// Complete game state published after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub weapon: WeaponId,
    pub hud: HudSnapshot,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    /// Pending upgrade offer while paused.
    pub offer: Option<Vec<UpgradeChoiceView>>,
    pub events: Vec<GameEvent>,
    /// Present once the run has ended.
    pub summary: Option<RunSummary>,
}

/// Numbers the HUD displays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HudSnapshot {
    pub health: f32,
    pub max_health: f32,
    pub damage: f32,
    pub speed: f32,
    pub level: u32,
    pub experience: f32,
    pub experience_to_level: f32,
    pub elapsed_secs: f32,
    pub kill_count: u32,
    pub orbital_count: u32,
    /// Health ratio of the living boss, if any.
    pub boss_health_ratio: Option<f32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub facing: f32,
    pub walk_cycle: f32,
    pub hurt: bool,
    pub attack_flash: bool,
    pub orbitals: Vec<OrbitalView>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OrbitalView {
    pub position: Position,
    pub sprite: OrbitalSprite,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub kind: EnemyKind,
    pub position: Position,
    pub size: f32,
    pub health_ratio: f32,
    pub is_boss: bool,
    pub is_elite: bool,
    pub hurt: bool,
    pub walk_cycle: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Position,
    pub rotation: f32,
    pub sprite: ProjectileSprite,
    pub kind: WeaponKind,
    pub arc: f32,
}

/// One card of a level-up offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeChoiceView {
    pub title: String,
    pub description: String,
}

/// Reported once when the player dies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Elapsed seconds, rounded to the nearest whole second.
    pub time_survived: u32,
    pub kills: u32,
    pub level: u32,
}
