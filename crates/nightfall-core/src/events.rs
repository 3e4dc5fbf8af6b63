//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::state::UpgradeChoiceView;

/// Something the host may want to react to. Drained into each snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    RunStarted { weapon: WeaponId },
    /// One level gained; `choices` is the offer to render.
    LevelUp {
        level: u32,
        choices: Vec<UpgradeChoiceView>,
    },
    UpgradeApplied { title: String },
    EnemyKilled { kind: EnemyKind, reward_xp: f32 },
    BossSpawned { max_health: f32 },
    BossDefeated,
    RunEnded { time_survived: u32, kills: u32 },
}
