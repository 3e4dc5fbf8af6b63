//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::MoveInput;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Begin a fresh run with the given weapon. Valid from any phase.
    StartRun { weapon: WeaponId },
    /// Replace the held movement keys.
    SetInput { input: MoveInput },
    /// Pick one of the offered upgrades while paused.
    ChooseUpgrade { index: usize },
    /// Drop the current run and go back to idle.
    ReturnToMenu,
}
