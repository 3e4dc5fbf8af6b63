//! Scripted player used by the headless CLI and soak tests.
//!
//! Kites away from the nearest enemy inside its comfort radius, otherwise
//! stands still and lets auto-targeting work. Always takes the first offered
//! upgrade.

use glam::Vec2;

use nightfall_core::commands::PlayerCommand;
use nightfall_core::enums::GamePhase;
use nightfall_core::state::GameStateSnapshot;
use nightfall_core::types::MoveInput;

/// Enemies closer than this trigger a retreat.
pub const DEFAULT_COMFORT_RADIUS: f32 = 150.0;

/// cos(67.5°): an axis key is held when the retreat direction lies within
/// 67.5° of it, giving eight-way movement.
const AXIS_THRESHOLD: f32 = 0.38;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Autopilot {
    pub comfort_radius: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            comfort_radius: DEFAULT_COMFORT_RADIUS,
        }
    }
}

impl Autopilot {
    /// Commands for the next frame given the latest snapshot.
    pub fn plan(&self, snapshot: &GameStateSnapshot) -> Vec<PlayerCommand> {
        match snapshot.phase {
            GamePhase::Paused if snapshot.offer.is_some() => {
                vec![PlayerCommand::ChooseUpgrade { index: 0 }]
            }
            GamePhase::Playing => vec![PlayerCommand::SetInput {
                input: self.steer(snapshot),
            }],
            _ => Vec::new(),
        }
    }

    pub fn steer(&self, snapshot: &GameStateSnapshot) -> MoveInput {
        let me = snapshot.player.position.0;
        let nearest = snapshot
            .enemies
            .iter()
            .map(|e| e.position.0)
            .filter(|p| p.distance(me) < self.comfort_radius)
            .min_by(|a, b| a.distance(me).total_cmp(&b.distance(me)));
        match nearest {
            Some(enemy) => keys_toward(me - enemy),
            None => MoveInput::NONE,
        }
    }
}

/// Eight-way keys approximating `dir`. A zero vector holds nothing.
pub fn keys_toward(dir: Vec2) -> MoveInput {
    let dir = dir.normalize_or_zero();
    MoveInput {
        up: dir.y < -AXIS_THRESHOLD,
        down: dir.y > AXIS_THRESHOLD,
        left: dir.x < -AXIS_THRESHOLD,
        right: dir.x > AXIS_THRESHOLD,
    }
}
