//! Host-side application state: weapon selection and the live run session.

use thiserror::Error;

use nightfall_core::commands::PlayerCommand;
use nightfall_core::enums::{GamePhase, WeaponId};
use nightfall_core::error::ConfigError;
use nightfall_core::state::{GameStateSnapshot, RunSummary};
use nightfall_sim::engine::{SimConfig, SimulationEngine};

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread.
    Shutdown,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("no weapon selected")]
    NoWeaponSelected,
    #[error("a run is already in progress")]
    RunInProgress,
    #[error("no active run")]
    NoActiveRun,
    #[error("game loop channel closed")]
    ChannelClosed,
    #[error("failed to spawn game loop thread: {0}")]
    Thread(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type AppResult<T> = Result<T, AppError>;

/// Everything the host owns between frames. Replaces the module-level
/// globals a page script would keep.
pub struct AppState {
    config: SimConfig,
    selected_weapon: Option<WeaponId>,
    session: Option<SimulationEngine>,
    last_summary: Option<RunSummary>,
    runs_started: u64,
}

impl AppState {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            selected_weapon: None,
            session: None,
            last_summary: None,
            runs_started: 0,
        }
    }

    pub fn select_weapon(&mut self, weapon: WeaponId) {
        log::debug!("weapon selected: {}", weapon.key());
        self.selected_weapon = Some(weapon);
    }

    /// Select by catalog key. Unknown keys fall back to the default weapon.
    pub fn select_weapon_key(&mut self, key: &str) -> WeaponId {
        let weapon = WeaponId::from_key(key);
        self.select_weapon(weapon);
        weapon
    }

    pub fn selected_weapon(&self) -> Option<WeaponId> {
        self.selected_weapon
    }

    /// Whether a run exists and has not ended.
    pub fn is_running(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|engine| engine.phase() != GamePhase::Ended)
    }

    /// Create a session and start a run with the selected weapon. An ended
    /// run is replaced; a live one is an error.
    pub fn start_run(&mut self) -> AppResult<()> {
        if self.is_running() {
            return Err(AppError::RunInProgress);
        }
        let weapon = self.selected_weapon.ok_or(AppError::NoWeaponSelected)?;
        self.destroy();

        // Successive runs draw from successive seeds.
        let config = SimConfig {
            seed: self.config.seed.wrapping_add(self.runs_started),
            tuning: self.config.tuning.clone(),
        };
        self.runs_started += 1;

        let mut engine = SimulationEngine::new(config);
        engine.start_run(weapon);
        self.session = Some(engine);
        Ok(())
    }

    /// Queue a command for the next frame.
    pub fn send(&mut self, command: PlayerCommand) -> AppResult<()> {
        let engine = self.session.as_mut().ok_or(AppError::NoActiveRun)?;
        engine.queue_command(command);
        Ok(())
    }

    /// Advance the session by one frame.
    pub fn frame(&mut self, dt: f32) -> AppResult<GameStateSnapshot> {
        let engine = self.session.as_mut().ok_or(AppError::NoActiveRun)?;
        let snapshot = engine.tick(dt);
        if let Some(summary) = snapshot.summary {
            self.last_summary = Some(summary);
        }
        Ok(snapshot)
    }

    /// Drop the session. Safe to call with no session.
    pub fn destroy(&mut self) {
        if let Some(engine) = self.session.take() {
            if let Some(summary) = engine.run_summary() {
                self.last_summary = Some(summary);
            }
            log::debug!("session destroyed at t={:.1}s", engine.time().elapsed_secs);
        }
    }

    /// Hand the session over, e.g. to a game loop thread.
    pub fn take_session(&mut self) -> Option<SimulationEngine> {
        self.session.take()
    }

    pub fn session(&self) -> Option<&SimulationEngine> {
        self.session.as_ref()
    }

    pub fn last_summary(&self) -> Option<RunSummary> {
        self.last_summary
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}
