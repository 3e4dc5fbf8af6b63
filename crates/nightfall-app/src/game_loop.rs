//! Game loop thread: drives a run in real time at 60Hz.
//!
//! The thread owns the engine. Commands arrive via an `mpsc` channel and the
//! latest snapshot is stored in shared state for polling. Each frame passes
//! the measured wall-clock dt; the engine clamps it. The loop stops on
//! `Shutdown`, on channel disconnect, or when the run ends.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use nightfall_core::constants::NOMINAL_FRAME_RATE;
use nightfall_core::enums::GamePhase;
use nightfall_core::state::{GameStateSnapshot, RunSummary};
use nightfall_sim::engine::SimulationEngine;

use crate::autopilot::Autopilot;
use crate::state::{AppError, AppResult, GameLoopCommand};

/// Nominal duration of one frame.
pub const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / NOMINAL_FRAME_RATE as u64);

/// Handle to a running game loop thread.
pub struct GameLoopHandle {
    command_tx: mpsc::Sender<GameLoopCommand>,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    thread: JoinHandle<Option<RunSummary>>,
}

impl GameLoopHandle {
    /// Forward a player command to the loop.
    pub fn send(&self, command: nightfall_core::commands::PlayerCommand) -> AppResult<()> {
        self.command_tx
            .send(GameLoopCommand::PlayerCommand(command))
            .map_err(|_| AppError::ChannelClosed)
    }

    /// Latest snapshot, if the loop has ticked at least once.
    pub fn latest_snapshot(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|lock| lock.clone())
    }

    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    /// Stop the loop and wait for it. Returns the run summary if the run
    /// ended before the stop.
    pub fn shutdown(self) -> Option<RunSummary> {
        // The loop may already have exited on its own.
        let _ = self.command_tx.send(GameLoopCommand::Shutdown);
        self.join()
    }

    /// Wait for the loop to stop by itself.
    pub fn join(self) -> Option<RunSummary> {
        self.thread.join().unwrap_or_else(|_| {
            log::error!("game loop thread panicked");
            None
        })
    }
}

/// Spawns the game loop for `engine` in a new thread. With an autopilot the
/// loop also plays the run itself.
pub fn spawn_game_loop(
    engine: SimulationEngine,
    autopilot: Option<Autopilot>,
) -> AppResult<GameLoopHandle> {
    let (command_tx, command_rx) = mpsc::channel::<GameLoopCommand>();
    let latest_snapshot = Arc::new(Mutex::new(None));
    let shared = Arc::clone(&latest_snapshot);

    let thread = std::thread::Builder::new()
        .name("nightfall-game-loop".into())
        .spawn(move || run_game_loop(engine, autopilot, command_rx, &shared))?;

    Ok(GameLoopHandle {
        command_tx,
        latest_snapshot,
        thread,
    })
}

/// The game loop. Runs until Shutdown, channel disconnect or run end.
fn run_game_loop(
    mut engine: SimulationEngine,
    autopilot: Option<Autopilot>,
    command_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) -> Option<RunSummary> {
    let mut last_frame = Instant::now();
    let mut next_frame_time = last_frame + FRAME_DURATION;

    loop {
        // 1. Drain all pending commands
        loop {
            match command_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(command)) => engine.queue_command(command),
                Ok(GameLoopCommand::Shutdown) => return engine.run_summary(),
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return engine.run_summary(),
            }
        }

        // 2. Advance one frame by the measured dt
        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;
        let snapshot = engine.tick(dt);

        // 3. Scripted input for the next frame
        if let Some(pilot) = &autopilot {
            engine.queue_commands(pilot.plan(&snapshot));
        }

        // 4. Store latest snapshot for polling
        let ended = snapshot.phase == GamePhase::Ended;
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }
        if ended {
            log::debug!("game loop stopping: run ended");
            return engine.run_summary();
        }

        // 5. Sleep until next frame
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
            next_frame_time += FRAME_DURATION;
        } else {
            // Behind schedule; don't try to catch up.
            next_frame_time = now + FRAME_DURATION;
        }
    }
}
