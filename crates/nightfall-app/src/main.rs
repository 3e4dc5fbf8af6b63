use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;

use nightfall_app::autopilot::Autopilot;
use nightfall_app::game_loop::{self, FRAME_DURATION};
use nightfall_app::state::{AppError, AppResult, AppState};
use nightfall_core::config::Tuning;
use nightfall_core::state::{HudSnapshot, RunSummary};
use nightfall_sim::engine::SimConfig;

/// Play a Nightfall run with the autopilot and print its summary.
#[derive(Debug, Parser)]
#[command(name = "nightfall", version, about, long_about = None)]
struct Cli {
    /// Weapon key: shard, sword, knife, crossbow, bow or staff.
    #[arg(short, long, default_value = "shard")]
    weapon: String,
    /// RNG seed for the run.
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Stop after this many seconds if the player is still alive.
    #[arg(short, long, value_name = "SECONDS", default_value_t = 600.0)]
    duration: f32,
    /// TOML file overriding tuning values.
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Drive the run on the real-time game loop instead of as fast as possible.
    #[arg(long)]
    realtime: bool,
}

fn main() -> Result<(), AppError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let tuning = match &cli.config {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };
    let mut app = AppState::new(SimConfig {
        seed: cli.seed,
        tuning,
    });
    app.select_weapon_key(&cli.weapon);
    app.start_run()?;

    let summary = if cli.realtime {
        run_realtime(&mut app, cli.duration)?
    } else {
        run_headless(&mut app, cli.duration)?
    };

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("failed to encode summary: {e}"),
    }
    Ok(())
}

/// Step the run at a fixed 60Hz dt with no sleeping.
fn run_headless(app: &mut AppState, duration: f32) -> AppResult<RunSummary> {
    let pilot = Autopilot::default();
    let dt = FRAME_DURATION.as_secs_f32();
    loop {
        let snapshot = app.frame(dt)?;
        if let Some(summary) = snapshot.summary {
            return Ok(summary);
        }
        if snapshot.hud.elapsed_secs >= duration {
            log::info!("time limit reached at {:.0}s", snapshot.hud.elapsed_secs);
            app.destroy();
            return Ok(summary_from_hud(&snapshot.hud));
        }
        for command in pilot.plan(&snapshot) {
            app.send(command)?;
        }
    }
}

/// Hand the session to the game loop thread and poll until it finishes or
/// `duration` wall-clock seconds pass.
fn run_realtime(app: &mut AppState, duration: f32) -> AppResult<RunSummary> {
    let engine = app.take_session().ok_or(AppError::NoActiveRun)?;
    let handle = game_loop::spawn_game_loop(engine, Some(Autopilot::default()))?;

    let deadline = Instant::now() + Duration::from_secs_f32(duration.max(0.0).min(86_400.0));
    while !handle.is_finished() && Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(250));
        if let Some(snapshot) = handle.latest_snapshot() {
            log::debug!(
                "{:?} t={:.0}s hp={:.0} kills={}",
                snapshot.phase,
                snapshot.hud.elapsed_secs,
                snapshot.hud.health,
                snapshot.hud.kill_count
            );
        }
    }

    let latest = handle.latest_snapshot();
    let summary = handle.shutdown();
    Ok(summary
        .or_else(|| latest.map(|s| summary_from_hud(&s.hud)))
        .unwrap_or_default())
}

fn summary_from_hud(hud: &HudSnapshot) -> RunSummary {
    RunSummary {
        time_survived: hud.elapsed_secs.round() as u32,
        kills: hud.kill_count,
        level: hud.level,
    }
}
