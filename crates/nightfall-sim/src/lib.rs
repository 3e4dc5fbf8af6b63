//! Simulation core for Nightfall.
//!
//! Owns the hecs ECS world, advances a run by variable frame steps,
//! and produces GameStateSnapshots for the host.

pub mod effects;
pub mod engine;
pub mod player;
pub mod systems;
pub mod upgrades;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use nightfall_core as core;
pub use player::Player;
