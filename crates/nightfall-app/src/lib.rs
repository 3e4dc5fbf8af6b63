//! Host layer for Nightfall.
//!
//! Owns run sessions, drives the engine in real time on a game loop
//! thread, and provides a scripted autopilot for headless play.

pub mod autopilot;
pub mod game_loop;
pub mod state;

pub use nightfall_core as core;
pub use nightfall_sim as sim;
