//! Core types and definitions for the Nightfall survivor simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, state snapshots, events, the weapon and upgrade
//! catalog, tuning and constants. It has no dependency on any runtime
//! framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod math;
pub mod presets;
pub mod state;
pub mod types;
pub mod upgrades;
pub mod weapons;

#[cfg(test)]
mod tests;
