//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions that take `&mut World` (or `&World` for
//! read-only passes). They do not own state; engine-owned state is passed in.

pub mod boss;
pub mod cleanup;
pub mod collision;
pub mod combat;
pub mod effects;
pub mod movement;
pub mod orbitals;
pub mod snapshot;
pub mod spawner;
pub mod targeting;
