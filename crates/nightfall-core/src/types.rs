//! Fundamental geometric and simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// 2D world vector (units, +x = East, +y = South as on screen).
pub type Vector2 = Vec2;

/// World position of an entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec2);

/// Linear velocity of an entity (units/s).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec2);

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of simulated (non-paused) ticks.
    pub tick: u64,
    /// Elapsed run time in seconds.
    pub elapsed_secs: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    /// Distance to another position.
    pub fn distance_to(&self, other: &Position) -> f32 {
        self.0.distance(other.0)
    }
}

impl Velocity {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    /// Speed magnitude.
    pub fn speed(&self) -> f32 {
        self.0.length()
    }
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// Four-way movement input from the host's keyboard layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveInput {
    pub const NONE: MoveInput = MoveInput {
        up: false,
        down: false,
        left: false,
        right: false,
    };

    /// Unit direction for the held keys. Opposing keys cancel; nothing held
    /// yields the zero vector.
    pub fn direction(&self) -> Vec2 {
        let mut axis = Vec2::ZERO;
        if self.up {
            axis.y -= 1.0;
        }
        if self.down {
            axis.y += 1.0;
        }
        if self.left {
            axis.x -= 1.0;
        }
        if self.right {
            axis.x += 1.0;
        }
        crate::math::normalize(axis)
    }
}

/// How many hits a projectile survives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pierce {
    /// Survives this many additional hits after the first.
    Finite(u32),
    /// Never destroyed by hit count (melee sweeps).
    Infinite,
}

impl Default for Pierce {
    fn default() -> Self {
        Pierce::Finite(0)
    }
}

impl Pierce {
    /// Register one confirmed hit. Returns `true` if the projectile survives it.
    pub fn register_hit(&mut self) -> bool {
        match self {
            Pierce::Infinite => true,
            Pierce::Finite(0) => false,
            Pierce::Finite(n) => {
                *n -= 1;
                true
            }
        }
    }

    /// Add extra penetrations. Infinite stays infinite.
    pub fn extend(self, extra: u32) -> Pierce {
        match self {
            Pierce::Infinite => Pierce::Infinite,
            Pierce::Finite(n) => Pierce::Finite(n.saturating_add(extra)),
        }
    }
}
