//! Lava Run - a tile-based platformer simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (vectors, actors, level grid, parser, tick driver)
//! - `levels`: Decoding level-source documents into plans
//! - `settings`: Data-driven configuration
//! - `error`: Error taxonomy for untyped input

pub mod error;
pub mod levels;
pub mod settings;
pub mod sim;

pub use error::{Result, SimError};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Largest time slice the tick driver advances in one go (seconds)
    pub const MAX_STEP: f64 = 0.05;
    /// Most steps a single tick runs; time beyond that is dropped
    pub const MAX_SUBSTEPS: u32 = 1024;
    /// Seconds a level lingers after being won or lost
    pub const FINISH_DELAY: f64 = 1.0;

    /// Default actor footprint
    pub const ACTOR_SIZE: (f64, f64) = (1.0, 1.0);

    /// Player footprint and spawn offset (feet rest on the cell bottom)
    pub const PLAYER_SIZE: (f64, f64) = (0.8, 1.5);
    pub const PLAYER_OFFSET: (f64, f64) = (0.0, -0.5);

    /// Fireball footprint and per-variant velocities (cells per second)
    pub const FIREBALL_SIZE: (f64, f64) = (1.0, 1.0);
    pub const HORIZONTAL_FIREBALL_SPEED: (f64, f64) = (2.0, 0.0);
    pub const VERTICAL_FIREBALL_SPEED: (f64, f64) = (0.0, 2.0);
    pub const FIRE_RAIN_SPEED: (f64, f64) = (0.0, 3.0);

    /// Coin footprint, anchor offset inside its cell, and bobbing spring
    pub const COIN_SIZE: (f64, f64) = (0.6, 0.6);
    pub const COIN_OFFSET: (f64, f64) = (0.2, 0.1);
    pub const SPRING_SPEED: f64 = 8.0;
    pub const SPRING_DIST: f64 = 0.07;
}
