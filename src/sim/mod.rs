//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied time deltas only, split into bounded steps
//! - Seeded RNG only
//! - Stable iteration order (actor insertion order)
//! - No rendering, input, or I/O dependencies

pub mod actor;
pub mod level;
pub mod parser;
pub mod tick;
pub mod vector;

pub use actor::{Actor, ActorId, ActorKind};
pub use level::{Grid, Level, Obstacle, Outcome, Touch};
pub use parser::{ActorDictionary, LevelParser};
pub use tick::{resolve_player_contacts, step_actors, tick, tick_with_max_step};
pub use vector::Vector;
