//! Runner settings
//!
//! Loaded from a JSON file; every field falls back to its default.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{FINISH_DELAY, MAX_STEP};
use crate::error::{Result, SimError};
use crate::sim::{ActorDictionary, ActorKind};

/// Simulation and runner settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed for coin phases (`None` picks a fresh seed per run)
    pub seed: Option<u64>,

    // === Timing ===
    /// Time advanced per runner frame (seconds)
    pub time_step: f64,
    /// Largest single simulation step (seconds)
    pub max_step: f64,
    /// Linger time after a level is won or lost (seconds)
    pub finish_delay: f64,
    /// Give up on a level after this long (seconds)
    pub max_level_time: f64,

    // === Level symbols ===
    /// Plan symbol to actor kind name, e.g. `"@": "player"`
    pub actors: BTreeMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,

            time_step: 1.0 / 60.0,
            max_step: MAX_STEP,
            finish_delay: FINISH_DELAY,
            max_level_time: 30.0,

            actors: ActorDictionary::classic()
                .iter()
                .map(|(symbol, kind)| (symbol.to_string(), kind.as_str().to_string()))
                .collect(),
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reject timings that would stall the runner
    pub fn validate(&self) -> Result<()> {
        for (expected, value) in [
            ("positive time_step", self.time_step),
            ("positive max_step", self.max_step),
            ("positive max_level_time", self.max_level_time),
        ] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(SimError::type_argument(expected, value.to_string()));
            }
        }
        // Zero is allowed: the level finishes on the step after its outcome
        if !(self.finish_delay >= 0.0 && self.finish_delay.is_finite()) {
            return Err(SimError::type_argument(
                "non-negative finish_delay",
                self.finish_delay.to_string(),
            ));
        }
        Ok(())
    }

    /// Seed to use for this run
    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    /// Validate the symbol table into an `ActorDictionary`.
    ///
    /// Symbols must be exactly one character and kinds must name a known actor.
    pub fn actor_dictionary(&self) -> Result<ActorDictionary> {
        let mut dictionary = ActorDictionary::new();
        for (symbol, name) in &self.actors {
            let mut chars = symbol.chars();
            let (Some(ch), None) = (chars.next(), chars.next()) else {
                return Err(SimError::type_argument(
                    "single-character actor symbol",
                    format!("{symbol:?}"),
                ));
            };
            let Some(kind) = ActorKind::from_name(name) else {
                return Err(SimError::type_argument("actor kind name", name.clone()));
            };
            if crate::sim::Obstacle::from_symbol(ch).is_some() {
                log::warn!("Actor symbol {:?} shadows a terrain symbol", ch);
            }
            dictionary.insert(ch, kind);
        }
        Ok(dictionary)
    }
}
