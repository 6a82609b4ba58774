//! Reproducible record of a scene.
//!
//! A [`Seed`] captures everything needed to rebuild a scene bit-for-bit:
//! simulation name, parameter overrides and PRNG seed.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::prng::Xorshift64;

/// Reproducible specification of one scene.
///
/// Two identical `Seed` values fed to the same binary produce identical
/// point clouds, vector fields and ray sets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Seed {
    pub simulation: String,
    pub params: serde_json::Value,
    pub seed: u64,
}

impl Seed {
    /// Creates a Seed with empty params (`{}`), i.e. all defaults.
    pub fn new(simulation: &str, seed: u64) -> Self {
        Self {
            simulation: simulation.to_string(),
            params: serde_json::Value::Object(serde_json::Map::new()),
            seed,
        }
    }

    /// Checks that a simulation is named and that params is a JSON object.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.simulation.trim().is_empty() {
            return Err(SimError::UnknownSimulation(self.simulation.clone()));
        }
        if !self.params.is_object() {
            return Err(SimError::invalid("params", "must be a JSON object"));
        }
        debug!("seed for '{}' is valid (seed {})", self.simulation, self.seed);
        Ok(())
    }

    /// A fresh random source positioned at the start of this seed's sequence.
    pub fn rng(&self) -> Xorshift64 {
        Xorshift64::new(self.seed)
    }
}
