#![deny(unsafe_code)]
//! Simulation registry: maps simulation names to implementations.
//!
//! Sits between `aerowave-core` (which defines the `Simulation` trait) and the
//! geometry and field crates. The CLI, and any display front end, construct
//! simulations through [`SimulationKind`] instead of duplicating dispatch.

pub mod airflow;
pub mod scatter;

use aerowave_core::{RandomSource, Scene, Seed, SimError, Simulation};
use serde_json::Value;

pub use airflow::AirflowSimulation;
pub use scatter::{ScatterRun, ScatterSimulation, ShapeParameters};

/// All available simulation names.
const SIMULATION_NAMES: &[&str] = &["airflow", "scatter"];

/// Enumeration of all available simulations.
pub enum SimulationKind {
    /// Airframe point cloud with a flow field.
    Airflow(AirflowSimulation),
    /// Target shape with incoming and scattered waves.
    Scatter(ScatterSimulation),
}

impl SimulationKind {
    /// Constructs a simulation by name from a JSON params object.
    ///
    /// Returns `SimError::UnknownSimulation` if the name is not recognized,
    /// or the simulation's own validation error.
    pub fn from_name(name: &str, params: &Value) -> Result<Self, SimError> {
        match name {
            "airflow" => Ok(SimulationKind::Airflow(AirflowSimulation::from_json(params)?)),
            "scatter" => Ok(SimulationKind::Scatter(ScatterSimulation::from_json(params)?)),
            _ => Err(SimError::UnknownSimulation(name.to_string())),
        }
    }

    /// Constructs the simulation a [`Seed`] describes.
    pub fn from_seed(seed: &Seed) -> Result<Self, SimError> {
        seed.validate()?;
        Self::from_name(&seed.simulation, &seed.params)
    }

    /// Builds the scene a [`Seed`] describes, with its own random source.
    pub fn replay(seed: &Seed) -> Result<Scene, SimError> {
        let sim = Self::from_seed(seed)?;
        let mut rng = seed.rng();
        sim.build(&mut rng)
    }

    /// Returns a slice of all recognized simulation names.
    pub fn list_simulations() -> &'static [&'static str] {
        SIMULATION_NAMES
    }
}

impl Simulation for SimulationKind {
    fn name(&self) -> &'static str {
        match self {
            SimulationKind::Airflow(s) => s.name(),
            SimulationKind::Scatter(s) => s.name(),
        }
    }

    fn build(&self, rng: &mut dyn RandomSource) -> Result<Scene, SimError> {
        match self {
            SimulationKind::Airflow(s) => s.build(rng),
            SimulationKind::Scatter(s) => s.build(rng),
        }
    }

    fn params(&self) -> Value {
        match self {
            SimulationKind::Airflow(s) => s.params(),
            SimulationKind::Scatter(s) => s.params(),
        }
    }

    fn param_schema(&self) -> Value {
        match self {
            SimulationKind::Airflow(s) => s.param_schema(),
            SimulationKind::Scatter(s) => s.param_schema(),
        }
    }
}
