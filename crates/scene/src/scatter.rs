//! Radar-style scatter scene: a target shape, random incoming waves, their
//! ground-plane reflections and the ground-hit percentage.

use aerowave_core::params::{param_f64, param_string, param_usize, require_count, require_positive};
use aerowave_core::{RandomSource, Scene, ShapeKind, SimError, Simulation};
use aerowave_field::stats::{summarize, ReflectionSummary};
use aerowave_field::wave::{sample_waves, Pairing, WaveSet};
use aerowave_geometry::Geometry;
use log::info;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Propagation speed used to turn frequency into wavelength, in m/s.
pub const SPEED_OF_LIGHT: f64 = 3e8;

/// Default target size.
const DEFAULT_SIZE: f64 = 1.0;
/// Default radar frequency in Hz.
const DEFAULT_FREQUENCY: f64 = 1e10;
/// Default number of rays per set.
const DEFAULT_NUM_POINTS: usize = 1000;
/// Default angular resolution of the target's round parts.
const DEFAULT_RESOLUTION: usize = 50;

/// Parameters of a scatter scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeParameters {
    pub shape: ShapeKind,
    pub size: f64,
    /// Only used for the displayed wavelength.
    pub frequency: f64,
    pub num_points: usize,
    pub resolution: usize,
    pub pairing: Pairing,
}

impl Default for ShapeParameters {
    fn default() -> Self {
        Self {
            shape: ShapeKind::default(),
            size: DEFAULT_SIZE,
            frequency: DEFAULT_FREQUENCY,
            num_points: DEFAULT_NUM_POINTS,
            resolution: DEFAULT_RESOLUTION,
            pairing: Pairing::default(),
        }
    }
}

impl ShapeParameters {
    /// Reads parameters from a JSON object, falling back to defaults.
    ///
    /// Returns `SimError::UnknownShape` or `SimError::InvalidParameter` for
    /// unrecognized `shape` or `pairing` names and mistyped values. Numeric
    /// ranges are checked by
    /// [`validate`](Self::validate).
    pub fn from_json(params: &Value) -> Result<Self, SimError> {
        Self::default().merged(params)
    }

    /// Applies the keys present in `overrides` on top of `self`.
    ///
    /// Missing or `null` keys keep their current value. A key of the wrong
    /// JSON type, or a count that is fractional or negative, is
    /// `SimError::InvalidParameter` naming that key.
    pub fn merged(&self, overrides: &Value) -> Result<Self, SimError> {
        Ok(Self {
            shape: ShapeKind::from_name(&param_string(overrides, "shape", self.shape.name())?)?,
            size: param_f64(overrides, "size", self.size)?,
            frequency: param_f64(overrides, "frequency", self.frequency)?,
            num_points: param_usize(overrides, "num_points", self.num_points)?,
            resolution: param_usize(overrides, "resolution", self.resolution)?,
            pairing: Pairing::from_name(&param_string(
                overrides,
                "pairing",
                self.pairing.name(),
            )?)?,
        })
    }

    /// Rejects non-positive size or frequency and zero counts.
    pub fn validate(&self) -> Result<(), SimError> {
        require_positive("size", self.size)?;
        require_positive("frequency", self.frequency)?;
        require_count("num_points", self.num_points)?;
        require_count("resolution", self.resolution)?;
        Ok(())
    }

    /// Radar wavelength in meters.
    pub fn wavelength(&self) -> f64 {
        SPEED_OF_LIGHT / self.frequency
    }
}

/// Everything a scatter run produced, before flattening into a [`Scene`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterRun {
    pub geometry: Geometry,
    pub waves: WaveSet,
    pub summary: ReflectionSummary,
}

/// Scatter scene generator.
#[derive(Debug, Clone, Default)]
pub struct ScatterSimulation {
    params: ShapeParameters,
}

impl ScatterSimulation {
    /// Returns `SimError::InvalidParameter` if `params` fail validation.
    pub fn new(params: ShapeParameters) -> Result<Self, SimError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn from_json(params: &Value) -> Result<Self, SimError> {
        Self::new(ShapeParameters::from_json(params)?)
    }

    pub fn shape_parameters(&self) -> &ShapeParameters {
        &self.params
    }

    /// Builds the target, draws the rays and summarizes the reflections.
    ///
    /// With [`Pairing::Paired`] the summary counts the scattered rays just
    /// drawn; with [`Pairing::Independent`] it takes a fresh batch of draws.
    pub fn run(&self, rng: &mut dyn RandomSource) -> Result<ScatterRun, SimError> {
        let p = &self.params;
        let geometry = aerowave_geometry::build(p.shape, p.size, p.resolution)?;
        let waves = sample_waves(rng, p.size, p.num_points, p.pairing)?;
        let summary = match p.pairing {
            Pairing::Paired => ReflectionSummary::from_scattered(&waves.scattered)?,
            Pairing::Independent => summarize(rng, p.size, p.num_points)?,
        };
        info!(
            "scatter {}: {} points, {} rays, {summary}",
            p.shape,
            geometry.cloud.len(),
            waves.incoming.len()
        );
        Ok(ScatterRun {
            geometry,
            waves,
            summary,
        })
    }
}

impl Simulation for ScatterSimulation {
    fn name(&self) -> &'static str {
        "scatter"
    }

    fn build(&self, rng: &mut dyn RandomSource) -> Result<Scene, SimError> {
        let run = self.run(rng)?;
        Ok(Scene {
            cloud: run.geometry.cloud,
            field: None,
            incoming: run.waves.incoming,
            scattered: run.waves.scattered,
            overlay: vec![
                run.summary.to_string(),
                format!("Wavelength: {:.4} m", self.params.wavelength()),
            ],
        })
    }

    fn params(&self) -> Value {
        json!({
            "shape": self.params.shape.name(),
            "size": self.params.size,
            "frequency": self.params.frequency,
            "num_points": self.params.num_points,
            "resolution": self.params.resolution,
            "pairing": self.params.pairing.name(),
        })
    }

    fn param_schema(&self) -> Value {
        json!({
            "shape": {
                "type": "string",
                "default": ShapeKind::default().name(),
                "enum": ShapeKind::list_names(),
                "description": "Target geometry"
            },
            "size": {
                "type": "number",
                "default": DEFAULT_SIZE,
                "exclusive_min": 0.0,
                "description": "Target scale and wave source radius"
            },
            "frequency": {
                "type": "number",
                "default": DEFAULT_FREQUENCY,
                "exclusive_min": 0.0,
                "description": "Radar frequency in Hz; sets the displayed wavelength"
            },
            "num_points": {
                "type": "integer",
                "default": DEFAULT_NUM_POINTS,
                "min": 1,
                "description": "Number of incoming and scattered rays"
            },
            "resolution": {
                "type": "integer",
                "default": DEFAULT_RESOLUTION,
                "min": 1,
                "description": "Angular resolution of round target parts"
            },
            "pairing": {
                "type": "string",
                "default": Pairing::default().name(),
                "enum": Pairing::list_names(),
                "description": "Whether scattered rays reflect the drawn incoming rays"
            }
        })
    }
}
