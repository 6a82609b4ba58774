//! Airflow scene: the airframe point cloud with a flow vector at every point.
//!
//! Fully deterministic; the random source is not touched.

use aerowave_core::params::{param_f64, param_string, param_usize};
use aerowave_core::{RandomSource, Scene, SimError, Simulation};
use aerowave_field::flow::FlowKind;
use aerowave_geometry::airframe::{
    Airframe, DEFAULT_HEIGHT, DEFAULT_LENGTH, DEFAULT_RESOLUTION, DEFAULT_WING_SPAN,
    DEFAULT_WING_WIDTH,
};
use log::info;
use serde_json::{json, Value};

/// Airflow scene generator.
#[derive(Debug, Clone, Default)]
pub struct AirflowSimulation {
    airframe: Airframe,
    flow: FlowKind,
}

impl AirflowSimulation {
    /// Returns `SimError::InvalidParameter` if the airframe fails validation.
    pub fn new(airframe: Airframe, flow: FlowKind) -> Result<Self, SimError> {
        airframe.validate()?;
        Ok(Self { airframe, flow })
    }

    /// Reads `resolution`, `wing_span`, `wing_width`, `length`, `height` and
    /// `field` from a JSON object, falling back to defaults for missing keys.
    /// Mistyped values are `SimError::InvalidParameter` naming the key.
    pub fn from_json(params: &Value) -> Result<Self, SimError> {
        let airframe = Airframe {
            resolution: param_usize(params, "resolution", DEFAULT_RESOLUTION)?,
            wing_span: param_f64(params, "wing_span", DEFAULT_WING_SPAN)?,
            wing_width: param_f64(params, "wing_width", DEFAULT_WING_WIDTH)?,
            length: param_f64(params, "length", DEFAULT_LENGTH)?,
            height: param_f64(params, "height", DEFAULT_HEIGHT)?,
        };
        let flow = FlowKind::from_name(&param_string(params, "field", FlowKind::default().name())?)?;
        Self::new(airframe, flow)
    }

    pub fn airframe(&self) -> &Airframe {
        &self.airframe
    }

    pub fn flow(&self) -> FlowKind {
        self.flow
    }
}

impl Simulation for AirflowSimulation {
    fn name(&self) -> &'static str {
        "airflow"
    }

    fn build(&self, _rng: &mut dyn RandomSource) -> Result<Scene, SimError> {
        let cloud = self.airframe.build()?;
        let field = self.flow.source().sample_cloud(&cloud);
        let peak = field.max_magnitude();
        info!(
            "airflow: {} points, {} field, peak speed {peak:.3}",
            cloud.len(),
            self.flow.name()
        );
        let mut scene = Scene::from_cloud(cloud).with_field(field)?;
        scene
            .overlay
            .push(format!("{} field, peak speed {peak:.3}", self.flow.name()));
        Ok(scene)
    }

    fn params(&self) -> Value {
        json!({
            "resolution": self.airframe.resolution,
            "wing_span": self.airframe.wing_span,
            "wing_width": self.airframe.wing_width,
            "length": self.airframe.length,
            "height": self.airframe.height,
            "field": self.flow.name(),
        })
    }

    fn param_schema(&self) -> Value {
        json!({
            "resolution": {
                "type": "integer",
                "default": DEFAULT_RESOLUTION,
                "min": 1,
                "description": "Fuselage angles and stations; the wing grid scales with it"
            },
            "wing_span": {
                "type": "number",
                "default": DEFAULT_WING_SPAN,
                "exclusive_min": 0.0,
                "description": "Wing half-span"
            },
            "wing_width": {
                "type": "number",
                "default": DEFAULT_WING_WIDTH,
                "exclusive_min": 0.0,
                "description": "Wing half-chord"
            },
            "length": {
                "type": "number",
                "default": DEFAULT_LENGTH,
                "exclusive_min": 0.0,
                "description": "Fuselage length; the wing sits at half of it"
            },
            "height": {
                "type": "number",
                "default": DEFAULT_HEIGHT,
                "exclusive_min": 0.0,
                "description": "Fuselage radius"
            },
            "field": {
                "type": "string",
                "default": FlowKind::default().name(),
                "enum": FlowKind::list_names(),
                "description": "Flow field sampled at every airframe point"
            }
        })
    }
}
