//! The `Scene` handed to display collaborators, and the `Simulation` trait
//! that produces it.
//!
//! A scene is rebuilt from scratch on every parameter change. Nothing in it
//! refers back to the simulation that made it, so a display can simply drop
//! the old scene and draw the new one.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cloud::PointCloud;
use crate::error::SimError;
use crate::field::VectorField;
use crate::prng::RandomSource;
use crate::ray::RaySegment;

/// Everything a display collaborator needs to draw one frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Geometry points, drawn as the model.
    pub cloud: PointCloud,
    /// Optional per-point vectors, drawn as glyphs.
    pub field: Option<VectorField>,
    /// Incoming wave lines.
    pub incoming: Vec<RaySegment>,
    /// Scattered wave lines.
    pub scattered: Vec<RaySegment>,
    /// Text lines for an on-screen overlay.
    pub overlay: Vec<String>,
}

impl Scene {
    /// Creates a scene holding only geometry.
    pub fn from_cloud(cloud: PointCloud) -> Self {
        Self {
            cloud,
            ..Self::default()
        }
    }

    /// Attaches a vector field.
    ///
    /// Returns `SimError::LengthMismatch` if the field is not aligned with the
    /// scene's cloud.
    pub fn with_field(mut self, field: VectorField) -> Result<Self, SimError> {
        if field.len() != self.cloud.len() {
            return Err(SimError::LengthMismatch {
                points: self.cloud.len(),
                vectors: field.len(),
            });
        }
        self.field = Some(field);
        Ok(self)
    }
}

/// A parameterized scene generator.
///
/// Object-safe: the registry hands out `Box<dyn Simulation>` and callers pass
/// their random source as `&mut dyn RandomSource`.
pub trait Simulation {
    /// Registry name of the simulation.
    fn name(&self) -> &'static str;

    /// Builds a fresh scene, drawing all randomness from `rng`.
    fn build(&self, rng: &mut dyn RandomSource) -> Result<Scene, SimError>;

    /// Current parameter values as a JSON object.
    fn params(&self) -> Value;

    /// Schema of every parameter: type, default, minimum and description.
    fn param_schema(&self) -> Value;
}

/// The receiving end of a scene: a window, a file, a test recorder.
///
/// Implementations report setup or delivery failure as
/// `SimError::RenderingUnavailable`.
pub trait SceneSink {
    fn present(&mut self, scene: &Scene) -> Result<(), SimError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prng::Xorshift64;
    use glam::DVec3;
    use serde_json::json;

    /// Single-point simulation that jitters its point with the rng.
    struct JitterSim {
        amplitude: f64,
    }

    impl Simulation for JitterSim {
        fn name(&self) -> &'static str {
            "jitter"
        }

        fn build(&self, rng: &mut dyn RandomSource) -> Result<Scene, SimError> {
            let a = self.amplitude;
            let p = DVec3::new(
                rng.next_range(-a, a),
                rng.next_range(-a, a),
                rng.next_range(-a, a),
            );
            let cloud = PointCloud::from_points(vec![p]);
            let field = VectorField::aligned(&cloud, vec![-p])?;
            Scene::from_cloud(cloud).with_field(field)
        }

        fn params(&self) -> Value {
            json!({"amplitude": self.amplitude})
        }

        fn param_schema(&self) -> Value {
            json!({"amplitude": {"type": "number", "default": 1.0, "min": 0.0}})
        }
    }

    #[derive(Default)]
    struct Recorder {
        frames: Vec<Scene>,
    }

    impl SceneSink for Recorder {
        fn present(&mut self, scene: &Scene) -> Result<(), SimError> {
            self.frames.push(scene.clone());
            Ok(())
        }
    }

    struct Offline;

    impl SceneSink for Offline {
        fn present(&mut self, _scene: &Scene) -> Result<(), SimError> {
            Err(SimError::RenderingUnavailable("no display attached".into()))
        }
    }

    #[test]
    fn simulation_trait_is_object_safe() {
        let sim: Box<dyn Simulation> = Box::new(JitterSim { amplitude: 1.0 });
        let mut rng = Xorshift64::new(1);
        let scene = sim.build(&mut rng).unwrap();
        assert_eq!(scene.cloud.len(), 1);
        assert_eq!(sim.name(), "jitter");
    }

    #[test]
    fn same_seed_builds_identical_scenes() {
        let sim = JitterSim { amplitude: 2.0 };
        let a = sim.build(&mut Xorshift64::new(9)).unwrap();
        let b = sim.build(&mut Xorshift64::new(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn params_and_schema_share_keys() {
        let sim = JitterSim { amplitude: 0.5 };
        assert_eq!(sim.params()["amplitude"], 0.5);
        assert_eq!(sim.param_schema()["amplitude"]["type"], "number");
    }

    #[test]
    fn with_field_rejects_misaligned_field() {
        let cloud = PointCloud::from_points(vec![DVec3::X, DVec3::Y]);
        let field = VectorField::aligned(&PointCloud::from_points(vec![DVec3::Z]), vec![DVec3::Z])
            .unwrap();
        let err = Scene::from_cloud(cloud).with_field(field).unwrap_err();
        assert!(matches!(err, SimError::LengthMismatch { points: 2, vectors: 1 }));
    }

    #[test]
    fn sink_receives_each_rebuilt_scene() {
        let sim = JitterSim { amplitude: 1.0 };
        let mut rng = Xorshift64::new(3);
        let mut sink = Recorder::default();
        for _ in 0..3 {
            sink.present(&sim.build(&mut rng).unwrap()).unwrap();
        }
        assert_eq!(sink.frames.len(), 3);
        assert_ne!(sink.frames[0], sink.frames[1]);
    }

    #[test]
    fn failing_sink_reports_rendering_unavailable() {
        let err = Offline.present(&Scene::default()).unwrap_err();
        assert!(matches!(err, SimError::RenderingUnavailable(_)));
    }
}
