//! Closed-form flow fields over a point cloud.
//!
//! A [`FlowSource`] maps a position to a vector with no hidden state, so a
//! field is fully determined by the cloud it is sampled on.

use aerowave_core::{Point3, PointCloud, SimError, Vector3, VectorField};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Softening term of the radial sink; keeps the origin finite.
pub const SINK_EPSILON: f64 = 0.1;
/// Offset added to the drift stream's speed.
pub const DRIFT_OFFSET: f64 = 0.1;

/// A deterministic vector field in 3D.
pub trait FlowSource {
    /// The vector at `p`.
    fn sample(&self, p: Point3) -> Vector3;

    /// One vector per cloud point, in cloud order.
    fn sample_cloud(&self, cloud: &PointCloud) -> VectorField {
        VectorField::from_cloud(cloud, |p| self.sample(p))
    }
}

/// Radial sink: `-p / (|p|² + epsilon)`.
///
/// Points at the origin; magnitude `r / (r² + epsilon)` peaks at
/// `r = sqrt(epsilon)` and decays beyond it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialSink {
    pub epsilon: f64,
}

impl Default for RadialSink {
    fn default() -> Self {
        Self {
            epsilon: SINK_EPSILON,
        }
    }
}

impl FlowSource for RadialSink {
    fn sample(&self, p: Point3) -> Vector3 {
        -p / (p.length_squared() + self.epsilon)
    }
}

/// Uniform +X stream whose speed grows with distance: `(|p| + offset, 0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriftStream {
    pub offset: f64,
}

impl Default for DriftStream {
    fn default() -> Self {
        Self {
            offset: DRIFT_OFFSET,
        }
    }
}

impl FlowSource for DriftStream {
    fn sample(&self, p: Point3) -> Vector3 {
        DVec3::new(p.length() + self.offset, 0.0, 0.0)
    }
}

const FLOW_NAMES: &[&str] = &["sink", "drift"];

/// Selectable flow field for the airflow view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowKind {
    #[default]
    Sink,
    Drift,
}

impl FlowKind {
    /// Returns `SimError::InvalidParameter` for an unrecognized name.
    pub fn from_name(name: &str) -> Result<Self, SimError> {
        match name {
            "sink" => Ok(FlowKind::Sink),
            "drift" => Ok(FlowKind::Drift),
            other => Err(SimError::invalid(
                "field",
                format!("expected one of {}, got '{other}'", FLOW_NAMES.join(", ")),
            )),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FlowKind::Sink => "sink",
            FlowKind::Drift => "drift",
        }
    }

    pub fn list_names() -> &'static [&'static str] {
        FLOW_NAMES
    }

    /// The source with its standard constants.
    pub fn source(self) -> Box<dyn FlowSource> {
        match self {
            FlowKind::Sink => Box::new(RadialSink::default()),
            FlowKind::Drift => Box::new(DriftStream::default()),
        }
    }
}

/// Samples the radial sink over `cloud`.
pub fn sample(cloud: &PointCloud) -> VectorField {
    RadialSink::default().sample_cloud(cloud)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_x_point_gives_reference_vector() {
        let cloud = PointCloud::from_points(vec![DVec3::X]);
        let field = sample(&cloud);
        let v = field.get(0).unwrap();
        assert!((v.x - (-1.0 / 1.1)).abs() < 1e-12);
        assert!((v.x + 0.909).abs() < 1e-3);
        assert_eq!(v.y, 0.0);
        assert_eq!(v.z, 0.0);
    }

    #[test]
    fn origin_is_finite_and_zero() {
        let v = RadialSink::default().sample(DVec3::ZERO);
        assert_eq!(v, DVec3::ZERO);
    }

    #[test]
    fn sink_points_toward_origin() {
        let sink = RadialSink::default();
        for p in [DVec3::new(3.0, -1.0, 2.0), DVec3::new(-0.2, 0.0, 0.1)] {
            let v = sink.sample(p);
            assert!(v.dot(p) < 0.0);
            assert!(v.cross(p).length() < 1e-12);
        }
    }

    #[test]
    fn sink_field_is_aligned_with_cloud() {
        let cloud: PointCloud = (1..=5).map(|i| DVec3::splat(i as f64)).collect();
        let field = RadialSink::default().sample_cloud(&cloud);
        assert_eq!(field.len(), cloud.len());
    }

    #[test]
    fn drift_stream_flows_along_x() {
        let v = DriftStream::default().sample(DVec3::new(3.0, 4.0, 0.0));
        assert!((v.x - 5.1).abs() < 1e-12);
        assert_eq!((v.y, v.z), (0.0, 0.0));
    }

    #[test]
    fn flow_kind_names_round_trip() {
        for name in FlowKind::list_names() {
            assert_eq!(FlowKind::from_name(name).unwrap().name(), *name);
        }
        assert!(matches!(
            FlowKind::from_name("vortex"),
            Err(SimError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn boxed_sources_match_concrete_ones() {
        let p = DVec3::new(0.5, 1.0, -2.0);
        assert_eq!(FlowKind::Sink.source().sample(p), RadialSink::default().sample(p));
        assert_eq!(FlowKind::Drift.source().sample(p), DriftStream::default().sample(p));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn sink_magnitude_decays_along_any_ray(
                dx in -1.0_f64..1.0,
                dy in -1.0_f64..1.0,
                dz in -1.0_f64..1.0,
                r in SINK_EPSILON.sqrt()..50.0,
                dr in 0.0_f64..50.0,
            ) {
                let dir = DVec3::new(dx, dy, dz);
                prop_assume!(dir.length() > 1e-3);
                let dir = dir.normalize();
                let sink = RadialSink::default();
                let near = sink.sample(dir * r).length();
                let far = sink.sample(dir * (r + dr)).length();
                prop_assert!(far <= near + 1e-12, "|v({})| = {far} > |v({r})| = {near}", r + dr);
            }
        }
    }
}
