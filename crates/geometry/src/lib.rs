#![deny(unsafe_code)]
//! Procedural geometry for aerowave.
//!
//! [`build`] turns a shape kind, a size and a resolution into a [`Geometry`]:
//! the placed primitives that make up the shape and the point cloud sampled
//! from them. The airflow view uses the separate [`airframe`] grid instead.

pub mod aircraft;
pub mod airframe;
pub mod placement;
pub mod primitive;

use aerowave_core::params::{require_count, require_positive};
use aerowave_core::{PointCloud, ShapeKind, SimError};
use log::debug;
use serde::{Deserialize, Serialize};

pub use aircraft::{aircraft_parts, Part, PartKind};
pub use airframe::Airframe;
pub use placement::Placement;
pub use primitive::Primitive;

/// Sampled shape: every part, and all their world-space points in part order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub shape: ShapeKind,
    pub parts: Vec<Part>,
    pub cloud: PointCloud,
}

impl Geometry {
    /// Samples `parts` into one cloud.
    pub fn from_parts(shape: ShapeKind, parts: Vec<Part>) -> Self {
        let capacity = parts.iter().map(|p| p.primitive.vertex_count()).sum();
        let mut cloud = PointCloud::with_capacity(capacity);
        for part in &parts {
            let points = part.world_points();
            debug!("{}: {} points", part.kind.name(), points.len());
            cloud.extend(points);
        }
        Self {
            shape,
            parts,
            cloud,
        }
    }
}

/// Builds `shape` at the given `size` and `resolution`.
///
/// - sphere: radius `size`, `resolution` longitudes and latitudes
/// - cube: side `size`, centered, represented by its 8 corners
/// - aircraft: the six parts of [`aircraft_parts`]
///
/// Returns `SimError::InvalidParameter` for a non-positive or non-finite
/// `size`, or a zero `resolution`.
pub fn build(shape: ShapeKind, size: f64, resolution: usize) -> Result<Geometry, SimError> {
    require_positive("size", size)?;
    require_count("resolution", resolution)?;

    let parts = match shape {
        ShapeKind::Sphere => vec![Part::new(
            PartKind::Body,
            Primitive::Sphere {
                radius: size,
                theta_resolution: resolution,
                phi_resolution: resolution,
            },
            Placement::IDENTITY,
        )],
        ShapeKind::Cube => vec![Part::new(
            PartKind::Body,
            Primitive::Cuboid {
                x_length: size,
                y_length: size,
                z_length: size,
            },
            Placement::IDENTITY,
        )],
        ShapeKind::Aircraft => aircraft_parts(size, resolution),
    };

    let geometry = Geometry::from_parts(shape, parts);
    debug!(
        "built {shape} (size {size}, resolution {resolution}): {} parts, {} points",
        geometry.parts.len(),
        geometry.cloud.len()
    );
    Ok(geometry)
}
