//! Airframe point cloud for the airflow view: a cylindrical fuselage grid
//! plus one flat wing grid through the middle of the body.
//!
//! Fuselage points come first, row by row along the body axis; wing points
//! follow, row by row across the chord. Seam points (θ = 0 and θ = 2π) are
//! both kept.

use std::f64::consts::TAU;

use aerowave_core::params::{require_count, require_positive};
use aerowave_core::{Point3, PointCloud, SimError};
use glam::DVec3;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Default grid resolution (fuselage angles and stations).
pub const DEFAULT_RESOLUTION: usize = 60;
/// Default wing half-span.
pub const DEFAULT_WING_SPAN: f64 = 5.0;
/// Default wing half-chord.
pub const DEFAULT_WING_WIDTH: f64 = 0.1;
/// Default fuselage length.
pub const DEFAULT_LENGTH: f64 = 10.0;
/// Default fuselage radius.
pub const DEFAULT_HEIGHT: f64 = 1.0;

/// Fuselage resolution per spanwise wing sample.
const SPAN_DIVISOR: f64 = 6.0;
/// Fuselage resolution per chordwise wing sample.
const CHORD_DIVISOR: f64 = 15.0;

/// Dimensions of the airflow airframe.
///
/// `height` is the fuselage radius. The wing sits at `length / 2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Airframe {
    pub resolution: usize,
    pub wing_span: f64,
    pub wing_width: f64,
    pub length: f64,
    pub height: f64,
}

impl Default for Airframe {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            wing_span: DEFAULT_WING_SPAN,
            wing_width: DEFAULT_WING_WIDTH,
            length: DEFAULT_LENGTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl Airframe {
    /// Rejects zero resolution and non-positive or non-finite dimensions.
    pub fn validate(&self) -> Result<(), SimError> {
        require_count("resolution", self.resolution)?;
        require_positive("wing_span", self.wing_span)?;
        require_positive("wing_width", self.wing_width)?;
        require_positive("length", self.length)?;
        require_positive("height", self.height)?;
        Ok(())
    }

    /// Spanwise and chordwise wing sample counts, each at least 1.
    pub fn wing_grid(&self) -> (usize, usize) {
        let r = self.resolution as f64;
        (
            wing_count(r / SPAN_DIVISOR),
            wing_count(r / CHORD_DIVISOR),
        )
    }

    /// Validates, then emits the fuselage grid followed by the wing grid.
    pub fn build(&self) -> Result<PointCloud, SimError> {
        self.validate()?;
        let (nx, ny) = self.wing_grid();
        if (self.resolution as f64 / CHORD_DIVISOR).round() < 1.0 {
            warn!(
                "resolution {} collapses the wing grid to {nx}x{ny}",
                self.resolution
            );
        }

        let mut cloud = fuselage_points(self.height, self.length, self.resolution);
        cloud.extend(wing_points(
            self.wing_span,
            self.wing_width,
            self.length / 2.0,
            nx,
            ny,
        ));
        debug!(
            "airframe: {} points ({} fuselage, {} wing)",
            cloud.len(),
            self.resolution * self.resolution,
            nx * ny
        );
        Ok(cloud)
    }
}

fn wing_count(raw: f64) -> usize {
    (raw.round() as usize).max(1)
}

/// `n` evenly spaced samples over `[start, end]`, endpoints included.
///
/// A single sample sits at `start`; zero samples yields nothing.
pub fn linspace(start: f64, end: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = if n > 1 {
        (end - start) / (n - 1) as f64
    } else {
        0.0
    };
    (0..n).map(move |i| start + step * i as f64)
}

/// `resolution²` points on a cylinder of `radius` from z = 0 to `length`.
pub fn fuselage_points(radius: f64, length: f64, resolution: usize) -> PointCloud {
    let mut cloud = PointCloud::with_capacity(resolution * resolution);
    for z in linspace(0.0, length, resolution) {
        cloud.extend(
            linspace(0.0, TAU, resolution)
                .map(|theta| DVec3::new(radius * theta.cos(), radius * theta.sin(), z)),
        );
    }
    cloud
}

/// `nx * ny` points on the plane z = `z` over [−span, span] × [−width, width].
pub fn wing_points(span: f64, width: f64, z: f64, nx: usize, ny: usize) -> Vec<Point3> {
    linspace(-width, width, ny)
        .flat_map(|y| linspace(-span, span, nx).map(move |x| DVec3::new(x, y, z)))
        .collect()
}
