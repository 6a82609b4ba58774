//! Closed-form primitive generators.
//!
//! Each [`Primitive`] samples its surface vertices in its own local frame,
//! following the usual visualization-toolkit source conventions:
//!
//! - cylinder: axis along +Y, centered at the origin, one rim at each end
//! - cone: axis along +X, apex at `+height/2`, base ring at `-height/2`
//! - sphere: poles on Z, `theta` rings of `phi - 2` interior latitudes
//! - cuboid: axis aligned and centered, its 8 corners
//! - slab: a planar outline extruded along its normal by `thickness`
//!
//! Angular resolutions below 3 are raised to 3 so every ring encloses area.

use std::f64::consts::{PI, TAU};

use aerowave_core::Point3;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Smallest ring resolution that still encloses area.
pub const MIN_RING_RESOLUTION: usize = 3;

/// A primitive shape described by its parameters, sampled on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Primitive {
    Cylinder {
        radius: f64,
        height: f64,
        resolution: usize,
    },
    Cone {
        radius: f64,
        height: f64,
        resolution: usize,
    },
    Sphere {
        radius: f64,
        theta_resolution: usize,
        phi_resolution: usize,
    },
    Cuboid {
        x_length: f64,
        y_length: f64,
        z_length: f64,
    },
    Slab {
        outline: Vec<Point3>,
        thickness: f64,
    },
}

impl Primitive {
    /// Surface vertices in the local frame.
    pub fn sample(&self) -> Vec<Point3> {
        match self {
            Primitive::Cylinder {
                radius,
                height,
                resolution,
            } => cylinder_rims(*radius, *height, *resolution),
            Primitive::Cone {
                radius,
                height,
                resolution,
            } => cone_vertices(*radius, *height, *resolution),
            Primitive::Sphere {
                radius,
                theta_resolution,
                phi_resolution,
            } => sphere_vertices(*radius, *theta_resolution, *phi_resolution),
            Primitive::Cuboid {
                x_length,
                y_length,
                z_length,
            } => cuboid_corners(DVec3::new(*x_length, *y_length, *z_length)),
            Primitive::Slab { outline, thickness } => slab_vertices(outline, *thickness),
        }
    }

    /// Number of points `sample()` returns, without sampling.
    pub fn vertex_count(&self) -> usize {
        match self {
            Primitive::Cylinder { resolution, .. } => 2 * ring(*resolution),
            Primitive::Cone { resolution, .. } => 1 + ring(*resolution),
            Primitive::Sphere {
                theta_resolution,
                phi_resolution,
                ..
            } => 2 + ring(*theta_resolution) * (ring(*phi_resolution) - 2),
            Primitive::Cuboid { .. } => 8,
            Primitive::Slab { outline, .. } => 2 * outline.len(),
        }
    }
}

fn ring(resolution: usize) -> usize {
    resolution.max(MIN_RING_RESOLUTION)
}

fn ring_angles(resolution: usize) -> impl Iterator<Item = f64> {
    let n = ring(resolution);
    (0..n).map(move |i| TAU * i as f64 / n as f64)
}

fn cylinder_rims(radius: f64, height: f64, resolution: usize) -> Vec<Point3> {
    let half = height / 2.0;
    [half, -half]
        .into_iter()
        .flat_map(|y| {
            ring_angles(resolution).map(move |a| DVec3::new(radius * a.cos(), y, -radius * a.sin()))
        })
        .collect()
}

fn cone_vertices(radius: f64, height: f64, resolution: usize) -> Vec<Point3> {
    let half = height / 2.0;
    std::iter::once(DVec3::new(half, 0.0, 0.0))
        .chain(ring_angles(resolution).map(|a| DVec3::new(-half, radius * a.cos(), radius * a.sin())))
        .collect()
}

fn sphere_vertices(radius: f64, theta_resolution: usize, phi_resolution: usize) -> Vec<Point3> {
    let phi_n = ring(phi_resolution);
    let mut points = Vec::with_capacity(2 + ring(theta_resolution) * (phi_n - 2));
    points.push(DVec3::new(0.0, 0.0, radius));
    points.push(DVec3::new(0.0, 0.0, -radius));
    for theta in ring_angles(theta_resolution) {
        for j in 1..phi_n - 1 {
            let phi = PI * j as f64 / (phi_n - 1) as f64;
            points.push(
                radius
                    * DVec3::new(phi.sin() * theta.cos(), phi.sin() * theta.sin(), phi.cos()),
            );
        }
    }
    points
}

fn cuboid_corners(lengths: DVec3) -> Vec<Point3> {
    let half = lengths / 2.0;
    let mut corners = Vec::with_capacity(8);
    for sz in [-1.0, 1.0] {
        for sy in [-1.0, 1.0] {
            for sx in [-1.0, 1.0] {
                corners.push(DVec3::new(sx, sy, sz) * half);
            }
        }
    }
    corners
}

fn slab_vertices(outline: &[Point3], thickness: f64) -> Vec<Point3> {
    let offset = outline_normal(outline) * thickness;
    outline
        .iter()
        .copied()
        .chain(outline.iter().map(|&p| p + offset))
        .collect()
}

/// Unit normal of a planar outline by Newell's method; zero if degenerate.
pub fn outline_normal(outline: &[Point3]) -> DVec3 {
    let n = outline.len();
    let mut normal = DVec3::ZERO;
    for i in 0..n {
        let a = outline[i];
        let b = outline[(i + 1) % n];
        normal.x += (a.y - b.y) * (a.z + b.z);
        normal.y += (a.z - b.z) * (a.x + b.x);
        normal.z += (a.x - b.x) * (a.y + b.y);
    }
    normal.normalize_or_zero()
}
