//! Stylized aircraft assembled from six placed primitives.
//!
//! All offsets are fixed multiples of `size` and give a toy silhouette. The
//! cockpit's vertical offset and the slab thickness are absolute, not scaled.

use aerowave_core::Point3;
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::placement::Placement;
use crate::primitive::Primitive;

/// Wing, tail and stabilizer extrusion thickness.
pub const SLAB_THICKNESS: f64 = 0.02;
/// Cockpit height above the body axis (absolute).
pub const COCKPIT_LIFT: f64 = 0.15;

/// Which part of a model a primitive represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartKind {
    /// Whole body of a single-primitive shape (sphere, cube).
    Body,
    Fuselage,
    NoseCone,
    Cockpit,
    MainWing,
    TailWing,
    Stabilizer,
}

impl PartKind {
    pub fn name(self) -> &'static str {
        match self {
            PartKind::Body => "body",
            PartKind::Fuselage => "fuselage",
            PartKind::NoseCone => "nose_cone",
            PartKind::Cockpit => "cockpit",
            PartKind::MainWing => "main_wing",
            PartKind::TailWing => "tail_wing",
            PartKind::Stabilizer => "stabilizer",
        }
    }
}

/// A primitive placed in model space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub kind: PartKind,
    pub primitive: Primitive,
    pub placement: Placement,
}

impl Part {
    pub fn new(kind: PartKind, primitive: Primitive, placement: Placement) -> Self {
        Self {
            kind,
            primitive,
            placement,
        }
    }

    /// The primitive's vertices mapped into model space.
    pub fn world_points(&self) -> Vec<Point3> {
        self.primitive
            .sample()
            .into_iter()
            .map(|p| self.placement.apply(p))
            .collect()
    }
}

/// The six aircraft parts in assembly order: fuselage, nose cone, cockpit,
/// main wing, tail wing, stabilizer.
///
/// `resolution` drives the angular resolution of the round parts.
pub fn aircraft_parts(size: f64, resolution: usize) -> Vec<Part> {
    let s = size;
    vec![
        Part::new(
            PartKind::Fuselage,
            Primitive::Cylinder {
                radius: 0.08 * s,
                height: 3.5 * s,
                resolution,
            },
            Placement::IDENTITY.rotated_x(90.0),
        ),
        Part::new(
            PartKind::NoseCone,
            Primitive::Cone {
                radius: 0.08 * s,
                height: 0.4 * s,
                resolution,
            },
            Placement::at(DVec3::new(0.0, 1.75 * s, 0.0)).rotated_x(90.0),
        ),
        Part::new(
            PartKind::Cockpit,
            Primitive::Sphere {
                radius: 0.12 * s,
                theta_resolution: resolution,
                phi_resolution: resolution,
            },
            Placement::at(DVec3::new(0.0, 0.9 * s, COCKPIT_LIFT)),
        ),
        Part::new(
            PartKind::MainWing,
            slab(&[(1.3 * s, 0.0, 0.0), (0.0, 0.0, -s), (-1.3 * s, 0.0, 0.0)]),
            Placement::at(DVec3::new(0.0, 0.0, 0.7 * s)),
        ),
        Part::new(
            PartKind::TailWing,
            slab(&[(0.7 * s, 0.0, 0.0), (0.0, 0.0, -0.4 * s), (-0.7 * s, 0.0, 0.0)]),
            Placement::at(DVec3::new(0.0, 0.0, -1.2 * s)),
        ),
        Part::new(
            PartKind::Stabilizer,
            slab(&[(0.0, 0.0, 0.0), (0.15 * s, 0.0, -0.1 * s), (0.0, 0.8 * s, 0.0)]),
            Placement::at(DVec3::new(0.0, 0.0, -1.2 * s)).rotated_x(90.0),
        ),
    ]
}

fn slab(outline: &[(f64, f64, f64)]) -> Primitive {
    Primitive::Slab {
        outline: outline
            .iter()
            .map(|&(x, y, z)| DVec3::new(x, y, z))
            .collect(),
        thickness: SLAB_THICKNESS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn part(parts: &[Part], kind: PartKind) -> &Part {
        parts.iter().find(|p| p.kind == kind).unwrap()
    }

    #[test]
    fn assembles_six_parts_in_order() {
        let kinds: Vec<_> = aircraft_parts(1.0, 8).iter().map(|p| p.kind).collect();
        assert_eq!(
            kinds,
            vec![
                PartKind::Fuselage,
                PartKind::NoseCone,
                PartKind::Cockpit,
                PartKind::MainWing,
                PartKind::TailWing,
                PartKind::Stabilizer,
            ]
        );
    }

    #[test]
    fn fuselage_axis_is_turned_onto_z() {
        let parts = aircraft_parts(2.0, 16);
        for p in part(&parts, PartKind::Fuselage).world_points() {
            assert!((p.x.hypot(p.y) - 0.16).abs() < EPS);
            assert!((p.z.abs() - 3.5).abs() < EPS);
        }
    }

    #[test]
    fn nose_cone_sits_at_scaled_offset() {
        let parts = aircraft_parts(2.0, 16);
        let nose = part(&parts, PartKind::NoseCone);
        assert_eq!(nose.placement.position, DVec3::new(0.0, 3.5, 0.0));
        let apex = nose.world_points()[0];
        assert!((apex - DVec3::new(0.4, 3.5, 0.0)).length() < EPS);
    }

    #[test]
    fn cockpit_lift_does_not_scale_with_size() {
        for size in [0.5, 1.0, 4.0] {
            let parts = aircraft_parts(size, 8);
            let cockpit = part(&parts, PartKind::Cockpit);
            assert_eq!(
                cockpit.placement.position,
                DVec3::new(0.0, 0.9 * size, COCKPIT_LIFT)
            );
        }
    }

    #[test]
    fn main_wing_tip_points_sit_at_lateral_span() {
        let parts = aircraft_parts(1.0, 8);
        let pts = part(&parts, PartKind::MainWing).world_points();
        assert_eq!(pts.len(), 6);
        assert!((pts[0] - DVec3::new(1.3, 0.0, 0.7)).length() < EPS);
        assert!((pts[1] - DVec3::new(0.0, 0.0, -0.3)).length() < EPS);
        // Extruded copy is offset along +Y by the slab thickness.
        assert!((pts[3] - pts[0] - DVec3::new(0.0, SLAB_THICKNESS, 0.0)).length() < EPS);
    }

    #[test]
    fn stabilizer_fin_is_raised_by_rotation() {
        let parts = aircraft_parts(1.0, 8);
        let pts = part(&parts, PartKind::Stabilizer).world_points();
        // Local (0, 0.8, 0) rotates onto +Z before the tail offset.
        assert!((pts[2] - DVec3::new(0.0, 0.0, -1.2 + 0.8)).length() < EPS);
    }

    #[test]
    fn part_names_are_snake_case() {
        assert_eq!(PartKind::NoseCone.name(), "nose_cone");
        assert_eq!(PartKind::MainWing.name(), "main_wing");
    }
}
