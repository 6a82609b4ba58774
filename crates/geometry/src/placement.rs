//! Rigid placement of a primitive in model space.

use aerowave_core::Point3;
use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

/// Rotation about the X axis followed by a translation.
///
/// `world = Rx(rotate_x_degrees) * local + position`, the same order a scene
/// graph actor applies `RotateX` and `SetPosition` about the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub position: DVec3,
    pub rotate_x_degrees: f64,
}

impl Placement {
    pub const IDENTITY: Placement = Placement {
        position: DVec3::ZERO,
        rotate_x_degrees: 0.0,
    };

    /// Translation only.
    pub fn at(position: DVec3) -> Self {
        Self {
            position,
            rotate_x_degrees: 0.0,
        }
    }

    /// Adds a rotation about X, in degrees.
    pub fn rotated_x(mut self, degrees: f64) -> Self {
        self.rotate_x_degrees += degrees;
        self
    }

    /// Maps a local point into model space.
    pub fn apply(&self, local: Point3) -> Point3 {
        let rotation = DQuat::from_rotation_x(self.rotate_x_degrees.to_radians());
        rotation * local + self.position
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::IDENTITY
    }
}
