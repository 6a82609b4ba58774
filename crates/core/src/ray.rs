//! Line segments drawn for incoming and scattered waves.

use serde::{Deserialize, Serialize};

use crate::cloud::Point3;

/// A drawn line from `origin` to `target`.
///
/// Not connected to any point cloud; rays are sampled independently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RaySegment {
    pub origin: Point3,
    pub target: Point3,
}

impl RaySegment {
    /// A segment from `origin` to `target`.
    pub fn new(origin: Point3, target: Point3) -> Self {
        Self { origin, target }
    }

    /// `target - origin`.
    pub fn direction(&self) -> Point3 {
        self.target - self.origin
    }

    /// Euclidean length of the segment.
    pub fn length(&self) -> f64 {
        self.direction().length()
    }
}
