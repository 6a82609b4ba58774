//! Ordered 3D point clouds.
//!
//! A [`PointCloud`] keeps points in generation order. Nothing is deduplicated:
//! grid seams and primitive poles legitimately produce repeated points, and
//! downstream consumers rely on index alignment with a
//! [`VectorField`](crate::field::VectorField).

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A point in model space.
pub type Point3 = DVec3;

/// An ordered sequence of points, insertion order = generation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointCloud {
    points: Vec<Point3>,
}

impl PointCloud {
    /// Creates an empty cloud.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty cloud with room for `capacity` points.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Wraps `points`, keeping their order.
    pub fn from_points(points: Vec<Point3>) -> Self {
        Self { points }
    }

    /// Adds one point at the end. Duplicates are kept.
    pub fn push(&mut self, point: Point3) {
        self.points.push(point);
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the cloud has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Read-only access to the points.
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Iterates the points in generation order.
    pub fn iter(&self) -> impl Iterator<Item = &Point3> + '_ {
        self.points.iter()
    }

    /// Axis-aligned bounding box as `(min, max)`, or `None` for an empty cloud.
    pub fn bounds(&self) -> Option<(Point3, Point3)> {
        let first = *self.points.first()?;
        Some(
            self.points
                .iter()
                .fold((first, first), |(lo, hi), &p| (lo.min(p), hi.max(p))),
        )
    }
}

impl Extend<Point3> for PointCloud {
    fn extend<I: IntoIterator<Item = Point3>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl FromIterator<Point3> for PointCloud {
    fn from_iter<I: IntoIterator<Item = Point3>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}
