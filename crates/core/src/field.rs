//! Per-point vector fields aligned to a [`PointCloud`].
//!
//! Entry `i` of a [`VectorField`] belongs to point `i` of the cloud it was
//! sampled from. Display collaborators use the pair to place one glyph per
//! point.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::cloud::PointCloud;
use crate::error::SimError;

/// A vector (u, v, w) attached to one point.
pub type Vector3 = DVec3;

/// One vector per point of a cloud, by index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VectorField {
    vectors: Vec<Vector3>,
}

impl VectorField {
    /// Pairs `vectors` with `cloud`.
    ///
    /// Returns `SimError::LengthMismatch` unless there is exactly one vector
    /// per point.
    pub fn aligned(cloud: &PointCloud, vectors: Vec<Vector3>) -> Result<Self, SimError> {
        if cloud.len() != vectors.len() {
            return Err(SimError::LengthMismatch {
                points: cloud.len(),
                vectors: vectors.len(),
            });
        }
        Ok(Self { vectors })
    }

    /// Evaluates `f` at every point of `cloud`, in order.
    pub fn from_cloud(cloud: &PointCloud, f: impl FnMut(DVec3) -> Vector3) -> Self {
        Self {
            vectors: cloud.iter().copied().map(f).collect(),
        }
    }

    /// Number of vectors, equal to the length of the cloud it was built for.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Whether the field holds no vectors.
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Read-only access to the vectors.
    pub fn vectors(&self) -> &[Vector3] {
        &self.vectors
    }

    /// The vector attached to point `index`, if any.
    pub fn get(&self, index: usize) -> Option<Vector3> {
        self.vectors.get(index).copied()
    }

    /// Largest vector length, 0.0 for an empty field.
    ///
    /// Display collaborators use it to normalize glyph scale.
    pub fn max_magnitude(&self) -> f64 {
        self.vectors
            .iter()
            .map(|v| v.length())
            .fold(0.0, f64::max)
    }

    /// Iterates `(point, vector)` pairs in cloud order.
    pub fn zip<'a>(
        &'a self,
        cloud: &'a PointCloud,
    ) -> impl Iterator<Item = (DVec3, Vector3)> + 'a {
        cloud.iter().copied().zip(self.vectors.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cloud_of(n: usize) -> PointCloud {
        (0..n).map(|i| DVec3::splat(i as f64)).collect()
    }

    #[test]
    fn aligned_accepts_matching_lengths() {
        let cloud = cloud_of(3);
        let field = VectorField::aligned(&cloud, vec![DVec3::X; 3]).unwrap();
        assert_eq!(field.len(), 3);
        assert_eq!(field.get(2), Some(DVec3::X));
        assert_eq!(field.get(3), None);
    }

    #[test]
    fn aligned_rejects_mismatched_lengths() {
        let cloud = cloud_of(4);
        let err = VectorField::aligned(&cloud, vec![DVec3::X; 2]).unwrap_err();
        assert!(matches!(
            err,
            SimError::LengthMismatch {
                points: 4,
                vectors: 2
            }
        ));
    }

    #[test]
    fn from_cloud_evaluates_each_point_in_order() {
        let cloud = cloud_of(3);
        let field = VectorField::from_cloud(&cloud, |p| p * 2.0);
        assert_eq!(field.len(), cloud.len());
        assert_eq!(field.get(2), Some(DVec3::splat(4.0)));
    }

    #[test]
    fn empty_cloud_gives_empty_field() {
        let field = VectorField::aligned(&PointCloud::new(), Vec::new()).unwrap();
        assert!(field.is_empty());
        assert_eq!(field.max_magnitude(), 0.0);
    }

    #[test]
    fn max_magnitude_picks_longest_vector() {
        let cloud = cloud_of(3);
        let field = VectorField::aligned(
            &cloud,
            vec![DVec3::new(0.0, 3.0, 4.0), DVec3::X, DVec3::ZERO],
        )
        .unwrap();
        assert!((field.max_magnitude() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn zip_pairs_points_with_vectors_in_order() {
        let cloud = cloud_of(2);
        let field = VectorField::aligned(&cloud, vec![DVec3::X, DVec3::Y]).unwrap();
        let pairs: Vec<_> = field.zip(&cloud).collect();
        assert_eq!(pairs[0], (DVec3::ZERO, DVec3::X));
        assert_eq!(pairs[1], (DVec3::ONE, DVec3::Y));
    }
}
