//! Error types for the aerowave core.

use thiserror::Error;

/// Errors produced by geometry, field and scene operations.
#[derive(Debug, Error)]
pub enum SimError {
    /// A numeric parameter was outside its valid domain (non-positive size,
    /// zero resolution, zero point count, non-finite value, ...).
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// A shape name did not match any known shape.
    #[error("unknown shape: {0}")]
    UnknownShape(String),

    /// A simulation name did not match any registered simulation.
    #[error("unknown simulation: {0}")]
    UnknownSimulation(String),

    /// A vector field and a point cloud were paired with different lengths.
    #[error("length mismatch: {points} points vs {vectors} vectors")]
    LengthMismatch { points: usize, vectors: usize },

    /// The display collaborator could not be initialized or refused a scene.
    #[error("rendering unavailable: {0}")]
    RenderingUnavailable(String),
}

impl SimError {
    /// Shorthand for [`SimError::InvalidParameter`].
    pub fn invalid(name: &str, reason: impl Into<String>) -> Self {
        SimError::InvalidParameter {
            name: name.to_owned(),
            reason: reason.into(),
        }
    }
}
