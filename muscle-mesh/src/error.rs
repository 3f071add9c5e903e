//! Error types for muscle mesh generation.

use thiserror::Error;

/// Result type for mesh generation operations.
pub type MeshResult<T> = Result<T, MeshError>;

/// Errors that can occur while generating a muscle tube mesh.
///
/// These only cover structurally invalid parameters. Degenerate geometry
/// (coincident anchors, extreme bulge) is floored and clamped instead,
/// since it arises from legitimate joint configurations.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Tube has too few rings along the path.
    #[error("tube needs at least {min} rings, got {actual}")]
    TooFewRings {
        /// Minimum required rings.
        min: usize,
        /// Actual ring count.
        actual: usize,
    },

    /// Tube cross-section has too few sides.
    #[error("tube needs at least {min} sides per ring, got {actual}")]
    TooFewSides {
        /// Minimum required sides.
        min: usize,
        /// Actual side count.
        actual: usize,
    },

    /// Maximum radius is zero, negative, or not finite.
    #[error("invalid maximum radius: {0}")]
    InvalidRadius(f64),
}
