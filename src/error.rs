//! Error types for polygon construction and configuration.

use thiserror::Error;

/// Errors raised when geometry or configuration breaks a precondition.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CollisionError {
    /// A polygon needs at least three vertices.
    #[error("polygon needs at least 3 vertices, got {count}")]
    TooFewVertices { count: usize },

    /// The edge ending at vertex `index` has zero (or non-finite) length,
    /// so its axis cannot be normalized.
    #[error("edge ending at vertex {index} is degenerate")]
    DegenerateEdge { index: usize },

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience alias for `Result<T, CollisionError>`.
pub type CollisionResult<T> = Result<T, CollisionError>;
