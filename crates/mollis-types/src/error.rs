//! Error types for the mollis engine.
//!
//! All crates return `MollisResult<T>` from fallible operations.
//! Only construction-time problems are errors. Per-step numerical
//! anomalies and octree edge drops are recovered locally and reported
//! as telemetry events instead.

use thiserror::Error;

/// Unified error type for the mollis engine.
#[derive(Debug, Error)]
pub enum MollisError {
    /// Mesh data is malformed or inconsistent.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A user-authored spring was rejected.
    #[error("Invalid spring ({a}, {b}): {reason}")]
    InvalidSpring {
        a: u32,
        b: u32,
        reason: String,
    },

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, MollisError>`.
pub type MollisResult<T> = Result<T, MollisError>;
