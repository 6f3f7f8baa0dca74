//! Structured error types for the Physalia workspace.

use thiserror::Error;

/// Unified error type for all Physalia operations.
#[derive(Debug, Error)]
pub enum PhysaliaError {
    /// I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input (bad arguments, out-of-range values)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the Physalia workspace.
pub type Result<T> = std::result::Result<T, PhysaliaError>;
