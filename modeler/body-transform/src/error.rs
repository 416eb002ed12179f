//! Error types for transformations.

use thiserror::Error;

/// Result type for transformation operations.
pub type TransformResult<T> = Result<T, TransformError>;

/// Errors that can occur when working with transformations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// Matrix is not invertible.
    #[error("matrix is not invertible")]
    NotInvertible,
}
