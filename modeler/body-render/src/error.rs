//! Error types for render export.

use body_types::BodyError;
use thiserror::Error;

/// Result type for render export.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur when converting a body to render geometry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The body failed validation.
    #[error("invalid body: {0}")]
    InvalidBody(#[from] BodyError),

    /// A polygon names a material the table does not have.
    #[error("polygon {polygon} uses material {material}, but only {material_count} are defined")]
    MissingMaterial {
        /// Slot of the offending polygon.
        polygon: usize,
        /// The out-of-range material index.
        material: usize,
        /// Size of the material table.
        material_count: usize,
    },
}
