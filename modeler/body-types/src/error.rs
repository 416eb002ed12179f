//! Error types for body validation.

use thiserror::Error;

/// Result type for body validation.
pub type BodyResult<T> = Result<T, BodyError>;

/// Ways a body can violate its index invariants.
///
/// The mutation API never produces these; [`Body::validate`](crate::Body::validate)
/// reports them for bodies assembled by hand.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BodyError {
    /// A line references a vertex slot that does not exist.
    #[error("line {line} references vertex {vertex} (body has {vertex_count} vertices)")]
    DanglingLineIndex {
        /// Slot of the offending line.
        line: usize,
        /// The out-of-range vertex index.
        vertex: usize,
        /// Number of vertices in the body.
        vertex_count: usize,
    },

    /// A polygon references a vertex slot that does not exist.
    #[error("polygon {polygon} references vertex {vertex} (body has {vertex_count} vertices)")]
    DanglingPolygonIndex {
        /// Slot of the offending polygon.
        polygon: usize,
        /// The out-of-range vertex index.
        vertex: usize,
        /// Number of vertices in the body.
        vertex_count: usize,
    },

    /// A polygon has fewer than three vertex references.
    #[error("polygon {polygon} has {count} vertices, need at least 3")]
    DegeneratePolygon {
        /// Slot of the offending polygon.
        polygon: usize,
        /// Number of vertex references it has.
        count: usize,
    },
}
