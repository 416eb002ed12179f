//! Body modeling toolkit.
//!
//! This umbrella crate re-exports the body-* crates behind one dependency.
//!
//! # Quick Start
//!
//! ```
//! use modeler::prelude::*;
//!
//! let mut body = cuboid(2.0, 2.0, 2.0);
//! body.remove_vertex(0);
//! assert_eq!(body.vertex_count(), 7);
//! assert_eq!(body.polygon_count(), 3);
//!
//! body.transform(&Transform3D::translation(5.0, 0.0, 0.0));
//! body.offset_to_origin();
//!
//! let geometries = body_to_render_geometries(&body, &[], &RenderParams::default())?;
//! assert_eq!(geometries[0].triangle_count(), 6);
//! # Ok::<(), modeler::render::RenderError>(())
//! ```
//!
//! # Module Organization
//!
//! - [`types`] - `Body`, `Vertex`, `Line`, `Polygon`, texture projections,
//!   bounding volumes, tolerance helpers
//! - [`transform`] - `Transform3D` affine transformations
//! - [`render`] - Triangle geometry for renderers
//!
//! # Feature Flags
//!
//! - `serde` - `Serialize`/`Deserialize` for all value types

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

// =============================================================================
// Re-exports
// =============================================================================

/// Core data structures: `Body`, `Vertex`, `Line`, `Polygon`, `Aabb`.
pub use body_types as types;

/// Affine transformations.
pub use body_transform as transform;

/// Render geometry export.
pub use body_render as render;

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for body modeling.
///
/// # Usage
///
/// ```
/// use modeler::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use body_types::{
        Aabb, Body, BodyBounds, BodyTopology, Line, Point3, Polygon, Sphere, TextureProjection,
        TextureProjectionKind, Vector3, Vertex, cuboid,
    };

    // Transform
    pub use body_transform::Transform3D;

    // Render
    pub use body_render::{Material, RenderGeometry, RenderParams, body_to_render_geometries};
}

// =============================================================================
// Tests
// =============================================================================
