//! Renderer-ready geometry from bodies.
//!
//! A renderer consumes a list of [`RenderGeometry`] values: triangles sharing
//! one [`Material`], as flat position and normal arrays plus a model
//! transformation. [`body_to_render_geometries`] produces that list from a
//! [`Body`](body_types::Body) and a caller-owned material table.
//!
//! # Shading
//!
//! Polygons are shaded flat by default. Polygons that share a curve group are
//! shaded smooth across their common vertices unless
//! [`RenderParams::smooth_curve_groups`] is turned off.
//!
//! # Example
//!
//! ```
//! use body_render::{body_to_render_geometries, RenderParams};
//! use body_types::cuboid;
//!
//! let body = cuboid(1.0, 1.0, 1.0);
//! let geometries = body_to_render_geometries(&body, &[], &RenderParams::default())?;
//!
//! assert_eq!(geometries.len(), 1);
//! assert_eq!(geometries[0].vertex_count(), 36);
//! assert_eq!(geometries[0].vertex_bytes().len(), 36 * 3 * 4);
//! # Ok::<(), body_render::RenderError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod convert;
mod error;
mod geometry;
mod material;
mod normals;

pub use convert::body_to_render_geometries;
pub use error::{RenderError, RenderResult};
pub use geometry::{RenderGeometry, RenderVertex};
pub use material::{Material, RenderParams};
pub use normals::{polygon_normal, vertex_normals};
