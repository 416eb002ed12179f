//! Core body types for the modeler.
//!
//! A [`Body`] is a minimal indexed mesh:
//!
//! - [`Vertex`] - a position
//! - [`Line`] - two vertex slots and an optional material
//! - [`Polygon`] - an ordered loop of vertex slots, an optional material and
//!   an optional curve group
//! - [`TextureProjection`] - the planar, cubic or cylindrical frame texture
//!   coordinates are projected from
//!
//! Lines and polygons refer to vertices by position in the body's vertex
//! sequence. [`Body::remove_vertex`] is the one operation that cascades: it
//! drops every line and polygon touching the vertex and renumbers the rest.
//!
//! # Layer 0 Crate
//!
//! No rendering or windowing dependencies. Renderer inputs are produced by the
//! `body-render` crate.
//!
//! # Units
//!
//! Unit-agnostic; all coordinates are `f64`.
//!
//! # Example
//!
//! ```
//! use body_types::{Body, BodyTopology, Polygon, Vertex};
//!
//! let mut a = Body::new();
//! a.add_vertex(Vertex::from_coords(0.0, 0.0, 0.0));
//! a.add_vertex(Vertex::from_coords(1.0, 0.0, 0.0));
//! a.add_vertex(Vertex::from_coords(0.0, 1.0, 0.0));
//! a.add_polygon(Polygon::new(vec![0, 1, 2]));
//!
//! let b = a.clone();
//! a.merge(&b);
//!
//! assert_eq!(a.vertex_count(), 6);
//! assert_eq!(a.polygon(1).vertex_indices(), &[3, 4, 5]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod body;
mod bounds;
mod coords;
mod error;
mod generate;
mod line;
mod polygon;
mod projection;
pub mod tolerance;
mod traits;
mod vertex;

pub use body::Body;
pub use bounds::{Aabb, Sphere};
pub use coords::CoordSystem;
pub use error::{BodyError, BodyResult};
pub use generate::cuboid;
pub use line::Line;
pub use polygon::Polygon;
pub use projection::{TextureProjection, TextureProjectionKind};
pub use traits::{BodyBounds, BodyTopology, PointMap};
pub use vertex::Vertex;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
