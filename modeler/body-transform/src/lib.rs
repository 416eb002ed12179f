//! Affine transformations for bodies.
//!
//! [`Transform3D`] wraps a 4x4 matrix and implements
//! [`body_types::PointMap`], so it can be handed straight to
//! [`Body::transform`](body_types::Body::transform). The body's texture
//! projection frame is carried along with the geometry.
//!
//! # Example
//!
//! ```
//! use body_transform::Transform3D;
//! use body_types::{cuboid, BodyBounds, Point3};
//!
//! let mut body = cuboid(2.0, 2.0, 2.0);
//! let t = Transform3D::uniform_scale(2.0).then(&Transform3D::translation(10.0, 0.0, 0.0));
//! body.transform(&t);
//!
//! assert_eq!(body.center(), Point3::new(10.0, 0.0, 0.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod transform;

pub use error::{TransformError, TransformResult};
pub use transform::Transform3D;
