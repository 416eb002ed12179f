//! Texture projection frames.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::CoordSystem;

/// The shape texture coordinates are projected from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TextureProjectionKind {
    /// Projection onto a plane.
    Planar,
    /// Projection onto the six faces of a box.
    Cubic,
    /// Projection onto the side of a cylinder.
    Cylindrical,
}

/// A texture projection: its kind and the frame it is anchored to.
///
/// A projection is an immutable value. Changing the projection of a body
/// replaces it wholesale with a freshly constructed one.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TextureProjection {
    kind: TextureProjectionKind,
    coords: CoordSystem,
}

impl TextureProjection {
    /// Create a projection from its parts.
    #[inline]
    #[must_use]
    pub const fn new(kind: TextureProjectionKind, coords: CoordSystem) -> Self {
        Self { kind, coords }
    }

    /// Planar projection.
    ///
    /// The frame is `(x_dir, x_dir × z_dir, 0)`, `z_dir` being the plane normal.
    ///
    /// # Example
    ///
    /// ```
    /// use body_types::{TextureProjection, TextureProjectionKind, Point3, Vector3};
    ///
    /// let p = TextureProjection::planar(Point3::origin(), Vector3::x(), Vector3::z());
    /// assert_eq!(p.kind(), TextureProjectionKind::Planar);
    /// assert_eq!(p.coords().e2, Vector3::new(0.0, -1.0, 0.0));
    /// assert_eq!(p.coords().e3, Vector3::zeros());
    /// ```
    #[must_use]
    pub fn planar(origin: Point3<f64>, x_dir: Vector3<f64>, z_dir: Vector3<f64>) -> Self {
        Self::new(
            TextureProjectionKind::Planar,
            CoordSystem::new(origin, x_dir, x_dir.cross(&z_dir), Vector3::zeros()),
        )
    }

    /// Cubic projection with the three box edge directions taken verbatim.
    #[must_use]
    pub const fn cubic(
        origin: Point3<f64>,
        x_dir: Vector3<f64>,
        y_dir: Vector3<f64>,
        z_dir: Vector3<f64>,
    ) -> Self {
        Self::new(
            TextureProjectionKind::Cubic,
            CoordSystem::new(origin, x_dir, y_dir, z_dir),
        )
    }

    /// Cylindrical projection.
    ///
    /// `e1` is `x_dir` and `e2` is `z_dir × x_dir`, both scaled to `radius`;
    /// `e3` is the cylinder axis `z_dir`, unscaled. A zero-length direction
    /// stays zero instead of turning into NaN.
    ///
    /// # Example
    ///
    /// ```
    /// use body_types::{TextureProjection, Point3, Vector3};
    ///
    /// let p = TextureProjection::cylindrical(Point3::origin(), 2.0, Vector3::x(), Vector3::z());
    /// assert_eq!(p.coords().e1, Vector3::new(2.0, 0.0, 0.0));
    /// assert_eq!(p.coords().e2, Vector3::new(0.0, 2.0, 0.0));
    /// assert_eq!(p.coords().e3, Vector3::z());
    /// ```
    #[must_use]
    pub fn cylindrical(
        origin: Point3<f64>,
        radius: f64,
        x_dir: Vector3<f64>,
        z_dir: Vector3<f64>,
    ) -> Self {
        Self::new(
            TextureProjectionKind::Cylindrical,
            CoordSystem::new(
                origin,
                with_length(x_dir, radius),
                with_length(z_dir.cross(&x_dir), radius),
                z_dir,
            ),
        )
    }

    /// Kind of the projection.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> TextureProjectionKind {
        self.kind
    }

    /// Frame of the projection.
    #[inline]
    #[must_use]
    pub const fn coords(&self) -> &CoordSystem {
        &self.coords
    }

    /// Same kind, different frame. Used when the owning body is transformed.
    #[inline]
    #[must_use]
    pub fn with_coords(self, coords: CoordSystem) -> Self {
        Self {
            kind: self.kind,
            coords,
        }
    }
}

impl Default for TextureProjection {
    /// Cubic projection on the unit axes at the origin.
    fn default() -> Self {
        Self::cubic(Point3::origin(), Vector3::x(), Vector3::y(), Vector3::z())
    }
}

fn with_length(v: Vector3<f64>, length: f64) -> Vector3<f64> {
    v.try_normalize(0.0).map_or_else(Vector3::zeros, |n| n * length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_is_unit_cubic() {
        let p = TextureProjection::default();
        assert_eq!(p.kind(), TextureProjectionKind::Cubic);
        assert_eq!(*p.coords(), CoordSystem::world());
    }

    #[test]
    fn cubic_keeps_directions_verbatim() {
        let p = TextureProjection::cubic(
            Point3::new(1.0, 1.0, 1.0),
            Vector3::new(2.0, 0.0, 0.0),
            Vector3::new(0.0, 3.0, 0.0),
            Vector3::new(0.0, 0.0, 4.0),
        );
        assert_eq!(p.coords().e1, Vector3::new(2.0, 0.0, 0.0));
        assert_eq!(p.coords().e2, Vector3::new(0.0, 3.0, 0.0));
        assert_eq!(p.coords().e3, Vector3::new(0.0, 0.0, 4.0));
    }

    #[test]
    fn cylindrical_frame_is_orthogonal_with_radius() {
        let p = TextureProjection::cylindrical(
            Point3::origin(),
            2.0,
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
        );
        let c = p.coords();
        assert_relative_eq!(c.e1.x, 2.0);
        assert_relative_eq!(c.e1.y, 0.0);
        assert_relative_eq!(c.e1.z, 0.0);
        assert_eq!(c.e3, Vector3::z());
        assert_relative_eq!(c.e2.norm(), 2.0);
        assert_relative_eq!(c.e2.dot(&c.e1), 0.0);
        assert_relative_eq!(c.e2.dot(&c.e3), 0.0);
    }

    #[test]
    fn cylindrical_rescales_long_directions() {
        let p = TextureProjection::cylindrical(
            Point3::origin(),
            0.5,
            Vector3::new(10.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, 3.0),
        );
        assert_relative_eq!(p.coords().e1.norm(), 0.5);
        assert_relative_eq!(p.coords().e2.norm(), 0.5);
        assert_relative_eq!(p.coords().e3.norm(), 3.0);
    }

    #[test]
    fn cylindrical_zero_direction_stays_zero() {
        let p = TextureProjection::cylindrical(Point3::origin(), 1.0, Vector3::zeros(), Vector3::z());
        assert_eq!(p.coords().e1, Vector3::zeros());
        assert_eq!(p.coords().e2, Vector3::zeros());
    }

    #[test]
    fn with_coords_keeps_kind() {
        let p = TextureProjection::planar(Point3::origin(), Vector3::x(), Vector3::z());
        let moved = p.with_coords(CoordSystem::world());
        assert_eq!(moved.kind(), TextureProjectionKind::Planar);
        assert_eq!(*moved.coords(), CoordSystem::world());
    }
}
