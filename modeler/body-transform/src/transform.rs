//! 3D transformation matrix operations.

use body_types::{Body, PointMap};
use nalgebra::{Matrix4, Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{TransformError, TransformResult};

/// A 3D affine transformation represented as a 4x4 matrix.
///
/// # Example
///
/// ```
/// use body_transform::Transform3D;
/// use body_types::Point3;
///
/// let translate = Transform3D::translation(1.0, 2.0, 3.0);
/// let scale = Transform3D::uniform_scale(2.0);
/// let combined = translate.then(&scale);
///
/// assert_eq!(combined.transform_point(&Point3::origin()), Point3::new(2.0, 4.0, 6.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Transform3D {
    /// The 4x4 transformation matrix in column-major order.
    matrix: Matrix4<f64>,
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform3D {
    /// Create a transformation from a 4x4 matrix.
    #[must_use]
    pub const fn from_matrix(matrix: Matrix4<f64>) -> Self {
        Self { matrix }
    }

    /// The identity transformation.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Translation by `(tx, ty, tz)`.
    #[must_use]
    pub fn translation(tx: f64, ty: f64, tz: f64) -> Self {
        Self {
            matrix: Matrix4::new_translation(&Vector3::new(tx, ty, tz)),
        }
    }

    /// Translation by a vector.
    #[must_use]
    pub fn from_translation(v: Vector3<f64>) -> Self {
        Self::translation(v.x, v.y, v.z)
    }

    /// Uniform scaling around the origin.
    #[must_use]
    pub fn uniform_scale(factor: f64) -> Self {
        Self::scale(factor, factor, factor)
    }

    /// Non-uniform scaling around the origin.
    #[must_use]
    pub fn scale(sx: f64, sy: f64, sz: f64) -> Self {
        Self {
            matrix: Matrix4::new_nonuniform_scaling(&Vector3::new(sx, sy, sz)),
        }
    }

    /// Rotation around the X axis by `angle` radians.
    #[must_use]
    pub fn rotation_x(angle: f64) -> Self {
        let (sin_a, cos_a) = angle.sin_cos();
        #[rustfmt::skip]
        let matrix = Matrix4::new(
            1.0,   0.0,    0.0, 0.0,
            0.0, cos_a, -sin_a, 0.0,
            0.0, sin_a,  cos_a, 0.0,
            0.0,   0.0,    0.0, 1.0,
        );
        Self { matrix }
    }

    /// Rotation around the Y axis by `angle` radians.
    #[must_use]
    pub fn rotation_y(angle: f64) -> Self {
        let (sin_a, cos_a) = angle.sin_cos();
        #[rustfmt::skip]
        let matrix = Matrix4::new(
             cos_a, 0.0, sin_a, 0.0,
               0.0, 1.0,   0.0, 0.0,
            -sin_a, 0.0, cos_a, 0.0,
               0.0, 0.0,   0.0, 1.0,
        );
        Self { matrix }
    }

    /// Rotation around the Z axis by `angle` radians.
    #[must_use]
    pub fn rotation_z(angle: f64) -> Self {
        let (sin_a, cos_a) = angle.sin_cos();
        #[rustfmt::skip]
        let matrix = Matrix4::new(
            cos_a, -sin_a, 0.0, 0.0,
            sin_a,  cos_a, 0.0, 0.0,
              0.0,    0.0, 1.0, 0.0,
              0.0,    0.0, 0.0, 1.0,
        );
        Self { matrix }
    }

    /// Rotation around an arbitrary axis through the origin.
    ///
    /// Uses Rodrigues' rotation formula. Returns the identity for a zero axis.
    #[must_use]
    #[allow(clippy::many_single_char_names)]
    pub fn rotation_axis(axis: Vector3<f64>, angle: f64) -> Self {
        let Some(axis) = axis.try_normalize(f64::EPSILON) else {
            return Self::identity();
        };
        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;
        let (x, y, z) = (axis.x, axis.y, axis.z);

        #[rustfmt::skip]
        let matrix = Matrix4::new(
            t*x*x + c,     t*x*y - s*z,   t*x*z + s*y,   0.0,
            t*x*y + s*z,   t*y*y + c,     t*y*z - s*x,   0.0,
            t*x*z - s*y,   t*y*z + s*x,   t*z*z + c,     0.0,
            0.0,           0.0,           0.0,           1.0,
        );
        Self { matrix }
    }

    /// Rotation around an axis through `origin`.
    #[must_use]
    pub fn rotation_about(origin: Point3<f64>, axis: Vector3<f64>, angle: f64) -> Self {
        Self::from_translation(-origin.coords)
            .then(&Self::rotation_axis(axis, angle))
            .then(&Self::from_translation(origin.coords))
    }

    /// The underlying 4x4 matrix.
    #[must_use]
    pub const fn matrix(&self) -> &Matrix4<f64> {
        &self.matrix
    }

    /// Compose with another transformation: the result applies `self` first,
    /// then `other`.
    #[must_use]
    pub fn then(&self, other: &Self) -> Self {
        Self {
            matrix: other.matrix * self.matrix,
        }
    }

    /// The inverse transformation.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::NotInvertible`] for singular matrices, such as
    /// a scale with a zero factor.
    pub fn inverse(&self) -> TransformResult<Self> {
        self.matrix
            .try_inverse()
            .map(Self::from_matrix)
            .ok_or(TransformError::NotInvertible)
    }

    /// Transform a point (translation applies).
    #[must_use]
    pub fn transform_point(&self, point: &Point3<f64>) -> Point3<f64> {
        self.matrix.transform_point(point)
    }

    /// Transform a direction vector (translation ignored).
    #[must_use]
    pub fn transform_vector(&self, vector: &Vector3<f64>) -> Vector3<f64> {
        self.matrix.transform_vector(vector)
    }

    /// Return a transformed copy of `body`, projection frame included.
    #[must_use]
    pub fn apply_to_body(&self, body: &Body) -> Body {
        let mut result = body.clone();
        result.transform(self);
        result
    }
}

impl PointMap for Transform3D {
    fn map_point(&self, point: &Point3<f64>) -> Point3<f64> {
        self.transform_point(point)
    }
}
