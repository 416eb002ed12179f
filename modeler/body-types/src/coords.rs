//! Coordinate systems: an origin with three basis vectors.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A coordinate system given as an origin and three direction vectors.
///
/// The basis vectors are neither required to be orthogonal nor unit length:
/// texture projections encode scale (e.g. a cylinder radius) in their lengths,
/// and a planar projection leaves `e3` at zero.
///
/// # Example
///
/// ```
/// use body_types::{CoordSystem, Point3, Vector3};
///
/// let coords = CoordSystem::new(
///     Point3::new(1.0, 0.0, 0.0),
///     Vector3::x(),
///     Vector3::y(),
///     Vector3::z(),
/// );
///
/// let [origin, x, _, _] = coords.to_absolute();
/// assert_eq!(origin, Point3::new(1.0, 0.0, 0.0));
/// assert_eq!(x, Point3::new(2.0, 0.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoordSystem {
    /// Origin of the system.
    pub origin: Point3<f64>,
    /// First basis vector.
    pub e1: Vector3<f64>,
    /// Second basis vector.
    pub e2: Vector3<f64>,
    /// Third basis vector.
    pub e3: Vector3<f64>,
}

impl CoordSystem {
    /// Create a coordinate system from an origin and three direction vectors.
    #[inline]
    #[must_use]
    pub const fn new(
        origin: Point3<f64>,
        e1: Vector3<f64>,
        e2: Vector3<f64>,
        e3: Vector3<f64>,
    ) -> Self {
        Self { origin, e1, e2, e3 }
    }

    /// Unit axes at the world origin.
    #[must_use]
    pub fn world() -> Self {
        Self::new(Point3::origin(), Vector3::x(), Vector3::y(), Vector3::z())
    }

    /// The system as four absolute points: origin, origin+e1, origin+e2, origin+e3.
    #[must_use]
    pub fn to_absolute(&self) -> [Point3<f64>; 4] {
        [
            self.origin,
            self.origin + self.e1,
            self.origin + self.e2,
            self.origin + self.e3,
        ]
    }

    /// Rebuild a system from four absolute points (the inverse of [`Self::to_absolute`]).
    #[must_use]
    pub fn from_absolute([origin, p1, p2, p3]: [Point3<f64>; 4]) -> Self {
        Self {
            origin,
            e1: p1 - origin,
            e2: p2 - origin,
            e3: p3 - origin,
        }
    }
}

impl Default for CoordSystem {
    fn default() -> Self {
        Self::world()
    }
}
