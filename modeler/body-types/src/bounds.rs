//! Bounding volumes: axis-aligned box and sphere.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::tolerance;

/// An axis-aligned bounding box (AABB).
///
/// Defined by minimum and maximum corner points. The "empty" box has
/// `min = +∞` and `max = -∞` on every axis, which is also what a body
/// without vertices reports.
///
/// # Example
///
/// ```
/// use body_types::{Aabb, Point3};
///
/// let aabb = Aabb::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(10.0, 10.0, 10.0),
/// );
///
/// assert_eq!(aabb.center(), Point3::new(5.0, 5.0, 5.0));
/// assert!(aabb.contains(&Point3::new(5.0, 5.0, 5.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aabb {
    /// Minimum corner (smallest x, y, z values).
    pub min: Point3<f64>,
    /// Maximum corner (largest x, y, z values).
    pub max: Point3<f64>,
}

impl Aabb {
    /// Create a new AABB from two corners.
    ///
    /// The corners are swapped per axis if `min > max`.
    #[must_use]
    pub fn new(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self {
            min: Point3::new(min.x.min(max.x), min.y.min(max.y), min.z.min(max.z)),
            max: Point3::new(min.x.max(max.x), min.y.max(max.y), min.z.max(max.z)),
        }
    }

    /// Create the empty (inverted) AABB.
    ///
    /// # Example
    ///
    /// ```
    /// use body_types::{Aabb, Point3};
    ///
    /// let mut aabb = Aabb::empty();
    /// assert!(aabb.is_empty());
    /// assert_eq!(aabb.min.x, f64::INFINITY);
    ///
    /// aabb.expand_to_include(&Point3::new(1.0, 2.0, 3.0));
    /// assert!(!aabb.is_empty());
    /// ```
    #[must_use]
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Create an AABB from an iterator of points.
    ///
    /// Returns [`Aabb::empty`] if the iterator yields nothing.
    #[must_use]
    pub fn from_points<'a>(points: impl Iterator<Item = &'a Point3<f64>>) -> Self {
        let mut aabb = Self::empty();
        for point in points {
            aabb.expand_to_include(point);
        }
        aabb
    }

    /// Check if the AABB is empty (min > max on some axis).
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Midpoint of the two corners.
    ///
    /// For the empty box every component is NaN (`∞ + -∞`).
    #[inline]
    #[must_use]
    pub fn center(&self) -> Point3<f64> {
        Point3::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
            (self.min.z + self.max.z) * 0.5,
        )
    }

    /// Check if the AABB contains a point. Boundary points are inside.
    #[inline]
    #[must_use]
    pub fn contains(&self, point: &Point3<f64>) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Expand the AABB to include a point.
    pub fn expand_to_include(&mut self, point: &Point3<f64>) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::empty()
    }
}

/// A bounding sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sphere {
    /// Sphere center.
    pub center: Point3<f64>,
    /// Sphere radius.
    pub radius: f64,
}

impl Sphere {
    /// Create a sphere from center and radius.
    #[inline]
    #[must_use]
    pub const fn new(center: Point3<f64>, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Sphere center.
    #[inline]
    #[must_use]
    pub const fn center(&self) -> Point3<f64> {
        self.center
    }

    /// Check if a point lies inside the sphere, within tolerance.
    ///
    /// # Example
    ///
    /// ```
    /// use body_types::{Sphere, Point3};
    ///
    /// let sphere = Sphere::new(Point3::origin(), 1.0);
    /// assert!(sphere.contains(&Point3::new(1.0, 0.0, 0.0)));
    /// assert!(!sphere.contains(&Point3::new(1.1, 0.0, 0.0)));
    /// ```
    #[must_use]
    pub fn contains(&self, point: &Point3<f64>) -> bool {
        tolerance::is_lower_or_equal(nalgebra::distance(&self.center, point), self.radius)
    }
}
