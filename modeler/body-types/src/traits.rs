//! Traits for body types.

use crate::{Aabb, Line, Polygon, Sphere, Vertex};
use nalgebra::Point3;

/// Trait for types that expose body topology.
///
/// Lookups return `None` for out-of-range slots; the panicking accessors live
/// on [`Body`](crate::Body) itself.
pub trait BodyTopology {
    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Number of lines.
    fn line_count(&self) -> usize;

    /// Number of polygons.
    fn polygon_count(&self) -> usize;

    /// Check if there is nothing at all in the body.
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0 && self.line_count() == 0 && self.polygon_count() == 0
    }

    /// Get a vertex by slot.
    fn get_vertex(&self, index: usize) -> Option<&Vertex>;

    /// Get a line by slot.
    fn get_line(&self, index: usize) -> Option<&Line>;

    /// Get a polygon by slot.
    fn get_polygon(&self, index: usize) -> Option<&Polygon>;

    /// Iterate over all vertices in slot order.
    fn vertices(&self) -> impl Iterator<Item = &Vertex>;

    /// Iterate over all lines in slot order.
    fn lines(&self) -> impl Iterator<Item = &Line>;

    /// Iterate over all polygons in slot order.
    fn polygons(&self) -> impl Iterator<Item = &Polygon>;
}

/// Trait for types that can compute bounding volumes.
pub trait BodyBounds {
    /// Axis-aligned bounding box.
    ///
    /// Without vertices this is [`Aabb::empty`]: `min = +∞`, `max = -∞`.
    fn bounding_box(&self) -> Aabb;

    /// Bounding box, or `None` when there are no vertices.
    fn bounding_box_opt(&self) -> Option<Aabb> {
        let b = self.bounding_box();
        if b.is_empty() { None } else { Some(b) }
    }

    /// Center of the bounding box (not the vertex centroid).
    fn center(&self) -> Point3<f64> {
        self.bounding_box().center()
    }

    /// Sphere around [`Self::center`] reaching the farthest vertex.
    fn bounding_sphere(&self) -> Sphere;
}

/// A mapping applied to points, used by [`Body::transform`](crate::Body::transform).
///
/// Implemented for every `Fn(&Point3<f64>) -> Point3<f64>`, so plain closures
/// work as transformations.
///
/// # Example
///
/// ```
/// use body_types::{PointMap, Point3, Vector3};
///
/// let shift = |p: &Point3<f64>| p + Vector3::new(1.0, 0.0, 0.0);
/// assert_eq!(shift.map_point(&Point3::origin()), Point3::new(1.0, 0.0, 0.0));
/// ```
pub trait PointMap {
    /// Map a single point.
    fn map_point(&self, point: &Point3<f64>) -> Point3<f64>;
}

impl<F> PointMap for F
where
    F: Fn(&Point3<f64>) -> Point3<f64>,
{
    fn map_point(&self, point: &Point3<f64>) -> Point3<f64> {
        self(point)
    }
}
