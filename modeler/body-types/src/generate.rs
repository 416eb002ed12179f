//! Ready-made bodies.

use crate::{Body, Polygon, Vertex};
use nalgebra::{Point3, Vector3};

/// Create an axis-aligned cuboid centered on the origin.
///
/// The result has 8 vertices and 6 quad polygons wound counter-clockwise when
/// viewed from outside. Its cubic texture projection is anchored at the
/// minimum corner with unit axes.
///
/// # Example
///
/// ```
/// use body_types::{cuboid, BodyBounds, BodyTopology, Point3};
///
/// let body = cuboid(2.0, 4.0, 6.0);
/// assert_eq!(body.vertex_count(), 8);
/// assert_eq!(body.polygon_count(), 6);
/// assert_eq!(body.bounding_box().max, Point3::new(1.0, 2.0, 3.0));
/// ```
#[must_use]
pub fn cuboid(x_size: f64, y_size: f64, z_size: f64) -> Body {
    let (x, y, z) = (x_size / 2.0, y_size / 2.0, z_size / 2.0);
    let mut body = Body::with_capacity(8, 0, 6);

    body.add_vertex(Vertex::from_coords(-x, -y, -z)); // 0
    body.add_vertex(Vertex::from_coords(x, -y, -z)); // 1
    body.add_vertex(Vertex::from_coords(x, y, -z)); // 2
    body.add_vertex(Vertex::from_coords(-x, y, -z)); // 3
    body.add_vertex(Vertex::from_coords(-x, -y, z)); // 4
    body.add_vertex(Vertex::from_coords(x, -y, z)); // 5
    body.add_vertex(Vertex::from_coords(x, y, z)); // 6
    body.add_vertex(Vertex::from_coords(-x, y, z)); // 7

    // Bottom (-Z), top (+Z), front (-Y), back (+Y), left (-X), right (+X)
    body.add_polygon(Polygon::from([0, 3, 2, 1]));
    body.add_polygon(Polygon::from([4, 5, 6, 7]));
    body.add_polygon(Polygon::from([0, 1, 5, 4]));
    body.add_polygon(Polygon::from([3, 7, 6, 2]));
    body.add_polygon(Polygon::from([0, 4, 7, 3]));
    body.add_polygon(Polygon::from([1, 2, 6, 5]));

    body.set_cubic_texture_projection(
        Point3::new(-x, -y, -z),
        Vector3::x(),
        Vector3::y(),
        Vector3::z(),
    );

    body
}
