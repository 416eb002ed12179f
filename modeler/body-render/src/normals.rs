//! Polygon and vertex normals.

use body_types::{Body, BodyTopology, tolerance};
use hashbrown::HashMap;
use nalgebra::Vector3;

/// Unit normal of a polygon, following its winding (counter-clockwise seen
/// from the front).
///
/// Uses Newell's method, so non-planar and concave loops get a sensible
/// average normal. Degenerate polygons (collinear or coincident vertices)
/// yield the zero vector; the Newell sum counts as zero within
/// [`tolerance::EPSILON`].
///
/// # Panics
///
/// Panics if `index` is not a polygon slot or the polygon references missing
/// vertices.
///
/// # Example
///
/// ```
/// use body_render::polygon_normal;
/// use body_types::{Body, Polygon, Vector3, Vertex};
///
/// let mut body = Body::new();
/// body.add_vertex(Vertex::from_coords(0.0, 0.0, 0.0));
/// body.add_vertex(Vertex::from_coords(1.0, 0.0, 0.0));
/// body.add_vertex(Vertex::from_coords(0.0, 1.0, 0.0));
/// body.add_polygon(Polygon::new(vec![0, 1, 2]));
///
/// assert_eq!(polygon_normal(&body, 0), Vector3::z());
/// ```
#[must_use]
pub fn polygon_normal(body: &Body, index: usize) -> Vector3<f64> {
    let indices = body.polygon(index).vertex_indices();
    let mut normal = Vector3::zeros();
    for (i, &current) in indices.iter().enumerate() {
        let next = indices[(i + 1) % indices.len()];
        let a = body.vertex_position(current);
        let b = body.vertex_position(next);
        normal.x += (a.y - b.y) * (a.z + b.z);
        normal.y += (a.z - b.z) * (a.x + b.x);
        normal.z += (a.x - b.x) * (a.y + b.y);
    }
    unit_or_zero(normal)
}

/// Normalize `v`, or return zero when its length is within tolerance of zero.
pub(crate) fn unit_or_zero(v: Vector3<f64>) -> Vector3<f64> {
    let length = v.norm();
    if tolerance::is_zero(length) {
        Vector3::zeros()
    } else {
        v / length
    }
}

/// Normals for each corner of polygon `index`, in vertex slot order.
///
/// A polygon without a curve group gets its flat normal at every corner.
/// A polygon with a curve group gets, per corner, the normalized sum of the
/// normals of all polygons in the same curve group that use that vertex.
///
/// Builds normals for the whole body; prefer
/// [`body_to_render_geometries`](crate::body_to_render_geometries) when
/// converting every polygon.
///
/// # Panics
///
/// Panics if `index` is not a polygon slot or the body references missing
/// vertices.
#[must_use]
pub fn vertex_normals(body: &Body, index: usize) -> Vec<Vector3<f64>> {
    NormalTable::new(body, true).corner_normals(body, index)
}

/// Per-polygon flat normals plus smoothed normals per (vertex, curve group).
pub(crate) struct NormalTable {
    flat: Vec<Vector3<f64>>,
    smooth: HashMap<(usize, usize), Vector3<f64>>,
}

impl NormalTable {
    pub(crate) fn new(body: &Body, smooth_curve_groups: bool) -> Self {
        let flat: Vec<_> = (0..body.polygon_count())
            .map(|i| polygon_normal(body, i))
            .collect();

        let mut smooth: HashMap<(usize, usize), Vector3<f64>> = HashMap::new();
        if smooth_curve_groups {
            for (polygon, normal) in body.polygons().zip(&flat) {
                let Some(group) = polygon.curve_group() else {
                    continue;
                };
                for &vertex in polygon.vertex_indices() {
                    *smooth.entry((vertex, group)).or_insert_with(Vector3::zeros) += normal;
                }
            }
            for normal in smooth.values_mut() {
                *normal = unit_or_zero(*normal);
            }
        }

        Self { flat, smooth }
    }

    /// Flat normal of polygon `index`.
    pub(crate) fn flat(&self, index: usize) -> Vector3<f64> {
        self.flat[index]
    }

    pub(crate) fn corner_normals(&self, body: &Body, index: usize) -> Vec<Vector3<f64>> {
        let polygon = body.polygon(index);
        let flat = self.flat[index];
        polygon
            .vertex_indices()
            .iter()
            .map(|&vertex| {
                polygon
                    .curve_group()
                    .and_then(|group| self.smooth.get(&(vertex, group)))
                    .copied()
                    .unwrap_or(flat)
            })
            .collect()
    }
}
