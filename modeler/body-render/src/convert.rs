//! Body to render geometry conversion.

use body_types::{Body, BodyTopology, Point3, tolerance};
use hashbrown::HashMap;
use nalgebra::Vector3;
use tracing::{debug, warn};

use crate::normals::NormalTable;
use crate::{Material, RenderError, RenderGeometry, RenderParams, RenderResult};

/// Convert a body into triangle geometries, one per material in use.
///
/// Every polygon is split into a triangle fan around its first vertex, which
/// is exact for convex polygons. Geometries appear in the order their material
/// is first met while walking the polygons. Polygons without a material index
/// share one geometry colored with [`RenderParams::default_diffuse`].
///
/// Lines are not part of the output.
///
/// # Errors
///
/// - [`RenderError::InvalidBody`] if the body fails [`Body::validate`].
/// - [`RenderError::MissingMaterial`] if a polygon's material index is outside
///   `materials`.
///
/// # Example
///
/// ```
/// use body_render::{body_to_render_geometries, Material, RenderParams};
/// use body_types::cuboid;
///
/// let mut body = cuboid(1.0, 1.0, 1.0);
/// body.polygon_mut(0).set_material_index(Some(0));
///
/// let materials = [Material::from_hex(0xff0000)];
/// let geometries = body_to_render_geometries(&body, &materials, &RenderParams::default())?;
///
/// assert_eq!(geometries.len(), 2);
/// assert_eq!(geometries[0].material, materials[0]);
/// assert_eq!(geometries[0].triangle_count(), 2);
/// assert_eq!(geometries[1].triangle_count(), 10);
/// # Ok::<(), body_render::RenderError>(())
/// ```
pub fn body_to_render_geometries(
    body: &Body,
    materials: &[Material],
    params: &RenderParams,
) -> RenderResult<Vec<RenderGeometry>> {
    body.validate()?;

    let normals = NormalTable::new(body, params.smooth_curve_groups);
    let mut geometries: Vec<RenderGeometry> = Vec::new();
    let mut slots: HashMap<Option<usize>, usize> = HashMap::new();
    let mut degenerate = 0usize;

    for (index, polygon) in body.polygons().enumerate() {
        let key = polygon.material_index();
        let slot = match slots.get(&key) {
            Some(&slot) => slot,
            None => {
                let material = match key {
                    Some(material) => *materials.get(material).ok_or(
                        RenderError::MissingMaterial {
                            polygon: index,
                            material,
                            material_count: materials.len(),
                        },
                    )?,
                    None => params.default_material(),
                };
                geometries.push(RenderGeometry::new(material));
                slots.insert(key, geometries.len() - 1);
                geometries.len() - 1
            }
        };

        if tolerance::is_zero(normals.flat(index).norm()) {
            degenerate += 1;
        }

        let indices = polygon.vertex_indices();
        let corner_normals = normals.corner_normals(body, index);
        let geometry = &mut geometries[slot];
        for i in 1..indices.len() - 1 {
            for corner in [0, i, i + 1] {
                geometry.push_vertex(
                    to_f32_point(body.vertex_position(indices[corner])),
                    to_f32_vector(&corner_normals[corner]),
                );
            }
        }
    }

    if degenerate > 0 {
        warn!("{} polygons have no usable normal", degenerate);
    }
    debug!(
        "Converted body: {} polygons into {} geometries",
        body.polygon_count(),
        geometries.len()
    );

    Ok(geometries)
}

#[allow(clippy::cast_possible_truncation)]
fn to_f32_point(p: &Point3<f64>) -> [f32; 3] {
    [p.x as f32, p.y as f32, p.z as f32]
}

#[allow(clippy::cast_possible_truncation)]
fn to_f32_vector(v: &Vector3<f64>) -> [f32; 3] {
    [v.x as f32, v.y as f32, v.z as f32]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use body_types::{BodyError, Polygon, Vertex, cuboid};

    fn quad() -> Body {
        let mut body = Body::new();
        body.add_vertex(Vertex::from_coords(0.0, 0.0, 0.0));
        body.add_vertex(Vertex::from_coords(1.0, 0.0, 0.0));
        body.add_vertex(Vertex::from_coords(1.0, 1.0, 0.0));
        body.add_vertex(Vertex::from_coords(0.0, 1.0, 0.0));
        body.add_polygon(Polygon::new(vec![0, 1, 2, 3]));
        body
    }

    #[test]
    fn quad_becomes_two_triangles() {
        let geometries = body_to_render_geometries(&quad(), &[], &RenderParams::default()).unwrap();
        assert_eq!(geometries.len(), 1);

        let geometry = &geometries[0];
        assert_eq!(geometry.vertex_count(), 6);
        assert_eq!(geometry.normal_array.len(), geometry.vertex_array.len());
        #[rustfmt::skip]
        assert_eq!(geometry.vertex_array, vec![
            0.0, 0.0, 0.0,  1.0, 0.0, 0.0,  1.0, 1.0, 0.0,
            0.0, 0.0, 0.0,  1.0, 1.0, 0.0,  0.0, 1.0, 0.0,
        ]);
        for normal in geometry.normal_array.chunks_exact(3) {
            assert_eq!(normal, &[0.0, 0.0, 1.0]);
        }
    }

    #[test]
    fn unassigned_polygons_use_default_diffuse() {
        let params = RenderParams::default().with_default_diffuse([0.1, 0.2, 0.3]);
        let geometries = body_to_render_geometries(&quad(), &[], &params).unwrap();
        assert_eq!(geometries[0].material.diffuse, [0.1, 0.2, 0.3]);
    }

    #[test]
    fn groups_follow_first_use_order() {
        let mut body = cuboid(1.0, 1.0, 1.0);
        for (polygon, material) in [(0, 2), (1, 0), (2, 2), (3, 0), (4, 1), (5, 1)] {
            body.polygon_mut(polygon).set_material_index(Some(material));
        }
        let materials = [
            Material::from_hex(0xff0000),
            Material::from_hex(0x00ff00),
            Material::from_hex(0x0000ff),
        ];

        let geometries =
            body_to_render_geometries(&body, &materials, &RenderParams::default()).unwrap();

        let order: Vec<_> = geometries.iter().map(|g| g.material).collect();
        assert_eq!(order, vec![materials[2], materials[0], materials[1]]);
        for geometry in &geometries {
            assert_eq!(geometry.triangle_count(), 4);
        }
    }

    #[test]
    fn missing_material_is_reported() {
        let mut body = quad();
        body.polygon_mut(0).set_material_index(Some(3));
        let err = body_to_render_geometries(&body, &[Material::default()], &RenderParams::default())
            .unwrap_err();
        assert_eq!(
            err,
            RenderError::MissingMaterial {
                polygon: 0,
                material: 3,
                material_count: 1,
            }
        );
    }

    #[test]
    fn invalid_body_is_rejected() {
        let mut body = quad();
        body.add_polygon(Polygon::new(vec![0, 1, 9]));
        let err = body_to_render_geometries(&body, &[], &RenderParams::default()).unwrap_err();
        assert_eq!(
            err,
            RenderError::InvalidBody(BodyError::DanglingPolygonIndex {
                polygon: 1,
                vertex: 9,
                vertex_count: 4,
            })
        );
    }

    #[test]
    fn no_polygons_no_geometries() {
        let mut body = Body::new();
        body.add_vertex(Vertex::from_coords(0.0, 0.0, 0.0));
        body.add_vertex(Vertex::from_coords(1.0, 0.0, 0.0));
        body.add_line(body_types::Line::new(0, 1));
        let geometries = body_to_render_geometries(&body, &[], &RenderParams::default()).unwrap();
        assert!(geometries.is_empty());
    }

    #[test]
    fn collinear_polygon_exports_zero_normals() {
        let mut body = Body::new();
        body.add_vertex(Vertex::from_coords(0.11, 0.22, 0.33));
        body.add_vertex(Vertex::from_coords(0.33, 0.66, 0.99));
        body.add_vertex(Vertex::from_coords(0.77, 1.54, 2.31));
        body.add_polygon(Polygon::new(vec![0, 1, 2]));

        let geometries = body_to_render_geometries(&body, &[], &RenderParams::default()).unwrap();
        assert_eq!(geometries[0].vertex_count(), 3);
        for normal in geometries[0].normal_array.chunks_exact(3) {
            assert_eq!(normal, &[0.0, 0.0, 0.0]);
        }
    }

    #[test]
    fn curve_group_smoothing() {
        // Cube side faces in one curve group: corners on vertical edges blend.
        let mut body = cuboid(2.0, 2.0, 2.0);
        for polygon in 2..6 {
            body.polygon_mut(polygon).set_curve_group(Some(0));
        }

        let smooth = body_to_render_geometries(&body, &[], &RenderParams::default()).unwrap();
        let flat = body_to_render_geometries(&body, &[], &RenderParams::flat()).unwrap();

        // First corner of the front face (-Y) is vertex 0, shared with the left face.
        let front = 2 * 2 * 9;
        let half = std::f32::consts::FRAC_1_SQRT_2;
        let n = &smooth[0].normal_array[front..front + 3];
        assert_relative_eq!(n[0], -half, epsilon = 1e-6);
        assert_relative_eq!(n[1], -half, epsilon = 1e-6);
        assert_relative_eq!(n[2], 0.0, epsilon = 1e-6);

        let n = &flat[0].normal_array[front..front + 3];
        assert_eq!(n, &[0.0, -1.0, 0.0]);

        // Bottom face has no group and stays flat either way.
        assert_eq!(&smooth[0].normal_array[0..3], &[0.0, 0.0, -1.0]);
    }
}
