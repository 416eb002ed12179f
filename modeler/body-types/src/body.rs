//! The body: vertices, lines, polygons and a texture projection.

use crate::{
    Aabb, BodyBounds, BodyError, BodyResult, BodyTopology, CoordSystem, Line, PointMap, Polygon,
    Sphere, TextureProjection, TextureProjectionKind, Vertex, tolerance,
};
use nalgebra::{Point3, Vector3};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An indexed 3D body.
///
/// Lines and polygons reference vertices by their slot in the vertex
/// sequence. Slots are positional: removing an element shifts every later
/// element down by one. [`Body::remove_vertex`] renumbers all references so
/// that none is ever left dangling; any slot index a caller cached for a later
/// element is invalidated by a removal.
///
/// Material and curve group indices on lines and polygons point into tables
/// owned by the caller and are stored without validation.
///
/// A body always has exactly one [`TextureProjection`]; a new or cleared body
/// gets the unit cubic projection at the origin.
///
/// # Example
///
/// ```
/// use body_types::{Body, BodyBounds, BodyTopology, Polygon, Vertex, Point3};
///
/// let mut body = Body::new();
/// body.add_vertex(Vertex::from_coords(0.0, 0.0, 0.0));
/// body.add_vertex(Vertex::from_coords(2.0, 0.0, 0.0));
/// body.add_vertex(Vertex::from_coords(0.0, 2.0, 0.0));
/// body.add_polygon(Polygon::new(vec![0, 1, 2]));
///
/// assert_eq!(body.center(), Point3::new(1.0, 1.0, 0.0));
///
/// body.remove_vertex(0);
/// assert_eq!(body.vertex_count(), 2);
/// assert_eq!(body.polygon_count(), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Body {
    vertices: Vec<Vertex>,
    lines: Vec<Line>,
    polygons: Vec<Polygon>,
    projection: TextureProjection,
}

impl Body {
    /// Create an empty body with the default cubic projection.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty body with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(vertex_count: usize, line_count: usize, polygon_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            lines: Vec::with_capacity(line_count),
            polygons: Vec::with_capacity(polygon_count),
            projection: TextureProjection::default(),
        }
    }

    // =========================================================================
    // Append
    // =========================================================================

    /// Append a vertex and return its slot.
    pub fn add_vertex(&mut self, vertex: Vertex) -> usize {
        self.vertices.push(vertex);
        self.vertices.len() - 1
    }

    /// Append a line and return its slot.
    ///
    /// The line's vertex references are not checked against the body.
    pub fn add_line(&mut self, line: Line) -> usize {
        self.lines.push(line);
        self.lines.len() - 1
    }

    /// Append a polygon and return its slot.
    ///
    /// The polygon's vertex references are not checked against the body.
    pub fn add_polygon(&mut self, polygon: Polygon) -> usize {
        self.polygons.push(polygon);
        self.polygons.len() - 1
    }

    // =========================================================================
    // Access
    // =========================================================================

    /// Vertex at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[inline]
    #[must_use]
    pub fn vertex(&self, index: usize) -> &Vertex {
        &self.vertices[index]
    }

    /// Mutable vertex at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[inline]
    pub fn vertex_mut(&mut self, index: usize) -> &mut Vertex {
        &mut self.vertices[index]
    }

    /// Position of the vertex at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[inline]
    #[must_use]
    pub fn vertex_position(&self, index: usize) -> &Point3<f64> {
        &self.vertices[index].position
    }

    /// Move the vertex at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[inline]
    pub fn set_vertex_position(&mut self, index: usize, position: Point3<f64>) {
        self.vertices[index].position = position;
    }

    /// Line at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[inline]
    #[must_use]
    pub fn line(&self, index: usize) -> &Line {
        &self.lines[index]
    }

    /// Mutable line at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[inline]
    pub fn line_mut(&mut self, index: usize) -> &mut Line {
        &mut self.lines[index]
    }

    /// Polygon at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[inline]
    #[must_use]
    pub fn polygon(&self, index: usize) -> &Polygon {
        &self.polygons[index]
    }

    /// Mutable polygon at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[inline]
    pub fn polygon_mut(&mut self, index: usize) -> &mut Polygon {
        &mut self.polygons[index]
    }

    // =========================================================================
    // Bulk attributes
    // =========================================================================

    /// Assign `material` to every line.
    pub fn set_lines_material_index(&mut self, material: Option<usize>) {
        for line in &mut self.lines {
            line.set_material_index(material);
        }
    }

    /// Assign `material` to every polygon.
    pub fn set_polygons_material_index(&mut self, material: Option<usize>) {
        for polygon in &mut self.polygons {
            polygon.set_material_index(material);
        }
    }

    /// Assign `group` as the curve group of every polygon.
    pub fn set_polygons_curve_group(&mut self, group: Option<usize>) {
        for polygon in &mut self.polygons {
            polygon.set_curve_group(group);
        }
    }

    // =========================================================================
    // Removal
    // =========================================================================

    /// Remove a vertex together with every line and polygon that uses it.
    ///
    /// Surviving references above `index` move down by one, references below
    /// it are untouched. Lines are renumbered and removed first, then polygons,
    /// then the vertex slot itself, so every reference still held is valid at
    /// each step.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use body_types::{Body, BodyTopology, Line, Vertex};
    ///
    /// let mut body = Body::new();
    /// for x in 0..4 {
    ///     body.add_vertex(Vertex::from_coords(f64::from(x), 0.0, 0.0));
    /// }
    /// body.add_line(Line::new(0, 1));
    /// body.add_line(Line::new(2, 3));
    ///
    /// body.remove_vertex(1);
    ///
    /// assert_eq!(body.line_count(), 1);
    /// assert_eq!(body.line(0).beg_vertex_index(), 1);
    /// assert_eq!(body.line(0).end_vertex_index(), 2);
    /// ```
    pub fn remove_vertex(&mut self, index: usize) {
        let mut lines_to_delete = Vec::new();
        for (i, line) in self.lines.iter_mut().enumerate() {
            if line.references(index) {
                lines_to_delete.push(i);
                continue;
            }
            if line.beg_vertex_index() > index {
                line.set_beg_vertex_index(line.beg_vertex_index() - 1);
            }
            if line.end_vertex_index() > index {
                line.set_end_vertex_index(line.end_vertex_index() - 1);
            }
        }

        let mut polygons_to_delete = Vec::new();
        for (i, polygon) in self.polygons.iter_mut().enumerate() {
            if polygon.references(index) {
                polygons_to_delete.push(i);
                continue;
            }
            for vertex in polygon.vertex_indices_mut() {
                if *vertex > index {
                    *vertex -= 1;
                }
            }
        }

        // Each earlier removal shifts the remaining marked slots down by one.
        for (removed, &line) in lines_to_delete.iter().enumerate() {
            self.remove_line(line - removed);
        }
        for (removed, &polygon) in polygons_to_delete.iter().enumerate() {
            self.remove_polygon(polygon - removed);
        }

        self.vertices.remove(index);

        debug!(
            "Removed vertex {}: {} lines and {} polygons cascaded",
            index,
            lines_to_delete.len(),
            polygons_to_delete.len()
        );
    }

    /// Remove the line at `index`; later lines shift down by one.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn remove_line(&mut self, index: usize) {
        self.lines.remove(index);
    }

    /// Remove the polygon at `index`; later polygons shift down by one.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn remove_polygon(&mut self, index: usize) {
        self.polygons.remove(index);
    }

    /// Remove everything and restore the default cubic projection.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.lines.clear();
        self.polygons.clear();
        self.projection = TextureProjection::default();
    }

    // =========================================================================
    // Texture projection
    // =========================================================================

    /// The active texture projection.
    #[inline]
    #[must_use]
    pub const fn texture_projection(&self) -> &TextureProjection {
        &self.projection
    }

    /// Kind of the active texture projection.
    #[inline]
    #[must_use]
    pub const fn texture_projection_kind(&self) -> TextureProjectionKind {
        self.projection.kind()
    }

    /// Frame of the active texture projection.
    #[inline]
    #[must_use]
    pub const fn texture_projection_coords(&self) -> &CoordSystem {
        self.projection.coords()
    }

    /// Replace the active texture projection.
    #[inline]
    pub fn set_texture_projection(&mut self, projection: TextureProjection) {
        self.projection = projection;
    }

    /// Switch to a planar projection. See [`TextureProjection::planar`].
    pub fn set_planar_texture_projection(
        &mut self,
        origin: Point3<f64>,
        x_dir: Vector3<f64>,
        z_dir: Vector3<f64>,
    ) {
        self.projection = TextureProjection::planar(origin, x_dir, z_dir);
    }

    /// Switch to a cubic projection. See [`TextureProjection::cubic`].
    pub fn set_cubic_texture_projection(
        &mut self,
        origin: Point3<f64>,
        x_dir: Vector3<f64>,
        y_dir: Vector3<f64>,
        z_dir: Vector3<f64>,
    ) {
        self.projection = TextureProjection::cubic(origin, x_dir, y_dir, z_dir);
    }

    /// Switch to a cylindrical projection. See [`TextureProjection::cylindrical`].
    pub fn set_cylindrical_texture_projection(
        &mut self,
        origin: Point3<f64>,
        radius: f64,
        x_dir: Vector3<f64>,
        z_dir: Vector3<f64>,
    ) {
        self.projection = TextureProjection::cylindrical(origin, radius, x_dir, z_dir);
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Apply a point mapping to every vertex and to the projection frame.
    ///
    /// The frame is mapped as four absolute points (origin and origin + each
    /// axis) and turned back into direction vectors afterwards, so it follows
    /// the geometry under rotation, scaling and translation alike.
    ///
    /// # Example
    ///
    /// ```
    /// use body_types::{Body, Vertex, Point3, Vector3};
    ///
    /// let mut body = Body::new();
    /// body.add_vertex(Vertex::from_coords(1.0, 0.0, 0.0));
    ///
    /// body.transform(&|p: &Point3<f64>| Point3::from(p.coords * 2.0));
    ///
    /// assert_eq!(*body.vertex_position(0), Point3::new(2.0, 0.0, 0.0));
    /// assert_eq!(body.texture_projection_coords().e1, Vector3::new(2.0, 0.0, 0.0));
    /// ```
    pub fn transform<M: PointMap + ?Sized>(&mut self, mapping: &M) {
        for vertex in &mut self.vertices {
            vertex.position = mapping.map_point(&vertex.position);
        }

        let absolute = self
            .projection
            .coords()
            .to_absolute()
            .map(|p| mapping.map_point(&p));
        self.projection = self
            .projection
            .with_coords(CoordSystem::from_absolute(absolute));
    }

    /// Translate the body so its bounding box is centered on the origin.
    ///
    /// Unlike [`Body::transform`], this leaves the texture projection where it
    /// was.
    pub fn offset_to_origin(&mut self) {
        let offset = -self.center().coords;
        for vertex in &mut self.vertices {
            vertex.position += offset;
        }
    }

    /// Append a copy of another body.
    ///
    /// Vertex references of the copied lines and polygons are shifted by this
    /// body's vertex count before the merge. The projection and the material
    /// and curve group numbering of this body are left as they are.
    pub fn merge(&mut self, other: &Self) {
        let offset = self.vertices.len();

        self.vertices.extend(other.vertices.iter().cloned());

        self.lines.extend(other.lines.iter().map(|line| {
            let mut line = line.clone();
            line.offset_indices(offset);
            line
        }));

        self.polygons.extend(other.polygons.iter().map(|polygon| {
            let mut polygon = polygon.clone();
            for vertex in polygon.vertex_indices_mut() {
                *vertex += offset;
            }
            polygon
        }));

        debug!(
            "Merged body: +{} vertices, +{} lines, +{} polygons",
            other.vertices.len(),
            other.lines.len(),
            other.polygons.len()
        );
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Check that every line and polygon references existing vertices and
    /// that every polygon has at least three of them.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, scanning lines before polygons.
    pub fn validate(&self) -> BodyResult<()> {
        let vertex_count = self.vertices.len();

        for (i, line) in self.lines.iter().enumerate() {
            for vertex in [line.beg_vertex_index(), line.end_vertex_index()] {
                if vertex >= vertex_count {
                    return Err(BodyError::DanglingLineIndex {
                        line: i,
                        vertex,
                        vertex_count,
                    });
                }
            }
        }

        for (i, polygon) in self.polygons.iter().enumerate() {
            if polygon.vertex_index_count() < 3 {
                return Err(BodyError::DegeneratePolygon {
                    polygon: i,
                    count: polygon.vertex_index_count(),
                });
            }
            if let Some(&vertex) = polygon
                .vertex_indices()
                .iter()
                .find(|&&v| v >= vertex_count)
            {
                return Err(BodyError::DanglingPolygonIndex {
                    polygon: i,
                    vertex,
                    vertex_count,
                });
            }
        }

        Ok(())
    }
}

impl BodyTopology for Body {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    fn get_vertex(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    fn get_line(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    fn get_polygon(&self, index: usize) -> Option<&Polygon> {
        self.polygons.get(index)
    }

    fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    fn lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }

    fn polygons(&self) -> impl Iterator<Item = &Polygon> {
        self.polygons.iter()
    }
}

impl BodyBounds for Body {
    fn bounding_box(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter().map(|v| &v.position))
    }

    fn bounding_sphere(&self) -> Sphere {
        let center = self.center();
        let mut radius = 0.0;
        for vertex in &self.vertices {
            let current = nalgebra::distance(&center, &vertex.position);
            if tolerance::is_greater(current, radius) {
                radius = current;
            }
        }
        Sphere::new(center, radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn triangle(offset: f64) -> Body {
        let mut body = Body::new();
        body.add_vertex(Vertex::from_coords(offset, 0.0, 0.0));
        body.add_vertex(Vertex::from_coords(offset + 2.0, 0.0, 0.0));
        body.add_vertex(Vertex::from_coords(offset, 2.0, 0.0));
        body.add_polygon(Polygon::new(vec![0, 1, 2]));
        body
    }

    /// Five vertices in a zigzag, segments between neighbours, three triangles.
    fn strip() -> Body {
        let mut body = Body::new();
        for x in 0..5 {
            body.add_vertex(Vertex::from_coords(f64::from(x), f64::from(x % 2), 0.0));
        }
        body.add_line(Line::new(0, 1));
        body.add_line(Line::new(1, 2));
        body.add_line(Line::new(2, 3));
        body.add_line(Line::new(3, 4));
        body.add_polygon(Polygon::new(vec![0, 1, 2]));
        body.add_polygon(Polygon::new(vec![1, 2, 3]));
        body.add_polygon(Polygon::new(vec![2, 3, 4]));
        body
    }

    #[test]
    fn new_body_is_empty_with_cubic_projection() {
        let body = Body::new();
        assert!(body.is_empty());
        assert_eq!(body.texture_projection_kind(), TextureProjectionKind::Cubic);
        assert_eq!(*body.texture_projection_coords(), CoordSystem::world());
    }

    #[test]
    fn add_returns_slots() {
        let mut body = Body::new();
        assert_eq!(body.add_vertex(Vertex::from_coords(0.0, 0.0, 0.0)), 0);
        assert_eq!(body.add_vertex(Vertex::from_coords(1.0, 0.0, 0.0)), 1);
        assert_eq!(body.add_line(Line::new(0, 1)), 0);
        assert_eq!(body.add_polygon(Polygon::new(vec![0, 1, 0])), 0);
        assert_eq!(body.add_line(Line::new(1, 0)), 1);
    }

    #[test]
    fn bounding_box_and_center() {
        let body = triangle(0.0);
        let bbox = body.bounding_box();
        assert_eq!(bbox.min, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(bbox.max, Point3::new(2.0, 2.0, 0.0));
        assert_eq!(body.center(), Point3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn empty_body_has_inverted_box() {
        let body = Body::new();
        let bbox = body.bounding_box();
        assert_eq!(bbox.min.x, f64::INFINITY);
        assert_eq!(bbox.max.z, f64::NEG_INFINITY);
        assert!(body.bounding_box_opt().is_none());
    }

    #[test]
    fn bounding_sphere_reaches_farthest_vertex() {
        let body = triangle(0.0);
        let sphere = body.bounding_sphere();
        assert_eq!(sphere.center, Point3::new(1.0, 1.0, 0.0));
        assert_relative_eq!(sphere.radius, 2.0_f64.sqrt(), epsilon = 1e-12);
        for vertex in body.vertices() {
            assert!(sphere.contains(vertex.position()));
        }
    }

    #[test]
    fn remove_vertex_deletes_referencing_polygon() {
        let mut body = triangle(0.0);
        body.remove_vertex(0);

        assert_eq!(body.vertex_count(), 2);
        assert_eq!(body.polygon_count(), 0);
        assert_eq!(*body.vertex_position(0), Point3::new(2.0, 0.0, 0.0));
        assert_eq!(*body.vertex_position(1), Point3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn remove_vertex_cascades_and_renumbers() {
        let mut body = strip();
        body.remove_vertex(2);

        assert_eq!(body.vertex_count(), 4);

        // Lines 1-2 and 2-3 went away; 0-1 untouched, 3-4 became 2-3.
        assert_eq!(body.line_count(), 2);
        assert_eq!(body.line(0), &Line::new(0, 1));
        assert_eq!(body.line(1), &Line::new(2, 3));

        // All three polygons used vertex 2.
        assert_eq!(body.polygon_count(), 0);
        assert!(body.validate().is_ok());
    }

    #[test]
    fn remove_last_vertex_keeps_lower_references() {
        let mut body = strip();
        body.remove_vertex(4);

        assert_eq!(body.line_count(), 3);
        assert_eq!(body.polygon_count(), 2);
        assert_eq!(body.polygon(0).vertex_indices(), &[0, 1, 2]);
        assert_eq!(body.polygon(1).vertex_indices(), &[1, 2, 3]);
        assert!(body.validate().is_ok());
    }

    #[test]
    fn remove_unreferenced_vertex_only_shifts() {
        let mut body = Body::new();
        body.add_vertex(Vertex::from_coords(9.0, 9.0, 9.0));
        let mut rest = triangle(0.0);
        rest.polygon_mut(0).set_material_index(Some(3));
        body.merge(&rest);
        assert_eq!(body.polygon(0).vertex_indices(), &[1, 2, 3]);

        body.remove_vertex(0);

        assert_eq!(body.vertex_count(), 3);
        assert_eq!(body.polygon_count(), 1);
        assert_eq!(body.polygon(0).vertex_indices(), &[0, 1, 2]);
        assert_eq!(body.polygon(0).material_index(), Some(3));
    }

    #[test]
    fn remove_vertex_from_vertex_only_body() {
        let mut body = Body::new();
        body.add_vertex(Vertex::from_coords(0.0, 0.0, 0.0));
        body.remove_vertex(0);
        assert!(body.is_empty());
    }

    #[test]
    fn remove_line_and_polygon_shift_later_slots() {
        let mut body = strip();
        body.remove_line(1);
        assert_eq!(body.line_count(), 3);
        assert_eq!(body.line(1), &Line::new(2, 3));

        body.remove_polygon(0);
        assert_eq!(body.polygon_count(), 2);
        assert_eq!(body.polygon(0).vertex_indices(), &[1, 2, 3]);
    }

    #[test]
    fn bulk_attribute_setters() {
        let mut body = strip();
        body.set_lines_material_index(Some(1));
        body.set_polygons_material_index(Some(2));
        body.set_polygons_curve_group(Some(0));

        assert!(body.lines().all(|l| l.material_index() == Some(1)));
        assert!(body.polygons().all(|p| p.material_index() == Some(2)));
        assert!(body.polygons().all(|p| p.curve_group() == Some(0)));

        body.set_polygons_curve_group(None);
        assert!(body.polygons().all(|p| !p.has_curve_group()));
    }

    #[test]
    fn merge_offsets_indices() {
        let mut a = triangle(0.0);
        a.add_line(Line::new(0, 2));
        let mut b = triangle(5.0);
        b.add_line(Line::new(1, 2));
        b.set_planar_texture_projection(Point3::origin(), Vector3::x(), Vector3::z());

        a.merge(&b);

        assert_eq!(a.vertex_count(), 6);
        assert_eq!(a.polygon_count(), 2);
        assert_eq!(a.line_count(), 2);
        assert_eq!(a.polygon(1).vertex_indices(), &[3, 4, 5]);
        assert_eq!(a.line(1), &Line::new(4, 5));
        assert_eq!(a.texture_projection_kind(), TextureProjectionKind::Cubic);
    }

    #[test]
    fn clone_is_structurally_equal_and_independent() {
        let mut body = strip();
        body.set_cylindrical_texture_projection(Point3::origin(), 1.0, Vector3::x(), Vector3::z());
        let mut copy = body.clone();
        assert_eq!(copy, body);

        copy.set_vertex_position(0, Point3::new(100.0, 0.0, 0.0));
        copy.polygon_mut(0).set_vertex_index(0, 4);
        assert_eq!(*body.vertex_position(0), Point3::new(0.0, 0.0, 0.0));
        assert_eq!(body.polygon(0).vertex_index(0), 0);
    }

    #[test]
    fn clear_restores_default() {
        let mut body = strip();
        body.set_planar_texture_projection(Point3::new(1.0, 1.0, 1.0), Vector3::x(), Vector3::z());
        body.clear();

        assert!(body.is_empty());
        assert_eq!(body, Body::new());
    }

    #[test]
    fn projection_setters_replace_wholesale() {
        let mut body = Body::new();
        body.set_cylindrical_texture_projection(
            Point3::origin(),
            2.0,
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
        );
        let coords = *body.texture_projection_coords();
        assert_eq!(body.texture_projection_kind(), TextureProjectionKind::Cylindrical);
        assert_relative_eq!(coords.e1.x, 2.0);
        assert_eq!(coords.e3, Vector3::z());
        assert_relative_eq!(coords.e2.norm(), 2.0);
        assert_relative_eq!(coords.e2.dot(&coords.e1), 0.0);
        assert_relative_eq!(coords.e2.dot(&coords.e3), 0.0);

        body.set_cubic_texture_projection(
            Point3::new(1.0, 2.0, 3.0),
            Vector3::x(),
            Vector3::y(),
            Vector3::z(),
        );
        assert_eq!(body.texture_projection_kind(), TextureProjectionKind::Cubic);
        assert_eq!(body.texture_projection_coords().origin, Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn transform_moves_projection_with_geometry() {
        let mut body = triangle(0.0);
        body.set_planar_texture_projection(Point3::origin(), Vector3::x(), Vector3::z());

        // Quarter turn about Z, then shift along X.
        body.transform(&|p: &Point3<f64>| Point3::new(-p.y + 1.0, p.x, p.z));

        assert_relative_eq!(body.vertex_position(1).x, 1.0);
        assert_relative_eq!(body.vertex_position(1).y, 2.0);

        let coords = body.texture_projection_coords();
        assert_relative_eq!(coords.origin.x, 1.0);
        assert_relative_eq!(coords.origin.y, 0.0);
        assert_relative_eq!(coords.e1.x, 0.0);
        assert_relative_eq!(coords.e1.y, 1.0);
        // (0, -1, 0) rotated a quarter turn is (1, 0, 0).
        assert_relative_eq!(coords.e2.x, 1.0);
        assert_relative_eq!(coords.e2.y, 0.0);
        assert_eq!(coords.e3, Vector3::zeros());
        assert_eq!(body.texture_projection_kind(), TextureProjectionKind::Planar);
    }

    #[test]
    fn offset_to_origin_centers_box_but_not_projection() {
        let mut body = triangle(4.0);
        body.set_cubic_texture_projection(
            Point3::new(4.0, 0.0, 0.0),
            Vector3::x(),
            Vector3::y(),
            Vector3::z(),
        );

        body.offset_to_origin();

        assert_eq!(body.center(), Point3::origin());
        assert_eq!(*body.vertex_position(0), Point3::new(-1.0, -1.0, 0.0));
        // Known asymmetry with `transform`: the projection frame stays behind.
        assert_eq!(body.texture_projection_coords().origin, Point3::new(4.0, 0.0, 0.0));
    }

    #[test]
    fn validate_reports_violations() {
        let mut body = triangle(0.0);
        assert_eq!(body.validate(), Ok(()));

        body.add_line(Line::new(0, 7));
        assert_eq!(
            body.validate(),
            Err(BodyError::DanglingLineIndex {
                line: 0,
                vertex: 7,
                vertex_count: 3
            })
        );
        body.remove_line(0);

        body.add_polygon(Polygon::new(vec![0, 1]));
        assert_eq!(
            body.validate(),
            Err(BodyError::DegeneratePolygon {
                polygon: 1,
                count: 2
            })
        );
        body.polygon_mut(1).set_vertex_indices(vec![0, 1, 3]);
        assert_eq!(
            body.validate(),
            Err(BodyError::DanglingPolygonIndex {
                polygon: 1,
                vertex: 3,
                vertex_count: 3
            })
        );
    }
}
