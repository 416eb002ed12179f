//! Body polygon: an ordered loop of vertex slots.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A polygon of a body.
///
/// The vertex slot order defines the winding. Besides the vertex references a
/// polygon carries two opaque attributes:
/// - a material index into a table kept outside the body
/// - a curve group index; polygons sharing a curve group are shaded smooth
///   across their common vertices
///
/// # Example
///
/// ```
/// use body_types::Polygon;
///
/// let mut polygon = Polygon::new(vec![0, 1, 2]);
/// polygon.add_vertex_index(3);
///
/// assert_eq!(polygon.vertex_index_count(), 4);
/// assert_eq!(polygon.vertex_index(3), 3);
/// assert!(!polygon.has_curve_group());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polygon {
    vertices: Vec<usize>,
    material: Option<usize>,
    curve_group: Option<usize>,
}

impl Polygon {
    /// Create a polygon from vertex slots, with no material and no curve group.
    #[inline]
    #[must_use]
    pub const fn new(vertices: Vec<usize>) -> Self {
        Self {
            vertices,
            material: None,
            curve_group: None,
        }
    }

    /// Append a vertex slot to the loop.
    #[inline]
    pub fn add_vertex_index(&mut self, index: usize) {
        self.vertices.push(index);
    }

    /// Vertex slot at position `index` of the loop.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.vertex_index_count()`.
    #[inline]
    #[must_use]
    pub fn vertex_index(&self, index: usize) -> usize {
        self.vertices[index]
    }

    /// Replace the vertex slot at position `index` of the loop.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.vertex_index_count()`.
    #[inline]
    pub fn set_vertex_index(&mut self, index: usize, vertex: usize) {
        self.vertices[index] = vertex;
    }

    /// All vertex slots, in winding order.
    #[inline]
    #[must_use]
    pub fn vertex_indices(&self) -> &[usize] {
        &self.vertices
    }

    /// Replace the whole loop.
    #[inline]
    pub fn set_vertex_indices(&mut self, vertices: Vec<usize>) {
        self.vertices = vertices;
    }

    /// Number of vertex slots in the loop.
    #[inline]
    #[must_use]
    pub fn vertex_index_count(&self) -> usize {
        self.vertices.len()
    }

    /// Whether a material is assigned.
    #[inline]
    #[must_use]
    pub const fn has_material_index(&self) -> bool {
        self.material.is_some()
    }

    /// Assigned material index, if any.
    #[inline]
    #[must_use]
    pub const fn material_index(&self) -> Option<usize> {
        self.material
    }

    /// Assign (or, with `None`, unassign) the material index.
    #[inline]
    pub fn set_material_index(&mut self, material: Option<usize>) {
        self.material = material;
    }

    /// Whether the polygon belongs to a curve group.
    #[inline]
    #[must_use]
    pub const fn has_curve_group(&self) -> bool {
        self.curve_group.is_some()
    }

    /// Curve group index, if any.
    #[inline]
    #[must_use]
    pub const fn curve_group(&self) -> Option<usize> {
        self.curve_group
    }

    /// Assign (or, with `None`, unassign) the curve group.
    #[inline]
    pub fn set_curve_group(&mut self, group: Option<usize>) {
        self.curve_group = group;
    }

    /// Copy the attributes (material and curve group) of another polygon.
    ///
    /// Vertex references are left alone.
    #[inline]
    pub fn inherit_attributes(&mut self, source: &Self) {
        self.material = source.material;
        self.curve_group = source.curve_group;
    }

    /// Whether the loop references `vertex`.
    #[inline]
    #[must_use]
    pub fn references(&self, vertex: usize) -> bool {
        self.vertices.contains(&vertex)
    }

    pub(crate) fn vertex_indices_mut(&mut self) -> &mut [usize] {
        &mut self.vertices
    }
}

impl From<Vec<usize>> for Polygon {
    fn from(vertices: Vec<usize>) -> Self {
        Self::new(vertices)
    }
}

impl<const N: usize> From<[usize; N]> for Polygon {
    fn from(vertices: [usize; N]) -> Self {
        Self::new(vertices.to_vec())
    }
}
