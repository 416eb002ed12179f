//! Body line: a segment between two vertex slots.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A line of a body.
///
/// Stores the slot indices of its begin and end vertices in the owning body,
/// plus an optional index into a material table kept outside the body.
///
/// # Example
///
/// ```
/// use body_types::Line;
///
/// let mut line = Line::new(0, 1);
/// assert!(!line.has_material_index());
///
/// line.set_material_index(Some(3));
/// assert_eq!(line.material_index(), Some(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Line {
    beg: usize,
    end: usize,
    material: Option<usize>,
}

impl Line {
    /// Create a line between two vertex slots, with no material.
    #[inline]
    #[must_use]
    pub const fn new(beg: usize, end: usize) -> Self {
        Self {
            beg,
            end,
            material: None,
        }
    }

    /// Vertex slot at the beginning of the line.
    #[inline]
    #[must_use]
    pub const fn beg_vertex_index(&self) -> usize {
        self.beg
    }

    /// Set the vertex slot at the beginning of the line.
    #[inline]
    pub fn set_beg_vertex_index(&mut self, index: usize) {
        self.beg = index;
    }

    /// Vertex slot at the end of the line.
    #[inline]
    #[must_use]
    pub const fn end_vertex_index(&self) -> usize {
        self.end
    }

    /// Set the vertex slot at the end of the line.
    #[inline]
    pub fn set_end_vertex_index(&mut self, index: usize) {
        self.end = index;
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

    /// Copy the attributes (the material) of another line onto this one.
    ///
    /// Vertex references are left alone.
    #[inline]
    pub fn inherit_attributes(&mut self, source: &Self) {
        self.material = source.material;
    }

    /// Whether either end references `vertex`.
    #[inline]
    #[must_use]
    pub const fn references(&self, vertex: usize) -> bool {
        self.beg == vertex || self.end == vertex
    }

    pub(crate) fn offset_indices(&mut self, offset: usize) {
        self.beg += offset;
        self.end += offset;
    }
}
