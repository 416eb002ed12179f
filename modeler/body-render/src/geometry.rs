//! Renderer-ready triangle buffers.
//!
//! # Memory Layout
//!
//! [`RenderGeometry`] keeps positions and normals in two flat `f32` arrays,
//! three floats per triangle corner, in the same order. [`RenderVertex`] is the
//! interleaved alternative: 24 bytes per corner (position + normal).

use bytemuck::{Pod, Zeroable};
use nalgebra::Matrix4;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Material;

/// Interleaved position and normal of one triangle corner.
///
/// # Example
///
/// ```
/// use body_render::RenderVertex;
///
/// assert_eq!(std::mem::size_of::<RenderVertex>(), 24);
/// ```
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct RenderVertex {
    /// Position (xyz).
    pub position: [f32; 3],
    /// Unit normal (xyz).
    pub normal: [f32; 3],
}

/// Triangles sharing one material, ready to upload to a renderer.
///
/// `vertex_array` and `normal_array` always have the same length, a multiple
/// of 9 (one triangle is three corners of three floats).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RenderGeometry {
    /// Material of every triangle in this geometry.
    pub material: Material,
    /// Model transformation applied by the renderer. Identity by default.
    pub transformation: Matrix4<f32>,
    /// Corner positions, `[x, y, z, x, y, z, ...]`.
    pub vertex_array: Vec<f32>,
    /// Corner normals, parallel to `vertex_array`.
    pub normal_array: Vec<f32>,
}

impl RenderGeometry {
    /// Create an empty geometry with the identity transformation.
    #[must_use]
    pub fn new(material: Material) -> Self {
        Self {
            material,
            transformation: Matrix4::identity(),
            vertex_array: Vec::new(),
            normal_array: Vec::new(),
        }
    }

    /// Append one corner.
    pub fn push_vertex(&mut self, position: [f32; 3], normal: [f32; 3]) {
        self.vertex_array.extend_from_slice(&position);
        self.normal_array.extend_from_slice(&normal);
    }

    /// Number of triangle corners.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_array.len() / 3
    }

    /// Number of triangles.
    #[inline]
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.vertex_count() / 3
    }

    /// Check if there are no triangles.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertex_array.is_empty()
    }

    /// Replace the model transformation.
    #[inline]
    pub fn set_transformation(&mut self, transformation: Matrix4<f32>) {
        self.transformation = transformation;
    }

    /// Position array as raw bytes.
    #[must_use]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertex_array)
    }

    /// Normal array as raw bytes.
    #[must_use]
    pub fn normal_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.normal_array)
    }

    /// Corners as interleaved position/normal records.
    #[must_use]
    pub fn interleaved(&self) -> Vec<RenderVertex> {
        self.vertex_array
            .chunks_exact(3)
            .zip(self.normal_array.chunks_exact(3))
            .map(|(p, n)| RenderVertex {
                position: [p[0], p[1], p[2]],
                normal: [n[0], n[1], n[2]],
            })
            .collect()
    }
}
