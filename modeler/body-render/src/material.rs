//! Materials and export parameters.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Surface appearance of polygons sharing a material index.
///
/// Bodies only carry opaque material indices; the table of `Material` values
/// lives with the caller and is passed to
/// [`body_to_render_geometries`](crate::body_to_render_geometries).
///
/// # Example
///
/// ```
/// use body_render::Material;
///
/// let red = Material::from_hex(0xff0000);
/// assert_eq!(red.diffuse, [1.0, 0.0, 0.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Material {
    /// Diffuse color as linear RGB in `[0, 1]`.
    pub diffuse: [f32; 3],
}

impl Material {
    /// Create a material from a diffuse RGB triple.
    #[inline]
    #[must_use]
    pub const fn new(diffuse: [f32; 3]) -> Self {
        Self { diffuse }
    }

    /// Create a material from a packed `0xRRGGBB` color.
    #[must_use]
    pub fn from_hex(color: u32) -> Self {
        let [_, r, g, b] = color.to_be_bytes();
        Self::new([f32::from(r) / 255.0, f32::from(g) / 255.0, f32::from(b) / 255.0])
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::from_hex(DEFAULT_DIFFUSE_HEX)
    }
}

/// Green used for polygons without a material.
const DEFAULT_DIFFUSE_HEX: u32 = 0x00cc00;

/// Configuration for render export.
///
/// # Example
///
/// ```
/// use body_render::RenderParams;
///
/// let params = RenderParams::default()
///     .with_default_diffuse([0.5, 0.5, 0.5])
///     .with_smooth_curve_groups(false);
///
/// assert!(!params.smooth_curve_groups);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RenderParams {
    /// Diffuse color for polygons that have no material index.
    ///
    /// Default: `0x00cc00`
    pub default_diffuse: [f32; 3],

    /// Whether polygons with a curve group get averaged vertex normals.
    ///
    /// When off, every polygon is shaded flat.
    /// Default: `true`
    pub smooth_curve_groups: bool,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            default_diffuse: Material::default().diffuse,
            smooth_curve_groups: true,
        }
    }
}

impl RenderParams {
    /// Params that shade every polygon flat.
    #[must_use]
    pub fn flat() -> Self {
        Self {
            smooth_curve_groups: false,
            ..Default::default()
        }
    }

    /// Set the diffuse color used for polygons without a material.
    #[must_use]
    pub const fn with_default_diffuse(mut self, diffuse: [f32; 3]) -> Self {
        self.default_diffuse = diffuse;
        self
    }

    /// Enable or disable curve group smoothing.
    #[must_use]
    pub const fn with_smooth_curve_groups(mut self, smooth: bool) -> Self {
        self.smooth_curve_groups = smooth;
        self
    }

    /// The material used for polygons without a material index.
    #[inline]
    #[must_use]
    pub const fn default_material(&self) -> Material {
        Material::new(self.default_diffuse)
    }
}
