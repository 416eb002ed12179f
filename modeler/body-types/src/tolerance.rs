//! Tolerance-aware scalar and point comparisons.
//!
//! All geometric comparisons in this workspace go through these helpers so
//! that a single process-wide [`EPSILON`] governs what counts as "equal".

use nalgebra::Point3;

/// Absolute tolerance used by every comparison helper.
pub const EPSILON: f64 = 1.0e-8;

/// Check if `a` is zero within [`EPSILON`].
#[inline]
#[must_use]
pub fn is_zero(a: f64) -> bool {
    a.abs() < EPSILON
}

/// Check if `a` and `b` are equal within [`EPSILON`].
#[inline]
#[must_use]
pub fn is_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Check if `a` is greater than `b` by more than [`EPSILON`].
///
/// # Example
///
/// ```
/// use body_types::tolerance::is_greater;
///
/// assert!(is_greater(1.0, 0.0));
/// assert!(!is_greater(1.0 + 1.0e-10, 1.0));
/// ```
#[inline]
#[must_use]
pub fn is_greater(a: f64, b: f64) -> bool {
    a - b > EPSILON
}

/// Check if `a` is lower than `b` by more than [`EPSILON`].
#[inline]
#[must_use]
pub fn is_lower(a: f64, b: f64) -> bool {
    b - a > EPSILON
}

/// Check if `a` is greater than `b` or equal within [`EPSILON`].
#[inline]
#[must_use]
pub fn is_greater_or_equal(a: f64, b: f64) -> bool {
    a - b > -EPSILON
}

/// Check if `a` is lower than `b` or equal within [`EPSILON`].
#[inline]
#[must_use]
pub fn is_lower_or_equal(a: f64, b: f64) -> bool {
    b - a > -EPSILON
}

/// Check if two points coincide componentwise within [`EPSILON`].
#[inline]
#[must_use]
pub fn points_equal(a: &Point3<f64>, b: &Point3<f64>) -> bool {
    is_equal(a.x, b.x) && is_equal(a.y, b.y) && is_equal(a.z, b.z)
}
