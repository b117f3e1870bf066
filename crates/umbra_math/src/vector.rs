//! Guarded helpers on top of `glam::Vec3`.

use crate::Vec3;

/// True when `v` cannot be normalized: zero length, or any component
/// non-finite.
#[inline]
pub fn is_degenerate(v: Vec3) -> bool {
    !v.is_finite() || v.length_squared() == 0.0
}

/// Unit vector pointing from `from` toward `to`.
///
/// Returns `None` when the two points coincide, so callers never see a NaN
/// direction.
#[inline]
pub fn unit_towards(from: Vec3, to: Vec3) -> Option<Vec3> {
    let delta = to - from;
    if is_degenerate(delta) {
        return None;
    }
    Some(delta / delta.length())
}
