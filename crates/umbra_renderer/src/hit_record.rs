//! Value-type result of a ray-object intersection.

use crate::{Color, Ray};
use umbra_math::Vec3;

/// Placeholder distance meaning "nothing hit yet".
pub const FAR_AWAY: f32 = 10e20;

/// Result of a single intersection query.
///
/// A record is built fresh for every test and never mutated afterwards.
/// Misses carry `hit == false` and `t == FAR_AWAY`. Callers comparing
/// distances check `hit` first, since a real hit may lie past `FAR_AWAY`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Whether an intersection occurred
    pub hit: bool,
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub point: Vec3,
    /// Unit surface normal, pointing outward from the sphere center
    pub normal: Vec3,
    /// Material color of the object that was hit
    pub color: Color,
}

impl HitRecord {
    /// The "no hit" record.
    pub const MISS: HitRecord = HitRecord {
        hit: false,
        t: FAR_AWAY,
        point: Vec3::ZERO,
        normal: Vec3::ZERO,
        color: Color::ZERO,
    };

    /// Build a record for a hit at parameter `t`.
    pub fn new(ray: &Ray, t: f32, normal: Vec3, color: Color) -> Self {
        Self {
            hit: true,
            t,
            point: ray.at(t),
            normal,
            color,
        }
    }
}

impl Default for HitRecord {
    fn default() -> Self {
        Self::MISS
    }
}
