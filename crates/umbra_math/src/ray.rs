use crate::Vec3;
use thiserror::Error;

/// Errors raised when constructing a ray.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum RayError {
    #[error("ray direction must be finite and non-zero, got {0}")]
    DegenerateDirection(Vec3),
}

/// A ray in 3D space with an origin and a direction.
///
/// The direction does not have to be unit length. Intersection code works
/// with `|direction|²` rather than assuming it is 1, so `t` is measured in
/// multiples of the direction vector.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    ///
    /// The direction must be non-zero. Use [`Ray::try_new`] when the
    /// direction comes from untrusted input.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        debug_assert!(
            !crate::is_degenerate(direction),
            "ray direction must be non-zero"
        );
        Self { origin, direction }
    }

    /// Create a new ray, rejecting zero-length or non-finite directions.
    pub fn try_new(origin: Vec3, direction: Vec3) -> Result<Self, RayError> {
        if crate::is_degenerate(direction) {
            return Err(RayError::DegenerateDirection(direction));
        }
        Ok(Self { origin, direction })
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_creation() {
        let origin = Vec3::new(1.0, 2.0, 3.0);
        let direction = Vec3::new(0.0, 1.0, 0.0);
        let ray = Ray::new(origin, direction);

        assert_eq!(ray.origin(), origin);
        assert_eq!(ray.direction(), direction);
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        assert_eq!(ray.at(0.0), Vec3::ZERO);
        assert_eq!(ray.at(1.0), Vec3::X);
        assert_eq!(ray.at(2.0), Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(ray.at(-1.0), Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_ray_at_unnormalized_direction() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, -4.0));
        assert_eq!(ray.at(0.5), Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_try_new_rejects_zero_direction() {
        let err = Ray::try_new(Vec3::ONE, Vec3::ZERO).unwrap_err();
        assert_eq!(err, RayError::DegenerateDirection(Vec3::ZERO));
    }

    #[test]
    fn test_try_new_rejects_nan_direction() {
        assert!(Ray::try_new(Vec3::ZERO, Vec3::new(f32::NAN, 0.0, 1.0)).is_err());
    }

    #[test]
    fn test_try_new_accepts_valid_direction() {
        let ray = Ray::try_new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0)).unwrap();
        assert_eq!(ray.direction, Vec3::new(0.0, 0.0, -1.0));
    }
}
