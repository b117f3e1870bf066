//! Sphere primitive for ray tracing.

use crate::{Color, HitRecord, Ray};
use umbra_core::SphereConfig;
use umbra_math::{Interval, Vec3};

/// A sphere with a flat material color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    color: Color,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// The radius is expected to be positive; scene configurations are
    /// validated before they get here.
    pub fn new(center: Vec3, radius: f32, color: Color) -> Self {
        debug_assert!(radius > 0.0, "sphere radius must be positive");
        Self {
            center,
            radius,
            color,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Nearest intersection strictly in front of the ray origin.
    #[inline]
    pub fn intersect(&self, ray: &Ray) -> HitRecord {
        self.intersect_within(ray, Interval::POSITIVE)
    }

    /// Solve `A t² + B t + C = 0` and keep the smaller root inside `ray_t`,
    /// falling back to the larger one.
    ///
    /// A tangent ray has a double root and takes the same path. A ray with a
    /// zero direction never hits.
    pub fn intersect_within(&self, ray: &Ray, ray_t: Interval) -> HitRecord {
        let oc = ray.origin() - self.center;
        let a = ray.direction().length_squared();
        if a == 0.0 {
            return HitRecord::MISS;
        }
        let b = 2.0 * ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return HitRecord::MISS;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = (-b - sqrtd) / (2.0 * a);
        if !ray_t.surrounds(root) {
            root = (-b + sqrtd) / (2.0 * a);
            if !ray_t.surrounds(root) {
                return HitRecord::MISS;
            }
        }

        let point = ray.at(root);
        let normal = (point - self.center).normalize_or_zero();
        HitRecord::new(ray, root, normal, self.color)
    }
}

impl From<&SphereConfig> for Sphere {
    fn from(config: &SphereConfig) -> Self {
        Sphere::new(config.center(), config.radius, config.color())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red_sphere() -> Sphere {
        Sphere::new(
            Vec3::new(0.0, 0.0, -3.0),
            1.0,
            Color::new(255.0, 0.0, 0.0),
        )
    }

    #[test]
    fn test_sphere_hit_head_on() {
        let sphere = red_sphere();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let rec = sphere.intersect(&ray);
        assert!(rec.hit);
        // distance to center (3) minus radius (1)
        assert!((rec.t - 2.0).abs() < 1e-5);
        assert!((rec.point - Vec3::new(0.0, 0.0, -2.0)).length() < 1e-5);
        assert!((rec.normal - Vec3::Z).length() < 1e-5);
        assert_eq!(rec.color, Color::new(255.0, 0.0, 0.0));
    }

    #[test]
    fn test_sphere_hit_unnormalized_direction() {
        let sphere = red_sphere();
        // Same line as the head-on case, direction four times as long
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -4.0));

        let rec = sphere.intersect(&ray);
        assert!(rec.hit);
        assert!((rec.t - 0.5).abs() < 1e-5);
        assert!((rec.point - Vec3::new(0.0, 0.0, -2.0)).length() < 1e-5);
    }

    #[test]
    fn test_sphere_miss_pointing_away() {
        let sphere = red_sphere();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));

        let rec = sphere.intersect(&ray);
        assert!(!rec.hit);
        assert_eq!(rec.t, crate::FAR_AWAY);
    }

    #[test]
    fn test_sphere_miss_off_axis() {
        let sphere = red_sphere();
        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, 0.0, -1.0));

        assert!(!sphere.intersect(&ray).hit);
    }

    #[test]
    fn test_sphere_tangent() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -3.0), 1.0, Color::ONE);
        // Grazes the top of the sphere at (0, 1, -3)
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 0.0, -1.0));

        let rec = sphere.intersect(&ray);
        assert!(rec.hit);
        assert!((rec.t - 3.0).abs() < 1e-4);
        assert!(rec.normal.dot(ray.direction()).abs() < 1e-4);
        assert!((rec.normal - Vec3::Y).length() < 1e-4);
    }

    #[test]
    fn test_origin_inside_uses_far_root() {
        let sphere = red_sphere();
        let ray = Ray::new(Vec3::new(0.0, 0.0, -3.0), Vec3::new(0.0, 0.0, -1.0));

        let rec = sphere.intersect(&ray);
        assert!(rec.hit);
        assert!((rec.t - 1.0).abs() < 1e-5);
        assert!((rec.normal - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-5);
    }

    #[test]
    fn test_sphere_behind_origin() {
        let sphere = red_sphere();
        let ray = Ray::new(Vec3::new(0.0, 0.0, -10.0), Vec3::new(0.0, 0.0, -1.0));

        assert!(!sphere.intersect(&ray).hit);
    }

    #[test]
    fn test_origin_on_surface_rejects_zero_root() {
        let sphere = red_sphere();
        // Starts on the near surface heading away: roots are 0 and negative
        let ray = Ray::new(Vec3::new(0.0, 0.0, -2.0), Vec3::new(0.0, 0.0, 1.0));

        assert!(!sphere.intersect(&ray).hit);
    }

    #[test]
    fn test_zero_direction_misses() {
        let sphere = red_sphere();
        let ray = Ray {
            origin: Vec3::ZERO,
            direction: Vec3::ZERO,
        };

        let rec = sphere.intersect(&ray);
        assert!(!rec.hit);
        assert!(!rec.t.is_nan());
    }

    #[test]
    fn test_intersect_within_bounds() {
        let sphere = red_sphere();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        assert!(!sphere.intersect_within(&ray, Interval::new(0.0, 1.5)).hit);
        assert!(sphere.intersect_within(&ray, Interval::new(0.0, 2.5)).hit);
    }

    #[test]
    fn test_from_config() {
        let config = SphereConfig::new([0.6, 0.6, -2.0], 0.2, [0.0, 0.0, 255.0]);
        let sphere = Sphere::from(&config);

        assert_eq!(sphere.center(), Vec3::new(0.6, 0.6, -2.0));
        assert_eq!(sphere.radius(), 0.2);
        assert_eq!(sphere.color(), Color::new(0.0, 0.0, 255.0));
    }
}
