//! Lambertian shading against a single point light, with hard shadows.

use crate::{HitRecord, Ray, Scene};
use umbra_core::{SceneConfig, DEFAULT_SHADOW_EPSILON};
use umbra_math::{unit_towards, Interval, Vec3};

/// Color type alias (RGB, unnormalized 0-255 range)
pub type Color = Vec3;

/// Color returned for misses and shadowed points.
pub const BACKGROUND: Color = Color::ZERO;

/// Knobs for the shadow test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadingOptions {
    /// Distance the shadow ray origin is pushed toward the light, to keep
    /// it from re-hitting the surface it starts on.
    pub shadow_epsilon: f32,
    /// Only count occluders between the point and the light. When false,
    /// anything along the shadow ray casts a shadow, even past the light.
    pub bounded_shadows: bool,
}

impl Default for ShadingOptions {
    fn default() -> Self {
        Self {
            shadow_epsilon: DEFAULT_SHADOW_EPSILON,
            bounded_shadows: false,
        }
    }
}

impl From<&SceneConfig> for ShadingOptions {
    fn from(config: &SceneConfig) -> Self {
        Self {
            shadow_epsilon: config.shadow_epsilon,
            bounded_shadows: config.bounded_shadows,
        }
    }
}

/// Shade a hit against the scene light.
///
/// Misses and occluded points return [`BACKGROUND`]. Otherwise the surface
/// color is scaled by `max(0, n·L)`. The result is not clamped.
pub fn shade(hit: &HitRecord, scene: &Scene, options: &ShadingOptions) -> Color {
    if !hit.hit {
        return BACKGROUND;
    }

    let Some(to_light) = unit_towards(hit.point, scene.light()) else {
        log::trace!("light coincides with hit point {}", hit.point);
        return BACKGROUND;
    };

    let shadow_origin = hit.point + to_light * options.shadow_epsilon;
    let shadow_ray = Ray::new(shadow_origin, to_light);
    let ray_t = if options.bounded_shadows {
        // Unit direction, so t is a distance
        Interval::POSITIVE.with_max(shadow_origin.distance(scene.light()))
    } else {
        Interval::POSITIVE
    };

    if scene.occluded(&shadow_ray, ray_t) {
        return BACKGROUND;
    }

    let albedo = hit.normal.dot(to_light).max(0.0);
    hit.color * albedo
}

/// Compute the color seen by a primary ray.
#[inline]
pub fn ray_color(ray: &Ray, scene: &Scene, options: &ShadingOptions) -> Color {
    shade(&scene.nearest_hit(ray), scene, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sphere;

    const RED: Color = Color::new(255.0, 0.0, 0.0);

    fn red_sphere() -> Sphere {
        Sphere::new(Vec3::new(0.0, 0.0, -3.0), 1.0, RED)
    }

    /// Ray that hits the top of the red sphere at (0, 1, -3).
    fn top_ray() -> Ray {
        Ray::new(Vec3::new(0.0, 3.0, -3.0), Vec3::new(0.0, -1.0, 0.0))
    }

    #[test]
    fn test_miss_is_background() {
        let scene = Scene::new(Vec3::ONE).with_sphere(red_sphere());
        let color = shade(&HitRecord::MISS, &scene, &ShadingOptions::default());
        assert_eq!(color, BACKGROUND);
    }

    #[test]
    fn test_facing_light_full_albedo() {
        let scene = Scene::new(Vec3::new(0.0, 5.0, -3.0)).with_sphere(red_sphere());

        let color = ray_color(&top_ray(), &scene, &ShadingOptions::default());
        assert!((color - RED).length() < 1e-3, "got {color}");
    }

    #[test]
    fn test_facing_away_is_black() {
        // Normal points down, light is above, nothing in the scene to occlude
        let scene = Scene::new(Vec3::new(0.0, 5.0, 0.0));
        let ray = Ray::new(Vec3::new(0.0, -3.0, 0.0), Vec3::Y);
        let hit = HitRecord::new(&ray, 2.0, Vec3::new(0.0, -1.0, 0.0), RED);

        let color = shade(&hit, &scene, &ShadingOptions::default());
        assert_eq!(color, BACKGROUND);
    }

    #[test]
    fn test_occluder_between_point_and_light() {
        let light = Vec3::new(0.0, 5.0, -3.0);
        let lit = Scene::new(light).with_sphere(red_sphere());
        let blocked = lit.clone().with_sphere(Sphere::new(
            Vec3::new(0.0, 3.0, -3.0),
            0.5,
            Color::new(0.0, 255.0, 0.0),
        ));
        let options = ShadingOptions::default();

        assert!(ray_color(&top_ray(), &lit, &options).x > 0.0);
        assert_eq!(ray_color(&top_ray(), &blocked, &options), BACKGROUND);
    }

    #[test]
    fn test_occluder_beyond_light() {
        let scene = Scene::new(Vec3::new(0.0, 3.0, -3.0))
            .with_sphere(red_sphere())
            .with_sphere(Sphere::new(Vec3::new(0.0, 6.0, -3.0), 0.5, Color::ONE));

        let unbounded = ShadingOptions::default();
        assert_eq!(ray_color(&top_ray(), &scene, &unbounded), BACKGROUND);

        let bounded = ShadingOptions {
            bounded_shadows: true,
            ..ShadingOptions::default()
        };
        let color = ray_color(&top_ray(), &scene, &bounded);
        assert!((color - RED).length() < 1e-3, "got {color}");
    }

    #[test]
    fn test_no_shadow_acne() {
        // Without the epsilon offset the shadow ray could re-hit its own
        // surface. Grazing light makes the roots nearly coincide.
        let scene = Scene::new(Vec3::new(10.0, 1.05, -3.0)).with_sphere(red_sphere());

        let color = ray_color(&top_ray(), &scene, &ShadingOptions::default());
        assert!(color.x > 0.0);
    }

    #[test]
    fn test_light_on_hit_point() {
        let scene = Scene::new(Vec3::new(0.0, 1.0, -3.0));
        let hit = HitRecord::new(&top_ray(), 2.0, Vec3::Y, RED);

        let color = shade(&hit, &scene, &ShadingOptions::default());
        assert_eq!(color, BACKGROUND);
        assert!(!color.is_nan());
    }

    #[test]
    fn test_reference_center_ray() {
        let scene = Scene::from(&SceneConfig::reference());
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let hit = scene.nearest_hit(&ray);
        assert_eq!(hit.color, RED);

        // Hit at (0, 0, -2), normal +Z, light direction (1, 1, 1) / sqrt(3)
        let expected = 255.0 / 3.0_f32.sqrt();
        let color = shade(&hit, &scene, &ShadingOptions::default());
        assert!((color.x - expected).abs() < 1e-2, "got {color}");
        assert_eq!(color.y, 0.0);
        assert_eq!(color.z, 0.0);
    }
}
