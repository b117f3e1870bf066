//! Immutable render scene: spheres plus a single point light.

use crate::{HitRecord, Ray, Sphere};
use umbra_core::SceneConfig;
use umbra_math::{Interval, Vec3};

/// The objects and light a render sees.
///
/// Built once before rendering and shared read-only afterwards, so a
/// `&Scene` can be handed to any number of worker threads.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    spheres: Vec<Sphere>,
    light: Vec3,
}

impl Scene {
    /// Create a scene with no objects.
    pub fn new(light: Vec3) -> Self {
        Self {
            spheres: Vec::new(),
            light,
        }
    }

    /// Builder-style sphere insertion.
    pub fn with_sphere(mut self, sphere: Sphere) -> Self {
        self.spheres.push(sphere);
        self
    }

    /// Build the runtime scene from a (validated) configuration.
    pub fn from_config(config: &SceneConfig) -> Self {
        Self {
            spheres: config.spheres.iter().map(Sphere::from).collect(),
            light: config.light_position(),
        }
    }

    pub fn light(&self) -> Vec3 {
        self.light
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }

    /// Closest hit in front of the ray origin, or [`HitRecord::MISS`].
    #[inline]
    pub fn nearest_hit(&self, ray: &Ray) -> HitRecord {
        self.nearest_hit_within(ray, Interval::POSITIVE)
    }

    /// Linear scan keeping the smallest `t`. Ties keep the earlier sphere.
    pub fn nearest_hit_within(&self, ray: &Ray, ray_t: Interval) -> HitRecord {
        let mut best = HitRecord::MISS;

        for sphere in &self.spheres {
            let rec = sphere.intersect_within(ray, ray_t);
            if rec.hit && (!best.hit || rec.t < best.t) {
                best = rec;
            }
        }

        best
    }

    /// True as soon as any sphere intersects the ray inside `ray_t`.
    pub fn occluded(&self, ray: &Ray, ray_t: Interval) -> bool {
        self.spheres
            .iter()
            .any(|sphere| sphere.intersect_within(ray, ray_t).hit)
    }
}

impl From<&SceneConfig> for Scene {
    fn from(config: &SceneConfig) -> Self {
        Scene::from_config(config)
    }
}
