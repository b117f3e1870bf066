//! Pinhole camera for primary ray generation.
//!
//! The image plane is fixed at z = -1 and spans `[-1, 1]` on both axes,
//! whatever the aspect ratio. Pixel `(0, 0)` is the bottom-left corner of
//! that plane.

use crate::Ray;
use rand::{Rng, RngCore};
use umbra_core::{PixelSampling, SceneConfig};
use umbra_math::Vec3;

/// Depth of the image plane.
pub const IMAGE_PLANE_Z: f32 = -1.0;

/// Uniform `f32` in `[0, 1)` from any RNG.
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>()
}

/// Camera for generating rays into the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,
    eye: Vec3,
    sampling: PixelSampling,
}

impl Camera {
    /// Create a camera at the origin with jittered sampling.
    pub fn new(image_width: u32, image_height: u32) -> Self {
        Self {
            image_width,
            image_height,
            eye: Vec3::ZERO,
            sampling: PixelSampling::Jittered,
        }
    }

    /// Set camera position.
    pub fn with_eye(mut self, eye: Vec3) -> Self {
        self.eye = eye;
        self
    }

    /// Set how sample points are placed inside a pixel.
    pub fn with_sampling(mut self, sampling: PixelSampling) -> Self {
        self.sampling = sampling;
        self
    }

    pub fn from_config(config: &SceneConfig) -> Self {
        Self::new(config.image_width, config.image_height)
            .with_eye(config.eye())
            .with_sampling(config.sampling)
    }

    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    pub fn sampling(&self) -> PixelSampling {
        self.sampling
    }

    /// Point on the image plane for continuous pixel coordinates.
    ///
    /// `(i + 0.5, j + 0.5)` is the center of pixel `(i, j)`.
    pub fn plane_point(&self, x: f32, y: f32) -> Vec3 {
        Vec3::new(
            -1.0 + 2.0 * x / self.image_width as f32,
            -1.0 + 2.0 * y / self.image_height as f32,
            IMAGE_PLANE_Z,
        )
    }

    /// Ray from the eye through continuous pixel coordinates.
    pub fn ray_through(&self, x: f32, y: f32) -> Ray {
        Ray::new(self.eye, self.plane_point(x, y) - self.eye)
    }

    /// Generate a sample ray for pixel (i, j).
    ///
    /// Jittered sampling draws `(δu, δv)` uniformly from `[0, 1)` and aims at
    /// `(i + δu, j + δv)`, covering the whole pixel footprint.
    pub fn get_ray(&self, i: u32, j: u32, rng: &mut dyn RngCore) -> Ray {
        let (du, dv) = match self.sampling {
            PixelSampling::Jittered => (gen_f32(rng), gen_f32(rng)),
            PixelSampling::Center => (0.5, 0.5),
        };
        self.ray_through(i as f32 + du, j as f32 + dv)
    }
}
