//! Single-threaded reference renderer.
//!
//! Every pixel averages `samples_per_pixel` jittered primary rays:
//! - nearest hit over all spheres
//! - Lambertian shading with a hard shadow test
//! - narrowing into the frame buffer with a vertical flip

use std::time::Instant;

use crate::{ray_color, Camera, BACKGROUND, Color, FrameBuffer, RenderResult, Scene, ShadingOptions};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use umbra_core::{ColorWrite, SceneConfig};

/// Render configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Shadow ray settings
    pub shading: ShadingOptions,
    /// How averaged colors are narrowed to 8 bits
    pub color_write: ColorWrite,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            samples_per_pixel: 10,
            shading: ShadingOptions::default(),
            color_write: ColorWrite::Clamp,
        }
    }
}

impl From<&SceneConfig> for RenderConfig {
    fn from(config: &SceneConfig) -> Self {
        Self {
            samples_per_pixel: config.samples_per_pixel,
            shading: ShadingOptions::from(config),
            color_write: config.color_write,
        }
    }
}

/// Render a single pixel with multi-sampling.
///
/// `(i, j)` are scene-space coordinates, `j = 0` at the bottom. Returns the
/// mean of the sample colors, unclamped, or the background when there are
/// no samples to average.
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    i: u32,
    j: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    if config.samples_per_pixel == 0 {
        return BACKGROUND;
    }

    let mut pixel_color = Color::ZERO;

    for _ in 0..config.samples_per_pixel {
        let ray = camera.get_ray(i, j, rng);
        pixel_color += ray_color(&ray, scene, &config.shading);
    }

    // Average the samples
    pixel_color / config.samples_per_pixel as f32
}

/// Render the entire scene into a new frame buffer, one pixel at a time.
pub fn render(
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> FrameBuffer {
    let start = Instant::now();
    log::info!(
        "Rendering {}x{} @ {} spp ({} spheres)",
        camera.image_width,
        camera.image_height,
        config.samples_per_pixel,
        scene.len()
    );

    let mut image = FrameBuffer::new(camera.image_width, camera.image_height);

    for i in 0..camera.image_width {
        for j in 0..camera.image_height {
            let color = render_pixel(camera, scene, i, j, config, rng);
            image.set_pixel(i, j, color, config.color_write);
        }
    }

    log::info!("Rendered in {:?}", start.elapsed());
    image
}

/// Sample generator for a configuration: seeded when the configuration
/// asks for it, from OS entropy otherwise.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Validate a configuration and render it on the current thread.
pub fn render_config(config: &SceneConfig) -> RenderResult<FrameBuffer> {
    config.validate()?;

    let scene = Scene::from_config(config);
    let camera = Camera::from_config(config);
    let mut rng = make_rng(config.seed);

    Ok(render(&camera, &scene, &RenderConfig::from(config), &mut rng))
}
