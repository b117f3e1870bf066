//! Bucket-based tile rendering.
//!
//! Divides the image into tiles (buckets) that can be rendered
//! independently and in parallel using rayon. Each bucket owns its
//! accumulator and its RNG, so workers never share mutable state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rayon::prelude::*;
use umbra_core::SceneConfig;
use umbra_math::Vec2;

use crate::renderer::render_pixel;
use crate::{Camera, Color, FrameBuffer, RenderConfig, RenderError, RenderResult, Scene};

/// A rectangular region of the image to render.
///
/// Coordinates are scene-space pixels, `(x, y)` being the bucket corner
/// closest to pixel `(0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Index of this bucket in the render order
    pub index: usize,
}

impl Bucket {
    /// Create a new bucket.
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self { x, y, width, height, index }
    }

    /// Get the total number of pixels in this bucket.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    /// Midpoint of the bucket in pixel coordinates.
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.x as f32 + self.width as f32 * 0.5,
            self.y as f32 + self.height as f32 * 0.5,
        )
    }

    /// RNG seed for this bucket. Depends on position only, so the output
    /// does not change with thread count or render order.
    pub fn seed(&self, base: u64) -> u64 {
        let key = ((self.y as u64) << 32) | self.x as u64;
        base ^ key.wrapping_mul(0x9E37_79B9_7F4A_7C15)
    }
}

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// Tile a `width` x `height` image into buckets of at most `bucket_size`
/// pixels a side, ordered from the image center outwards.
///
/// Edge buckets are clipped to the image. `index` follows the returned order.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let size = bucket_size.max(1);

    let mut buckets: Vec<Bucket> = (0..height)
        .step_by(size as usize)
        .flat_map(|y| {
            (0..width).step_by(size as usize).map(move |x| {
                Bucket::new(x, y, size.min(width - x), size.min(height - y), 0)
            })
        })
        .collect();

    let image_center = Vec2::new(width as f32, height as f32) * 0.5;
    buckets.sort_by(|a, b| {
        let da = a.center().distance_squared(image_center);
        let db = b.center().distance_squared(image_center);
        da.total_cmp(&db)
    });

    for (index, bucket) in buckets.iter_mut().enumerate() {
        bucket.index = index;
    }
    buckets
}

/// Result of rendering a bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    /// The bucket that was rendered
    pub bucket: Bucket,
    /// Averaged colors, row-major within the bucket starting at `(x, y)`
    pub pixels: Vec<Color>,
}

impl BucketResult {
    /// Create a new bucket result.
    pub fn new(bucket: Bucket, pixels: Vec<Color>) -> Self {
        Self { bucket, pixels }
    }

    /// Copy the bucket into its region of the frame buffer.
    pub fn write_into(&self, image: &mut FrameBuffer, config: &RenderConfig) {
        let width = self.bucket.width.max(1) as usize;
        for (n, color) in self.pixels.iter().enumerate() {
            let i = self.bucket.x + (n % width) as u32;
            let j = self.bucket.y + (n / width) as u32;
            image.set_pixel(i, j, *color, config.color_write);
        }
    }
}

fn is_cancelled(cancel: Option<&AtomicBool>) -> bool {
    cancel.is_some_and(|flag| flag.load(Ordering::Relaxed))
}

/// Render a single bucket.
///
/// `cancel` is polled before every pixel.
pub fn render_bucket(
    bucket: &Bucket,
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
    cancel: Option<&AtomicBool>,
) -> RenderResult<BucketResult> {
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);

    for local_y in 0..bucket.height {
        for local_x in 0..bucket.width {
            if is_cancelled(cancel) {
                return Err(RenderError::Cancelled);
            }
            let color = render_pixel(
                camera,
                scene,
                bucket.x + local_x,
                bucket.y + local_y,
                config,
                rng,
            );
            pixels.push(color);
        }
    }

    Ok(BucketResult::new(*bucket, pixels))
}

/// Render all buckets on the rayon thread pool.
///
/// The scene is shared read-only; every bucket gets a private `StdRng`
/// derived from `seed` and its position, so the same seed always produces
/// the same image.
pub fn render_parallel(
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
    seed: u64,
    bucket_size: u32,
    cancel: Option<&AtomicBool>,
) -> RenderResult<FrameBuffer> {
    let start = Instant::now();
    let buckets = generate_buckets(camera.image_width, camera.image_height, bucket_size);
    log::info!(
        "Rendering {}x{} @ {} spp in {} buckets on {} threads",
        camera.image_width,
        camera.image_height,
        config.samples_per_pixel,
        buckets.len(),
        rayon::current_num_threads()
    );

    let results = buckets
        .par_iter()
        .map(|bucket| -> RenderResult<BucketResult> {
            let mut rng = StdRng::seed_from_u64(bucket.seed(seed));
            let result = render_bucket(bucket, camera, scene, config, &mut rng, cancel)?;
            log::debug!(
                "Bucket {} ({}, {}) {}x{} done",
                bucket.index,
                bucket.x,
                bucket.y,
                bucket.width,
                bucket.height
            );
            Ok(result)
        })
        .collect::<RenderResult<Vec<_>>>();

    let results = match results {
        Ok(results) => results,
        Err(err) => {
            log::warn!("Render stopped after {:?}: {}", start.elapsed(), err);
            return Err(err);
        }
    };

    let mut image = FrameBuffer::new(camera.image_width, camera.image_height);
    for result in &results {
        result.write_into(&mut image, config);
    }

    log::info!("Rendered in {:?}", start.elapsed());
    Ok(image)
}

/// Validate a configuration and render it with [`render_parallel`].
///
/// Without a configured seed a random one is drawn and logged so the image
/// can be reproduced.
pub fn render_config_parallel(
    config: &SceneConfig,
    cancel: Option<&AtomicBool>,
) -> RenderResult<FrameBuffer> {
    config.validate()?;

    let seed = config.seed.unwrap_or_else(|| {
        let seed = rand::random::<u64>();
        log::info!("Using random seed {seed}");
        seed
    });

    render_parallel(
        &Camera::from_config(config),
        &Scene::from_config(config),
        &RenderConfig::from(config),
        seed,
        DEFAULT_BUCKET_SIZE,
        cancel,
    )
}
