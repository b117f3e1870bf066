//! Umbra Renderer - sampled ray tracing of spheres under a point light.
//!
//! Primary rays are jittered across each pixel footprint and averaged.
//! Every hit gets Lambertian shading and a hard-shadow test against the
//! whole scene.

mod bucket;
mod camera;
mod error;
mod framebuffer;
mod hit_record;
mod ppm;
mod renderer;
mod scene;
mod shading;
mod sphere;

pub use bucket::{
    generate_buckets, render_bucket, render_config_parallel, render_parallel, Bucket,
    BucketResult, DEFAULT_BUCKET_SIZE,
};
pub use camera::{gen_f32, Camera, IMAGE_PLANE_Z};
pub use error::{RenderError, RenderResult};
pub use framebuffer::FrameBuffer;
pub use hit_record::{HitRecord, FAR_AWAY};
pub use ppm::{ppm_max_value, save_ppm, write_ppm, PpmError};
pub use renderer::{make_rng, render, render_config, render_pixel, RenderConfig};
pub use scene::Scene;
pub use shading::{ray_color, shade, Color, ShadingOptions, BACKGROUND};
pub use sphere::Sphere;

/// Re-export Vec3 and common math types from umbra_math
pub use umbra_math::{Interval, Ray, RayError, Vec3};
/// Re-export the scene description from umbra_core
pub use umbra_core::{ColorWrite, ConfigError, PixelSampling, SceneConfig, SphereConfig};
