//! Scene configuration.
//!
//! A `SceneConfig` carries everything a render needs: the spheres, the
//! point light, the image resolution and the sampling policy. It is plain
//! data so it can round-trip through JSON; the renderer turns it into its
//! own runtime types.

use std::path::Path;

use serde::{Deserialize, Serialize};
use umbra_math::{Interval, Vec3};

use crate::error::{ConfigError, ConfigResult};

/// Offset applied along the light direction before casting a shadow ray.
pub const DEFAULT_SHADOW_EPSILON: f32 = 0.001;

/// Largest value an 8-bit channel can hold.
pub const MAX_CHANNEL: f32 = 255.0;

/// How sample positions are chosen inside a pixel footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixelSampling {
    /// Uniform random position in `[i, i + 1) x [j, j + 1)`.
    #[default]
    Jittered,
    /// Every sample goes through the pixel center. Deterministic, no
    /// antialiasing.
    Center,
}

/// How a floating point channel is narrowed to 8 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorWrite {
    /// Clamp to `[0, 255]`, then truncate.
    #[default]
    Clamp,
    /// Truncate toward zero and keep the low 8 bits, like an unchecked
    /// byte cast. Values above 255 wrap around.
    Wrap,
}

impl ColorWrite {
    /// Narrow a single channel value.
    pub fn narrow(self, value: f32) -> u8 {
        match self {
            ColorWrite::Clamp => Interval::new(0.0, MAX_CHANNEL).clamp(value) as u8,
            // NaN saturates to 0 through the i64 cast.
            ColorWrite::Wrap => (value as i64) as u8,
        }
    }

    /// Narrow an RGB color.
    pub fn narrow_rgb(self, color: Vec3) -> [u8; 3] {
        [
            self.narrow(color.x),
            self.narrow(color.y),
            self.narrow(color.z),
        ]
    }
}

/// A sphere as it appears in a scene file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SphereConfig {
    pub center: [f32; 3],
    pub radius: f32,
    /// Material color, each component in `[0, 255]`.
    pub color: [f32; 3],
}

impl SphereConfig {
    pub fn new(center: [f32; 3], radius: f32, color: [f32; 3]) -> Self {
        Self {
            center,
            radius,
            color,
        }
    }

    pub fn center(&self) -> Vec3 {
        Vec3::from_array(self.center)
    }

    pub fn color(&self) -> Vec3 {
        Vec3::from_array(self.color)
    }
}

/// Complete description of a render.
///
/// Only the first five fields are required in a scene file; the rest fall
/// back to the defaults of the reference renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneConfig {
    pub spheres: Vec<SphereConfig>,
    pub light_position: [f32; 3],
    pub image_width: u32,
    pub image_height: u32,
    pub samples_per_pixel: u32,

    /// Camera position. The image plane is fixed at z = -1.
    #[serde(default)]
    pub eye: [f32; 3],

    /// Seed for the sample generator. `None` draws one from the OS.
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default)]
    pub sampling: PixelSampling,

    #[serde(default = "default_shadow_epsilon")]
    pub shadow_epsilon: f32,

    /// Ignore occluders that lie beyond the light.
    #[serde(default)]
    pub bounded_shadows: bool,

    #[serde(default)]
    pub color_write: ColorWrite,
}

fn default_shadow_epsilon() -> f32 {
    DEFAULT_SHADOW_EPSILON
}

impl SceneConfig {
    /// The built-in scene: a large red sphere, a small blue sphere up and
    /// to the right of it, and a light above both.
    pub fn reference() -> Self {
        Self {
            spheres: vec![
                SphereConfig::new([0.0, 0.0, -3.0], 1.0, [255.0, 0.0, 0.0]),
                SphereConfig::new([0.6, 0.6, -2.0], 0.2, [0.0, 0.0, 255.0]),
            ],
            light_position: [1.0, 1.0, -1.0],
            image_width: 800,
            image_height: 800,
            samples_per_pixel: 10,
            eye: [0.0, 0.0, 0.0],
            seed: None,
            sampling: PixelSampling::Jittered,
            shadow_epsilon: DEFAULT_SHADOW_EPSILON,
            bounded_shadows: false,
            color_write: ColorWrite::Clamp,
        }
    }

    /// Parse and validate a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: SceneConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        log::debug!("Loading scene configuration from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!(
            "Loaded {} spheres from {} ({}x{} @ {} spp)",
            config.spheres.len(),
            path.display(),
            config.image_width,
            config.image_height,
            config.samples_per_pixel
        );
        Ok(config)
    }

    pub fn light_position(&self) -> Vec3 {
        Vec3::from_array(self.light_position)
    }

    pub fn eye(&self) -> Vec3 {
        Vec3::from_array(self.eye)
    }

    /// Check every invariant the renderer relies on.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.image_width == 0 || self.image_height == 0 {
            return Err(ConfigError::EmptyImage {
                width: self.image_width,
                height: self.image_height,
            });
        }
        if self.samples_per_pixel == 0 {
            return Err(ConfigError::NoSamples);
        }
        if !self.shadow_epsilon.is_finite() || self.shadow_epsilon <= 0.0 {
            return Err(ConfigError::InvalidEpsilon(self.shadow_epsilon));
        }

        check_finite(self.light_position, "light_position")?;
        check_finite(self.eye, "eye")?;
        // Any eye on the image plane can coincide with a sample point and
        // produce a zero-length primary ray.
        if self.eye[2] == -1.0 {
            return Err(ConfigError::EyeOnImagePlane(self.eye));
        }

        let channel = Interval::new(0.0, MAX_CHANNEL);
        for (index, sphere) in self.spheres.iter().enumerate() {
            check_finite(sphere.center, &format!("spheres[{index}].center"))?;
            if !sphere.radius.is_finite() || sphere.radius <= 0.0 {
                return Err(ConfigError::InvalidRadius {
                    index,
                    radius: sphere.radius,
                });
            }
            if !sphere.color.iter().all(|&c| channel.contains(c)) {
                return Err(ConfigError::ColorOutOfRange {
                    index,
                    color: sphere.color,
                });
            }
        }

        Ok(())
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::reference()
    }
}

fn check_finite(v: [f32; 3], field: &str) -> ConfigResult<()> {
    if v.iter().all(|c| c.is_finite()) {
        Ok(())
    } else {
        Err(ConfigError::NonFinite(field.to_string()))
    }
}
