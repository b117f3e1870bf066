//! Errors raised while loading or validating a scene configuration.

use thiserror::Error;

/// Errors that can occur while loading or validating a [`SceneConfig`].
///
/// [`SceneConfig`]: crate::SceneConfig
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Image must have non-zero size, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("samples_per_pixel must be at least 1")]
    NoSamples,

    #[error("Sphere {index} has invalid radius {radius} (must be finite and > 0)")]
    InvalidRadius { index: usize, radius: f32 },

    #[error("Sphere {index} color {color:?} is outside [0, 255]")]
    ColorOutOfRange { index: usize, color: [f32; 3] },

    #[error("Non-finite value in {0}")]
    NonFinite(String),

    #[error("shadow_epsilon must be finite and > 0, got {0}")]
    InvalidEpsilon(f32),

    #[error("Eye {0:?} lies on the image plane z = -1")]
    EyeOnImagePlane([f32; 3]),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
