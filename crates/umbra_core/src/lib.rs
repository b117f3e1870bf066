//! Umbra Core - scene description for the Umbra ray tracer.
//!
//! This crate provides:
//!
//! - **Scene configuration**: `SceneConfig`, `SphereConfig`, loadable from JSON
//! - **Render policies**: `PixelSampling`, `ColorWrite`
//! - **Validation**: `ConfigError` for every rejected configuration
//!
//! # Example
//!
//! ```ignore
//! use umbra_core::SceneConfig;
//!
//! let config = SceneConfig::load("scene.json")?;
//! println!("{} spheres at {}x{}",
//!     config.spheres.len(),
//!     config.image_width,
//!     config.image_height);
//! ```

pub mod config;
pub mod error;

// Re-export commonly used types
pub use config::{
    ColorWrite, PixelSampling, SceneConfig, SphereConfig, DEFAULT_SHADOW_EPSILON, MAX_CHANNEL,
};
pub use error::{ConfigError, ConfigResult};
