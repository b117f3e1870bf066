use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use umbra_core::SceneConfig;

/// Log levels accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "umbra")]
#[command(about = "Render spheres under a point light to a PPM image")]
pub struct Args {
    /// Scene description (JSON). Uses the built-in scene when omitted
    #[arg(long)]
    pub scene: Option<PathBuf>,

    /// Output file path
    #[arg(short, long, default_value = "rendering.ppm")]
    pub output: PathBuf,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Number of samples per pixel
    #[arg(long, short = 's')]
    pub samples: Option<u32>,

    /// Seed for the sample generator
    #[arg(long)]
    pub seed: Option<u64>,

    /// Render buckets on all cores
    #[arg(long, short = 'p')]
    pub parallel: bool,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Args {
    /// Apply command line overrides on top of a loaded configuration.
    pub fn apply_overrides(&self, mut config: SceneConfig) -> SceneConfig {
        if let Some(width) = self.width {
            config.image_width = width;
        }
        if let Some(height) = self.height {
            config.image_height = height;
        }
        if let Some(samples) = self.samples {
            config.samples_per_pixel = samples;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        config
    }
}
