use anyhow::{Context, Result};
use clap::Parser;
use umbra_core::SceneConfig;
use umbra_renderer::{render_config, render_config_parallel, save_ppm};

mod cli;

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    log::info!("Starting Umbra");
    run(&args)
}

/// Load the scene, apply overrides, render and write the image.
fn run(args: &Args) -> Result<()> {
    let config = match &args.scene {
        Some(path) => SceneConfig::load(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        None => {
            log::info!("No scene given, using the built-in scene");
            SceneConfig::reference()
        }
    };
    let config = args.apply_overrides(config);

    let image = if args.parallel {
        render_config_parallel(&config, None)
    } else {
        render_config(&config)
    }
    .context("Render failed")?;

    save_ppm(&image, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    Ok(())
}
