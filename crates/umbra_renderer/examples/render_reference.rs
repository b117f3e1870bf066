//! Renders the built-in two-sphere scene and saves it as PPM.
//!
//! Run with `RUST_LOG=debug` to see per-bucket progress.

use umbra_renderer::{render_config_parallel, save_ppm, SceneConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut config = SceneConfig::reference();
    config.seed = Some(2024);

    let image = render_config_parallel(&config, None)?;

    let filename = "rendering.ppm";
    save_ppm(&image, filename)?;
    println!("Saved to {}", filename);

    Ok(())
}
