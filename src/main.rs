extern crate anyhow;
extern crate castlib;
extern crate env_logger;
#[macro_use]
extern crate log;

use anyhow::{Context, Result};
use log::LevelFilter;

use castlib::output::{save_ppm, to_image};
use castlib::{render, RenderConfig, Scene};

mod logger;

fn main() -> Result<()> {
    logger::init_logger(LevelFilter::Info);

    let config = RenderConfig::default();
    let scene = Scene::reference().context("failed to build scene")?;

    let pixels = render(&scene, &config.camera, config.dimensions()).context("render failed")?;
    let image = to_image(&pixels, config.dimensions()).context("failed to pack pixels")?;
    save_ppm(&config.output, &image)
        .with_context(|| format!("failed to write {}", config.output.display()))?;

    info!("done");
    Ok(())
}
