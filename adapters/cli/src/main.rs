#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that boots the Pirate Fleet experience.

mod config;

use std::path::Path;

use anyhow::Result;
use log::info;
use pirate_fleet_rendering::{Palette, Presentation, RenderingBackend, Scene};
use pirate_fleet_rendering_macroquad::MacroquadBackend;
use pirate_fleet_system_modes::{FrameStatus, GameModeController};

use self::config::GameConfig;

const CONFIG_PATH: &str = "pirate-fleet.toml";

/// Entry point for the Pirate Fleet command-line interface.
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (config, context) = GameConfig::load_session(Path::new(CONFIG_PATH))?;

    let palette = Palette::default();
    let presentation = Presentation::new(
        config.window.title.clone(),
        config.window.width,
        config.window.height,
        palette.sea,
    );

    let mut controller = GameModeController::new(context);
    MacroquadBackend::new()
        .with_vsync(true)
        .run(presentation, move |dt, events| {
            if controller.run_frame(events, dt)? == FrameStatus::Stopped {
                return Ok(None);
            }
            Ok(controller
                .render()?
                .map(|frame| Scene::compose(&frame, &palette)))
        })?;

    info!("goodbye");
    Ok(())
}
