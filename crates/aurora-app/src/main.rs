//! Aurora — decorative GPU scene viewer.
//!
//! Opens a window and runs one of three ambient renderers: a pointer-reactive
//! starfield, a color-cycling energy orb, or a procedurally textured planet.
//!
//! Run with: `cargo run -p aurora-app -- --scene orb`

use clap::Parser;
use tracing::{info, warn};

use aurora_config::{CliArgs, Config};

fn main() {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().or_else(Config::default_config_dir);
    let mut config = match &config_dir {
        Some(dir) => Config::load_or_create(dir).unwrap_or_else(|e| {
            warn!("Failed to load config: {e}, using defaults");
            Config::default()
        }),
        None => Config::default(),
    };
    config.apply_cli_overrides(&args);

    aurora_log::init_logging(None, cfg!(debug_assertions), Some(&config));

    info!("Aurora scene viewer");
    info!(
        "Window: {}x{} | Scene: {:?}",
        config.window.width, config.window.height, config.scene
    );

    aurora_app::window::run_with_config(config);
}
