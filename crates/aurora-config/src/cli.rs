//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::{Config, SceneKind};

/// Aurora command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "aurora", about = "Decorative real-time renderers")]
pub struct CliArgs {
    /// Window width.
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height.
    #[arg(long)]
    pub height: Option<u32>,

    /// Scene to mount: starfield, orb, or planet.
    #[arg(long)]
    pub scene: Option<String>,

    /// Seed for procedural content (applies to the selected scene).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Planet idle rotation per frame in radians.
    #[arg(long)]
    pub rotation_speed: Option<f32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.window.width = w;
        }
        if let Some(h) = args.height {
            self.window.height = h;
        }
        if let Some(ref scene) = args.scene {
            match scene.to_ascii_lowercase().as_str() {
                "starfield" => self.scene = SceneKind::Starfield,
                "orb" => self.scene = SceneKind::Orb,
                "planet" => self.scene = SceneKind::Planet,
                other => log::warn!("Unknown scene '{other}', keeping {:?}", self.scene),
            }
        }
        if let Some(seed) = args.seed {
            self.starfield.seed = seed;
            self.orb.seed = seed;
            self.planet.seed = seed;
        }
        if let Some(speed) = args.rotation_speed {
            self.planet.rotation_speed = speed;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            width: Some(1920),
            scene: Some("planet".to_string()),
            seed: Some(7),
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.window.width, 1920);
        assert_eq!(config.scene, SceneKind::Planet);
        assert_eq!(config.planet.seed, 7);
        // Non-overridden fields retain defaults
        assert_eq!(config.window.height, 720);
        assert_eq!(config.planet.rotation_speed, 0.01);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_unknown_scene_is_ignored() {
        let mut config = Config::default();
        let args = CliArgs {
            scene: Some("teapot".to_string()),
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.scene, SceneKind::Starfield);
    }
}
