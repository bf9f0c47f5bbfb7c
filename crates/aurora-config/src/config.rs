//! Configuration structs with sensible defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Which decorative scene the window hosts.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum SceneKind {
    /// 2D particle field with pointer attraction.
    #[default]
    Starfield,
    /// 3D orb: particle cloud, shells, color cycling.
    Orb,
    /// Textured planet with hover/click interaction.
    Planet,
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Window settings.
    pub window: WindowConfig,
    /// Which scene to mount.
    pub scene: SceneKind,
    /// Starfield settings.
    pub starfield: StarfieldConfig,
    /// Orb settings.
    pub orb: OrbConfig,
    /// Planet settings.
    pub planet: PlanetConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Window configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Window width in logical pixels.
    pub width: u32,
    /// Window height in logical pixels.
    pub height: u32,
    /// Enable vsync (PresentMode::Fifo).
    pub vsync: bool,
    /// Window title.
    pub title: String,
}

/// Starfield configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StarfieldConfig {
    /// Seed for deterministic star placement.
    pub seed: u64,
    /// Surface area (logical px²) per star. One star per this many units.
    pub area_per_star: f32,
}

/// Orb configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OrbConfig {
    /// Seed for the background particle cloud.
    pub seed: u64,
    /// Camera orbit distance.
    pub camera_distance: f32,
    /// Auto-rotate speed for the orbit camera (radians per second).
    pub auto_rotate_speed: f32,
}

/// Planet configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlanetConfig {
    /// Seed for the baked surface texture and background stars.
    pub seed: u64,
    /// Base scale applied before interaction multipliers.
    pub base_scale: f32,
    /// Idle rotation per frame in radians.
    pub rotation_speed: f32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            vsync: true,
            title: "Aurora".to_string(),
        }
    }
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            area_per_star: 5000.0,
        }
    }
}

impl Default for OrbConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            camera_distance: 8.0,
            auto_rotate_speed: 0.5,
        }
    }
}

impl Default for PlanetConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            base_scale: 1.0,
            rotation_speed: 0.01,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents =
                std::fs::read_to_string(&config_path).map_err(|source| ConfigError::Read {
                    path: config_path.clone(),
                    source,
                })?;
            let config: Config = ron::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: config_path.clone(),
                source,
            })?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::Write {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized = ron::ser::to_string_pretty(self, pretty)?;

        std::fs::write(&config_path, serialized).map_err(|source| ConfigError::Write {
            path: config_path.clone(),
            source,
        })?;
        Ok(())
    }

    /// The platform config directory for Aurora, if one can be determined.
    pub fn default_config_dir() -> Option<std::path::PathBuf> {
        dirs::config_dir().map(|d| d.join("aurora"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(!ron_str.is_empty());
        assert!(ron_str.contains("width: 1280"));
        assert!(ron_str.contains("area_per_star: 5000"));
    }

    #[test]
    fn test_config_round_trip() {
        let mut config = Config::default();
        config.scene = SceneKind::Orb;
        config.planet.rotation_speed = 0.02;

        let serialized = ron::ser::to_string_pretty(
            &config,
            ron::ser::PrettyConfig::new().depth_limit(3),
        )
        .unwrap();
        let parsed: Config = ron::from_str(&serialized).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        // Only the window section present; everything else takes defaults.
        let partial = "(window: (width: 640))";
        let config: Config = ron::from_str(partial).unwrap();
        assert_eq!(config.window.width, 640);
        assert_eq!(config.window.height, 720);
        assert_eq!(config.scene, SceneKind::Starfield);
        assert_eq!(config.planet.rotation_speed, 0.01);
    }

    #[test]
    fn test_save_and_load_or_create() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.window.width = 999;
        config.save(dir.path()).unwrap();

        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(loaded.window.width, 999);
    }

    #[test]
    fn test_load_or_create_writes_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join("config.ron").exists());
    }

    #[test]
    fn test_invalid_ron_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.ron"), "(window: oops").unwrap();
        let result = Config::load_or_create(dir.path());
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }
}
