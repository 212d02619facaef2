//! World configuration.
//!
//! Grid dimensions, scene scale, and the default outline color. Stored as
//! TOML and loaded leniently: a missing or broken file falls back to defaults.

use dterrain_common::{Color, ConfigError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Parameters used to build a [`World`](crate::World) from a source image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Chunks along X
    pub chunks_x: u32,
    /// Chunks along Y
    pub chunks_y: u32,
    /// Pixels per scene unit
    pub pixels_per_unit: u32,
    /// Outline color for shape rims
    pub outline: Color,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            chunks_x: 4,
            chunks_y: 4,
            pixels_per_unit: 32,
            outline: Color::rgb(48, 32, 24),
        }
    }
}

impl WorldConfig {
    /// Load configuration from a path.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            info!("Config file {} not found, using defaults", path.display());
            return Self::default();
        }

        match Self::read(path) {
            Ok(mut config) => {
                config.validate();
                info!("Loaded config from {}", path.display());
                config
            },
            Err(e) => {
                warn!("Failed to load config file: {e}");
                Self::default()
            },
        }
    }

    /// Strict load: surfaces IO and parse errors.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Save configuration to a path.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Encode(e.to_string()))?;
        fs::write(path, contents)?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Clamp values to usable ranges.
    pub fn validate(&mut self) {
        self.chunks_x = self.chunks_x.clamp(1, 1024);
        self.chunks_y = self.chunks_y.clamp(1, 1024);
        self.pixels_per_unit = self.pixels_per_unit.clamp(1, 4096);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = WorldConfig::default();
        assert_eq!(config.chunks_x, 4);
        assert_eq!(config.chunks_y, 4);
        assert_eq!(config.pixels_per_unit, 32);
    }

    #[test]
    fn test_config_validation() {
        let mut config = WorldConfig {
            chunks_x: 0,
            chunks_y: 5000,
            pixels_per_unit: 0,
            ..Default::default()
        };
        config.validate();
        assert_eq!(config.chunks_x, 1);
        assert_eq!(config.chunks_y, 1024);
        assert_eq!(config.pixels_per_unit, 1);
    }

    #[test]
    fn test_config_save_load() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("world.toml");

        let config = WorldConfig {
            chunks_x: 8,
            chunks_y: 2,
            pixels_per_unit: 100,
            outline: Color::rgb(1, 2, 3),
        };
        config.save_to(&config_path).expect("Failed to save config");

        let loaded = WorldConfig::load_from(&config_path);
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_config_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("world.toml");
        fs::write(&config_path, "chunks_x = 6\n").expect("write failed");

        let loaded = WorldConfig::load_from(&config_path);
        assert_eq!(loaded.chunks_x, 6);
        assert_eq!(loaded.chunks_y, 4);
    }

    #[test]
    fn test_config_load_missing_file() {
        let config = WorldConfig::load_from("/nonexistent/path/world.toml");
        assert_eq!(config, WorldConfig::default());
    }

    #[test]
    fn test_config_load_invalid_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("world.toml");
        fs::write(&config_path, "chunks_x = \"many\"").expect("write failed");

        assert_eq!(WorldConfig::load_from(&config_path), WorldConfig::default());
        assert!(matches!(
            WorldConfig::read(&config_path),
            Err(ConfigError::Parse(_))
        ));
    }
}
