//! Sandbox configuration.
//!
//! Provides the world layout, where the terrain image comes from, where the
//! result goes, and the scripted list of blasts. Loaded from TOML.

use dterrain_world::WorldConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Configuration file name.
pub const CONFIG_FILE: &str = "sandbox.toml";

/// A single scripted explosion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlastConfig {
    /// Centre X in scene units
    pub x: f32,
    /// Centre Y in scene units
    pub y: f32,
    /// Radius in pixels
    pub radius: u32,
    /// Stamp an outline rim around the crater
    #[serde(default = "default_true")]
    pub outline: bool,
}

fn default_true() -> bool {
    true
}

/// Sandbox configuration parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    /// Grid layout and scene scale
    pub world: WorldConfig,
    /// Terrain image (None = generated backdrop)
    pub source: Option<PathBuf>,
    /// Generated backdrop width in pixels
    pub backdrop_width: u32,
    /// Generated backdrop height in pixels
    pub backdrop_height: u32,
    /// Where the composited result is written
    pub output: PathBuf,
    /// Blasts applied in order
    pub blasts: Vec<BlastConfig>,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig::default(),
            source: None,
            backdrop_width: 512,
            backdrop_height: 512,
            output: PathBuf::from("terrain_out.png"),
            blasts: vec![
                BlastConfig {
                    x: 4.0,
                    y: 5.0,
                    radius: 40,
                    outline: true,
                },
                BlastConfig {
                    x: 7.5,
                    y: 6.0,
                    radius: 64,
                    outline: true,
                },
                BlastConfig {
                    x: 12.0,
                    y: 9.0,
                    radius: 24,
                    outline: false,
                },
            ],
        }
    }
}

impl SandboxConfig {
    /// Load configuration from a specific path.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            info!("Config file not found, using defaults");
            return Self::default();
        }

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!("Failed to read config file: {e}");
                return Self::default();
            },
        };

        match toml::from_str::<Self>(&contents) {
            Ok(mut config) => {
                config.validate();
                info!("Loaded config from {}", path.display());
                config
            },
            Err(e) => {
                warn!("Failed to parse config file: {e}");
                Self::default()
            },
        }
    }

    /// Validate and clamp configuration values to sensible ranges.
    pub fn validate(&mut self) {
        self.world.validate();
        self.backdrop_width = self.backdrop_width.clamp(self.world.chunks_x, 16_384);
        self.backdrop_height = self.backdrop_height.clamp(self.world.chunks_y, 16_384);
        for blast in &mut self.blasts {
            blast.radius = blast.radius.clamp(1, 1024);
        }
    }
}
