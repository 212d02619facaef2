//! # DTerrain Sandbox
//!
//! Builds a chunked world from an image (or generated hills), runs a
//! scripted series of blasts against it, and writes the result to a PNG.
//!
//! Usage: `dterrain-sandbox [config.toml]`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

mod backdrop;
mod blast;
mod config;

use anyhow::{Context, Result};
use dterrain_common::PixelCoord;
use dterrain_world::{Chunk, World};
use glam::Vec2;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{SandboxConfig, CONFIG_FILE};

/// Main entry point.
fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("dterrain=info".parse()?))
        .init();

    info!("DTerrain sandbox starting...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let config_path = std::env::args().nth(1).unwrap_or_else(|| CONFIG_FILE.to_string());
    let config = SandboxConfig::load_from(&config_path);

    let source = match &config.source {
        Some(path) => image::open(path)
            .with_context(|| format!("failed to open {}", path.display()))?
            .to_rgba8(),
        None => {
            info!(
                "No source image, generating {}x{} hills",
                config.backdrop_width, config.backdrop_height
            );
            backdrop::hills(config.backdrop_width, config.backdrop_height)
        },
    };

    let mut world = World::from_image(&source, &config.world)?;
    info!("Camera focus at {}", world.camera_focus());

    for blast in &config.blasts {
        let centre = PixelCoord::from(world.scene_to_world(Vec2::new(blast.x, blast.y)));
        let outline = blast.outline.then_some(config.world.outline);
        let stamped = blast::detonate(&mut world, centre, blast.radius, outline);
        debug!(
            "Blast at {:?} r={} stamped {} rim pixels",
            centre, blast.radius, stamped
        );
    }

    // Stand in for the renderer: acknowledge every refresh request
    let pending: Vec<usize> = world.pending_updates().collect();
    info!("{} chunks need a refresh: {:?}", pending.len(), pending);
    for chunk in world.chunks_mut() {
        chunk.clear_update_pending();
    }

    if let Some(parent) = config.output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    world
        .compose()
        .save(&config.output)
        .with_context(|| format!("failed to write {}", config.output.display()))?;

    info!("Wrote {}", config.output.display());
    Ok(())
}
