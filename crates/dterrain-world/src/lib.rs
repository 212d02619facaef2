//! # DTerrain World
//!
//! A large destructible raster surface split into a fixed grid of chunks.
//!
//! This crate handles:
//! - Resolving global pixel coordinates to chunks and local coordinates
//! - Splitting single-pixel, ranged, and whole-shape destruction across chunks
//! - Occupancy queries and outline stamping
//! - Slicing a source image into chunks and composing it back
//!
//! Pixel storage itself sits behind the [`Chunk`] trait; [`PixelChunk`] is
//! the in-memory implementation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod chunk;
pub mod config;
pub mod grid;
pub mod pixel_chunk;
pub mod setup;
pub mod world;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::chunk::*;
    pub use crate::config::*;
    pub use crate::grid::*;
    pub use crate::pixel_chunk::*;
    pub use crate::world::*;
    pub use dterrain_common::prelude::*;
}

pub use prelude::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_from_config_and_query() {
        let image = image::RgbaImage::from_pixel(64, 64, image::Rgba([200, 180, 120, 255]));
        let mut world = World::from_image(&image, &WorldConfig::default()).expect("valid world");

        assert!(world.filled_at((10, 10)));
        assert!(world.destroy_pixel_at((10, 10)));
        assert!(!world.filled_at((10, 10)));
        assert!(world.filled_at((11, 10)));
    }

    #[test]
    fn test_blast_leaves_hole_across_four_chunks() {
        let image = image::RgbaImage::from_pixel(64, 64, image::Rgba([200, 180, 120, 255]));
        let mut world = World::from_image(&image, &WorldConfig::default()).expect("valid world");

        // 8x8 square centred on the corner shared by chunks (0,0), (0,1), (1,0), (1,1)
        let shape = Shape::new(vec![Interval::new(0, 7); 8], 8, Color::BLACK);
        assert!(world.destroy_shape((4, 4), &shape));

        for x in 4..12 {
            for y in 4..12 {
                assert!(!world.filled_at((x, y)), "({x}, {y})");
            }
        }
        assert!(world.filled_at((3, 4)));
        assert!(world.filled_at((12, 11)));
        assert_eq!(world.pending_updates().collect::<Vec<_>>(), vec![0, 1, 4, 5]);
    }

    #[test]
    fn test_rendering_side_clears_flags() {
        let image = image::RgbaImage::from_pixel(32, 32, image::Rgba([1, 1, 1, 255]));
        let mut world = World::from_image(
            &image,
            &WorldConfig {
                chunks_x: 2,
                chunks_y: 2,
                ..Default::default()
            },
        )
        .expect("valid world");

        world.make_outline((0, 0), Color::WHITE);
        assert_eq!(world.pending_updates().count(), 1);
        for chunk in world.chunks_mut() {
            chunk.clear_update_pending();
        }
        assert_eq!(world.pending_updates().count(), 0);
    }
}
