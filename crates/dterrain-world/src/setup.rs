//! Building a world from a source image and stitching it back together.
//!
//! Setup tiles the image without any bias: tile `(i, j)` covers image pixels
//! `[i*sx, (i+1)*sx) x [j*sy, (j+1)*sy)`. Each tile becomes one chunk, placed
//! in the scene with a centred pivot, which is why pixel resolution in the
//! world adds half a chunk before dividing. Image pixel `(px, py)` therefore
//! sits at world pixel `(px - sx/2, py - sy/2)`.

use dterrain_common::WorldError;
use image::{imageops, RgbaImage};
use tracing::{debug, info};

use crate::chunk::TexturedChunk;
use crate::config::WorldConfig;
use crate::grid::ChunkGrid;
use crate::pixel_chunk::PixelChunk;
use crate::world::World;

impl World<PixelChunk> {
    /// Slices `image` into `chunks_x * chunks_y` equal tiles.
    ///
    /// Chunk size is the image size divided by the grid dimension; leftover
    /// pixels on the right and bottom edges are dropped.
    pub fn from_image(image: &RgbaImage, config: &WorldConfig) -> Result<Self, WorldError> {
        let (width, height) = image.dimensions();
        let (chunks_x, chunks_y) = (config.chunks_x, config.chunks_y);
        if chunks_x == 0 || chunks_y == 0 {
            return Err(WorldError::InvalidGrid { chunks_x, chunks_y });
        }
        if width < chunks_x || height < chunks_y {
            return Err(WorldError::ImageTooSmall {
                width,
                height,
                chunks_x,
                chunks_y,
            });
        }

        let grid = ChunkGrid::new(chunks_x, chunks_y, width / chunks_x, height / chunks_y)?;
        let (sx, sy) = (grid.chunk_size_x(), grid.chunk_size_y());
        if grid.pixel_width() != width || grid.pixel_height() != height {
            debug!(
                "Dropping {}x{} leftover pixels from {}x{} image",
                width - grid.pixel_width(),
                height - grid.pixel_height(),
                width,
                height
            );
        }

        let mut chunks = Vec::with_capacity(grid.chunk_count());
        for i in 0..chunks_x {
            for j in 0..chunks_y {
                let tile = imageops::crop_imm(image, i * sx, j * sy, sx, sy).to_image();
                chunks.push(PixelChunk::new(tile));
            }
        }

        info!(
            "Split {}x{} image into {} chunks",
            width,
            height,
            chunks.len()
        );
        World::from_chunks(grid, chunks, config.pixels_per_unit)
    }
}

impl<C: TexturedChunk> World<C> {
    /// Stitches every chunk's texture back into one image.
    #[must_use]
    pub fn compose(&self) -> RgbaImage {
        let grid = self.grid();
        let mut out = RgbaImage::new(grid.pixel_width(), grid.pixel_height());
        for (index, chunk) in self.chunks().iter().enumerate() {
            let Some(coord) = grid.coord_of(index) else {
                continue;
            };
            let x = i64::from(coord.x) * i64::from(grid.chunk_size_x());
            let y = i64::from(coord.y) * i64::from(grid.chunk_size_y());
            imageops::replace(&mut out, chunk.texture(), x, y);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunk::Chunk;
    use dterrain_common::{Color, LocalCoord};
    use image::Rgba;

    /// Image whose red/green channels encode the pixel position.
    fn gradient(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| Rgba([x as u8, y as u8, 0, 255]))
    }

    fn config(chunks_x: u32, chunks_y: u32) -> WorldConfig {
        WorldConfig {
            chunks_x,
            chunks_y,
            ..Default::default()
        }
    }

    #[test]
    fn test_tiles_are_column_major() {
        let world = World::from_image(&gradient(32, 48), &config(2, 3)).expect("valid world");
        assert_eq!(world.grid().chunk_size_x(), 16);
        assert_eq!(world.grid().chunk_size_y(), 16);
        assert_eq!(world.chunks().len(), 6);

        // Index 4 = column 1, row 1
        let chunk = world.chunk(4).expect("chunk 4");
        assert_eq!(
            chunk.color_at(LocalCoord::new(0, 0)),
            Some(Color::rgb(16, 16, 0))
        );
        // Index 2 = column 0, row 2
        let chunk = world.chunk(2).expect("chunk 2");
        assert_eq!(
            chunk.color_at(LocalCoord::new(3, 5)),
            Some(Color::rgb(3, 37, 0))
        );
    }

    #[test]
    fn test_world_pixel_maps_to_image_pixel() {
        let world = World::from_image(&gradient(32, 32), &config(2, 2)).expect("valid world");
        // World pixel (p) shows image pixel (p + 8) for 16 px chunks
        let grid = world.grid();
        for (wx, wy) in [(-8, -8), (0, 0), (7, 7), (8, 8), (23, 23)] {
            let r = grid.resolve((wx, wy).into());
            let index = grid.index_of(r.chunk).expect("inside grid");
            let color = world.chunk(index).and_then(|c| c.color_at(r.local));
            assert_eq!(
                color,
                Some(Color::rgb((wx + 8) as u8, (wy + 8) as u8, 0)),
                "world ({wx}, {wy})"
            );
        }
    }

    #[test]
    fn test_leftover_pixels_dropped() {
        let world = World::from_image(&gradient(35, 33), &config(2, 2)).expect("valid world");
        assert_eq!(world.grid().chunk_size_x(), 17);
        assert_eq!(world.grid().chunk_size_y(), 16);
        assert_eq!(world.compose().dimensions(), (34, 32));
    }

    #[test]
    fn test_rejects_bad_grid() {
        let img = gradient(4, 4);
        assert!(matches!(
            World::from_image(&img, &config(0, 2)),
            Err(WorldError::InvalidGrid { .. })
        ));
        assert!(matches!(
            World::from_image(&img, &config(5, 1)),
            Err(WorldError::ImageTooSmall { .. })
        ));
    }

    #[test]
    fn test_compose_round_trips() {
        let img = gradient(48, 32);
        let world = World::from_image(&img, &config(3, 2)).expect("valid world");
        assert_eq!(world.compose(), img);
    }

    #[test]
    fn test_compose_reflects_destruction() {
        let img = gradient(32, 32);
        let mut world = World::from_image(&img, &config(2, 2)).expect("valid world");
        assert!(world.destroy_pixel_at((0, 0)));
        let out = world.compose();
        assert_eq!(out.get_pixel(8, 8).0[3], 0);
        assert_eq!(out.get_pixel(9, 8).0[3], 255);
        assert!(world.chunks().iter().any(Chunk::is_update_pending));
    }
}
