//! In-memory chunk backed by an RGBA texture.

use dterrain_common::{Color, Interval, LocalCoord, LocalRect};
use image::{Rgba, RgbaImage};

use crate::chunk::{Chunk, TexturedChunk};

/// A chunk whose pixels live in an [`RgbaImage`].
///
/// A pixel is filled when its alpha is non-zero. Destroying a pixel makes it
/// fully transparent.
#[derive(Debug, Clone)]
pub struct PixelChunk {
    /// Pixel contents
    texture: RgbaImage,
    /// Whether the texture changed since the renderer last looked
    update_pending: bool,
}

const EMPTY: Rgba<u8> = Rgba([0, 0, 0, 0]);

fn is_filled(pixel: &Rgba<u8>) -> bool {
    !Color::from(pixel.0).is_transparent()
}

impl PixelChunk {
    /// Creates a chunk from an existing texture.
    #[must_use]
    pub fn new(texture: RgbaImage) -> Self {
        Self {
            texture,
            update_pending: false,
        }
    }

    /// Creates a chunk filled with a single color.
    #[must_use]
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        Self::new(RgbaImage::from_pixel(width, height, Rgba(color.to_array())))
    }

    /// Number of filled pixels.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.texture.pixels().filter(|p| is_filled(p)).count()
    }

    /// Returns the color at a local coordinate.
    #[must_use]
    pub fn color_at(&self, local: LocalCoord) -> Option<Color> {
        self.pixel_index(local)
            .map(|(x, y)| Color::from(self.texture.get_pixel(x, y).0))
    }

    /// Consumes the chunk, returning its texture.
    #[must_use]
    pub fn into_texture(self) -> RgbaImage {
        self.texture
    }

    fn pixel_index(&self, local: LocalCoord) -> Option<(u32, u32)> {
        let (w, h) = self.texture.dimensions();
        local
            .is_inside(w, h)
            .then_some((local.x as u32, local.y as u32))
    }
}

impl Chunk for PixelChunk {
    fn size(&self) -> (u32, u32) {
        self.texture.dimensions()
    }

    fn destroy_pixel_at(&mut self, local: LocalCoord) -> bool {
        let Some((x, y)) = self.pixel_index(local) else {
            return false;
        };
        let pixel = self.texture.get_pixel_mut(x, y);
        if !is_filled(pixel) {
            return false;
        }
        *pixel = EMPTY;
        true
    }

    fn destroy_range_at(&mut self, local: LocalCoord, range: Interval) -> bool {
        let (w, h) = self.texture.dimensions();
        if local.x < 0 || local.x as u32 >= w || h == 0 {
            return false;
        }
        // Clip in i64: anchor row plus a bound can leave the i32 range
        let top = (i64::from(local.y) + i64::from(range.min())).max(0);
        let bottom = (i64::from(local.y) + i64::from(range.max())).min(i64::from(h) - 1);
        if top > bottom {
            return false;
        }

        let x = local.x as u32;
        let mut changed = false;
        for y in top as u32..=bottom as u32 {
            let pixel = self.texture.get_pixel_mut(x, y);
            if is_filled(pixel) {
                *pixel = EMPTY;
                changed = true;
            }
        }
        changed
    }

    fn make_outline(&mut self, local: LocalCoord, color: Color) {
        if let Some((x, y)) = self.pixel_index(local) {
            self.texture.put_pixel(x, y, Rgba(color.to_array()));
        }
    }

    fn filled_at(&self, local: LocalCoord) -> bool {
        self.pixel_index(local)
            .is_some_and(|(x, y)| is_filled(self.texture.get_pixel(x, y)))
    }

    fn is_update_pending(&self) -> bool {
        self.update_pending
    }

    fn request_update(&mut self) {
        self.update_pending = true;
    }

    fn clear_update_pending(&mut self) {
        self.update_pending = false;
    }
}

impl TexturedChunk for PixelChunk {
    fn texture(&self) -> &RgbaImage {
        &self.texture
    }

    fn paint(&mut self, rect: LocalRect, color: Color) {
        let (w, h) = self.texture.dimensions();
        let Some((x0, y0, x1, y1)) = rect.clip(w, h) else {
            return;
        };
        let px = Rgba(color.to_array());
        for y in y0..y1 {
            for x in x0..x1 {
                self.texture.put_pixel(x, y, px);
            }
        }
    }
}
