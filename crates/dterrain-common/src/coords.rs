//! Coordinate types for global pixel, chunk, and chunk-local positions.
//!
//! All coordinates are signed. The y axis grows downwards so that it lines up
//! with image rows.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Global pixel coordinate on the destructible surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelCoord {
    /// X coordinate in pixels
    pub x: i32,
    /// Y coordinate in pixels
    pub y: i32,
}

impl PixelCoord {
    /// Creates a new pixel coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this coordinate shifted by the given offsets, saturating at
    /// the edges of the coordinate range.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Shifted coordinate, or `None` if either axis leaves the `i32` range.
    #[must_use]
    pub fn checked_offset(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }
}

impl From<(i32, i32)> for PixelCoord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<IVec2> for PixelCoord {
    fn from(v: IVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<PixelCoord> for IVec2 {
    fn from(c: PixelCoord) -> Self {
        IVec2::new(c.x, c.y)
    }
}

/// Chunk coordinate (identifies a chunk in the grid).
///
/// Values produced by coordinate resolution may lie outside the grid; use the
/// grid's index lookup to check membership.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChunkCoord {
    /// Column of the chunk
    pub x: i32,
    /// Row of the chunk
    pub y: i32,
}

impl ChunkCoord {
    /// Creates a new chunk coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the chunk `k` steps further along the vertical grid axis.
    #[must_use]
    pub const fn step_down(self, k: i32) -> Self {
        Self {
            x: self.x,
            y: self.y.saturating_add(k),
        }
    }
}

/// Local coordinate within a chunk.
///
/// Signed because a row can be re-expressed relative to a neighbouring chunk,
/// which puts it above or below that chunk's own pixel range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocalCoord {
    /// X coordinate within chunk
    pub x: i32,
    /// Y coordinate within chunk
    pub y: i32,
}

impl LocalCoord {
    /// Creates a new local coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Checks whether the coordinate lies inside a chunk of the given size.
    #[must_use]
    pub const fn is_inside(self, width: u32, height: u32) -> bool {
        self.x >= 0 && self.y >= 0 && (self.x as u32) < width && (self.y as u32) < height
    }
}

/// Axis-aligned rectangle in chunk-local pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocalRect {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl LocalRect {
    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Clips the rectangle against `[0, width) x [0, height)`.
    ///
    /// Returns `(x0, y0, x1, y1)` with exclusive upper bounds, or `None` when
    /// nothing is left.
    #[must_use]
    pub fn clip(&self, width: u32, height: u32) -> Option<(u32, u32, u32, u32)> {
        let x0 = i64::from(self.x).max(0);
        let y0 = i64::from(self.y).max(0);
        let x1 = (i64::from(self.x) + i64::from(self.width)).min(i64::from(width));
        let y1 = (i64::from(self.y) + i64::from(self.height)).min(i64::from(height));
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_coord_ivec_conversion() {
        let c = PixelCoord::from(IVec2::new(-3, 7));
        assert_eq!(c, PixelCoord::new(-3, 7));
        assert_eq!(IVec2::from(c), IVec2::new(-3, 7));
    }

    #[test]
    fn test_offset_at_range_edges() {
        let edge = PixelCoord::new(i32::MAX - 1, i32::MIN + 1);
        assert_eq!(edge.offset(5, -5), PixelCoord::new(i32::MAX, i32::MIN));
        assert_eq!(edge.checked_offset(1, -1), Some(PixelCoord::new(i32::MAX, i32::MIN)));
        assert_eq!(edge.checked_offset(2, 0), None);
        assert_eq!(edge.checked_offset(0, -2), None);
        assert_eq!(ChunkCoord::new(0, i32::MAX).step_down(3), ChunkCoord::new(0, i32::MAX));
    }

    #[test]
    fn test_local_inside() {
        assert!(LocalCoord::new(0, 0).is_inside(16, 16));
        assert!(LocalCoord::new(15, 15).is_inside(16, 16));
        assert!(!LocalCoord::new(16, 0).is_inside(16, 16));
        assert!(!LocalCoord::new(0, -1).is_inside(16, 16));
    }

    #[test]
    fn test_rect_clip() {
        let r = LocalRect::new(-2, 3, 6, 20);
        assert_eq!(r.clip(16, 16), Some((0, 3, 4, 16)));
        assert_eq!(LocalRect::new(20, 0, 4, 4).clip(16, 16), None);
        assert_eq!(LocalRect::new(0, 0, 0, 4).clip(16, 16), None);
    }
}
