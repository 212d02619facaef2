//! Per-chunk pixel capability consumed by [`World`](crate::World).
//!
//! The world never touches pixels itself. It resolves which chunk owns a
//! request, restates it in local coordinates, and forwards it here.

use dterrain_common::{Color, Interval, LocalCoord, LocalRect};
use image::RgbaImage;

/// Pixel store of a single chunk, addressed in chunk-local coordinates.
///
/// Implementations must tolerate local coordinates outside their own bounds:
/// range destruction forwards rows re-expressed relative to neighbouring
/// chunks and relies on the chunk to clip them.
pub trait Chunk {
    /// Pixel dimensions `(width, height)`.
    fn size(&self) -> (u32, u32);

    /// Destroys one pixel. Returns whether a filled pixel was removed.
    fn destroy_pixel_at(&mut self, local: LocalCoord) -> bool;

    /// Destroys rows `local.y + range.min() ..= local.y + range.max()` of
    /// column `local.x`. Returns whether anything changed.
    fn destroy_range_at(&mut self, local: LocalCoord, range: Interval) -> bool;

    /// Sets one pixel to the outline color.
    fn make_outline(&mut self, local: LocalCoord, color: Color);

    /// Occupancy predicate. Out-of-bounds pixels are empty.
    fn filled_at(&self, local: LocalCoord) -> bool;

    /// Whether a visual refresh has been requested.
    fn is_update_pending(&self) -> bool;

    /// Requests a visual refresh on the next update.
    fn request_update(&mut self);

    /// Acknowledges a refresh. Called by the rendering side only.
    fn clear_update_pending(&mut self);
}

/// A chunk backed by a texture that can be read back and painted directly.
pub trait TexturedChunk: Chunk {
    /// Current pixel contents.
    fn texture(&self) -> &RgbaImage;

    /// Fills a rectangle (clipped to the chunk) with a color.
    fn paint(&mut self, rect: LocalRect, color: Color);
}
