//! Circular crater shapes and outline rims.

use dterrain_common::{Color, Interval, PixelCoord, Shape};
use dterrain_world::{Chunk, World};

/// Builds a filled disc of `radius` as a shape anchored at its top-left
/// corner, returning the shape and the anchor offset from the centre.
///
/// Anchoring at the top keeps every column interval non-negative, so the
/// world only ever has to walk downwards through chunks.
pub fn circle(radius: u32, outline: Color) -> (Shape, PixelCoord) {
    let r = radius as i32;
    let columns = (-r..=r)
        .map(|dx| {
            let half = f64::from(r * r - dx * dx).sqrt() as i32;
            Interval::new(r - half, r + half)
        })
        .collect();
    (Shape::new(columns, 2 * r, outline), PixelCoord::new(-r, -r))
}

/// Destroys a disc centred on `centre` and optionally rims it.
///
/// Returns the number of outline pixels stamped.
pub fn detonate<C: Chunk>(
    world: &mut World<C>,
    centre: PixelCoord,
    radius: u32,
    outline: Option<Color>,
) -> usize {
    let (shape, offset) = circle(radius, outline.unwrap_or(Color::BLACK));
    let anchor = centre.offset(offset.x, offset.y);
    world.destroy_shape(anchor, &shape);

    let Some(color) = outline else {
        return 0;
    };
    let mut stamped = 0;
    for (k, range) in shape.columns().iter().enumerate() {
        let x = anchor.x + k as i32;
        for y in [anchor.y + range.min() - 1, anchor.y + range.max() + 1] {
            if world.filled_at((x, y)) {
                world.make_outline((x, y), color);
                stamped += 1;
            }
        }
    }
    stamped
}

#[cfg(test)]
mod tests {
    use super::*;
    use dterrain_world::{PixelChunk, WorldConfig};
    use image::{Rgba, RgbaImage};

    fn solid_world() -> World<PixelChunk> {
        let image = RgbaImage::from_pixel(128, 128, Rgba([100, 80, 60, 255]));
        World::from_image(&image, &WorldConfig::default()).expect("valid world")
    }

    #[test]
    fn test_circle_shape() {
        let (shape, offset) = circle(3, Color::BLACK);
        assert_eq!(shape.width(), 7);
        assert_eq!(shape.height(), 6);
        assert_eq!(offset, PixelCoord::new(-3, -3));
        assert_eq!(shape.column(0), Some(Interval::new(3, 3)));
        assert_eq!(shape.column(3), Some(Interval::new(0, 6)));
        assert!(shape.columns().iter().all(|c| c.min() >= 0));
    }

    #[test]
    fn test_detonate_clears_disc() {
        let mut world = solid_world();
        detonate(&mut world, PixelCoord::new(30, 30), 10, None);
        assert!(!world.filled_at((30, 30)));
        assert!(!world.filled_at((30, 21)));
        assert!(!world.filled_at((39, 30)));
        assert!(world.filled_at((30, 19)));
        assert!(world.filled_at((41, 30)));
    }

    #[test]
    fn test_detonate_stamps_rim() {
        let mut world = solid_world();
        let rim = Color::rgb(20, 10, 5);
        let stamped = detonate(&mut world, PixelCoord::new(30, 30), 6, Some(rim));
        assert!(stamped > 0);
        // Directly above the crater's top row
        let grid = *world.grid();
        let r = grid.resolve(PixelCoord::new(30, 23));
        let index = grid.index_of(r.chunk).expect("inside grid");
        assert_eq!(
            world.chunk(index).and_then(|c| c.color_at(r.local)),
            Some(rim)
        );
    }
}
