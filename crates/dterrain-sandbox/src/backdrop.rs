//! Generated terrain image used when no source image is configured.

use image::{Rgba, RgbaImage};

const GRASS: Rgba<u8> = Rgba([86, 140, 62, 255]);
const DIRT: Rgba<u8> = Rgba([122, 84, 52, 255]);
const STONE: Rgba<u8> = Rgba([104, 100, 96, 255]);
const SKY: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Rolling hills: empty sky above a wavy surface, then grass, dirt, stone.
pub fn hills(width: u32, height: u32) -> RgbaImage {
    let h = f64::from(height);
    RgbaImage::from_fn(width, height, |x, y| {
        let t = f64::from(x);
        let surface = h * 0.35 + (t / 37.0).sin() * h * 0.06 + (t / 11.0).sin() * h * 0.015;
        let depth = f64::from(y) - surface;
        match depth {
            d if d < 0.0 => SKY,
            d if d < 4.0 => GRASS,
            d if d < h * 0.25 => DIRT,
            _ => STONE,
        }
    })
}
