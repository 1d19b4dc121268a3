//! Map labels drawn with the 8x8 bitmap font from `font8x8`.
//!
//! Each glyph is eight rows; bit `x` of a row is the pixel in column `x`,
//! counted from the left.

use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::{Rgb, RgbImage};

pub const GLYPH_W: u32 = 8;
pub const GLYPH_H: u32 = 8;

/// Rows of the glyph for `chr`; characters outside the basic Latin block
/// come back blank.
pub fn glyph(chr: char) -> [u8; GLYPH_H as usize] {
    BASIC_FONTS.get(chr).unwrap_or([0x00; GLYPH_H as usize])
}

/// Draw `text` with its top-left corner at `(x, y)`; pixels falling outside
/// the canvas are dropped.
pub fn draw_text(
    canvas: &mut RgbImage,
    x: u32,
    y: u32,
    text: &str,
    color: Rgb<u8>,
) {
    let (width, height): (u32, u32) = canvas.dimensions();

    for (idx, chr) in text.chars().enumerate() {
        let left: u32 = x + idx as u32 * GLYPH_W;
        for (row, bits) in glyph(chr).iter().enumerate() {
            let py: u32 = y + row as u32;
            for col in 0..GLYPH_W {
                let px: u32 = left + col;
                if (bits >> col) & 0x1 != 0 && px < width && py < height {
                    canvas.put_pixel(px, py, color);
                }
            }
        }
    }
}
