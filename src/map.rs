//! Placeholder world map drawn from a fixed layout table.

use crate::{error::Error, glyph};
use image::{ImageFormat, Rgb, RgbImage};
use imageproc::{
    drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_line_segment_mut},
    rect::Rect,
};
use std::path::Path;

pub const MAP_W: u32 = 512;
pub const MAP_H: u32 = 256;

/// Spacing of the longitude and latitude grid lines.
pub const MERIDIAN_STEP: u32 = MAP_W / 12;
pub const PARALLEL_STEP: u32 = MAP_H / 6;

pub const OCEAN: Rgb<u8> = Rgb([30, 60, 150]);
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

#[derive(Debug, Clone, Copy)]
pub struct Continent {
    pub name: &'static str,
    /// Inclusive `(x1, y1, x2, y2)`, may reach past the canvas.
    pub bbox: (u32, u32, u32, u32),
    pub color: Rgb<u8>,
}

impl Continent {
    pub fn rect(&self) -> Rect {
        let (x1, y1, x2, y2) = self.bbox;
        Rect::at(x1 as i32, y1 as i32).of_size(x2 - x1 + 1, y2 - y1 + 1)
    }
}

// North is up: y grows southwards.
pub static CONTINENTS: &[Continent; 7] = &[
    Continent {
        name: "Africa",
        bbox: (250, 100, 350, 180),
        color: Rgb([160, 120, 80]),
    },
    Continent {
        name: "Asia",
        bbox: (300, 50, 450, 150),
        color: Rgb([60, 160, 60]),
    },
    Continent {
        name: "Europe",
        bbox: (270, 50, 320, 100),
        color: Rgb([100, 180, 100]),
    },
    Continent {
        name: "North America",
        bbox: (50, 50, 200, 120),
        color: Rgb([180, 80, 80]),
    },
    Continent {
        name: "South America",
        bbox: (150, 130, 250, 200),
        color: Rgb([220, 120, 60]),
    },
    Continent {
        name: "Australia",
        bbox: (400, 170, 450, 210),
        color: Rgb([180, 80, 180]),
    },
    Continent {
        name: "Antarctica",
        bbox: (0, 220, MAP_W, MAP_H),
        color: Rgb([220, 220, 220]),
    },
];

pub static LABELS: &[(u32, u32, &str); 2] = &[
    (MAP_W / 2, 10, "NORTH"),
    (MAP_W / 2, MAP_H - 20, "SOUTH"),
];

/// Render the placeholder map into a fresh canvas.
pub fn draw_world_map() -> RgbImage {
    let mut canvas: RgbImage = RgbImage::from_pixel(MAP_W, MAP_H, OCEAN);

    for continent in CONTINENTS.iter() {
        let rect: Rect = continent.rect();
        draw_filled_rect_mut(&mut canvas, rect, continent.color);
        draw_hollow_rect_mut(&mut canvas, rect, WHITE);
    }

    // Offset 0 is the canvas border; leave it as ocean.
    for x in (MERIDIAN_STEP..MAP_W).step_by(MERIDIAN_STEP as usize) {
        draw_line_segment_mut(
            &mut canvas,
            (x as f32, 0.0),
            (x as f32, MAP_H as f32),
            WHITE,
        );
    }
    for y in (PARALLEL_STEP..MAP_H).step_by(PARALLEL_STEP as usize) {
        draw_line_segment_mut(
            &mut canvas,
            (0.0, y as f32),
            (MAP_W as f32, y as f32),
            WHITE,
        );
    }

    for (x, y, text) in LABELS.iter() {
        glyph::draw_text(&mut canvas, *x, *y, text, WHITE);
    }

    canvas
}

/// Draw the placeholder map and save it as a BMP at `output`, replacing any
/// existing file. Returns the written dimensions.
pub fn create_world_map(output: &Path) -> Result<(u32, u32), Error> {
    let canvas: RgbImage = draw_world_map();
    log::debug!("drawing {} continents", CONTINENTS.len());

    canvas
        .save_with_format(output, ImageFormat::Bmp)
        .map_err(|source| Error::Encode {
            path: output.to_path_buf(),
            source,
        })?;

    Ok(canvas.dimensions())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn continent(name: &str) -> &'static Continent {
        CONTINENTS.iter().find(|c| c.name == name).unwrap()
    }

    #[test]
    fn canvas_has_fixed_size_and_ocean_corner() {
        let map: RgbImage = draw_world_map();
        assert_eq!(map.dimensions(), (MAP_W, MAP_H));
        assert_eq!(*map.get_pixel(0, 0), OCEAN);
    }

    #[test]
    fn grid_steps() {
        assert_eq!(MERIDIAN_STEP, 42);
        assert_eq!(PARALLEL_STEP, 42);
    }

    #[test]
    fn rect_covers_inclusive_bbox() {
        let rect: Rect = continent("Australia").rect();
        assert_eq!((rect.left(), rect.top()), (400, 170));
        assert_eq!((rect.right(), rect.bottom()), (450, 210));
    }

    #[test]
    fn continents_are_filled_and_outlined() {
        let map: RgbImage = draw_world_map();

        assert_eq!(*map.get_pixel(275, 175), continent("Africa").color);
        assert_eq!(*map.get_pixel(430, 190), continent("Australia").color);
        assert_eq!(*map.get_pixel(5, 240), continent("Antarctica").color);

        // Outline on the top edge of Antarctica and left edge of Africa.
        assert_eq!(*map.get_pixel(5, 220), WHITE);
        assert_eq!(*map.get_pixel(250, 160), WHITE);
    }

    #[test]
    fn later_continents_overlap_earlier_ones() {
        let map: RgbImage = draw_world_map();
        // Inside both Africa and Asia; Asia comes later in the table.
        assert_eq!(*map.get_pixel(320, 110), continent("Asia").color);
    }

    #[test]
    fn grid_lines_are_white() {
        let map: RgbImage = draw_world_map();
        assert_eq!(*map.get_pixel(MERIDIAN_STEP, 30), WHITE);
        assert_eq!(*map.get_pixel(10, PARALLEL_STEP), WHITE);
        assert_eq!(*map.get_pixel(1, 30), OCEAN);
        assert_eq!(*map.get_pixel(10, 1), OCEAN);
    }

    #[test]
    fn labels_are_drawn() {
        let map: RgbImage = draw_world_map();
        let (x, y, _) = LABELS[0];

        // The "N" cell sits on open ocean.
        for (row, bits) in glyph::glyph('N').iter().enumerate() {
            for col in 0..glyph::GLYPH_W {
                let want: Rgb<u8> = match (bits >> col) & 0x1 {
                    0 => OCEAN,
                    _ => WHITE,
                };
                assert_eq!(*map.get_pixel(x + col, y + row as u32), want);
            }
        }
    }

    #[test]
    fn drawing_is_deterministic() {
        assert_eq!(draw_world_map(), draw_world_map());
    }
}
