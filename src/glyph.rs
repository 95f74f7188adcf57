//! Icon glyph bitmaps
//!
//! Icons are stored column-major: `bitmap[0]` holds the column count,
//! followed by `vertical_byte_count` bytes per column. Within each byte
//! the least significant bit is the topmost pixel of its 8-row band.
//!
//! A glyph's nominal cell is usually larger than its ink. Buttons align
//! icons by their *tight* bounds, computed by [`Glyph::compute_bounds`],
//! so the visible pixels land on the anchor rather than the cell.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::surface::DrawSurface;

/// A bitmap-encoded icon with lazily computed tight bounds.
///
/// Tight bounds are only valid after [`compute_bounds`](Self::compute_bounds)
/// has run against the current bitmap; they are recomputed before every
/// draw that aligns by them.
#[derive(Debug, Clone)]
pub struct Glyph {
    bitmap: &'static [u8],
    cell_width: i32,
    cell_height: i32,
    /// Total bytes per glyph in the source font array.
    bytes_per_column: i32,
    /// Bytes needed to cover one column of `cell_height` rows.
    vertical_byte_count: i32,
    tight_width: i32,
    tight_height: i32,
    offset_x: i32,
    offset_y: i32,
    code_point: u32,
    name: &'static str,
}

impl Glyph {
    /// Binds a glyph to its raw bitmap. No decoding happens here; tight
    /// bounds start out zeroed.
    pub fn new(
        bitmap: &'static [u8],
        cell_width: i32,
        cell_height: i32,
        bytes_per_column: i32,
        vertical_byte_count: i32,
        code_point: u32,
        name: &'static str,
    ) -> Self {
        Self {
            bitmap,
            cell_width,
            cell_height,
            bytes_per_column,
            vertical_byte_count,
            tight_width: 0,
            tight_height: 0,
            offset_x: 0,
            offset_y: 0,
            code_point,
            name,
        }
    }

    /// Number of encoded columns, read from the bitmap header byte.
    fn columns(&self) -> usize {
        self.bitmap.first().map(|c| *c as usize).unwrap_or(0)
    }

    fn column_byte(&self, column: usize, band: usize) -> u8 {
        self.bitmap[1 + band + column * self.vertical_byte_count as usize]
    }

    /// Scans the bitmap and computes the tight ink bounds.
    ///
    /// `offset_x` counts the contiguous empty columns on the left,
    /// `offset_y` the topmost lit row across the whole glyph (0 when the
    /// glyph has no ink at all). The tight width/height trim both sides.
    pub fn compute_bounds(&mut self) {
        let mut column_empty;
        let mut ink_found = false;

        let mut offset_left: i32 = 0;
        let mut offset_top: i32 = -1;
        let mut bottom_row: i32 = 0;
        let mut right_col: i32 = 0;

        for i in 0..self.columns() {
            column_empty = true;
            for j in 0..self.vertical_byte_count as usize {
                let byte = self.column_byte(i, j);
                if byte == 0 {
                    continue;
                }
                column_empty = false;
                ink_found = true;
                right_col = i as i32;
                for m in 0..8 {
                    if (byte >> m) & 0x1 == 1 {
                        let row = (j as i32 * 8) + m;
                        if offset_top < 0 || offset_top > row {
                            offset_top = row;
                        }
                        if bottom_row < row {
                            bottom_row = row;
                        }
                    }
                }
            }
            if column_empty && !ink_found {
                offset_left += 1;
            }
        }

        if offset_top < 0 {
            offset_top = 0;
        }

        self.offset_x = offset_left;
        self.offset_y = offset_top;
        self.tight_width = self.cell_width - (offset_left + (self.cell_width - (right_col + 1)));
        self.tight_height = self.cell_height - (offset_top + (self.cell_height - (bottom_row + 1)));
    }

    /// Draws every lit pixel at `(x + column, y + row)`. No clipping is
    /// performed; callers pre-offset using the tight bounds.
    pub fn render<S: DrawSurface>(
        &self,
        surface: &mut S,
        x: i32,
        y: i32,
        color: Rgb565,
    ) -> Result<(), S::Error> {
        for i in 0..self.columns() {
            for j in 0..self.vertical_byte_count as usize {
                let byte = self.column_byte(i, j);
                if byte == 0 {
                    continue;
                }
                for m in 0..8 {
                    if (byte >> m) & 0x1 == 1 {
                        let point = Point::new(x + i as i32, y + m + (8 * j as i32));
                        surface.draw_pixel(point, color)?;
                    }
                }
            }
        }
        Ok(())
    }

    pub fn tight_width(&self) -> i32 {
        self.tight_width
    }

    pub fn tight_height(&self) -> i32 {
        self.tight_height
    }

    pub fn offset_x(&self) -> i32 {
        self.offset_x
    }

    pub fn offset_y(&self) -> i32 {
        self.offset_y
    }

    pub fn cell_width(&self) -> i32 {
        self.cell_width
    }

    pub fn cell_height(&self) -> i32 {
        self.cell_height
    }

    pub fn bytes_per_column(&self) -> i32 {
        self.bytes_per_column
    }

    pub fn code_point(&self) -> u32 {
        self.code_point
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{RecordingSurface, SurfaceOp};

    // 4 columns, 8-pixel cell, one byte per column:
    //   col 0: empty
    //   col 1: rows 2 and 3
    //   col 2: row 3
    //   col 3: empty
    const CROSS: [u8; 5] = [4, 0x00, 0x0C, 0x08, 0x00];

    fn cross_glyph() -> Glyph {
        Glyph::new(&CROSS, 4, 8, 5, 1, 0xF00D, "cross")
    }

    #[test]
    fn compute_bounds_trims_empty_edges() {
        let mut glyph = cross_glyph();
        glyph.compute_bounds();

        assert_eq!(glyph.offset_x(), 1);
        assert_eq!(glyph.offset_y(), 2);
        // columns 1..=2 lit -> width 2; rows 2..=3 lit -> height 2
        assert_eq!(glyph.tight_width(), 2);
        assert_eq!(glyph.tight_height(), 2);
    }

    #[test]
    fn compute_bounds_empty_glyph_defaults_offset_y() {
        const EMPTY: [u8; 4] = [3, 0x00, 0x00, 0x00];
        let mut glyph = Glyph::new(&EMPTY, 3, 8, 4, 1, 0, "empty");
        glyph.compute_bounds();

        assert_eq!(glyph.offset_y(), 0);
        assert_eq!(glyph.offset_x(), 3);
    }

    #[test]
    fn bounds_follow_rebind() {
        let mut glyph = cross_glyph();
        glyph.compute_bounds();
        assert_eq!(glyph.tight_width(), 2);

        const WIDE: [u8; 5] = [4, 0x01, 0x00, 0x00, 0x01];
        glyph = Glyph::new(&WIDE, 4, 8, 5, 1, 0, "wide");
        glyph.compute_bounds();
        assert_eq!(glyph.offset_x(), 0);
        assert_eq!(glyph.tight_width(), 4);
        assert_eq!(glyph.tight_height(), 1);
    }

    #[test]
    fn render_emits_one_pixel_per_set_bit() {
        let glyph = cross_glyph();
        let mut surface = RecordingSurface::new();
        glyph
            .render(&mut surface, 10, 20, crate::styling::WHITE)
            .unwrap();

        let pixels: alloc::vec::Vec<_> = surface
            .ops
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::Pixel { point, .. } => Some(*point),
                _ => None,
            })
            .collect();

        assert_eq!(
            pixels,
            [
                Point::new(11, 22),
                Point::new(11, 23),
                Point::new(12, 23),
            ]
        );
    }
}
