//! Text rendering on top of the rectangle-fill primitive
//!
//! Characters are rasterized from the built-in 5x8 [`font`](crate::font)
//! as a grid of scaled cells: each set bit in the glyph becomes a
//! `scale x scale` foreground rectangle, each clear bit a background
//! rectangle. Passing the same color for foreground and background selects
//! transparent mode, where background cells (and the inter-character
//! spacing column) are left untouched.
//!
//! Input bytes pass through the session's [`CharDecoder`](crate::decoder::CharDecoder),
//! so accented characters arrive as multi-byte sequences split across
//! successive [`draw_char`](crate::Display::draw_char) calls. Bytes the
//! decoder rejects are dropped without drawing or error.

use log::trace;

use crate::color::Rgb565;
use crate::decoder::DecodeStep;
use crate::display::Display;
use crate::error::{Error, PANEL_WIDTH};
use crate::font;
use crate::interface::DisplayInterface;

/// Cursor position at which a line wraps, in pixels
///
/// One glyph cell short of the panel's right edge.
const WRAP_MARGIN: i32 = PANEL_WIDTH as i32 - font::GLYPH_ADVANCE as i32;

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Feed one text byte and draw the resulting glyph, if any
    ///
    /// Returns `Ok(true)` when a glyph was rasterized at `(x, y)`, and
    /// `Ok(false)` when the byte was consumed without drawing: either it
    /// started a multi-byte sequence (the glyph appears on the completing
    /// call) or it was unrenderable and dropped.
    ///
    /// `scale` is the integer pixel replication factor; a scale of zero
    /// draws nothing. Cells that fall outside the panel are clipped.
    pub fn draw_char(
        &mut self,
        x: u16,
        y: u16,
        byte: u8,
        fg: Rgb565,
        bg: Rgb565,
        scale: u16,
    ) -> Result<bool, Error<I>> {
        let slot = match self.decoder_mut().advance(byte) {
            DecodeStep::Glyph(slot) => slot,
            DecodeStep::Pending => return Ok(false),
            DecodeStep::Rejected => {
                trace!("text: dropped unrenderable byte {byte:#04X}");
                return Ok(false);
            }
        };

        let transparent = bg == fg;
        let columns = font::glyph(slot);
        for (col, &bits) in columns.iter().enumerate() {
            let mut line = bits;
            for row in 0..font::GLYPH_HEIGHT {
                let cell_x = u32::from(x) + col as u32 * u32::from(scale);
                let cell_y = u32::from(y) + row as u32 * u32::from(scale);
                if line & 0x01 != 0 {
                    self.fill_cell(cell_x, cell_y, scale, scale, fg)?;
                } else if !transparent {
                    self.fill_cell(cell_x, cell_y, scale, scale, bg)?;
                }
                line >>= 1;
            }
        }

        // Spacing column between characters
        if !transparent {
            let spacing_x = u32::from(x) + font::GLYPH_WIDTH as u32 * u32::from(scale);
            let spacing_h = scale.saturating_mul(font::GLYPH_HEIGHT as u16);
            self.fill_cell(spacing_x, u32::from(y), scale, spacing_h, bg)?;
        }

        Ok(true)
    }

    /// Draw a line of text with automatic wrapping
    ///
    /// Bytes stream through the decoder one at a time; the cursor advances
    /// by one glyph cell per drawn character only, so multi-byte sequences
    /// and dropped bytes occupy no space. When the cursor reaches the
    /// wrap margin the line continues at column zero, one glyph row lower.
    pub fn print_line(
        &mut self,
        x: u16,
        y: u16,
        text: &[u8],
        fg: Rgb565,
        bg: Rgb565,
        scale: u16,
    ) -> Result<(), Error<I>> {
        let advance = i32::from(scale) * font::GLYPH_ADVANCE as i32;
        let mut origin = i32::from(x);
        let mut line_y = y;
        let mut drawn: i32 = 0;

        for &byte in text {
            let mut cursor = origin + drawn * advance;
            if cursor >= WRAP_MARGIN {
                origin = -(drawn * advance);
                line_y = line_y.saturating_add(scale.saturating_mul(font::GLYPH_HEIGHT as u16));
                cursor = origin + drawn * advance;
            }
            let cell_x = cursor.max(0) as u16;
            if self.draw_char(cell_x, line_y, byte, fg, bg, scale)? {
                drawn += 1;
            }
        }
        Ok(())
    }

    /// Fill one glyph cell, clipping at the panel edges
    ///
    /// Cells beyond the configured dimensions are skipped silently; a
    /// glyph drawn at the edge simply loses its off-panel columns.
    fn fill_cell(&mut self, x: u32, y: u32, w: u16, h: u16, color: Rgb565) -> Result<(), Error<I>> {
        if w == 0 || h == 0 {
            return Ok(());
        }
        let dims = *self.dimensions();
        if x + u32::from(w) > u32::from(dims.width) || y + u32::from(h) > u32::from(dims.height) {
            return Ok(());
        }
        self.fill_rect(x as u16, y as u16, w, h, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{CASET, RASET};
    use crate::display::tests::{test_display, MockInterface};
    use alloc::vec::Vec;

    /// Origins of every declared window, in declaration order
    fn rect_origins(interface: &MockInterface) -> Vec<(u8, u8)> {
        let columns = interface.data_for(CASET);
        let rows = interface.data_for(RASET);
        columns
            .iter()
            .zip(rows.iter())
            .map(|(c, r)| (c[1], r[1]))
            .collect()
    }

    fn rect_count(interface: &MockInterface) -> usize {
        interface.data_for(CASET).len()
    }

    #[test]
    fn test_draw_char_opaque_covers_full_cell_grid() {
        let mut display = test_display();
        let drawn = display
            .draw_char(10, 10, b'A', Rgb565::WHITE, Rgb565::BLACK, 1)
            .unwrap();
        assert!(drawn);
        // 5 x 8 cells plus the spacing column
        assert_eq!(rect_count(&display.release()), 41);
    }

    #[test]
    fn test_draw_char_transparent_draws_set_bits_only() {
        let mut display = test_display();
        let drawn = display
            .draw_char(10, 10, b'A', Rgb565::WHITE, Rgb565::WHITE, 1)
            .unwrap();
        assert!(drawn);
        // 'A' has 18 set bits; no background cells, no spacing column
        assert_eq!(rect_count(&display.release()), 18);
    }

    #[test]
    fn test_draw_char_control_byte_draws_nothing() {
        let mut display = test_display();
        let drawn = display
            .draw_char(0, 0, 0x07, Rgb565::WHITE, Rgb565::BLACK, 1)
            .unwrap();
        assert!(!drawn);
        assert_eq!(rect_count(&display.release()), 0);
    }

    #[test]
    fn test_draw_char_multi_byte_sequence_resolves_on_continuation() {
        let mut display = test_display();
        let first = display
            .draw_char(0, 0, 0xC3, Rgb565::WHITE, Rgb565::WHITE, 1)
            .unwrap();
        assert!(!first);

        let second = display
            .draw_char(0, 0, 0xA4, Rgb565::WHITE, Rgb565::WHITE, 1)
            .unwrap();
        assert!(second);
        assert!(rect_count(&display.release()) > 0);
    }

    #[test]
    fn test_draw_char_scale_multiplies_cell_size() {
        let mut display = test_display();
        display
            .draw_char(0, 0, b'A', Rgb565::WHITE, Rgb565::WHITE, 3)
            .unwrap();
        // First set bit of 'A' is column 0, row 1: cell at (0, 3), 3x3
        let interface = display.release();
        let columns = interface.data_for(CASET);
        let rows = interface.data_for(RASET);
        assert_eq!(columns[0].as_slice(), &[0x00, 0, 0x00, 2]);
        assert_eq!(rows[0].as_slice(), &[0x00, 3, 0x00, 5]);
    }

    #[test]
    fn test_draw_char_clips_at_right_edge() {
        let mut display = test_display();
        let drawn = display
            .draw_char(236, 0, b'A', Rgb565::WHITE, Rgb565::BLACK, 1)
            .unwrap();
        assert!(drawn);
        // Columns at x = 240 and the spacing column are clipped away
        let interface = display.release();
        assert_eq!(rect_count(&interface), 32);
        for caset in interface.data_for(CASET) {
            assert!(caset[3] <= 239);
        }
    }

    #[test]
    fn test_print_line_wraps_at_margin() {
        let mut display = test_display();
        // Scale 4: advance 24px. Glyph 11 would start at 240 >= 234.
        display
            .print_line(0, 0, b"AAAAAAAAAAA", Rgb565::WHITE, Rgb565::BLACK, 4)
            .unwrap();
        let origins = rect_origins(&display.release());
        // 41 rects per opaque glyph; the 11th starts the second line
        assert_eq!(origins.len(), 11 * 41);
        assert_eq!(origins[10 * 41], (0, 32));
        // Glyph 10 still sits on the first line
        assert_eq!(origins[9 * 41], (216, 0));
    }

    #[test]
    fn test_print_line_rejected_bytes_do_not_advance_cursor() {
        let mut display = test_display();
        display
            .print_line(0, 0, b"A\x01B", Rgb565::WHITE, Rgb565::BLACK, 1)
            .unwrap();
        let origins = rect_origins(&display.release());
        assert_eq!(origins.len(), 2 * 41);
        assert_eq!(origins[0], (0, 0));
        assert_eq!(origins[41], (6, 0));
    }

    #[test]
    fn test_print_line_multi_byte_character_occupies_one_cell() {
        let mut display = test_display();
        display
            .print_line(0, 0, b"A\xC3\xA4B", Rgb565::WHITE, Rgb565::BLACK, 1)
            .unwrap();
        let origins = rect_origins(&display.release());
        assert_eq!(origins.len(), 3 * 41);
        assert_eq!(origins[0], (0, 0));
        assert_eq!(origins[41], (6, 0));
        assert_eq!(origins[2 * 41], (12, 0));
    }

    #[test]
    fn test_print_line_zero_scale_draws_nothing() {
        let mut display = test_display();
        display
            .print_line(0, 0, b"AB", Rgb565::WHITE, Rgb565::BLACK, 0)
            .unwrap();
        assert_eq!(rect_count(&display.release()), 0);
    }
}
