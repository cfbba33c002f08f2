//! RGB565 color type
//!
//! This module defines the [`Rgb565`] type used for all pixel data. The
//! ST7789 is configured for 16-bit color (COLMOD = 0x05): 5 bits red,
//! 6 bits green, 5 bits blue, transmitted high byte first.
//!
//! ## Example
//!
//! ```
//! use st7789_watch::Rgb565;
//!
//! // Raw panel values
//! assert_eq!(Rgb565::WHITE.raw(), 0xFFFF);
//! assert_eq!(Rgb565::RED.raw(), 0xF800);
//!
//! // Packing from 8-bit channels
//! let teal = Rgb565::from_rgb(0x00, 0x80, 0x80);
//!
//! // Big-endian wire format
//! assert_eq!(Rgb565::RED.to_be_bytes(), [0xF8, 0x00]);
//! ```

/// A 16-bit RGB565 color
///
/// Stored as the raw panel value; sent over the bus big-endian.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb565(u16);

impl Rgb565 {
    /// Black (0x0000)
    pub const BLACK: Self = Self(0x0000);
    /// White (0xFFFF)
    pub const WHITE: Self = Self(0xFFFF);
    /// Red (0xF800)
    pub const RED: Self = Self(0xF800);
    /// Green (0x07E0)
    pub const GREEN: Self = Self(0x07E0);
    /// Blue (0x001F)
    pub const BLUE: Self = Self(0x001F);
    /// Yellow (0xFFE0)
    pub const YELLOW: Self = Self(0xFFE0);
    /// Orange (0xFC00)
    pub const ORANGE: Self = Self(0xFC00);

    /// Create a color from a raw RGB565 value
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Pack 8-bit channels into RGB565, truncating to 5-6-5 bits
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3))
    }

    /// Get the raw 16-bit panel value
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Get the big-endian byte pair as sent on the bus (high byte first)
    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

impl From<u16> for Rgb565 {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgb_saturated_channels() {
        assert_eq!(Rgb565::from_rgb(0xFF, 0xFF, 0xFF), Rgb565::WHITE);
        assert_eq!(Rgb565::from_rgb(0xFF, 0x00, 0x00), Rgb565::RED);
        assert_eq!(Rgb565::from_rgb(0x00, 0xFF, 0x00), Rgb565::GREEN);
        assert_eq!(Rgb565::from_rgb(0x00, 0x00, 0xFF), Rgb565::BLUE);
    }

    #[test]
    fn test_wire_order_is_high_byte_first() {
        assert_eq!(Rgb565::new(0x12EF).to_be_bytes(), [0x12, 0xEF]);
        assert_eq!(Rgb565::GREEN.to_be_bytes(), [0x07, 0xE0]);
    }

    #[test]
    fn test_channel_truncation() {
        // Low bits of each channel are discarded, not rounded
        assert_eq!(Rgb565::from_rgb(0x07, 0x03, 0x07), Rgb565::BLACK);
    }
}
