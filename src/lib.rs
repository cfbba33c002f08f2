//! ST7789 Display Driver for Wearables
//!
//! A driver for the ST7789 LCD controller as wired in 240x240 smartwatch
//! panels, covering the full output pipeline: controller bring-up,
//! rectangle fills, image blits, and scaled bitmap text with multi-byte
//! character decoding.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - Chunked pixel streaming through a fixed 15,000-byte transmit buffer
//! - Built-in 5x8 font with accented Latin and Central European glyphs
//! - Line rendering with automatic wrapping
//! - Configurable init register values
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::SpiBus;
//! use st7789_watch::{Builder, Dimensions, Display, Interface, Rgb565};
//!
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiBus for MockSpi {
//! #     fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn write(&mut self, _words: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn transfer(&mut self, _read: &mut [u8], _write: &[u8]) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! #     fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let spi = MockSpi;
//! # let cs = MockPin;
//! # let dc = MockPin;
//! # let rst = MockPin;
//! # let mut delay = MockDelay;
//! let interface = Interface::new(spi, cs, dc, rst);
//! let dims = match Dimensions::new(240, 240) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let config = match Builder::new().dimensions(dims).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = Display::new(interface, config);
//! let _ = display.initialize(&mut delay);
//! let _ = display.fill_rect(20, 20, 200, 40, Rgb565::BLUE);
//! let _ = display.print_line(24, 32, b"12:45", Rgb565::WHITE, Rgb565::BLUE, 3);
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// RGB565 color type
pub mod color;
/// ST7789 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Multi-byte character decoding
pub mod decoder;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Built-in 5x8 bitmap font
pub mod font;
/// Hardware interface abstraction
pub mod interface;
/// Text rendering
pub mod text;

pub use color::Rgb565;
pub use config::{Builder, Config, Dimensions};
pub use decoder::{CharDecoder, DecodeStep};
pub use display::{Display, TX_BUFFER_LEN, Window};
pub use error::{BuilderError, Error, PANEL_HEIGHT, PANEL_WIDTH};
pub use interface::InterfaceError;
pub use interface::{DisplayInterface, Interface};
