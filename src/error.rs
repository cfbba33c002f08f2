//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//!
//! Text decoding never produces an error: unsupported or malformed
//! multi-byte input is dropped silently (the panel has no error channel and
//! a partially rendered string is preferable to none). See
//! [`decoder`](crate::decoder).
//!
//! ## Example
//!
//! ```
//! use st7789_watch::{Builder, Dimensions, BuilderError};
//!
//! // Missing dimensions
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingDimensions)));
//!
//! // Invalid dimensions
//! let result = Dimensions::new(300, 240); // Wider than the panel
//! assert!(result.is_err());
//! ```

use crate::interface::DisplayInterface;

/// Panel width in pixels
///
/// The square wearable panels this driver targets are 240 columns wide.
pub const PANEL_WIDTH: u16 = 240;

/// Panel height in pixels
///
/// Row addresses are masked to 8 bits on the bus, reflecting the panel's
/// addressing limit.
pub const PANEL_HEIGHT: u16 = 240;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying hardware error.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (SPI/GPIO)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`] implementation.
    Interface(I::Error),
    /// Invalid addressing window parameters
    ///
    /// The window must have non-zero width and height, and must fit within
    /// panel bounds.
    InvalidWindow {
        /// X coordinate of the window origin
        x: u16,
        /// Y coordinate of the window origin
        y: u16,
        /// Width in pixels
        w: u16,
        /// Height in pixels
        h: u16,
    },
    /// Pixel buffer is too small for the declared window
    ///
    /// A blit source must hold at least `w * h` pixels.
    BufferTooSmall {
        /// Required buffer size in pixels
        required: usize,
        /// Provided buffer size in pixels
        provided: usize,
    },
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::InvalidWindow { x, y, w, h } => {
                write!(f, "Invalid window: x={x}, y={y}, w={w}, h={h}")
            }
            Self::BufferTooSmall { required, provided } => {
                write!(
                    f,
                    "Buffer too small: required {required} pixels, provided {provided}"
                )
            }
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is created.
#[derive(Debug)]
pub enum BuilderError {
    /// Dimensions were not specified
    ///
    /// [`Builder::dimensions()`](crate::config::Builder::dimensions) must be called before building.
    MissingDimensions,
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Width in pixels requested
        width: u16,
        /// Height in pixels requested
        height: u16,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDimensions => write!(f, "Dimensions must be specified"),
            Self::InvalidDimensions { width, height } => write!(
                f,
                "Invalid dimensions {width}x{height} (max {PANEL_WIDTH}x{PANEL_HEIGHT})"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}
