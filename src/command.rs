//! ST7789 command definitions
//!
//! This module defines the command bytes used to control the ST7789 LCD
//! controller. Commands are sent over SPI with the DC pin low for commands
//! and high for data.
//!
//! ## Command Structure
//!
//! All commands follow the pattern:
//! 1. Assert CS (Chip Select)
//! 2. Set DC low (command mode)
//! 3. Send command byte
//! 4. Set DC high (data mode)
//! 5. Send data bytes (if any)
//! 6. Deassert CS
//!
//! ## Example
//!
//! ```rust,no_run
//! use st7789_watch::{command, DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::SpiBus;
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiBus for MockSpi {
//! #     fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn write(&mut self, _words: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn transfer(&mut self, _read: &mut [u8], _write: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # let mut interface = Interface::new(MockSpi, MockPin, MockPin, MockPin);
//! // Declare a column range, then stream pixel data
//! let _ = interface.begin_transaction();
//! let _ = interface.send_command(command::CASET);
//! let _ = interface.send_data(&[0x00, 0, 0x00, 239]);
//! let _ = interface.end_transaction();
//! ```

// Sleep and display state commands

/// Sleep in command (0x10)
///
/// Enters minimum power consumption mode. Frame memory is retained.
pub const SLPIN: u8 = 0x10;

/// Sleep out command (0x11)
///
/// Leaves sleep mode. The panel requires up to 120ms before the next
/// command after sleep-out during initialization.
pub const SLPOUT: u8 = 0x11;

/// Display inversion on command (0x21)
///
/// Inverts the panel colors. The wearable panels this driver targets are
/// wired so that inversion-on produces correct colors.
pub const INVON: u8 = 0x21;

/// Display off command (0x28)
///
/// Blanks the panel output. Frame memory is unaffected.
pub const DISPOFF: u8 = 0x28;

/// Display on command (0x29)
///
/// Enables panel output from frame memory.
pub const DISPON: u8 = 0x29;

// Addressing commands

/// Column address set command (0x2A)
///
/// Declares the column range of the addressing window.
/// Requires 4 bytes: [start_MSB, start_LSB, end_MSB, end_LSB]
pub const CASET: u8 = 0x2A;

/// Row address set command (0x2B)
///
/// Declares the row range of the addressing window.
/// Requires 4 bytes: [start_MSB, start_LSB, end_MSB, end_LSB]
pub const RASET: u8 = 0x2B;

/// Memory write command (0x2C)
///
/// Starts a pixel stream into the declared addressing window. The
/// controller expects `w * h` 16-bit pixels, high byte first.
pub const RAMWR: u8 = 0x2C;

// Panel configuration commands

/// Memory data access control command (0x36)
///
/// Sets scan direction and RGB/BGR color order.
/// Requires 1 byte.
pub const MADCTL: u8 = 0x36;

/// Interface pixel format command (0x3A)
///
/// Selects the color depth. 0x05 = 16-bit RGB565.
/// Requires 1 byte.
pub const COLMOD: u8 = 0x3A;

/// Porch setting command (0xB2)
///
/// Configures front/back porch in normal, idle and partial modes.
/// Requires 5 bytes.
pub const PORCTRL: u8 = 0xB2;

/// Gate control command (0xB7)
///
/// Sets VGH and VGL gate voltages.
/// Requires 1 byte.
pub const GCTRL: u8 = 0xB7;

/// VCOM setting command (0xBB)
///
/// Sets the common electrode voltage.
/// Requires 1 byte.
pub const VCOMS: u8 = 0xBB;

/// LCM control command (0xC0)
///
/// Panel-specific drive configuration.
/// Requires 1 byte.
pub const LCMCTRL: u8 = 0xC0;

/// VDV and VRH command enable (0xC2)
///
/// Selects register (rather than NVM) as the VDV/VRH source.
/// Requires 1 byte.
pub const VDVVRHEN: u8 = 0xC2;

/// VRH set command (0xC3)
///
/// Sets the VRH voltage level.
/// Requires 1 byte.
pub const VRHS: u8 = 0xC3;

/// VDV set command (0xC4)
///
/// Sets the VDV voltage level.
/// Requires 1 byte.
pub const VDVS: u8 = 0xC4;

/// Frame rate control command (0xC6)
///
/// Sets the frame rate in normal mode. 0x0F = 60Hz.
/// Requires 1 byte.
pub const FRCTRL2: u8 = 0xC6;

/// Power control 1 command (0xD0)
///
/// Sets AVDD, AVCL and VDS levels.
/// Requires 2 bytes.
pub const PWCTRL1: u8 = 0xD0;

/// Positive voltage gamma control command (0xE0)
///
/// Gamma correction curve for positive polarity.
/// Requires 14 bytes.
pub const PVGAMCTRL: u8 = 0xE0;

/// Negative voltage gamma control command (0xE1)
///
/// Gamma correction curve for negative polarity.
/// Requires 14 bytes.
pub const NVGAMCTRL: u8 = 0xE1;
