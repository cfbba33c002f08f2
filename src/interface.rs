//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for communicating with the ST7789 controller over SPI.
//!
//! ## Hardware Requirements
//!
//! The ST7789, as wired in the wearables this driver targets, requires:
//! - SPI bus (MOSI + SCK)
//! - 3 GPIO pins:
//!   - **CS**: Chip select (output, active low)
//!   - **DC**: Data/Command select (output)
//!   - **RST**: Reset (output, active low)
//!
//! There is no busy or handshake line: the bus is fire-and-forget, and the
//! only failures the transport can surface are SPI or GPIO errors from the
//! underlying HAL.
//!
//! ## Transactions
//!
//! Chip select is owned by the transport, not per-write: a caller brackets a
//! whole logical operation (addressing window plus the entire pixel stream)
//! in [`begin_transaction`](DisplayInterface::begin_transaction) /
//! [`end_transaction`](DisplayInterface::end_transaction). Nesting is not
//! supported; every begin must be paired with exactly one end.
//!
//! ## Example
//!
//! ```rust,no_run
//! use st7789_watch::{DisplayInterface, Interface};
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
//! // Create interface with SPI bus and GPIO pins
//! let mut interface = Interface::new(MockSpi, MockPin, MockPin, MockPin);
//!
//! // Send a command with parameters inside one asserted-CS period
//! let _ = interface.begin_transaction();
//! let _ = interface.send_command(0x3A); // Pixel format
//! let _ = interface.send_data(&[0x05]); // 16-bit RGB565
//! let _ = interface.end_transaction();
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Trait for hardware interface to the ST7789 controller
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// SPI + GPIO implementation that satisfies embedded-hal traits.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. If you need
/// custom behavior (e.g., a hardware-managed chip select, different pin
/// polarities), implement this trait on your own type.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Assert chip select and open a bus transaction
    ///
    /// The CS line stays asserted until [`end_transaction`](Self::end_transaction).
    /// Nested transactions are not supported.
    ///
    /// # Errors
    ///
    /// Returns an error if GPIO fails.
    fn begin_transaction(&mut self) -> InterfaceResult<(), Self::Error>;

    /// Flush the bus and deassert chip select
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    fn end_transaction(&mut self) -> InterfaceResult<(), Self::Error>;

    /// Send a command byte to the controller
    ///
    /// The implementation must:
    /// 1. Set DC pin low (command mode)
    /// 2. Send the command byte over SPI
    /// 3. Set DC pin high again (data mode)
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error>;

    /// Send data bytes to the controller
    ///
    /// The implementation must transmit exactly `data.len()` bytes in order
    /// with the DC pin high (data mode).
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Perform hardware reset
    ///
    /// The implementation must pulse the RST pin with the panel's minimum
    /// hold times so the controller is ready for the init register sequence.
    ///
    /// # Arguments
    ///
    /// * `delay` - Delay implementation for timing
    fn reset<D: DelayNs>(&mut self, delay: &mut D);
}

/// Errors that can occur at the interface level
///
/// Generic over SPI and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// Hardware interface implementation for ST7789
///
/// Implements [`DisplayInterface`] for embedded-hal v1.0 SPI and GPIO traits.
/// Uses a raw [`SpiBus`] plus a caller-supplied CS pin rather than
/// [`SpiDevice`](embedded_hal::spi::SpiDevice), because chip select must stay
/// asserted across every write of a chunked pixel stream, not per write.
///
/// ## Type Parameters
///
/// * `SPI` - SPI bus implementing [`SpiBus`]
/// * `CS` - Chip select pin implementing [`OutputPin`]
/// * `DC` - Data/Command pin implementing [`OutputPin`]
/// * `RST` - Reset pin implementing [`OutputPin`]
pub struct Interface<SPI, CS, DC, RST> {
    /// SPI bus for communication
    spi: SPI,
    /// Chip select pin (active low)
    cs: CS,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
    /// Reset pin (active low)
    rst: RST,
}

impl<SPI, CS, DC, RST> Interface<SPI, CS, DC, RST>
where
    SPI: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Create a new Interface
    ///
    /// # Arguments
    ///
    /// * `spi` - SPI bus (must implement [`SpiBus`])
    /// * `cs` - Chip select pin (output, active low)
    /// * `dc` - Data/Command pin (output, low=command, high=data)
    /// * `rst` - Reset pin (output, active low)
    pub fn new(spi: SPI, cs: CS, dc: DC, rst: RST) -> Self {
        Self { spi, cs, dc, rst }
    }

    /// Release the SPI bus and pins
    pub fn release(self) -> (SPI, CS, DC, RST) {
        (self.spi, self.cs, self.dc, self.rst)
    }
}

impl<SPI, CS, DC, RST, PinErr> DisplayInterface for Interface<SPI, CS, DC, RST>
where
    SPI: SpiBus,
    SPI::Error: Debug,
    CS: OutputPin<Error = PinErr>,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn begin_transaction(&mut self) -> InterfaceResult<(), Self::Error> {
        self.cs.set_low().map_err(InterfaceError::Pin)
    }

    fn end_transaction(&mut self) -> InterfaceResult<(), Self::Error> {
        self.spi.flush().map_err(InterfaceError::Spi)?;
        self.cs.set_high().map_err(InterfaceError::Pin)
    }

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        self.spi.write(&[command]).map_err(InterfaceError::Spi)?;
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        self.spi.write(data).map_err(InterfaceError::Spi)?;
        Ok(())
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) {
        // Reset sequence: HIGH -> 20ms -> LOW -> 100ms -> HIGH -> 100ms
        let _ = self.rst.set_high();
        delay.delay_ms(20);
        let _ = self.rst.set_low();
        delay.delay_ms(100);
        let _ = self.rst.set_high();
        delay.delay_ms(100);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;

    #[derive(Debug, Clone, Copy)]
    struct MockError;

    impl core::fmt::Display for MockError {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            write!(f, "mock error")
        }
    }

    impl embedded_hal::digital::Error for MockError {
        fn kind(&self) -> embedded_hal::digital::ErrorKind {
            embedded_hal::digital::ErrorKind::Other
        }
    }

    impl embedded_hal::spi::Error for MockError {
        fn kind(&self) -> embedded_hal::spi::ErrorKind {
            embedded_hal::spi::ErrorKind::Other
        }
    }

    /// Every bus and pin event in the order it happened.
    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        Cs(bool),
        Dc(bool),
        Write(alloc::vec::Vec<u8>),
        Flush,
    }

    #[derive(Debug, Default)]
    struct Log(RefCell<alloc::vec::Vec<Event>>);

    struct MockSpi<'a>(&'a Log);

    impl embedded_hal::spi::ErrorType for MockSpi<'_> {
        type Error = MockError;
    }

    impl SpiBus for MockSpi<'_> {
        fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
            Ok(())
        }
        fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
            self.0.0.borrow_mut().push(Event::Write(words.to_vec()));
            Ok(())
        }
        fn transfer(&mut self, _read: &mut [u8], _write: &[u8]) -> Result<(), Self::Error> {
            Ok(())
        }
        fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
            Ok(())
        }
        fn flush(&mut self) -> Result<(), Self::Error> {
            self.0.0.borrow_mut().push(Event::Flush);
            Ok(())
        }
    }

    struct MockPin<'a> {
        log: &'a Log,
        kind: fn(bool) -> Event,
    }

    impl embedded_hal::digital::ErrorType for MockPin<'_> {
        type Error = MockError;
    }

    impl OutputPin for MockPin<'_> {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.log.0.borrow_mut().push((self.kind)(false));
            Ok(())
        }
        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.log.0.borrow_mut().push((self.kind)(true));
            Ok(())
        }
    }

    struct SilentPin;

    impl embedded_hal::digital::ErrorType for SilentPin {
        type Error = MockError;
    }

    impl OutputPin for SilentPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
        fn set_high(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn test_interface(log: &Log) -> Interface<MockSpi<'_>, MockPin<'_>, MockPin<'_>, SilentPin> {
        Interface::new(
            MockSpi(log),
            MockPin {
                log,
                kind: Event::Cs,
            },
            MockPin {
                log,
                kind: Event::Dc,
            },
            SilentPin,
        )
    }

    #[test]
    fn test_command_framed_with_dc_low() {
        let log = Log::default();
        let mut interface = test_interface(&log);

        interface.send_command(0x2A).unwrap();

        let events = log.0.borrow();
        assert_eq!(
            events.as_slice(),
            &[
                Event::Dc(false),
                Event::Write(alloc::vec![0x2A]),
                Event::Dc(true),
            ]
        );
    }

    #[test]
    fn test_data_sent_with_dc_high() {
        let log = Log::default();
        let mut interface = test_interface(&log);

        interface.send_data(&[0x00, 0x10, 0x00, 0x6F]).unwrap();

        let events = log.0.borrow();
        assert_eq!(
            events.as_slice(),
            &[
                Event::Dc(true),
                Event::Write(alloc::vec![0x00, 0x10, 0x00, 0x6F]),
            ]
        );
    }

    #[test]
    fn test_transaction_brackets_chip_select() {
        let log = Log::default();
        let mut interface = test_interface(&log);

        interface.begin_transaction().unwrap();
        interface.send_data(&[0xFF]).unwrap();
        interface.end_transaction().unwrap();

        let events = log.0.borrow();
        assert_eq!(events.first(), Some(&Event::Cs(false)));
        assert_eq!(events.last(), Some(&Event::Cs(true)));
        // The bus is flushed before CS deasserts
        assert_eq!(events[events.len() - 2], Event::Flush);
    }
}
