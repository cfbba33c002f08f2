//! Core display operations
//!
//! [`Display`] owns everything one rendering session needs: the hardware
//! interface, the panel configuration, the decoder state for text input,
//! the last declared addressing window, and the fixed transmit buffer that
//! every pixel stream is chunked through. Threading one `Display` value
//! through all calls keeps the single-writer discipline the hardware
//! requires without hidden shared state.
//!
//! All operations are synchronous: a call returns only after its bus
//! transactions complete. There is no cancellation and no partial-failure
//! signaling beyond propagated interface errors.

use embedded_hal::delay::DelayNs;
use log::{debug, trace};

use crate::color::Rgb565;
use crate::command::{
    CASET, COLMOD, DISPOFF, DISPON, FRCTRL2, GCTRL, INVON, LCMCTRL, MADCTL, NVGAMCTRL, PORCTRL,
    PVGAMCTRL, PWCTRL1, RAMWR, RASET, SLPIN, SLPOUT, VCOMS, VDVS, VDVVRHEN, VRHS,
};
use crate::config::Config;
use crate::decoder::CharDecoder;
use crate::error::Error;
use crate::interface::DisplayInterface;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Transmit buffer capacity in bytes
///
/// Pixel streams larger than this are split into multiple bus writes.
/// 15,000 bytes holds 7,500 pixels, a quarter of the full panel.
pub const TX_BUFFER_LEN: usize = 15_000;

/// Bytes per pixel on the bus (16-bit RGB565)
const BYTES_PER_PIXEL: usize = 2;

/// The last-declared addressing window
///
/// Its pixel area determines how many pixels the controller expects before
/// the window is complete.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    /// X coordinate of the window origin
    pub x: u16,
    /// Y coordinate of the window origin
    pub y: u16,
    /// Width in pixels
    pub w: u16,
    /// Height in pixels
    pub h: u16,
}

impl Window {
    /// Number of pixels the window covers
    pub fn pixel_count(&self) -> usize {
        self.w as usize * self.h as usize
    }

    /// Number of bytes a full pixel stream for this window occupies
    pub fn byte_count(&self) -> usize {
        self.pixel_count() * BYTES_PER_PIXEL
    }
}

/// Rendering session for one ST7789 panel
///
/// This struct provides the full output pipeline: controller
/// initialization, addressing, rectangle fills, image blits and text
/// rendering (see the methods in [`text`](crate::text)).
///
/// The embedded transmit buffer makes this a large value; on-target it is
/// meant to live in a `static` or other long-lived storage, not the stack.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Scratch buffer for chunked pixel streaming, reused across calls
    tx_buffer: [u8; TX_BUFFER_LEN],
    /// Last declared addressing window
    window: Option<Window>,
    /// Multi-byte text decoder state for this session
    decoder: CharDecoder,
    /// Whether the display output is on
    is_display_on: bool,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    ///
    /// The controller is untouched until [`initialize`](Self::initialize)
    /// is called.
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            config,
            tx_buffer: [0; TX_BUFFER_LEN],
            window: None,
            decoder: CharDecoder::new(),
            is_display_on: false,
        }
    }

    /// Perform hardware reset and the full controller init sequence
    ///
    /// The register list is vendor-specific and order-sensitive: reordering
    /// or omitting entries produces a blank or corrupted panel. After the
    /// registers are programmed the panel leaves sleep (with the required
    /// 120ms settle time), output is enabled, and the screen is cleared to
    /// black.
    pub fn initialize<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        debug!("st7789: initialize");
        self.interface.reset(delay);

        self.interface
            .begin_transaction()
            .map_err(Error::Interface)?;
        let result = self.init_registers(delay);
        self.interface.end_transaction().map_err(Error::Interface)?;
        result?;

        self.is_display_on = true;
        self.clear()
    }

    /// Program the init register list, in order
    fn init_registers<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.send_command(MADCTL)?;
        self.send_data(&[self.config.madctl])?;

        self.send_command(COLMOD)?;
        self.send_data(&[self.config.colmod])?;

        self.send_command(PORCTRL)?;
        let porch = self.config.porch_control;
        self.send_data(&porch)?;

        self.send_command(GCTRL)?;
        self.send_data(&[self.config.gate_control])?;

        self.send_command(VCOMS)?;
        self.send_data(&[self.config.vcoms])?;

        self.send_command(LCMCTRL)?;
        self.send_data(&[self.config.lcm_control])?;

        self.send_command(VDVVRHEN)?;
        self.send_data(&[self.config.vdv_vrh_enable])?;

        self.send_command(VRHS)?;
        self.send_data(&[self.config.vrh])?;

        self.send_command(VDVS)?;
        self.send_data(&[self.config.vdv])?;

        self.send_command(FRCTRL2)?;
        self.send_data(&[self.config.frame_rate])?;

        self.send_command(PWCTRL1)?;
        let power = self.config.power_control;
        self.send_data(&power)?;

        self.send_command(PVGAMCTRL)?;
        let gamma_p = self.config.gamma_positive;
        self.send_data(&gamma_p)?;

        self.send_command(NVGAMCTRL)?;
        let gamma_n = self.config.gamma_negative;
        self.send_data(&gamma_n)?;

        if self.config.invert_colors {
            self.send_command(INVON)?;
        }

        self.send_command(SLPOUT)?;
        delay.delay_ms(120);
        self.send_command(DISPON)?;

        Ok(())
    }

    /// Toggle sleep and display output
    ///
    /// Powering off enters sleep with frame memory retained; powering back
    /// on restores the previous contents.
    pub fn set_power(&mut self, on: bool) -> DisplayResult<I> {
        debug!("st7789: power {}", if on { "on" } else { "off" });
        self.interface
            .begin_transaction()
            .map_err(Error::Interface)?;
        let result = if on {
            self.send_command(DISPON)
                .and_then(|()| self.send_command(SLPOUT))
        } else {
            self.send_command(SLPIN)
                .and_then(|()| self.send_command(DISPOFF))
        };
        self.interface.end_transaction().map_err(Error::Interface)?;
        result?;
        self.is_display_on = on;
        Ok(())
    }

    /// Fill a rectangle with one color
    ///
    /// Declares `(x, y, w, h)` as the addressing window and streams
    /// `w * h` pixels of `color` through the transmit buffer, all within a
    /// single bus transaction.
    #[allow(clippy::many_single_char_names)]
    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, color: Rgb565) -> DisplayResult<I> {
        self.interface
            .begin_transaction()
            .map_err(Error::Interface)?;
        let result = self
            .set_window(x, y, w, h)
            .and_then(|window| self.fill_window(window, color));
        self.interface.end_transaction().map_err(Error::Interface)?;
        result
    }

    /// Blit a pre-rendered pixel buffer into a rectangle
    ///
    /// `pixels` is row-major, one [`Rgb565`] per pixel, and must hold at
    /// least `w * h` entries. The stream is re-chunked across the transmit
    /// buffer; the final chunk is sized to the exact remainder.
    #[allow(clippy::many_single_char_names)]
    pub fn blit_image(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        pixels: &[Rgb565],
    ) -> DisplayResult<I> {
        let required = w as usize * h as usize;
        if pixels.len() < required {
            return Err(Error::BufferTooSmall {
                required,
                provided: pixels.len(),
            });
        }

        self.interface
            .begin_transaction()
            .map_err(Error::Interface)?;
        let result = self
            .set_window(x, y, w, h)
            .and_then(|window| self.blit_window(window, pixels));
        self.interface.end_transaction().map_err(Error::Interface)?;
        result
    }

    /// Clear the whole panel to black
    pub fn clear(&mut self) -> DisplayResult<I> {
        let dims = self.config.dimensions;
        self.fill_rect(0, 0, dims.width, dims.height, Rgb565::BLACK)
    }

    /// Declare the addressing window for a subsequent pixel stream
    ///
    /// Issues the column-address-set, row-address-set and memory-write
    /// commands, then records and returns the declared area. The controller
    /// then expects exactly `w * h` pixels. Must be called inside an open
    /// transaction.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidWindow` if the rectangle is empty or falls
    /// outside the configured dimensions.
    #[allow(clippy::many_single_char_names)]
    pub(crate) fn set_window(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
    ) -> Result<Window, Error<I>> {
        if w == 0 || h == 0 {
            return Err(Error::InvalidWindow { x, y, w, h });
        }
        if x.saturating_add(w) > self.config.dimensions.width
            || y.saturating_add(h) > self.config.dimensions.height
        {
            return Err(Error::InvalidWindow { x, y, w, h });
        }

        self.send_command(CASET)?;
        self.send_data(&[0x00, x as u8, 0x00, (x + w - 1) as u8])?;

        self.send_command(RASET)?;
        // Row addresses are masked to 8 bits by the panel wiring
        self.send_data(&[0x00, y as u8, 0x00, ((y + h - 1) & 0xFF) as u8])?;

        self.send_command(RAMWR)?;

        let window = Window { x, y, w, h };
        self.window = Some(window);
        Ok(window)
    }

    /// Stream one repeated color into the given window
    fn fill_window(&mut self, window: Window, color: Rgb565) -> DisplayResult<I> {
        let total = window.byte_count();
        let [hi, lo] = color.to_be_bytes();

        // Pack the repeating pattern once; every chunk reuses it
        let prefill = total.min(TX_BUFFER_LEN);
        for pair in self.tx_buffer[..prefill].chunks_exact_mut(BYTES_PER_PIXEL) {
            pair[0] = hi;
            pair[1] = lo;
        }

        let mut remaining = total;
        while remaining > 0 {
            let part = remaining.min(TX_BUFFER_LEN);
            self.interface
                .send_data(&self.tx_buffer[..part])
                .map_err(Error::Interface)?;
            remaining -= part;
            trace!("st7789: fill chunk {} bytes, {} remaining", part, remaining);
        }
        Ok(())
    }

    /// Stream a caller-supplied pixel buffer into the given window
    ///
    /// The caller guarantees `pixels` holds at least the window's pixel
    /// count; the stream never reads past it.
    fn blit_window(&mut self, window: Window, pixels: &[Rgb565]) -> DisplayResult<I> {
        let total = window.byte_count();

        let mut sent = 0;
        let mut position = 0;
        while sent < total {
            let part = (total - sent).min(TX_BUFFER_LEN);
            let count = part / BYTES_PER_PIXEL;
            for (slot, pixel) in self.tx_buffer[..part]
                .chunks_exact_mut(BYTES_PER_PIXEL)
                .zip(&pixels[position..position + count])
            {
                let bytes = pixel.to_be_bytes();
                slot[0] = bytes[0];
                slot[1] = bytes[1];
            }
            self.interface
                .send_data(&self.tx_buffer[..part])
                .map_err(Error::Interface)?;
            position += count;
            sent += part;
            trace!(
                "st7789: blit chunk {} bytes, {} remaining",
                part,
                total - sent
            );
        }
        Ok(())
    }

    /// Send a command to the display controller
    fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.interface.send_command(cmd).map_err(Error::Interface)
    }

    /// Send data to the display controller
    fn send_data(&mut self, data: &[u8]) -> DisplayResult<I> {
        self.interface.send_data(data).map_err(Error::Interface)
    }

    /// Get display dimensions
    pub fn dimensions(&self) -> &crate::config::Dimensions {
        &self.config.dimensions
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The last declared addressing window, if any
    pub fn window(&self) -> Option<Window> {
        self.window
    }

    /// Whether display output is currently enabled
    pub fn is_on(&self) -> bool {
        self.is_display_on
    }

    /// Consume the display and return the underlying interface
    pub fn release(self) -> I {
        self.interface
    }

    /// The session's text decoder
    pub(crate) fn decoder_mut(&mut self) -> &mut CharDecoder {
        &mut self.decoder
    }
}
