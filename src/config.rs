//! Display configuration types and builder

pub use crate::error::{BuilderError, PANEL_HEIGHT, PANEL_WIDTH};

/// Display dimensions
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    /// Width in pixels (columns)
    pub width: u16,
    /// Height in pixels (rows)
    pub height: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if either side is zero or
    /// exceeds the panel limits (240x240).
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        if width == 0 || width > PANEL_WIDTH || height == 0 || height > PANEL_HEIGHT {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Total pixel count
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Display configuration
///
/// This struct holds all configurable register values for the ST7789
/// init sequence. Use `Builder` to create a Config. Defaults are the values
/// used by the 240x240 wearable panels this driver was written for;
/// reordering or omitting init entries produces a blank or corrupted panel,
/// so [`Display::initialize`](crate::Display::initialize) always sends the
/// full list.
#[derive(Clone, Debug)]
pub struct Config {
    /// Display dimensions
    pub dimensions: Dimensions,
    /// Memory data access control byte (scan direction, RGB/BGR order)
    pub madctl: u8,
    /// Pixel format byte (0x05 = 16-bit RGB565)
    pub colmod: u8,
    /// Porch control settings (5 bytes for command 0xB2)
    pub porch_control: [u8; 5],
    /// Gate control byte (VGH/VGL levels)
    pub gate_control: u8,
    /// VCOM setting
    pub vcoms: u8,
    /// LCM control byte
    pub lcm_control: u8,
    /// VDV/VRH command enable byte
    pub vdv_vrh_enable: u8,
    /// VRH voltage setting
    pub vrh: u8,
    /// VDV voltage setting
    pub vdv: u8,
    /// Frame rate control byte (0x0F = 60Hz)
    pub frame_rate: u8,
    /// Power control 1 settings (2 bytes for command 0xD0)
    pub power_control: [u8; 2],
    /// Positive gamma correction curve (14 bytes for command 0xE0)
    pub gamma_positive: [u8; 14],
    /// Negative gamma correction curve (14 bytes for command 0xE1)
    pub gamma_negative: [u8; 14],
    /// Whether to enable display inversion (panel wiring dependent)
    pub invert_colors: bool,
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```rust,no_run
/// use st7789_watch::{Builder, Dimensions};
///
/// let dims = match Dimensions::new(240, 240) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new().dimensions(dims).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let _ = config;
/// ```
#[must_use]
pub struct Builder {
    /// Display dimensions (required)
    dimensions: Option<Dimensions>,
    /// Memory data access control byte
    madctl: u8,
    /// Pixel format byte
    colmod: u8,
    /// Porch control settings
    porch_control: [u8; 5],
    /// Gate control byte
    gate_control: u8,
    /// VCOM setting
    vcoms: u8,
    /// LCM control byte
    lcm_control: u8,
    /// VDV/VRH command enable byte
    vdv_vrh_enable: u8,
    /// VRH voltage setting
    vrh: u8,
    /// VDV voltage setting
    vdv: u8,
    /// Frame rate control byte
    frame_rate: u8,
    /// Power control 1 settings
    power_control: [u8; 2],
    /// Positive gamma correction curve
    gamma_positive: [u8; 14],
    /// Negative gamma correction curve
    gamma_negative: [u8; 14],
    /// Whether to enable display inversion
    invert_colors: bool,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: None,
            // Default scan direction: top-to-bottom, left-to-right, RGB
            madctl: 0x00,
            // 16-bit RGB565
            colmod: 0x05,
            // Default porch settings
            porch_control: [0x0C, 0x0C, 0x00, 0x33, 0x33],
            // VGH = 13.26V, VGL = -10.43V
            gate_control: 0x35,
            // VCOM = 0.75V
            vcoms: 0x19,
            lcm_control: 0x2C,
            // VDV and VRH from registers
            vdv_vrh_enable: 0x01,
            vrh: 0x12,
            vdv: 0x20,
            // 60Hz
            frame_rate: 0x0F,
            // AVDD = 6.8V, AVCL = -4.8V, VDS = 2.3V
            power_control: [0xA4, 0xA1],
            gamma_positive: [
                0xD0, 0x04, 0x0D, 0x11, 0x13, 0x2B, 0x3F, 0x54, 0x4C, 0x18, 0x0D, 0x0B, 0x1F, 0x23,
            ],
            gamma_negative: [
                0xD0, 0x04, 0x0C, 0x11, 0x13, 0x2C, 0x3F, 0x44, 0x51, 0x2F, 0x1F, 0x1F, 0x20, 0x23,
            ],
            // The target panels are wired inverted
            invert_colors: true,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display dimensions (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Set the memory data access control byte
    pub fn madctl(mut self, value: u8) -> Self {
        self.madctl = value;
        self
    }

    /// Set the pixel format byte
    pub fn colmod(mut self, value: u8) -> Self {
        self.colmod = value;
        self
    }

    /// Set porch control parameters
    pub fn porch_control(mut self, values: [u8; 5]) -> Self {
        self.porch_control = values;
        self
    }

    /// Set the gate control byte
    pub fn gate_control(mut self, value: u8) -> Self {
        self.gate_control = value;
        self
    }

    /// Set the VCOM value
    pub fn vcoms(mut self, value: u8) -> Self {
        self.vcoms = value;
        self
    }

    /// Set the LCM control byte
    pub fn lcm_control(mut self, value: u8) -> Self {
        self.lcm_control = value;
        self
    }

    /// Set the VDV/VRH command enable byte
    pub fn vdv_vrh_enable(mut self, value: u8) -> Self {
        self.vdv_vrh_enable = value;
        self
    }

    /// Set the VRH voltage value
    pub fn vrh(mut self, value: u8) -> Self {
        self.vrh = value;
        self
    }

    /// Set the VDV voltage value
    pub fn vdv(mut self, value: u8) -> Self {
        self.vdv = value;
        self
    }

    /// Set the frame rate control byte
    pub fn frame_rate(mut self, value: u8) -> Self {
        self.frame_rate = value;
        self
    }

    /// Set power control 1 parameters
    pub fn power_control(mut self, values: [u8; 2]) -> Self {
        self.power_control = values;
        self
    }

    /// Set the positive gamma correction curve
    pub fn gamma_positive(mut self, values: [u8; 14]) -> Self {
        self.gamma_positive = values;
        self
    }

    /// Set the negative gamma correction curve
    pub fn gamma_negative(mut self, values: [u8; 14]) -> Self {
        self.gamma_negative = values;
        self
    }

    /// Set whether display inversion is enabled
    pub fn invert_colors(mut self, value: bool) -> Self {
        self.invert_colors = value;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not set
    pub fn build(self) -> Result<Config, BuilderError> {
        Ok(Config {
            dimensions: self.dimensions.ok_or(BuilderError::MissingDimensions)?,
            madctl: self.madctl,
            colmod: self.colmod,
            porch_control: self.porch_control,
            gate_control: self.gate_control,
            vcoms: self.vcoms,
            lcm_control: self.lcm_control,
            vdv_vrh_enable: self.vdv_vrh_enable,
            vrh: self.vrh,
            vdv: self.vdv,
            frame_rate: self.frame_rate,
            power_control: self.power_control,
            gamma_positive: self.gamma_positive,
            gamma_negative: self.gamma_negative,
            invert_colors: self.invert_colors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_within_panel_succeed() {
        assert!(Dimensions::new(240, 240).is_ok());
        assert!(Dimensions::new(1, 1).is_ok());
    }

    #[test]
    fn test_dimensions_outside_panel_fail() {
        assert!(matches!(
            Dimensions::new(241, 240),
            Err(BuilderError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Dimensions::new(240, 0),
            Err(BuilderError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_builder_requires_dimensions() {
        assert!(matches!(
            Builder::new().build(),
            Err(BuilderError::MissingDimensions)
        ));
    }

    #[test]
    fn test_builder_defaults_are_panel_values() {
        let config = Builder::new()
            .dimensions(Dimensions::new(240, 240).unwrap())
            .build()
            .unwrap();
        assert_eq!(config.colmod, 0x05);
        assert_eq!(config.porch_control, [0x0C, 0x0C, 0x00, 0x33, 0x33]);
        assert_eq!(config.power_control, [0xA4, 0xA1]);
        assert!(config.invert_colors);
    }
}
