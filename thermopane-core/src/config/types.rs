//! Configuration types and validation

use crate::debounce::DEFAULT_DEBOUNCE_MS;
use crate::line::{Line, LineMap, Page, LINE_COUNT};
use crate::render::Geometry;

/// Highest GPIO number on the target (RP2040: GPIO0-GPIO29)
pub const MAX_GPIO: u8 = 29;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Two lines share a GPIO
    DuplicatePin(u8),
    /// GPIO number beyond [`MAX_GPIO`]
    InvalidPin(u8),
    /// Backlight step of zero would never change the level
    ZeroStep,
    /// Backlight step larger than the maximum level
    StepExceedsMax,
    /// Maximum level is not a whole number of steps, so the level would
    /// never land on zero before wrapping
    StepNotDivisor,
    /// Render period of zero
    ZeroPeriod,
    /// Empty canvas or text origin outside it
    InvalidGeometry,
    /// Thermistor divider without a pull-up
    ZeroPullup,
}

/// Pin configuration with optional inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConfig {
    /// GPIO pin number (0-29 for RP2040)
    pub pin: u8,
    /// Pin is active-high (inverted relative to the usual active-low button)
    pub inverted: bool,
    /// Enable internal pull-up
    pub pull_up: bool,
}

impl PinConfig {
    /// Create a new pin config
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
            pull_up: false,
        }
    }

    /// Create a pin with pull-up enabled
    pub const fn with_pullup(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
            pull_up: true,
        }
    }
}

/// GPIO claim tracking
///
/// Each GPIO may be used by at most one function.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PinClaims {
    claimed: u32,
}

impl PinClaims {
    pub const fn new() -> Self {
        Self { claimed: 0 }
    }

    /// Claim a GPIO, failing if it is out of range or already claimed
    pub fn claim(&mut self, pin: u8) -> Result<(), ConfigError> {
        if pin > MAX_GPIO {
            return Err(ConfigError::InvalidPin(pin));
        }
        let mask = 1u32 << pin;
        if self.claimed & mask != 0 {
            return Err(ConfigError::DuplicatePin(pin));
        }
        self.claimed |= mask;
        Ok(())
    }

    /// Check if a GPIO is claimed
    pub fn is_claimed(&self, pin: u8) -> bool {
        pin <= MAX_GPIO && self.claimed & (1u32 << pin) != 0
    }
}

/// Button wiring
///
/// Defaults follow the A/B/X/Y buttons of a Pico display pack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonsConfig {
    pub page_1: PinConfig,
    pub page_2: PinConfig,
    pub page_3: PinConfig,
    pub brightness: PinConfig,
}

impl ButtonsConfig {
    /// Pin of a line
    pub fn pin(&self, line: Line) -> PinConfig {
        match line {
            Line::Page1 => self.page_1,
            Line::Page2 => self.page_2,
            Line::Page3 => self.page_3,
            Line::Brightness => self.brightness,
        }
    }

    /// Pins in [`Line::ALL`] order
    pub fn pins(&self) -> [PinConfig; LINE_COUNT] {
        Line::ALL.map(|line| self.pin(line))
    }

    /// GPIO to line resolution for the event handler
    pub fn line_map(&self) -> LineMap {
        LineMap::new(self.pins().map(|p| p.pin))
    }
}

impl Default for ButtonsConfig {
    fn default() -> Self {
        Self {
            page_1: PinConfig::with_pullup(12),
            page_2: PinConfig::with_pullup(13),
            page_3: PinConfig::with_pullup(14),
            brightness: PinConfig::with_pullup(15),
        }
    }
}

/// Backlight tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BacklightConfig {
    /// Level at startup and after wrapping; also the PWM wrap value
    pub max_level: u16,
    /// Decrement per brightness press
    pub step: u16,
}

impl Default for BacklightConfig {
    fn default() -> Self {
        Self {
            max_level: 1000,
            step: 100,
        }
    }
}

/// Render loop tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RenderConfig {
    /// Tick period in milliseconds
    pub period_ms: u32,
    /// Page backed by the temperature sensor
    pub live_page: Page,
    pub geometry: Geometry,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            period_ms: 1000,
            live_page: Page::One,
            geometry: Geometry::default(),
        }
    }
}

/// Temperature sensor type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorKind {
    /// On-die sensor of the microcontroller
    #[default]
    Die,
    /// NTC 100K thermistor on an external ADC pin
    Ntc100k,
}

/// Temperature sensor selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorConfig {
    pub kind: SensorKind,
    /// Divider pull-up for the thermistor, in ohms
    pub pullup_ohms: u32,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            kind: SensorKind::Die,
            pullup_ohms: 100_000,
        }
    }
}

/// Complete panel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelConfig {
    pub buttons: ButtonsConfig,
    pub backlight: BacklightConfig,
    pub render: RenderConfig,
    pub sensor: SensorConfig,
    /// Button debounce window in milliseconds
    pub debounce_ms: u32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            buttons: ButtonsConfig::default(),
            backlight: BacklightConfig::default(),
            render: RenderConfig::default(),
            sensor: SensorConfig::default(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl PanelConfig {
    /// Create a config with default wiring and tuning
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the configuration, returning the claimed button pins
    pub fn validate(&self) -> Result<PinClaims, ConfigError> {
        let mut claims = PinClaims::new();
        for pin in self.buttons.pins() {
            claims.claim(pin.pin)?;
        }

        let BacklightConfig { max_level, step } = self.backlight;
        if step == 0 {
            return Err(ConfigError::ZeroStep);
        }
        if step > max_level {
            return Err(ConfigError::StepExceedsMax);
        }
        if max_level % step != 0 {
            return Err(ConfigError::StepNotDivisor);
        }

        if self.render.period_ms == 0 {
            return Err(ConfigError::ZeroPeriod);
        }

        let g = self.render.geometry;
        if g.width == 0 || g.height == 0 || g.text_x >= g.width || g.text_y >= g.height {
            return Err(ConfigError::InvalidGeometry);
        }

        if self.sensor.kind == SensorKind::Ntc100k && self.sensor.pullup_ohms == 0 {
            return Err(ConfigError::ZeroPullup);
        }

        Ok(claims)
    }
}
