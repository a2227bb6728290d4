//! Board definitions
//!
//! Pimoroni Display Pack 2.8" (PIM715) on a Raspberry Pi Pico:
//! - DC: GPIO16
//! - CS: GPIO17
//! - CLK: GPIO18 (SPI0 CLK)
//! - MOSI: GPIO19 (SPI0 TX)
//! - Backlight: GPIO20 (PWM slice 2, channel A)
//! - Reset: tied to RUN
//! - Buttons A/B/X/Y: GPIO12/13/14/15
//!
//! An external thermistor, when fitted, reads through ADC0 on GPIO26.
//! On the pack that pin also drives the red LED, so the ntc100k sensor
//! is only for boards with the LED removed.

use embassy_rp::spi::Config as SpiConfig;

use thermopane_core::config::{ConfigError, PinClaims, SensorKind};

pub const DC_PIN: u8 = 16;
pub const CS_PIN: u8 = 17;
pub const CLK_PIN: u8 = 18;
pub const MOSI_PIN: u8 = 19;
pub const BACKLIGHT_PIN: u8 = 20;
pub const NTC_PIN: u8 = 26;

/// Native panel size before rotation
pub const PANEL_NATIVE_WIDTH: u16 = 240;
pub const PANEL_NATIVE_HEIGHT: u16 = 320;

/// Landscape size seen by the renderer
pub const PANEL_WIDTH: u16 = 320;
pub const PANEL_HEIGHT: u16 = 240;

pub const FRAME_PIXELS: usize = PANEL_WIDTH as usize * PANEL_HEIGHT as usize;

/// Claim the pins the board wires up itself
///
/// Fails if the config routed a button onto one of them.
pub fn claim_board_pins(claims: &mut PinClaims, sensor: SensorKind) -> Result<(), ConfigError> {
    for pin in [DC_PIN, CS_PIN, CLK_PIN, MOSI_PIN, BACKLIGHT_PIN] {
        claims.claim(pin)?;
    }
    if sensor == SensorKind::Ntc100k {
        claims.claim(NTC_PIN)?;
    }
    Ok(())
}

/// SPI configuration for the ST7789
///
/// The controller is rated for 62.5MHz; 40MHz is reliable on the pack.
pub fn display_spi_config() -> SpiConfig {
    let mut config = SpiConfig::default();
    config.frequency = 40_000_000;
    config
}
