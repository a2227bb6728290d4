//! ST7789 panel bring-up for the PIM715

use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Blocking, Spi};
use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};
use mipidsi::interface::SpiInterface;
use mipidsi::models::ST7789;
use mipidsi::options::{ColorInversion, Orientation, Rotation};
use mipidsi::{Builder, NoResetPin};

use thermopane_display::{DrawTargetSink, PanelRenderer};

use crate::boards::{PANEL_NATIVE_HEIGHT, PANEL_NATIVE_WIDTH};

type PanelSpi = ExclusiveDevice<Spi<'static, SPI0, Blocking>, Output<'static>, NoDelay>;

/// ST7789 on the PIM715 (reset tied to RUN)
pub type Pim715Display =
    mipidsi::Display<SpiInterface<'static, PanelSpi, Output<'static>>, ST7789, NoResetPin>;

/// Renderer driving the pack's panel
pub type Pim715Renderer = PanelRenderer<'static, DrawTargetSink<Pim715Display>>;

/// Display bring-up failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayInitError {
    /// Chip select could not be driven
    ChipSelect,
    /// Controller init sequence failed
    Controller,
}

/// Initialize the panel in 320x240 landscape
pub fn init_display(
    spi: Spi<'static, SPI0, Blocking>,
    cs: Output<'static>,
    dc: Output<'static>,
    buffer: &'static mut [u8],
) -> Result<Pim715Display, DisplayInitError> {
    let spi_device =
        ExclusiveDevice::new_no_delay(spi, cs).map_err(|_| DisplayInitError::ChipSelect)?;
    let di = SpiInterface::new(spi_device, dc, buffer);

    // Native panel is portrait; rotate for landscape
    Builder::new(ST7789, di)
        .display_size(PANEL_NATIVE_WIDTH, PANEL_NATIVE_HEIGHT)
        .orientation(Orientation::new().rotate(Rotation::Deg90))
        .invert_colors(ColorInversion::Inverted)
        .init(&mut embassy_time::Delay)
        .map_err(|_| DisplayInitError::Controller)
}
