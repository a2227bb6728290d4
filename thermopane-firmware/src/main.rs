//! Thermopane - Page-Switching Temperature Panel Firmware
//!
//! Main firmware binary for an RP2040 Pico carrying a Pimoroni Display
//! Pack 2.8". Four buttons pick one of three pages or step the backlight
//! down; the live page shows the current temperature on a background
//! coloured by comfort zone.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig, InterruptHandler as AdcInterruptHandler};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_rp::spi::Spi;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::RgbColor;
use static_cell::{ConstStaticCell, StaticCell};
use {defmt_rtt as _, panic_probe as _};

use thermopane_core::config::{parse_config, PanelConfig, SensorKind};
use thermopane_core::line::Line;
use thermopane_core::state::DisplayState;
use thermopane_display::{DrawTargetSink, FrameBuffer, PanelRenderer};
use thermopane_drivers::backlight::PwmBacklight;
use thermopane_drivers::input::DebouncedButton;
use thermopane_drivers::sensor::{DieSensor, Ntc100kSensor};

use crate::boards::{FRAME_PIXELS, PANEL_HEIGHT, PANEL_WIDTH};
use crate::hw::{EmbassyClock, PanelSensor, RpAdc, RpInput, RpPwm};
use crate::pins::PinBank;

/// Embedded configuration (compiled into firmware)
/// Edit panel.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../panel.toml");

mod boards;
mod channels;
mod display;
mod hw;
mod pins;
mod tasks;

bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => AdcInterruptHandler;
});

// Shared between the controller and the render loop
static DISPLAY_STATE: StaticCell<DisplayState> = StaticCell::new();

// Full-panel framebuffer and the SPI batching buffer
static FRAME: ConstStaticCell<[Rgb565; FRAME_PIXELS]> =
    ConstStaticCell::new([Rgb565::BLACK; FRAME_PIXELS]);
static SPI_BUFFER: ConstStaticCell<[u8; 512]> = ConstStaticCell::new([0; 512]);

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Thermopane firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = load_config();

    // Invalid wiring is the one fatal error class
    let mut claims = match config.validate() {
        Ok(claims) => claims,
        Err(e) => defmt::panic!("Invalid panel configuration: {:?}", e),
    };
    if let Err(e) = boards::claim_board_pins(&mut claims, config.sensor.kind) {
        defmt::panic!("Button wiring collides with the display pack: {:?}", e);
    }

    let state = DISPLAY_STATE.init(DisplayState::new(config.backlight.max_level));

    // GPIO26 is the thermistor input only when the NTC is fitted
    let (ntc_pin, free_pin_26) = match config.sensor.kind {
        SensorKind::Ntc100k => (Some(p.PIN_26), None),
        SensorKind::Die => (None, bank_pin!(p.PIN_26)),
    };

    // Everything the display pack does not wire up
    let mut bank = PinBank::new([
        bank_pin!(p.PIN_0),
        bank_pin!(p.PIN_1),
        bank_pin!(p.PIN_2),
        bank_pin!(p.PIN_3),
        bank_pin!(p.PIN_4),
        bank_pin!(p.PIN_5),
        bank_pin!(p.PIN_6),
        bank_pin!(p.PIN_7),
        bank_pin!(p.PIN_8),
        bank_pin!(p.PIN_9),
        bank_pin!(p.PIN_10),
        bank_pin!(p.PIN_11),
        bank_pin!(p.PIN_12),
        bank_pin!(p.PIN_13),
        bank_pin!(p.PIN_14),
        bank_pin!(p.PIN_15),
        None, // DC
        None, // CS
        None, // CLK
        None, // MOSI
        None, // Backlight
        bank_pin!(p.PIN_21),
        bank_pin!(p.PIN_22),
        bank_pin!(p.PIN_23),
        bank_pin!(p.PIN_24),
        bank_pin!(p.PIN_25),
        free_pin_26,
        bank_pin!(p.PIN_27),
        bank_pin!(p.PIN_28),
        bank_pin!(p.PIN_29),
    ]);

    // Setup backlight PWM (GPIO20 = slice 2, channel A)
    let pwm = Pwm::new_output_a(p.PWM_SLICE2, p.PIN_20, PwmConfig::default());
    let backlight = PwmBacklight::new(RpPwm::new(pwm), config.backlight.max_level);
    info!("Backlight PWM initialized");

    // Setup ADC for temperature sensing
    let adc = Adc::new(p.ADC, Irqs, AdcConfig::default());
    let sensor = match ntc_pin {
        Some(pin) => {
            let channel = Channel::new_pin(pin, Pull::None);
            info!("NTC100K sensor on GPIO26, pullup {} ohms", config.sensor.pullup_ohms);
            PanelSensor::Ntc(Ntc100kSensor::new(
                RpAdc::new(adc, channel),
                config.sensor.pullup_ohms,
            ))
        }
        None => {
            let channel = Channel::new_temp_sensor(p.ADC_TEMP_SENSOR);
            info!("Using internal temperature sensor");
            PanelSensor::Die(DieSensor::new(RpAdc::new(adc, channel)))
        }
    };

    // Setup the display (SPI0 TX only, no reset pin)
    let cs = Output::new(p.PIN_17, Level::High);
    let dc = Output::new(p.PIN_16, Level::Low);
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, boards::display_spi_config());
    let panel = match display::init_display(spi, cs, dc, SPI_BUFFER.take()) {
        Ok(panel) => panel,
        Err(e) => defmt::panic!("Display init failed: {:?}", e),
    };
    let frame = unwrap!(FrameBuffer::new(FRAME.take(), PANEL_WIDTH, PANEL_HEIGHT));
    let renderer = PanelRenderer::new(frame, DrawTargetSink::new(panel));
    info!("Display initialized");

    // Spawn tasks
    spawner
        .spawn(tasks::controller_task(
            state,
            backlight,
            tasks::ControllerConfig {
                lines: config.buttons.line_map(),
                step: config.backlight.step,
            },
        ))
        .unwrap();
    spawner
        .spawn(tasks::render_task(
            state,
            sensor,
            renderer,
            tasks::RenderTaskConfig {
                period_ms: config.render.period_ms,
                live_page: config.render.live_page,
                geometry: config.render.geometry,
            },
        ))
        .unwrap();

    for line in Line::ALL {
        let pin_config = config.buttons.pin(line);
        let pin = match bank.take(pin_config.pin) {
            Ok(pin) => pin,
            Err(e) => defmt::panic!("Cannot take gpio{}: {:?}", pin_config.pin, e),
        };
        let pull = if pin_config.pull_up {
            Pull::Up
        } else {
            Pull::None
        };
        let button = DebouncedButton::new(
            RpInput::new(Input::new(pin, pull), pin_config.pin),
            EmbassyClock,
            config.debounce_ms,
            pin_config.inverted,
        );
        spawner.spawn(tasks::button_task(button)).unwrap();
        info!("Button {:?} on gpio{}", line, pin_config.pin);
    }

    info!("All tasks spawned, firmware running");

    loop {
        embassy_time::Timer::after_secs(60).await;
        let snapshot = state.snapshot();
        trace!(
            "Heartbeat: page {}, backlight {}",
            snapshot.active_page.number(),
            snapshot.backlight_level
        );
    }
}

/// Parse the embedded panel.toml
///
/// build.rs already checked it, so a failure here means the embedded
/// parser and the build-time check disagree. Fall back to defaults.
fn load_config() -> PanelConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Parsed embedded configuration successfully");
            config
        }
        Err(e) => {
            error!("Failed to parse embedded config: {:?}", e);
            error!("Using default configuration");
            PanelConfig::new()
        }
    }
}
