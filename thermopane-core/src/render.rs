//! Render specs and the periodic render tick
//!
//! Each tick reads the active page once. Only the live page has a sensor
//! behind it; for that page the tick reads a fresh temperature, classifies
//! it and hands the resulting [`RenderSpec`] to the renderer. Failures are
//! returned as a [`TickOutcome`] and never carry over to the next tick.

use core::fmt::Write;

use heapless::String;

use crate::line::Page;
use crate::state::DisplayState;
use crate::traits::renderer::{RenderError, Renderer};
use crate::traits::sensor::{SensorError, TemperatureSensor};
use crate::zone::{classify, Rgb, Zone};

/// Capacity of a render message
///
/// Wide enough for the longest `f32` decimal rendering plus a label.
pub const MESSAGE_CAPACITY: usize = 64;

/// Canvas size and text placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Geometry {
    pub width: u16,
    pub height: u16,
    pub text_x: u16,
    pub text_y: u16,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            width: 320,
            height: 240,
            text_x: 10,
            text_y: 10,
        }
    }
}

/// Everything the renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RenderSpec {
    pub page: Page,
    pub zone: Zone,
    pub background: Rgb,
    pub foreground: Rgb,
    /// `"<value>C\n<label>"`
    pub message: String<MESSAGE_CAPACITY>,
    pub geometry: Geometry,
}

impl RenderSpec {
    /// Build the spec for a temperature reading
    pub fn for_reading(page: Page, celsius: f32, geometry: Geometry) -> Self {
        let zone = classify(celsius);
        let mut message = String::new();
        // Cannot overflow, see MESSAGE_CAPACITY
        let _ = write!(message, "{}C\n{}", celsius, zone.label());

        Self {
            page,
            zone,
            background: zone.background(),
            foreground: Rgb::BLACK,
            message,
            geometry,
        }
    }
}

/// Result of one render tick, for the caller to log
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// Live page drawn and pushed to the panel
    Rendered { page: Page, zone: Zone, celsius: f32 },
    /// Active page has no content source; nothing drawn
    Idle(Page),
    /// Sensor read failed; render skipped
    SensorFailed(SensorError),
    /// Renderer failed; display unchanged
    RenderFailed(RenderError),
}

/// Periodic render work for the live page
pub struct RenderLoop<S: TemperatureSensor, R: Renderer> {
    sensor: S,
    renderer: R,
    live_page: Page,
    geometry: Geometry,
}

impl<S: TemperatureSensor, R: Renderer> RenderLoop<S, R> {
    pub fn new(sensor: S, renderer: R, live_page: Page, geometry: Geometry) -> Self {
        Self {
            sensor,
            renderer,
            live_page,
            geometry,
        }
    }

    /// Run one tick against the current state
    pub async fn tick(&mut self, state: &DisplayState) -> TickOutcome {
        let page = state.active_page();
        if page != self.live_page {
            return TickOutcome::Idle(page);
        }

        let celsius = match self.sensor.read_temperature().await {
            Ok(t) => t,
            Err(e) => return TickOutcome::SensorFailed(e),
        };

        let spec = RenderSpec::for_reading(page, celsius, self.geometry);
        match self.renderer.render_and_display(&spec) {
            Ok(()) => TickOutcome::Rendered {
                page,
                zone: spec.zone,
                celsius,
            },
            Err(e) => TickOutcome::RenderFailed(e),
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;
    use std::collections::VecDeque;

    struct ScriptedSensor(VecDeque<Result<f32, SensorError>>);

    impl TemperatureSensor for ScriptedSensor {
        async fn read_temperature(&mut self) -> Result<f32, SensorError> {
            self.0.pop_front().unwrap_or(Err(SensorError::ConversionError))
        }
    }

    #[derive(Default)]
    struct CapturingRenderer {
        frames: Vec<RenderSpec>,
        fail_next: Option<RenderError>,
    }

    impl Renderer for CapturingRenderer {
        fn render_and_display(&mut self, spec: &RenderSpec) -> Result<(), RenderError> {
            if let Some(e) = self.fail_next.take() {
                return Err(e);
            }
            self.frames.push(spec.clone());
            Ok(())
        }
    }

    fn render_loop(
        readings: &[Result<f32, SensorError>],
    ) -> RenderLoop<ScriptedSensor, CapturingRenderer> {
        RenderLoop::new(
            ScriptedSensor(readings.iter().copied().collect()),
            CapturingRenderer::default(),
            Page::One,
            Geometry::default(),
        )
    }

    #[test]
    fn test_message_format() {
        let spec = RenderSpec::for_reading(Page::One, 24.0, Geometry::default());
        assert_eq!(spec.message.as_str(), "24C\nSafe");
        assert_eq!(spec.zone, Zone::Safe);
        assert_eq!(spec.background, Rgb::DARK_GREEN);
        assert_eq!(spec.foreground, Rgb::BLACK);

        let spec = RenderSpec::for_reading(Page::One, 26.5, Geometry::default());
        assert_eq!(spec.message.as_str(), "26.5C\nWarn");

        let spec = RenderSpec::for_reading(Page::One, -3.0, Geometry::default());
        assert_eq!(spec.message.as_str(), "-3C\nCritical");
    }

    #[test]
    fn test_message_fits_extreme_values() {
        let spec = RenderSpec::for_reading(Page::One, -f32::MAX, Geometry::default());
        assert!(spec.message.ends_with("C\nCritical"));
    }

    #[test]
    fn test_tick_renders_live_page() {
        let state = DisplayState::new(1000);
        let mut rl = render_loop(&[Ok(22.0)]);

        let outcome = block_on(rl.tick(&state));
        assert_eq!(
            outcome,
            TickOutcome::Rendered {
                page: Page::One,
                zone: Zone::Warn,
                celsius: 22.0,
            }
        );
        assert_eq!(rl.renderer().frames.len(), 1);
        assert_eq!(rl.renderer().frames[0].background, Rgb::AMBER);
    }

    #[test]
    fn test_tick_idle_on_other_pages() {
        let state = DisplayState::new(1000);
        state.select_page(Page::Three);
        let mut rl = render_loop(&[Ok(24.0)]);

        assert_eq!(block_on(rl.tick(&state)), TickOutcome::Idle(Page::Three));
        assert!(rl.renderer().frames.is_empty());
    }

    #[test]
    fn test_sensor_failure_does_not_affect_next_tick() {
        let state = DisplayState::new(1000);
        let mut rl = render_loop(&[Err(SensorError::OpenCircuit), Ok(24.0)]);

        assert_eq!(
            block_on(rl.tick(&state)),
            TickOutcome::SensorFailed(SensorError::OpenCircuit)
        );
        assert!(rl.renderer().frames.is_empty());

        assert!(matches!(
            block_on(rl.tick(&state)),
            TickOutcome::Rendered { zone: Zone::Safe, .. }
        ));
        assert_eq!(rl.renderer().frames.len(), 1);
    }

    #[test]
    fn test_render_failure_does_not_affect_next_tick() {
        let state = DisplayState::new(1000);
        let mut rl = render_loop(&[Ok(30.0), Ok(30.0)]);
        rl.renderer_mut().fail_next = Some(RenderError::Io);

        assert_eq!(
            block_on(rl.tick(&state)),
            TickOutcome::RenderFailed(RenderError::Io)
        );
        assert!(matches!(
            block_on(rl.tick(&state)),
            TickOutcome::Rendered {
                zone: Zone::Critical,
                ..
            }
        ));
    }
}
