//! Periodic render task
//!
//! Samples the sensor and repaints the live page once per period. A
//! failed tick is logged and the next one starts fresh.

use defmt::*;
use embassy_time::{Duration, Ticker};

use thermopane_core::cleanup::ReleaseGuard;
use thermopane_core::line::Page;
use thermopane_core::render::{Geometry, RenderLoop, TickOutcome};
use thermopane_core::state::DisplayState;

use crate::display::Pim715Renderer;
use crate::hw::PanelSensor;

/// Render settings taken from the panel config
#[derive(Clone, Copy)]
pub struct RenderTaskConfig {
    pub period_ms: u32,
    pub live_page: Page,
    pub geometry: Geometry,
}

#[embassy_executor::task]
pub async fn render_task(
    state: &'static DisplayState,
    sensor: PanelSensor,
    renderer: Pim715Renderer,
    config: RenderTaskConfig,
) {
    let mut render = RenderLoop::new(
        sensor,
        ReleaseGuard::new(renderer),
        config.live_page,
        config.geometry,
    );
    let mut ticker = Ticker::every(Duration::from_millis(u64::from(config.period_ms)));
    info!("Render loop started, period {}ms", config.period_ms);

    let mut last_page = None;
    loop {
        match render.tick(state).await {
            TickOutcome::Rendered {
                page,
                zone,
                celsius,
            } => {
                debug!("Page {}: {}C ({})", page.number(), celsius, zone.label());
                last_page = Some(page);
            }
            TickOutcome::Idle(page) => {
                if last_page != Some(page) {
                    debug!("Page {} has no live content", page.number());
                }
                last_page = Some(page);
            }
            TickOutcome::SensorFailed(e) => {
                warn!("Sensor read failed: {:?}", e);
            }
            TickOutcome::RenderFailed(e) => {
                warn!("Render failed: {:?}", e);
            }
        }

        ticker.next().await;
    }
}
