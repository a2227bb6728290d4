//! Controller task
//!
//! Sole consumer of button events. Applies each one to the shared display
//! state and drives the backlight.

use defmt::*;

use thermopane_core::cleanup::ReleaseGuard;
use thermopane_core::line::LineMap;
use thermopane_core::state::{DisplayState, EventHandler, HandlerOutcome};
use thermopane_drivers::backlight::PwmBacklight;

use crate::channels::EVENT_CHANNEL;
use crate::hw::RpPwm;

/// Controller settings taken from the panel config
#[derive(Clone, Copy)]
pub struct ControllerConfig {
    pub lines: LineMap,
    pub step: u16,
}

#[embassy_executor::task]
pub async fn controller_task(
    state: &'static DisplayState,
    backlight: PwmBacklight<RpPwm>,
    config: ControllerConfig,
) {
    let mut handler = match EventHandler::new(
        state,
        config.lines,
        ReleaseGuard::new(backlight),
        config.step,
    ) {
        Ok(handler) => handler,
        Err(e) => {
            error!("Backlight range does not match the display state: {:?}", e);
            return;
        }
    };

    // Hardware starts dark; bring it to the state's level
    if let Err(e) = handler.restore_backlight() {
        warn!("Initial backlight command failed: {:?}", e);
    }
    info!(
        "Controller started: page {}, backlight {}",
        state.active_page().number(),
        state.backlight_level()
    );

    let receiver = EVENT_CHANNEL.receiver();
    loop {
        let event = receiver.receive().await;
        match handler.handle(event) {
            HandlerOutcome::PageSelected(page) => {
                info!("Page {} selected", page.number());
            }
            HandlerOutcome::Backlight { level, result: Ok(()) } => {
                info!("Backlight level {}", level);
            }
            HandlerOutcome::Backlight {
                level,
                result: Err(e),
            } => {
                warn!("Backlight level {} not applied: {:?}", level, e);
            }
            HandlerOutcome::Ignored(e) => {
                warn!("Ignoring button event: {:?}", e);
            }
        }
    }
}
