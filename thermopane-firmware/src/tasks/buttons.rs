//! Button watcher task
//!
//! One instance per input line. Each waits for debounced presses and
//! publishes them to the controller.

use defmt::*;

use thermopane_core::cleanup::ReleaseGuard;
use thermopane_core::input::{ButtonWatcher, WatchOutcome};
use thermopane_drivers::input::DebouncedButton;

use crate::channels::EVENT_CHANNEL;
use crate::hw::{EmbassyClock, RpInput};

/// Debounced button on an RP2040 GPIO
pub type PanelButton = DebouncedButton<RpInput, EmbassyClock>;

#[embassy_executor::task(pool_size = 4)]
pub async fn button_task(button: PanelButton) {
    let mut watcher = ButtonWatcher::new(ReleaseGuard::new(button));
    let sender = EVENT_CHANNEL.sender();
    info!("Button watcher started");

    loop {
        match watcher.poll(&sender).await {
            WatchOutcome::Published(event) => {
                debug!("Press on gpio{}", event.pin);
            }
            WatchOutcome::Dropped(event) => {
                warn!(
                    "Event queue full, dropped press on gpio{} ({} total)",
                    event.pin,
                    watcher.dropped()
                );
            }
            WatchOutcome::Stopped(e) => {
                error!("Button watcher stopped: {:?}", e);
                break;
            }
        }
    }
}
