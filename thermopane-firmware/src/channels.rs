//! Inter-task communication channels
//!
//! Button watchers publish here; the controller task is the only consumer.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use thermopane_core::line::ButtonEvent;

/// Channel capacity for button events
pub const EVENT_CHANNEL_SIZE: usize = 8;

/// Button presses from all four watchers, in arrival order
pub static EVENT_CHANNEL: Channel<CriticalSectionRawMutex, ButtonEvent, EVENT_CHANNEL_SIZE> =
    Channel::new();
