//! Button watcher
//!
//! Bridges one [`ButtonInput`] to the event queue. Publishing never
//! blocks: when the queue is full the press is dropped and reported, so
//! a stalled consumer cannot back up into the input path.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::Sender;

use crate::line::ButtonEvent;
use crate::traits::input::{ButtonInput, InputError};

/// Result of waiting for one press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WatchOutcome {
    /// Event queued for the handler
    Published(ButtonEvent),
    /// Queue full, event discarded
    Dropped(ButtonEvent),
    /// Input failed; the watcher should stop
    Stopped(InputError),
}

/// Watches one input line and publishes its presses
pub struct ButtonWatcher<I: ButtonInput> {
    input: I,
    dropped: u32,
}

impl<I: ButtonInput> ButtonWatcher<I> {
    pub fn new(input: I) -> Self {
        Self { input, dropped: 0 }
    }

    /// Wait for the next press and try to queue it
    pub async fn poll<M: RawMutex, const N: usize>(
        &mut self,
        sender: &Sender<'_, M, ButtonEvent, N>,
    ) -> WatchOutcome {
        if let Err(e) = self.input.wait_for_press().await {
            return WatchOutcome::Stopped(e);
        }

        let event = ButtonEvent {
            pin: self.input.pin(),
        };
        match sender.try_send(event) {
            Ok(()) => WatchOutcome::Published(event),
            Err(_) => {
                self.dropped = self.dropped.wrapping_add(1);
                WatchOutcome::Dropped(event)
            }
        }
    }

    /// Presses discarded because the queue was full
    pub fn dropped(&self) -> u32 {
        self.dropped
    }
}
