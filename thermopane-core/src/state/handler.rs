//! Button event handler
//!
//! Applies the transition rule for each delivered event:
//!
//! - Page lines store the selected page; the render loop picks it up on
//!   its next tick.
//! - The brightness line steps the backlight level down, wrapping to the
//!   maximum, and pushes the new level to the backlight at once.
//! - Events from unknown GPIO numbers leave the state untouched.

use super::display::DisplayState;
use crate::line::{ButtonEvent, LineMap, Page};
use crate::traits::backlight::{Backlight, HardwareCommandError};
use crate::traits::input::InputError;

/// Result of handling one event, for the caller to log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HandlerOutcome {
    /// Active page changed
    PageSelected(Page),
    /// Backlight stepped; `result` is the hardware command outcome
    Backlight {
        level: u16,
        result: Result<(), HardwareCommandError>,
    },
    /// Event dropped without touching state
    Ignored(InputError),
}

/// Applies button events to the shared display state
pub struct EventHandler<'a, B: Backlight> {
    state: &'a DisplayState,
    lines: LineMap,
    backlight: B,
    step: u16,
}

impl<'a, B: Backlight> EventHandler<'a, B> {
    /// Bind a backlight to the shared state
    ///
    /// Fails with `Rejected` if the backlight's range differs from the
    /// state's, since levels from the state would then be out of range.
    pub fn new(
        state: &'a DisplayState,
        lines: LineMap,
        backlight: B,
        step: u16,
    ) -> Result<Self, HardwareCommandError> {
        if backlight.max_level() != state.max_level() {
            return Err(HardwareCommandError::Rejected);
        }
        Ok(Self {
            state,
            lines,
            backlight,
            step,
        })
    }

    /// Push the current level to the backlight
    ///
    /// Called once at startup so the output matches the initial state.
    pub fn restore_backlight(&mut self) -> Result<(), HardwareCommandError> {
        self.backlight.set_brightness(self.state.backlight_level())
    }

    /// Handle one event
    pub fn handle(&mut self, event: ButtonEvent) -> HandlerOutcome {
        let line = match self.lines.resolve(event.pin) {
            Ok(line) => line,
            Err(e) => return HandlerOutcome::Ignored(e),
        };

        match line.page() {
            Some(page) => {
                self.state.select_page(page);
                HandlerOutcome::PageSelected(page)
            }
            None => {
                let level = self.state.step_backlight(self.step);
                let result = self.backlight.set_brightness(level);
                HandlerOutcome::Backlight { level, result }
            }
        }
    }

    /// Backlight this handler drives
    pub fn backlight(&self) -> &B {
        &self.backlight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PINS: LineMap = LineMap::new([17, 22, 23, 27]);

    #[derive(Default)]
    struct RecordingBacklight {
        levels: Vec<u16>,
        fail: bool,
    }

    impl Backlight for RecordingBacklight {
        fn set_brightness(&mut self, level: u16) -> Result<(), HardwareCommandError> {
            if self.fail {
                return Err(HardwareCommandError::Unavailable);
            }
            self.levels.push(level);
            Ok(())
        }

        fn max_level(&self) -> u16 {
            1000
        }
    }

    #[test]
    fn test_page_events_select_page() {
        let state = DisplayState::new(1000);
        let mut handler = EventHandler::new(&state, PINS, RecordingBacklight::default(), 200).unwrap();

        assert_eq!(
            handler.handle(ButtonEvent { pin: 22 }),
            HandlerOutcome::PageSelected(Page::Two)
        );
        assert_eq!(state.active_page(), Page::Two);
        assert_eq!(
            handler.handle(ButtonEvent { pin: 23 }),
            HandlerOutcome::PageSelected(Page::Three)
        );
        assert_eq!(state.active_page(), Page::Three);
        assert!(handler.backlight().levels.is_empty());
    }

    #[test]
    fn test_brightness_events_drive_backlight() {
        let state = DisplayState::new(1000);
        let mut handler = EventHandler::new(&state, PINS, RecordingBacklight::default(), 200).unwrap();

        for _ in 0..6 {
            handler.handle(ButtonEvent { pin: 27 });
        }
        assert_eq!(handler.backlight().levels, [800, 600, 400, 200, 0, 1000]);
        assert_eq!(state.active_page(), Page::One);
    }

    #[test]
    fn test_backlight_failure_still_updates_level() {
        let state = DisplayState::new(1000);
        let backlight = RecordingBacklight {
            fail: true,
            ..Default::default()
        };
        let mut handler = EventHandler::new(&state, PINS, backlight, 200).unwrap();

        assert_eq!(
            handler.handle(ButtonEvent { pin: 27 }),
            HandlerOutcome::Backlight {
                level: 800,
                result: Err(HardwareCommandError::Unavailable),
            }
        );
        assert_eq!(state.backlight_level(), 800);
    }

    #[test]
    fn test_unknown_channel_is_ignored() {
        let state = DisplayState::new(1000);
        state.select_page(Page::Two);
        let mut handler = EventHandler::new(&state, PINS, RecordingBacklight::default(), 200).unwrap();

        let before = state.snapshot();
        assert_eq!(
            handler.handle(ButtonEvent { pin: 4 }),
            HandlerOutcome::Ignored(InputError::UnknownChannel(4))
        );
        assert_eq!(state.snapshot(), before);
        assert!(handler.backlight().levels.is_empty());
    }

    #[test]
    fn test_restore_backlight_applies_initial_level() {
        let state = DisplayState::new(1000);
        let mut handler = EventHandler::new(&state, PINS, RecordingBacklight::default(), 100).unwrap();
        handler.restore_backlight().unwrap();
        assert_eq!(handler.backlight().levels, [1000]);
    }

    #[test]
    fn test_mismatched_backlight_range_is_rejected() {
        let state = DisplayState::new(255);
        let handler = EventHandler::new(&state, PINS, RecordingBacklight::default(), 51);
        assert!(matches!(handler, Err(HardwareCommandError::Rejected)));
    }
}
