//! Debounced button input
//!
//! Buttons are wired active-low with a pull-up unless configured as
//! inverted. The driver follows the line level with interrupt-driven
//! waits and feeds every observed change through the debounce filter;
//! only accepted presses (falling edges for active-low lines) resolve
//! [`ButtonInput::wait_for_press`].

use thermopane_core::cleanup::Release;
use thermopane_core::debounce::ButtonState;
use thermopane_core::traits::{ButtonInput, InputError};
use thermopane_hal::{Clock, EdgeInput};

/// One debounced button line
pub struct DebouncedButton<E: EdgeInput, C: Clock> {
    pin: E,
    clock: C,
    state: ButtonState,
    inverted: bool,
    released: bool,
}

impl<E: EdgeInput, C: Clock> DebouncedButton<E, C> {
    /// Wrap an input line
    ///
    /// `inverted` marks an active-high button.
    pub fn new(pin: E, clock: C, debounce_ms: u32, inverted: bool) -> Self {
        Self {
            pin,
            clock,
            state: ButtonState::new(debounce_ms),
            inverted,
            released: false,
        }
    }

    fn is_active(&self) -> bool {
        self.pin.is_low() != self.inverted
    }

    /// Wait until the line leaves the given active state
    async fn wait_for_change(&mut self, active: bool) -> Result<(), InputError> {
        // Active-low: pressed waits for high, released waits for low
        let wait_high = active != self.inverted;
        let result = if wait_high {
            self.pin.wait_for_high().await
        } else {
            self.pin.wait_for_low().await
        };
        result.map_err(|_| InputError::LineUnavailable)
    }
}

impl<E: EdgeInput, C: Clock> ButtonInput for DebouncedButton<E, C> {
    fn pin(&self) -> u8 {
        self.pin.pin_number()
    }

    async fn wait_for_press(&mut self) -> Result<(), InputError> {
        loop {
            if self.released {
                return Err(InputError::LineUnavailable);
            }

            // Feed every sample so bounces restart the window
            let active = self.is_active();
            if self.state.just_pressed(active, self.clock.now_ms()) {
                return Ok(());
            }

            self.wait_for_change(active).await?;
        }
    }
}

impl<E: EdgeInput, C: Clock> Release for DebouncedButton<E, C> {
    fn release(&mut self) {
        self.released = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;
    use std::cell::Cell;
    use std::collections::VecDeque;
    use std::rc::Rc;
    use thermopane_hal::{GpioError, InputPin};

    /// Scripted line: each entry is (time_ms, level_high)
    struct ScriptedLine {
        high: bool,
        changes: VecDeque<(u64, bool)>,
        now: Rc<Cell<u64>>,
    }

    impl ScriptedLine {
        fn advance(&mut self) -> Result<(), GpioError> {
            let (t, high) = self.changes.pop_front().ok_or(GpioError::Released)?;
            self.now.set(t);
            self.high = high;
            Ok(())
        }
    }

    impl InputPin for ScriptedLine {
        fn is_high(&self) -> bool {
            self.high
        }
    }

    impl EdgeInput for ScriptedLine {
        async fn wait_for_low(&mut self) -> Result<(), GpioError> {
            while self.high {
                self.advance()?;
            }
            Ok(())
        }

        async fn wait_for_high(&mut self) -> Result<(), GpioError> {
            while !self.high {
                self.advance()?;
            }
            Ok(())
        }

        fn pin_number(&self) -> u8 {
            27
        }
    }

    struct SharedClock(Rc<Cell<u64>>);

    impl Clock for SharedClock {
        fn now_ms(&self) -> u64 {
            self.0.get()
        }
    }

    fn button(changes: &[(u64, bool)], inverted: bool) -> DebouncedButton<ScriptedLine, SharedClock> {
        let now = Rc::new(Cell::new(0));
        let line = ScriptedLine {
            high: !inverted,
            changes: changes.iter().copied().collect(),
            now: now.clone(),
        };
        DebouncedButton::new(line, SharedClock(now), 50, inverted)
    }

    fn count_presses(button: &mut DebouncedButton<ScriptedLine, SharedClock>) -> usize {
        let mut presses = 0;
        while block_on(button.wait_for_press()).is_ok() {
            presses += 1;
        }
        presses
    }

    #[test]
    fn test_clean_presses() {
        let mut b = button(
            &[(100, false), (200, true), (400, false), (500, true)],
            false,
        );
        assert_eq!(b.pin(), 27);
        assert_eq!(count_presses(&mut b), 2);
    }

    #[test]
    fn test_bouncy_press_counts_once() {
        let mut b = button(
            &[
                (100, false),
                (102, true),
                (104, false),
                (106, true),
                (108, false),
                (300, true),
                (303, false),
                (305, true),
            ],
            false,
        );
        assert_eq!(count_presses(&mut b), 1);
    }

    #[test]
    fn test_inverted_line() {
        let mut b = button(&[(100, true), (200, false), (400, true)], true);
        assert_eq!(count_presses(&mut b), 2);
    }

    #[test]
    fn test_released_line_stops() {
        let mut b = button(&[(100, false)], false);
        b.release();
        assert_eq!(
            block_on(b.wait_for_press()),
            Err(InputError::LineUnavailable)
        );
    }
}
