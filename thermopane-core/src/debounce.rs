//! Button debounce handling
//!
//! Provides time-based edge detection with debouncing to prevent
//! multiple triggers from contact bounce on physical buttons. Time is
//! passed in by the caller so the filter works with any clock.

/// Default debounce window in milliseconds
pub const DEFAULT_DEBOUNCE_MS: u32 = 50;

/// Button debounce state with time-based edge detection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonState {
    window_ms: u32,
    was_pressed: bool,
    /// Last sampled raw level (true = low)
    last_level: bool,
    /// Time of the last raw level change
    last_change_ms: Option<u64>,
}

impl ButtonState {
    /// Create a new button state (not pressed)
    pub const fn new(window_ms: u32) -> Self {
        Self {
            window_ms,
            was_pressed: false,
            last_level: false,
            last_change_ms: None,
        }
    }

    /// Returns true only on the falling edge (button just pressed)
    ///
    /// Buttons are active-low, so `is_low` means pressed. Every sample
    /// should be fed in, including ones that match the current state, so
    /// that raw level changes restart the debounce window. A press is
    /// accepted only when the line held its previous level for at least
    /// the window; releases are always accepted.
    pub fn just_pressed(&mut self, is_low: bool, now_ms: u64) -> bool {
        let stable_ms = self.last_change_ms.map(|t| now_ms.saturating_sub(t));
        if is_low != self.last_level {
            self.last_level = is_low;
            self.last_change_ms = Some(now_ms);
        }

        if is_low == self.was_pressed {
            return false;
        }
        if is_low && stable_ms.is_some_and(|ms| ms < u64::from(self.window_ms)) {
            return false;
        }

        self.was_pressed = is_low;
        is_low
    }

    /// Debounced pressed state
    pub fn is_pressed(&self) -> bool {
        self.was_pressed
    }
}

impl Default for ButtonState {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}
