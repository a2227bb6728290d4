//! Shared display state
//!
//! One `DisplayState` exists per process. The event handler is the only
//! writer; the render loop reads it once per tick. Both fields are atomics
//! so neither side ever takes a lock, and the backlight step is a single
//! read-modify-write so concurrent presses are never lost.

use portable_atomic::{AtomicU16, AtomicU8, Ordering};

use crate::line::Page;

/// Next backlight level after one brightness press
///
/// Steps down by `step`, wrapping to `max` once the level has reached 0.
pub fn next_backlight_level(level: u16, step: u16, max: u16) -> u16 {
    if level == 0 {
        max
    } else {
        level.saturating_sub(step)
    }
}

/// Copy of the state at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplaySnapshot {
    pub active_page: Page,
    pub backlight_level: u16,
}

/// Current page and backlight level
pub struct DisplayState {
    page: AtomicU8,
    level: AtomicU16,
    max_level: u16,
}

impl DisplayState {
    /// Start on page one at full brightness
    pub const fn new(max_level: u16) -> Self {
        Self {
            page: AtomicU8::new(Page::One.index()),
            level: AtomicU16::new(max_level),
            max_level,
        }
    }

    /// Currently selected page
    pub fn active_page(&self) -> Page {
        // Only `select_page` stores, so the index is always valid
        Page::from_index(self.page.load(Ordering::Acquire)).unwrap_or(Page::One)
    }

    /// Select a page
    pub fn select_page(&self, page: Page) {
        self.page.store(page.index(), Ordering::Release);
    }

    /// Current backlight level
    pub fn backlight_level(&self) -> u16 {
        self.level.load(Ordering::Acquire)
    }

    /// Level the backlight starts at and wraps back to
    pub fn max_level(&self) -> u16 {
        self.max_level
    }

    /// Apply one brightness press, returning the new level
    pub fn step_backlight(&self, step: u16) -> u16 {
        let max = self.max_level;
        let previous = match self.level.fetch_update(Ordering::AcqRel, Ordering::Acquire, |l| {
            Some(next_backlight_level(l, step, max))
        }) {
            Ok(prev) | Err(prev) => prev,
        };
        next_backlight_level(previous, step, max)
    }

    /// Read both fields
    ///
    /// Each field is read atomically; the pair is not a single
    /// transaction.
    pub fn snapshot(&self) -> DisplaySnapshot {
        DisplaySnapshot {
            active_page: self.active_page(),
            backlight_level: self.backlight_level(),
        }
    }
}
