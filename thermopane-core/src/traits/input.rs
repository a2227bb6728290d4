//! Button input trait

use core::future::Future;

/// Errors raised on the input path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputError {
    /// Event carried a GPIO number no line is wired to
    UnknownChannel(u8),
    /// The input line stopped delivering edges
    LineUnavailable,
}

/// Source of debounced button presses for one line
///
/// Implementations wait on a falling edge (active-low buttons with
/// pull-ups) and filter contact bounce before resolving.
pub trait ButtonInput {
    /// GPIO number this input is attached to
    fn pin(&self) -> u8;

    /// Wait for the next accepted press
    fn wait_for_press(&mut self) -> impl Future<Output = Result<(), InputError>>;
}
