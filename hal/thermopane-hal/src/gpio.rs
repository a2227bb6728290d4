//! GPIO pin abstractions
//!
//! Provides traits for digital input pins that can be implemented
//! by chip-specific HALs.

use core::future::Future;

/// GPIO errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GpioError {
    /// The line was released or reconfigured while waiting
    Released,
}

/// Digital input pin
///
/// Implementations should handle the actual hardware register reading
/// for the specific chip.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

/// Input pin with interrupt-driven waits
///
/// Each wait resolves at once if the pin is already at the requested
/// level, otherwise on the next edge that reaches it. Waiting on a level
/// rather than an edge means a transition between sampling the pin and
/// arming the interrupt is never missed.
pub trait EdgeInput: InputPin {
    /// Wait until the pin reads low (falling edge if currently high)
    fn wait_for_low(&mut self) -> impl Future<Output = Result<(), GpioError>>;

    /// Wait until the pin reads high (rising edge if currently low)
    fn wait_for_high(&mut self) -> impl Future<Output = Result<(), GpioError>>;

    /// GPIO number of this line, as reported in button events
    fn pin_number(&self) -> u8;
}
