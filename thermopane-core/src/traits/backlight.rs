//! Backlight control trait

/// Errors returned by hardware command side effects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HardwareCommandError {
    /// Level outside the range the hardware accepts
    Rejected,
    /// Output released or not yet configured
    Unavailable,
}

/// Backlight brightness output
///
/// Commands are fire-and-forget register writes; implementations
/// must not block.
pub trait Backlight {
    /// Apply a brightness level in `0..=max_level`
    fn set_brightness(&mut self, level: u16) -> Result<(), HardwareCommandError>;

    /// Highest accepted level
    fn max_level(&self) -> u16;
}
