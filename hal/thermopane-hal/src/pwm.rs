//! PWM output abstractions

/// A single PWM output channel
///
/// The duty cycle is `compare / (top + 1)`. Writes are register updates
/// and never block.
pub trait PwmChannel {
    /// Set the counter wrap value
    fn set_top(&mut self, top: u16);

    /// Set the compare value (output high while counter < compare)
    fn set_compare(&mut self, compare: u16);

    /// Enable or disable the slice driving this channel
    fn set_enabled(&mut self, enabled: bool);

    /// Current wrap value
    fn top(&self) -> u16;
}
