//! Analog input abstractions

use core::future::Future;

/// ADC errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcError {
    /// Conversion did not complete
    ConversionFailed,
    /// Channel not configured
    InvalidChannel,
}

/// A single analog channel
pub trait AdcReader {
    /// Full-scale value of a raw sample (4095 for a 12-bit converter)
    const FULL_SCALE: u16;

    /// Reference voltage in millivolts
    const VREF_MV: u16;

    /// Sample the channel once
    fn read(&mut self) -> impl Future<Output = Result<u16, AdcError>>;
}
