//! Temperature sensor trait

use core::future::Future;

/// Errors that can occur with temperature sensing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Sensor disconnected (open circuit)
    OpenCircuit,
    /// Sensor shorted to ground
    ShortCircuit,
    /// Reading out of expected range
    OutOfRange,
    /// ADC conversion error
    ConversionError,
}

/// Trait for temperature sensors
///
/// Implementations should handle the specific sensor type (NTC thermistor,
/// on-die sensor, etc.)
pub trait TemperatureSensor {
    /// Read the current temperature in degrees Celsius
    ///
    /// Takes `&mut self` because ADC reads typically require mutable access.
    fn read_temperature(&mut self) -> impl Future<Output = Result<f32, SensorError>>;
}
