//! RP2040 on-die temperature sensor
//!
//! The sensor voltage is 0.706 V at 27°C and falls 1.721 mV per °C.

use thermopane_core::traits::{SensorError, TemperatureSensor};
use thermopane_hal::AdcReader;

/// Sensor voltage at 27°C, in volts
const V_27C: f32 = 0.706;

/// Slope, in volts per °C
const SLOPE_V_PER_C: f32 = 0.001721;

/// Operating range of the die, in °C
const MIN_C: f32 = -40.0;
const MAX_C: f32 = 125.0;

/// Convert a raw sample to degrees Celsius
pub fn raw_to_celsius(raw: u16, full_scale: u16, vref_mv: u16) -> f32 {
    let volts = f32::from(raw) * f32::from(vref_mv) / 1000.0 / (f32::from(full_scale) + 1.0);
    27.0 - (volts - V_27C) / SLOPE_V_PER_C
}

/// Temperature sensor on the RP2040 ADC channel 4
pub struct DieSensor<ADC> {
    adc: ADC,
}

impl<ADC: AdcReader> DieSensor<ADC> {
    pub fn new(adc: ADC) -> Self {
        Self { adc }
    }
}

impl<ADC: AdcReader> TemperatureSensor for DieSensor<ADC> {
    async fn read_temperature(&mut self) -> Result<f32, SensorError> {
        let raw = self
            .adc
            .read()
            .await
            .map_err(|_| SensorError::ConversionError)?;
        if raw == 0 || raw >= ADC::FULL_SCALE {
            return Err(SensorError::ConversionError);
        }

        let celsius = raw_to_celsius(raw, ADC::FULL_SCALE, ADC::VREF_MV);
        if !(MIN_C..=MAX_C).contains(&celsius) {
            return Err(SensorError::OutOfRange);
        }
        Ok(celsius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;
    use thermopane_hal::AdcError;

    struct FixedAdc(u16);

    impl AdcReader for FixedAdc {
        const FULL_SCALE: u16 = 4095;
        const VREF_MV: u16 = 3300;

        async fn read(&mut self) -> Result<u16, AdcError> {
            Ok(self.0)
        }
    }

    #[test]
    fn test_reference_point() {
        // 0.706 V on a 3.3 V, 12-bit converter
        let raw = (0.706 / 3.3 * 4096.0) as u16;
        let t = raw_to_celsius(raw, 4095, 3300);
        assert!((t - 27.0).abs() < 0.5, "got {t}");
    }

    #[test]
    fn test_warmer_die_reads_lower_voltage() {
        let cool = raw_to_celsius(900, 4095, 3300);
        let warm = raw_to_celsius(850, 4095, 3300);
        assert!(warm > cool);
    }

    #[test]
    fn test_read_rejects_rails() {
        let mut sensor = DieSensor::new(FixedAdc(0));
        assert_eq!(
            block_on(sensor.read_temperature()),
            Err(SensorError::ConversionError)
        );

        let mut sensor = DieSensor::new(FixedAdc(4095));
        assert_eq!(
            block_on(sensor.read_temperature()),
            Err(SensorError::ConversionError)
        );
    }

    #[test]
    fn test_read_out_of_range() {
        // ~0.26 V would mean a die far above 125°C
        let mut sensor = DieSensor::new(FixedAdc(320));
        assert_eq!(
            block_on(sensor.read_temperature()),
            Err(SensorError::OutOfRange)
        );
    }

    #[test]
    fn test_read_room_temperature() {
        let mut sensor = DieSensor::new(FixedAdc(876));
        let t = block_on(sensor.read_temperature()).unwrap();
        assert!((20.0..35.0).contains(&t), "got {t}");
    }
}
