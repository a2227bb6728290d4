//! NTC 100K thermistor sensor
//!
//! Uses a lookup table with linear interpolation, dense around room
//! temperature where the panel zones sit.

use thermopane_core::traits::{SensorError, TemperatureSensor};
use thermopane_hal::AdcReader;

/// NTC 100K thermistor temperature lookup table
///
/// Table format: (resistance_ohms, temperature_c)
/// Generated using beta equation with:
/// - R0 = 100,000 ohms at T0 = 25°C
/// - Beta = 3950K (typical for 100K NTC)
///
/// Temperature range: -20°C to 100°C
const TEMP_TABLE: &[(u32, f32)] = &[
    (1_053_847, -20.0),
    (582_457, -10.0),
    (336_206, 0.0),
    (201_746, 10.0),
    (158_371, 15.0),
    (125_353, 20.0),
    (114_415, 22.0),
    (104_559, 24.0),
    (100_000, 25.0), // R0
    (95_668, 26.0),
    (87_636, 28.0),
    (80_371, 30.0),
    (65_055, 35.0),
    (53_015, 40.0),
    (35_882, 50.0),
    (24_862, 60.0),
    (12_703, 80.0),
    (6_975, 100.0),
];

/// Raw counts treated as a rail (open or shorted thermistor)
const RAIL_MARGIN: u16 = 10;

/// NTC 100K thermistor with B=3950
///
/// Circuit: VCC -- pullup -- ADC_PIN -- NTC -- GND
pub struct Ntc100kSensor<ADC> {
    adc: ADC,
    /// Pull-up resistor value in ohms
    pullup_ohms: u32,
}

impl<ADC: AdcReader> Ntc100kSensor<ADC> {
    /// Create a new NTC sensor
    ///
    /// # Arguments
    /// - `adc`: ADC channel for reading thermistor
    /// - `pullup_ohms`: Pull-up resistor value (typically 100K for room range)
    pub fn new(adc: ADC, pullup_ohms: u32) -> Self {
        Self { adc, pullup_ohms }
    }

    /// Convert ADC reading to resistance
    ///
    /// R_ntc = R_pullup * adc_value / (adc_max - adc_value)
    pub fn adc_to_resistance(&self, adc_value: u16) -> Result<u32, SensorError> {
        let adc_max = u32::from(ADC::FULL_SCALE) + 1;

        if u32::from(adc_value) + u32::from(RAIL_MARGIN) >= adc_max {
            return Err(SensorError::OpenCircuit);
        }
        if adc_value < RAIL_MARGIN {
            return Err(SensorError::ShortCircuit);
        }

        let numerator = u64::from(self.pullup_ohms) * u64::from(adc_value);
        let denominator = u64::from(adc_max - u32::from(adc_value));
        u32::try_from(numerator / denominator).map_err(|_| SensorError::OutOfRange)
    }
}

/// Calculate temperature from resistance using lookup table
///
/// Uses linear interpolation between table entries.
pub fn resistance_to_celsius(resistance: u32) -> Result<f32, SensorError> {
    let (r_coldest, _) = TEMP_TABLE[0];
    let (r_hottest, _) = TEMP_TABLE[TEMP_TABLE.len() - 1];
    if resistance > r_coldest || resistance < r_hottest {
        return Err(SensorError::OutOfRange);
    }

    // Table is sorted by decreasing resistance (increasing temperature)
    TEMP_TABLE
        .windows(2)
        .find(|w| resistance <= w[0].0 && resistance >= w[1].0)
        .map(|w| {
            let (r_high, t_low) = w[0];
            let (r_low, t_high) = w[1];
            let fraction = (r_high - resistance) as f32 / (r_high - r_low) as f32;
            t_low + (t_high - t_low) * fraction
        })
        .ok_or(SensorError::OutOfRange)
}

impl<ADC: AdcReader> TemperatureSensor for Ntc100kSensor<ADC> {
    async fn read_temperature(&mut self) -> Result<f32, SensorError> {
        let adc_value = self
            .adc
            .read()
            .await
            .map_err(|_| SensorError::ConversionError)?;
        let resistance = self.adc_to_resistance(adc_value)?;
        resistance_to_celsius(resistance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;
    use proptest::prelude::*;
    use thermopane_hal::AdcError;

    /// Dummy ADC for testing (returns a fixed value)
    struct DummyAdc(Result<u16, AdcError>);

    impl AdcReader for DummyAdc {
        const FULL_SCALE: u16 = 4095;
        const VREF_MV: u16 = 3300;

        async fn read(&mut self) -> Result<u16, AdcError> {
            self.0
        }
    }

    #[test]
    fn test_resistance_to_celsius() {
        assert_eq!(resistance_to_celsius(100_000), Ok(25.0));
        assert_eq!(resistance_to_celsius(6_975), Ok(100.0));

        let t = resistance_to_celsius(109_487).unwrap();
        assert!((t - 23.0).abs() < 0.1);

        assert_eq!(
            resistance_to_celsius(2_000_000),
            Err(SensorError::OutOfRange)
        );
        assert_eq!(resistance_to_celsius(1_000), Err(SensorError::OutOfRange));
    }

    #[test]
    fn test_adc_to_resistance() {
        let sensor = Ntc100kSensor::new(DummyAdc(Ok(0)), 100_000);
        // Midscale with equal divider resistors
        assert_eq!(sensor.adc_to_resistance(2048), Ok(100_000));
    }

    #[test]
    fn test_rails() {
        let sensor = Ntc100kSensor::new(DummyAdc(Ok(0)), 100_000);
        assert_eq!(sensor.adc_to_resistance(4095), Err(SensorError::OpenCircuit));
        assert_eq!(sensor.adc_to_resistance(0), Err(SensorError::ShortCircuit));
    }

    #[test]
    fn test_read_temperature() {
        let mut sensor = Ntc100kSensor::new(DummyAdc(Ok(2048)), 100_000);
        assert_eq!(block_on(sensor.read_temperature()), Ok(25.0));

        let mut sensor = Ntc100kSensor::new(DummyAdc(Err(AdcError::ConversionFailed)), 100_000);
        assert_eq!(
            block_on(sensor.read_temperature()),
            Err(SensorError::ConversionError)
        );
    }

    proptest! {
        #[test]
        fn prop_hotter_as_resistance_falls(r in 6_975u32..1_053_847, delta in 1u32..5_000) {
            let r_low = r.saturating_sub(delta).max(6_975);
            let warm = resistance_to_celsius(r_low).unwrap();
            let cool = resistance_to_celsius(r).unwrap();
            prop_assert!(warm >= cool);
            prop_assert!((-20.0..=100.0).contains(&cool));
        }
    }
}
