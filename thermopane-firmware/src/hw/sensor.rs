//! Temperature source selected by config

use thermopane_core::traits::{SensorError, TemperatureSensor};
use thermopane_drivers::sensor::{DieSensor, Ntc100kSensor};

use super::adc::RpAdc;

/// The sensor wired up at boot
pub enum PanelSensor {
    /// RP2040 internal temperature sensor
    Die(DieSensor<RpAdc>),
    /// External 100K thermistor
    Ntc(Ntc100kSensor<RpAdc>),
}

impl TemperatureSensor for PanelSensor {
    async fn read_temperature(&mut self) -> Result<f32, SensorError> {
        match self {
            PanelSensor::Die(sensor) => sensor.read_temperature().await,
            PanelSensor::Ntc(sensor) => sensor.read_temperature().await,
        }
    }
}
