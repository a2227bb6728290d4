//! ADC channel adapter

use embassy_rp::adc::{Adc, Async, Channel};
use thermopane_hal::{AdcError, AdcReader};

/// One ADC channel with exclusive use of the converter
pub struct RpAdc {
    adc: Adc<'static, Async>,
    channel: Channel<'static>,
}

impl RpAdc {
    pub fn new(adc: Adc<'static, Async>, channel: Channel<'static>) -> Self {
        Self { adc, channel }
    }
}

impl AdcReader for RpAdc {
    // 12-bit converter referenced to the 3.3V rail
    const FULL_SCALE: u16 = 4095;
    const VREF_MV: u16 = 3300;

    async fn read(&mut self) -> Result<u16, AdcError> {
        self.adc
            .read(&mut self.channel)
            .await
            .map_err(|_| AdcError::ConversionFailed)
    }
}
