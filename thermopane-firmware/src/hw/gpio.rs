//! GPIO input adapter

use embassy_rp::gpio::Input;
use thermopane_hal::{EdgeInput, GpioError, InputPin};

/// Button line backed by an embassy input with interrupt-driven waits
pub struct RpInput {
    input: Input<'static>,
    pin: u8,
}

impl RpInput {
    pub fn new(input: Input<'static>, pin: u8) -> Self {
        Self { input, pin }
    }
}

impl InputPin for RpInput {
    fn is_high(&self) -> bool {
        self.input.is_high()
    }
}

impl EdgeInput for RpInput {
    async fn wait_for_low(&mut self) -> Result<(), GpioError> {
        self.input.wait_for_low().await;
        Ok(())
    }

    async fn wait_for_high(&mut self) -> Result<(), GpioError> {
        self.input.wait_for_high().await;
        Ok(())
    }

    fn pin_number(&self) -> u8 {
        self.pin
    }
}
