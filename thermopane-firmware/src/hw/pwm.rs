//! PWM output adapter

use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use thermopane_hal::PwmChannel;

/// Channel A of one PWM slice
///
/// Keeps a copy of the slice config since embassy applies it whole.
pub struct RpPwm {
    pwm: Pwm<'static>,
    config: PwmConfig,
}

impl RpPwm {
    pub fn new(pwm: Pwm<'static>) -> Self {
        let mut config = PwmConfig::default();
        config.compare_a = 0;
        config.enable = false;
        Self { pwm, config }
    }

    fn apply(&mut self) {
        self.pwm.set_config(&self.config);
    }
}

impl PwmChannel for RpPwm {
    fn set_top(&mut self, top: u16) {
        self.config.top = top;
        self.apply();
    }

    fn set_compare(&mut self, compare: u16) {
        self.config.compare_a = compare;
        self.apply();
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.config.enable = enabled;
        self.apply();
    }

    fn top(&self) -> u16 {
        self.config.top
    }
}
