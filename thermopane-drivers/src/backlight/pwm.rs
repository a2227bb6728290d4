//! PWM backlight driver
//!
//! Brightness level maps directly to the compare value with the counter
//! wrapping at `max_level - 1`, so level 0 is fully off and `max_level`
//! is fully on.

use thermopane_core::cleanup::Release;
use thermopane_core::traits::{Backlight, HardwareCommandError};
use thermopane_hal::PwmChannel;

/// Backlight driven by one PWM channel
pub struct PwmBacklight<P: PwmChannel> {
    pwm: P,
    max_level: u16,
    released: bool,
}

impl<P: PwmChannel> PwmBacklight<P> {
    /// Configure the channel for `0..=max_level` and start dark
    pub fn new(mut pwm: P, max_level: u16) -> Self {
        pwm.set_top(max_level.saturating_sub(1));
        pwm.set_compare(0);
        pwm.set_enabled(true);
        Self {
            pwm,
            max_level,
            released: false,
        }
    }

    /// Underlying channel
    pub fn channel(&self) -> &P {
        &self.pwm
    }
}

impl<P: PwmChannel> Backlight for PwmBacklight<P> {
    fn set_brightness(&mut self, level: u16) -> Result<(), HardwareCommandError> {
        if self.released {
            return Err(HardwareCommandError::Unavailable);
        }
        if level > self.max_level {
            return Err(HardwareCommandError::Rejected);
        }
        self.pwm.set_compare(level);
        Ok(())
    }

    fn max_level(&self) -> u16 {
        self.max_level
    }
}

impl<P: PwmChannel> Release for PwmBacklight<P> {
    fn release(&mut self) {
        self.pwm.set_compare(0);
        self.pwm.set_enabled(false);
        self.released = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thermopane_core::cleanup::ReleaseGuard;

    #[derive(Default)]
    struct MockPwm {
        top: u16,
        compare: u16,
        enabled: bool,
    }

    impl PwmChannel for MockPwm {
        fn set_top(&mut self, top: u16) {
            self.top = top;
        }

        fn set_compare(&mut self, compare: u16) {
            self.compare = compare;
        }

        fn set_enabled(&mut self, enabled: bool) {
            self.enabled = enabled;
        }

        fn top(&self) -> u16 {
            self.top
        }
    }

    #[test]
    fn test_new_configures_channel() {
        let backlight = PwmBacklight::new(MockPwm::default(), 1000);
        assert_eq!(backlight.channel().top(), 999);
        assert_eq!(backlight.channel().compare, 0);
        assert!(backlight.channel().enabled);
        assert_eq!(backlight.max_level(), 1000);
    }

    #[test]
    fn test_compare_tracks_level() {
        let mut backlight = PwmBacklight::new(MockPwm::default(), 1000);
        backlight.set_brightness(1000).unwrap();
        assert_eq!(backlight.channel().compare, 1000);
        backlight.set_brightness(400).unwrap();
        assert_eq!(backlight.channel().compare, 400);
        backlight.set_brightness(0).unwrap();
        assert_eq!(backlight.channel().compare, 0);
    }

    #[test]
    fn test_level_above_max_rejected() {
        let mut backlight = PwmBacklight::new(MockPwm::default(), 1000);
        backlight.set_brightness(600).unwrap();
        assert_eq!(
            backlight.set_brightness(1001),
            Err(HardwareCommandError::Rejected)
        );
        assert_eq!(backlight.channel().compare, 600);
    }

    #[test]
    fn test_release_disables_output() {
        let mut guard = ReleaseGuard::new(PwmBacklight::new(MockPwm::default(), 1000));
        guard.set_brightness(800).unwrap();
        guard.release();
        assert_eq!(guard.channel().compare, 0);
        assert!(!guard.channel().enabled);
        assert_eq!(
            guard.set_brightness(800),
            Err(HardwareCommandError::Unavailable)
        );
    }
}
