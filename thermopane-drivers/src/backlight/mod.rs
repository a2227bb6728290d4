//! Backlight drivers

pub mod pwm;

pub use pwm::PwmBacklight;
