//! Embassy adapters for the HAL traits

pub mod adc;
pub mod gpio;
pub mod pwm;
pub mod sensor;
pub mod time;

pub use adc::RpAdc;
pub use gpio::RpInput;
pub use pwm::RpPwm;
pub use sensor::PanelSensor;
pub use time::EmbassyClock;
