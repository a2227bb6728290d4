//! Thermopane Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the panel drivers are written
//! against. Chip-specific adapters (the RP2040 firmware, host test doubles)
//! implement them, so the same drivers run on any board.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  thermopane-firmware (embassy adapters) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  thermopane-drivers                     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  thermopane-hal (this crate - traits)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::InputPin`], [`gpio::EdgeInput`] - Digital input and edge waits
//! - [`pwm::PwmChannel`] - Duty-cycle output
//! - [`adc::AdcReader`] - Analog sampling
//! - [`time::Clock`] - Monotonic milliseconds

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;
pub mod pwm;
pub mod time;

// Re-export key traits at crate root for convenience
pub use adc::{AdcError, AdcReader};
pub use gpio::{EdgeInput, GpioError, InputPin};
pub use pwm::PwmChannel;
pub use time::Clock;
