//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in thermopane-core on top of the thermopane-hal traits:
//!
//! - Backlight (PWM duty cycle)
//! - Temperature sensors (NTC thermistor, RP2040 on-die sensor)
//! - Button input (edge waits with debounce)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod backlight;
pub mod input;
pub mod sensor;
