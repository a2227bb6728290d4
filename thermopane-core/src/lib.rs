//! Board-agnostic core logic for the temperature panel firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Capability traits (button input, backlight, sensor, renderer)
//! - Shared display state and the button event handler
//! - Temperature zone classification and render specs
//! - The periodic render tick
//! - Configuration types, parser and validation
//! - Button debounce and hardware release guards

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod cleanup;
pub mod config;
pub mod debounce;
pub mod input;
pub mod line;
pub mod render;
pub mod state;
pub mod traits;
pub mod zone;
