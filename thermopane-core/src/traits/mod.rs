//! Capability traits
//!
//! These traits define the seams between the board-agnostic logic and
//! the hardware-specific implementations.

pub mod backlight;
pub mod input;
pub mod renderer;
pub mod sensor;

pub use backlight::{Backlight, HardwareCommandError};
pub use input::{ButtonInput, InputError};
pub use renderer::{RenderError, Renderer};
pub use sensor::{SensorError, TemperatureSensor};
