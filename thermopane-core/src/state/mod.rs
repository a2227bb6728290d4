//! Shared display state and the button event handler

mod display;
mod handler;

pub use display::{next_backlight_level, DisplaySnapshot, DisplayState};
pub use handler::{EventHandler, HandlerOutcome};
