//! Button input drivers

pub mod button;

pub use button::DebouncedButton;
