//! Colour conversion from render specs to panel pixels

use embedded_graphics::pixelcolor::{Rgb565, Rgb888};
use thermopane_core::zone::Rgb;

/// Convert an 8-bit RGB colour to the panel format
pub fn to_rgb565(color: Rgb) -> Rgb565 {
    Rgb888::new(color.r, color.g, color.b).into()
}
