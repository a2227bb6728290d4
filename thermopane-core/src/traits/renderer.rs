//! Renderer trait

use crate::render::RenderSpec;

/// Errors raised while producing or pushing a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderError {
    /// Font or image asset cannot represent the request
    AssetMissing,
    /// Output device not ready
    DeviceUnavailable,
    /// Transfer to the output device failed
    Io,
}

/// Produces a frame for a render spec and shows it on the panel
pub trait Renderer {
    /// Render the spec into a frame and push it to the display
    fn render_and_display(&mut self, spec: &RenderSpec) -> Result<(), RenderError>;
}
