//! Frame sink trait
//!
//! Defines where a finished framebuffer goes.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::DrawTarget;
use thermopane_core::cleanup::Release;

use crate::framebuffer::FrameBuffer;

/// Frame sink errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SinkError {
    /// Communication error with the panel
    Communication,
    /// Panel released or not initialized
    NotReady,
}

/// Destination for finished frames
pub trait FrameSink {
    /// Check if the panel can accept a frame
    fn is_ready(&self) -> bool;

    /// Send the changed region of a frame to the panel
    fn push(&mut self, frame: &mut FrameBuffer<'_>) -> Result<(), SinkError>;
}

/// Sink over any `embedded-graphics` draw target (panel drivers, simulators)
pub struct DrawTargetSink<D> {
    display: D,
    ready: bool,
}

impl<D: DrawTarget<Color = Rgb565>> DrawTargetSink<D> {
    pub fn new(display: D) -> Self {
        Self {
            display,
            ready: true,
        }
    }

    /// Wrapped display
    pub fn display(&self) -> &D {
        &self.display
    }
}

impl<D: DrawTarget<Color = Rgb565>> FrameSink for DrawTargetSink<D> {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn push(&mut self, frame: &mut FrameBuffer<'_>) -> Result<(), SinkError> {
        if !self.ready {
            return Err(SinkError::NotReady);
        }
        frame
            .flush(&mut self.display)
            .map_err(|_| SinkError::Communication)
    }
}

impl<D> Release for DrawTargetSink<D> {
    fn release(&mut self) {
        self.ready = false;
    }
}
