//! Status page renderer
//!
//! Paints a render spec as a full-canvas background in the zone colour
//! with the message drawn from the text origin, one line per `\n`.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Baseline, Text};
use profont::PROFONT_24_POINT;

use thermopane_core::cleanup::Release;
use thermopane_core::render::RenderSpec;
use thermopane_core::traits::{RenderError, Renderer};

use crate::framebuffer::FrameBuffer;
use crate::palette::to_rgb565;
use crate::sink::{FrameSink, SinkError};

/// Renderer drawing into a framebuffer and pushing it to a sink
pub struct PanelRenderer<'a, S: FrameSink> {
    frame: FrameBuffer<'a>,
    sink: S,
    /// Spec currently held in the framebuffer
    last: Option<RenderSpec>,
}

impl<'a, S: FrameSink> PanelRenderer<'a, S> {
    pub fn new(frame: FrameBuffer<'a>, sink: S) -> Self {
        Self {
            frame,
            sink,
            last: None,
        }
    }

    /// Last drawn frame
    pub fn frame(&self) -> &FrameBuffer<'a> {
        &self.frame
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn draw(&mut self, spec: &RenderSpec) -> Result<(), RenderError> {
        // ProFont covers printable ASCII only
        if !spec.message.chars().all(|c| c == '\n' || c.is_ascii_graphic() || c == ' ') {
            return Err(RenderError::AssetMissing);
        }

        let g = spec.geometry;
        let canvas = Rectangle::new(
            Point::zero(),
            Size::new(u32::from(g.width), u32::from(g.height)),
        );
        if !self.frame.bounding_box().contains(canvas.bottom_right().unwrap_or_default()) {
            return Err(RenderError::AssetMissing);
        }

        let background: Rgb565 = to_rgb565(spec.background);
        let style = MonoTextStyle::new(&PROFONT_24_POINT, to_rgb565(spec.foreground));
        let origin = Point::new(i32::from(g.text_x), i32::from(g.text_y));

        // Drawing into RAM cannot fail
        self.frame.fill_solid(&canvas, background).ok();
        Text::with_baseline(&spec.message, origin, style, Baseline::Top)
            .draw(&mut self.frame.clipped(&canvas))
            .ok();
        Ok(())
    }
}

impl<S: FrameSink> Renderer for PanelRenderer<'_, S> {
    fn render_and_display(&mut self, spec: &RenderSpec) -> Result<(), RenderError> {
        if !self.sink.is_ready() {
            return Err(RenderError::DeviceUnavailable);
        }

        // Redrawing the same spec would re-dirty every glyph pixel
        if self.last.as_ref() != Some(spec) {
            self.draw(spec)?;
            self.last = Some(spec.clone());
        }
        // A no-op when clean; retries a frame whose last push failed
        self.sink.push(&mut self.frame).map_err(|e| match e {
            SinkError::NotReady => RenderError::DeviceUnavailable,
            SinkError::Communication => RenderError::Io,
        })
    }
}

impl<S: FrameSink + Release> Release for PanelRenderer<'_, S> {
    fn release(&mut self) {
        self.sink.release();
    }
}
