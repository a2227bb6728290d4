//! Status page renderer for Thermopane
//!
//! This crate provides:
//! - `FrameBuffer`, an in-RAM RGB565 draw target with dirty tracking
//! - `FrameSink` trait for pushing finished frames to a panel
//! - `PanelRenderer`, the `Renderer` that paints a render spec
//!
//! # Architecture
//!
//! Every frame is drawn into the framebuffer first. Only the rectangle of
//! pixels that changed since the last push is sent to the panel. A spec
//! equal to the one already drawn is not redrawn, so a steady reading
//! costs no bus traffic at all.

#![cfg_attr(not(test), no_std)]

pub mod framebuffer;
pub mod palette;
pub mod panel;
pub mod sink;

// Re-export key types
pub use framebuffer::FrameBuffer;
pub use panel::PanelRenderer;
pub use sink::{DrawTargetSink, FrameSink, SinkError};
