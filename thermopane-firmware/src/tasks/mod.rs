//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels or the
//! shared display state.

pub mod buttons;
pub mod controller;
pub mod render;

pub use buttons::{button_task, PanelButton};
pub use controller::{controller_task, ControllerConfig};
pub use render::{render_task, RenderTaskConfig};
