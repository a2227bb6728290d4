//! Hardware release guard
//!
//! Wrapping a resource in [`ReleaseGuard`] ties its release to scope exit:
//! the resource is returned to a safe idle state when the owning task
//! returns, on early error returns included.

use core::ops::{Deref, DerefMut};

use crate::render::RenderSpec;
use crate::traits::{
    Backlight, ButtonInput, HardwareCommandError, InputError, RenderError, Renderer,
    SensorError, TemperatureSensor,
};

/// A hardware resource with a safe idle state
pub trait Release {
    /// Put the hardware into its idle state
    ///
    /// Must be idempotent.
    fn release(&mut self);
}

/// Releases the wrapped resource on drop
pub struct ReleaseGuard<T: Release> {
    inner: T,
}

impl<T: Release> ReleaseGuard<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T: Release> Deref for ReleaseGuard<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T: Release> DerefMut for ReleaseGuard<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.inner
    }
}

impl<T: Release> Drop for ReleaseGuard<T> {
    fn drop(&mut self) {
        self.inner.release();
    }
}

// Guarded resources stand in for the resource itself.

impl<T: Release + Backlight> Backlight for ReleaseGuard<T> {
    fn set_brightness(&mut self, level: u16) -> Result<(), HardwareCommandError> {
        self.inner.set_brightness(level)
    }

    fn max_level(&self) -> u16 {
        self.inner.max_level()
    }
}

impl<T: Release + ButtonInput> ButtonInput for ReleaseGuard<T> {
    fn pin(&self) -> u8 {
        self.inner.pin()
    }

    async fn wait_for_press(&mut self) -> Result<(), InputError> {
        self.inner.wait_for_press().await
    }
}

impl<T: Release + TemperatureSensor> TemperatureSensor for ReleaseGuard<T> {
    async fn read_temperature(&mut self) -> Result<f32, SensorError> {
        self.inner.read_temperature().await
    }
}

impl<T: Release + Renderer> Renderer for ReleaseGuard<T> {
    fn render_and_display(&mut self, spec: &RenderSpec) -> Result<(), RenderError> {
        self.inner.render_and_display(spec)
    }
}
