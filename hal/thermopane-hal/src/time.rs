//! Time source abstraction

/// Monotonic millisecond clock
pub trait Clock {
    /// Milliseconds since boot
    fn now_ms(&self) -> u64;
}
