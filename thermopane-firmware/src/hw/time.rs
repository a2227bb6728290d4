//! Embassy time source

use embassy_time::Instant;
use thermopane_hal::Clock;

#[derive(Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }
}
