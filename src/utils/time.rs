#[cfg(not(target_arch = "wasm32"))]
use std::time::{Duration, Instant};

#[cfg(target_arch = "wasm32")]
use web_time::{Duration, Instant};

use parking_lot::Mutex;

/// Source of monotonic timestamps, measured from the clock's own epoch.
///
/// Caches and monitors take a clock instead of calling `Instant::now()`
/// directly so that idle expiry and frame-rate windows can be driven
/// deterministically in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> Duration;
}

/// Wall clock backed by `Instant`.
pub struct SystemClock {
    start_time: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    /// Creates a clock whose epoch is now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Clock that only moves when told to.
#[derive(Default)]
pub struct ManualClock {
    elapsed: Mutex<Duration>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, delta: Duration) {
        *self.elapsed.lock() += delta;
    }

    pub fn advance_secs(&self, secs: f32) {
        self.advance(Duration::from_secs_f32(secs));
    }

    pub fn set(&self, elapsed: Duration) {
        *self.elapsed.lock() = elapsed;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        *self.elapsed.lock()
    }
}
