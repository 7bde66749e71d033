//! Wall-clock driver for hosts running in real time.
//!
//! The engine never reads the wall clock itself. A real-time host keeps a
//! `RealTimePump`, and on every frame (or any periodic wake-up) feeds the
//! measured delta into `GameEngine::advance`:
//!
//! ```no_run
//! use color_rush::clock::RealTimePump;
//!
//! let mut pump = RealTimePump::start();
//! loop {
//!     let elapsed = pump.elapsed();
//!     // engine.advance(elapsed);
//!     # let _ = elapsed;
//!     std::thread::sleep(std::time::Duration::from_millis(16));
//! }
//! ```

use std::time::{Duration, Instant};

/// Measures wall-clock time between successive calls.
#[derive(Clone, Debug)]
pub struct RealTimePump {
    last: Instant,
    max_step: Duration,
}

impl RealTimePump {
    /// Start measuring from now.
    #[must_use]
    pub fn start() -> Self {
        Self {
            last: Instant::now(),
            max_step: Duration::from_secs(5),
        }
    }

    /// Cap a single step, so a host that was suspended does not burn the
    /// whole game clock in one call.
    #[must_use]
    pub fn with_max_step(mut self, max_step: Duration) -> Self {
        self.max_step = max_step;
        self
    }

    /// Time since the previous call (or since `start`), capped.
    pub fn elapsed(&mut self) -> Duration {
        let now = Instant::now();
        let step = now.saturating_duration_since(self.last);
        self.last = now;
        step.min(self.max_step)
    }
}
