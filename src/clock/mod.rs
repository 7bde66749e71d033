//! Game time.
//!
//! The engine keeps every timer (the one-second clock, power-up expiries) in
//! a single `Scheduler` over virtual time. Hosts move time forward:
//!
//! - tests pass exact durations
//! - real-time hosts measure wall-clock deltas with `RealTimePump`
//!
//! Cancelling all timers is one call, which is how the engine guarantees no
//! stale timer outlives the game that armed it.

mod pump;
mod scheduler;

pub use pump::RealTimePump;
pub use scheduler::{Scheduler, TimerId};
