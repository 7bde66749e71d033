//! Power-ups: player-triggered gameplay modifiers.
//!
//! - `time_freeze`: pause for a few seconds
//! - `score_multiplier`: double points for a while
//! - `extra_life`: one more life
//! - `hint`: host-side reveal, recorded only
//!
//! Entitlement (does the player own one?) is checked by the host before
//! activation; see `session::PowerUpLedger`.

mod effect;
mod kind;

pub use effect::{activate, PowerUpEffect};
pub use kind::PowerUpKind;
