//! Core engine types: modes, state, RNG, configuration.
//!
//! Everything here is plain data. Behavior lives in `challenge`, `scoring`,
//! `powerups` and `engine`.

pub mod rng;
pub mod config;
pub mod mode;
pub mod state;

pub use rng::{GameRng, GameRngState};
pub use config::EngineConfig;
pub use mode::{initial_time_secs, Difficulty, GameMode, ParseError};
pub use state::{GameState, PauseReason, PauseReasons, Phase};
