//! The game engine and its host-facing seam.
//!
//! - [`GameEngine`]: the state machine (clock, challenges, scoring, power-ups)
//! - [`GameListener`]: the three notifications the host receives
//! - [`EngineError`]: why a host call was ignored
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use color_rush::core::{Difficulty, EngineConfig, GameMode};
//! use color_rush::engine::{GameEngine, RecordingListener};
//!
//! let config = EngineConfig::default().with_seed(42);
//! let mut engine = GameEngine::with_config(config, RecordingListener::new());
//! engine.start_game(GameMode::Classic, Difficulty::Normal);
//!
//! let challenge = engine.current_challenge().unwrap().clone();
//! let answer = challenge.correct_option().unwrap().id;
//! engine.handle_color_selection(answer, &challenge).unwrap();
//! assert_eq!(engine.state().score, 10);
//!
//! engine.advance(Duration::from_secs(3));
//! assert_eq!(engine.state().time_left, 57.0);
//! ```

mod error;
mod game_engine;
mod listener;

pub use error::EngineError;
pub use game_engine::GameEngine;
pub use listener::{Callbacks, GameListener, Notification, NullListener, RecordingListener};
