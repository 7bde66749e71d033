//! # color-rush
//!
//! Real-time engine for a color matching arcade game.
//!
//! The player sees a target color and picks the matching option before time
//! runs out, building score, streaks, and levels while losing a life on
//! every miss.
//!
//! ## Design Principles
//!
//! 1. **Single owner**: The engine owns the game state and is its only
//!    mutator. Hosts observe it through notifications and borrows.
//!
//! 2. **Explicit time**: Every timer (the one-second clock, power-up
//!    expiries) lives in one virtual-time scheduler that the host advances.
//!    Starting, ending, or destroying a game cancels them all at once.
//!
//! 3. **Injected randomness**: Challenge generation draws from a seedable
//!    `GameRng`, so a game can be replayed exactly.
//!
//! ## Modules
//!
//! - `core`: modes, difficulty tables, state, RNG, configuration
//! - `challenge`: palette, challenge values, generator
//! - `scoring`: answer scoring rules
//! - `powerups`: power-up kinds and effects
//! - `clock`: virtual-time scheduler and wall-clock pump
//! - `engine`: the state machine and its listener seam
//! - `session`: result persistence and power-up inventory contracts

pub mod core;
pub mod challenge;
pub mod scoring;
pub mod powerups;
pub mod clock;
pub mod engine;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Difficulty, EngineConfig, GameMode, GameRng, GameRngState, GameState, ParseError,
    PauseReason, Phase,
};

pub use crate::challenge::{ChallengeGenerator, ChallengeId, ColorChallenge, ColorOption, OptionId};

pub use crate::scoring::AnswerOutcome;

pub use crate::powerups::{PowerUpEffect, PowerUpKind};

pub use crate::clock::{RealTimePump, Scheduler, TimerId};

pub use crate::engine::{Callbacks, EngineError, GameEngine, GameListener, RecordingListener};

pub use crate::session::{
    GameSession, GameSummary, MemorySink, PlayerStats, PowerUpInventory, PowerUpLedger,
    ResultSink, SessionError,
};
