//! Game state owned by the engine.
//!
//! ## GameState
//!
//! One instance per game, created fresh by `start_game` and mutated only by
//! the engine. Hosts see it through `&GameState` borrows inside
//! notifications and may clone it to keep a snapshot. The power-up trail is
//! an `im::Vector`, so cloning a snapshot never copies the trail.
//!
//! ## Pausing
//!
//! A game can be paused for more than one reason at once (the player pressed
//! pause while a time freeze was running). Reasons are tracked as a set and
//! `is_paused` is kept equal to "the set is non-empty", so resuming one
//! reason never clears another.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::EngineConfig;
use super::mode::{initial_time_secs, Difficulty, GameMode};
use crate::powerups::PowerUpKind;

/// Why the game is paused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PauseReason {
    /// The player pressed pause.
    Player,
    /// A `time_freeze` power-up is running.
    TimeFreeze,
}

impl PauseReason {
    const fn bit(self) -> u8 {
        match self {
            PauseReason::Player => 0b01,
            PauseReason::TimeFreeze => 0b10,
        }
    }
}

/// Set of active pause reasons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PauseReasons(u8);

impl PauseReasons {
    /// No reasons.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Add a reason. Returns true if it was not already present.
    pub fn insert(&mut self, reason: PauseReason) -> bool {
        let added = !self.contains(reason);
        self.0 |= reason.bit();
        added
    }

    /// Remove a reason. Returns true if it was present.
    pub fn remove(&mut self, reason: PauseReason) -> bool {
        let present = self.contains(reason);
        self.0 &= !reason.bit();
        present
    }

    #[must_use]
    pub const fn contains(self, reason: PauseReason) -> bool {
        self.0 & reason.bit() != 0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Drop every reason.
    pub fn clear(&mut self) {
        self.0 = 0;
    }
}

/// Coarse lifecycle phase, derived from the state flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No game has been started.
    Idle,
    Playing,
    Paused,
    /// Terminal until the next `start_game`.
    GameOver,
}

/// State of one game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub score: u64,
    /// Starts at 1; one level per ten matches.
    pub level: u32,
    /// Consecutive correct answers since the last miss.
    pub streak: u32,
    /// High-water mark of `streak`.
    pub max_streak: u32,
    /// Seconds remaining. Reaching zero ends the game.
    pub time_left: f64,
    /// Whole seconds of unpaused play.
    pub time_played: u32,
    pub lives: i32,

    pub is_playing: bool,
    pub is_paused: bool,
    pub is_game_over: bool,
    pub pause_reasons: PauseReasons,

    pub game_mode: GameMode,
    pub difficulty: Difficulty,

    pub colors_matched: u32,
    pub perfect_matches: u32,

    /// Every activation in order, including unrecognized kinds.
    pub power_ups_used: Vector<PowerUpKind>,
    /// Score scale from an active `score_multiplier`, 1.0 otherwise.
    pub bonus_multiplier: f64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::idle(&EngineConfig::default())
    }
}

impl GameState {
    /// State before any game has started.
    #[must_use]
    pub fn idle(config: &EngineConfig) -> Self {
        let mode = GameMode::default();
        Self {
            score: 0,
            level: 1,
            streak: 0,
            max_streak: 0,
            time_left: f64::from(mode.base_time_secs()),
            time_played: 0,
            lives: config.starting_lives,
            is_playing: false,
            is_paused: false,
            is_game_over: false,
            pause_reasons: PauseReasons::empty(),
            game_mode: mode,
            difficulty: Difficulty::default(),
            colors_matched: 0,
            perfect_matches: 0,
            power_ups_used: Vector::new(),
            bonus_multiplier: 1.0,
        }
    }

    /// Fresh state for a game that is starting now.
    #[must_use]
    pub fn new_game(config: &EngineConfig, mode: GameMode, difficulty: Difficulty) -> Self {
        Self {
            game_mode: mode,
            difficulty,
            is_playing: true,
            time_left: f64::from(initial_time_secs(mode, difficulty)),
            ..Self::idle(config)
        }
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.is_game_over {
            Phase::GameOver
        } else if !self.is_playing {
            Phase::Idle
        } else if self.is_paused {
            Phase::Paused
        } else {
            Phase::Playing
        }
    }

    /// Playing and not paused: the only phase in which answers count and
    /// the clock runs.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.is_playing && !self.is_paused
    }

    /// Add a pause reason and refresh `is_paused`.
    pub fn pause_for(&mut self, reason: PauseReason) -> bool {
        let added = self.pause_reasons.insert(reason);
        self.is_paused = !self.pause_reasons.is_empty();
        added
    }

    /// Remove a pause reason and refresh `is_paused`.
    pub fn resume_from(&mut self, reason: PauseReason) -> bool {
        let removed = self.pause_reasons.remove(reason);
        self.is_paused = !self.pause_reasons.is_empty();
        removed
    }

    /// Flip to the terminal state.
    pub fn mark_game_over(&mut self) {
        self.is_playing = false;
        self.is_game_over = true;
        self.pause_reasons.clear();
        self.is_paused = false;
    }
}
