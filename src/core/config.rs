//! Engine configuration.
//!
//! The gameplay tables (starting time, scoring scale, option counts) live on
//! `GameMode` and `Difficulty`. `EngineConfig` carries the remaining knobs:
//! timer durations, power-up strength, lives, penalties, and the RNG seed.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Interval of the game clock (default: 1 s).
    /// Each tick removes one second from `time_left`.
    pub tick_interval: Duration,

    /// How long a `time_freeze` keeps the game paused (default: 5 s).
    pub time_freeze_duration: Duration,

    /// How long a `score_multiplier` stays active (default: 10 s).
    pub score_multiplier_duration: Duration,

    /// Bonus multiplier while `score_multiplier` is active (default: 2.0).
    pub score_multiplier_factor: f64,

    /// Lives at the start of every game (default: 3).
    pub starting_lives: i32,

    /// Seconds removed from `time_left` on a wrong answer (default: 2).
    pub wrong_answer_penalty_secs: f64,

    /// Seed for challenge generation.
    /// `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_secs(1),
            time_freeze_duration: Duration::from_secs(5),
            score_multiplier_duration: Duration::from_secs(10),
            score_multiplier_factor: 2.0,
            starting_lives: 3,
            wrong_answer_penalty_secs: 2.0,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Use a fixed seed so challenge sequences are reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Override the number of starting lives.
    #[must_use]
    pub fn with_starting_lives(mut self, lives: i32) -> Self {
        assert!(lives > 0, "Must start with at least 1 life");
        self.starting_lives = lives;
        self
    }

    /// Override the clock interval.
    #[must_use]
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        assert!(!interval.is_zero(), "Tick interval must be non-zero");
        self.tick_interval = interval;
        self
    }

    /// Override the time freeze duration.
    #[must_use]
    pub fn with_time_freeze(mut self, duration: Duration) -> Self {
        self.time_freeze_duration = duration;
        self
    }

    /// Override the score multiplier duration and factor.
    #[must_use]
    pub fn with_score_multiplier(mut self, duration: Duration, factor: f64) -> Self {
        assert!(factor >= 1.0, "Multiplier factor must be at least 1.0");
        self.score_multiplier_duration = duration;
        self.score_multiplier_factor = factor;
        self
    }

    /// Override the wrong answer time penalty.
    #[must_use]
    pub fn with_wrong_answer_penalty(mut self, secs: f64) -> Self {
        self.wrong_answer_penalty_secs = secs;
        self
    }
}
