//! Game modes and difficulty levels.
//!
//! Both are fixed for the lifetime of one game. All of the numeric tables
//! the engine consults (starting time, scoring scale, option count, answer
//! time limit) hang off these enums as `const fn`s so there is exactly one
//! place to look them up.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a mode or difficulty name is not recognized.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown game mode: {0:?}")]
    UnknownMode(String),
    #[error("unknown difficulty: {0:?}")]
    UnknownDifficulty(String),
}

/// Game mode. Determines the base time budget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    #[default]
    Classic,
    Speed,
    Endless,
    Challenge,
}

impl GameMode {
    /// Every mode, in display order.
    pub const ALL: [GameMode; 4] = [
        GameMode::Classic,
        GameMode::Speed,
        GameMode::Endless,
        GameMode::Challenge,
    ];

    /// Base time budget in seconds before the difficulty scale is applied.
    #[must_use]
    pub const fn base_time_secs(self) -> u32 {
        match self {
            GameMode::Classic => 60,
            GameMode::Speed => 30,
            GameMode::Endless => 120,
            GameMode::Challenge => 45,
        }
    }

    /// Wire name (`"classic"`, `"speed"`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            GameMode::Classic => "classic",
            GameMode::Speed => "speed",
            GameMode::Endless => "endless",
            GameMode::Challenge => "challenge",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ParseError::UnknownMode(s.to_string()))
    }
}

/// Difficulty level.
///
/// Difficulty feeds two independent tables: one that scales the starting
/// time and points, and one that shapes generated challenges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
    Expert,
}

impl Difficulty {
    /// Every difficulty, easiest first.
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Normal,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    /// Scale applied to the mode's base time.
    #[must_use]
    pub const fn time_multiplier(self) -> f64 {
        match self {
            Difficulty::Easy => 1.5,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 0.8,
            Difficulty::Expert => 0.6,
        }
    }

    /// Scale applied to points for a correct answer.
    #[must_use]
    pub const fn score_multiplier(self) -> f64 {
        match self {
            Difficulty::Easy => 0.8,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 1.3,
            Difficulty::Expert => 1.6,
        }
    }

    /// Number of options in a generated challenge.
    #[must_use]
    pub const fn option_count(self) -> usize {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Normal => 4,
            Difficulty::Hard => 5,
            Difficulty::Expert => 6,
        }
    }

    /// Whether near-duplicate variant shades may be shown.
    #[must_use]
    pub const fn allows_similar_shades(self) -> bool {
        !matches!(self, Difficulty::Easy)
    }

    /// Per-challenge answer time limit in milliseconds.
    #[must_use]
    pub const fn challenge_time_limit_ms(self) -> u32 {
        match self {
            Difficulty::Easy => 5000,
            Difficulty::Normal => 4000,
            Difficulty::Hard => 3000,
            Difficulty::Expert => 2500,
        }
    }

    /// Wire name (`"easy"`, `"normal"`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|difficulty| difficulty.as_str() == s)
            .ok_or_else(|| ParseError::UnknownDifficulty(s.to_string()))
    }
}

/// Starting time budget in whole seconds for a mode/difficulty pair.
///
/// `floor(base_time × time_multiplier)`.
#[must_use]
pub fn initial_time_secs(mode: GameMode, difficulty: Difficulty) -> u32 {
    (f64::from(mode.base_time_secs()) * difficulty.time_multiplier()).floor() as u32
}
