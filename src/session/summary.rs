//! Completed game result record.

use serde::{Deserialize, Serialize};

use crate::core::{Difficulty, GameMode, GameState};

use super::SessionError;

/// What the persistence collaborator stores for one finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub score: u64,
    pub level: u32,
    pub colors_matched: u32,
    pub perfect_matches: u32,
    pub max_streak: u32,
    /// Seconds of unpaused play.
    pub time_played: u32,
    pub game_mode: GameMode,
    pub difficulty: Difficulty,
}

impl GameSummary {
    /// Extract the result fields from a game state.
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        Self {
            score: state.score,
            level: state.level,
            colors_matched: state.colors_matched,
            perfect_matches: state.perfect_matches,
            max_streak: state.max_streak,
            time_played: state.time_played,
            game_mode: state.game_mode,
            difficulty: state.difficulty,
        }
    }

    /// Compact binary encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SessionError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from `to_bytes` output.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SessionError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
