//! Lifetime player statistics.
//!
//! Rolls finished games into running totals. Experience is a tenth of the
//! score (rounded down) and every 1000 experience is a player level.

use serde::{Deserialize, Serialize};

use super::GameSummary;

/// Experience needed per player level.
pub const XP_PER_LEVEL: u64 = 1000;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub games_played: u32,
    pub total_score: u64,
    pub best_score: u64,
    pub best_streak: u32,
    pub experience: u64,
    /// Player level (not the in-game level). Starts at 1.
    pub level: u32,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            games_played: 0,
            total_score: 0,
            best_score: 0,
            best_streak: 0,
            experience: 0,
            level: 1,
        }
    }
}

impl PlayerStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one finished game.
    pub fn record(&mut self, summary: &GameSummary) {
        self.games_played += 1;
        self.total_score += summary.score;
        self.best_score = self.best_score.max(summary.score);
        self.best_streak = self.best_streak.max(summary.max_streak);
        self.experience += summary.score / 10;
        self.level = (self.experience / XP_PER_LEVEL) as u32 + 1;
    }

    /// Mean score per game, 0 before the first game.
    #[must_use]
    pub fn average_score(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.total_score as f64 / f64::from(self.games_played)
        }
    }
}
