//! Answer scoring rules.
//!
//! ## Correct answer
//!
//! ```text
//! points = floor((10 × level + floor(streak / 5) × 5)
//!                × difficulty.score_multiplier × bonus_multiplier)
//! ```
//!
//! Every tenth match raises the level by one. Every streak milestone
//! (10, 20, 30, ...) is a perfect match worth an extra `50 × level`,
//! using the level after any level-up on the same answer.
//!
//! ## Wrong answer
//!
//! The streak resets and a life is lost. If lives remain, `time_left` takes
//! a penalty (floored at zero); otherwise the game is over.

use serde::{Deserialize, Serialize};

use crate::core::{Difficulty, GameState};

/// Streak length that earns one +5 step of streak bonus.
pub const STREAK_STEP: u32 = 5;
/// Matches per level.
pub const MATCHES_PER_LEVEL: u32 = 10;
/// Streak length of a perfect match milestone.
pub const PERFECT_STREAK: u32 = 10;
/// Perfect match bonus per level.
pub const PERFECT_BONUS_PER_LEVEL: u64 = 50;

/// What one answer did to the state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum AnswerOutcome {
    Correct {
        /// Regular points, excluding any perfect bonus.
        points: u64,
        /// Perfect match bonus added this turn (0 if none).
        perfect_bonus: u64,
        leveled_up: bool,
    },
    Wrong {
        lives_left: i32,
        /// True when this miss used up the last life.
        game_over: bool,
    },
}

impl AnswerOutcome {
    /// Whether the answer was correct.
    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, AnswerOutcome::Correct { .. })
    }

    /// Whether this answer ended the game.
    #[must_use]
    pub fn ends_game(&self) -> bool {
        matches!(self, AnswerOutcome::Wrong { game_over: true, .. })
    }

    /// Total score added by this answer.
    #[must_use]
    pub fn score_delta(&self) -> u64 {
        match self {
            AnswerOutcome::Correct { points, perfect_bonus, .. } => points + perfect_bonus,
            AnswerOutcome::Wrong { .. } => 0,
        }
    }
}

/// Points for a correct answer, before the perfect match bonus.
///
/// `streak` is the streak including the answer being scored.
#[must_use]
pub fn points_for(level: u32, streak: u32, difficulty: Difficulty, bonus_multiplier: f64) -> u64 {
    let base = 10 * u64::from(level);
    let streak_bonus = u64::from(streak / STREAK_STEP) * 5;
    ((base + streak_bonus) as f64 * difficulty.score_multiplier() * bonus_multiplier).floor() as u64
}

/// Apply a correct answer.
pub fn apply_correct(state: &mut GameState) -> AnswerOutcome {
    state.streak += 1;
    state.colors_matched += 1;
    state.max_streak = state.max_streak.max(state.streak);

    let points = points_for(state.level, state.streak, state.difficulty, state.bonus_multiplier);
    state.score += points;

    let leveled_up = state.colors_matched % MATCHES_PER_LEVEL == 0;
    if leveled_up {
        state.level += 1;
    }

    let mut perfect_bonus = 0;
    if state.streak >= PERFECT_STREAK && state.streak % PERFECT_STREAK == 0 {
        state.perfect_matches += 1;
        perfect_bonus = PERFECT_BONUS_PER_LEVEL * u64::from(state.level);
        state.score += perfect_bonus;
    }

    AnswerOutcome::Correct {
        points,
        perfect_bonus,
        leveled_up,
    }
}

/// Apply a wrong answer.
///
/// Does not flip the game-over flags; the caller owns the lifecycle and
/// ends the game when `game_over` is set.
pub fn apply_wrong(state: &mut GameState, penalty_secs: f64) -> AnswerOutcome {
    state.streak = 0;
    state.lives -= 1;

    let game_over = state.lives <= 0;
    if !game_over {
        state.time_left = (state.time_left - penalty_secs).max(0.0);
    }

    AnswerOutcome::Wrong {
        lives_left: state.lives,
        game_over,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EngineConfig, GameMode};

    fn playing(difficulty: Difficulty) -> GameState {
        GameState::new_game(&EngineConfig::default(), GameMode::Classic, difficulty)
    }

    #[test]
    fn test_points_formula() {
        assert_eq!(points_for(1, 1, Difficulty::Normal, 1.0), 10);
        assert_eq!(points_for(1, 5, Difficulty::Normal, 1.0), 15);
        assert_eq!(points_for(2, 10, Difficulty::Normal, 1.0), 30);
        assert_eq!(points_for(1, 1, Difficulty::Easy, 1.0), 8);
        assert_eq!(points_for(1, 1, Difficulty::Hard, 1.0), 13);
        assert_eq!(points_for(1, 1, Difficulty::Expert, 1.0), 16);
        assert_eq!(points_for(1, 1, Difficulty::Normal, 2.0), 20);
        // floor((30 + 5) × 1.3) = floor(45.5)
        assert_eq!(points_for(3, 5, Difficulty::Hard, 1.0), 45);
    }

    #[test]
    fn test_correct_answer() {
        let mut state = playing(Difficulty::Normal);

        let outcome = apply_correct(&mut state);

        assert_eq!(
            outcome,
            AnswerOutcome::Correct {
                points: 10,
                perfect_bonus: 0,
                leveled_up: false
            }
        );
        assert_eq!(state.streak, 1);
        assert_eq!(state.max_streak, 1);
        assert_eq!(state.colors_matched, 1);
        assert_eq!(state.score, 10);
    }

    #[test]
    fn test_level_up_every_ten_matches() {
        let mut state = playing(Difficulty::Normal);

        for n in 1..=30 {
            let outcome = apply_correct(&mut state);
            let AnswerOutcome::Correct { leveled_up, .. } = outcome else {
                panic!("expected correct outcome");
            };
            assert_eq!(leveled_up, n % 10 == 0, "match {}", n);
        }

        assert_eq!(state.level, 4);
    }

    #[test]
    fn test_level_up_ignores_streak() {
        let mut state = playing(Difficulty::Normal);

        for _ in 0..9 {
            apply_correct(&mut state);
        }
        apply_wrong(&mut state, 2.0);
        apply_correct(&mut state);

        assert_eq!(state.colors_matched, 10);
        assert_eq!(state.level, 2);
        assert_eq!(state.perfect_matches, 0);
    }

    #[test]
    fn test_perfect_match_at_ten() {
        let mut state = playing(Difficulty::Normal);
        for _ in 0..9 {
            apply_correct(&mut state);
        }
        let before = state.score;

        let outcome = apply_correct(&mut state);

        // Level 1 points with streak 10: 10 + 10 = 20; level-up then bonus 50 × 2.
        assert_eq!(
            outcome,
            AnswerOutcome::Correct {
                points: 20,
                perfect_bonus: 100,
                leveled_up: true
            }
        );
        assert_eq!(state.score, before + 120);
        assert_eq!(state.perfect_matches, 1);
    }

    #[test]
    fn test_no_perfect_match_at_fifteen() {
        let mut state = playing(Difficulty::Normal);
        for _ in 0..14 {
            apply_correct(&mut state);
        }
        let perfect_before = state.perfect_matches;

        let outcome = apply_correct(&mut state);

        assert_eq!(state.streak, 15);
        assert_eq!(state.perfect_matches, perfect_before);
        assert!(matches!(outcome, AnswerOutcome::Correct { perfect_bonus: 0, .. }));
    }

    #[test]
    fn test_wrong_answer() {
        let mut state = playing(Difficulty::Normal);
        apply_correct(&mut state);
        apply_correct(&mut state);
        let score = state.score;

        let outcome = apply_wrong(&mut state, 2.0);

        assert_eq!(
            outcome,
            AnswerOutcome::Wrong {
                lives_left: 2,
                game_over: false
            }
        );
        assert_eq!(state.streak, 0);
        assert_eq!(state.max_streak, 2);
        assert_eq!(state.time_left, 58.0);
        assert_eq!(state.score, score);
        assert_eq!(outcome.score_delta(), 0);
    }

    #[test]
    fn test_penalty_floors_at_zero() {
        let mut state = playing(Difficulty::Normal);
        state.time_left = 1.0;

        apply_wrong(&mut state, 2.0);

        assert_eq!(state.time_left, 0.0);
    }

    #[test]
    fn test_last_life() {
        let mut state = playing(Difficulty::Normal);
        state.lives = 1;
        state.time_left = 30.0;

        let outcome = apply_wrong(&mut state, 2.0);

        assert!(outcome.ends_game());
        assert_eq!(state.lives, 0);
        // No penalty once the game is lost.
        assert_eq!(state.time_left, 30.0);
    }
}
