//! Scoring policy: turns an answer into score, streak, level and life deltas.
//!
//! The functions here operate on a bare `GameState` and know nothing about
//! timers or notifications. The engine calls them and handles lifecycle.

mod policy;

pub use policy::{
    apply_correct, apply_wrong, points_for, AnswerOutcome, MATCHES_PER_LEVEL,
    PERFECT_BONUS_PER_LEVEL, PERFECT_STREAK, STREAK_STEP,
};
