//! Notification seam between the engine and its host.
//!
//! The engine reports everything through three notifications. They run
//! synchronously inside the engine call (or timer) that caused them and
//! receive shared borrows: a host that wants to keep the state clones it.
//! Because the engine holds `&mut` to its listener while notifying, a
//! listener cannot call back into the engine.

use crate::challenge::ColorChallenge;
use crate::core::GameState;

/// Receives engine notifications.
pub trait GameListener {
    /// The state changed. Called after every mutation.
    fn on_state_change(&mut self, state: &GameState);

    /// A new challenge replaced the previous one.
    fn on_challenge_change(&mut self, challenge: &ColorChallenge);

    /// The game ended with this score. Followed by a final state change.
    fn on_game_end(&mut self, final_score: u64);
}

impl<T: GameListener + ?Sized> GameListener for &mut T {
    fn on_state_change(&mut self, state: &GameState) {
        (**self).on_state_change(state);
    }

    fn on_challenge_change(&mut self, challenge: &ColorChallenge) {
        (**self).on_challenge_change(challenge);
    }

    fn on_game_end(&mut self, final_score: u64) {
        (**self).on_game_end(final_score);
    }
}

impl<T: GameListener + ?Sized> GameListener for Box<T> {
    fn on_state_change(&mut self, state: &GameState) {
        (**self).on_state_change(state);
    }

    fn on_challenge_change(&mut self, challenge: &ColorChallenge) {
        (**self).on_challenge_change(challenge);
    }

    fn on_game_end(&mut self, final_score: u64) {
        (**self).on_game_end(final_score);
    }
}

/// Listener built from three closures.
///
/// ```
/// use color_rush::engine::{Callbacks, GameEngine};
/// use color_rush::core::{Difficulty, EngineConfig, GameMode};
///
/// let callbacks = Callbacks::new(
///     |state| println!("score {}", state.score),
///     |challenge| println!("match {}", challenge.target_color_name),
///     |score| println!("final {}", score),
/// );
/// let mut engine = GameEngine::with_config(EngineConfig::default().with_seed(1), callbacks);
/// engine.start_game(GameMode::Classic, Difficulty::Normal);
/// ```
pub struct Callbacks<S, C, E> {
    on_state: S,
    on_challenge: C,
    on_end: E,
}

impl<S, C, E> Callbacks<S, C, E>
where
    S: FnMut(&GameState),
    C: FnMut(&ColorChallenge),
    E: FnMut(u64),
{
    pub fn new(on_state: S, on_challenge: C, on_end: E) -> Self {
        Self {
            on_state,
            on_challenge,
            on_end,
        }
    }
}

impl<S, C, E> GameListener for Callbacks<S, C, E>
where
    S: FnMut(&GameState),
    C: FnMut(&ColorChallenge),
    E: FnMut(u64),
{
    fn on_state_change(&mut self, state: &GameState) {
        (self.on_state)(state);
    }

    fn on_challenge_change(&mut self, challenge: &ColorChallenge) {
        (self.on_challenge)(challenge);
    }

    fn on_game_end(&mut self, final_score: u64) {
        (self.on_end)(final_score);
    }
}

/// Listener that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullListener;

impl GameListener for NullListener {
    fn on_state_change(&mut self, _state: &GameState) {}

    fn on_challenge_change(&mut self, _challenge: &ColorChallenge) {}

    fn on_game_end(&mut self, _final_score: u64) {}
}

/// One recorded notification.
#[derive(Clone, Debug, PartialEq)]
pub enum Notification {
    StateChanged(GameState),
    ChallengeChanged(ColorChallenge),
    GameEnded(u64),
}

/// Listener that keeps every notification, in order.
///
/// Handy for hosts that process notifications in batches, and for tests.
#[derive(Clone, Debug, Default)]
pub struct RecordingListener {
    pub notifications: Vec<Notification>,
}

impl RecordingListener {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent state snapshot.
    #[must_use]
    pub fn last_state(&self) -> Option<&GameState> {
        self.notifications.iter().rev().find_map(|n| match n {
            Notification::StateChanged(state) => Some(state),
            _ => None,
        })
    }

    /// Most recent challenge.
    #[must_use]
    pub fn last_challenge(&self) -> Option<&ColorChallenge> {
        self.notifications.iter().rev().find_map(|n| match n {
            Notification::ChallengeChanged(challenge) => Some(challenge),
            _ => None,
        })
    }

    /// Every final score reported, in order.
    #[must_use]
    pub fn game_ends(&self) -> Vec<u64> {
        self.notifications
            .iter()
            .filter_map(|n| match n {
                Notification::GameEnded(score) => Some(*score),
                _ => None,
            })
            .collect()
    }

    /// Number of state-change notifications.
    #[must_use]
    pub fn state_changes(&self) -> usize {
        self.notifications
            .iter()
            .filter(|n| matches!(n, Notification::StateChanged(_)))
            .count()
    }

    /// Drop everything recorded so far.
    pub fn clear(&mut self) {
        self.notifications.clear();
    }
}

impl GameListener for RecordingListener {
    fn on_state_change(&mut self, state: &GameState) {
        self.notifications.push(Notification::StateChanged(state.clone()));
    }

    fn on_challenge_change(&mut self, challenge: &ColorChallenge) {
        self.notifications.push(Notification::ChallengeChanged(challenge.clone()));
    }

    fn on_game_end(&mut self, final_score: u64) {
        self.notifications.push(Notification::GameEnded(final_score));
    }
}
