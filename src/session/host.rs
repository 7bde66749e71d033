//! Host-side glue between the engine and its collaborators.
//!
//! `GameSession` owns an engine and wires the two collaborator contracts:
//!
//! - results: when a game ends, its `GameSummary` goes to a `ResultSink`
//! - inventory: a power-up is consumed from a `PowerUpLedger` before the
//!   engine sees it
//!
//! Sink failures are logged and kept for the host to inspect; they never
//! disturb the engine.

use log::{debug, warn};

use crate::challenge::ColorChallenge;
use crate::core::{Difficulty, EngineConfig, GameMode, GameState};
use crate::engine::{EngineError, GameEngine, GameListener};
use crate::powerups::{PowerUpEffect, PowerUpKind};

use super::{GameSummary, PlayerStats, PowerUpLedger, SessionError};

/// Persists a completed game result.
pub trait ResultSink {
    fn submit(&mut self, summary: &GameSummary) -> Result<(), SessionError>;
}

/// Sink that keeps results in memory and rolls them into `PlayerStats`.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    pub results: Vec<GameSummary>,
    pub stats: PlayerStats,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultSink for MemorySink {
    fn submit(&mut self, summary: &GameSummary) -> Result<(), SessionError> {
        self.stats.record(summary);
        self.results.push(summary.clone());
        Ok(())
    }
}

/// Listener that forwards to the host's listener and submits the result
/// when a game ends.
///
/// The engine reports the final score first and the final state right
/// after; the summary is taken from that final state.
pub struct SessionListener<L, S> {
    inner: L,
    sink: S,
    ending: bool,
    last_submission: Option<Result<(), SessionError>>,
}

impl<L, S> SessionListener<L, S> {
    pub fn new(inner: L, sink: S) -> Self {
        Self {
            inner,
            sink,
            ending: false,
            last_submission: None,
        }
    }

    #[must_use]
    pub fn inner(&self) -> &L {
        &self.inner
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Outcome of the most recent submission, if any game has ended.
    #[must_use]
    pub fn last_submission(&self) -> Option<&Result<(), SessionError>> {
        self.last_submission.as_ref()
    }
}

impl<L: GameListener, S: ResultSink> GameListener for SessionListener<L, S> {
    fn on_state_change(&mut self, state: &GameState) {
        self.inner.on_state_change(state);

        if self.ending && state.is_game_over {
            self.ending = false;
            let summary = GameSummary::from_state(state);
            let result = self.sink.submit(&summary);
            match &result {
                Ok(()) => debug!("result submitted: score {}", summary.score),
                Err(err) => warn!("failed to submit result: {}", err),
            }
            self.last_submission = Some(result);
        }
    }

    fn on_challenge_change(&mut self, challenge: &ColorChallenge) {
        self.inner.on_challenge_change(challenge);
    }

    fn on_game_end(&mut self, final_score: u64) {
        self.ending = true;
        self.inner.on_game_end(final_score);
    }
}

/// An engine plus its result sink and power-up ledger.
pub struct GameSession<L: GameListener, S: ResultSink, P: PowerUpLedger> {
    engine: GameEngine<SessionListener<L, S>>,
    ledger: P,
}

impl<L: GameListener, S: ResultSink, P: PowerUpLedger> GameSession<L, S, P> {
    pub fn new(config: EngineConfig, listener: L, sink: S, ledger: P) -> Self {
        Self {
            engine: GameEngine::with_config(config, SessionListener::new(listener, sink)),
            ledger,
        }
    }

    #[must_use]
    pub fn engine(&self) -> &GameEngine<SessionListener<L, S>> {
        &self.engine
    }

    /// Direct engine access for answers, pausing, and time.
    pub fn engine_mut(&mut self) -> &mut GameEngine<SessionListener<L, S>> {
        &mut self.engine
    }

    #[must_use]
    pub fn ledger(&self) -> &P {
        &self.ledger
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        self.engine.listener().sink()
    }

    /// Host listener.
    #[must_use]
    pub fn listener(&self) -> &L {
        self.engine.listener().inner()
    }

    #[must_use]
    pub fn last_submission(&self) -> Option<&Result<(), SessionError>> {
        self.engine.listener().last_submission()
    }

    pub fn start_game(&mut self, mode: GameMode, difficulty: Difficulty) {
        self.engine.start_game(mode, difficulty);
    }

    /// Consume one power-up from the ledger, then activate it.
    ///
    /// Nothing is consumed when no game is in progress.
    pub fn use_power_up(&mut self, kind: impl Into<PowerUpKind>) -> Result<PowerUpEffect, SessionError> {
        let kind = kind.into();
        if !self.engine.state().is_playing {
            return Err(SessionError::Engine(EngineError::NotPlaying));
        }

        self.ledger.consume(&kind)?;
        Ok(self.engine.activate_power_up(kind)?)
    }
}
