//! The game engine state machine.
//!
//! ```text
//! Idle ──start_game──▶ Playing ◀──pause/resume──▶ Paused
//!                        │                           │
//!                        └── time out / no lives / end_game ──▶ GameOver
//! ```
//!
//! `start_game` is valid from any state and discards whatever game was in
//! flight. Every timer lives in one scheduler, so starting, ending, or
//! destroying cancels all of them in one step.

use std::time::Duration;

use log::{debug, info, trace, warn};

use crate::challenge::{ChallengeGenerator, ColorChallenge, OptionId};
use crate::clock::{Scheduler, TimerId};
use crate::core::{
    Difficulty, EngineConfig, GameMode, GameRng, GameRngState, GameState, PauseReason, Phase,
};
use crate::powerups::{self, PowerUpEffect, PowerUpKind};
use crate::scoring::{self, AnswerOutcome};
use crate::session::GameSummary;

use super::error::EngineError;
use super::listener::GameListener;

/// What a timer does when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TimerEvent {
    Tick,
    FreezeExpired,
    MultiplierExpired,
}

/// Real-time color matching engine.
///
/// Owns the game state exclusively; the host observes it through its
/// `GameListener` and `state()`.
pub struct GameEngine<L: GameListener> {
    config: EngineConfig,
    state: GameState,
    challenge: Option<ColorChallenge>,
    generator: ChallengeGenerator,
    scheduler: Scheduler<TimerEvent>,
    clock: Option<TimerId>,
    freeze: Option<(TimerId, PowerUpEffect)>,
    multiplier: Option<(TimerId, PowerUpEffect)>,
    listener: L,
}

impl<L: GameListener> GameEngine<L> {
    /// Create an engine with the default configuration.
    pub fn new(listener: L) -> Self {
        Self::with_config(EngineConfig::default(), listener)
    }

    /// Create an engine. The RNG is seeded from `config.seed`, or from the
    /// operating system when no seed is set.
    pub fn with_config(config: EngineConfig, listener: L) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::with_rng(config, rng, listener)
    }

    /// Create an engine drawing challenges from `rng`.
    ///
    /// A zero `tick_interval` (possible in a deserialized config) falls back
    /// to the default interval.
    pub fn with_rng(mut config: EngineConfig, rng: GameRng, listener: L) -> Self {
        if config.tick_interval.is_zero() {
            let fallback = EngineConfig::default().tick_interval;
            warn!("zero tick interval, using {:?}", fallback);
            config.tick_interval = fallback;
        }
        Self {
            state: GameState::idle(&config),
            config,
            challenge: None,
            generator: ChallengeGenerator::new(rng),
            scheduler: Scheduler::new(),
            clock: None,
            freeze: None,
            multiplier: None,
            listener,
        }
    }

    // === Accessors ===

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Owned copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// The challenge currently on screen.
    #[must_use]
    pub fn current_challenge(&self) -> Option<&ColorChallenge> {
        self.challenge.as_ref()
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    /// Consume the engine, returning its listener.
    pub fn into_listener(self) -> L {
        self.listener
    }

    /// Virtual time elapsed since the engine was created.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// Number of pending timers (clock and power-up expiries).
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending()
    }

    /// Position of the challenge RNG. Restoring it with
    /// `GameRng::from_state` into a new engine replays the challenges this
    /// engine would generate next.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.generator.rng().state()
    }

    /// Result record for the current (or just finished) game.
    #[must_use]
    pub fn summary(&self) -> GameSummary {
        GameSummary::from_state(&self.state)
    }

    // === Lifecycle ===

    /// Start a new game, discarding any game in progress.
    pub fn start_game(&mut self, mode: GameMode, difficulty: Difficulty) {
        if self.state.is_playing {
            debug!("discarding game in progress (score {})", self.state.score);
        }
        self.cancel_timers();

        self.state = GameState::new_game(&self.config, mode, difficulty);
        self.clock = Some(
            self.scheduler
                .schedule_repeating(self.config.tick_interval, TimerEvent::Tick),
        );
        info!(
            "game started: {} / {} with {}s",
            mode, difficulty, self.state.time_left
        );

        self.next_challenge();
        self.notify_state();
    }

    /// Pause on behalf of the player.
    pub fn pause_game(&mut self) -> Result<(), EngineError> {
        self.require_playing("pause")?;
        self.state.pause_for(PauseReason::Player);
        self.notify_state();
        Ok(())
    }

    /// Lift the player's pause. A running time freeze keeps the game paused
    /// until it expires.
    pub fn resume_game(&mut self) -> Result<(), EngineError> {
        self.require_playing("resume")?;
        self.state.resume_from(PauseReason::Player);
        self.notify_state();
        Ok(())
    }

    /// End the game now.
    pub fn end_game(&mut self) -> Result<(), EngineError> {
        self.require_playing("end")?;
        self.finish();
        Ok(())
    }

    /// Cancel every pending timer and return to idle. Safe from any state,
    /// any number of times. No notifications are sent.
    pub fn destroy(&mut self) {
        self.cancel_timers();
        if self.state.is_playing {
            debug!("engine torn down mid-game");
            self.state.is_playing = false;
            self.state.pause_reasons.clear();
            self.state.is_paused = false;
        }
    }

    // === Time ===

    /// Move game time forward, firing every timer that comes due.
    ///
    /// Timers fire one at a time in deadline order. A timer cancelled by an
    /// earlier one in the same call (for example, the game ending) never
    /// fires.
    pub fn advance(&mut self, elapsed: Duration) {
        let until = self.scheduler.now() + elapsed;
        while let Some((id, event)) = self.scheduler.pop_due(until) {
            self.on_timer(id, event);
        }
        self.scheduler.settle(until);
    }

    fn on_timer(&mut self, id: TimerId, event: TimerEvent) {
        match event {
            TimerEvent::Tick => {
                if self.clock == Some(id) {
                    self.tick();
                }
            }
            TimerEvent::FreezeExpired => {
                if let Some((timer, effect)) = self.freeze.take() {
                    debug_assert_eq!(timer, id);
                    effect.expire(&mut self.state);
                    debug!("time freeze expired");
                    self.notify_state();
                }
            }
            TimerEvent::MultiplierExpired => {
                if let Some((timer, effect)) = self.multiplier.take() {
                    debug_assert_eq!(timer, id);
                    effect.expire(&mut self.state);
                    debug!("score multiplier expired");
                    self.notify_state();
                }
            }
        }
    }

    fn tick(&mut self) {
        if !self.state.is_running() {
            return;
        }

        self.state.time_left = (self.state.time_left - 1.0).max(0.0);
        self.state.time_played += 1;
        trace!("tick: {}s left", self.state.time_left);

        if self.state.time_left <= 0.0 {
            self.finish();
        } else {
            self.notify_state();
        }
    }

    // === Player actions ===

    /// Answer `challenge` with the option `option_id`.
    ///
    /// Ignored unless a game is running, `challenge` is the current one, and
    /// it contains `option_id`. On success the next challenge is generated
    /// right away, even when the answer ended the game.
    pub fn handle_color_selection(
        &mut self,
        option_id: OptionId,
        challenge: &ColorChallenge,
    ) -> Result<AnswerOutcome, EngineError> {
        self.require_playing("answer")?;
        if self.state.is_paused {
            debug!("answer ignored: paused");
            return Err(EngineError::Paused);
        }
        let current = match self.challenge.as_ref() {
            Some(current) if current.id == challenge.id => current,
            _ => {
                debug!("answer ignored: {} is stale", challenge.id);
                return Err(EngineError::StaleChallenge(challenge.id));
            }
        };
        // Correctness comes from the engine's own copy, not the caller's.
        let Some(is_correct) = current.option(option_id).map(|option| option.is_correct) else {
            debug!("answer ignored: {} not in {}", option_id, challenge.id);
            return Err(EngineError::UnknownOption {
                challenge: challenge.id,
                option: option_id,
            });
        };

        let outcome = if is_correct {
            let outcome = scoring::apply_correct(&mut self.state);
            self.notify_state();
            outcome
        } else {
            let outcome = scoring::apply_wrong(&mut self.state, self.config.wrong_answer_penalty_secs);
            if outcome.ends_game() {
                self.finish();
            } else {
                self.notify_state();
            }
            outcome
        };
        debug!("{} answered: {:?}", challenge.id, outcome);

        self.next_challenge();
        Ok(outcome)
    }

    /// Apply a power-up. Entitlement is the host's concern.
    ///
    /// The kind is always added to the usage trail, recognized or not.
    /// Activating a timed power-up that is already running restarts its
    /// expiry.
    pub fn activate_power_up(
        &mut self,
        kind: impl Into<PowerUpKind>,
    ) -> Result<PowerUpEffect, EngineError> {
        let kind = kind.into();
        self.require_playing("power-up")?;
        debug!("power-up activated: {}", kind);

        let effect = powerups::activate(&mut self.state, kind, &self.config);
        if let Some(delay) = effect.expires_after() {
            match effect {
                PowerUpEffect::Freeze { .. } => {
                    if let Some((previous, _)) = self.freeze.take() {
                        self.scheduler.cancel(previous);
                    }
                    let timer = self.scheduler.schedule_once(delay, TimerEvent::FreezeExpired);
                    self.freeze = Some((timer, effect));
                }
                PowerUpEffect::Multiplier { .. } => {
                    if let Some((previous, _)) = self.multiplier.take() {
                        self.scheduler.cancel(previous);
                    }
                    let timer = self
                        .scheduler
                        .schedule_once(delay, TimerEvent::MultiplierExpired);
                    self.multiplier = Some((timer, effect));
                }
                PowerUpEffect::ExtraLife | PowerUpEffect::NoEffect => {}
            }
        }

        self.notify_state();
        Ok(effect)
    }

    // === Internals ===

    fn require_playing(&self, action: &str) -> Result<(), EngineError> {
        if self.state.is_playing {
            Ok(())
        } else {
            debug!("{} ignored: no game in progress", action);
            Err(EngineError::NotPlaying)
        }
    }

    fn finish(&mut self) {
        self.state.mark_game_over();
        self.cancel_timers();
        info!(
            "game over: score {} level {} matched {}",
            self.state.score, self.state.level, self.state.colors_matched
        );

        self.listener.on_game_end(self.state.score);
        self.notify_state();
    }

    /// Cancel every timer. Running power-ups are expired first so no
    /// effect outlives its timer.
    fn cancel_timers(&mut self) {
        if let Some((_, effect)) = self.freeze.take() {
            effect.expire(&mut self.state);
        }
        if let Some((_, effect)) = self.multiplier.take() {
            effect.expire(&mut self.state);
        }
        self.scheduler.cancel_all();
        self.clock = None;
    }

    fn next_challenge(&mut self) {
        let challenge = self.generator.generate(self.state.difficulty, self.state.level);
        self.listener.on_challenge_change(&challenge);
        self.challenge = Some(challenge);
    }

    fn notify_state(&mut self) {
        self.listener.on_state_change(&self.state);
    }
}
