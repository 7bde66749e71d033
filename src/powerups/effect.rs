//! What each power-up does to the game state.
//!
//! Activation is split in two: the immediate change applied here, and an
//! optional expiry the engine schedules on its clock. Keeping the state
//! change free of timers lets it be tested on a bare `GameState`.

use std::time::Duration;

use crate::core::{EngineConfig, GameState, PauseReason};

use super::PowerUpKind;

/// Resolved effect of a power-up under a given configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PowerUpEffect {
    /// Pause the game until the freeze expires.
    Freeze { duration: Duration },
    /// Scale points until the multiplier expires.
    Multiplier { factor: f64, duration: Duration },
    /// One extra life.
    ExtraLife,
    /// Recorded in the trail only.
    NoEffect,
}

impl PowerUpEffect {
    /// Look up the effect of `kind`.
    #[must_use]
    pub fn for_kind(kind: &PowerUpKind, config: &EngineConfig) -> Self {
        match kind {
            PowerUpKind::TimeFreeze => PowerUpEffect::Freeze {
                duration: config.time_freeze_duration,
            },
            PowerUpKind::ScoreMultiplier => PowerUpEffect::Multiplier {
                factor: config.score_multiplier_factor,
                duration: config.score_multiplier_duration,
            },
            PowerUpKind::ExtraLife => PowerUpEffect::ExtraLife,
            PowerUpKind::Hint | PowerUpKind::Other(_) => PowerUpEffect::NoEffect,
        }
    }

    /// Delay after which the effect must be undone, if any.
    #[must_use]
    pub fn expires_after(&self) -> Option<Duration> {
        match self {
            PowerUpEffect::Freeze { duration } | PowerUpEffect::Multiplier { duration, .. } => {
                Some(*duration)
            }
            PowerUpEffect::ExtraLife | PowerUpEffect::NoEffect => None,
        }
    }

    /// Apply the immediate part of the effect.
    pub fn apply(&self, state: &mut GameState) {
        match *self {
            PowerUpEffect::Freeze { .. } => {
                state.pause_for(PauseReason::TimeFreeze);
            }
            PowerUpEffect::Multiplier { factor, .. } => state.bonus_multiplier = factor,
            PowerUpEffect::ExtraLife => state.lives += 1,
            PowerUpEffect::NoEffect => {}
        }
    }

    /// Undo the effect once its delay has elapsed.
    pub fn expire(&self, state: &mut GameState) {
        match self {
            PowerUpEffect::Freeze { .. } => {
                state.resume_from(PauseReason::TimeFreeze);
            }
            PowerUpEffect::Multiplier { .. } => state.bonus_multiplier = 1.0,
            PowerUpEffect::ExtraLife | PowerUpEffect::NoEffect => {}
        }
    }
}

/// Record `kind` in the trail and apply its immediate effect.
///
/// Returns the resolved effect so the caller can schedule its expiry.
pub fn activate(state: &mut GameState, kind: PowerUpKind, config: &EngineConfig) -> PowerUpEffect {
    let effect = PowerUpEffect::for_kind(&kind, config);
    state.power_ups_used.push_back(kind);
    effect.apply(state);
    effect
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Difficulty, GameMode};

    fn playing() -> GameState {
        GameState::new_game(&EngineConfig::default(), GameMode::Classic, Difficulty::Normal)
    }

    #[test]
    fn test_time_freeze() {
        let config = EngineConfig::default();
        let mut state = playing();

        let effect = activate(&mut state, PowerUpKind::TimeFreeze, &config);
        assert!(state.is_paused);
        assert!(state.pause_reasons.contains(PauseReason::TimeFreeze));
        assert_eq!(effect.expires_after(), Some(Duration::from_secs(5)));

        effect.expire(&mut state);
        assert!(!state.is_paused);
    }

    #[test]
    fn test_freeze_expiry_keeps_player_pause() {
        let config = EngineConfig::default();
        let mut state = playing();

        let effect = activate(&mut state, PowerUpKind::TimeFreeze, &config);
        state.pause_for(PauseReason::Player);
        effect.expire(&mut state);

        assert!(state.is_paused);
    }

    #[test]
    fn test_score_multiplier() {
        let config = EngineConfig::default();
        let mut state = playing();

        let effect = activate(&mut state, PowerUpKind::ScoreMultiplier, &config);
        assert_eq!(state.bonus_multiplier, 2.0);
        assert_eq!(effect.expires_after(), Some(Duration::from_secs(10)));

        effect.expire(&mut state);
        assert_eq!(state.bonus_multiplier, 1.0);
    }

    #[test]
    fn test_extra_life() {
        let mut state = playing();

        let effect = activate(&mut state, PowerUpKind::ExtraLife, &EngineConfig::default());

        assert_eq!(state.lives, 4);
        assert_eq!(effect.expires_after(), None);
    }

    #[test]
    fn test_hint_and_unknown_only_recorded() {
        let mut state = playing();
        let before = state.clone();

        activate(&mut state, PowerUpKind::Hint, &EngineConfig::default());
        activate(&mut state, PowerUpKind::from("confetti"), &EngineConfig::default());

        assert_eq!(state.power_ups_used.len(), 2);
        state.power_ups_used.clear();
        assert_eq!(state, before);
    }
}
