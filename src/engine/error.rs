//! Reasons the engine ignored a host call.
//!
//! The engine never fails in the I/O sense. When a call does not apply to
//! the current state (answering while paused, a power-up after game over)
//! the state is left untouched and the call returns one of these so the
//! host can tell why. Hosts that do not care drop the result.

use thiserror::Error;

use crate::challenge::{ChallengeId, OptionId};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("no game in progress")]
    NotPlaying,

    #[error("game is paused")]
    Paused,

    #[error("{0} is not the current challenge")]
    StaleChallenge(ChallengeId),

    #[error("{option} is not an option of {challenge}")]
    UnknownOption {
        challenge: ChallengeId,
        option: OptionId,
    },
}
