//! Collaborator contracts: result persistence and power-up inventory.
//!
//! The engine itself knows nothing about saving scores or owning
//! power-ups. This module defines the two narrow seams a host uses:
//!
//! - [`ResultSink`]: persist a completed game ([`GameSummary`])
//! - [`PowerUpLedger`]: consume a power-up before activating it
//!
//! plus in-memory implementations and [`GameSession`], which wires both
//! around an engine.

mod host;
mod inventory;
mod stats;
mod summary;

pub use inventory::{PowerUpInventory, PowerUpLedger, Unlimited};
pub use host::{GameSession, MemorySink, ResultSink, SessionListener};
pub use stats::{PlayerStats, XP_PER_LEVEL};
pub use summary::GameSummary;

use thiserror::Error;

use crate::engine::EngineError;
use crate::powerups::PowerUpKind;

/// Errors from collaborators.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("power-up not available: {0}")]
    PowerUpUnavailable(PowerUpKind),

    #[error("result rejected: {0}")]
    Rejected(String),

    #[error("encoding failed: {0}")]
    Encoding(String),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl From<bincode::Error> for SessionError {
    fn from(err: bincode::Error) -> Self {
        SessionError::Encoding(err.to_string())
    }
}
