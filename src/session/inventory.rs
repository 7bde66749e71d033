//! Power-up entitlement.
//!
//! The engine applies any power-up it is asked to. Checking that the player
//! owns one, and using it up, happens here, before activation.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::powerups::PowerUpKind;

use super::SessionError;

/// Consumes one unit of a power-up, or refuses.
pub trait PowerUpLedger {
    /// Use up one `kind`. Errors when none is available.
    fn consume(&mut self, kind: &PowerUpKind) -> Result<(), SessionError>;
}

/// In-memory inventory of power-ups.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerUpInventory {
    quantities: FxHashMap<PowerUpKind, u32>,
}

impl PowerUpInventory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units of `kind`.
    pub fn add(&mut self, kind: PowerUpKind, quantity: u32) {
        if quantity > 0 {
            *self.quantities.entry(kind).or_insert(0) += quantity;
        }
    }

    /// Builder form of `add`.
    #[must_use]
    pub fn with(mut self, kind: PowerUpKind, quantity: u32) -> Self {
        self.add(kind, quantity);
        self
    }

    /// Units of `kind` owned.
    #[must_use]
    pub fn quantity(&self, kind: &PowerUpKind) -> u32 {
        self.quantities.get(kind).copied().unwrap_or(0)
    }

    /// Whether nothing is owned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }
}

impl PowerUpLedger for PowerUpInventory {
    fn consume(&mut self, kind: &PowerUpKind) -> Result<(), SessionError> {
        match self.quantities.get_mut(kind) {
            Some(quantity) if *quantity > 0 => {
                *quantity -= 1;
                if *quantity == 0 {
                    self.quantities.remove(kind);
                }
                Ok(())
            }
            // A stored inventory may carry zero entries.
            _ => Err(SessionError::PowerUpUnavailable(kind.clone())),
        }
    }
}

/// Ledger that grants every activation.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unlimited;

impl PowerUpLedger for Unlimited {
    fn consume(&mut self, _kind: &PowerUpKind) -> Result<(), SessionError> {
        Ok(())
    }
}
