//! Power-up identifiers.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A power-up the player can trigger.
///
/// Serialized as its wire name. Names the engine does not recognize are
/// kept verbatim so the usage trail stays complete.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PowerUpKind {
    /// Pause the clock for a few seconds.
    TimeFreeze,
    /// Double the points of every correct answer for a while.
    ScoreMultiplier,
    /// One more life, immediately.
    ExtraLife,
    /// Reveal the answer. Purely a host concern; the engine only records it.
    Hint,
    /// Anything else. Recorded, no effect.
    Other(String),
}

impl PowerUpKind {
    /// The four kinds with gameplay meaning, in store order.
    pub const KNOWN: [PowerUpKind; 4] = [
        PowerUpKind::TimeFreeze,
        PowerUpKind::ScoreMultiplier,
        PowerUpKind::ExtraLife,
        PowerUpKind::Hint,
    ];

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            PowerUpKind::TimeFreeze => "time_freeze",
            PowerUpKind::ScoreMultiplier => "score_multiplier",
            PowerUpKind::ExtraLife => "extra_life",
            PowerUpKind::Hint => "hint",
            PowerUpKind::Other(name) => name,
        }
    }

    /// Whether the effect expires after a delay.
    #[must_use]
    pub fn is_timed(&self) -> bool {
        matches!(self, PowerUpKind::TimeFreeze | PowerUpKind::ScoreMultiplier)
    }
}

impl fmt::Display for PowerUpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for PowerUpKind {
    fn from(name: &str) -> Self {
        match name {
            "time_freeze" => PowerUpKind::TimeFreeze,
            "score_multiplier" => PowerUpKind::ScoreMultiplier,
            "extra_life" => PowerUpKind::ExtraLife,
            "hint" => PowerUpKind::Hint,
            other => PowerUpKind::Other(other.to_string()),
        }
    }
}

impl From<String> for PowerUpKind {
    fn from(name: String) -> Self {
        match PowerUpKind::from(name.as_str()) {
            PowerUpKind::Other(_) => PowerUpKind::Other(name),
            known => known,
        }
    }
}

impl From<PowerUpKind> for String {
    fn from(kind: PowerUpKind) -> Self {
        match kind {
            PowerUpKind::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for PowerUpKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PowerUpKind::from(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_names() {
        for kind in PowerUpKind::KNOWN {
            assert_eq!(PowerUpKind::from(kind.as_str()), kind);
        }
    }

    #[test]
    fn test_unknown_name_is_kept() {
        let kind: PowerUpKind = "slow_motion".parse().unwrap();
        assert_eq!(kind, PowerUpKind::Other("slow_motion".to_string()));
        assert_eq!(kind.to_string(), "slow_motion");
        assert!(!kind.is_timed());
    }

    #[test]
    fn test_timed_kinds() {
        assert!(PowerUpKind::TimeFreeze.is_timed());
        assert!(PowerUpKind::ScoreMultiplier.is_timed());
        assert!(!PowerUpKind::ExtraLife.is_timed());
        assert!(!PowerUpKind::Hint.is_timed());
    }

    #[test]
    fn test_serializes_as_wire_name() {
        let trail = vec![
            PowerUpKind::TimeFreeze,
            PowerUpKind::Other("mystery".to_string()),
        ];

        let json = serde_json::to_string(&trail).unwrap();
        assert_eq!(json, r#"["time_freeze","mystery"]"#);

        let restored: Vec<PowerUpKind> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, trail);
    }
}
