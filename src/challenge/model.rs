//! Challenge value objects.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Unique identifier of a generated challenge.
///
/// Allocated from a per-engine counter, so ids never repeat for the
/// lifetime of an engine, across games included.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChallengeId(pub u64);

impl fmt::Display for ChallengeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "challenge-{}", self.0)
    }
}

/// Identifier of an option within one challenge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OptionId(pub u8);

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "option-{}", self.0)
    }
}

/// One selectable color.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorOption {
    pub id: OptionId,
    /// Displayed hex shade.
    pub color: String,
    /// Family name of the shade.
    pub color_name: String,
    pub is_correct: bool,
}

/// Options inline up to the largest difficulty (6).
pub type Options = SmallVec<[ColorOption; 6]>;

/// "Pick the option matching the target color."
///
/// Replaced wholesale on every generation, never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorChallenge {
    pub id: ChallengeId,
    /// Displayed hex shade of the target.
    pub target_color: String,
    /// Family name of the target.
    pub target_color_name: String,
    pub options: Options,
    /// Answer time limit in milliseconds. Informational; the host enforces it.
    pub time_limit_ms: u32,
    /// Game level at generation time.
    pub difficulty: u32,
}

impl ColorChallenge {
    /// Look up an option by id.
    #[must_use]
    pub fn option(&self, id: OptionId) -> Option<&ColorOption> {
        self.options.iter().find(|option| option.id == id)
    }

    /// The correct option.
    ///
    /// Always present for generated challenges.
    #[must_use]
    pub fn correct_option(&self) -> Option<&ColorOption> {
        self.options.iter().find(|option| option.is_correct)
    }

    /// Position of the correct option in display order.
    #[must_use]
    pub fn correct_position(&self) -> Option<usize> {
        self.options.iter().position(|option| option.is_correct)
    }

    /// An option that is not the answer, if any.
    #[must_use]
    pub fn wrong_option(&self) -> Option<&ColorOption> {
        self.options.iter().find(|option| !option.is_correct)
    }
}
