//! Color matching challenges.
//!
//! - `ColorChallenge` / `ColorOption`: immutable puzzle values
//! - `PALETTE`: the eight color families
//! - `ChallengeGenerator`: builds challenges for a difficulty

mod generator;
mod model;
mod palette;

pub use generator::ChallengeGenerator;
pub use model::{ChallengeId, ColorChallenge, ColorOption, OptionId, Options};
pub use palette::{ColorFamily, PALETTE};
