//! Challenge generation.
//!
//! ## Algorithm
//!
//! 1. Pick the target family uniformly from the palette.
//! 2. Pick the displayed shade: canonical, or (when the difficulty allows
//!    similar shades and a fair coin lands heads) a uniform variant.
//! 3. Build `option_count - 1` wrong options, each from a family drawn
//!    uniformly among the other seven, independently (repeats allowed),
//!    with the same shade rule.
//! 4. Shuffle the full option list, then number the options in display
//!    order so an id says nothing about correctness.

use log::trace;

use crate::core::{Difficulty, GameRng};

use super::model::{ChallengeId, ColorChallenge, ColorOption, OptionId, Options};
use super::palette::{ColorFamily, PALETTE};

/// Produces challenges from an injected random source.
#[derive(Clone, Debug)]
pub struct ChallengeGenerator {
    rng: GameRng,
    next_id: u64,
}

impl ChallengeGenerator {
    /// Create a generator drawing from `rng`.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng, next_id: 1 }
    }

    /// The random source, for capturing its position.
    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }

    /// Generate the next challenge.
    ///
    /// `level` is recorded as the challenge's difficulty marker.
    pub fn generate(&mut self, difficulty: Difficulty, level: u32) -> ColorChallenge {
        let similar = difficulty.allows_similar_shades();
        let option_count = difficulty.option_count();

        let target_index = self.rng.pick_index(PALETTE.len());
        let target = &PALETTE[target_index];
        let target_color = self.pick_shade(target, similar);

        let mut drafts: Vec<(&'static str, &'static str, bool)> = Vec::with_capacity(option_count);
        drafts.push((target_color, target.name, true));

        for _ in 1..option_count {
            let wrong = &PALETTE[self.pick_other_family(target_index)];
            let shade = self.pick_shade(wrong, similar);
            drafts.push((shade, wrong.name, false));
        }

        self.rng.shuffle(&mut drafts);

        let options: Options = drafts
            .into_iter()
            .enumerate()
            .map(|(position, (color, name, is_correct))| ColorOption {
                id: OptionId(position as u8),
                color: color.to_string(),
                color_name: name.to_string(),
                is_correct,
            })
            .collect();

        let id = ChallengeId(self.next_id);
        self.next_id += 1;

        trace!("generated {} ({} options, target {})", id, options.len(), target.name);

        ColorChallenge {
            id,
            target_color: target_color.to_string(),
            target_color_name: target.name.to_string(),
            options,
            time_limit_ms: difficulty.challenge_time_limit_ms(),
            difficulty: level,
        }
    }

    /// Canonical shade, or a variant on heads when similar shades are allowed.
    fn pick_shade(&mut self, family: &ColorFamily, similar: bool) -> &'static str {
        if similar && self.rng.coin_flip() {
            family.variants[self.rng.pick_index(family.variants.len())]
        } else {
            family.canonical
        }
    }

    /// Uniform index among every palette family except `excluded`.
    fn pick_other_family(&mut self, excluded: usize) -> usize {
        let pick = self.rng.pick_index(PALETTE.len() - 1);
        if pick >= excluded {
            pick + 1
        } else {
            pick
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_count_per_difficulty() {
        let mut generator = ChallengeGenerator::new(GameRng::new(42));

        for difficulty in Difficulty::ALL {
            for _ in 0..20 {
                let challenge = generator.generate(difficulty, 1);
                assert_eq!(challenge.options.len(), difficulty.option_count());
                assert_eq!(challenge.time_limit_ms, difficulty.challenge_time_limit_ms());
            }
        }
    }

    #[test]
    fn test_exactly_one_correct() {
        let mut generator = ChallengeGenerator::new(GameRng::new(1));

        for _ in 0..200 {
            let challenge = generator.generate(Difficulty::Expert, 3);
            let correct: Vec<_> = challenge.options.iter().filter(|o| o.is_correct).collect();

            assert_eq!(correct.len(), 1);
            assert_eq!(correct[0].color, challenge.target_color);
            assert_eq!(correct[0].color_name, challenge.target_color_name);
        }
    }

    #[test]
    fn test_wrong_options_use_other_families() {
        let mut generator = ChallengeGenerator::new(GameRng::new(5));

        for _ in 0..200 {
            let challenge = generator.generate(Difficulty::Hard, 1);
            for option in challenge.options.iter().filter(|o| !o.is_correct) {
                assert_ne!(option.color_name, challenge.target_color_name);
            }
        }
    }

    #[test]
    fn test_easy_uses_canonical_shades() {
        let mut generator = ChallengeGenerator::new(GameRng::new(11));

        for _ in 0..200 {
            let challenge = generator.generate(Difficulty::Easy, 1);
            for option in &challenge.options {
                let family = ColorFamily::by_name(&option.color_name).unwrap();
                assert_eq!(option.color, family.canonical);
            }
        }
    }

    #[test]
    fn test_normal_sometimes_uses_variants() {
        let mut generator = ChallengeGenerator::new(GameRng::new(13));

        let variant_targets = (0..200)
            .map(|_| generator.generate(Difficulty::Normal, 1))
            .filter(|c| {
                let family = ColorFamily::by_name(&c.target_color_name).unwrap();
                c.target_color != family.canonical && family.owns_shade(&c.target_color)
            })
            .count();

        assert!(variant_targets > 50 && variant_targets < 150, "variants = {}", variant_targets);
    }

    #[test]
    fn test_option_ids_unique_and_in_display_order() {
        let mut generator = ChallengeGenerator::new(GameRng::new(17));
        let challenge = generator.generate(Difficulty::Expert, 1);

        for (position, option) in challenge.options.iter().enumerate() {
            assert_eq!(option.id, OptionId(position as u8));
        }
    }

    #[test]
    fn test_ids_increase() {
        let mut generator = ChallengeGenerator::new(GameRng::new(0));

        let first = generator.generate(Difficulty::Normal, 1);
        let second = generator.generate(Difficulty::Normal, 1);

        assert!(second.id > first.id);
    }

    #[test]
    fn test_difficulty_marker_is_level() {
        let mut generator = ChallengeGenerator::new(GameRng::new(0));
        assert_eq!(generator.generate(Difficulty::Expert, 4).difficulty, 4);
    }

    #[test]
    fn test_same_seed_same_challenges() {
        let mut a = ChallengeGenerator::new(GameRng::new(99));
        let mut b = ChallengeGenerator::new(GameRng::new(99));

        for _ in 0..20 {
            assert_eq!(a.generate(Difficulty::Hard, 2), b.generate(Difficulty::Hard, 2));
        }
    }

    #[test]
    fn test_correct_position_is_spread() {
        let mut generator = ChallengeGenerator::new(GameRng::new(23));
        let mut counts = [0usize; 4];

        for _ in 0..4000 {
            let challenge = generator.generate(Difficulty::Normal, 1);
            counts[challenge.correct_position().unwrap()] += 1;
        }

        // Expected 1000 each; allow generous slack.
        for (position, count) in counts.iter().enumerate() {
            assert!(*count > 850 && *count < 1150, "position {} hit {} times", position, count);
        }
    }
}
