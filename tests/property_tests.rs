//! Property tests for challenge generation and scoring.

use proptest::prelude::*;

use color_rush::challenge::{ChallengeGenerator, PALETTE};
use color_rush::core::{Difficulty, EngineConfig, GameMode, GameRng, GameState};
use color_rush::scoring::{apply_correct, apply_wrong, points_for};

fn difficulty() -> impl Strategy<Value = Difficulty> {
    prop::sample::select(Difficulty::ALL.to_vec())
}

fn mode() -> impl Strategy<Value = GameMode> {
    prop::sample::select(GameMode::ALL.to_vec())
}

proptest! {
    #[test]
    fn challenges_are_well_formed(seed in any::<u64>(), difficulty in difficulty(), level in 1u32..50) {
        let mut generator = ChallengeGenerator::new(GameRng::new(seed));

        for _ in 0..8 {
            let challenge = generator.generate(difficulty, level);

            prop_assert_eq!(challenge.options.len(), difficulty.option_count());
            prop_assert_eq!(challenge.options.iter().filter(|o| o.is_correct).count(), 1);
            prop_assert_eq!(challenge.difficulty, level);

            let correct = challenge.correct_option().unwrap();
            prop_assert_eq!(&correct.color, &challenge.target_color);
            prop_assert_eq!(&correct.color_name, &challenge.target_color_name);

            for (position, option) in challenge.options.iter().enumerate() {
                prop_assert_eq!(usize::from(option.id.0), position);
                let family = PALETTE.iter().find(|f| f.name == option.color_name).unwrap();
                prop_assert!(family.owns_shade(&option.color));
                if !option.is_correct {
                    prop_assert_ne!(&option.color_name, &challenge.target_color_name);
                }
                if !difficulty.allows_similar_shades() {
                    prop_assert_eq!(option.color.as_str(), family.canonical);
                }
            }
        }
    }

    #[test]
    fn challenge_ids_increase(seed in any::<u64>(), count in 1usize..30) {
        let mut generator = ChallengeGenerator::new(GameRng::new(seed));
        let ids: Vec<_> = (0..count).map(|_| generator.generate(Difficulty::Normal, 1).id).collect();

        prop_assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn answers_keep_state_consistent(
        answers in prop::collection::vec(any::<bool>(), 0..80),
        mode in mode(),
        difficulty in difficulty(),
    ) {
        let config = EngineConfig::default();
        let mut state = GameState::new_game(&config, mode, difficulty);
        let mut previous_score = 0;

        for correct in answers {
            if state.lives <= 0 {
                break;
            }
            let max_streak = state.max_streak;

            if correct {
                let expected = points_for(state.level, state.streak + 1, difficulty, 1.0);
                let outcome = apply_correct(&mut state);
                prop_assert!(outcome.score_delta() >= expected);
            } else {
                apply_wrong(&mut state, config.wrong_answer_penalty_secs);
                prop_assert_eq!(state.streak, 0);
            }

            prop_assert!(state.score >= previous_score);
            prop_assert!(state.max_streak >= max_streak);
            prop_assert!(state.max_streak >= state.streak);
            prop_assert!(state.time_left >= 0.0);
            prop_assert_eq!(state.level, state.colors_matched / 10 + 1);
            previous_score = state.score;
        }
    }

    #[test]
    fn points_grow_with_level_and_streak(
        level in 1u32..100,
        streak in 0u32..200,
        difficulty in difficulty(),
    ) {
        let base = points_for(level, streak, difficulty, 1.0);

        prop_assert!(points_for(level + 1, streak, difficulty, 1.0) >= base);
        prop_assert!(points_for(level, streak + 5, difficulty, 1.0) > base);
        prop_assert!(points_for(level, streak, difficulty, 2.0) >= base * 2);
    }
}
