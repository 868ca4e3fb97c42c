//! Property tests for the structural invariants.

use proptest::prelude::*;
use switch_engine::{
    apply_card_effect, apply_draw, apply_penalty, build_deck, choose_move, deal, shuffle, BotMove,
    Difficulty, GameRng, GameState, PenaltyCounts, Seat,
};

proptest! {
    #[test]
    fn shuffle_is_always_a_permutation(seed in any::<u64>()) {
        let deck = build_deck();
        let mut rng = GameRng::seeded(seed);
        let shuffled = shuffle(&deck, &mut rng);

        prop_assert_eq!(shuffled.len(), 52);
        let mut sorted: Vec<_> = shuffled.iter().copied().collect();
        sorted.sort_by_key(|c| (c.suit as u8, c.rank as u8));
        let mut original: Vec<_> = deck.iter().copied().collect();
        original.sort_by_key(|c| (c.suit as u8, c.rank as u8));
        prop_assert_eq!(sorted, original);
    }

    #[test]
    fn dealing_partitions_without_duplication(
        seed in any::<u64>(),
        players in 2usize..=4,
        hand_size in 1usize..=10,
    ) {
        let mut rng = GameRng::seeded(seed);
        let deck = shuffle(&build_deck(), &mut rng);
        let dealt = deal(&deck, players, hand_size);

        prop_assert_eq!(dealt.hands.len(), players);
        for hand in &dealt.hands {
            prop_assert_eq!(hand.len(), hand_size);
        }
        prop_assert_eq!(dealt.remaining.len(), 52 - players * hand_size);

        let mut seen = std::collections::HashSet::new();
        for hand in &dealt.hands {
            for card in hand {
                prop_assert!(seen.insert(*card));
            }
        }
        for card in &dealt.remaining {
            prop_assert!(seen.insert(*card));
        }
    }

    #[test]
    fn cards_are_conserved_across_random_games(
        seed in any::<u64>(),
        bot_seed in any::<u64>(),
        steps in 1usize..120,
    ) {
        let mut rng = GameRng::seeded(seed);
        let mut bot_rng = GameRng::seeded(bot_seed);
        let mut state = GameState::deal(2, 5, &mut rng);
        prop_assert_eq!(state.card_count(), 52);

        for _ in 0..steps {
            if switch_engine::round_verdict(&state).over {
                break;
            }
            state = match choose_move(&state, Difficulty::Medium, &mut bot_rng) {
                BotMove::Play(run) => apply_card_effect(&state, &run, &mut rng),
                BotMove::Draw => apply_draw(&state, &mut rng),
            };
            prop_assert_eq!(state.card_count(), 52);
            prop_assert!(state.discard.len() >= 1);
        }
    }

    #[test]
    fn penalties_never_create_or_destroy_cards(
        seed in any::<u64>(),
        exposure in 0usize..4,
        misplay in 0usize..4,
    ) {
        let mut rng = GameRng::seeded(seed);
        let state = GameState::deal(2, 5, &mut rng);
        let next = apply_penalty(
            &state,
            Seat::new(1),
            PenaltyCounts { exposure, misplay },
            &mut rng,
        );
        prop_assert_eq!(next.card_count(), 52);
        prop_assert_eq!(
            next.hands[Seat::new(1)].len(),
            5 + exposure + misplay
        );
        prop_assert!(next.has_played[Seat::new(1)]);
    }

    #[test]
    fn has_played_is_monotonic(seed in any::<u64>(), steps in 1usize..60) {
        let mut rng = GameRng::seeded(seed);
        let mut bot_rng = GameRng::seeded(seed ^ 0x5eed);
        let mut state = GameState::deal(2, 5, &mut rng);

        let mut seen_played = [false, false];
        for _ in 0..steps {
            if switch_engine::round_verdict(&state).over {
                break;
            }
            state = match choose_move(&state, Difficulty::Easy, &mut bot_rng) {
                BotMove::Play(run) => apply_card_effect(&state, &run, &mut rng),
                BotMove::Draw => apply_draw(&state, &mut rng),
            };
            for seat in Seat::all(2) {
                if seen_played[seat.index()] {
                    prop_assert!(state.has_played[seat], "has_played reset mid-hand");
                }
                seen_played[seat.index()] = state.has_played[seat];
            }
        }
    }
}
