//! The built-in opponent.
//!
//! A priority-list heuristic layered on top of the move enumerator: it
//! never interprets the rules itself, only ranks what
//! [`legal_moves`](crate::rules::legal_moves) offers. The transport layer
//! schedules the returned thinking delay (and must cancel the timer when a
//! game is torn down).

use std::cmp::Reverse;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{Card, GameRng, GameState, Rank};
use crate::rules::{legal_moves, Run};

/// How sharp the opponent plays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 30% of the time picks any legal play at random.
    Easy,
    /// Prefers action cards: 2, black Jack, red Jack, Ace.
    #[default]
    Medium,
    /// Medium, but pressure plays come first.
    Hard,
}

/// What the bot wants to do this turn.
#[derive(Clone, Debug, PartialEq)]
pub enum BotMove {
    /// Play these cards, in order.
    Play(Run),
    /// Nothing playable: draw from the deck.
    Draw,
}

fn draw_value(run: &Run) -> u32 {
    run.iter().map(|card| card.draw_penalty()).sum()
}

fn last_card(run: &Run) -> Card {
    run[run.len() - 1]
}

/// Choose the current player's move.
pub fn choose_move(state: &GameState, difficulty: Difficulty, rng: &mut GameRng) -> BotMove {
    let hand = &state.hands[state.current];
    let Some(top) = state.top_card() else {
        return BotMove::Draw;
    };

    let candidates = legal_moves(hand, top, state.draw_pressure).plays();
    if candidates.is_empty() {
        return BotMove::Draw;
    }

    if difficulty == Difficulty::Easy && rng.chance(0.3) {
        let pick = rng.pick_index(0..candidates.len());
        return BotMove::Play(candidates[pick].clone());
    }

    if difficulty == Difficulty::Hard {
        let mut pressure_plays: Vec<&Run> = candidates
            .iter()
            .filter(|run| draw_value(run) > 0)
            .collect();
        if !pressure_plays.is_empty() {
            pressure_plays.sort_by_key(|run| Reverse(draw_value(run)));
            return BotMove::Play(pressure_plays[0].clone());
        }
    }

    let priorities: [fn(Card) -> bool; 4] = [
        |card| card.rank == Rank::Two,
        |card| card.rank == Rank::Jack && !card.suit.is_red(),
        |card| card.is_red_jack(),
        |card| card.rank == Rank::Ace,
    ];
    for wanted in priorities {
        let mut choices: Vec<&Run> = candidates
            .iter()
            .filter(|run| wanted(last_card(run)))
            .collect();
        if !choices.is_empty() {
            choices.sort_by_key(|run| Reverse(draw_value(run)));
            return BotMove::Play(choices[0].clone());
        }
    }

    BotMove::Play(candidates[0].clone())
}

/// Difficulty-dependent thinking delay before the bot acts.
#[must_use]
pub fn turn_delay(difficulty: Difficulty) -> Duration {
    match difficulty {
        Difficulty::Easy => Duration::from_millis(2000),
        Difficulty::Medium => Duration::from_millis(1500),
        Difficulty::Hard => Duration::from_millis(1000),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Direction, Seat, SeatMap, Suit};
    use im::Vector;

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    fn state_with_hand(hand: &[Card], top: Card, draw_pressure: u32) -> GameState {
        GameState {
            deck: Vector::unit(card(Rank::Three, Suit::Clubs)),
            discard: Vector::unit(top),
            hands: SeatMap::new(2, |seat| {
                if seat.index() == 0 {
                    hand.iter().copied().collect()
                } else {
                    Vector::unit(card(Rank::Nine, Suit::Diamonds))
                }
            }),
            current: Seat::new(0),
            direction: Direction::Forward,
            message: String::new(),
            last_card_called: SeatMap::filled(2, false),
            draw_pressure,
            has_played: SeatMap::filled(2, true),
        }
    }

    #[test]
    fn draws_when_nothing_is_playable() {
        let state = state_with_hand(
            &[card(Rank::Four, Suit::Clubs)],
            card(Rank::Seven, Suit::Hearts),
            0,
        );
        let mut rng = GameRng::seeded(1);
        assert_eq!(choose_move(&state, Difficulty::Medium, &mut rng), BotMove::Draw);
    }

    #[test]
    fn prefers_a_two_over_a_plain_match() {
        let state = state_with_hand(
            &[card(Rank::Seven, Suit::Clubs), card(Rank::Two, Suit::Hearts)],
            card(Rank::Seven, Suit::Hearts),
            0,
        );
        let mut rng = GameRng::seeded(1);
        let chosen = choose_move(&state, Difficulty::Medium, &mut rng);
        assert_eq!(
            chosen,
            BotMove::Play(Run::from_slice(&[card(Rank::Two, Suit::Hearts)]))
        );
    }

    #[test]
    fn priority_order_black_jack_before_ace() {
        let state = state_with_hand(
            &[card(Rank::Ace, Suit::Hearts), card(Rank::Jack, Suit::Spades)],
            card(Rank::Five, Suit::Hearts),
            0,
        );
        // Black Jack does not match 5♥... give it a spade top instead.
        let state2 = state_with_hand(
            &[card(Rank::Ace, Suit::Spades), card(Rank::Jack, Suit::Spades)],
            card(Rank::Five, Suit::Spades),
            0,
        );
        let mut rng = GameRng::seeded(1);

        // Only the Ace is playable here.
        let chosen = choose_move(&state, Difficulty::Medium, &mut rng);
        assert_eq!(
            chosen,
            BotMove::Play(Run::from_slice(&[card(Rank::Ace, Suit::Hearts)]))
        );

        // Both playable: the black Jack outranks the Ace.
        let chosen = choose_move(&state2, Difficulty::Medium, &mut rng);
        assert_eq!(
            chosen,
            BotMove::Play(Run::from_slice(&[card(Rank::Jack, Suit::Spades)]))
        );
    }

    #[test]
    fn hard_mode_leads_with_the_heaviest_pressure_play() {
        let state = state_with_hand(
            &[
                card(Rank::Two, Suit::Hearts),
                card(Rank::Jack, Suit::Spades),
                card(Rank::Seven, Suit::Hearts),
            ],
            card(Rank::Seven, Suit::Spades),
            0,
        );
        let mut rng = GameRng::seeded(1);
        let chosen = choose_move(&state, Difficulty::Hard, &mut rng);
        // The 2♥ cannot start on 7♠, so J♠ (worth 5) is the pressure play.
        match chosen {
            BotMove::Play(run) => {
                assert_eq!(draw_value(&run), 5);
                assert_eq!(last_card(&run), card(Rank::Jack, Suit::Spades));
            }
            BotMove::Draw => panic!("hard bot must play a pressure card"),
        }
    }

    #[test]
    fn answers_pressure_by_stacking_when_it_can() {
        let state = state_with_hand(
            &[card(Rank::Two, Suit::Spades), card(Rank::Seven, Suit::Hearts)],
            card(Rank::Two, Suit::Hearts),
            2,
        );
        let mut rng = GameRng::seeded(1);
        let chosen = choose_move(&state, Difficulty::Medium, &mut rng);
        assert_eq!(
            chosen,
            BotMove::Play(Run::from_slice(&[card(Rank::Two, Suit::Spades)]))
        );
    }

    #[test]
    fn falls_back_to_the_first_candidate() {
        let state = state_with_hand(
            &[card(Rank::Seven, Suit::Clubs), card(Rank::Nine, Suit::Hearts)],
            card(Rank::Seven, Suit::Hearts),
            0,
        );
        let mut rng = GameRng::seeded(1);
        let chosen = choose_move(&state, Difficulty::Medium, &mut rng);
        // No action cards at all: first enumerated single.
        match chosen {
            BotMove::Play(run) => assert_eq!(run.len(), 1),
            BotMove::Draw => panic!("a match exists"),
        }
    }

    #[test]
    fn delays_shrink_with_difficulty() {
        assert_eq!(turn_delay(Difficulty::Easy), Duration::from_millis(2000));
        assert_eq!(turn_delay(Difficulty::Medium), Duration::from_millis(1500));
        assert_eq!(turn_delay(Difficulty::Hard), Duration::from_millis(1000));
    }
}
