//! The whole-game snapshot and its lifecycle.
//!
//! A [`GameState`] is never mutated in place once handed to a consumer: every
//! accepted action derives a brand-new snapshot from the previous one. The
//! deck, discard pile and hands are `im::Vector`s, so that wholesale
//! replacement is a structural-sharing clone rather than a deep copy.
//!
//! Card conservation holds across every transition: the 52 cards only ever
//! move between the deck, the discard pile and the hands.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::Card;
use super::rng::GameRng;
use super::seat::{Seat, SeatMap};
use crate::deck::{build_deck, deal, shuffle};

/// Largest table supported; the game is tuned for 2–4 players.
pub const MAX_SEATS: usize = 4;

/// Cards dealt to each player at the start of a hand.
pub const DEFAULT_HAND_SIZE: usize = 5;

/// Order in which the turn walks the seats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Forward,
    Reverse,
}

impl Direction {
    /// +1 or -1, the per-turn seat increment.
    #[must_use]
    pub const fn signum(self) -> i32 {
        match self {
            Direction::Forward => 1,
            Direction::Reverse => -1,
        }
    }

    /// The opposite order of play (a King was played).
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }
}

/// One immutable snapshot of a hand in progress.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Draw source; cards leave from the front.
    pub deck: Vector<Card>,

    /// Played cards; the back element is the top card that governs matching.
    pub discard: Vector<Card>,

    /// One hand per seat.
    pub hands: SeatMap<Vector<Card>>,

    /// Whose turn it is now.
    pub current: Seat,

    /// Order of play advancement.
    pub direction: Direction,

    /// Human-readable description of the last transition. UI convenience
    /// only; never authoritative.
    pub message: String,

    /// Per seat: an outstanding declaration that the next play empties the
    /// hand. Cleared the instant a turn completes without going out, and
    /// whenever a card lands in that hand.
    pub last_card_called: SeatMap<bool>,

    /// Cards the current player must draw unless they stack or shield.
    pub draw_pressure: u32,

    /// Per seat: has completed at least one turn this hand. Monotonic until
    /// the next deal.
    pub has_played: SeatMap<bool>,
}

impl GameState {
    /// Start a fresh hand: shuffled deck, `hand_size` cards to each of
    /// `seats` players, one starter card flipped onto the discard pile,
    /// player 0 to act going forward.
    #[must_use]
    pub fn deal(seats: usize, hand_size: usize, rng: &mut GameRng) -> Self {
        assert!(
            (2..=MAX_SEATS).contains(&seats),
            "table seats 2 to {MAX_SEATS} players"
        );
        assert!(
            seats * hand_size < 52,
            "deal must leave at least a starter card"
        );

        let shuffled = shuffle(&build_deck(), rng);
        let dealt = deal(&shuffled, seats, hand_size);

        let mut deck = dealt.remaining;
        let mut discard = Vector::new();
        if let Some(starter) = deck.pop_front() {
            discard.push_back(starter);
        }

        Self {
            deck,
            discard,
            hands: SeatMap::new(seats, |seat| dealt.hands[seat.index()].clone()),
            current: Seat::new(0),
            direction: Direction::Forward,
            message: "Game started!".to_string(),
            last_card_called: SeatMap::filled(seats, false),
            draw_pressure: 0,
            has_played: SeatMap::filled(seats, false),
        }
    }

    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.hands.seat_count()
    }

    /// The card that governs what may be played next, if any.
    #[must_use]
    pub fn top_card(&self) -> Option<Card> {
        self.discard.back().copied()
    }

    /// Total cards across deck, discard and hands. Constant (52) for the
    /// lifetime of a hand; exposed for conservation checks.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck.len()
            + self.discard.len()
            + self.hands.values().map(Vector::len).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deal_sets_up_a_two_player_hand() {
        let mut rng = GameRng::seeded(11);
        let state = GameState::deal(2, DEFAULT_HAND_SIZE, &mut rng);

        assert_eq!(state.seat_count(), 2);
        assert_eq!(state.hands[Seat::new(0)].len(), 5);
        assert_eq!(state.hands[Seat::new(1)].len(), 5);
        assert_eq!(state.discard.len(), 1);
        assert_eq!(state.deck.len(), 52 - 10 - 1);
        assert_eq!(state.current, Seat::new(0));
        assert_eq!(state.direction, Direction::Forward);
        assert_eq!(state.draw_pressure, 0);
        assert!(state.last_card_called.values().all(|called| !called));
        assert!(state.has_played.values().all(|played| !played));
    }

    #[test]
    fn deal_conserves_all_cards() {
        let mut rng = GameRng::seeded(5);
        for seats in 2..=MAX_SEATS {
            let state = GameState::deal(seats, DEFAULT_HAND_SIZE, &mut rng);
            assert_eq!(state.card_count(), 52);
        }
    }

    #[test]
    fn top_card_is_the_starter() {
        let mut rng = GameRng::seeded(23);
        let state = GameState::deal(2, DEFAULT_HAND_SIZE, &mut rng);
        assert_eq!(state.top_card(), state.discard.back().copied());
        assert!(state.top_card().is_some());
    }

    #[test]
    fn direction_signum_and_flip() {
        assert_eq!(Direction::Forward.signum(), 1);
        assert_eq!(Direction::Reverse.signum(), -1);
        assert_eq!(Direction::Forward.flipped(), Direction::Reverse);
        assert_eq!(Direction::Reverse.flipped(), Direction::Forward);
    }

    #[test]
    #[should_panic(expected = "table seats")]
    fn deal_rejects_lone_player() {
        let mut rng = GameRng::seeded(1);
        let _ = GameState::deal(1, DEFAULT_HAND_SIZE, &mut rng);
    }

    #[test]
    fn snapshots_share_structure_cheaply() {
        let mut rng = GameRng::seeded(9);
        let state = GameState::deal(2, DEFAULT_HAND_SIZE, &mut rng);
        let copy = state.clone();
        assert_eq!(copy, state);
    }
}
