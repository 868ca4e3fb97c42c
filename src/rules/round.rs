//! Deciding whether a hand is finished, and who won it.

use serde::Serialize;

use crate::core::{GameState, Seat};

/// Outcome of the completion check. `winner` is `None` both while play
/// continues and in a stalemate; `over` disambiguates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RoundVerdict {
    pub over: bool,
    pub winner: Option<Seat>,
}

/// A hand ends when a seat empties its hand. The emptier only wins if their
/// declaration was in force; an empty hand without one is a stalemate (rare,
/// because the resolver's penalty draw refills undeclared exits, but possible
/// once the deck and discard are both exhausted).
#[must_use]
pub fn round_verdict(state: &GameState) -> RoundVerdict {
    let winner = state
        .hands
        .iter()
        .find(|(seat, hand)| hand.is_empty() && state.last_card_called[*seat])
        .map(|(seat, _)| seat);

    if winner.is_none() {
        let stalled = state
            .hands
            .iter()
            .any(|(seat, hand)| hand.is_empty() && !state.last_card_called[seat]);
        if stalled {
            return RoundVerdict {
                over: true,
                winner: None,
            };
        }
    }

    RoundVerdict {
        over: winner.is_some(),
        winner,
    }
}
