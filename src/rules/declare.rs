//! The last-card declaration gate.
//!
//! A declaration is a preemptive claim, made outside the declarer's own
//! turn, that their next play empties their hand. Any unmet precondition is
//! a silent no-op: the state comes back unchanged and callers that need a
//! reason must recompute it themselves.

use crate::core::{GameState, Seat};
use crate::rules::moves::legal_moves;
use crate::rules::round::round_verdict;

/// Attempt a declaration for `seat`. Succeeds only when:
///
/// 1. `seat` is a valid slot at this table;
/// 2. the round is still running;
/// 3. every seat has completed at least one turn (no opening-ply calls);
/// 4. it is not currently `seat`'s turn;
/// 5. their hand is non-empty;
/// 6. the whole hand is playable right now in a single move: the lone card
///    appears among the legal singles, or some legal run spans the entire
///    hand.
#[must_use]
pub fn declare_last_card(state: &GameState, seat: Seat) -> GameState {
    if seat.index() >= state.seat_count() {
        return state.clone();
    }
    if round_verdict(state).over {
        return state.clone();
    }
    if !state.has_played.values().all(|&played| played) {
        return state.clone();
    }
    if state.current == seat {
        return state.clone();
    }

    let hand = &state.hands[seat];
    if hand.is_empty() {
        return state.clone();
    }
    let Some(top) = state.top_card() else {
        return state.clone();
    };

    let moves = legal_moves(hand, top, state.draw_pressure);
    let can_go_out = if hand.len() == 1 {
        moves.singles.contains(&hand[0])
    } else {
        moves.runs.iter().any(|run| run.len() == hand.len())
    };
    if !can_go_out {
        return state.clone();
    }

    let mut next = state.clone();
    next.last_card_called[seat] = true;
    next.message = format!("{seat} declares last card!");
    next
}
