//! Legal-move enumeration: single cards and multi-card runs.
//!
//! This is the most intricate rule surface in the game. A run chains cards
//! by adjacent-rank steps in one locked direction within a suit, same-rank
//! hops that pivot to a new suit, one optional A↔2 wrap, and Queen pivots
//! that reset matching. Under draw pressure all of that is suspended and
//! only draw cards (with an optional terminal red-Jack shield) may be
//! chained. Every clause below is load-bearing: loosening or tightening any
//! one changes which plays players may make.
//!
//! The search is an explicit depth-first traversal over the sorted hand with
//! a per-branch index bitmask, so no card is reused within a run and every
//! branching is explored.

use im::Vector;
use serde::Serialize;
use smallvec::SmallVec;

use crate::core::{Card, Rank};

/// An ordered multi-card play. Most plays are short; spill to the heap only
/// for long chains.
pub type Run = SmallVec<[Card; 4]>;

/// Everything the current hand may legally play on the current top card.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LegalMoves {
    /// Cards playable on their own.
    pub singles: Vec<Card>,
    /// Sequences of two or more cards playable in one turn.
    pub runs: Vec<Run>,
}

impl LegalMoves {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.singles.is_empty() && self.runs.is_empty()
    }

    /// All candidate plays, singles first as one-card runs. This is the shape
    /// the opponent heuristic and play validation consume.
    #[must_use]
    pub fn plays(&self) -> Vec<Run> {
        let mut all: Vec<Run> = self
            .singles
            .iter()
            .map(|&card| {
                let mut run = Run::new();
                run.push(card);
                run
            })
            .collect();
        all.extend(self.runs.iter().cloned());
        all
    }
}

/// Enumerate every legal single card and run for `hand` against `top_card`.
///
/// With `draw_pressure > 0` normal suit/rank matching is suspended entirely:
/// only draw cards (2s and black Jacks) may start or extend a play, except
/// that a shielding red Jack may follow a draw card as the final card.
#[must_use]
pub fn legal_moves(hand: &Vector<Card>, top_card: Card, draw_pressure: u32) -> LegalMoves {
    let mut sorted: Vec<Card> = hand.iter().copied().collect();
    sorted.sort_by_key(|card| card.rank);

    let pressured = draw_pressure > 0;
    let mut moves = LegalMoves::default();

    for (start, &card) in sorted.iter().enumerate() {
        if can_start(card, top_card, pressured) {
            let mut run = Run::new();
            run.push(card);
            extend_run(&sorted, &mut run, 1u64 << start, None, 0, pressured, &mut moves);
        }
    }

    moves
}

/// May `card` begin a play on `top`?
fn can_start(card: Card, top: Card, pressured: bool) -> bool {
    if pressured {
        return card.is_draw_card() || card.is_red_jack();
    }
    // A Queen on top is wild: anything may follow it.
    top.rank == Rank::Queen || card.suit == top.suit || card.rank == top.rank
}

/// Signed rank step from `last` to `next` in the order A,2..10,J,Q,K, with
/// the K→A and A→K wraparound equivalences folded in.
fn rank_step(last: Card, next: Card) -> i32 {
    match (last.rank, next.rank) {
        (Rank::King, Rank::Ace) => 1,
        (Rank::Ace, Rank::King) => -1,
        _ => next.rank.index() - last.rank.index(),
    }
}

/// May `next` extend the run, given the locked step `direction` (if any)?
fn valid_next(run: &Run, next: Card, direction: Option<i32>, pressured: bool) -> bool {
    let last = run[run.len() - 1];

    if pressured {
        // Only draw cards chain; a red Jack may cap a draw card.
        if next.is_red_jack() {
            return last.is_draw_card();
        }
        return next.is_draw_card();
    }

    // After a Queen, matching resets: anything goes.
    if last.rank == Rank::Queen {
        return true;
    }
    // A Queen may only land on a same-suit Jack or King.
    if next.rank == Rank::Queen {
        return (last.rank == Rank::Jack || last.rank == Rank::King) && last.suit == next.suit;
    }

    let step = rank_step(last, next);
    if step.abs() == 1 {
        if last.suit != next.suit {
            return false;
        }
        if let Some(locked) = direction {
            if locked != step {
                return false;
            }
        }
        return true;
    }
    // Same-rank hop to another suit; any other distance is illegal.
    step == 0
}

/// Depth-first extension. Records the current prefix (a single when length
/// 1, a run otherwise), then tries every unused card as a continuation.
fn extend_run(
    sorted: &[Card],
    run: &mut Run,
    used: u64,
    direction: Option<i32>,
    wraps: u32,
    pressured: bool,
    out: &mut LegalMoves,
) {
    if run.len() == 1 {
        out.singles.push(run[0]);
    } else {
        out.runs.push(run.clone());
    }

    let last = run[run.len() - 1];
    // Nothing may follow a shielding red Jack while under pressure.
    if pressured && last.is_red_jack() {
        return;
    }

    for (i, &next) in sorted.iter().enumerate() {
        if used & (1 << i) != 0 {
            continue;
        }
        if pressured && !next.is_draw_card() && !next.is_red_jack() {
            continue;
        }
        if !valid_next(run, next, direction, pressured) {
            continue;
        }

        let next_direction = if pressured
            || next.rank == Rank::Queen
            || last.rank == Rank::Queen
        {
            None
        } else {
            match rank_step(last, next) {
                0 => direction,
                step => Some(step),
            }
        };

        let crossed_ace = (last.rank == Rank::Ace && next.rank == Rank::Two)
            || (last.rank == Rank::Two && next.rank == Rank::Ace);
        let next_wraps = if pressured { wraps } else { wraps + u32::from(crossed_ace) };
        if next_wraps > 1 {
            continue;
        }

        run.push(next);
        extend_run(sorted, run, used | (1 << i), next_direction, next_wraps, pressured, out);
        run.pop();
    }
}
