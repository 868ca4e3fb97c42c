//! State transitions for accepted plays, penalty draws, and the draw action.
//!
//! Every function here is a pure map from one snapshot to the next. The
//! resolver trusts its input: callers validate a play against
//! [`legal_moves`](super::moves::legal_moves) first (the session layer does
//! this for every submitted action). Only empty input is rejected
//! defensively.

use tracing::debug;

use crate::core::{Card, GameRng, GameState, Rank, Seat};
use crate::deck::draw;

/// Draw counts for a rule infraction detected by the surrounding game, e.g.
/// exposing cards or attempting an illegal play in a face-to-face setting.
#[derive(Clone, Copy, Debug)]
pub struct PenaltyCounts {
    /// Cards drawn for showing cards that should have stayed hidden.
    pub exposure: usize,
    /// Cards drawn for the illegal move itself.
    pub misplay: usize,
}

impl Default for PenaltyCounts {
    fn default() -> Self {
        Self {
            exposure: 1,
            misplay: 2,
        }
    }
}

fn cards_noun(n: usize) -> String {
    if n == 1 {
        "1 card".to_string()
    } else {
        format!("{n} cards")
    }
}

/// Resolve an accepted play of one card or a run.
///
/// The effect is keyed by the rank of the **last** card played; draw-pressure
/// gains sum over every 2 and black Jack in the play. After the rank effect,
/// the declaration check runs: a hand emptied without a prior declaration
/// forces an immediate one-card penalty draw, and a hand that stays occupied
/// loses any outstanding declaration.
#[must_use]
pub fn apply_card_effect(state: &GameState, played: &[Card], rng: &mut GameRng) -> GameState {
    let Some(&last) = played.last() else {
        // Defensive: an empty play is meaningless; hand back the same state.
        return state.clone();
    };

    let actor = state.current;
    let seats = state.seat_count();
    let mut next = state.clone();

    next.hands[actor] = state.hands[actor]
        .iter()
        .copied()
        .filter(|card| !played.contains(card))
        .collect();
    for &card in played {
        next.discard.push_back(card);
    }
    next.has_played[actor] = true;

    let pressure_gain: u32 = played.iter().map(|card| card.draw_penalty()).sum();

    match last.rank {
        Rank::Two => {
            next.draw_pressure += pressure_gain;
            next.current = actor.next_in(next.direction, seats);
            next.last_card_called[next.current] = false;
            next.message = format!("Draw pressure increases to {}", next.draw_pressure);
        }
        Rank::Jack if !last.suit.is_red() => {
            next.draw_pressure += pressure_gain;
            next.current = actor.next_in(next.direction, seats);
            next.last_card_called[next.current] = false;
            next.message = format!("Draw pressure increases to {}", next.draw_pressure);
        }
        Rank::Jack => {
            next.draw_pressure = 0;
            next.message = if state.draw_pressure > 0 {
                "Red Jack cancels draw pressure".to_string()
            } else {
                "Red Jack cancels effects".to_string()
            };
            next.current = actor.next_in(next.direction, seats);
        }
        Rank::Eight => {
            let skipped = actor.next_in(next.direction, seats);
            next.has_played[skipped] = true;
            next.last_card_called[skipped] = false;
            next.message = format!("{skipped} is skipped");
            next.current = skipped.next_in(next.direction, seats);
        }
        Rank::King => {
            next.direction = next.direction.flipped();
            next.message = "Order of play reversed".to_string();
            next.current = actor.next_in(next.direction, seats);
        }
        Rank::Ace => {
            // The Ace's own suit now tops the discard, so the next match
            // works against it with no extra state.
            next.message = format!("Suit changed to {}", last.suit);
            next.current = actor.next_in(next.direction, seats);
        }
        Rank::Queen => {
            if played.len() == 1 {
                // Uncovered Queen: the actor failed to cover it and draws
                // one card into their own hand before the turn passes.
                let outcome = draw(&next.deck, &next.discard, 1, rng);
                next.deck = outcome.deck;
                next.discard = outcome.discard;
                next.message = format!(
                    "{actor} draws {} for not covering the Queen",
                    cards_noun(outcome.drawn.len())
                );
                for card in outcome.drawn {
                    next.hands[actor].push_back(card);
                }
                next.last_card_called[actor] = false;
                next.current = actor.next_in(next.direction, seats);
            } else {
                next.message = "Queen covered".to_string();
                next.current = actor.next_in(next.direction, seats);
            }
        }
        _ => {
            next.message = format!("{actor} plays {last}");
            next.current = actor.next_in(next.direction, seats);
        }
    }

    // Going out without having called it costs a penalty draw, even though
    // the hand is already empty. The draw can turn a would-be winning play
    // into a non-win. The pre-play flag governs, so a declaration consumed
    // by this very play still counts.
    if next.hands[actor].is_empty() && !state.last_card_called[actor] {
        let outcome = draw(&next.deck, &next.discard, 1, rng);
        next.deck = outcome.deck;
        next.discard = outcome.discard;
        let penalty = format!(
            "{actor} draws {} for not calling last card(s)",
            cards_noun(outcome.drawn.len())
        );
        for card in outcome.drawn {
            next.hands[actor].push_back(card);
        }
        next.last_card_called[actor] = false;
        next.message = if next.message.is_empty() {
            penalty
        } else {
            format!("{} {penalty}", next.message)
        };
    } else if !next.hands[actor].is_empty() {
        // Declarations never carry over a turn that does not go out.
        next.last_card_called[actor] = false;
    }

    debug!(%actor, played = played.len(), pressure = next.draw_pressure, "play resolved");
    next
}

/// Penalty draw for a rule infraction, applied to `seat`: `misplay` +
/// `exposure` cards, then the turn moves on. Draw pressure is untouched.
#[must_use]
pub fn apply_penalty(
    state: &GameState,
    seat: Seat,
    counts: PenaltyCounts,
    rng: &mut GameRng,
) -> GameState {
    let seats = state.seat_count();
    let mut next = state.clone();

    let outcome = draw(&next.deck, &next.discard, counts.exposure + counts.misplay, rng);
    next.deck = outcome.deck;
    next.discard = outcome.discard;

    let exposure_drawn = counts.exposure.min(outcome.drawn.len());
    let misplay_drawn = outcome.drawn.len() - exposure_drawn;
    for card in outcome.drawn {
        next.hands[seat].push_back(card);
    }
    next.last_card_called[seat] = false;
    next.has_played[seat] = true;
    next.message = format!(
        "Incorrect move, pick up {} for a mistake and {} for exposure",
        cards_noun(misplay_drawn),
        cards_noun(exposure_drawn)
    );
    next.current = seat.next_in(state.direction, seats);
    next
}

/// The draw action: the current player takes `draw_pressure` cards (or one,
/// with no pressure outstanding), pressure resets, and the turn passes.
#[must_use]
pub fn apply_draw(state: &GameState, rng: &mut GameRng) -> GameState {
    let actor = state.current;
    let seats = state.seat_count();
    let count = if state.draw_pressure > 0 {
        state.draw_pressure as usize
    } else {
        1
    };

    let mut next = state.clone();
    let outcome = draw(&next.deck, &next.discard, count, rng);
    next.deck = outcome.deck;
    next.discard = outcome.discard;
    next.message = format!("{actor} drew {}", cards_noun(outcome.drawn.len()));
    for card in outcome.drawn {
        next.hands[actor].push_back(card);
    }
    next.draw_pressure = 0;
    next.has_played[actor] = true;
    next.last_card_called[actor] = false;
    next.current = actor.next_in(next.direction, seats);
    next
}
