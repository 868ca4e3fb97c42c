//! Redacted projections of the game state for transmission.
//!
//! The engine operates on full state; nothing leaves the table layer without
//! passing through these projections. A [`PublicGameView`] replaces every
//! hand with its count, and a [`PrivateHandPayload`] carries one seat's
//! cards to its owner only.

use serde::{Deserialize, Serialize};

use crate::core::{Card, GameState, Seat};

/// Roster entry for one seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    pub player_id: String,
    pub is_bot: bool,
}

impl PlayerProfile {
    pub fn human(player_id: impl Into<String>) -> Self {
        Self {
            player_id: player_id.into(),
            is_bot: false,
        }
    }

    pub fn bot(player_id: impl Into<String>) -> Self {
        Self {
            player_id: player_id.into(),
            is_bot: true,
        }
    }
}

/// What everyone may know about one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSummary {
    pub player_id: String,
    pub hand_count: usize,
    pub connected: bool,
    pub is_bot: bool,
}

/// The broadcastable snapshot: everything except the cards in hands and the
/// deck's order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicGameView {
    pub room_id: String,
    pub deck_count: usize,
    pub discard_pile: Vec<Card>,
    pub current_player: usize,
    pub direction: i32,
    pub message: String,
    pub last_card_called: Vec<bool>,
    pub draw_pressure: u32,
    pub has_played: Vec<bool>,
    pub players: Vec<PlayerSummary>,
}

impl PublicGameView {
    /// Project `state` for broadcast, hiding every hand behind its count.
    #[must_use]
    pub fn project(state: &GameState, room_id: &str, roster: &[PlayerProfile]) -> Self {
        Self {
            room_id: room_id.to_string(),
            deck_count: state.deck.len(),
            discard_pile: state.discard.iter().copied().collect(),
            current_player: state.current.index(),
            direction: state.direction.signum(),
            message: state.message.clone(),
            last_card_called: state.last_card_called.values().copied().collect(),
            draw_pressure: state.draw_pressure,
            has_played: state.has_played.values().copied().collect(),
            players: roster
                .iter()
                .enumerate()
                .map(|(i, profile)| PlayerSummary {
                    player_id: profile.player_id.clone(),
                    hand_count: state.hands[Seat::new(i as u8)].len(),
                    connected: true,
                    is_bot: profile.is_bot,
                })
                .collect(),
        }
    }
}

/// One seat's cards, addressed to that seat alone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivateHandPayload {
    pub room_id: String,
    pub player_id: String,
    pub hand: Vec<Card>,
}

impl PrivateHandPayload {
    #[must_use]
    pub fn for_seat(state: &GameState, room_id: &str, player_id: &str, seat: Seat) -> Self {
        Self {
            room_id: room_id.to_string(),
            player_id: player_id.to_string(),
            hand: state.hands[seat].iter().copied().collect(),
        }
    }
}
