//! The action and event vocabulary shared by every transport.
//!
//! Whether the opponent sits in-process or across a relay, the surrounding
//! system speaks these types: actions travel inward, events travel outward,
//! and rejections are explicit errors, distinct from the engine's silent
//! no-ops (a failed declaration, for instance, is not an error).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Card, Seat};

use super::view::{PlayerSummary, PrivateHandPayload, PublicGameView};

/// A player's request to act.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameAction {
    /// Play one card or a run, in order.
    #[serde(rename = "PLAY_CARDS")]
    PlayCards { cards: Vec<Card> },
    /// Draw from the deck (resolving any draw pressure).
    #[serde(rename = "DRAW_CARD")]
    DrawCard,
    /// Preemptively claim the next play empties the hand.
    #[serde(rename = "DECLARE_LAST_CARD")]
    DeclareLastCard,
}

/// Transport connectivity, relayed to UIs verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    Disconnected,
    Connecting,
    Connected,
}

/// Lobby snapshot for one room. The session registry that manages rooms
/// lives with the transports; this is only the shape it speaks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomInfo {
    pub room_id: String,
    pub host_id: String,
    pub players: Vec<PlayerSummary>,
    pub max_players: usize,
    pub is_started: bool,
}

/// Everything a table can tell its participants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TableEvent {
    /// Lobby membership changed.
    RoomUpdated { room: RoomInfo },
    /// The hand begins; each seat receives its own private payload.
    GameStart {
        view: PublicGameView,
        hand: PrivateHandPayload,
    },
    /// A new authoritative snapshot, redacted for broadcast.
    GameStateUpdate { view: PublicGameView },
    /// One seat's refreshed hand.
    HandUpdate { payload: PrivateHandPayload },
    /// Echo of an accepted action.
    PlayerAction {
        player_id: String,
        action: GameAction,
    },
    /// The hand is over. `winner_id` is `None` for a stalemate.
    GameOver {
        winner_id: Option<String>,
        message: String,
    },
    /// Connectivity change, forwarded by transports.
    ConnectionChange { status: ConnectionStatus },
}

/// Who an event is addressed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Audience {
    Everyone,
    Player(Seat),
}

/// An event with its audience; transports fan these out.
#[derive(Clone, Debug, PartialEq)]
pub struct Outbound {
    pub audience: Audience,
    pub event: TableEvent,
}

impl Outbound {
    pub fn to_everyone(event: TableEvent) -> Self {
        Self {
            audience: Audience::Everyone,
            event,
        }
    }

    pub fn to_player(seat: Seat, event: TableEvent) -> Self {
        Self {
            audience: Audience::Player(seat),
            event,
        }
    }
}

/// Why a submitted action was rejected.
///
/// These are the explicit failures the wire contract promises; everything
/// the rules treat as a silent no-op stays silent.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("game is not active")]
    GameNotActive,
    #[error("player is not at this table")]
    UnknownPlayer,
    #[error("not your turn")]
    NotYourTurn,
    #[error("no cards provided")]
    EmptyPlay,
    #[error("cards are not in your hand")]
    CardsNotHeld,
    #[error("play is not legal on the current top card")]
    IllegalPlay,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Rank, Suit};

    #[test]
    fn actions_use_the_tagged_wire_form() {
        let action = GameAction::PlayCards {
            cards: vec![Card::new(Rank::Seven, Suit::Hearts)],
        };
        let json = serde_json::to_string(&action).unwrap();
        assert!(json.contains("\"type\":\"PLAY_CARDS\""));

        let draw: GameAction = serde_json::from_str(r#"{"type":"DRAW_CARD"}"#).unwrap();
        assert_eq!(draw, GameAction::DrawCard);

        let declare: GameAction =
            serde_json::from_str(r#"{"type":"DECLARE_LAST_CARD"}"#).unwrap();
        assert_eq!(declare, GameAction::DeclareLastCard);
    }

    #[test]
    fn events_tag_with_snake_case_names() {
        let event = TableEvent::GameOver {
            winner_id: Some("alice".to_string()),
            message: "alice wins!".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"event\":\"game_over\""));
        assert!(json.contains("\"winner_id\":\"alice\""));
    }

    #[test]
    fn errors_render_their_wire_messages() {
        assert_eq!(ActionError::NotYourTurn.to_string(), "not your turn");
        assert_eq!(ActionError::GameNotActive.to_string(), "game is not active");
    }

    #[test]
    fn room_updates_round_trip() {
        let event = TableEvent::RoomUpdated {
            room: RoomInfo {
                room_id: "AB12CD".to_string(),
                host_id: "alice".to_string(),
                players: vec![],
                max_players: 4,
                is_started: false,
            },
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"event\":\"room_updated\""));
        assert!(json.contains("\"maxPlayers\":4"));
        let back: TableEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
