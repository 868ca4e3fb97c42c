//! Card identity: ranks, suits, and the predicates the shedding rules key on.
//!
//! A `Card` is a plain `Copy` value. With a single 52-card deck and no jokers
//! there are no duplicates, so the (rank, suit) pair doubles as the card's
//! stable identity, so no separate id field is needed.

use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};

/// Suit of a standard French-deck card.
///
/// Declaration order is the canonical deck order. Serialized as the suit
/// symbol so payloads match the table's wire contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Sequence, Serialize, Deserialize)]
pub enum Suit {
    #[serde(rename = "♠")]
    Spades,
    #[serde(rename = "♥")]
    Hearts,
    #[serde(rename = "♦")]
    Diamonds,
    #[serde(rename = "♣")]
    Clubs,
}

impl Suit {
    /// Hearts and Diamonds. Red and black Jacks have opposite roles.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Suit::Spades => "♠",
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Rank in the fixed matching order A,2..10,J,Q,K.
///
/// `Ord` follows declaration order; run stepping works on [`Rank::index`]
/// with the K↔A wraparound handled by the enumerator, not here.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Sequence, Serialize, Deserialize,
)]
pub enum Rank {
    #[serde(rename = "A")]
    Ace,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "J")]
    Jack,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "K")]
    King,
}

impl Rank {
    /// Position in the matching order: Ace = 0, King = 12.
    #[must_use]
    pub const fn index(self) -> i32 {
        self as i32
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One card of the 52-card deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// A card that imposes draw pressure: any 2, or a black Jack.
    #[must_use]
    pub const fn is_draw_card(self) -> bool {
        matches!(self.rank, Rank::Two) || (matches!(self.rank, Rank::Jack) && !self.suit.is_red())
    }

    /// A red Jack, the shield that cancels accumulated draw pressure.
    #[must_use]
    pub const fn is_red_jack(self) -> bool {
        matches!(self.rank, Rank::Jack) && self.suit.is_red()
    }

    /// Pressure this card adds when part of a play: +2 per 2, +5 per black
    /// Jack, 0 otherwise.
    #[must_use]
    pub const fn draw_penalty(self) -> u32 {
        match (self.rank, self.suit.is_red()) {
            (Rank::Two, _) => 2,
            (Rank::Jack, false) => 5,
            _ => 0,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
