//! Core value types: cards, seats, randomness, and the game snapshot.

pub mod card;
pub mod rng;
pub mod seat;
pub mod state;

pub use card::{Card, Rank, Suit};
pub use rng::GameRng;
pub use seat::{Seat, SeatMap};
pub use state::{Direction, GameState, DEFAULT_HAND_SIZE, MAX_SEATS};
