//! The rules engine: pure functions from a snapshot plus an input to the
//! next snapshot.
//!
//! There is exactly one implementation of these rules. The local
//! single-player driver and the relay-facing [`table`](crate::table) session
//! both call into this module; neither carries its own copy.

pub mod declare;
pub mod moves;
pub mod resolver;
pub mod round;

pub use declare::declare_last_card;
pub use moves::{legal_moves, LegalMoves, Run};
pub use resolver::{apply_card_effect, apply_draw, apply_penalty, PenaltyCounts};
pub use round::{round_verdict, RoundVerdict};
