//! # switch-engine
//!
//! Rules engine for a Switch-style shedding card game played with a standard
//! 52-card deck: single cards and multi-card runs, stacking draw penalties,
//! shielding red Jacks, Queen covers, and preemptive last-card declarations.
//!
//! ## Design Principles
//!
//! 1. **One rules implementation.** The in-process single-player driver and
//!    a server-authoritative relay both call the same functions in
//!    [`rules`]; there is no client/server duplicate to drift.
//!
//! 2. **Snapshots, not mutation.** Every accepted action maps an immutable
//!    [`GameState`](core::GameState) to a brand-new one. Persistent
//!    `im::Vector` fields make the wholesale replacement cheap.
//!
//! 3. **Pure and synchronous.** No I/O, no timers, no hidden shared state.
//!    Explicit `GameRng` in, next state out; a seeded game replays exactly.
//!
//! ## Modules
//!
//! - [`core`]: cards, seats, RNG, the game snapshot
//! - [`deck`]: deck building, dealing, and the recycling draw source
//! - [`rules`]: move enumeration, effect resolution, round completion,
//!   declarations
//! - [`bot`]: the priority-list opponent heuristic
//! - [`table`]: redacted views, the action/event vocabulary, and the
//!   per-table session driver

pub mod bot;
pub mod core;
pub mod deck;
pub mod rules;
pub mod table;

// Re-export commonly used types
pub use crate::core::{
    Card, Direction, GameRng, GameState, Rank, Seat, SeatMap, Suit, DEFAULT_HAND_SIZE, MAX_SEATS,
};

pub use crate::deck::{build_deck, deal, draw, shuffle, Dealt, DrawOutcome};

pub use crate::rules::{
    apply_card_effect, apply_draw, apply_penalty, declare_last_card, legal_moves, round_verdict,
    LegalMoves, PenaltyCounts, RoundVerdict, Run,
};

pub use crate::bot::{choose_move, turn_delay, BotMove, Difficulty};

pub use crate::table::{
    ActionError, Audience, ConnectionStatus, GameAction, GameSession, Outbound, PlayerProfile,
    PlayerSummary, PrivateHandPayload, PublicGameView, RoomInfo, TableEvent,
};
