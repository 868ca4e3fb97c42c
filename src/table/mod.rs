//! The transport-facing boundary: redacted views, the action/event
//! vocabulary, and the per-table session driver.
//!
//! Everything here is synchronous and I/O-free. Transports own connections,
//! timers and rooms; the table owns the rules and the redaction line.
//! No full `GameState` ever crosses into a transport payload.

pub mod event;
pub mod session;
pub mod view;

pub use event::{
    ActionError, Audience, ConnectionStatus, GameAction, Outbound, RoomInfo, TableEvent,
};
pub use session::GameSession;
pub use view::{PlayerProfile, PlayerSummary, PrivateHandPayload, PublicGameView};
