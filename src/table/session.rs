//! The authoritative driver for one table.
//!
//! A `GameSession` owns the `GameState` for a single table and serializes
//! all player actions into it: one action at a time, in the order the caller
//! accepted them. It is the only rules surface a transport needs: the
//! in-process single-player driver and a relay server construct the same
//! session and feed it the same actions, so there is no second copy of the
//! rules anywhere.
//!
//! Client input is untrusted: every submitted play is re-validated against
//! the enumerator before it reaches the resolver.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::core::{GameRng, GameState, Seat};
use crate::rules::{
    apply_card_effect, apply_draw, declare_last_card, legal_moves, round_verdict,
};

use super::event::{ActionError, GameAction, Outbound, TableEvent};
use super::view::{PlayerProfile, PrivateHandPayload, PublicGameView};

/// Authoritative state and roster for one table.
pub struct GameSession {
    room_id: String,
    roster: Vec<PlayerProfile>,
    seat_by_id: FxHashMap<String, Seat>,
    state: GameState,
    rng: GameRng,
    finished: bool,
}

impl GameSession {
    /// Deal a fresh hand and produce the per-seat `game_start` events.
    ///
    /// The roster order fixes the seating: roster\[0\] is seat 0 and acts
    /// first.
    pub fn start(
        room_id: impl Into<String>,
        roster: Vec<PlayerProfile>,
        hand_size: usize,
        mut rng: GameRng,
    ) -> (Self, Vec<Outbound>) {
        let room_id = room_id.into();
        let state = GameState::deal(roster.len(), hand_size, &mut rng);

        let seat_by_id = roster
            .iter()
            .enumerate()
            .map(|(i, profile)| (profile.player_id.clone(), Seat::new(i as u8)))
            .collect();

        let session = Self {
            room_id,
            roster,
            seat_by_id,
            state,
            rng,
            finished: false,
        };

        let events = session
            .roster
            .iter()
            .enumerate()
            .map(|(i, profile)| {
                let seat = Seat::new(i as u8);
                Outbound::to_player(
                    seat,
                    TableEvent::GameStart {
                        view: session.view(),
                        hand: PrivateHandPayload::for_seat(
                            &session.state,
                            &session.room_id,
                            &profile.player_id,
                            seat,
                        ),
                    },
                )
            })
            .collect();

        (session, events)
    }

    /// The current authoritative snapshot.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub fn seat_of(&self, player_id: &str) -> Option<Seat> {
        self.seat_by_id.get(player_id).copied()
    }

    /// The redacted broadcast view of the current snapshot.
    #[must_use]
    pub fn view(&self) -> PublicGameView {
        PublicGameView::project(&self.state, &self.room_id, &self.roster)
    }

    /// Apply one player action and return the resulting event batch.
    ///
    /// Turn ownership and play legality are enforced here for plays and
    /// draws; declarations keep the rules' silent-no-op contract, so a
    /// refused declaration still returns `Ok` with a state update carrying
    /// the unchanged snapshot.
    pub fn handle(
        &mut self,
        player_id: &str,
        action: GameAction,
    ) -> Result<Vec<Outbound>, ActionError> {
        if self.finished {
            return Err(ActionError::GameNotActive);
        }
        let seat = self
            .seat_of(player_id)
            .ok_or(ActionError::UnknownPlayer)?;

        match &action {
            GameAction::PlayCards { cards } => {
                if self.state.current != seat {
                    return Err(ActionError::NotYourTurn);
                }
                if cards.is_empty() {
                    return Err(ActionError::EmptyPlay);
                }

                let hand = &self.state.hands[seat];
                let mut submitted = FxHashSet::default();
                for card in cards {
                    if !submitted.insert(*card) || !hand.contains(card) {
                        return Err(ActionError::CardsNotHeld);
                    }
                }

                let top = self.state.top_card().ok_or(ActionError::GameNotActive)?;
                let moves = legal_moves(hand, top, self.state.draw_pressure);
                let legal = if cards.len() == 1 {
                    moves.singles.contains(&cards[0])
                } else {
                    moves.runs.iter().any(|run| run.as_slice() == cards.as_slice())
                };
                if !legal {
                    return Err(ActionError::IllegalPlay);
                }

                self.state = apply_card_effect(&self.state, cards, &mut self.rng);
            }
            GameAction::DrawCard => {
                if self.state.current != seat {
                    return Err(ActionError::NotYourTurn);
                }
                self.state = apply_draw(&self.state, &mut self.rng);
            }
            GameAction::DeclareLastCard => {
                self.state = declare_last_card(&self.state, seat);
            }
        }

        debug!(room = %self.room_id, player = player_id, "action applied");
        Ok(self.after_action(player_id, action))
    }

    /// Broadcast batch after an accepted action: the action echo, the
    /// redacted state, every refreshed hand, and, once a verdict is in,
    /// the game-over notice.
    fn after_action(&mut self, player_id: &str, action: GameAction) -> Vec<Outbound> {
        let mut out = vec![
            Outbound::to_everyone(TableEvent::PlayerAction {
                player_id: player_id.to_string(),
                action,
            }),
            Outbound::to_everyone(TableEvent::GameStateUpdate { view: self.view() }),
        ];

        for (i, profile) in self.roster.iter().enumerate() {
            let seat = Seat::new(i as u8);
            out.push(Outbound::to_player(
                seat,
                TableEvent::HandUpdate {
                    payload: PrivateHandPayload::for_seat(
                        &self.state,
                        &self.room_id,
                        &profile.player_id,
                        seat,
                    ),
                },
            ));
        }

        let verdict = round_verdict(&self.state);
        if verdict.over {
            self.finished = true;
            let winner_id = verdict
                .winner
                .map(|seat| self.roster[seat.index()].player_id.clone());
            let message = match &winner_id {
                Some(id) => format!("{id} wins!"),
                None => "It's a draw!".to_string(),
            };
            out.push(Outbound::to_everyone(TableEvent::GameOver {
                winner_id,
                message,
            }));
        }

        out
    }
}
