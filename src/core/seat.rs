//! Seats at the table and per-seat storage.
//!
//! `Seat` is a 0-based slot index into the dealt hands. Turn order walks
//! seats in the state's current [`Direction`](super::state::Direction),
//! wrapping at the table edges in either sign.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::state::Direction;

/// A player slot at the table.
///
/// Displays 1-based ("Player 2") to match the transition messages shown to
/// players; all indexing stays 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seat(pub u8);

impl Seat {
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// All seats at a table of `count` players.
    pub fn all(count: usize) -> impl Iterator<Item = Seat> {
        (0..count as u8).map(Seat)
    }

    /// The neighbouring seat one step along `direction`, wrapping around the
    /// table.
    #[must_use]
    pub fn next_in(self, direction: Direction, count: usize) -> Seat {
        let step = (self.0 as i32 + direction.signum()).rem_euclid(count as i32);
        Seat(step as u8)
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 as usize + 1)
    }
}

/// Per-seat storage backed by a `Vec`, indexed by [`Seat`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeatMap<T> {
    slots: Vec<T>,
}

impl<T> SeatMap<T> {
    /// Build a map with one entry per seat from a factory.
    pub fn new(count: usize, factory: impl Fn(Seat) -> T) -> Self {
        Self {
            slots: Seat::all(count).map(factory).collect(),
        }
    }

    /// Build a map with every slot set to the same value.
    pub fn filled(count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(count, |_| value.clone())
    }

    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.slots.len()
    }

    /// Iterate `(seat, value)` pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, v)| (Seat(i as u8), v))
    }

    /// Iterate values only, in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.slots.iter()
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &T {
        &self.slots[seat.index()]
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.slots[seat.index()]
    }
}
