//! Deterministic randomness for shuffling and the opponent heuristic.
//!
//! Every operation that touches chance takes a `&mut GameRng` explicitly, so
//! a seeded game replays bit-for-bit: the same seed produces the same deal,
//! the same recycle shuffles, and the same bot choices. Real play seeds from
//! OS entropy.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seedable RNG wrapper (ChaCha8: fast, high-quality, reproducible).
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Deterministic stream from a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Fresh stream from OS entropy, for live games.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    /// Uniform index in `range`.
    pub fn pick_index(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// True with the given probability.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Fisher–Yates shuffle in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
