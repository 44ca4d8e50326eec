//! Deterministic random number generation for board layout.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same board
//! - **Non-mutating helpers**: `shuffled` and `pick_random` work on copies
//! - **Forks**: One independent stream per generated board
//!
//! ```
//! use rust_pairs::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let items = [1, 2, 3, 4, 5];
//!
//! let shuffled = rng.shuffled(&items);
//! assert_eq!(shuffled.len(), items.len());
//!
//! let picks = rng.pick_random(&items, 2).unwrap();
//! assert_eq!(picks.len(), 2);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::error::GameError;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    /// A session forks once per generated board.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Return a shuffled copy of `items`.
    ///
    /// Fisher-Yates over a clone: walks `i` from the last index down to 1 and
    /// swaps with a uniform index in `[0, i]`. The input is left untouched.
    #[must_use]
    pub fn shuffled<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut cloned = items.to_vec();

        for i in (1..cloned.len()).rev() {
            let j = self.inner.gen_range(0..=i);
            cloned.swap(i, j);
        }

        cloned
    }

    /// Pick `count` distinct elements without replacement.
    ///
    /// Each pick removes a uniformly chosen element from a shrinking working
    /// copy, so no position is returned twice.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `count` exceeds `items.len()`.
    pub fn pick_random<T: Clone>(&mut self, items: &[T], count: usize) -> Result<Vec<T>, GameError> {
        if count > items.len() {
            return Err(GameError::InvalidArgument {
                requested: count,
                available: items.len(),
            });
        }

        let mut working = items.to_vec();
        let mut picks = Vec::with_capacity(count);

        for _ in 0..count {
            let index = self.inner.gen_range(0..working.len());
            picks.push(working.remove(index));
        }

        Ok(picks)
    }
}
