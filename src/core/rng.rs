//! Deterministic random number generation for match simulation.
//!
//! ## Key Features
//!
//! - **Deterministic**: same seed produces an identical sequence, so a
//!   replayed intent stream reproduces the match exactly
//! - **Serializable**: O(1) state capture via the ChaCha8 word position,
//!   so a snapshot of a match restores mid-stream
//!
//! Everything random in the engine (deck shuffles, random discards, AI
//! jitter) draws from the owning match's RNG.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG owned by a match.
///
/// Uses ChaCha8 for speed while maintaining high-quality randomness.
/// Serializes as [`MatchRngState`] so snapshots restore mid-stream.
#[derive(Clone, Debug)]
#[derive(Serialize, Deserialize)]
#[serde(from = "MatchRngState", into = "MatchRngState")]
pub struct MatchRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl MatchRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random integer in the given range.
    pub fn gen_range(&mut self, range: std::ops::Range<i32>) -> i32 {
        self.inner.gen_range(range)
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Generate a uniform value in `[0, 1)`.
    pub fn unit(&mut self) -> f32 {
        self.inner.gen::<f32>()
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> MatchRngState {
        MatchRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &MatchRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for snapshots.
///
/// Uses the ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRngState {
    /// Original seed.
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter).
    pub word_pos: u128,
}

impl From<MatchRngState> for MatchRng {
    fn from(state: MatchRngState) -> Self {
        MatchRng::from_state(&state)
    }
}

impl From<MatchRng> for MatchRngState {
    fn from(rng: MatchRng) -> Self {
        rng.state()
    }
}
