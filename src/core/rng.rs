//! Injected randomness.
//!
//! The rules engine draws exactly two kinds of random values: a permutation
//! of the player set when the lobby closes, and a small legs-per-turn roll at
//! the start of every round. Both go through the `RaceRandom` trait so the
//! engine stays deterministic for a given source.
//!
//! ## Seeded source
//!
//! ```
//! use regatta::core::{GameRng, RaceRandom};
//!
//! let mut rng = GameRng::new(42);
//! let roll = rng.roll(1, 3);
//! assert!((1..=3).contains(&roll));
//!
//! // Same seed, same draws
//! let mut again = GameRng::new(42);
//! assert_eq!(again.roll(1, 3), roll);
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Random capability required by the rules engine.
///
/// Implementations shared between concurrently running games must do their
/// own synchronisation; the engine only ever holds `&mut`.
pub trait RaceRandom {
    /// Return the given players in uniformly random order.
    fn permutation(&mut self, players: Vec<PlayerId>) -> Vec<PlayerId>;

    /// Draw an integer uniformly from `low..=high`.
    fn roll(&mut self, low: u8, high: u8) -> u8;
}

impl<R: RaceRandom + ?Sized> RaceRandom for &mut R {
    fn permutation(&mut self, players: Vec<PlayerId>) -> Vec<PlayerId> {
        (**self).permutation(players)
    }

    fn roll(&mut self, low: u8, high: u8) -> u8 {
        (**self).roll(low, high)
    }
}

/// Deterministic RNG backed by ChaCha8.
///
/// Callers that persist games between requests persist `GameRngState`
/// alongside them and restore with `GameRng::from_state`.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl RaceRandom for GameRng {
    fn permutation(&mut self, mut players: Vec<PlayerId>) -> Vec<PlayerId> {
        players.shuffle(&mut self.inner);
        players
    }

    fn roll(&mut self, low: u8, high: u8) -> u8 {
        self.inner.gen_range(low..=high)
    }
}

/// Serializable RNG state for checkpointing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
