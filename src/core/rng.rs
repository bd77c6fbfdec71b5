//! Die sources: seeded random play and scripted sequences for tests.
//!
//! ## Key Features
//!
//! - **Injectable**: the engine draws every face through [`DieSource`]
//! - **Deterministic**: same seed produces the identical roll sequence
//! - **Serializable**: O(1) capture and restore of the stream position
//!
//! ```
//! use ludo_engine::core::{DieSource, GameRng};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! for _ in 0..20 {
//!     let face = a.roll();
//!     assert!((1..=6).contains(&face));
//!     assert_eq!(face, b.roll());
//! }
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Highest face on the die.
pub const DIE_FACES: u8 = 6;

/// Face that releases a piece from the yard and grants a bonus turn.
pub const SIX: u8 = 6;

/// Source of uniform die faces in `1..=6`.
pub trait DieSource {
    /// Draw the next face.
    fn roll(&mut self) -> u8;
}

impl<D: DieSource + ?Sized> DieSource for Box<D> {
    fn roll(&mut self) -> u8 {
        (**self).roll()
    }
}

/// Seeded die backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new die stream with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed the stream from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
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

impl DieSource for GameRng {
    fn roll(&mut self) -> u8 {
        self.inner.gen_range(1..=DIE_FACES)
    }
}

/// Serializable die stream state.
///
/// Uses the ChaCha8 word position, so capture is O(1) regardless of
/// how many faces have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Replays a fixed list of faces, then falls back to a seeded stream.
///
/// Faces outside `1..=6` are clamped into range when queued.
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    queue: VecDeque<u8>,
    fallback: GameRng,
}

impl ScriptedDice {
    /// Queue the given faces.
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Self {
        Self {
            queue: faces.into_iter().map(|f| f.clamp(1, DIE_FACES)).collect(),
            fallback: GameRng::new(0),
        }
    }

    /// Append one more face.
    pub fn push(&mut self, face: u8) {
        self.queue.push_back(face.clamp(1, DIE_FACES));
    }

    /// Faces still queued.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl DieSource for ScriptedDice {
    fn roll(&mut self) -> u8 {
        match self.queue.pop_front() {
            Some(face) => face,
            None => self.fallback.roll(),
        }
    }
}
