//! Die generators: where fresh face values come from.
//!
//! The game pulls exactly one value per die it re-rolls. Generators can be
//! swapped on a live game, so tests can script the dice mid-game.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;

/// Source of single die faces in 1..=6.
pub trait DieGenerator {
    fn next_die(&mut self) -> u8;
}

impl<F> DieGenerator for F
where
    F: FnMut() -> u8,
{
    fn next_die(&mut self) -> u8 {
        self()
    }
}

/// Uniform dice backed by a small PRNG.
pub struct RandomGenerator {
    rng: ChaCha8Rng,
}

impl RandomGenerator {
    /// Seed from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Reproducible stream for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl DieGenerator for RandomGenerator {
    fn next_die(&mut self) -> u8 {
        self.rng.gen_range(1..=6)
    }
}

/// Cycles through a fixed list of faces forever.
#[derive(Debug, Clone)]
pub struct SequenceGenerator {
    faces: Vec<u8>,
    pos: usize,
}

impl SequenceGenerator {
    /// # Panics
    /// Panics if `faces` is empty.
    pub fn new(faces: impl Into<Vec<u8>>) -> Self {
        let faces = faces.into();
        assert!(!faces.is_empty(), "SequenceGenerator needs at least one face");
        Self { faces, pos: 0 }
    }
}

impl DieGenerator for SequenceGenerator {
    fn next_die(&mut self) -> u8 {
        let face = self.faces[self.pos];
        self.pos = (self.pos + 1) % self.faces.len();
        face
    }
}
