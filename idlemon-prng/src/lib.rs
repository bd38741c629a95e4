pub mod rand_util;

use std::any::Any;

use rand::Rng;

/// A source of pseudo-random integers.
///
/// Every computation that rolls dice receives one of these explicitly, so a seeded source can
/// reproduce any sequence of stat rolls, gender assignments, and capture attempts.
pub trait RandomSource: Send + Sync {
    /// Returns the seed the source was created with.
    fn initial_seed(&self) -> u64;

    /// Returns the next integer in the sequence.
    fn next(&mut self) -> u64;

    /// Mutable cast to [`Any`] for testing.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// A [`RandomSource`] backed by a 64-bit linear congruential generator.
pub struct LcgRandomSource {
    initial_seed: u64,
    state: u64,
}

impl LcgRandomSource {
    /// Creates a new source.
    ///
    /// Two sources created with the same seed produce exactly the same sequence. A missing seed is
    /// drawn from the thread-local generator of [`rand`].
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        Self {
            initial_seed: seed,
            state: seed,
        }
    }

    fn step(state: u64) -> u64 {
        const MULTIPLIER: u64 = 0x5D588B656C078965;
        const INCREMENT: u64 = 0x0000000000269EC3;
        state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT)
    }
}

impl RandomSource for LcgRandomSource {
    fn initial_seed(&self) -> u64 {
        self.initial_seed
    }

    fn next(&mut self) -> u64 {
        self.state = Self::step(self.state);
        // Low bits of an LCG cycle quickly.
        self.state >> 32
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Creates a boxed [`LcgRandomSource`].
pub fn default_random_source(seed: Option<u64>) -> Box<dyn RandomSource> {
    Box::new(LcgRandomSource::new(seed))
}
