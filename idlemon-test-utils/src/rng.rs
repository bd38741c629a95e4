use std::{
    any::Any,
    collections::hash_map::Entry,
};

use ahash::{
    HashMap,
    HashMapExt,
};
use idlemon_prng::{
    LcgRandomSource,
    RandomSource,
};

/// A controlled random number generator, for tests that need fine-grained control over dice rolls.
///
/// Values are counted from 1. A fake value replaces the value at its position in the sequence.
pub struct ControlledRandomNumberGenerator {
    count: usize,
    fake_values: HashMap<usize, u64>,
    real: LcgRandomSource,
}

impl ControlledRandomNumberGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            count: 0,
            fake_values: HashMap::new(),
            real: LcgRandomSource::new(seed),
        }
    }
}

impl RandomSource for ControlledRandomNumberGenerator {
    fn initial_seed(&self) -> u64 {
        self.real.initial_seed()
    }

    fn next(&mut self) -> u64 {
        // Roll the underlying source to keep the sequence consistent, even if we do not use the
        // value.
        let next = self.real.next();
        self.count += 1;
        match self.fake_values.entry(self.count) {
            Entry::Occupied(fake_entry) => fake_entry.remove(),
            Entry::Vacant(_) => next,
        }
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl ControlledRandomNumberGenerator {
    /// Number of values consumed so far.
    pub fn sequence_count(&self) -> usize {
        self.count
    }

    pub fn insert_fake_value(&mut self, count: usize, value: u64) {
        self.fake_values.insert(count, value);
    }

    pub fn insert_fake_values<I>(&mut self, iterable: I)
    where
        I: IntoIterator<Item = (usize, u64)>,
    {
        self.fake_values.extend(iterable);
    }

    /// Inserts fake values positioned relative to the values already consumed.
    ///
    /// Position 1 is the next value consumed.
    pub fn insert_fake_values_relative_to_sequence_count<I>(&mut self, iterable: I)
    where
        I: IntoIterator<Item = (usize, u64)>,
    {
        let count = self.count;
        self.fake_values.extend(
            iterable
                .into_iter()
                .map(|(offset, value)| (offset + count, value)),
        );
    }
}

/// Downcasts a boxed random source created for a test.
pub fn get_controlled_rng(
    rng: &mut dyn RandomSource,
) -> Option<&mut ControlledRandomNumberGenerator> {
    rng.as_any_mut()
        .downcast_mut::<ControlledRandomNumberGenerator>()
}

#[cfg(test)]
mod rng_test {
    use idlemon_prng::{
        LcgRandomSource,
        RandomSource,
    };
    use pretty_assertions::assert_eq;

    use crate::{
        ControlledRandomNumberGenerator,
        get_controlled_rng,
    };

    #[test]
    fn replaces_values_at_positions() {
        let mut rng = ControlledRandomNumberGenerator::new(Some(7));
        let mut real = LcgRandomSource::new(Some(7));
        rng.insert_fake_values([(2, 100), (3, 200)]);
        assert_eq!(rng.next(), real.next());
        assert_eq!(rng.next(), 100);
        assert_eq!(rng.next(), 200);
        real.next();
        real.next();
        assert_eq!(rng.next(), real.next());
        assert_eq!(rng.sequence_count(), 4);
    }

    #[test]
    fn inserts_values_relative_to_sequence() {
        let mut rng = ControlledRandomNumberGenerator::new(Some(7));
        rng.next();
        rng.next();
        rng.insert_fake_values_relative_to_sequence_count([(1, 5)]);
        assert_eq!(rng.next(), 5);
    }

    #[test]
    fn downcasts_from_random_source() {
        let mut boxed: Box<dyn RandomSource> = Box::new(ControlledRandomNumberGenerator::new(None));
        assert!(get_controlled_rng(boxed.as_mut()).is_some());
        let mut real: Box<dyn RandomSource> = Box::new(LcgRandomSource::new(None));
        assert!(get_controlled_rng(real.as_mut()).is_none());
    }
}
