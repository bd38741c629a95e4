use crate::RandomSource;

/// Returns whether an event with probability `numerator / denominator` occurs.
///
/// Consumes exactly one value from the source.
pub fn chance(source: &mut dyn RandomSource, numerator: u64, denominator: u64) -> bool {
    source.next().rem_euclid(denominator) < numerator
}

/// Returns a random integer in the range `[min, max)`.
pub fn range(source: &mut dyn RandomSource, min: u64, max: u64) -> u64 {
    source.next().rem_euclid(max - min) + min
}

/// Returns a random integer in the range `[min, max]`.
pub fn range_inclusive(source: &mut dyn RandomSource, min: u64, max: u64) -> u64 {
    range(source, min, max + 1)
}

/// Returns a random element from the given slice.
///
/// Slices of length one are returned without consuming a value.
pub fn sample_slice<'a, T>(source: &mut dyn RandomSource, slice: &'a [T]) -> Option<&'a T> {
    match slice.len() {
        0 => None,
        1 => slice.first(),
        len => slice.get(range(source, 0, len as u64) as usize),
    }
}
