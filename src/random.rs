//! Sources of randomness.
//!
//! A [`Deck`](crate::Deck) never reaches for a global generator. It consumes a
//! [`RandomSource`] handed to it at construction, so that callers can swap in a
//! seeded or scripted source when they need reproducible results.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// A provider of uniformly-distributed indices.
pub trait RandomSource {
    /// Returns an index in `0..bound`. The bound must be non-zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}

/// Permutes `items` in place, uniformly (Fisher-Yates).
pub fn shuffle<T, R: RandomSource + ?Sized>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i + 1);
        items.swap(i, j);
    }
}

/// Chooses `min(amount, len)` distinct indices from `0..len`, returned in the order they were
/// selected.
pub fn sample_indices<R: RandomSource + ?Sized>(
    rng: &mut R,
    len: usize,
    amount: usize,
) -> Vec<usize> {
    let amount = amount.min(len);
    let mut indices: Vec<usize> = (0..len).collect();
    for i in 0..amount {
        let j = i + rng.next_index(len - i);
        indices.swap(i, j);
    }
    indices.truncate(amount);
    indices
}

/// A [`RandomSource`] backed by a [`rand::Rng`].
#[derive(Debug, Clone)]
pub struct RngSource<R = StdRng>(R);

impl<R: Rng> From<R> for RngSource<R> {
    fn from(rng: R) -> Self {
        Self(rng)
    }
}

impl Default for RngSource<StdRng> {
    fn default() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl RngSource<StdRng> {
    /// Creates a reproducible source from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RngSource<ThreadRng> {
    /// Creates a source backed by the thread-local generator.
    pub fn thread() -> Self {
        Self(rand::thread_rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_index(&mut self, bound: usize) -> usize {
        self.0.gen_range(0..bound)
    }
}

/// Replays a fixed list of values, cycling when exhausted. Each value is reduced modulo the
/// requested bound. An empty script always yields zero.
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    values: Vec<usize>,
    cursor: usize,
}

impl Scripted {
    /// Creates a new [`Scripted`] source.
    pub fn new<I: IntoIterator<Item = usize>>(values: I) -> Self {
        Self {
            values: values.into_iter().collect(),
            cursor: 0,
        }
    }

    /// The number of values consumed so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for Scripted {
    fn next_index(&mut self, bound: usize) -> usize {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value % bound
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn test_scripted_cycles() {
        let mut rng = Scripted::new([1, 5, 2]);
        let values: Vec<_> = (0..5).map(|_| rng.next_index(4)).collect();
        assert_eq!(values, vec![1, 1, 2, 1, 1]);
        assert_eq!(rng.consumed(), 5);
    }

    #[test]
    fn test_shuffle_scripted() {
        let mut items = ['a', 'b', 'c', 'd'];
        shuffle(&mut Scripted::default(), &mut items);
        assert_eq!(items, ['b', 'c', 'd', 'a']);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = RngSource::seeded(7);
        let mut items: Vec<u32> = (0..52).collect();
        shuffle(&mut rng, &mut items);
        assert_eq!(items.len(), 52);
        assert_eq!(items.iter().copied().sorted().collect_vec(), (0..52).collect_vec());
    }

    #[test]
    fn test_sample_indices() {
        let mut rng = Scripted::new([2, 0]);
        assert_eq!(sample_indices(&mut rng, 4, 2), vec![2, 1]);
        assert_eq!(sample_indices(&mut rng, 3, 10).len(), 3);
        assert!(sample_indices(&mut rng, 0, 3).is_empty());
    }

    #[test]
    fn test_sample_indices_distinct() {
        let mut rng = RngSource::seeded(1337);
        let sample = sample_indices(&mut rng, 20, 12);
        assert_eq!(sample.len(), 12);
        assert!(sample.iter().all_unique());
        assert!(sample.iter().all(|&i| i < 20));
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = RngSource::seeded(42);
        let mut b = RngSource::seeded(42);
        let xs: Vec<_> = (0..16).map(|_| a.next_index(100)).collect();
        let ys: Vec<_> = (0..16).map(|_| b.next_index(100)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_thread_source() {
        let mut rng = RngSource::thread();
        assert!((0..32).all(|_| rng.next_index(3) < 3));
        assert_eq!(rng.next_index(1), 0);
    }

    #[test]
    fn test_borrowed_source() {
        fn pick<R: RandomSource>(mut rng: R) -> usize {
            rng.next_index(10)
        }
        let mut rng = Scripted::new([3, 4]);
        assert_eq!(pick(&mut rng), 3);
        assert_eq!(pick(Box::new(&mut rng)), 4);
        assert_eq!(rng.consumed(), 2);
    }
}
