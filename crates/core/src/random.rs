//! Injected randomness for fleet generation.
//!
//! Generation never reaches for a global RNG. Every draw goes through a
//! [`RandomSource`], so production code can use a thread or seeded RNG while
//! tests replay a scripted sequence of draws.

use rand::{rngs::StdRng, rngs::ThreadRng, Rng, SeedableRng};

/// A source of uniform draws in `[0, 1)`.
///
/// Only [`RandomSource::next_f64`] is required; the bounded helpers are
/// derived from it so every implementation samples the same way.
pub trait RandomSource {
    /// Returns the next uniform draw in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Returns an integer in `min..=max`.
    fn int_between(&mut self, min: u64, max: u64) -> u64 {
        debug_assert!(min <= max, "int_between called with min > max");
        let span = (max - min + 1) as f64;
        let offset = (self.next_f64() * span).floor() as u64;
        // Guard against a draw of exactly 1.0 from a misbehaving source.
        min + offset.min(max - min)
    }

    /// Returns a float in `[min, max)`.
    fn float_between(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Returns true with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Picks one element uniformly. Panics on an empty slice.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        let idx = (self.next_f64() * items.len() as f64).floor() as usize;
        &items[idx.min(items.len() - 1)]
    }
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// [`RandomSource`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<ThreadRng> {
    /// Unseeded source using the thread-local RNG.
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl RngSource<StdRng> {
    /// Reproducible source: the same seed yields the same sequence of draws.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_f64(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Replays a fixed list of draws, cycling when exhausted.
///
/// Intended for tests that need to steer individual branches of the
/// generator.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    draws: Vec<f64>,
    cursor: usize,
}

impl SequenceSource {
    pub fn new(draws: impl Into<Vec<f64>>) -> Self {
        let draws = draws.into();
        assert!(!draws.is_empty(), "SequenceSource needs at least one draw");
        Self { draws, cursor: 0 }
    }

    /// Number of draws consumed so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceSource {
    fn next_f64(&mut self) -> f64 {
        let value = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_between_covers_both_bounds() {
        let mut low = SequenceSource::new([0.0]);
        let mut high = SequenceSource::new([0.9999]);

        assert_eq!(low.int_between(1, 3), 1);
        assert_eq!(high.int_between(1, 3), 3);
    }

    #[test]
    fn test_int_between_single_value() {
        let mut source = SequenceSource::new([0.42]);
        assert_eq!(source.int_between(0, 0), 0);
    }

    #[test]
    fn test_int_between_clamps_out_of_range_draw() {
        let mut source = SequenceSource::new([1.0]);
        assert_eq!(source.int_between(0, 5), 5);
    }

    #[test]
    fn test_float_between() {
        let mut source = SequenceSource::new([0.5]);
        let value = source.float_between(0.10, 0.40);
        assert!((value - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_chance_is_strict() {
        let mut source = SequenceSource::new([0.7, 0.69]);
        assert!(!source.chance(0.7));
        assert!(source.chance(0.7));
    }

    #[test]
    fn test_choose_maps_draw_to_index() {
        let items = ["a", "b", "c", "d"];
        let mut source = SequenceSource::new([0.0, 0.26, 0.99]);

        assert_eq!(*source.choose(&items), "a");
        assert_eq!(*source.choose(&items), "b");
        assert_eq!(*source.choose(&items), "d");
    }

    #[test]
    fn test_sequence_source_cycles() {
        let mut source = SequenceSource::new([0.1, 0.2]);
        let draws: Vec<f64> = (0..5).map(|_| source.next_f64()).collect();

        assert_eq!(draws, vec![0.1, 0.2, 0.1, 0.2, 0.1]);
        assert_eq!(source.consumed(), 5);
    }

    #[test]
    fn test_seeded_sources_agree() {
        let mut a = RngSource::seeded(7);
        let mut b = RngSource::seeded(7);

        for _ in 0..32 {
            assert_eq!(a.next_f64(), b.next_f64());
        }
    }

    #[test]
    fn test_thread_source_in_unit_interval() {
        let mut source = RngSource::thread();
        for _ in 0..1_000 {
            let value = source.next_f64();
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn test_mutable_reference_is_a_source() {
        fn draw<R: RandomSource>(mut rng: R) -> u64 {
            rng.int_between(10, 19)
        }

        let mut source = SequenceSource::new([0.5]);
        assert_eq!(draw(&mut source), 15);
        assert_eq!(source.consumed(), 1);
    }
}
