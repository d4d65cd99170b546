//! The single sequential random source shared by all probabilistic rules.

use rand::rngs::OsRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A seeded, sequentially consumed stream of uniform draws.
///
/// One stream is created per run and threaded by `&mut` through every call
/// that needs randomness. Together with the fixed row-major cell enumeration
/// order, this makes an entire simulation trajectory a pure function of the
/// seed: two streams built from the same seed yield bit-identical draw
/// sequences.
///
/// Backed by `ChaCha8Rng`, seeded either from OS entropy (production) or a
/// fixed `u64` (reproducible runs and tests).
///
/// # Examples
///
/// ```
/// use smolder_core::EntropyStream;
///
/// let mut a = EntropyStream::with_seed(7);
/// let mut b = EntropyStream::with_seed(7);
/// for _ in 0..32 {
///     assert_eq!(a.chance(0.5), b.chance(0.5));
/// }
/// ```
#[derive(Debug)]
pub struct EntropyStream {
    rng: ChaCha8Rng,
}

impl EntropyStream {
    /// Seed a stream from the operating system's entropy source.
    ///
    /// # Errors
    ///
    /// Returns `Err` when OS entropy is unavailable. This is fatal for a
    /// simulation run — callers must not substitute a weaker fallback seed.
    pub fn from_os_entropy() -> Result<Self, rand::Error> {
        let mut seed = [0u8; 32];
        OsRng.try_fill_bytes(&mut seed)?;
        Ok(Self {
            rng: ChaCha8Rng::from_seed(seed),
        })
    }

    /// Seed a stream from a fixed value, for reproducible trajectories.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// One Bernoulli draw: `true` with the given probability.
    ///
    /// Consumes exactly one uniform draw regardless of the outcome, so the
    /// stream position stays aligned across runs that differ only in their
    /// probability constants. A probability of `0.0` is never `true`; `1.0`
    /// is always `true`.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.rng.gen::<f64>() < probability
    }

    /// A uniform age in `[0, bound)`.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is not positive.
    pub fn uniform_age(&mut self, bound: i32) -> i32 {
        self.rng.gen_range(0..bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn same_seed_same_draw_sequence() {
        let mut a = EntropyStream::with_seed(42);
        let mut b = EntropyStream::with_seed(42);
        for _ in 0..256 {
            assert_eq!(a.uniform_age(70), b.uniform_age(70));
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = EntropyStream::with_seed(1);
        let mut b = EntropyStream::with_seed(2);
        let draws_a: Vec<i32> = (0..64).map(|_| a.uniform_age(1_000_000)).collect();
        let draws_b: Vec<i32> = (0..64).map(|_| b.uniform_age(1_000_000)).collect();
        assert_ne!(draws_a, draws_b);
    }

    #[test]
    fn chance_zero_never_fires() {
        let mut stream = EntropyStream::with_seed(9);
        assert!((0..1000).all(|_| !stream.chance(0.0)));
    }

    #[test]
    fn chance_one_always_fires() {
        let mut stream = EntropyStream::with_seed(9);
        assert!((0..1000).all(|_| stream.chance(1.0)));
    }

    #[test]
    fn os_entropy_stream_is_usable() {
        let mut stream = EntropyStream::from_os_entropy().expect("OS entropy available");
        let age = stream.uniform_age(70);
        assert!((0..70).contains(&age));
    }

    proptest! {
        #[test]
        fn uniform_age_stays_in_bound(seed in any::<u64>(), bound in 1i32..10_000) {
            let mut stream = EntropyStream::with_seed(seed);
            for _ in 0..32 {
                let age = stream.uniform_age(bound);
                prop_assert!((0..bound).contains(&age));
            }
        }
    }
}
