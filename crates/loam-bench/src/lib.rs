//! Benchmark profiles and demo utilities for the loam container library.
//!
//! Provides deterministic random-value fills for benchmarks and the
//! `fill_report` example:
//!
//! - [`random_values`]: seeded sequence of uniform `f64` samples
//! - [`random_fixed_array`]: a [`FixedArray`] filled from that sequence
//!
//! Sequences are generated with a seeded ChaCha8 RNG, so the same seed
//! always produces the same fill.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use loam_array::FixedArray;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Generate `len` uniform samples in `[0, 1)` from the given seed.
pub fn random_values(len: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.random()).collect()
}

/// Build a [`FixedArray`] of `len` slots filled with seeded random values.
///
/// # Panics
///
/// Panics if `len` is zero; benchmark profiles always use positive sizes.
pub fn random_fixed_array(len: usize, seed: u64) -> FixedArray<f64> {
    let mut arr = FixedArray::new(len, 0.0).expect("profile sizes are positive");
    for (i, v) in random_values(len, seed).into_iter().enumerate() {
        arr.set(i, v).expect("index bounded by len");
    }
    arr
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        assert_eq!(random_values(32, 7), random_values(32, 7));
        assert_ne!(random_values(32, 7), random_values(32, 8));
    }

    #[test]
    fn fill_covers_every_slot() {
        let arr = random_fixed_array(16, 42);
        assert_eq!(arr.len(), 16);
        assert!(arr.iter().all(|&v| (0.0..1.0).contains(&v)));
    }
}
