//! Random source helpers.
//!
//! Every stochastic run draws from a single [`StdRng`]. A fixed seed makes
//! a run reproducible; `None` draws a fresh seed from the OS-backed
//! thread generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Creates a seeded generator.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator from an optional seed.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}

/// Draws two distinct indices from `0..n`, uniformly and without replacement.
///
/// # Panics
/// Panics if `n < 2`.
pub fn distinct_pair<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    assert!(n >= 2, "need at least 2 candidates, got {n}");
    let sample = rand::seq::index::sample(rng, n, 2);
    (sample.index(0), sample.index(1))
}

/// Draws two distinct indices from `0..n`, both different from `excluded`.
///
/// # Panics
/// Panics if `n < 3` or `excluded >= n`.
pub fn distinct_pair_excluding<R: Rng>(n: usize, excluded: usize, rng: &mut R) -> (usize, usize) {
    assert!(excluded < n, "excluded index {excluded} out of range 0..{n}");
    let (a, b) = distinct_pair(n - 1, rng);
    let skip = |i: usize| if i >= excluded { i + 1 } else { i };
    (skip(a), skip(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = create_rng(7);
        let mut b = create_rng(7);
        for _ in 0..20 {
            assert_eq!(a.random::<u64>(), b.random::<u64>());
        }
    }

    #[test]
    fn test_distinct_pair() {
        let mut rng = create_rng(42);
        for _ in 0..1000 {
            let (a, b) = distinct_pair(5, &mut rng);
            assert_ne!(a, b);
            assert!(a < 5 && b < 5);
        }
    }

    #[test]
    fn test_distinct_pair_of_two_covers_both_orders() {
        let mut rng = create_rng(3);
        let mut seen = [false; 2];
        for _ in 0..100 {
            let (a, _) = distinct_pair(2, &mut rng);
            seen[a] = true;
        }
        assert!(seen[0] && seen[1]);
    }

    #[test]
    fn test_distinct_pair_excluding() {
        let mut rng = create_rng(42);
        for excluded in 0..4 {
            for _ in 0..500 {
                let (a, b) = distinct_pair_excluding(4, excluded, &mut rng);
                assert_ne!(a, b);
                assert_ne!(a, excluded);
                assert_ne!(b, excluded);
                assert!(a < 4 && b < 4);
            }
        }
    }

    #[test]
    #[should_panic(expected = "need at least 2 candidates")]
    fn test_distinct_pair_too_small_panics() {
        let mut rng = create_rng(1);
        distinct_pair(1, &mut rng);
    }
}
