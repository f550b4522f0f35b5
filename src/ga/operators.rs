//! Genetic operators on doctor-assignment vectors.
//!
//! Genes are doctor indices in `[0, nD)`. Every operator here keeps them
//! in that range.
//!
//! # Crossover Operators
//!
//! - [`uniform_crossover`]: each gene from either parent with probability 0.5
//!
//! # Mutation Operators
//!
//! - [`point_mutation`]: reset one random gene to a random doctor — O(1)
//!
//! # References
//!
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"

use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Uniform crossover: each position independently takes `parent1`'s gene
/// with probability 0.5, otherwise `parent2`'s.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths.
pub fn uniform_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    assert_eq!(parent1.len(), parent2.len(), "parents must have equal length");
    parent1
        .iter()
        .zip(parent2)
        .map(|(&a, &b)| if rng.random_bool(0.5) { a } else { b })
        .collect()
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Point mutation: reset one uniformly chosen gene to a uniformly chosen
/// doctor in `0..doctor_count`.
///
/// The new doctor may equal the old one.
///
/// # Complexity
/// O(1)
pub fn point_mutation<R: Rng>(genes: &mut [usize], doctor_count: usize, rng: &mut R) {
    if genes.is_empty() || doctor_count == 0 {
        return;
    }
    let idx = rng.random_range(0..genes.len());
    genes[idx] = rng.random_range(0..doctor_count);
}

/// Applies [`point_mutation`] with probability `rate`.
///
/// Returns whether the mutation fired.
pub fn maybe_point_mutation<R: Rng>(
    genes: &mut [usize],
    doctor_count: usize,
    rate: f64,
    rng: &mut R,
) -> bool {
    if rng.random_range(0.0..1.0) < rate {
        point_mutation(genes, doctor_count, rng);
        true
    } else {
        false
    }
}

// ============================================================================
// Tests
// ============================================================================
