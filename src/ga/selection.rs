//! Binary tournament selection.
//!
//! Both the GA and the island-model GA choose parents by drawing two
//! distinct members uniformly at random and keeping the fitter one.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use crate::problem::Individual;
use crate::random::distinct_pair;
use rand::Rng;

/// Runs one binary tournament and returns the winner's index.
///
/// The first contestant wins only if strictly fitter; equal fitness goes
/// to the second contestant.
///
/// # Panics
/// Panics if `population` has fewer than 2 members.
pub fn binary_tournament<R: Rng>(population: &[Individual], rng: &mut R) -> usize {
    let (a, b) = distinct_pair(population.len(), rng);
    if population[a].fitness() < population[b].fitness() {
        a
    } else {
        b
    }
}
