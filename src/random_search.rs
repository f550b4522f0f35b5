//! Random sampling baseline.
//!
//! Draws independent uniformly random assignments and keeps the best
//! fitness seen. There is no trajectory: each sample ignores the previous
//! one.

use crate::problem::Problem;
use crate::random::rng_from_seed;
use crate::stats;
use rand::Rng;
use tracing::instrument;

/// Executes pure random search.
pub struct RandomSearch;

impl RandomSearch {
    /// Samples `iterations + 1` assignments with a freshly seeded generator.
    ///
    /// Returns the best-so-far history of length `iterations + 1`.
    pub fn run(problem: &Problem, iterations: usize) -> Vec<f64> {
        Self::run_with_rng(problem, iterations, &mut rng_from_seed(None))
    }

    /// Samples `iterations + 1` assignments drawing from `rng`.
    #[instrument(level = "debug", skip_all, fields(
        patients = problem.patient_count(),
        doctors = problem.doctor_count(),
        iterations = iterations,
    ))]
    pub fn run_with_rng<R: Rng>(problem: &Problem, iterations: usize, rng: &mut R) -> Vec<f64> {
        let mut best = problem.evaluate(&problem.random_assignment(rng));
        let mut history = stats::history_buffer(iterations);
        history.push(best);

        for _ in 0..iterations {
            let fitness = problem.evaluate(&problem.random_assignment(rng));
            if fitness < best {
                best = fitness;
            }
            history.push(best);
        }

        tracing::debug!(best, "random search finished");
        history
    }
}
