//! Greedy list scheduling.
//!
//! Patients are taken in index order (not sorted by demand) and each goes
//! to the doctor with the smallest accumulated load; ties go to the lowest
//! doctor index. The result is deterministic for a given instance.
//!
//! # References
//!
//! - Graham (1966), "Bounds for Certain Multiprocessing Anomalies"

use crate::problem::Problem;
use tracing::instrument;

/// Result of a greedy run.
#[derive(Debug, Clone, PartialEq)]
pub struct GreedyResult {
    /// Doctor index of every patient.
    pub assignment: Vec<usize>,

    /// Fitness of `assignment`.
    pub fitness: f64,
}

/// Executes least-loaded-doctor list scheduling.
///
/// # Usage
///
/// ```
/// use u_careload::{greedy::GreedyRunner, Problem};
///
/// let problem = Problem::create(4, 2, (1, 1)).unwrap();
/// assert_eq!(GreedyRunner::run(&problem).fitness, 0.0);
/// ```
pub struct GreedyRunner;

impl GreedyRunner {
    /// Builds the greedy assignment and scores it.
    #[instrument(level = "debug", skip_all, fields(
        patients = problem.patient_count(),
        doctors = problem.doctor_count(),
    ))]
    pub fn run(problem: &Problem) -> GreedyResult {
        let mut loads = vec![0u64; problem.doctor_count()];
        let assignment: Vec<usize> = problem
            .demands()
            .iter()
            .map(|&demand| {
                let doctor = least_loaded(&loads);
                loads[doctor] += u64::from(demand);
                doctor
            })
            .collect();

        let fitness = problem.evaluate(&assignment);
        tracing::debug!(fitness, "greedy finished");

        GreedyResult {
            assignment,
            fitness,
        }
    }
}

/// Index of the first minimum.
fn least_loaded(loads: &[u64]) -> usize {
    let mut best = 0;
    for (i, &load) in loads.iter().enumerate().skip(1) {
        if load < loads[best] {
            best = i;
        }
    }
    best
}
