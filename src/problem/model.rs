//! Problem instance: patient demands and the load-imbalance objective.

use crate::error::{Error, Result};
use crate::stats;
use rand::Rng;

/// An immutable patient → doctor load-balancing instance.
///
/// # Examples
///
/// ```
/// use u_careload::problem::Problem;
///
/// let problem = Problem::from_demands(2, vec![3, 1, 2, 2]).unwrap();
/// // doctor 0: 3 + 1 = 4, doctor 1: 2 + 2 = 4
/// assert_eq!(problem.evaluate(&[0, 0, 1, 1]), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawProblem"))]
pub struct Problem {
    doctor_count: usize,
    demands: Vec<u32>,
}

/// Unchecked wire form; deserialization goes through [`Problem::from_demands`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawProblem {
    doctor_count: usize,
    demands: Vec<u32>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawProblem> for Problem {
    type Error = Error;

    fn try_from(raw: RawProblem) -> Result<Self> {
        Problem::from_demands(raw.doctor_count, raw.demands)
    }
}

impl Problem {
    /// Samples a new instance with the thread-local generator.
    ///
    /// Each demand is drawn uniformly from the inclusive range
    /// `time_range.0..=time_range.1`.
    pub fn create(patient_count: usize, doctor_count: usize, time_range: (u32, u32)) -> Result<Self> {
        Self::create_with_rng(patient_count, doctor_count, time_range, &mut rand::rng())
    }

    /// Samples a new instance from the given generator.
    pub fn create_with_rng<R: Rng>(
        patient_count: usize,
        doctor_count: usize,
        time_range: (u32, u32),
        rng: &mut R,
    ) -> Result<Self> {
        let (lo, hi) = time_range;
        if lo > hi {
            return Err(Error::invalid_problem(format!(
                "time_range lower bound must not exceed upper bound, got ({lo}, {hi})"
            )));
        }
        if patient_count == 0 {
            return Err(Error::invalid_problem("patient_count must be at least 1"));
        }
        let demands = (0..patient_count).map(|_| rng.random_range(lo..=hi)).collect();
        Self::from_demands(doctor_count, demands)
    }

    /// Builds an instance from explicit demands.
    pub fn from_demands(doctor_count: usize, demands: Vec<u32>) -> Result<Self> {
        if doctor_count == 0 {
            return Err(Error::invalid_problem("doctor_count must be at least 1"));
        }
        if demands.is_empty() {
            return Err(Error::invalid_problem("patient_count must be at least 1"));
        }
        Ok(Self {
            doctor_count,
            demands,
        })
    }

    /// Number of patients (`nP`).
    pub fn patient_count(&self) -> usize {
        self.demands.len()
    }

    /// Number of doctors (`nD`).
    pub fn doctor_count(&self) -> usize {
        self.doctor_count
    }

    /// Service-time demand of every patient.
    pub fn demands(&self) -> &[u32] {
        &self.demands
    }

    /// Total service time assigned to each doctor.
    ///
    /// # Panics
    /// Panics if `assignment.len() != patient_count`, or if `assignment`
    /// references a doctor `>= doctor_count`.
    pub fn doctor_loads(&self, assignment: &[usize]) -> Vec<f64> {
        assert_eq!(
            assignment.len(),
            self.demands.len(),
            "assignment length must equal patient_count"
        );
        let mut loads = vec![0.0; self.doctor_count];
        for (&doctor, &demand) in assignment.iter().zip(&self.demands) {
            loads[doctor] += f64::from(demand);
        }
        loads
    }

    /// Scores an assignment: population standard deviation of the doctor loads.
    ///
    /// # Panics
    /// Panics if `assignment.len() != patient_count`, or if `assignment`
    /// references a doctor `>= doctor_count`.
    pub fn evaluate(&self, assignment: &[usize]) -> f64 {
        stats::std_dev(&self.doctor_loads(assignment))
    }

    /// Draws a uniformly random assignment.
    pub fn random_assignment<R: Rng>(&self, rng: &mut R) -> Vec<usize> {
        (0..self.demands.len())
            .map(|_| rng.random_range(0..self.doctor_count))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    #[test]
    fn test_create_draws_within_range() {
        let mut rng = create_rng(42);
        let problem = Problem::create_with_rng(200, 10, (5, 20), &mut rng).unwrap();
        assert_eq!(problem.patient_count(), 200);
        assert_eq!(problem.doctor_count(), 10);
        assert!(problem.demands().iter().all(|&d| (5..=20).contains(&d)));
    }

    #[test]
    fn test_create_degenerate_range() {
        let problem = Problem::create(4, 2, (1, 1)).unwrap();
        assert_eq!(problem.demands(), &[1, 1, 1, 1]);
    }

    #[test]
    fn test_create_rejects_invalid_inputs() {
        assert!(matches!(
            Problem::create(10, 0, (5, 20)),
            Err(Error::InvalidProblem(_))
        ));
        assert!(matches!(
            Problem::create(0, 3, (5, 20)),
            Err(Error::InvalidProblem(_))
        ));
        assert!(matches!(
            Problem::create(10, 3, (20, 5)),
            Err(Error::InvalidProblem(_))
        ));
    }

    #[test]
    fn test_same_seed_same_instance() {
        let a = Problem::create_with_rng(50, 5, (5, 20), &mut create_rng(9)).unwrap();
        let b = Problem::create_with_rng(50, 5, (5, 20), &mut create_rng(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_doctor_loads_include_idle_doctors() {
        let problem = Problem::from_demands(3, vec![4, 6]).unwrap();
        assert_eq!(problem.doctor_loads(&[0, 0]), vec![10.0, 0.0, 0.0]);
    }

    #[test]
    fn test_evaluate_population_std() {
        // loads [10, 0]: mean 5, population std 5
        let problem = Problem::from_demands(2, vec![4, 6]).unwrap();
        assert!((problem.evaluate(&[0, 0]) - 5.0).abs() < 1e-12);
        // loads [4, 6]: mean 5, population std 1
        assert!((problem.evaluate(&[0, 1]) - 1.0).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "assignment length must equal patient_count")]
    fn test_evaluate_rejects_short_assignment() {
        let problem = Problem::from_demands(2, vec![4, 6, 10]).unwrap();
        problem.evaluate(&[0, 1]);
    }

    #[test]
    #[should_panic(expected = "assignment length must equal patient_count")]
    fn test_doctor_loads_rejects_long_assignment() {
        let problem = Problem::from_demands(2, vec![4, 6]).unwrap();
        problem.doctor_loads(&[0, 1, 1]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_validates() {
        let ok: Problem = serde_json::from_str(r#"{"doctor_count":2,"demands":[3,4]}"#).unwrap();
        assert_eq!(ok, Problem::from_demands(2, vec![3, 4]).unwrap());

        let json = serde_json::to_string(&ok).unwrap();
        assert_eq!(serde_json::from_str::<Problem>(&json).unwrap(), ok);

        let err = serde_json::from_str::<Problem>(r#"{"doctor_count":0,"demands":[3,4]}"#)
            .unwrap_err()
            .to_string();
        assert!(err.contains("doctor_count must be at least 1"), "{err}");
        assert!(serde_json::from_str::<Problem>(r#"{"doctor_count":2,"demands":[]}"#).is_err());
    }

    #[test]
    fn test_single_doctor_is_always_balanced() {
        let problem = Problem::from_demands(1, vec![3, 9, 14]).unwrap();
        assert_eq!(problem.evaluate(&[0, 0, 0]), 0.0);
    }

    #[test]
    fn test_random_assignment_in_range() {
        let mut rng = create_rng(1);
        let problem = Problem::create_with_rng(100, 7, (5, 20), &mut rng).unwrap();
        for _ in 0..20 {
            let a = problem.random_assignment(&mut rng);
            assert_eq!(a.len(), 100);
            assert!(a.iter().all(|&d| d < 7));
        }
    }

    proptest! {
        #[test]
        fn prop_evaluate_non_negative(
            demands in prop::collection::vec(1u32..50, 1..40),
            doctors in 1usize..8,
            seed in any::<u64>(),
        ) {
            let problem = Problem::from_demands(doctors, demands).unwrap();
            let assignment = problem.random_assignment(&mut create_rng(seed));
            prop_assert!(problem.evaluate(&assignment) >= 0.0);
        }

        #[test]
        fn prop_equal_loads_score_zero(demand in 1u32..30, doctors in 1usize..10, per_doctor in 1usize..5) {
            // every doctor receives `per_doctor` patients of identical demand
            let demands = vec![demand; doctors * per_doctor];
            let assignment: Vec<usize> = (0..doctors * per_doctor).map(|p| p % doctors).collect();
            let problem = Problem::from_demands(doctors, demands).unwrap();
            prop_assert_eq!(problem.evaluate(&assignment), 0.0);
        }
    }
}
