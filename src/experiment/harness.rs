//! Multi-run aggregation over scenarios and strategies.

use super::scenario::Scenario;
use crate::config::SolverConfig;
use crate::error::{Error, Result};
use crate::problem::Problem;
use crate::random::create_rng;
use crate::stats;
use crate::strategy::Algorithm;
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::instrument;

/// Parameters of an experiment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExperimentConfig {
    /// Parameters passed to every solver run.
    pub solver: SolverConfig,

    /// Independent runs per stochastic strategy.
    pub runs: usize,

    /// Inclusive range patient demands are drawn from.
    pub time_range: (u32, u32),
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            solver: SolverConfig::default(),
            runs: 1,
            time_range: (5, 20),
        }
    }
}

impl ExperimentConfig {
    pub fn with_solver(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }

    pub fn with_runs(mut self, runs: usize) -> Self {
        self.runs = runs;
        self
    }

    pub fn with_time_range(mut self, lo: u32, hi: u32) -> Self {
        self.time_range = (lo, hi);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.runs == 0 {
            return Err(Error::invalid_config("runs must be at least 1"));
        }
        let (lo, hi) = self.time_range;
        if lo > hi {
            return Err(Error::invalid_config(format!(
                "time_range lower bound must not exceed upper bound, got ({lo}, {hi})"
            )));
        }
        self.solver.validate()
    }
}

/// Aggregated outcome of one strategy on one scenario.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlgorithmSummary {
    pub algorithm: Algorithm,
    /// Mean final fitness over runs.
    pub avg: f64,
    /// Population standard deviation of the final fitness over runs.
    pub std: f64,
    /// Best final fitness over runs.
    pub best: f64,
    /// Element-wise mean history. Empty for Greedy.
    pub history: Vec<f64>,
}

/// All strategy summaries for one scenario.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioReport {
    pub scenario: Scenario,
    pub results: Vec<AlgorithmSummary>,
}

impl ScenarioReport {
    /// Summary for `algorithm`, if it was part of the run.
    pub fn get(&self, algorithm: Algorithm) -> Option<&AlgorithmSummary> {
        self.results.iter().find(|s| s.algorithm == algorithm)
    }
}

/// A single-scenario simulation request.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimulationRequest {
    pub algorithms: Vec<Algorithm>,
    pub generations: usize,
    pub runs: usize,
    pub scenario: String,
}

impl Default for SimulationRequest {
    fn default() -> Self {
        Self {
            algorithms: Vec::new(),
            generations: 100,
            runs: 1,
            scenario: "T5".to_string(),
        }
    }
}

/// The report returned for a [`SimulationRequest`].
pub type SimulationReport = ScenarioReport;

/// Runs one strategy on one scenario and aggregates the runs.
#[instrument(level = "debug", skip_all, fields(
    algorithm = %algorithm,
    scenario = %scenario.id,
    runs = config.runs,
))]
pub fn run_algorithm<R: Rng>(
    algorithm: Algorithm,
    scenario: &Scenario,
    config: &ExperimentConfig,
    rng: &mut R,
) -> Result<AlgorithmSummary> {
    config.validate()?;

    if !algorithm.is_stochastic() {
        let problem = Problem::create_with_rng(
            scenario.patient_count,
            scenario.doctor_count,
            config.time_range,
            rng,
        )?;
        let value = algorithm.run_with_rng(&problem, &config.solver, rng)?.final_value();
        return Ok(AlgorithmSummary {
            algorithm,
            avg: value,
            std: 0.0,
            best: value,
            history: Vec::new(),
        });
    }

    let seeds: Vec<u64> = (0..config.runs).map(|_| rng.random()).collect();

    #[cfg(feature = "parallel")]
    let histories: Vec<Vec<f64>> = seeds
        .par_iter()
        .map(|&seed| run_trial(algorithm, scenario, config, seed))
        .collect::<Result<_>>()?;
    #[cfg(not(feature = "parallel"))]
    let histories: Vec<Vec<f64>> = seeds
        .iter()
        .map(|&seed| run_trial(algorithm, scenario, config, seed))
        .collect::<Result<_>>()?;

    let finals: Vec<f64> = histories
        .iter()
        .filter_map(|h| h.last().copied())
        .collect();

    let summary = AlgorithmSummary {
        algorithm,
        avg: stats::mean(&finals),
        std: stats::std_dev(&finals),
        best: stats::min(&finals).unwrap_or(f64::INFINITY),
        history: stats::mean_series(&histories),
    };
    tracing::debug!(avg = summary.avg, std = summary.std, best = summary.best, "runs aggregated");
    Ok(summary)
}

/// One independent run: fresh problem, fresh population.
fn run_trial(
    algorithm: Algorithm,
    scenario: &Scenario,
    config: &ExperimentConfig,
    seed: u64,
) -> Result<Vec<f64>> {
    let mut rng = create_rng(seed);
    let problem = Problem::create_with_rng(
        scenario.patient_count,
        scenario.doctor_count,
        config.time_range,
        &mut rng,
    )?;
    let outcome = algorithm.run_with_rng(&problem, &config.solver, &mut rng)?;
    Ok(outcome.history().to_vec())
}

/// Serves a simulation request on a standard scenario.
///
/// An empty algorithm list yields an empty result set. Repeated algorithms
/// are run once, in order of first appearance.
#[instrument(level = "debug", skip_all, fields(scenario = %request.scenario))]
pub fn simulate<R: Rng>(request: &SimulationRequest, rng: &mut R) -> Result<SimulationReport> {
    let scenario = Scenario::find(&request.scenario)?;
    let config = ExperimentConfig::default()
        .with_runs(request.runs)
        .with_solver(SolverConfig::default().with_generations(request.generations));

    let mut results: Vec<AlgorithmSummary> = Vec::with_capacity(request.algorithms.len());
    for &algorithm in &request.algorithms {
        if results.iter().any(|s| s.algorithm == algorithm) {
            continue;
        }
        tracing::info!(%algorithm, "running");
        results.push(run_algorithm(algorithm, &scenario, &config, rng)?);
    }

    Ok(ScenarioReport { scenario, results })
}

/// Runs every strategy on every standard scenario.
#[instrument(level = "debug", skip_all, fields(runs = config.runs))]
pub fn run_table<R: Rng>(config: &ExperimentConfig, rng: &mut R) -> Result<Vec<ScenarioReport>> {
    Scenario::standard()
        .into_iter()
        .map(|scenario| {
            let results = Algorithm::ALL
                .into_iter()
                .map(|algorithm| run_algorithm(algorithm, &scenario, config, rng))
                .collect::<Result<Vec<_>>>()?;
            tracing::info!(scenario = %scenario.id, "scenario done");
            Ok(ScenarioReport { scenario, results })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> ExperimentConfig {
        ExperimentConfig::default().with_runs(3).with_solver(
            SolverConfig::default()
                .with_generations(10)
                .with_population_size(12)
                .with_sub_population_count(3)
                .with_sub_population_size(6),
        )
    }

    #[test]
    fn test_stochastic_summary() {
        let scenario = Scenario::new("S", 40, 4);
        let mut rng = create_rng(42);
        for algorithm in [Algorithm::Random, Algorithm::De, Algorithm::Ga, Algorithm::Dga] {
            let summary = run_algorithm(algorithm, &scenario, &small_config(), &mut rng).unwrap();
            assert_eq!(summary.algorithm, algorithm);
            assert_eq!(summary.history.len(), 11);
            assert!(summary.std >= 0.0);
            assert!(summary.best <= summary.avg + 1e-12);
            // mean of non-increasing series is non-increasing
            for w in summary.history.windows(2) {
                assert!(w[1] <= w[0] + 1e-12);
            }
            assert!((summary.history[10] - summary.avg).abs() < 1e-9);
        }
    }

    #[test]
    fn test_greedy_summary_has_no_spread() {
        let scenario = Scenario::new("S", 30, 3);
        let mut rng = create_rng(1);
        let summary = run_algorithm(Algorithm::Greedy, &scenario, &small_config(), &mut rng).unwrap();
        assert_eq!(summary.std, 0.0);
        assert_eq!(summary.avg, summary.best);
        assert!(summary.history.is_empty());
    }

    #[test]
    fn test_same_seed_same_summary() {
        let scenario = Scenario::new("S", 40, 4);
        let a = run_algorithm(Algorithm::Ga, &scenario, &small_config(), &mut create_rng(5)).unwrap();
        let b = run_algorithm(Algorithm::Ga, &scenario, &small_config(), &mut create_rng(5)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_runs_rejected() {
        let scenario = Scenario::new("S", 10, 2);
        let config = small_config().with_runs(0);
        assert!(matches!(
            run_algorithm(Algorithm::Random, &scenario, &config, &mut create_rng(1)),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_simulate_empty_algorithms() {
        let request = SimulationRequest::default();
        let report = simulate(&request, &mut create_rng(1)).unwrap();
        assert_eq!(report.scenario, Scenario::new("T5", 200, 10));
        assert!(report.results.is_empty());
    }

    #[test]
    fn test_simulate_unknown_scenario() {
        let request = SimulationRequest {
            scenario: "T42".into(),
            ..SimulationRequest::default()
        };
        assert_eq!(
            simulate(&request, &mut create_rng(1)),
            Err(Error::UnknownScenario("T42".into()))
        );
    }

    #[test]
    fn test_simulate_runs_requested_algorithms() {
        let request = SimulationRequest {
            algorithms: vec![Algorithm::Greedy, Algorithm::Random, Algorithm::Greedy],
            generations: 5,
            runs: 2,
            scenario: "T1".into(),
        };
        let report = simulate(&request, &mut create_rng(3)).unwrap();
        assert_eq!(report.results.len(), 2);
        assert_eq!(report.results[0].algorithm, Algorithm::Greedy);
        assert_eq!(report.get(Algorithm::Random).unwrap().history.len(), 6);
        assert!(report.get(Algorithm::De).is_none());
    }
}
