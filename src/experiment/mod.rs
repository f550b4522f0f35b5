//! Experiment harness: standard scenarios and multi-run aggregation.
//!
//! Stochastic strategies run `runs` times, each on a freshly sampled
//! problem with a fresh population. Their final fitness values are
//! summarized as mean, population standard deviation and best, and their
//! histories are averaged element-wise for convergence plots. Greedy runs
//! once and contributes a scalar with zero spread and no history.
//!
//! Per-run seeds are drawn from the caller's generator before any run
//! starts, so results do not depend on whether the `parallel` feature
//! spreads the runs over rayon's pool.

mod harness;
mod scenario;

pub use harness::{
    run_algorithm, run_table, simulate, AlgorithmSummary, ExperimentConfig, ScenarioReport,
    SimulationReport, SimulationRequest,
};
pub use scenario::Scenario;
