//! Closed set of solver strategies behind one dispatch.

use crate::config::SolverConfig;
use crate::de::DeRunner;
use crate::dga::DgaRunner;
use crate::error::{Error, Result};
use crate::ga::GaRunner;
use crate::greedy::GreedyRunner;
use crate::problem::Problem;
use crate::random_search::RandomSearch;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// One of the five solver strategies.
///
/// Parsed from (and displayed as) `Random`, `Greedy`, `DE`, `GA`, `DGA`.
///
/// ```
/// use u_careload::Algorithm;
///
/// let algo: Algorithm = "DGA".parse().unwrap();
/// assert_eq!(algo, Algorithm::Dga);
/// assert_eq!(algo.to_string(), "DGA");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    #[cfg_attr(feature = "serde", serde(rename = "Random"))]
    Random,
    #[cfg_attr(feature = "serde", serde(rename = "Greedy"))]
    Greedy,
    #[cfg_attr(feature = "serde", serde(rename = "DE"))]
    De,
    #[cfg_attr(feature = "serde", serde(rename = "GA"))]
    Ga,
    #[cfg_attr(feature = "serde", serde(rename = "DGA"))]
    Dga,
}

/// What a strategy returns: a convergence history or, for Greedy, a
/// single fitness.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    History(Vec<f64>),
    Scalar(f64),
}

impl Outcome {
    /// Final fitness: the last history entry or the scalar.
    pub fn final_value(&self) -> f64 {
        match self {
            Outcome::History(h) => h.last().copied().unwrap_or(f64::INFINITY),
            Outcome::Scalar(v) => *v,
        }
    }

    /// The convergence history, empty for a scalar outcome.
    pub fn history(&self) -> &[f64] {
        match self {
            Outcome::History(h) => h,
            Outcome::Scalar(_) => &[],
        }
    }
}

impl Algorithm {
    /// All strategies in reporting order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Random,
        Algorithm::Greedy,
        Algorithm::De,
        Algorithm::Ga,
        Algorithm::Dga,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Random => "Random",
            Algorithm::Greedy => "Greedy",
            Algorithm::De => "DE",
            Algorithm::Ga => "GA",
            Algorithm::Dga => "DGA",
        }
    }

    /// Greedy is the only deterministic strategy.
    pub fn is_stochastic(self) -> bool {
        !matches!(self, Algorithm::Greedy)
    }

    /// Runs the strategy with a generator seeded from `config.seed`.
    pub fn run(self, problem: &Problem, config: &SolverConfig) -> Result<Outcome> {
        let mut rng = crate::random::rng_from_seed(config.seed);
        self.run_with_rng(problem, config, &mut rng)
    }

    /// Runs the strategy drawing all randomness from `rng`.
    ///
    /// Random search uses `config.generations` as its iteration count.
    pub fn run_with_rng<R: Rng>(
        self,
        problem: &Problem,
        config: &SolverConfig,
        rng: &mut R,
    ) -> Result<Outcome> {
        let outcome = match self {
            Algorithm::Random => {
                config.validate()?;
                Outcome::History(RandomSearch::run_with_rng(problem, config.generations, rng))
            }
            Algorithm::Greedy => Outcome::Scalar(GreedyRunner::run(problem).fitness),
            Algorithm::De => {
                Outcome::History(DeRunner::run_with_rng(problem, config, rng)?.fitness_history)
            }
            Algorithm::Ga => {
                Outcome::History(GaRunner::run_with_rng(problem, config, rng)?.fitness_history)
            }
            Algorithm::Dga => {
                Outcome::History(DgaRunner::run_with_rng(problem, config, rng)?.fitness_history)
            }
        };
        Ok(outcome)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_string()))
    }
}
