//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the generational process:
//! initialization → evaluation → tournament → copy → mutation → replace.

use super::operators::maybe_point_mutation;
use super::selection::binary_tournament;
use crate::config::SolverConfig;
use crate::error::Result;
use crate::problem::{best_fitness, Individual, Problem};
use crate::random::rng_from_seed;
use crate::stats;
use rand::Rng;
use tracing::instrument;

/// Result of a GA optimization run.
#[derive(Debug, Clone, PartialEq)]
pub struct GaResult {
    /// Best fitness observed during the entire run.
    pub best_fitness: f64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Best fitness so far: the initial population, then one entry per
    /// generation.
    pub fitness_history: Vec<f64>,
}

/// Executes the GA evolutionary loop.
///
/// Each generation replaces the whole population. Every offspring is a
/// copy of a binary-tournament winner (no crossover) that receives a point
/// mutation with probability `mutation_rate`.
///
/// # Usage
///
/// ```
/// use u_careload::{ga::GaRunner, Problem, SolverConfig};
///
/// let problem = Problem::create(100, 10, (5, 20)).unwrap();
/// let config = SolverConfig::default().with_generations(20).with_seed(42);
/// let result = GaRunner::run(&problem, &config).unwrap();
/// assert_eq!(result.fitness_history.len(), 21);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with a generator seeded from `config.seed`.
    pub fn run(problem: &Problem, config: &SolverConfig) -> Result<GaResult> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs the GA drawing all randomness from `rng`.
    #[instrument(level = "debug", skip_all, fields(
        patients = problem.patient_count(),
        doctors = problem.doctor_count(),
        population = config.population_size,
        generations = config.generations,
    ))]
    pub fn run_with_rng<R: Rng>(
        problem: &Problem,
        config: &SolverConfig,
        rng: &mut R,
    ) -> Result<GaResult> {
        config.validate_ga()?;

        // 1. Initialize and evaluate population
        let mut population: Vec<Individual> = (0..config.population_size)
            .map(|_| Individual::evaluated(problem, rng))
            .collect();

        // 2. Track best value
        let mut best_global = best_fitness(&population);
        let mut fitness_history = stats::history_buffer(config.generations);
        fitness_history.push(best_global);

        // 3. Evolutionary loop
        for gen in 0..config.generations {
            population = next_generation(problem, &population, config.mutation_rate, rng);

            let current = best_fitness(&population);
            if current < best_global {
                best_global = current;
            }
            fitness_history.push(best_global);

            tracing::trace!(generation = gen + 1, best = best_global, current);
        }

        tracing::debug!(best = best_global, "GA finished");

        Ok(GaResult {
            best_fitness: best_global,
            generations: config.generations,
            fitness_history,
        })
    }
}

/// Builds a full replacement population by tournament copy and mutation.
fn next_generation<R: Rng>(
    problem: &Problem,
    population: &[Individual],
    mutation_rate: f64,
    rng: &mut R,
) -> Vec<Individual> {
    (0..population.len())
        .map(|_| {
            let parent = &population[binary_tournament(population, rng)];
            let mut child = Individual::from_genes(parent.genes().to_vec());
            maybe_point_mutation(child.genes_mut(), problem.doctor_count(), mutation_rate, rng);
            child.evaluate(problem);
            child
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
