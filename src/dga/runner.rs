//! DGA evolutionary loop.

use super::migration::{is_migration_generation, ring_migrate};
use crate::config::SolverConfig;
use crate::error::Result;
use crate::ga::operators::{maybe_point_mutation, uniform_crossover};
use crate::ga::selection::binary_tournament;
use crate::problem::{best_fitness, Individual, Problem};
use crate::random::rng_from_seed;
use crate::stats;
use rand::Rng;
use tracing::instrument;

/// Result of a DGA run.
#[derive(Debug, Clone, PartialEq)]
pub struct DgaResult {
    /// Best fitness observed across all islands during the run.
    pub best_fitness: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// 0-based indices of the generations in which migration ran.
    pub migration_generations: Vec<usize>,

    /// Best fitness so far: the initial islands, then one entry per
    /// generation.
    pub fitness_history: Vec<f64>,
}

/// Executes the island-model GA.
///
/// # Usage
///
/// ```
/// use u_careload::{dga::DgaRunner, Problem, SolverConfig};
///
/// let problem = Problem::create(100, 10, (5, 20)).unwrap();
/// let config = SolverConfig::default()
///     .with_sub_population_count(4)
///     .with_sub_population_size(20)
///     .with_migration_interval(5)
///     .with_generations(4);
/// let result = DgaRunner::run(&problem, &config).unwrap();
/// assert!(result.migration_generations.is_empty());
/// ```
pub struct DgaRunner;

impl DgaRunner {
    /// Runs the DGA with a generator seeded from `config.seed`.
    pub fn run(problem: &Problem, config: &SolverConfig) -> Result<DgaResult> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs the DGA drawing all randomness from `rng`.
    #[instrument(level = "debug", skip_all, fields(
        patients = problem.patient_count(),
        doctors = problem.doctor_count(),
        islands = config.sub_population_count,
        island_size = config.sub_population_size,
        generations = config.generations,
    ))]
    pub fn run_with_rng<R: Rng>(
        problem: &Problem,
        config: &SolverConfig,
        rng: &mut R,
    ) -> Result<DgaResult> {
        config.validate_dga()?;

        let mut islands: Vec<Vec<Individual>> = (0..config.sub_population_count)
            .map(|_| {
                (0..config.sub_population_size)
                    .map(|_| Individual::evaluated(problem, rng))
                    .collect()
            })
            .collect();

        let mut global_best = overall_best(&islands);
        let mut fitness_history = stats::history_buffer(config.generations);
        fitness_history.push(global_best);
        let mut migration_generations = Vec::new();

        for gen in 0..config.generations {
            // 1. Local evolution
            for island in islands.iter_mut() {
                *island = evolve_island(problem, island, config.mutation_rate, rng);
            }

            // 2. Migration
            if is_migration_generation(gen, config.migration_interval) {
                let migrants = ring_migrate(&mut islands, rng);
                if migrants > 0 {
                    migration_generations.push(gen);
                }
                tracing::debug!(generation = gen, migrants, "ring migration");
            }

            // 3. Global best
            let current = overall_best(&islands);
            if current < global_best {
                global_best = current;
            }
            fitness_history.push(global_best);

            tracing::trace!(generation = gen + 1, best = global_best, current);
        }

        tracing::debug!(
            best = global_best,
            migrations = migration_generations.len(),
            "DGA finished"
        );

        Ok(DgaResult {
            best_fitness: global_best,
            generations: config.generations,
            migration_generations,
            fitness_history,
        })
    }
}

/// Produces a full replacement island: two tournaments, uniform
/// crossover, point mutation.
fn evolve_island<R: Rng>(
    problem: &Problem,
    island: &[Individual],
    mutation_rate: f64,
    rng: &mut R,
) -> Vec<Individual> {
    (0..island.len())
        .map(|_| {
            let p1 = &island[binary_tournament(island, rng)];
            let p2 = &island[binary_tournament(island, rng)];
            let mut child = Individual::from_genes(uniform_crossover(p1.genes(), p2.genes(), rng));
            maybe_point_mutation(child.genes_mut(), problem.doctor_count(), mutation_rate, rng);
            child.evaluate(problem);
            child
        })
        .collect()
}

fn overall_best(islands: &[Vec<Individual>]) -> f64 {
    islands
        .iter()
        .map(|island| best_fitness(island))
        .fold(f64::INFINITY, f64::min)
}
