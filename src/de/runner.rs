//! DE execution loop.

use crate::config::SolverConfig;
use crate::error::Result;
use crate::problem::{best_index, Individual, Problem};
use crate::random::{distinct_pair_excluding, rng_from_seed};
use crate::stats;
use rand::Rng;
use tracing::instrument;

/// Result of a DE run.
#[derive(Debug, Clone, PartialEq)]
pub struct DeResult {
    /// Independent copy of the best individual found.
    pub best: Individual,

    /// Fitness of the best individual (same as `best.fitness()`).
    pub best_fitness: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Best fitness so far: the initial population, then one entry per
    /// generation.
    pub fitness_history: Vec<f64>,
}

/// Executes Differential Evolution.
///
/// # Usage
///
/// ```
/// use u_careload::{de::DeRunner, Problem, SolverConfig};
///
/// let problem = Problem::create(100, 10, (5, 20)).unwrap();
/// let config = SolverConfig::default().with_generations(0).with_seed(1);
/// let result = DeRunner::run(&problem, &config).unwrap();
/// assert_eq!(result.fitness_history, vec![result.best_fitness]);
/// ```
pub struct DeRunner;

impl DeRunner {
    /// Runs DE with a generator seeded from `config.seed`.
    pub fn run(problem: &Problem, config: &SolverConfig) -> Result<DeResult> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs DE drawing all randomness from `rng`.
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
    ) -> Result<DeResult> {
        config.validate_de()?;

        let mut population: Vec<Individual> = (0..config.population_size)
            .map(|_| Individual::evaluated(problem, rng))
            .collect();

        let mut best = population[best_index(&population)].clone();
        let mut fitness_history = stats::history_buffer(config.generations);
        fitness_history.push(best.fitness());

        for gen in 0..config.generations {
            population = evolve_generation(problem, &population, &mut best, config, rng);
            fitness_history.push(best.fitness());

            tracing::trace!(generation = gen + 1, best = best.fitness());
        }

        tracing::debug!(best = best.fitness(), "DE finished");

        Ok(DeResult {
            best_fitness: best.fitness(),
            best,
            generations: config.generations,
            fitness_history,
        })
    }
}

/// Maps one real-valued mutant coordinate onto a doctor index.
///
/// Rounds half to even, reduces modulo `doctor_count` and takes the
/// absolute value, so the result always lies in `[0, doctor_count)`.
///
/// # Panics
/// Panics if `doctor_count == 0`.
pub fn discretize(value: f64, doctor_count: usize) -> usize {
    assert!(doctor_count > 0, "doctor_count must be positive");
    let rounded = value.round_ties_even() as i64;
    rounded.rem_euclid(doctor_count as i64).unsigned_abs() as usize
}

/// Builds the next population from the current one.
///
/// Donors are read from the current generation. `best` is replaced by an
/// independent copy as soon as a trial beats it strictly, so later targets
/// in the same generation already mutate around the new best.
fn evolve_generation<R: Rng>(
    problem: &Problem,
    population: &[Individual],
    best: &mut Individual,
    config: &SolverConfig,
    rng: &mut R,
) -> Vec<Individual> {
    let n = population.len();
    let doctors = problem.doctor_count();
    let f = config.differential_weight;

    let mut next = Vec::with_capacity(n);

    for (i, target) in population.iter().enumerate() {
        let (r1, r2) = distinct_pair_excluding(n, i, rng);
        let (g1, g2) = (population[r1].genes(), population[r2].genes());

        let trial_genes: Vec<usize> = (0..target.genes().len())
            .map(|j| {
                let mutant = best.genes()[j] as f64 + f * (g1[j] as f64 - g2[j] as f64);
                let mutant = discretize(mutant, doctors);
                if rng.random_range(0.0..1.0) < config.crossover_probability {
                    mutant
                } else {
                    target.genes()[j]
                }
            })
            .collect();

        let mut trial = Individual::from_genes(trial_genes);
        trial.evaluate(problem);

        if trial.fitness() <= target.fitness() {
            if trial.fitness() < best.fitness() {
                *best = trial.clone();
            }
            next.push(trial);
        } else {
            next.push(target.clone());
        }
    }

    next
}
