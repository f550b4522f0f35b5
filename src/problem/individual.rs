//! Candidate assignment with cached fitness.

use super::Problem;
use rand::Rng;

/// One candidate solution: the doctor index of every patient.
///
/// The fitness is cached and only meaningful after [`evaluate`]; until then
/// it holds `f64::INFINITY`, the worst possible value.
///
/// [`evaluate`]: Individual::evaluate
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    genes: Vec<usize>,
    fitness: f64,
}

impl Individual {
    /// Creates an individual with uniformly random genes in `[0, nD)`.
    pub fn random<R: Rng>(problem: &Problem, rng: &mut R) -> Self {
        Self::from_genes(problem.random_assignment(rng))
    }

    /// Creates an unevaluated individual with the given genes.
    pub fn from_genes(genes: Vec<usize>) -> Self {
        Self {
            genes,
            fitness: f64::INFINITY,
        }
    }

    /// Creates a random individual and evaluates it.
    pub fn evaluated<R: Rng>(problem: &Problem, rng: &mut R) -> Self {
        let mut ind = Self::random(problem, rng);
        ind.evaluate(problem);
        ind
    }

    /// Recomputes and caches the fitness against `problem`.
    pub fn evaluate(&mut self, problem: &Problem) -> f64 {
        self.fitness = problem.evaluate(&self.genes);
        self.fitness
    }

    pub fn genes(&self) -> &[usize] {
        &self.genes
    }

    pub fn genes_mut(&mut self) -> &mut [usize] {
        &mut self.genes
    }

    /// Cached fitness. Lower is better.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }
}

/// Index of the lowest-fitness individual; ties go to the lowest index.
///
/// # Panics
/// Panics if `population` is empty.
pub(crate) fn best_index(population: &[Individual]) -> usize {
    assert!(!population.is_empty(), "population must not be empty");
    let mut best = 0;
    for (i, ind) in population.iter().enumerate().skip(1) {
        if ind.fitness < population[best].fitness {
            best = i;
        }
    }
    best
}

/// Lowest fitness in the population.
pub(crate) fn best_fitness(population: &[Individual]) -> f64 {
    population
        .iter()
        .map(Individual::fitness)
        .fold(f64::INFINITY, f64::min)
}
