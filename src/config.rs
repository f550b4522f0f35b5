//! Solver configuration.
//!
//! [`SolverConfig`] carries every parameter the stochastic solvers read.
//! It is passed by reference into each run; there is no process-wide
//! configuration.

use crate::error::{Error, Result};

/// Configuration for the Random, DE, GA and DGA solvers.
///
/// Each solver reads only the fields it needs and checks them when the run
/// starts.
///
/// # Defaults
///
/// ```
/// use u_careload::SolverConfig;
///
/// let config = SolverConfig::default();
/// assert_eq!(config.generations, 100);
/// assert_eq!(config.population_size, 80);
/// assert_eq!(config.sub_population_count, 4);
/// assert_eq!(config.sub_population_size, 20);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_careload::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_generations(250)
///     .with_population_size(120)
///     .with_mutation_rate(0.2)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverConfig {
    /// Number of generations (iterations for the Random solver).
    ///
    /// Zero is allowed: the history then holds only the initial entry.
    pub generations: usize,

    /// Population size for DE and GA.
    pub population_size: usize,

    /// Number of islands for the DGA (`NSP`).
    pub sub_population_count: usize,

    /// Individuals per island for the DGA (`SPS`).
    pub sub_population_size: usize,

    /// Probability (0.0–1.0) that an offspring receives a point mutation (`MR`).
    pub mutation_rate: f64,

    /// Generations between DGA migrations (`MI`).
    pub migration_interval: usize,

    /// DE differential weight (`F`).
    pub differential_weight: f64,

    /// DE per-gene crossover probability (0.0–1.0) (`CR`).
    pub crossover_probability: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            generations: 100,
            population_size: 80,
            sub_population_count: 4,
            sub_population_size: 20,
            mutation_rate: 0.1,
            migration_interval: 5,
            differential_weight: 0.8,
            crossover_probability: 0.9,
            seed: None,
        }
    }
}

impl SolverConfig {
    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the DE/GA population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of DGA islands.
    pub fn with_sub_population_count(mut self, n: usize) -> Self {
        self.sub_population_count = n;
        self
    }

    /// Sets the DGA island size.
    pub fn with_sub_population_size(mut self, n: usize) -> Self {
        self.sub_population_size = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the DGA migration interval.
    pub fn with_migration_interval(mut self, n: usize) -> Self {
        self.migration_interval = n;
        self
    }

    /// Sets the DE differential weight.
    pub fn with_differential_weight(mut self, f: f64) -> Self {
        self.differential_weight = f;
        self
    }

    /// Sets the DE crossover probability.
    pub fn with_crossover_probability(mut self, cr: f64) -> Self {
        self.crossover_probability = cr.clamp(0.0, 1.0);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the parameters shared by every solver.
    ///
    /// Sizes are checked by the solver that uses them, see
    /// [`validate_de`](Self::validate_de), [`validate_ga`](Self::validate_ga)
    /// and [`validate_dga`](Self::validate_dga).
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(Error::invalid_config(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.crossover_probability) {
            return Err(Error::invalid_config(format!(
                "crossover_probability must be in [0, 1], got {}",
                self.crossover_probability
            )));
        }
        if !self.differential_weight.is_finite() {
            return Err(Error::invalid_config(format!(
                "differential_weight must be finite, got {}",
                self.differential_weight
            )));
        }
        Ok(())
    }

    /// DE picks two donors besides the target, so it needs three members.
    pub fn validate_de(&self) -> Result<()> {
        self.validate()?;
        if self.population_size < 3 {
            return Err(Error::invalid_config(format!(
                "population_size must be at least 3 for DE, got {}",
                self.population_size
            )));
        }
        Ok(())
    }

    /// GA tournaments draw two distinct members.
    pub fn validate_ga(&self) -> Result<()> {
        self.validate()?;
        if self.population_size < 2 {
            return Err(Error::invalid_config(format!(
                "population_size must be at least 2, got {}",
                self.population_size
            )));
        }
        Ok(())
    }

    /// DGA needs at least one island of two or more members and a
    /// positive migration interval.
    pub fn validate_dga(&self) -> Result<()> {
        self.validate()?;
        if self.sub_population_count == 0 {
            return Err(Error::invalid_config(
                "sub_population_count must be at least 1",
            ));
        }
        if self.sub_population_size < 2 {
            return Err(Error::invalid_config(format!(
                "sub_population_size must be at least 2, got {}",
                self.sub_population_size
            )));
        }
        if self.migration_interval == 0 {
            return Err(Error::invalid_config(
                "migration_interval must be at least 1",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert_eq!(config.generations, 100);
        assert_eq!(config.population_size, 80);
        assert_eq!(config.sub_population_count, 4);
        assert_eq!(config.sub_population_size, 20);
        assert!((config.mutation_rate - 0.1).abs() < 1e-10);
        assert_eq!(config.migration_interval, 5);
        assert!((config.differential_weight - 0.8).abs() < 1e-10);
        assert!((config.crossover_probability - 0.9).abs() < 1e-10);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SolverConfig::default()
            .with_generations(10)
            .with_population_size(30)
            .with_sub_population_count(3)
            .with_sub_population_size(12)
            .with_mutation_rate(0.25)
            .with_migration_interval(2)
            .with_differential_weight(0.5)
            .with_crossover_probability(0.7)
            .with_seed(42);

        assert_eq!(config.generations, 10);
        assert_eq!(config.population_size, 30);
        assert_eq!(config.sub_population_count, 3);
        assert_eq!(config.sub_population_size, 12);
        assert!((config.mutation_rate - 0.25).abs() < 1e-10);
        assert_eq!(config.migration_interval, 2);
        assert!((config.differential_weight - 0.5).abs() < 1e-10);
        assert!((config.crossover_probability - 0.7).abs() < 1e-10);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_clamp_rates() {
        let config = SolverConfig::default()
            .with_mutation_rate(2.0)
            .with_crossover_probability(-0.5);
        assert!((config.mutation_rate - 1.0).abs() < 1e-10);
        assert!((config.crossover_probability - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_validate_ok() {
        let config = SolverConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.validate_de().is_ok());
        assert!(config.validate_ga().is_ok());
        assert!(config.validate_dga().is_ok());
    }

    #[test]
    fn test_zero_generations_is_valid() {
        let config = SolverConfig::default().with_generations(0);
        assert!(config.validate_de().is_ok());
    }

    #[test]
    fn test_validate_rates_set_directly() {
        let config = SolverConfig {
            mutation_rate: 1.5,
            ..SolverConfig::default()
        };
        assert!(config.validate().is_err());

        let config = SolverConfig {
            differential_weight: f64::NAN,
            ..SolverConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_population_sizes() {
        let config = SolverConfig::default().with_population_size(2);
        assert!(config.validate_ga().is_ok());
        assert!(matches!(config.validate_de(), Err(Error::InvalidConfig(_))));

        let config = SolverConfig::default().with_population_size(1);
        assert!(config.validate_ga().is_err());
    }

    #[test]
    fn test_validate_dga() {
        let base = SolverConfig::default();
        assert!(base.clone().with_sub_population_count(0).validate_dga().is_err());
        assert!(base.clone().with_sub_population_count(1).validate_dga().is_ok());
        assert!(base.clone().with_sub_population_size(1).validate_dga().is_err());
        assert!(base.with_migration_interval(0).validate_dga().is_err());
    }
}
