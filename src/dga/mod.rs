//! Distributed (island-model) Genetic Algorithm.
//!
//! The population is split into `sub_population_count` islands that
//! evolve independently with binary tournaments, uniform crossover and
//! point mutation. Every `migration_interval` generations each island's
//! elite is copied into the next island of a one-directional ring.
//!
//! Islands are a logical partition only: they evolve one after another on
//! the calling thread.
//!
//! # References
//!
//! - Whitley, Rana & Heckendorn (1999), "The Island Model Genetic
//!   Algorithm: On Separability, Population Size and Convergence"
//! - Cantú-Paz (1998), "A Survey of Parallel Genetic Algorithms"

mod migration;
mod runner;

pub use runner::{DgaResult, DgaRunner};
