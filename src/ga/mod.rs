//! Genetic Algorithm.
//!
//! Generational GA on doctor-assignment vectors. Each offspring copies the
//! winner of a binary tournament (single-parent reproduction, no
//! crossover) and may receive one point mutation. The offspring fully
//! replace the population every generation.
//!
//! # Key Types
//!
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Best fitness and convergence history
//!
//! # Submodules
//!
//! - [`operators`]: Uniform crossover and point mutation on assignments
//! - [`selection`]: Binary tournament selection
//!
//! The operators and selection are shared with the island-model GA in
//! [`crate::dga`].
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

pub mod operators;
mod runner;
pub mod selection;

pub use runner::{GaResult, GaRunner};
