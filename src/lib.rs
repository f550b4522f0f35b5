//! Patient-to-doctor load balancing with five optimization strategies.
//!
//! A [`Problem`] draws a service-time demand for every patient; a candidate
//! solution routes each patient to one doctor, and its fitness is the
//! population standard deviation of the per-doctor total load (lower is
//! better, `0.0` is perfect balance).
//!
//! Strategies:
//!
//! - **Random** ([`random_search`]): repeated uniform sampling baseline.
//! - **Greedy** ([`greedy`]): least-loaded-doctor list scheduling in
//!   patient order. Deterministic.
//! - **Differential Evolution** ([`de`]): best/1/bin mutation in real
//!   space, rounded back onto doctor indices, with one-to-one selection.
//! - **Genetic Algorithm** ([`ga`]): binary tournament, single-parent
//!   reproduction and point mutation.
//! - **Distributed GA** ([`dga`]): island model with uniform crossover and
//!   periodic ring migration of elites.
//!
//! [`Algorithm`] dispatches to any of the five; [`experiment`] aggregates
//! independent runs over the standard T1–T16 scenarios.
//!
//! # Reproducibility
//!
//! Every stochastic entry point has a `run_with_rng` variant, and
//! [`SolverConfig::seed`] seeds the generator used by `run`.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for configs, scenarios and reports.
//! - `parallel`: independent experiment runs on rayon's thread pool.

pub mod config;
pub mod de;
pub mod dga;
pub mod error;
pub mod experiment;
pub mod ga;
pub mod greedy;
pub mod problem;
pub mod random;
pub mod random_search;
pub mod stats;
pub mod strategy;

pub use config::SolverConfig;
pub use error::{Error, Result};
pub use problem::{Individual, Problem};
pub use strategy::{Algorithm, Outcome};
