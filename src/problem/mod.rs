//! Problem model and candidate representation.
//!
//! A [`Problem`] holds the service-time demand of every patient and scores
//! any patient → doctor assignment by how unevenly it loads the doctors.
//! An [`Individual`] is one candidate assignment plus its cached fitness.
//!
//! # Objective
//!
//! For an assignment `a`, the load of doctor `d` is the sum of the demands
//! of all patients `p` with `a[p] == d`. The fitness is the population
//! standard deviation of the `nD` loads. Lower is better and `0.0` is a
//! perfectly balanced assignment.

mod individual;
mod model;

pub use individual::Individual;
pub(crate) use individual::{best_fitness, best_index};
pub use model::Problem;
