//! Differential Evolution (DE) on doctor-assignment vectors.
//!
//! A DE/best/1/bin variant adapted to discrete genes: the mutant is built
//! in real space from the best-so-far vector plus a scaled difference of
//! two random members, then rounded back onto valid doctor indices before
//! binomial crossover with the target. Selection is one-to-one: a trial
//! only replaces the target it was built from, and only if it is no worse.
//!
//! # References
//!
//! - Storn & Price (1997), "Differential Evolution – A Simple and Efficient
//!   Heuristic for Global Optimization over Continuous Spaces"

mod runner;

pub use runner::{discretize, DeResult, DeRunner};
