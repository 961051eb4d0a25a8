//! Genetic Algorithm for eight queens.
//!
//! # Key Types
//!
//! - [`Candidate`]: One board, one queen per row, with its cached fitness
//! - [`EvolverConfig`]: Algorithm parameters (population size, generation cap, rates)
//! - [`Evolver`]: Owns the population and the random source, runs the loop
//! - [`EvolutionResult`]: Final answer with per-generation statistics
//!
//! # Submodules
//!
//! - [`operators`]: Uniform row crossover and single-row mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod error;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::EvolverConfig;
pub use error::GaError;
pub use runner::{EvolutionResult, Evolver, EvolverState};
pub use selection::tournament;
pub use types::{
    by_fitness_desc, evaluate, sort_population, Candidate, Rows, BOARD_SIZE, MAX_FITNESS,
};
