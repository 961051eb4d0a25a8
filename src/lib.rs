//! Genetic-algorithm solver for the eight queens problem.
//!
//! A population of candidate boards is evolved with tournament selection,
//! uniform crossover, and single-row mutation until a placement with no
//! attacking pair is found or the generation cap is reached.
//!
//! ```no_run
//! use queens_ga::ga::{Evolver, EvolverConfig};
//!
//! let config = EvolverConfig::default().with_seed(7);
//! let mut evolver = Evolver::from_config(config).unwrap();
//! let result = evolver.run(&mut std::io::stdout()).unwrap();
//! println!("{}", result.best);
//! ```

pub mod ga;
