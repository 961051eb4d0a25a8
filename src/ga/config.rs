//! Evolver configuration.
//!
//! [`EvolverConfig`] holds all parameters that control the evolutionary loop.
//! The board size is not configurable; see [`BOARD_SIZE`](super::BOARD_SIZE).

use super::error::GaError;

/// Configuration for the eight queens GA.
///
/// # Defaults
///
/// ```
/// use queens_ga::ga::EvolverConfig;
///
/// let config = EvolverConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 1000);
/// assert_eq!(config.tournament_size, 10);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use queens_ga::ga::EvolverConfig;
///
/// let config = EvolverConfig::default()
///     .with_population_size(200)
///     .with_tournament_size(5)
///     .with_mutation_rate(0.05)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolverConfig {
    /// Number of candidates in every generation.
    pub population_size: usize,

    /// Number of generations reported before giving up.
    pub max_generations: usize,

    /// Candidates sampled (with replacement) per tournament.
    pub tournament_size: usize,

    /// Probability that a child receives one random row change (0.0–1.0).
    ///
    /// Checked once per child, not once per row.
    pub mutation_rate: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a fresh seed from the operating system.
    pub seed: Option<u64>,
}

impl Default for EvolverConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 1000,
            tournament_size: 10,
            mutation_rate: 0.01,
            seed: None,
        }
    }
}

impl EvolverConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the generation cap.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the mutation rate, clamped to `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), GaError> {
        if self.population_size == 0 {
            return Err(GaError::InvalidConfig(
                "population_size must be at least 1".into(),
            ));
        }
        if self.max_generations == 0 {
            return Err(GaError::InvalidConfig(
                "max_generations must be at least 1".into(),
            ));
        }
        if self.tournament_size == 0 {
            return Err(GaError::InvalidConfig(
                "tournament_size must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GaError::InvalidConfig(
                "mutation_rate must be within [0, 1]".into(),
            ));
        }
        Ok(())
    }
}
