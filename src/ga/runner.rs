//! Evolutionary loop execution.
//!
//! [`Evolver`] orchestrates the complete evolutionary process:
//! initialization → sort → report → selection → crossover → mutation → repeat.

use super::config::EvolverConfig;
use super::error::GaError;
use super::operators::{mutate, uniform_crossover};
use super::selection::tournament;
use super::types::{by_fitness_desc, sort_population, Candidate};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::Write;

/// Where the loop stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EvolverState {
    /// More generations will be bred.
    Running,
    /// The best candidate has no attacking pair.
    Solved,
    /// The generation cap was reached and the final population holds no
    /// solution.
    Exhausted,
}

/// Result of a complete run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EvolutionResult {
    /// Best candidate of the final population.
    pub best: Candidate,

    /// Number of generations reported. The population bred after the last
    /// reported generation of an exhausted run is not counted.
    pub generations: usize,

    /// Terminal state, either [`EvolverState::Solved`] or [`EvolverState::Exhausted`].
    pub state: EvolverState,

    /// Best fitness of each reported generation.
    pub fitness_history: Vec<u32>,
}

/// Owns the population and the random source and runs the generational loop.
///
/// # Usage
///
/// ```
/// use queens_ga::ga::{Evolver, EvolverConfig, MAX_FITNESS};
///
/// let config = EvolverConfig::default().with_seed(42);
/// let mut evolver = Evolver::from_config(config).unwrap();
/// let mut report = Vec::new();
/// let result = evolver.run(&mut report).unwrap();
/// assert!(result.best.fitness() <= MAX_FITNESS);
/// ```
pub struct Evolver<R: Rng> {
    config: EvolverConfig,
    rng: R,
    population: Vec<Candidate>,
    generation: usize,
    state: EvolverState,
    fitness_history: Vec<u32>,
}

impl Evolver<StdRng> {
    /// Creates an evolver seeded from `config.seed`, or from a fresh random
    /// seed when none is set.
    pub fn from_config(config: EvolverConfig) -> Result<Self, GaError> {
        let seed = config.seed.unwrap_or_else(rand::random);
        info!("seeding evolver with {seed}");
        Self::new(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Evolver<R> {
    /// Creates an evolver with an injected random source and a freshly
    /// initialized population.
    pub fn new(config: EvolverConfig, mut rng: R) -> Result<Self, GaError> {
        config.validate()?;

        let population = (0..config.population_size)
            .map(|_| Candidate::random(&mut rng))
            .collect();

        info!(
            "initialized population of {} (max_generations={}, tournament_size={}, mutation_rate={})",
            config.population_size, config.max_generations, config.tournament_size, config.mutation_rate
        );

        Ok(Self {
            fitness_history: Vec::with_capacity(config.max_generations),
            config,
            rng,
            population,
            generation: 0,
            state: EvolverState::Running,
        })
    }

    /// The current population, in the order of the last sort.
    pub fn population(&self) -> &[Candidate] {
        &self.population
    }

    /// Index of the current generation, starting at 0.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Current state of the loop.
    pub fn state(&self) -> EvolverState {
        self.state
    }

    /// The fittest candidate of the current population. Ties go to the
    /// earliest one.
    ///
    /// # Panics
    /// Panics if the population is empty, which a validated config rules out.
    pub fn best(&self) -> &Candidate {
        self.population
            .iter()
            .min_by(|a, b| by_fitness_desc(a, b))
            .expect("population must not be empty")
    }

    /// Runs one generation.
    ///
    /// Sorts the population and writes the `Generation <n>:` report for its top
    /// candidate. Unless that candidate is a solution, the population is then
    /// replaced with bred children; on the last allowed generation the loop
    /// stops after this final breeding. Does nothing once stopped.
    pub fn step<W: Write>(&mut self, out: &mut W) -> Result<EvolverState, GaError> {
        if self.state != EvolverState::Running {
            return Ok(self.state);
        }

        sort_population(&mut self.population);
        let top = &self.population[0];
        writeln!(out, "Generation {}:\n{}", self.generation, top)?;
        self.fitness_history.push(top.fitness());
        debug!("generation {}: best fitness {}", self.generation, top.fitness());

        if top.is_solution() {
            info!("solved at generation {}", self.generation);
            self.state = EvolverState::Solved;
        } else if self.generation + 1 >= self.config.max_generations {
            info!(
                "reached {} generations, best reported fitness {}",
                self.config.max_generations,
                top.fitness()
            );
            self.population = self.breed();
            self.state = EvolverState::Exhausted;
        } else {
            self.population = self.breed();
            self.generation += 1;
        }

        Ok(self.state)
    }

    /// Runs until solved or exhausted, then writes the `Best solution found:`
    /// report for the best candidate of the last population.
    ///
    /// An exhausted run whose final bred population happens to contain a
    /// solution ends as [`EvolverState::Solved`].
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<EvolutionResult, GaError> {
        while self.step(out)? == EvolverState::Running {}

        sort_population(&mut self.population);
        let best = self.population[0].clone();
        if best.is_solution() && self.state == EvolverState::Exhausted {
            info!("final bred population holds a solution");
            self.state = EvolverState::Solved;
        } else if self.state == EvolverState::Exhausted {
            info!("no solution, best fitness {}", best.fitness());
        }
        writeln!(out, "Best solution found:\n{best}")?;

        Ok(EvolutionResult {
            best,
            generations: self.fitness_history.len(),
            state: self.state,
            fitness_history: self.fitness_history.clone(),
        })
    }

    /// Builds the next generation: two tournaments, a crossover and a
    /// mutation attempt per child.
    fn breed(&mut self) -> Vec<Candidate> {
        let population = &self.population;
        let rng = &mut self.rng;
        let k = self.config.tournament_size;

        (0..self.config.population_size)
            .map(|_| {
                let p1 = tournament(population, k, rng);
                let p2 = tournament(population, k, rng);
                let mut child = uniform_crossover(&population[p1], &population[p2], rng);
                mutate(&mut child, self.config.mutation_rate, rng);
                child
            })
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
