use anyhow::{Context, Result};
use clap::Parser;
use queens_ga::ga::{Evolver, EvolverConfig, EvolverState};
use std::io::{self, BufWriter, Write};

/// Solves the eight queens problem with a genetic algorithm.
///
/// Prints the best board of every generation, then the best board found.
#[derive(Parser, Debug)]
#[command(name = "queens-ga")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Random seed (default: drawn from the operating system)
    #[arg(long)]
    seed: Option<u64>,

    /// Population size
    #[arg(short = 'n', long, default_value = "100")]
    population_size: usize,

    /// Maximum number of generations
    #[arg(short = 'g', long, default_value = "1000")]
    generations: usize,

    /// Candidates sampled per tournament
    #[arg(short = 'k', long, default_value = "10")]
    tournament_size: usize,

    /// Probability of mutating each child
    #[arg(short = 'm', long, default_value = "0.01")]
    mutation_rate: f64,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let mut config = EvolverConfig::default()
        .with_population_size(cli.population_size)
        .with_max_generations(cli.generations)
        .with_tournament_size(cli.tournament_size)
        .with_mutation_rate(cli.mutation_rate);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let mut evolver = Evolver::from_config(config).context("Failed to set up evolver")?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = evolver.run(&mut out).context("Failed to write report")?;
    out.flush().context("Failed to flush report")?;

    if result.state == EvolverState::Exhausted {
        log::warn!(
            "stopped after {} generations without a solution",
            result.generations
        );
    }

    Ok(())
}
