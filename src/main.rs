//! phrase-ga CLI - evolve a random population into a target phrase.

use std::process::ExitCode;

use clap::Parser;
use phrase_ga::ga::{GaConfig, GaRunner, DEFAULT_CROSSOVER_RATE, DEFAULT_POPULATION_SIZE};

const DEFAULT_TARGET: &str =
    "This is a testing string. This is a testing string. This is a testing string.";

#[derive(Debug, Parser)]
#[command(name = "phrase-ga", version, about)]
struct Args {
    /// Phrase to evolve toward (printable ASCII).
    #[arg(short, long, default_value = DEFAULT_TARGET)]
    target: String,

    /// Genomes per generation.
    #[arg(short, long, default_value_t = DEFAULT_POPULATION_SIZE)]
    population: usize,

    /// Probability of producing a child by crossover.
    #[arg(short, long, default_value_t = DEFAULT_CROSSOVER_RATE)]
    crossover: f64,

    /// Per-character mutation probability.
    #[arg(short, long, conflicts_with = "mutation_scale")]
    mutation: Option<f64>,

    /// Expected mutated characters per genome; the rate becomes K / length.
    #[arg(long, value_name = "K")]
    mutation_scale: Option<f64>,

    /// Seed for a reproducible run.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Stop after this many generations.
    #[arg(long)]
    max_generations: Option<usize>,

    /// Stop after this many milliseconds.
    #[arg(long)]
    time_limit_ms: Option<u64>,
}

impl Args {
    fn into_config(self) -> GaConfig {
        let mut config = GaConfig::new(self.target)
            .with_population_size(self.population)
            .with_crossover_rate(self.crossover);
        if let Some(k) = self.mutation_scale {
            config = config.with_mutation_scale(k);
        }
        if let Some(rate) = self.mutation {
            config = config.with_mutation_rate(rate);
        }
        config.seed = self.seed;
        config.max_generations = self.max_generations;
        config.time_limit_ms = self.time_limit_ms;
        config
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Args::parse().into_config();
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {e}");
        return ExitCode::FAILURE;
    }

    println!("Phrase: {}", config.target);
    println!(
        "Population: {}    Cross Over: {}    Mutation: {}",
        config.population_size, config.crossover_rate, config.mutation_rate
    );
    println!();

    let result = GaRunner::run_with_observer(&config, |stats| {
        log::info!(
            "gen {:>6}  best {:.6}  {}",
            stats.generation,
            stats.best_fitness,
            stats.best_phrase
        );
    });

    match result {
        Ok(result) => {
            println!();
            if let Some(reason) = result.stop_reason {
                println!("Stopped: {reason}");
            }
            println!("Generations: {}", result.generations);
            println!("Best phrase: {}", result.best_phrase);
            println!("Best fitness: {}", result.best_fitness);
            println!("Seed: {}", result.seed);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            ExitCode::FAILURE
        }
    }
}
