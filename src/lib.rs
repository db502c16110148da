//! Evolve random strings into a target phrase with a genetic algorithm.
//!
//! A didactic, single-threaded GA:
//!
//! - **Fitness**: cube of the fraction of characters matching the target
//!   at the same position.
//! - **Selection**: fitness-proportionate rejection sampling, scaled by the
//!   best fitness seen in the run.
//! - **Variation**: single-point crossover and per-character mutation over
//!   printable ASCII (space through `~`).
//!
//! Runs are reproducible from a seed and, by default, continue until the
//! target is matched exactly. Generation, time and cancellation limits are
//! available as opt-in stopping conditions.
//!
//! ```
//! use phrase_ga::ga::{GaConfig, GaRunner};
//!
//! let config = GaConfig::new("hi!").with_population_size(150).with_seed(9);
//! let result = GaRunner::run(&config)?;
//! assert_eq!(result.best_phrase, "hi!");
//! # Ok::<(), phrase_ga::ConfigError>(())
//! ```

pub mod error;
pub mod ga;

pub use error::ConfigError;
