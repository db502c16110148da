//! Genetic algorithm that evolves strings toward a target phrase.
//!
//! Genomes are fixed-length printable ASCII strings scored by the cube of
//! their per-position match ratio. Each generation, parents are picked by
//! fitness-proportionate rejection sampling, recombined by single-point
//! crossover, and mutated character by character. The run ends when the
//! best phrase seen equals the target.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Run parameters (population size, rates, limits, seed)
//! - [`GaEngine`]: The generation loop as a steppable state machine
//! - [`GaRunner`]: Drives an engine to completion
//! - [`GaResult`]: Final best phrase, fitness and generation count
//!
//! # Building Blocks
//!
//! - [`Genome`]: Candidate string with scoring, crossover and mutation
//! - [`Population`]: One generation plus evaluation into [`RunBest`]
//! - [`Selector`]: Rejection sampler with a bounded retry budget
//! - [`Target`]: Validated target phrase
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod genome;
mod population;
mod runner;
mod selection;
mod target;
mod types;

pub use config::{
    GaConfig, DEFAULT_CROSSOVER_RATE, DEFAULT_MUTATION_SCALE, DEFAULT_POPULATION_SIZE,
};
pub use genome::{Genome, ALPHABET_MAX, ALPHABET_MIN};
pub use population::{Population, RunBest};
pub use runner::{EngineState, GaEngine, GaResult, GaRunner, GenerationStats, StopReason};
pub use selection::{Selector, DEFAULT_MAX_SELECTION_ATTEMPTS};
pub use target::Target;
pub use types::Individual;
