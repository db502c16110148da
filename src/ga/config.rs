//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::selection::DEFAULT_MAX_SELECTION_ATTEMPTS;
use super::target::Target;
use crate::error::ConfigError;

/// Default number of genomes per generation.
pub const DEFAULT_POPULATION_SIZE: usize = 200;

/// Default crossover probability.
pub const DEFAULT_CROSSOVER_RATE: f64 = 1.0;

/// Default expected number of mutated characters per genome.
///
/// The per-character rate is this value divided by the target length.
pub const DEFAULT_MUTATION_SCALE: f64 = 0.1;

/// Configuration for a phrase-evolution run.
///
/// # Defaults
///
/// ```
/// use phrase_ga::ga::GaConfig;
///
/// let config = GaConfig::new("hello");
/// assert_eq!(config.population_size, 200);
/// assert!((config.mutation_rate - 0.02).abs() < 1e-12);
/// assert!(config.max_generations.is_none());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use phrase_ga::ga::GaConfig;
///
/// let config = GaConfig::new("To be or not to be")
///     .with_population_size(500)
///     .with_crossover_rate(0.9)
///     .with_mutation_scale(0.5)
///     .with_seed(7)
///     .with_max_generations(10_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Phrase to evolve toward. Must be non-empty printable ASCII.
    pub target: String,

    /// Number of genomes in every generation.
    pub population_size: usize,

    /// Probability that a child is produced by crossover (0.0–1.0).
    ///
    /// Otherwise the child is a clone of the first selected parent.
    pub crossover_rate: f64,

    /// Per-character probability of resampling during mutation (0.0–1.0).
    pub mutation_rate: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a fresh seed; the seed used is reported in the result.
    pub seed: Option<u64>,

    /// Optional cap on reproduction steps.
    ///
    /// `None` (the default) runs until the target is matched.
    pub max_generations: Option<usize>,

    /// Optional wall-clock time limit in milliseconds.
    ///
    /// Checked once per generation, after evaluation, so the run may
    /// overshoot by one generation's worth of work.
    pub time_limit_ms: Option<u64>,

    /// Samples the selector draws before accepting its last candidate.
    pub max_selection_attempts: usize,
}

impl GaConfig {
    /// Creates a configuration with default parameters for `target`.
    ///
    /// The mutation rate defaults to [`DEFAULT_MUTATION_SCALE`] divided by
    /// the target length.
    pub fn new(target: impl Into<String>) -> Self {
        let target = target.into();
        let mutation_rate = scaled_rate(DEFAULT_MUTATION_SCALE, &target);
        Self {
            target,
            population_size: DEFAULT_POPULATION_SIZE,
            crossover_rate: DEFAULT_CROSSOVER_RATE,
            mutation_rate,
            seed: None,
            max_generations: None,
            time_limit_ms: None,
            max_selection_attempts: DEFAULT_MAX_SELECTION_ATTEMPTS,
        }
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the crossover rate. Out-of-range values are reported by
    /// [`validate`](Self::validate), not clamped.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the per-character mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the mutation rate to `k / target length`, so that about `k`
    /// characters per genome are resampled whatever the phrase length.
    pub fn with_mutation_scale(mut self, k: f64) -> Self {
        self.mutation_rate = scaled_rate(k, &self.target);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Caps the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = Some(n);
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Sets how many samples the selector may reject before giving up.
    pub fn with_max_selection_attempts(mut self, n: usize) -> Self {
        self.max_selection_attempts = n;
        self
    }

    /// Validates the configuration and returns the parsed [`Target`].
    ///
    /// # Errors
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<Target, ConfigError> {
        let target = Target::new(self.target.as_str())?;
        if self.population_size == 0 {
            return Err(ConfigError::PopulationTooSmall);
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(ConfigError::InvalidCrossoverRate(self.crossover_rate));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::InvalidMutationRate(self.mutation_rate));
        }
        if self.max_generations == Some(0) {
            return Err(ConfigError::ZeroMaxGenerations);
        }
        if self.time_limit_ms == Some(0) {
            return Err(ConfigError::ZeroTimeLimit);
        }
        if self.max_selection_attempts == 0 {
            return Err(ConfigError::ZeroSelectionAttempts);
        }
        Ok(target)
    }
}

fn scaled_rate(k: f64, target: &str) -> f64 {
    k / target.len().max(1) as f64
}
