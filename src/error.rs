//! Error types.
//!
//! The evolutionary operators themselves are total; the only failure mode
//! is a malformed [`GaConfig`](crate::ga::GaConfig), which is rejected
//! before any population is created.

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("target phrase must not be empty")]
    EmptyTarget,
    #[error("target contains non-printable character {character:?} at position {position}")]
    NonPrintableTarget { position: usize, character: char },
    #[error("population_size must be at least 1")]
    PopulationTooSmall,
    #[error("crossover_rate must be within [0.0, 1.0], got {0}")]
    InvalidCrossoverRate(f64),
    #[error("mutation_rate must be within [0.0, 1.0], got {0}")]
    InvalidMutationRate(f64),
    #[error("max_generations must be positive or None")]
    ZeroMaxGenerations,
    #[error("time_limit_ms must be positive or None")]
    ZeroTimeLimit,
    #[error("max_selection_attempts must be at least 1")]
    ZeroSelectionAttempts,
}
