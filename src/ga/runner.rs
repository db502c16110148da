//! GA evolutionary loop execution.
//!
//! [`GaEngine`] is the generation loop as an explicit state machine:
//!
//! ```text
//! Initialized ──start──▶ Evolving ──match──▶ Converged
//!                          │  ▲
//!                          └──┘ reproduce
//!                          │
//!                          └──limit / cancel──▶ Stopped(reason)
//! ```
//!
//! [`GaRunner`] drives an engine to completion and returns a [`GaResult`].

use super::config::GaConfig;
use super::genome::Genome;
use super::population::{Population, RunBest};
use super::selection::Selector;
use super::target::Target;
use crate::error::ConfigError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Why a run ended without matching the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// The configured generation cap was reached.
    MaxGenerations,
    /// The configured wall-clock limit elapsed.
    TimeLimit,
    /// The cancellation flag was raised.
    Cancelled,
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StopReason::MaxGenerations => "generation limit reached",
            StopReason::TimeLimit => "time limit reached",
            StopReason::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

/// Lifecycle of a [`GaEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Constructed; no population yet.
    Initialized,
    /// A population exists and the target has not been matched.
    Evolving,
    /// The run-level best phrase equals the target. Terminal.
    Converged,
    /// An opt-in limit ended the run early. Terminal.
    Stopped(StopReason),
}

impl EngineState {
    pub fn is_terminal(self) -> bool {
        matches!(self, EngineState::Converged | EngineState::Stopped(_))
    }
}

/// Snapshot taken right after a generation has been evaluated.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Index of the evaluated generation (0 for the seeded population).
    pub generation: usize,

    /// Run-level best fitness after this evaluation.
    pub best_fitness: f64,

    /// Run-level best phrase after this evaluation.
    pub best_phrase: String,

    /// Mean fitness of this generation alone.
    pub mean_fitness: f64,
}

/// Result of a phrase-evolution run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// Best phrase found during the entire run.
    pub best_phrase: String,

    /// Fitness of `best_phrase`.
    pub best_fitness: f64,

    /// Number of reproduction steps performed.
    ///
    /// A target matched by the seeded population reports 0. Counting the
    /// convergence check itself as a generation would give one more.
    pub generations: usize,

    /// Whether the target was matched exactly.
    pub converged: bool,

    /// Set when an opt-in limit ended the run first.
    pub stop_reason: Option<StopReason>,

    /// Seed of the random stream, for replaying the run.
    pub seed: u64,

    /// Run-level best fitness after each evaluated generation.
    pub fitness_history: Vec<f64>,
}

/// The generation loop, one step at a time.
///
/// All randomness comes from a single seeded stream, so two engines built
/// from the same configuration and seed evolve identical populations.
///
/// ```
/// use phrase_ga::ga::{EngineState, GaConfig, GaEngine};
///
/// let config = GaConfig::new("ok").with_population_size(100).with_seed(3);
/// let mut engine = GaEngine::new(config).unwrap();
/// while engine.step().is_some() {}
/// assert_eq!(engine.state(), EngineState::Converged);
/// assert_eq!(engine.best().phrase(), "ok");
/// ```
#[derive(Debug)]
pub struct GaEngine {
    config: GaConfig,
    target: Target,
    selector: Selector,
    rng: StdRng,
    seed: u64,
    population: Population,
    best: RunBest,
    state: EngineState,
    generation: usize,
    fitness_history: Vec<f64>,
    started: Option<Instant>,
}

impl GaEngine {
    /// Validates `config` and prepares an engine in [`EngineState::Initialized`].
    ///
    /// # Errors
    /// Returns the [`ConfigError`] reported by [`GaConfig::validate`].
    pub fn new(config: GaConfig) -> Result<Self, ConfigError> {
        let target = config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);

        Ok(Self {
            selector: Selector::new(config.max_selection_attempts),
            rng: StdRng::seed_from_u64(seed),
            seed,
            target,
            population: Population::from_genomes(Vec::new()),
            best: RunBest::new(),
            state: EngineState::Initialized,
            generation: 0,
            fitness_history: Vec::new(),
            started: None,
            config,
        })
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Completed reproduction steps so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn best(&self) -> &RunBest {
        &self.best
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Seeds the initial population. Only acts in [`EngineState::Initialized`].
    pub fn start(&mut self) {
        if self.state != EngineState::Initialized {
            return;
        }
        self.population = Population::seed(
            self.config.population_size,
            self.target.len(),
            &mut self.rng,
        );
        self.started = Some(Instant::now());
        self.state = EngineState::Evolving;
    }

    /// Runs one generation: evaluate, check for a match, then reproduce.
    ///
    /// Starts the engine if needed. Returns the statistics of the evaluated
    /// generation, or `None` once the engine is in a terminal state.
    pub fn step(&mut self) -> Option<GenerationStats> {
        match self.state {
            EngineState::Converged | EngineState::Stopped(_) => return None,
            EngineState::Initialized => self.start(),
            EngineState::Evolving => {}
        }

        self.population.evaluate(&self.target, &mut self.best);
        self.fitness_history.push(self.best.fitness());

        let stats = GenerationStats {
            generation: self.generation,
            best_fitness: self.best.fitness(),
            best_phrase: self.best.phrase().to_string(),
            mean_fitness: self.population.mean_fitness(),
        };
        log::debug!(
            "generation {}: best {:.6} {:?} (mean {:.6})",
            stats.generation,
            stats.best_fitness,
            stats.best_phrase,
            stats.mean_fitness
        );

        if self.best.is_converged(&self.target) {
            self.state = EngineState::Converged;
            return Some(stats);
        }
        if let Some(reason) = self.limit_reached() {
            self.state = EngineState::Stopped(reason);
            return Some(stats);
        }

        self.population = self.reproduce();
        self.generation += 1;
        Some(stats)
    }

    /// Ends the run early with `reason`. Has no effect once terminal.
    pub fn halt(&mut self, reason: StopReason) {
        if !self.state.is_terminal() {
            self.state = EngineState::Stopped(reason);
        }
    }

    /// Consumes the engine and reports the run.
    pub fn into_result(self) -> GaResult {
        GaResult {
            best_fitness: self.best.fitness(),
            best_phrase: self.best.phrase().to_string(),
            generations: self.generation,
            converged: self.state == EngineState::Converged,
            stop_reason: match self.state {
                EngineState::Stopped(reason) => Some(reason),
                _ => None,
            },
            seed: self.seed,
            fitness_history: self.fitness_history,
        }
    }

    fn limit_reached(&self) -> Option<StopReason> {
        if let Some(max) = self.config.max_generations {
            if self.generation >= max {
                return Some(StopReason::MaxGenerations);
            }
        }
        if let (Some(ms), Some(started)) = (self.config.time_limit_ms, self.started) {
            if started.elapsed() >= Duration::from_millis(ms) {
                return Some(StopReason::TimeLimit);
            }
        }
        None
    }

    /// Builds the next generation from the current one.
    ///
    /// Every child is a new genome: either a crossover of two selected
    /// parents or a copy of one, then mutated. Parents are never touched.
    fn reproduce(&mut self) -> Population {
        let parents = self.population.genomes();
        let best_fitness = self.best.fitness();
        let mut next = Vec::with_capacity(self.config.population_size);

        for _ in 0..self.config.population_size {
            let p1 = self.selector.select(parents, best_fitness, &mut self.rng);

            let mut child = if self.rng.random_range(0.0..1.0) < self.config.crossover_rate {
                let p2 = self.selector.select(parents, best_fitness, &mut self.rng);
                parents[p1].crossover(&parents[p2], &mut self.rng)
            } else {
                Genome::new(parents[p1].genes().to_vec())
            };

            child.mutate(&mut self.rng, self.config.mutation_rate);
            next.push(child);
        }

        Population::from_genomes(next)
    }
}

/// Executes a complete run.
///
/// # Usage
///
/// ```
/// use phrase_ga::ga::{GaConfig, GaRunner};
///
/// let config = GaConfig::new("GA").with_population_size(100).with_seed(42);
/// let result = GaRunner::run(&config).unwrap();
/// assert!(result.converged);
/// assert_eq!(result.best_phrase, "GA");
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs until the target is matched or an opt-in limit is hit.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if the configuration is invalid.
    pub fn run(config: &GaConfig) -> Result<GaResult, ConfigError> {
        Self::drive(config, None, |_| {})
    }

    /// Runs and calls `observer` after every evaluated generation.
    pub fn run_with_observer<F>(config: &GaConfig, observer: F) -> Result<GaResult, ConfigError>
    where
        F: FnMut(&GenerationStats),
    {
        Self::drive(config, None, observer)
    }

    /// Runs with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the run stops
    /// before the next generation and reports the best phrase so far.
    pub fn run_with_cancel(
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult, ConfigError> {
        Self::drive(config, cancel, |_| {})
    }

    fn drive<F>(
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
        mut observer: F,
    ) -> Result<GaResult, ConfigError>
    where
        F: FnMut(&GenerationStats),
    {
        let mut engine = GaEngine::new(config.clone())?;
        log::info!(
            "evolving {} characters: population {}, crossover {}, mutation {}, seed {}",
            engine.target().len(),
            config.population_size,
            config.crossover_rate,
            config.mutation_rate,
            engine.seed()
        );

        loop {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    engine.halt(StopReason::Cancelled);
                }
            }
            match engine.step() {
                Some(stats) => observer(&stats),
                None => break,
            }
        }

        let result = engine.into_result();
        match result.stop_reason {
            None => log::info!(
                "converged after {} generations: {:?}",
                result.generations,
                result.best_phrase
            ),
            Some(reason) => log::info!(
                "stopped after {} generations ({reason}): best {:.6} {:?}",
                result.generations,
                result.best_fitness,
                result.best_phrase
            ),
        }
        Ok(result)
    }
}

// ============================================================================
// Tests
// ============================================================================
