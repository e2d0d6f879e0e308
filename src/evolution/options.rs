//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct represents the configuration of one solver run:
//! population size, board size, mutation rate, the convergence threshold, the
//! generation cap, the negative fitness policy used by selection, and how much
//! per-generation progress is logged.
//!
//! ## Example
//!
//! ```rust
//! use genqueens::evolution::options::{EvolutionOptions, LogLevel};
//!
//! // Reference configuration: 10 boards of 8 queens, 5% mutation
//! let default_options = EvolutionOptions::default();
//! assert_eq!(default_options.get_board_size(), 8);
//!
//! // Custom configuration through the builder
//! let custom_options = EvolutionOptions::builder()
//!     .population_size(50)
//!     .board_size(10)
//!     .mutation_rate(0.1)
//!     .max_generations(5_000)
//!     .log_level(LogLevel::Minimal)
//!     .build()
//!     .unwrap();
//! assert_eq!(custom_options.get_population_size(), 50);
//! ```
//!
//! ## Structs
//!
//! ### `EvolutionOptions`
//!
//! #### Fields
//!
//! - `population_size`: The number of boards in every generation.
//! - `board_size`: The number of columns (and rows) of the board.
//! - `mutation_rate`: Per-offspring probability of a single point mutation.
//! - `convergence_threshold`: Best fitness at which the run counts as solved.
//! - `max_generations`: Generation cap; `None` keeps evolving until solved.
//! - `negative_fitness`: How selection treats negative fitness values.
//! - `log_level`: How much per-generation progress is logged.
//!
//! ### `LogLevel`
//!
//! - `Verbose`: Logs every generation and every board in it.
//! - `Minimal`: Logs a summary line per generation.
//! - `None`: Logs only the start and the end of a run.

use crate::error::{GeneticError, Result};
use crate::selection::NegativeFitnessPolicy;

pub const DEFAULT_POPULATION_SIZE: usize = 10;
pub const DEFAULT_BOARD_SIZE: usize = 8;
pub const DEFAULT_MUTATION_RATE: f64 = 0.05;
pub const DEFAULT_CONVERGENCE_THRESHOLD: f64 = 0.99;
pub const DEFAULT_MAX_GENERATIONS: usize = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LogLevel {
    Verbose,
    Minimal,
    #[default]
    None,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EvolutionOptions {
    population_size: usize,
    board_size: usize,
    mutation_rate: f64,
    convergence_threshold: f64,
    max_generations: Option<usize>,
    negative_fitness: NegativeFitnessPolicy,
    log_level: LogLevel,
}

impl EvolutionOptions {
    /// Creates options for the given problem with the default threshold, cap,
    /// policy and log level.
    ///
    /// No validation happens here; see [`EvolutionOptions::validate`].
    pub fn new(population_size: usize, board_size: usize, mutation_rate: f64) -> Self {
        Self {
            population_size,
            board_size,
            mutation_rate,
            ..Self::default()
        }
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_board_size(&self) -> usize {
        self.board_size
    }

    pub fn get_mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn get_convergence_threshold(&self) -> f64 {
        self.convergence_threshold
    }

    pub fn get_max_generations(&self) -> Option<usize> {
        self.max_generations
    }

    pub fn get_negative_fitness(&self) -> NegativeFitnessPolicy {
        self.negative_fitness
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    /// Sets the population size.
    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    /// Sets the board size.
    pub fn set_board_size(&mut self, board_size: usize) {
        self.board_size = board_size;
    }

    /// Sets the mutation rate.
    pub fn set_mutation_rate(&mut self, mutation_rate: f64) {
        self.mutation_rate = mutation_rate;
    }

    /// Sets the convergence threshold.
    pub fn set_convergence_threshold(&mut self, threshold: f64) {
        self.convergence_threshold = threshold;
    }

    /// Sets the generation cap. `None` removes it.
    pub fn set_max_generations(&mut self, max_generations: Option<usize>) {
        self.max_generations = max_generations;
    }

    /// Sets the negative fitness policy.
    pub fn set_negative_fitness(&mut self, policy: NegativeFitnessPolicy) {
        self.negative_fitness = policy;
    }

    /// Sets the log level.
    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    /// Checks that the options describe a runnable configuration.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if the population is empty, the
    /// board has fewer than two columns, or the mutation rate or convergence
    /// threshold is out of range.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(GeneticError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }

        if self.board_size < 2 {
            return Err(GeneticError::Configuration(format!(
                "Board size must be at least 2, got {}",
                self.board_size
            )));
        }

        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GeneticError::Configuration(format!(
                "Mutation rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }

        if !(self.convergence_threshold > 0.0 && self.convergence_threshold <= 1.0) {
            return Err(GeneticError::Configuration(format!(
                "Convergence threshold must be within (0, 1], got {}",
                self.convergence_threshold
            )));
        }

        Ok(())
    }

    /// Returns a builder for creating a validated `EvolutionOptions` instance.
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            population_size: DEFAULT_POPULATION_SIZE,
            board_size: DEFAULT_BOARD_SIZE,
            mutation_rate: DEFAULT_MUTATION_RATE,
            convergence_threshold: DEFAULT_CONVERGENCE_THRESHOLD,
            max_generations: Some(DEFAULT_MAX_GENERATIONS),
            negative_fitness: NegativeFitnessPolicy::default(),
            log_level: LogLevel::None,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Provides a fluent interface for constructing `EvolutionOptions` instances.
/// Unset fields fall back to the defaults.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    population_size: Option<usize>,
    board_size: Option<usize>,
    mutation_rate: Option<f64>,
    convergence_threshold: Option<f64>,
    max_generations: Option<Option<usize>>,
    negative_fitness: Option<NegativeFitnessPolicy>,
    log_level: Option<LogLevel>,
}

impl EvolutionOptionsBuilder {
    /// Sets the population size.
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    /// Sets the board size.
    pub fn board_size(mut self, value: usize) -> Self {
        self.board_size = Some(value);
        self
    }

    /// Sets the mutation rate.
    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    /// Sets the convergence threshold.
    pub fn convergence_threshold(mut self, value: f64) -> Self {
        self.convergence_threshold = Some(value);
        self
    }

    /// Sets the generation cap.
    pub fn max_generations(mut self, value: usize) -> Self {
        self.max_generations = Some(Some(value));
        self
    }

    /// Removes the generation cap: the run only ends once solved.
    pub fn unbounded(mut self) -> Self {
        self.max_generations = Some(None);
        self
    }

    /// Sets the negative fitness policy.
    pub fn negative_fitness(mut self, value: NegativeFitnessPolicy) -> Self {
        self.negative_fitness = Some(value);
        self
    }

    /// Sets the log level.
    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// Builds and validates the `EvolutionOptions` instance.
    pub fn build(self) -> Result<EvolutionOptions> {
        let defaults = EvolutionOptions::default();
        let options = EvolutionOptions {
            population_size: self.population_size.unwrap_or(defaults.population_size),
            board_size: self.board_size.unwrap_or(defaults.board_size),
            mutation_rate: self.mutation_rate.unwrap_or(defaults.mutation_rate),
            convergence_threshold: self
                .convergence_threshold
                .unwrap_or(defaults.convergence_threshold),
            max_generations: self.max_generations.unwrap_or(defaults.max_generations),
            negative_fitness: self.negative_fitness.unwrap_or(defaults.negative_fitness),
            log_level: self.log_level.unwrap_or(defaults.log_level),
        };
        options.validate()?;
        Ok(options)
    }
}
