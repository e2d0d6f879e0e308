//! # Error Types
//!
//! This module defines the error type shared by every stage of the solver.
//! It provides specific variants for the failure scenarios that may occur
//! while configuring, scoring, selecting and breeding boards.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use genqueens::error::{GeneticError, Result};
//!
//! fn check_size(size: usize) -> Result<usize> {
//!     if size < 2 {
//!         return Err(GeneticError::Configuration(format!(
//!             "Board size must be at least 2, got {}",
//!             size
//!         )));
//!     }
//!     Ok(size)
//! }
//!
//! assert!(check_size(8).is_ok());
//! assert!(check_size(1).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use genqueens::error::{GeneticError, OptionExt};
//!
//! fn best_score(scores: &[f64]) -> genqueens::error::Result<f64> {
//!     scores
//!         .iter()
//!         .copied()
//!         .reduce(f64::max)
//!         .ok_or_else_genetic(|| GeneticError::EmptyPopulation)
//! }
//!
//! assert_eq!(best_score(&[0.25, 0.75]).unwrap(), 0.75);
//! assert!(best_score(&[]).is_err());
//! ```

use thiserror::Error;

/// Represents errors that can occur while solving a board.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when a fitness calculation fails.
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),

    /// Error that occurs when a parent sampler cannot be built.
    #[error("Selection error: {0}")]
    Selection(String),

    /// Error that occurs when a breeding operation fails.
    #[error("Breeding error: {0}")]
    Breeding(String),

    /// Error that occurs when a board holds a row outside of `[0, N)`.
    #[error("Bounds error: Board is outside of valid bounds - {0}")]
    OutOfBounds(String),

    /// Error that occurs when an evolution process fails.
    #[error("Evolution error: {0}")]
    Evolution(String),
}

/// A specialized Result type for solver operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the error type
/// fixed to `GeneticError`.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using
    /// a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}
