//! # Solver
//!
//! Ready-made wiring of the N-Queens pieces: boards scored by `QueensChallenge`
//! and bred by `SinglePointStrategy`.
//!
//! ## Example
//!
//! ```rust
//! use genqueens::evolution::EvolutionOptions;
//! use genqueens::rng::RandomNumberGenerator;
//! use genqueens::solver::solve;
//!
//! let options = EvolutionOptions::builder()
//!     .population_size(30)
//!     .board_size(5)
//!     .mutation_rate(0.1)
//!     .max_generations(10_000)
//!     .build()
//!     .unwrap();
//! let mut rng = RandomNumberGenerator::from_seed(1);
//!
//! let result = solve(&options, &mut rng).unwrap();
//! assert!(result.score <= 1.0);
//! assert_eq!(result.pheno.size(), 5);
//! ```

use crate::{
    board::Board,
    error::Result,
    evolution::{EvolutionLauncher, EvolutionOptions, EvolutionResult},
    fitness::QueensChallenge,
    rng::RandomNumberGenerator,
    strategy::SinglePointStrategy,
};

/// Launcher evolving N-Queens boards.
pub type QueensLauncher = EvolutionLauncher<Board, SinglePointStrategy, QueensChallenge>;

/// Builds the N-Queens launcher.
pub fn queens_launcher() -> QueensLauncher {
    EvolutionLauncher::new(SinglePointStrategy, QueensChallenge)
}

/// Runs one N-Queens evolution to completion.
pub fn solve(
    options: &EvolutionOptions,
    rng: &mut RandomNumberGenerator,
) -> Result<EvolutionResult<Board>> {
    queens_launcher().evolve(options, rng)
}
