pub mod board;
pub mod error;
pub mod evolution;
pub mod fitness;
pub mod phenotype;
pub mod population;
pub mod rng;
pub mod selection;
pub mod solver;
pub mod strategy;

// Re-export commonly used types for convenience
pub use board::Board;
pub use error::{GeneticError, OptionExt, Result};
pub use solver::solve;
