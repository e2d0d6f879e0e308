pub mod challenge;
pub mod launcher;
pub mod options;

pub use challenge::Challenge;
pub use launcher::{
    Evolution, EvolutionLauncher, EvolutionResult, EvolutionState, EvolutionStatus,
};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder, LogLevel};
