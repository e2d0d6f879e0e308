//! # BreedStrategy
//!
//! The `BreedStrategy` trait defines the interface for strategies responsible for breeding
//! the next population from a scored generation and the evolution options.
pub mod single_point;

use std::fmt::Debug;

use crate::{
    error::Result,
    evolution::options::EvolutionOptions,
    phenotype::Phenotype,
    population::{Generation, Population},
    rng::RandomNumberGenerator,
};

/// # BreedStrategy
///
/// Builds a complete replacement population. The generation passed in is only
/// read; its individuals are never modified.
pub trait BreedStrategy<Pheno: Phenotype>
where
    Self: Debug + Clone + Send + Sync,
{
    /// Breeds a new population of the same size as `generation`.
    ///
    /// ## Parameters
    ///
    /// - `generation`: The scored current generation.
    /// - `evol_options`: A reference to the evolution options specifying algorithm parameters.
    /// - `rng`: A mutable reference to the random number generator used for every draw.
    ///
    /// ## Errors
    ///
    /// This method can fail if parents cannot be sampled from the fitness vector.
    fn breed(
        &self,
        generation: &Generation<Pheno>,
        evol_options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Population<Pheno>>;
}

pub use single_point::SinglePointStrategy;
