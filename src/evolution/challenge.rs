use crate::{phenotype::Phenotype, population::Population};

/// Scores individuals. Higher is better.
pub trait Challenge<Pheno: Phenotype> {
    fn score(&self, phenotype: &Pheno) -> f64;

    /// Scores a whole population, one entry per individual in population order.
    fn score_all(&self, population: &Population<Pheno>) -> Vec<f64> {
        population
            .iter()
            .map(|phenotype| self.score(phenotype))
            .collect()
    }
}
