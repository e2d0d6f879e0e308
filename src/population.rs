//! # Population and Generation
//!
//! A `Population` is the ordered, owned set of individuals of one generation. It is
//! never edited after construction: every generation builds a fresh one.
//!
//! A `Generation` pairs a population with the fitness vector computed from it and
//! the position of its best individual, so the scores can never drift out of step
//! with the individuals they describe.

use std::ops::Index;

use crate::{
    error::{GeneticError, OptionExt, Result},
    evolution::Challenge,
    phenotype::Phenotype,
    rng::RandomNumberGenerator,
};

/// An ordered, non-empty collection of individuals sharing the same size.
#[derive(Debug, Clone, PartialEq)]
pub struct Population<P: Phenotype> {
    individuals: Vec<P>,
}

impl<P: Phenotype> Population<P> {
    /// Wraps a set of individuals.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::EmptyPopulation` if `individuals` is empty and
    /// `GeneticError::Configuration` if the individuals differ in size.
    pub fn new(individuals: Vec<P>) -> Result<Self> {
        let size = individuals
            .first()
            .map(|p| p.size())
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;

        if let Some(odd) = individuals.iter().position(|p| p.size() != size) {
            return Err(GeneticError::Configuration(format!(
                "Individual {} has size {}, expected {}",
                odd,
                individuals[odd].size(),
                size
            )));
        }

        Ok(Self { individuals })
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Size shared by every individual.
    pub fn individual_size(&self) -> usize {
        self.individuals.first().map_or(0, |p| p.size())
    }

    pub fn get(&self, index: usize) -> Option<&P> {
        self.individuals.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.individuals.iter()
    }

    pub fn as_slice(&self) -> &[P] {
        &self.individuals
    }

    pub fn into_vec(self) -> Vec<P> {
        self.individuals
    }
}

impl<P: Phenotype> Index<usize> for Population<P> {
    type Output = P;

    fn index(&self, index: usize) -> &Self::Output {
        &self.individuals[index]
    }
}

impl<'a, P: Phenotype> IntoIterator for &'a Population<P> {
    type Item = &'a P;
    type IntoIter = std::slice::Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.individuals.iter()
    }
}

/// Draws `population_size` random individuals of `individual_size` genes each.
///
/// # Errors
///
/// Returns `GeneticError::EmptyPopulation` if `population_size` is zero and
/// `GeneticError::Configuration` if `individual_size` is zero.
pub fn generate_population<P: Phenotype>(
    population_size: usize,
    individual_size: usize,
    rng: &mut RandomNumberGenerator,
) -> Result<Population<P>> {
    if population_size == 0 {
        return Err(GeneticError::EmptyPopulation);
    }
    if individual_size == 0 {
        return Err(GeneticError::Configuration(
            "Individual size cannot be zero".to_string(),
        ));
    }

    Population::new(
        (0..population_size)
            .map(|_| P::random(individual_size, rng))
            .collect(),
    )
}

/// Locates the best score and its index.
///
/// Ties resolve to the lowest index.
pub fn best_of(fitness: &[f64]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (index, &score) in fitness.iter().enumerate() {
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((index, score)),
        }
    }
    best
}

/// A population together with its fitness vector and best individual.
#[derive(Debug, Clone)]
pub struct Generation<P: Phenotype> {
    number: usize,
    population: Population<P>,
    fitness: Vec<f64>,
    best_index: usize,
    best_score: f64,
}

impl<P: Phenotype> Generation<P> {
    /// Scores `population` with `challenge` and records its best individual.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::FitnessCalculation` if any score is not finite.
    pub fn evaluate<C>(number: usize, population: Population<P>, challenge: &C) -> Result<Self>
    where
        C: Challenge<P>,
    {
        let fitness = challenge.score_all(&population);

        if let Some((index, score)) = fitness.iter().enumerate().find(|(_, s)| !s.is_finite()) {
            return Err(GeneticError::FitnessCalculation(format!(
                "Non-finite fitness score {} for individual {} in generation {}",
                score, index, number
            )));
        }

        let (best_index, best_score) =
            best_of(&fitness).ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;

        Ok(Self {
            number,
            population,
            fitness,
            best_index,
            best_score,
        })
    }

    /// Generation counter, starting at zero for the initial population.
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn population(&self) -> &Population<P> {
        &self.population
    }

    pub fn fitness(&self) -> &[f64] {
        &self.fitness
    }

    pub fn best_index(&self) -> usize {
        self.best_index
    }

    pub fn best_score(&self) -> f64 {
        self.best_score
    }

    pub fn best(&self) -> &P {
        &self.population[self.best_index]
    }
}
