use std::marker::PhantomData;

use tracing::{debug, info, trace, warn};

use super::{
    challenge::Challenge,
    options::{EvolutionOptions, LogLevel},
};
use crate::{
    error::{GeneticError, OptionExt, Result},
    phenotype::Phenotype,
    population::{generate_population, Generation},
    rng::RandomNumberGenerator,
    strategy::BreedStrategy,
};

/// How a finished run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EvolutionStatus {
    /// The best fitness reached the convergence threshold.
    Converged,
    /// The generation cap was reached first.
    Exhausted,
}

/// The phase an [`Evolution`] is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvolutionState {
    Initializing,
    Evolving,
    Converged,
    Exhausted,
}

impl EvolutionState {
    pub fn is_terminal(self) -> bool {
        matches!(self, EvolutionState::Converged | EvolutionState::Exhausted)
    }
}

/// Represents the result of an evolution: the best phenotype of the last generation,
/// its score, how many generations were bred, and whether the run converged.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionResult<Pheno: Phenotype> {
    /// The evolved phenotype.
    pub pheno: Pheno,
    /// The fitness score of the phenotype.
    pub score: f64,
    /// Number of generations bred after the initial population.
    pub generation: usize,
    pub status: EvolutionStatus,
}

impl<Pheno: Phenotype> EvolutionResult<Pheno> {
    pub fn converged(&self) -> bool {
        self.status == EvolutionStatus::Converged
    }
}

/// Manages the evolution process using a specified breeding strategy and challenge.
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<Pheno, Strategy, Chall>
where
    Pheno: Phenotype,
    Chall: Challenge<Pheno>,
    Strategy: BreedStrategy<Pheno>,
{
    strategy: Strategy,
    challenge: Chall,
    _marker: PhantomData<Pheno>,
}

impl<Pheno, Strategy, Chall> EvolutionLauncher<Pheno, Strategy, Chall>
where
    Pheno: Phenotype,
    Chall: Challenge<Pheno>,
    Strategy: BreedStrategy<Pheno>,
{
    /// Creates a new `EvolutionLauncher` instance with the specified breeding strategy and challenge.
    ///
    /// # Arguments
    ///
    /// * `strategy` - The breeding strategy used for building each new population.
    /// * `challenge` - The challenge used to evaluate the fitness of phenotypes.
    pub fn new(strategy: Strategy, challenge: Chall) -> Self {
        Self {
            strategy,
            challenge,
            _marker: PhantomData,
        }
    }

    pub fn challenge(&self) -> &Chall {
        &self.challenge
    }

    /// Validates `options` and prepares a run in the `Initializing` state.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if the options are invalid.
    pub fn start<'a>(
        &'a self,
        options: &EvolutionOptions,
        rng: &'a mut RandomNumberGenerator,
    ) -> Result<Evolution<'a, Pheno, Strategy, Chall>> {
        options.validate()?;
        Ok(Evolution {
            launcher: self,
            options: options.clone(),
            rng,
            phase: Phase::Initializing,
        })
    }

    /// Prepares a run and scores its initial population.
    pub fn initialize<'a>(
        &'a self,
        options: &EvolutionOptions,
        rng: &'a mut RandomNumberGenerator,
    ) -> Result<Evolution<'a, Pheno, Strategy, Chall>> {
        let mut evolution = self.start(options, rng)?;
        evolution.step()?;
        Ok(evolution)
    }

    /// Evolves boards until the best one reaches the convergence threshold or the
    /// generation cap is hit.
    ///
    /// # Arguments
    ///
    /// * `options` - Evolution options controlling the evolution process.
    /// * `rng` - A random number generator for introducing randomness.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The options are invalid
    /// - A fitness score is not finite
    /// - Parents cannot be sampled
    pub fn evolve(
        &self,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionResult<Pheno>> {
        self.start(options, rng)?.run()
    }
}

#[derive(Debug)]
enum Phase<Pheno: Phenotype> {
    Initializing,
    Evolving(Generation<Pheno>),
    Converged(Generation<Pheno>),
    Exhausted(Generation<Pheno>),
}

/// A single run, advanced one generation per [`Evolution::step`].
///
/// `Initializing` generates and scores the initial population. While `Evolving`,
/// each step breeds a replacement population and scores it. The run ends in
/// `Converged` once the best score reaches the threshold, or in `Exhausted` when
/// `max_generations` generations have been bred without converging.
pub struct Evolution<'a, Pheno, Strategy, Chall>
where
    Pheno: Phenotype,
    Chall: Challenge<Pheno>,
    Strategy: BreedStrategy<Pheno>,
{
    launcher: &'a EvolutionLauncher<Pheno, Strategy, Chall>,
    options: EvolutionOptions,
    rng: &'a mut RandomNumberGenerator,
    phase: Phase<Pheno>,
}

impl<Pheno, Strategy, Chall> Evolution<'_, Pheno, Strategy, Chall>
where
    Pheno: Phenotype,
    Chall: Challenge<Pheno>,
    Strategy: BreedStrategy<Pheno>,
{
    pub fn state(&self) -> EvolutionState {
        match self.phase {
            Phase::Initializing => EvolutionState::Initializing,
            Phase::Evolving(_) => EvolutionState::Evolving,
            Phase::Converged(_) => EvolutionState::Converged,
            Phase::Exhausted(_) => EvolutionState::Exhausted,
        }
    }

    /// The current generation, once the initial population has been scored.
    pub fn generation(&self) -> Option<&Generation<Pheno>> {
        match &self.phase {
            Phase::Initializing => None,
            Phase::Evolving(generation)
            | Phase::Converged(generation)
            | Phase::Exhausted(generation) => Some(generation),
        }
    }

    pub fn options(&self) -> &EvolutionOptions {
        &self.options
    }

    /// Advances the run by one transition and returns the new state.
    ///
    /// Stepping a finished run is a no-op.
    pub fn step(&mut self) -> Result<EvolutionState> {
        let next = match &self.phase {
            Phase::Initializing => {
                let population = generate_population(
                    self.options.get_population_size(),
                    self.options.get_board_size(),
                    self.rng,
                )?;
                let generation =
                    Generation::evaluate(0, population, &self.launcher.challenge)?;
                info!(
                    population_size = self.options.get_population_size(),
                    board_size = self.options.get_board_size(),
                    best_score = generation.best_score(),
                    "initial population scored"
                );
                generation
            }
            Phase::Evolving(current) => {
                let population = self
                    .launcher
                    .strategy
                    .breed(current, &self.options, self.rng)?;
                Generation::evaluate(current.number() + 1, population, &self.launcher.challenge)?
            }
            Phase::Converged(_) | Phase::Exhausted(_) => return Ok(self.state()),
        };

        self.log_generation(&next);
        self.phase = self.settle(next);
        self.log_outcome();
        Ok(self.state())
    }

    /// Steps until the run converges or exhausts its generation cap.
    pub fn run(mut self) -> Result<EvolutionResult<Pheno>> {
        while !self.state().is_terminal() {
            self.step()?;
        }
        self.result().ok_or_else_genetic(|| {
            GeneticError::Evolution("Evolution stopped before reaching a final state".to_string())
        })
    }

    /// The outcome of a finished run; `None` while the run is still going.
    pub fn result(&self) -> Option<EvolutionResult<Pheno>> {
        let (generation, status) = match &self.phase {
            Phase::Converged(generation) => (generation, EvolutionStatus::Converged),
            Phase::Exhausted(generation) => (generation, EvolutionStatus::Exhausted),
            Phase::Initializing | Phase::Evolving(_) => return None,
        };
        Some(EvolutionResult {
            pheno: generation.best().clone(),
            score: generation.best_score(),
            generation: generation.number(),
            status,
        })
    }

    fn settle(&self, generation: Generation<Pheno>) -> Phase<Pheno> {
        if generation.best_score() >= self.options.get_convergence_threshold() {
            Phase::Converged(generation)
        } else if self
            .options
            .get_max_generations()
            .is_some_and(|cap| generation.number() >= cap)
        {
            Phase::Exhausted(generation)
        } else {
            Phase::Evolving(generation)
        }
    }

    fn log_generation(&self, generation: &Generation<Pheno>) {
        match self.options.get_log_level() {
            LogLevel::None => {}
            LogLevel::Minimal => debug!(
                generation = generation.number(),
                best_score = generation.best_score(),
                "generation scored"
            ),
            LogLevel::Verbose => {
                debug!(
                    generation = generation.number(),
                    best_score = generation.best_score(),
                    "generation scored"
                );
                generation
                    .population()
                    .iter()
                    .zip(generation.fitness())
                    .for_each(|(pheno, score)| {
                        trace!(generation = generation.number(), score, ?pheno, "individual");
                    });
            }
        }
    }

    fn log_outcome(&self) {
        match &self.phase {
            Phase::Converged(generation) => info!(
                generation = generation.number(),
                score = generation.best_score(),
                "evolution converged"
            ),
            Phase::Exhausted(generation) => warn!(
                generation = generation.number(),
                score = generation.best_score(),
                threshold = self.options.get_convergence_threshold(),
                "generation cap reached without converging"
            ),
            Phase::Initializing | Phase::Evolving(_) => {}
        }
    }
}
