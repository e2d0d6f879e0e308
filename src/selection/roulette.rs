use rand::distributions::{Distribution, WeightedIndex};
use tracing::debug;

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// How fitness values below zero are turned into sampling weights.
///
/// Fitness-proportional sampling needs non-negative weights, while a challenge is
/// free to score below zero. The policy is only consulted when at least one
/// negative value is present; otherwise raw fitness values are the weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NegativeFitnessPolicy {
    /// Shift every weight up by the magnitude of the lowest fitness, so the worst
    /// individual gets weight zero and relative gaps are kept.
    #[default]
    Shift,
    /// Treat negative fitness as zero weight.
    Clamp,
}

/// A selection strategy that picks parents through roulette wheel selection.
///
/// Roulette wheel selection (also known as fitness proportionate selection) selects
/// individuals with probability proportional to their fitness. Draws are
/// independent and with replacement, so the same individual can be drawn as
/// both parents.
///
/// # Examples
///
/// ```
/// use genqueens::rng::RandomNumberGenerator;
/// use genqueens::selection::RouletteWheelSelection;
///
/// let selection = RouletteWheelSelection::new();
/// let sampler = selection.sampler(&[0.5, 0.0, 0.25]).unwrap();
/// let mut rng = RandomNumberGenerator::from_seed(1);
///
/// for _ in 0..100 {
///     // Individual 1 has zero weight and is never drawn
///     assert_ne!(sampler.draw(&mut rng), 1);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouletteWheelSelection {
    negative_fitness: NegativeFitnessPolicy,
}

impl RouletteWheelSelection {
    /// Creates a new RouletteWheelSelection strategy shifting negative fitness.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new RouletteWheelSelection strategy with the given negative
    /// fitness policy.
    pub fn with_policy(negative_fitness: NegativeFitnessPolicy) -> Self {
        Self { negative_fitness }
    }

    pub fn policy(&self) -> NegativeFitnessPolicy {
        self.negative_fitness
    }

    /// Converts fitness values into non-negative sampling weights.
    ///
    /// # Errors
    ///
    /// Returns an error if the fitness vector is empty or holds a non-finite value.
    pub fn weights(&self, fitness: &[f64]) -> Result<Vec<f64>> {
        if fitness.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        if let Some(bad) = fitness.iter().find(|f| !f.is_finite()) {
            return Err(GeneticError::Selection(format!(
                "Roulette wheel selection requires finite fitness values, got {}",
                bad
            )));
        }

        let min = fitness.iter().copied().fold(f64::INFINITY, f64::min);
        if min >= 0.0 {
            return Ok(fitness.to_vec());
        }

        debug!(
            min,
            policy = ?self.negative_fitness,
            "adjusting negative fitness for roulette wheel"
        );

        let weights = match self.negative_fitness {
            NegativeFitnessPolicy::Shift => fitness.iter().map(|&f| f - min).collect(),
            NegativeFitnessPolicy::Clamp => fitness.iter().map(|&f| f.max(0.0)).collect(),
        };
        Ok(weights)
    }

    /// Builds the parent sampler for one generation's fitness vector.
    ///
    /// When every weight is zero, all individuals are equally likely.
    pub fn sampler(&self, fitness: &[f64]) -> Result<RouletteSampler> {
        let weights = self.weights(fitness)?;

        if weights.iter().all(|&w| w == 0.0) {
            debug!(
                population = weights.len(),
                "all roulette weights are zero, sampling uniformly"
            );
            return Ok(RouletteSampler {
                wheel: Wheel::Uniform(weights.len()),
            });
        }

        let index = WeightedIndex::new(&weights).map_err(|e| {
            GeneticError::Selection(format!("Failed to build roulette wheel: {}", e))
        })?;

        Ok(RouletteSampler {
            wheel: Wheel::Weighted(index),
        })
    }
}

#[derive(Debug, Clone)]
enum Wheel {
    Weighted(WeightedIndex<f64>),
    Uniform(usize),
}

/// A discrete distribution over population indices.
#[derive(Debug, Clone)]
pub struct RouletteSampler {
    wheel: Wheel,
}

impl RouletteSampler {
    /// Draws one population index.
    pub fn draw(&self, rng: &mut RandomNumberGenerator) -> usize {
        match &self.wheel {
            Wheel::Weighted(index) => index.sample(&mut rng.rng),
            Wheel::Uniform(len) => rng.gen_index(*len),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn histogram(sampler: &RouletteSampler, len: usize, draws: usize, seed: u64) -> Vec<usize> {
        let mut rng = RandomNumberGenerator::from_seed(seed);
        let mut counts = vec![0; len];
        for _ in 0..draws {
            counts[sampler.draw(&mut rng)] += 1;
        }
        counts
    }

    #[test]
    fn test_policy_defaults_to_shift() {
        assert_eq!(
            RouletteWheelSelection::new().policy(),
            NegativeFitnessPolicy::Shift
        );
        assert_eq!(
            RouletteWheelSelection::with_policy(NegativeFitnessPolicy::Clamp).policy(),
            NegativeFitnessPolicy::Clamp
        );
    }

    #[test]
    fn test_weights_keep_non_negative_fitness() {
        let selection = RouletteWheelSelection::new();
        let fitness = vec![0.5, 0.8, 0.0, 0.9];
        assert_eq!(selection.weights(&fitness).unwrap(), fitness);
    }

    #[test]
    fn test_weights_shift_negative_fitness() {
        let selection = RouletteWheelSelection::with_policy(NegativeFitnessPolicy::Shift);
        let weights = selection.weights(&[0.5, -0.5, 1.0]).unwrap();
        assert_eq!(weights, vec![1.0, 0.0, 1.5]);
    }

    #[test]
    fn test_weights_clamp_negative_fitness() {
        let selection = RouletteWheelSelection::with_policy(NegativeFitnessPolicy::Clamp);
        let weights = selection.weights(&[0.5, -0.5, 1.0]).unwrap();
        assert_eq!(weights, vec![0.5, 0.0, 1.0]);
    }

    #[test]
    fn test_weights_reject_empty_and_non_finite() {
        let selection = RouletteWheelSelection::new();
        assert!(matches!(
            selection.weights(&[]),
            Err(GeneticError::EmptyPopulation)
        ));
        assert!(matches!(
            selection.weights(&[0.5, f64::NAN]),
            Err(GeneticError::Selection(_))
        ));
        assert!(matches!(
            selection.sampler(&[f64::INFINITY]),
            Err(GeneticError::Selection(_))
        ));
    }

    #[test]
    fn test_sampler_is_proportional() {
        let selection = RouletteWheelSelection::new();
        let sampler = selection.sampler(&[1.0, 3.0]).unwrap();
        let counts = histogram(&sampler, 2, 20_000, 42);

        let ratio = counts[1] as f64 / counts[0] as f64;
        assert!((2.5..3.5).contains(&ratio), "ratio was {}", ratio);
    }

    #[test]
    fn test_sampler_never_draws_zero_weight() {
        let selection = RouletteWheelSelection::new();
        let sampler = selection.sampler(&[0.0, 0.7, 0.0, 0.2]).unwrap();
        let counts = histogram(&sampler, 4, 5_000, 7);

        assert_eq!(counts[0], 0);
        assert_eq!(counts[2], 0);
        assert!(counts[1] > counts[3]);
    }

    #[test]
    fn test_sampler_uniform_when_all_zero() {
        let selection = RouletteWheelSelection::new();
        let sampler = selection.sampler(&[0.0, 0.0, 0.0]).unwrap();
        let counts = histogram(&sampler, 3, 3_000, 9);

        assert!(counts.iter().all(|&c| c > 800));
    }

    #[test]
    fn test_sampler_uniform_when_all_equal_negative() {
        // Shifting equal values leaves every weight at zero
        let selection = RouletteWheelSelection::new();
        let sampler = selection.sampler(&[-0.5, -0.5]).unwrap();
        let counts = histogram(&sampler, 2, 2_000, 13);

        assert!(counts.iter().all(|&c| c > 800));
    }

    #[test]
    fn test_sampler_draws_with_replacement() {
        let selection = RouletteWheelSelection::new();
        let sampler = selection.sampler(&[1.0]).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(1);

        for _ in 0..10 {
            assert_eq!(sampler.draw(&mut rng), 0);
        }
    }
}
