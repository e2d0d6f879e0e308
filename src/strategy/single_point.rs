use super::BreedStrategy;
use crate::{
    error::{GeneticError, Result},
    evolution::options::EvolutionOptions,
    phenotype::Phenotype,
    population::{Generation, Population},
    rng::RandomNumberGenerator,
    selection::RouletteWheelSelection,
};

/// # SinglePointStrategy
///
/// Fills every slot of the next population with one child: two parents are drawn
/// by roulette wheel (possibly the same individual twice), joined at a uniformly
/// drawn crossover point in `[0, N)`, and the child is mutated at a single
/// position with probability `mutation_rate`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SinglePointStrategy;

impl SinglePointStrategy {
    pub fn new() -> Self {
        Self
    }
}

/// Builds one child from `father[..point]` and `mother[point..]`, mutating it with
/// probability `mutation_rate`.
pub fn breed_child<P: Phenotype>(
    father: &P,
    mother: &P,
    point: usize,
    mutation_rate: f64,
    rng: &mut RandomNumberGenerator,
) -> P {
    let mut child = father.crossover(mother, point);
    if rng.gen_probability() < mutation_rate {
        child.mutate(rng);
    }
    child
}

impl<Pheno> BreedStrategy<Pheno> for SinglePointStrategy
where
    Pheno: Phenotype,
{
    fn breed(
        &self,
        generation: &Generation<Pheno>,
        evol_options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Population<Pheno>> {
        let parents = generation.population();
        let size = parents.individual_size();
        if size == 0 {
            return Err(GeneticError::Breeding(
                "Cannot breed individuals without genes".to_string(),
            ));
        }

        let sampler = RouletteWheelSelection::with_policy(evol_options.get_negative_fitness())
            .sampler(generation.fitness())
            .map_err(|e| {
                GeneticError::Breeding(format!(
                    "Failed to select parents in generation {}: {}",
                    generation.number(),
                    e
                ))
            })?;

        let children = (0..parents.len())
            .map(|_| {
                let father = &parents[sampler.draw(rng)];
                let mother = &parents[sampler.draw(rng)];
                let point = rng.gen_index(size);
                breed_child(father, mother, point, evol_options.get_mutation_rate(), rng)
            })
            .collect();

        Population::new(children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{board::Board, fitness::QueensChallenge};

    /// Population where individual `i` holds `i` in every column, so a child
    /// reveals which parents and crossover point produced it.
    fn uniform_rows_generation(population_size: usize, board_size: usize) -> Generation<Board> {
        let boards = (0..population_size)
            .map(|i| Board::new(vec![i; board_size]).unwrap())
            .collect();
        Generation::evaluate(0, Population::new(boards).unwrap(), &QueensChallenge).unwrap()
    }

    /// Fewest positions where `rows` breaks an `a..a b..b` pattern, the shape of
    /// an unmutated child of two uniform-row parents.
    fn deviations(rows: &[usize]) -> usize {
        let mut fewest = rows.len();
        for &head in rows {
            for &tail in rows {
                for k in 0..=rows.len() {
                    let misses = rows
                        .iter()
                        .enumerate()
                        .filter(|&(i, &r)| r != if i < k { head } else { tail })
                        .count();
                    fewest = fewest.min(misses);
                }
            }
        }
        fewest
    }

    #[test]
    fn test_breed_child_without_mutation() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let father = Board::new(vec![0, 1, 2, 3, 4, 5]).unwrap();
        let mother = Board::new(vec![5, 4, 3, 2, 1, 0]).unwrap();

        for k in 0..=6 {
            let child = breed_child(&father, &mother, k, 0.0, &mut rng);
            assert_eq!(&child.rows()[..k], &father.rows()[..k]);
            assert_eq!(&child.rows()[k..], &mother.rows()[k..]);
        }

        assert_eq!(breed_child(&father, &mother, 0, 0.0, &mut rng), mother);
        assert_eq!(breed_child(&father, &mother, 6, 0.0, &mut rng), father);
    }

    #[test]
    fn test_breed_child_always_mutates_at_full_rate() {
        let mut rng = RandomNumberGenerator::from_seed(2);
        let father = Board::new(vec![0, 1, 2, 3, 4, 5]).unwrap();
        let mother = Board::new(vec![5, 4, 3, 2, 1, 0]).unwrap();

        for trial in 0..500 {
            let k = trial % 7;
            let mut replay = rng.clone();
            replay.gen_probability();
            let column = replay.gen_index(6);
            let row = replay.gen_index(6);

            let mut expected = father.crossover(&mother, k).rows().to_vec();
            expected[column] = row;

            let child = breed_child(&father, &mother, k, 1.0, &mut rng);
            assert_eq!(child.rows(), expected.as_slice());
        }
    }

    #[test]
    fn test_breed_keeps_population_shape() {
        let mut rng = RandomNumberGenerator::from_seed(3);
        let generation = uniform_rows_generation(12, 12);
        let options = EvolutionOptions::new(12, 12, 0.5);

        let next = SinglePointStrategy.breed(&generation, &options, &mut rng).unwrap();
        assert_eq!(next.len(), 12);
        for board in &next {
            assert_eq!(board.size(), 12);
            assert!(board.rows().iter().all(|&row| row < 12));
        }
    }

    #[test]
    fn test_breed_without_mutation_only_recombines() {
        let mut rng = RandomNumberGenerator::from_seed(4);
        let generation = uniform_rows_generation(10, 10);
        let options = EvolutionOptions::new(10, 10, 0.0);

        for _ in 0..50 {
            let next = SinglePointStrategy.breed(&generation, &options, &mut rng).unwrap();
            for board in &next {
                assert_eq!(deviations(board.rows()), 0, "{:?}", board);
            }
        }
    }

    #[test]
    fn test_breed_with_full_mutation_alters_one_position() {
        let mut rng = RandomNumberGenerator::from_seed(5);
        let generation = uniform_rows_generation(10, 10);
        let options = EvolutionOptions::new(10, 10, 1.0);

        let mut altered = 0;
        for _ in 0..100 {
            let next = SinglePointStrategy.breed(&generation, &options, &mut rng).unwrap();
            for board in &next {
                let misses = deviations(board.rows());
                assert!(misses <= 1, "{:?}", board);
                altered += misses;
            }
        }

        // Rewriting a row with its own value, or next to the split, can go unseen
        assert!(altered > 700, "altered {} of 1000", altered);
    }

    /// First column whose row differs from column 0, or `None` for a uniform board.
    fn split_point(rows: &[usize]) -> Option<usize> {
        rows.iter().position(|&row| row != rows[0])
    }

    #[test]
    fn test_breed_draws_every_crossover_point() {
        let mut rng = RandomNumberGenerator::from_seed(7);
        let generation = uniform_rows_generation(5, 5);
        let options = EvolutionOptions::new(5, 5, 0.0);

        let mut splits = [0usize; 5];
        let mut uniform = 0;
        for _ in 0..400 {
            let next = SinglePointStrategy.breed(&generation, &options, &mut rng).unwrap();
            for board in &next {
                match split_point(board.rows()) {
                    Some(k) => splits[k] += 1,
                    None => uniform += 1,
                }
            }
        }

        assert!(splits[1..].iter().all(|&count| count > 0), "{:?}", splits);

        // Equal parents give 1/5 of children a uniform board. Point 0 copies the
        // mother, which lifts the share to 1/5 + 4/5 * 1/5 = 9/25.
        assert!(uniform > 560, "{} uniform children of 2000", uniform);
    }

    #[test]
    fn test_breed_leaves_parents_untouched() {
        let mut rng = RandomNumberGenerator::from_seed(6);
        let generation = uniform_rows_generation(8, 8);
        let snapshot = generation.population().clone();
        let options = EvolutionOptions::new(8, 8, 1.0);

        SinglePointStrategy.breed(&generation, &options, &mut rng).unwrap();
        assert_eq!(generation.population(), &snapshot);
    }
}
