use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use genqueens::{
    board::Board,
    evolution::{Challenge, EvolutionOptions},
    fitness::QueensChallenge,
    population::{generate_population, Generation, Population},
    rng::RandomNumberGenerator,
    solver::solve,
    strategy::{BreedStrategy, SinglePointStrategy},
};

fn bench_fitness_vector(c: &mut Criterion) {
    let mut rng = RandomNumberGenerator::from_seed(42);

    let mut group = c.benchmark_group("fitness_vector");
    for board_size in [8, 16, 32, 64].iter() {
        let population: Population<Board> =
            generate_population(100, *board_size, &mut rng).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(board_size),
            &population,
            |b, population| b.iter(|| QueensChallenge.score_all(black_box(population))),
        );
    }
    group.finish();
}

fn bench_breeding(c: &mut Criterion) {
    let mut rng = RandomNumberGenerator::from_seed(42);

    let mut group = c.benchmark_group("single_point_breeding");
    for population_size in [10, 100, 1000].iter() {
        let options = EvolutionOptions::new(*population_size, 8, 0.05);
        let population: Population<Board> =
            generate_population(*population_size, 8, &mut rng).unwrap();
        let generation = Generation::evaluate(0, population, &QueensChallenge).unwrap();

        group.bench_function(format!("breed_{}", population_size), |b| {
            b.iter(|| {
                let result = SinglePointStrategy.breed(
                    black_box(&generation),
                    black_box(&options),
                    black_box(&mut rng),
                );
                assert!(result.is_ok());
            })
        });
    }
    group.finish();
}

fn bench_solve(c: &mut Criterion) {
    let options = EvolutionOptions::builder()
        .population_size(50)
        .board_size(8)
        .mutation_rate(0.1)
        .max_generations(5_000)
        .build()
        .unwrap();

    c.bench_function("solve_eight_queens", |b| {
        let mut seed = 0;
        b.iter(|| {
            seed += 1;
            let mut rng = RandomNumberGenerator::from_seed(seed);
            solve(black_box(&options), &mut rng).unwrap()
        })
    });
}

criterion_group!(benches, bench_fitness_vector, bench_breeding, bench_solve);
criterion_main!(benches);
