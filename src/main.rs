use std::process::ExitCode;

use genqueens::{
    evolution::{EvolutionOptions, EvolutionStatus},
    rng::RandomNumberGenerator,
    solver::queens_launcher,
    Result,
};
use tracing::error;

fn run() -> Result<()> {
    let options = EvolutionOptions::default();
    let mut rng = RandomNumberGenerator::new();
    let launcher = queens_launcher();

    println!("Initializing...");
    let evolution = launcher.initialize(&options, &mut rng)?;

    println!("Evolving...");
    let result = evolution.run()?;

    match result.status {
        EvolutionStatus::Converged => println!("Evolution ended."),
        EvolutionStatus::Exhausted => println!("Evolution stopped without converging."),
    }
    println!("Generation: {}\nFitness value:{:.6}", result.generation, result.score);
    println!("{}", result.pheno.format_row(3, 0));

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "solver failed");
            ExitCode::FAILURE
        }
    }
}
