pub mod roulette;

pub use roulette::{NegativeFitnessPolicy, RouletteSampler, RouletteWheelSelection};
