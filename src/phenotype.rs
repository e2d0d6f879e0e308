//! # Phenotype Trait
//!
//! The `Phenotype` trait defines the interface for types that represent individuals
//! in the evolutionary loop: a fixed-length sequence of genes that can be drawn at
//! random, recombined at a single crossover point, and mutated at a single position.
//!
//! ## Example
//!
//! ```rust
//! use genqueens::phenotype::Phenotype;
//! use genqueens::rng::RandomNumberGenerator;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Bits(Vec<bool>);
//!
//! impl Phenotype for Bits {
//!     fn random(size: usize, rng: &mut RandomNumberGenerator) -> Self {
//!         Bits((0..size).map(|_| rng.gen_index(2) == 1).collect())
//!     }
//!
//!     fn size(&self) -> usize {
//!         self.0.len()
//!     }
//!
//!     fn crossover(&self, other: &Self, point: usize) -> Self {
//!         let point = point.min(self.size());
//!         let mut genes = self.0[..point].to_vec();
//!         genes.extend_from_slice(&other.0[point..]);
//!         Bits(genes)
//!     }
//!
//!     fn mutate(&mut self, rng: &mut RandomNumberGenerator) {
//!         let idx = rng.gen_index(self.size());
//!         self.0[idx] = rng.gen_index(2) == 1;
//!     }
//! }
//!
//! let father = Bits(vec![true; 4]);
//! let mother = Bits(vec![false; 4]);
//! assert_eq!(father.crossover(&mother, 1), Bits(vec![true, false, false, false]));
//! ```

use std::fmt::Debug;

use crate::rng::RandomNumberGenerator;

/// Trait for types that represent individuals in the evolutionary loop.
///
/// Types implementing this trait must also implement `Clone`, `Debug`, `Send`, and `Sync`.
pub trait Phenotype: Clone + Debug + Send + Sync {
    /// Draws a new individual of `size` genes, each independently and uniformly.
    fn random(size: usize, rng: &mut RandomNumberGenerator) -> Self;

    /// Number of genes carried by the individual.
    fn size(&self) -> usize;

    /// Builds a child from the genes `[0, point)` of `self` followed by the genes
    /// `[point, size)` of `other`.
    ///
    /// A `point` of zero yields a copy of `other` and a `point` equal to (or
    /// beyond) the size yields a copy of `self`. Neither parent is modified.
    fn crossover(&self, other: &Self, point: usize) -> Self;

    /// Overwrites one uniformly chosen gene with a uniformly drawn value.
    ///
    /// The drawn value may coincide with the one it replaces.
    fn mutate(&mut self, rng: &mut RandomNumberGenerator);
}
