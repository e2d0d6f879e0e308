//! # Queens Fitness
//!
//! Fitness of a board is the share of queen pairs that do not attack each other,
//! rescaled so that an attack-free board scores exactly `1.0`:
//!
//! ```text
//! fitness = 1 - 2 * A / ((N - 1) * N)
//! ```
//!
//! where `A` is the number of attacking pairs. The score is not clamped; a pair
//! counts once however many lines it shares, so in practice it bottoms out at
//! zero when every pair attacks.
//!
//! ## Example
//!
//! ```rust
//! use genqueens::board::Board;
//! use genqueens::evolution::Challenge;
//! use genqueens::fitness::{attacking_pairs, QueensChallenge};
//!
//! let solved = Board::new(vec![1, 3, 0, 2]).unwrap();
//! assert_eq!(attacking_pairs(&solved), 0);
//! assert_eq!(QueensChallenge.score(&solved), 1.0);
//! ```

use crate::{board::Board, evolution::Challenge};

/// Counts the unordered pairs of queens that share a row or a diagonal.
pub fn attacking_pairs(board: &Board) -> usize {
    let rows = board.rows();
    let mut attacks = 0;
    for (i, &queen) in rows.iter().enumerate() {
        for (j, &other) in rows.iter().enumerate().skip(i + 1) {
            // Same row, or the row distance matches the column distance.
            if queen == other || queen.abs_diff(other) == j - i {
                attacks += 1;
            }
        }
    }
    attacks
}

/// Normalized fitness of a board in `(-inf, 1]`.
///
/// Boards with fewer than two columns have no pairs and score `1.0`.
pub fn fitness(board: &Board) -> f64 {
    let n = board.size();
    if n < 2 {
        return 1.0;
    }
    let attacks = attacking_pairs(board) as f64;
    1.0 - attacks * 2.0 / (n - 1) as f64 / n as f64
}

/// The N-Queens challenge: scores a board by its attack-free share of pairs.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueensChallenge;

impl Challenge<Board> for QueensChallenge {
    fn score(&self, phenotype: &Board) -> f64 {
        fitness(phenotype)
    }
}
