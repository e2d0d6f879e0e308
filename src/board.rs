//! # Board
//!
//! A `Board` encodes one candidate placement: one queen per column, where the value
//! stored at column `i` is the row of that queen. Rows always lie in `[0, N)` for a
//! board of `N` columns.
//!
//! ## Example
//!
//! ```rust
//! use genqueens::board::Board;
//!
//! let board = Board::new(vec![1, 3, 0, 2]).unwrap();
//! assert_eq!(board.size(), 4);
//! assert_eq!(board.format_row(3, 0), "  1  3  0  2");
//! ```

use std::fmt;

use crate::{
    error::{GeneticError, Result},
    phenotype::Phenotype,
    rng::RandomNumberGenerator,
};

/// Row assignment of one queen per column.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<usize>", into = "Vec<usize>")
)]
pub struct Board {
    rows: Vec<usize>,
}

impl Board {
    /// Creates a board from explicit rows.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::OutOfBounds` if any row is not smaller than the
    /// number of columns.
    pub fn new(rows: Vec<usize>) -> Result<Self> {
        let size = rows.len();
        if let Some((column, row)) = rows.iter().enumerate().find(|(_, &row)| row >= size) {
            return Err(GeneticError::OutOfBounds(format!(
                "row {} in column {} exceeds board size {}",
                row, column, size
            )));
        }
        Ok(Self { rows })
    }

    /// The row of the queen in every column.
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// Number of columns, which is also the number of rows.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Formats the board as a single line of fixed-width numeric fields, one per
    /// column, each right-aligned to `width` with `decimals` fraction digits.
    pub fn format_row(&self, width: usize, decimals: usize) -> String {
        self.rows
            .iter()
            .map(|&row| format!("{:>width$.decimals$}", row as f64))
            .collect()
    }
}

impl TryFrom<Vec<usize>> for Board {
    type Error = GeneticError;

    fn try_from(rows: Vec<usize>) -> Result<Self> {
        Self::new(rows)
    }
}

impl From<Board> for Vec<usize> {
    fn from(board: Board) -> Self {
        board.rows
    }
}

impl Phenotype for Board {
    fn random(size: usize, rng: &mut RandomNumberGenerator) -> Self {
        Self {
            rows: (0..size).map(|_| rng.gen_index(size)).collect(),
        }
    }

    fn size(&self) -> usize {
        self.rows.len()
    }

    fn crossover(&self, other: &Self, point: usize) -> Self {
        let point = point.min(self.rows.len());
        let mut rows = Vec::with_capacity(other.rows.len());
        rows.extend_from_slice(&self.rows[..point]);
        rows.extend_from_slice(&other.rows[point..]);
        Self { rows }
    }

    fn mutate(&mut self, rng: &mut RandomNumberGenerator) {
        let size = self.rows.len();
        if size == 0 {
            return;
        }
        let column = rng.gen_index(size);
        self.rows[column] = rng.gen_index(size);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_row(3, 0))
    }
}
