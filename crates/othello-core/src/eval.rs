//! Static positional evaluation.
//!
//! Every evaluation here is expressed from a fixed perspective (the side that
//! was to move at the search root), so scores compare consistently across the
//! whole tree regardless of which side moves at a leaf.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

use crate::board::Board;
use crate::constants::{BOARD_SIZE, BOARD_SQUARES, SCORE_INF};
use crate::disc::Disc;
use crate::square::Square;
use crate::types::Score;

/// Errors raised while building a [`WeightTable`].
#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    /// The weight file could not be read.
    #[error("failed to read weight table: {0}")]
    Io(#[from] io::Error),
    /// A token is not an integer.
    #[error("invalid weight {token:?} at position {index}")]
    Parse { index: usize, token: String },
    /// The table does not contain exactly 64 weights.
    #[error("expected 64 weights, got {0}")]
    WrongCount(usize),
    /// The weights could reach the search sentinel.
    #[error("sum of absolute weights {0} must stay below 1000000")]
    WeightsTooLarge(i64),
}

/// Tuned weights: corners are worth the most, the diagonal neighbours of the
/// corners (X-squares) the least.
#[rustfmt::skip]
const DEFAULT_WEIGHTS: [[Score; BOARD_SIZE]; BOARD_SIZE] = [
    [500, -25, 10,  5,  5, 10, -25, 500],
    [-25, -50, -5,  1,  1, -5, -50, -25],
    [ 10,  -5,  2,  2,  2,  2,  -5,  10],
    [  5,   1,  2, -3, -3,  2,   1,   5],
    [  5,   1,  2, -3, -3,  2,   1,   5],
    [ 10,  -5,  2,  2,  2,  2,  -5,  10],
    [-25, -50, -5,  1,  1, -5, -50, -25],
    [500, -25, 10,  5,  5, 10, -25, 500],
];

/// An 8x8 matrix of positional weights, indexed by `(row, col)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeightTable {
    weights: [[Score; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for WeightTable {
    fn default() -> Self {
        WeightTable {
            weights: DEFAULT_WEIGHTS,
        }
    }
}

impl WeightTable {
    /// Creates a weight table from rows of weights.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::WeightsTooLarge`] if the sum of absolute weights
    /// is not strictly below [`SCORE_INF`]. A full-board sum could otherwise
    /// collide with the search bounds.
    pub fn new(weights: [[Score; BOARD_SIZE]; BOARD_SIZE]) -> Result<WeightTable, EvalError> {
        let magnitude: i64 = weights
            .iter()
            .flatten()
            .map(|&w| i64::from(w).abs())
            .sum();
        if magnitude >= i64::from(SCORE_INF) {
            return Err(EvalError::WeightsTooLarge(magnitude));
        }
        Ok(WeightTable { weights })
    }

    /// Parses 64 whitespace-separated integers in row-major order.
    pub fn from_text(text: &str) -> Result<WeightTable, EvalError> {
        let values = text
            .split_whitespace()
            .enumerate()
            .map(|(index, token)| {
                token.parse::<Score>().map_err(|_| EvalError::Parse {
                    index,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<Score>, EvalError>>()?;
        if values.len() != BOARD_SQUARES {
            return Err(EvalError::WrongCount(values.len()));
        }

        let mut weights = [[0; BOARD_SIZE]; BOARD_SIZE];
        for (row, chunk) in weights.iter_mut().zip(values.chunks_exact(BOARD_SIZE)) {
            row.copy_from_slice(chunk);
        }
        WeightTable::new(weights)
    }

    /// Reads a weight table file in the [`WeightTable::from_text`] format.
    pub fn from_file(path: &Path) -> Result<WeightTable, EvalError> {
        let text = fs::read_to_string(path)?;
        WeightTable::from_text(&text)
    }

    /// Returns the weight of a square.
    #[inline]
    pub fn weight(&self, sq: Square) -> Score {
        self.weights[sq.row()][sq.col()]
    }

    /// Full-board weighted sum: weights of `perspective`'s discs minus weights
    /// of the opponent's discs. Empty cells count for nothing.
    pub fn board_value(&self, board: &Board, perspective: Disc) -> Score {
        debug_assert!(perspective != Disc::Empty);
        let opponent = perspective.opposite();
        Square::iter()
            .map(|sq| match board.get_disc_at(sq) {
                disc if disc == perspective => self.weight(sq),
                disc if disc == opponent => -self.weight(sq),
                _ => 0,
            })
            .sum()
    }

    /// Weight of a single placement: positive if `mover` is `perspective`,
    /// negative otherwise.
    #[inline]
    pub fn square_value(&self, sq: Square, mover: Disc, perspective: Disc) -> Score {
        if mover == perspective {
            self.weight(sq)
        } else {
            -self.weight(sq)
        }
    }
}

/// Evaluation applied when the search reaches its depth limit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CutoffEval {
    /// Weight of the last placed cell only.
    Square,
    /// Weighted sum over the whole resulting board.
    #[default]
    Board,
}

impl FromStr for CutoffEval {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "square" => Ok(CutoffEval::Square),
            "board" => Ok(CutoffEval::Board),
            _ => Err(format!("unknown cutoff evaluation '{s}': expected 'square' or 'board'")),
        }
    }
}

impl fmt::Display for CutoffEval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CutoffEval::Square => write!(f, "square"),
            CutoffEval::Board => write!(f, "board"),
        }
    }
}
