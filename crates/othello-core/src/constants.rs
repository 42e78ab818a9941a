//! Global constants

use crate::types::{Depth, Score};

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 8;

/// Number of squares on the Othello board.
pub const BOARD_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// Upper bound on the number of legal moves in any position.
///
/// Real positions never exceed 33, but externally supplied move lists are only
/// bounded by the number of squares.
pub const MAX_MOVES: usize = BOARD_SQUARES;

/// Infinity score for search algorithms.
///
/// Weight tables are rejected unless the sum of their absolute values stays
/// strictly below this value, so no evaluation can ever reach it.
pub const SCORE_INF: Score = 1_000_000;

/// Default search horizon in plies.
pub const DEFAULT_LIMIT_DEPTH: Depth = 5;
