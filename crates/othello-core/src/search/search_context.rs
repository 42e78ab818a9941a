//! Per-search state shared by every node of the tree.

use crate::board::Board;
use crate::disc::Disc;
use crate::eval::CutoffEval;
use crate::search::options::SearchOptions;
use crate::square::Square;
use crate::types::{Depth, Score};

/// State threaded through one invocation of the search.
pub struct SearchContext<'a> {
    /// The side to move at the root. Every score is from its point of view.
    pub root_side: Disc,
    /// Number of nodes visited so far.
    pub n_nodes: u64,
    options: &'a SearchOptions,
}

impl<'a> SearchContext<'a> {
    /// Creates a context for searching `board` with `options`.
    pub fn new(board: &Board, options: &'a SearchOptions) -> Self {
        SearchContext {
            root_side: board.side_to_move(),
            n_nodes: 0,
            options,
        }
    }

    #[inline]
    pub fn limit_depth(&self) -> Depth {
        self.options.limit_depth
    }

    #[inline]
    pub fn pruning(&self) -> bool {
        self.options.pruning
    }

    /// Score of a position in which the side to move has no legal move.
    #[inline]
    pub fn terminal_value(&self, board: &Board) -> Score {
        self.options.weights.board_value(board, self.root_side)
    }

    /// Score at the search horizon.
    ///
    /// `mover` placed `sq`, producing `next`.
    #[inline]
    pub fn cutoff_value(&self, next: &Board, sq: Square, mover: Disc) -> Score {
        match self.options.cutoff {
            CutoffEval::Square => self.options.weights.square_value(sq, mover, self.root_side),
            CutoffEval::Board => self.options.weights.board_value(next, self.root_side),
        }
    }
}
