//! Fixed-depth move selection.

pub mod minimax;
pub mod options;
pub mod root_move;
pub mod search_context;
pub mod search_result;

use tracing::info;

use crate::board::Board;
use crate::disc::Disc;
use crate::search::options::SearchOptions;
use crate::search::search_context::SearchContext;
use crate::search::search_result::SearchResult;
use crate::square::Square;
use crate::types::Depth;

/// Errors returned by the search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The side to move has no legal move, so there is nothing to choose.
    #[error("no legal moves for {0:?}")]
    NoLegalMoves(Disc),
    /// The search horizon must be at least one ply.
    #[error("invalid search depth {0}: must be at least 1")]
    InvalidDepth(Depth),
}

/// Move search with a fixed configuration.
pub struct Search {
    options: SearchOptions,
}

impl Search {
    /// Creates a new search instance.
    pub fn new(options: SearchOptions) -> Search {
        Search { options }
    }

    /// Selects the best move for the side to move on `board`.
    ///
    /// Every legal move is searched to the configured horizon. The move with
    /// the highest score wins; among equal scores the first legal move in
    /// scan order is kept.
    ///
    /// # Errors
    ///
    /// * [`SearchError::InvalidDepth`] if the horizon is 0
    /// * [`SearchError::NoLegalMoves`] if the side to move cannot play
    pub fn run(&self, board: &Board) -> Result<SearchResult, SearchError> {
        if self.options.limit_depth == 0 {
            return Err(SearchError::InvalidDepth(self.options.limit_depth));
        }

        let mut ctx = SearchContext::new(board, &self.options);
        let result = minimax::search_root(&mut ctx, board)?;
        info!(
            best = %result.best_move,
            score = result.score,
            nodes = result.n_nodes,
            depth = result.depth,
            cutoff = %self.options.cutoff,
            "search finished"
        );
        Ok(result)
    }
}

/// Selects the move to play on `board` with `options`.
///
/// Shorthand for [`Search::run`] when only the move is needed.
pub fn select_best_move(board: &Board, options: &SearchOptions) -> Result<Square, SearchError> {
    Search::new(options.clone())
        .run(board)
        .map(|result| result.best_move)
}
