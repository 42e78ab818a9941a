//! Depth-limited minimax with alpha-beta pruning.
//!
//! Nodes are identified by the move that leads to them: evaluating a node
//! plays `sq` on the parent board and scores the result. Scores are always
//! from the root mover's point of view, so the maximizing side is the root
//! side and the minimizing side is its opponent.

use tracing::{debug, trace};

use crate::board::Board;
use crate::constants::SCORE_INF;
use crate::search::SearchError;
use crate::search::root_move::RootMoves;
use crate::search::search_context::SearchContext;
use crate::search::search_result::SearchResult;
use crate::square::Square;
use crate::types::{Depth, Score};

/// Searches every legal move of `board` and returns the best one.
///
/// Each candidate is searched with a full window, so its score is exact and
/// does not depend on the candidates searched before it.
///
/// # Errors
///
/// Returns [`SearchError::NoLegalMoves`] if the side to move cannot play.
pub fn search_root(ctx: &mut SearchContext, board: &Board) -> Result<SearchResult, SearchError> {
    let mut root_moves = RootMoves::new(board);
    if root_moves.count() == 0 {
        return Err(SearchError::NoLegalMoves(board.side_to_move()));
    }

    for (idx, sq) in board.legal_moves().iter().enumerate() {
        let score = minimax(ctx, board, sq, 1, false, -SCORE_INF, SCORE_INF);
        debug!(mv = %sq, score, "root move searched");
        root_moves.update(idx, score);
    }

    let best = root_moves
        .get_best()
        .ok_or(SearchError::NoLegalMoves(board.side_to_move()))?;
    Ok(SearchResult {
        best_move: best.sq,
        score: best.score.unwrap_or(-SCORE_INF),
        n_nodes: ctx.n_nodes,
        depth: ctx.limit_depth(),
        root_moves: root_moves.as_slice().to_vec(),
    })
}

/// Scores the position reached by playing `sq` on `board`.
///
/// # Arguments
///
/// * `ctx` - Search context
/// * `board` - Position before `sq` is played
/// * `sq` - Move leading to the node; must be legal on `board`
/// * `depth` - Ply of the node, the root candidates being ply 1
/// * `maximizing` - Whether the root side moves next at this node
/// * `alpha` - Lower bound of the window
/// * `beta` - Upper bound of the window
///
/// # Panics
///
/// Panics if `sq` is not a legal move on `board`.
pub fn minimax(
    ctx: &mut SearchContext,
    board: &Board,
    sq: Square,
    depth: Depth,
    maximizing: bool,
    mut alpha: Score,
    mut beta: Score,
) -> Score {
    ctx.n_nodes += 1;
    let next = board.play(sq);

    // A side without moves ends the line; passes are not searched.
    if next.is_terminal() {
        let score = ctx.terminal_value(&next);
        trace!(mv = %sq, depth, score, "terminal");
        return score;
    }

    if depth >= ctx.limit_depth() {
        return ctx.cutoff_value(&next, sq, board.side_to_move());
    }

    debug_assert_eq!(maximizing, next.side_to_move() == ctx.root_side);

    if maximizing {
        let mut best = -SCORE_INF;
        for child in next.legal_moves() {
            let score = minimax(ctx, &next, child, depth + 1, false, alpha, beta);
            best = best.max(score);
            alpha = alpha.max(best);
            if ctx.pruning() && alpha >= beta {
                break;
            }
        }
        best
    } else {
        let mut best = SCORE_INF;
        for child in next.legal_moves() {
            let score = minimax(ctx, &next, child, depth + 1, true, alpha, beta);
            best = best.min(score);
            beta = beta.min(best);
            if ctx.pruning() && alpha >= beta {
                break;
            }
        }
        best
    }
}
