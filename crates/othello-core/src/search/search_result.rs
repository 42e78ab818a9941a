//! Outcome of a search.

use crate::search::root_move::RootMove;
use crate::square::Square;
use crate::types::{Depth, Score};

/// Result of searching a root position.
#[derive(Clone, Debug)]
pub struct SearchResult {
    /// The selected move.
    pub best_move: Square,
    /// Score of the selected move from the root mover's point of view.
    pub score: Score,
    /// Number of nodes visited.
    pub n_nodes: u64,
    /// Horizon the search ran to.
    pub depth: Depth,
    /// Every root candidate with its score, in search order.
    pub root_moves: Vec<RootMove>,
}
