//! Root move management.

use crate::board::Board;
use crate::square::Square;
use crate::types::Score;

/// A root candidate together with its backed-up score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RootMove {
    /// The move square.
    pub sq: Square,
    /// Score from the root mover's point of view, `None` until searched.
    pub score: Option<Score>,
}

impl RootMove {
    /// Creates an unsearched root move.
    pub fn new(sq: Square) -> Self {
        Self { sq, score: None }
    }
}

/// The candidate moves of the root position, in the order they are searched.
#[derive(Clone, Debug, Default)]
pub struct RootMoves {
    moves: Vec<RootMove>,
}

impl RootMoves {
    /// Creates the root candidates from the legal moves of `board`.
    pub fn new(board: &Board) -> Self {
        Self {
            moves: board.legal_moves().iter().map(RootMove::new).collect(),
        }
    }

    /// Records the search score of the candidate at `idx`.
    pub fn update(&mut self, idx: usize, score: Score) {
        self.moves[idx].score = Some(score);
    }

    /// Returns the best searched move.
    ///
    /// Ties go to the earliest candidate, so the result follows the
    /// row-major scan order of the legal moves.
    pub fn get_best(&self) -> Option<RootMove> {
        let mut best: Option<(RootMove, Score)> = None;
        for rm in &self.moves {
            let Some(score) = rm.score else {
                continue;
            };
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((*rm, score));
            }
        }
        best.map(|(rm, _)| rm)
    }

    /// Returns the number of root moves.
    pub fn count(&self) -> usize {
        self.moves.len()
    }

    /// Returns the root moves in search order.
    pub fn as_slice(&self) -> &[RootMove] {
        &self.moves
    }
}
