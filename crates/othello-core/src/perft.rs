//! Move generation verification by leaf counting.

use crate::board::Board;

/// Executes a perft run starting from the standard initial position.
///
/// # Arguments
///
/// * `depth` - Number of plies to expand from the initial position. A depth of
///   `1` counts the immediate legal moves; larger values walk the tree
///   recursively.
///
/// # Returns
///
/// The number of leaves at `depth`. A forced pass does not consume a ply, and
/// a finished game counts as a single leaf.
pub fn perft_root(depth: u32) -> u64 {
    perft(&Board::new(), depth)
}

/// Counts the leaves of the move tree below `board`.
///
/// A depth of 0 counts `board` itself as the only leaf.
pub fn perft(board: &Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    if board.is_terminal() {
        let mut next = board.clone();
        next.pass();
        return if next.is_terminal() {
            1
        } else {
            perft(&next, depth)
        };
    }

    if depth <= 1 {
        return board.legal_moves().count() as u64;
    }

    board
        .legal_moves()
        .iter()
        .map(|sq| perft(&board.play(sq), depth - 1))
        .sum()
}
