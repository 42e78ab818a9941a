//! Legal-move generation in row-major scan order.

use std::slice;

use arrayvec::ArrayVec;

use crate::constants::{BOARD_SQUARES, MAX_MOVES};
use crate::disc::Disc;
use crate::flip;
use crate::square::Square;

/// Ordered list of legal moves for one side.
///
/// Moves are kept in row-major order (A1, B1, ..., H8). The search relies on
/// this order to break ties: the earliest move with the best score wins.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct MoveList {
    moves: ArrayVec<Square, MAX_MOVES>,
}

impl MoveList {
    /// Generates all legal moves for `mover` by testing every empty cell.
    ///
    /// # Arguments
    ///
    /// * `cells` - Row-major board cells
    /// * `mover` - The side whose moves are generated
    pub fn generate(cells: &[Disc; BOARD_SQUARES], mover: Disc) -> MoveList {
        let moves = Square::iter()
            .filter(|&sq| flip::is_legal(cells, sq, mover))
            .collect();
        MoveList { moves }
    }

    /// Builds a move list from externally supplied squares, keeping their order.
    ///
    /// # Returns
    ///
    /// `None` if more than `MAX_MOVES` squares are supplied.
    pub fn from_squares<I>(squares: I) -> Option<MoveList>
    where
        I: IntoIterator<Item = Square>,
    {
        let mut moves = ArrayVec::new();
        for sq in squares {
            moves.try_push(sq).ok()?;
        }
        Some(MoveList { moves })
    }

    /// Returns the number of moves.
    #[inline]
    pub fn count(&self) -> usize {
        self.moves.len()
    }

    /// Returns `true` if there are no moves.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns `true` if `sq` is in the list.
    #[inline]
    pub fn contains(&self, sq: Square) -> bool {
        self.moves.contains(&sq)
    }

    /// Returns the first move in scan order.
    #[inline]
    pub fn first(&self) -> Option<Square> {
        self.moves.first().copied()
    }

    /// Returns the moves as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Square] {
        &self.moves
    }

    /// Returns an iterator over the moves.
    #[inline]
    pub fn iter(&self) -> std::iter::Copied<slice::Iter<'_, Square>> {
        self.moves.iter().copied()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = Square;
    type IntoIter = std::iter::Copied<slice::Iter<'a, Square>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn test_generate_initial_position() {
        let board = Board::new();
        let moves = MoveList::generate(board.cells(), Disc::Black);
        assert_eq!(
            moves.as_slice(),
            &[Square::D3, Square::C4, Square::F5, Square::E6]
        );
    }

    #[test]
    fn test_generate_is_row_major() {
        let board = Board::new();
        let moves = MoveList::generate(board.cells(), Disc::White);
        let indices: Vec<usize> = moves.iter().map(Square::index).collect();
        let mut sorted = indices.clone();
        sorted.sort_unstable();
        assert_eq!(indices, sorted);
        assert_eq!(moves.count(), 4);
    }

    #[test]
    fn test_from_squares_keeps_order() {
        let moves = MoveList::from_squares([Square::H8, Square::A1]).unwrap();
        assert_eq!(moves.first(), Some(Square::H8));
        assert!(moves.contains(Square::A1));
        assert!(!moves.contains(Square::B2));
    }

    #[test]
    fn test_from_squares_rejects_overflow() {
        let too_many = Square::iter().chain(std::iter::once(Square::A1));
        assert!(MoveList::from_squares(too_many).is_none());
    }

    #[test]
    fn test_empty() {
        let moves = MoveList::default();
        assert!(moves.is_empty());
        assert_eq!(moves.count(), 0);
        assert_eq!(moves.first(), None);
    }
}
