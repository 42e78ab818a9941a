//! Othello board representation.

use std::fmt;

use crate::constants::{BOARD_SIZE, BOARD_SQUARES};
use crate::disc::Disc;
use crate::flip;
use crate::move_list::MoveList;
use crate::square::Square;

/// Errors raised while building or mutating a [`Board`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The grid does not contain exactly 64 cells.
    #[error("expected 64 cells, got {0}")]
    WrongCellCount(usize),
    /// A cell value outside {0, 1, 2}.
    #[error("invalid cell value {value} at row {row}, column {col}")]
    InvalidCell { row: usize, col: usize, value: u8 },
    /// The side to move is not 1 (black) or 2 (white).
    #[error("invalid side to move {0}: must be 1 or 2")]
    InvalidSideToMove(u8),
    /// The move does not capture anything or targets an occupied cell.
    #[error("illegal move: {0}")]
    IllegalMove(Square),
}

/// Number of cells in each state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DiscCounts {
    pub empty: u32,
    pub black: u32,
    pub white: u32,
}

impl DiscCounts {
    /// Counts the cells of a grid.
    fn from_cells(cells: &[Disc; BOARD_SQUARES]) -> DiscCounts {
        cells.iter().fold(DiscCounts::default(), |mut counts, disc| {
            *counts.get_mut(*disc) += 1;
            counts
        })
    }

    /// Returns the number of cells holding `disc`.
    #[inline]
    pub fn get(&self, disc: Disc) -> u32 {
        match disc {
            Disc::Empty => self.empty,
            Disc::Black => self.black,
            Disc::White => self.white,
        }
    }

    #[inline]
    fn get_mut(&mut self, disc: Disc) -> &mut u32 {
        match disc {
            Disc::Empty => &mut self.empty,
            Disc::Black => &mut self.black,
            Disc::White => &mut self.white,
        }
    }

    /// Returns the total number of cells; always 64 for a consistent board.
    #[inline]
    pub fn total(&self) -> u32 {
        self.empty + self.black + self.white
    }
}

/// An 8x8 Othello position together with the side to move.
///
/// The board caches the disc counts and the legal moves of the side to move,
/// and keeps both consistent with the grid after every mutation. It is a plain
/// value: cloning it yields a fully independent position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Row-major cells.
    cells: [Disc; BOARD_SQUARES],
    /// The side that places the next disc.
    side_to_move: Disc,
    /// Cell counts per state.
    counts: DiscCounts,
    /// Legal moves for `side_to_move`, in scan order.
    legal_moves: MoveList,
}

impl Default for Board {
    /// Creates a board with the standard Othello starting position.
    ///
    /// The initial position has:
    /// - Black discs on E4 and D5
    /// - White discs on D4 and E5
    /// - Black to move
    fn default() -> Self {
        let mut cells = [Disc::Empty; BOARD_SQUARES];
        cells[Square::D4.index()] = Disc::White;
        cells[Square::E4.index()] = Disc::Black;
        cells[Square::D5.index()] = Disc::Black;
        cells[Square::E5.index()] = Disc::White;
        Board::with_cells(cells, Disc::Black)
    }
}

impl Board {
    /// Creates a new `Board` with the initial Othello setup.
    pub fn new() -> Board {
        Default::default()
    }

    /// Builds a board from cells, recomputing counts and legal moves.
    fn with_cells(cells: [Disc; BOARD_SQUARES], side_to_move: Disc) -> Board {
        debug_assert!(side_to_move != Disc::Empty);
        Board {
            cells,
            side_to_move,
            counts: DiscCounts::from_cells(&cells),
            legal_moves: MoveList::generate(&cells, side_to_move),
        }
    }

    /// Creates a `Board` from raw descriptor values.
    ///
    /// # Arguments
    ///
    /// * `grid` - 64 cell values in row-major order, each 0 (empty), 1 (black) or 2 (white).
    /// * `side_to_move` - 1 for black, 2 for white.
    /// * `legal_moves` - The legal moves of the side to move, if already known.
    ///   They are kept in the given order. `None` recomputes them from the grid.
    ///
    /// # Errors
    ///
    /// Returns a [`BoardError`] if the grid has the wrong size, holds a value
    /// outside {0, 1, 2}, the side is not 1 or 2, or a supplied move is not
    /// legal on the grid.
    pub fn from_grid(
        grid: &[u8],
        side_to_move: u8,
        legal_moves: Option<MoveList>,
    ) -> Result<Board, BoardError> {
        if grid.len() != BOARD_SQUARES {
            return Err(BoardError::WrongCellCount(grid.len()));
        }

        let side_to_move = match Disc::from_u8(side_to_move) {
            Some(disc) if disc != Disc::Empty => disc,
            _ => return Err(BoardError::InvalidSideToMove(side_to_move)),
        };

        let mut cells = [Disc::Empty; BOARD_SQUARES];
        for (i, &value) in grid.iter().enumerate() {
            cells[i] = Disc::from_u8(value).ok_or(BoardError::InvalidCell {
                row: i / BOARD_SIZE,
                col: i % BOARD_SIZE,
                value,
            })?;
        }

        let mut board = Board::with_cells(cells, side_to_move);
        if let Some(moves) = legal_moves {
            if let Some(sq) = moves.iter().find(|&sq| !board.is_legal_move(sq)) {
                return Err(BoardError::IllegalMove(sq));
            }
            board.legal_moves = moves;
        }
        Ok(board)
    }

    /// Creates a `Board` from a string representation.
    ///
    /// The string should contain 64 characters representing the board squares
    /// from A1 to H8. `'X'` is a black disc, `'O'` a white disc, anything else
    /// an empty square. Characters beyond the 64th are ignored.
    ///
    /// # Panics
    ///
    /// Panics if `side_to_move` is `Disc::Empty`.
    pub fn from_string(board_string: &str, side_to_move: Disc) -> Board {
        assert!(side_to_move != Disc::Empty, "side to move must be a color");
        let mut cells = [Disc::Empty; BOARD_SQUARES];
        for (cell, c) in cells.iter_mut().zip(board_string.chars()) {
            *cell = match c {
                'X' => Disc::Black,
                'O' => Disc::White,
                _ => Disc::Empty,
            };
        }
        Board::with_cells(cells, side_to_move)
    }

    /// Returns the row-major cells.
    #[inline]
    pub fn cells(&self) -> &[Disc; BOARD_SQUARES] {
        &self.cells
    }

    /// Gets the disc at a specific square.
    #[inline]
    pub fn get_disc_at(&self, sq: Square) -> Disc {
        self.cells[sq.index()]
    }

    /// Returns the side that places the next disc.
    #[inline]
    pub fn side_to_move(&self) -> Disc {
        self.side_to_move
    }

    /// Returns the current cell counts.
    #[inline]
    pub fn disc_counts(&self) -> DiscCounts {
        self.counts
    }

    /// Returns the legal moves of the side to move.
    ///
    /// This is the list computed after the last mutation, or the list supplied
    /// to [`Board::from_grid`] if no move has been made since.
    #[inline]
    pub fn legal_moves(&self) -> &MoveList {
        &self.legal_moves
    }

    /// Checks if a move to a specific square is legal for the side to move.
    #[inline]
    pub fn is_legal_move(&self, sq: Square) -> bool {
        flip::is_legal(&self.cells, sq, self.side_to_move)
    }

    /// Returns `true` if the side to move has no legal move.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.legal_moves.is_empty()
    }

    /// Checks if the game is over (neither player can make a move).
    pub fn is_game_over(&self) -> bool {
        self.is_terminal()
            && MoveList::generate(&self.cells, self.side_to_move.opposite()).is_empty()
    }

    /// Places a disc for the side to move and flips every captured run.
    ///
    /// On success the turn passes to the opponent and the legal moves are
    /// regenerated for the new side to move.
    ///
    /// # Returns
    ///
    /// The number of flipped discs.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::IllegalMove`] and leaves the board untouched if
    /// the move is not legal.
    pub fn make_move(&mut self, sq: Square) -> Result<u32, BoardError> {
        let mover = self.side_to_move;
        let flipped = flip::flip(&self.cells, sq, mover);
        if self.cells[sq.index()] != Disc::Empty || flipped.is_empty() {
            return Err(BoardError::IllegalMove(sq));
        }

        self.cells[sq.index()] = mover;
        for captured in &flipped {
            self.cells[captured.index()] = mover;
        }

        let n_flipped = flipped.len() as u32;
        *self.counts.get_mut(Disc::Empty) -= 1;
        *self.counts.get_mut(mover) += n_flipped + 1;
        *self.counts.get_mut(mover.opposite()) -= n_flipped;
        debug_assert_eq!(self.counts.total(), BOARD_SQUARES as u32);

        self.side_to_move = mover.opposite();
        self.legal_moves = MoveList::generate(&self.cells, self.side_to_move);
        Ok(n_flipped)
    }

    /// Returns a copy of this board with `sq` played.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::IllegalMove`] if the move is not legal.
    pub fn try_play(&self, sq: Square) -> Result<Board, BoardError> {
        let mut next = self.clone();
        next.make_move(sq)?;
        Ok(next)
    }

    /// Returns a copy of this board with `sq` played.
    ///
    /// # Panics
    ///
    /// Panics if the move is illegal. Callers must only play moves taken from
    /// [`Board::legal_moves`].
    pub fn play(&self, sq: Square) -> Board {
        match self.try_play(sq) {
            Ok(next) => next,
            Err(err) => panic!("{err} for {:?} on\n{self}", self.side_to_move),
        }
    }

    /// Hands the turn to the opponent without placing a disc.
    pub fn pass(&mut self) {
        self.side_to_move = self.side_to_move.opposite();
        self.legal_moves = MoveList::generate(&self.cells, self.side_to_move);
    }

    /// Returns the board with every disc and the side to move color-swapped.
    pub fn swap_colors(&self) -> Board {
        let mut cells = self.cells;
        for cell in cells.iter_mut() {
            *cell = cell.opposite();
        }
        Board::with_cells(cells, self.side_to_move.opposite())
    }

    /// Converts the board to a string representation.
    ///
    /// The output format shows the board as an 8x8 grid with:
    /// - 'X' for Black discs
    /// - 'O' for White discs
    /// - '-' for empty squares
    pub fn to_string_as_board(&self) -> String {
        let mut s = String::with_capacity(BOARD_SQUARES + BOARD_SIZE);
        for (i, disc) in self.cells.iter().enumerate() {
            if i > 0 && i % BOARD_SIZE == 0 {
                s.push('\n');
            }
            s.push(disc.to_char());
        }
        s
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_as_board())
    }
}
