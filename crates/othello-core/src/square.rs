//! Board coordinates and scan directions.

use std::fmt;
use std::str::FromStr;

use crate::constants::{BOARD_SIZE, BOARD_SQUARES};

/// Represents a square on an Othello board, ranging from A1 to H8.
///
/// Columns are labeled A-H and rows 1-8. A square's `(row, col)` coordinate
/// is zero-based, so `D3` is `(2, 3)`. The board is indexed row-major:
///
/// ```text
///   A  B  C  D  E  F  G  H
/// 1 00 01 02 03 04 05 06 07
/// 2 08 09 10 11 12 13 14 15
/// 3 16 17 18 19 20 21 22 23
/// 4 24 25 26 27 28 29 30 31
/// 5 32 33 34 35 36 37 38 39
/// 6 40 41 42 43 44 45 46 47
/// 7 48 49 50 51 52 53 54 55
/// 8 56 57 58 59 60 61 62 63
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
#[rustfmt::skip]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

use Square::*;

#[rustfmt::skip]
const SQUARES: [Square; BOARD_SQUARES] = [
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
];

/// Returns `true` if the signed coordinate lies on the board.
#[inline]
pub fn is_on_board(row: i32, col: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
}

impl Square {
    /// Returns the row-major index of the square (0-63).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the zero-based row of this square.
    #[inline]
    pub fn row(self) -> usize {
        self.index() / BOARD_SIZE
    }

    /// Returns the zero-based column of this square.
    #[inline]
    pub fn col(self) -> usize {
        self.index() % BOARD_SIZE
    }

    /// Creates a square from a zero-based `(row, col)` coordinate.
    ///
    /// # Returns
    ///
    /// `Some(Square)` if both coordinates are in 0..8, `None` otherwise.
    #[inline]
    pub fn from_coords(row: usize, col: usize) -> Option<Square> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(SQUARES[row * BOARD_SIZE + col])
        } else {
            None
        }
    }

    /// Returns the neighbouring square one step in `dir`, or `None` past the edge.
    #[inline]
    pub fn offset(self, dir: Direction) -> Option<Square> {
        let (dr, dc) = dir.delta();
        let row = self.row() as i32 + dr;
        let col = self.col() as i32 + dc;
        if is_on_board(row, col) {
            Some(SQUARES[row as usize * BOARD_SIZE + col as usize])
        } else {
            None
        }
    }

    /// Returns an iterator over all 64 squares in row-major order (A1 to H8).
    #[inline]
    pub fn iter() -> impl Iterator<Item = Square> {
        SQUARES.into_iter()
    }
}

/// One of the eight compass directions used to scan for captures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    NorthWest,
    North,
    NorthEast,
    West,
    East,
    SouthWest,
    South,
    SouthEast,
}

impl Direction {
    /// All eight directions, in the order they are scanned.
    pub const ALL: [Direction; 8] = [
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
        Direction::West,
        Direction::East,
        Direction::SouthWest,
        Direction::South,
        Direction::SouthEast,
    ];

    /// Returns the `(row, col)` offset of one step in this direction.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::NorthWest => (-1, -1),
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::West => (0, -1),
            Direction::East => (0, 1),
            Direction::SouthWest => (1, -1),
            Direction::South => (1, 0),
            Direction::SouthEast => (1, 1),
        }
    }
}

/// Error type for square parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SquareError {
    /// Invalid square string format (must be 2 characters)
    #[error("Invalid square format: must be 2 characters (e.g., 'a1')")]
    InvalidFormat,
    /// Invalid column character (must be a-h or A-H)
    #[error("Invalid column '{0}': must be a-h or A-H")]
    InvalidColumn(char),
    /// Invalid row character (must be 1-8)
    #[error("Invalid row '{0}': must be 1-8")]
    InvalidRow(char),
}

impl FromStr for Square {
    type Err = SquareError;

    /// Parses algebraic notation such as `"d3"` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let (Some(col_char), Some(row_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(SquareError::InvalidFormat);
        };

        let col_lower = col_char.to_ascii_lowercase();
        if !('a'..='h').contains(&col_lower) {
            return Err(SquareError::InvalidColumn(col_char));
        }
        if !('1'..='8').contains(&row_char) {
            return Err(SquareError::InvalidRow(row_char));
        }

        let col = (col_lower as u8 - b'a') as usize;
        let row = (row_char as u8 - b'1') as usize;
        Square::from_coords(row, col).ok_or(SquareError::InvalidFormat)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col = self.col() as u8 + b'a';
        let row = self.row() as u8 + b'1';
        write!(f, "{}{}", col as char, row as char)
    }
}
