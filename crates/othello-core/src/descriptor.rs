//! Text exchange format between the game host and the player.
//!
//! The host writes the position as whitespace-separated integers:
//!
//! ```text
//! <side to move: 1 = black, 2 = white>
//! <64 cells, row-major: 0 = empty, 1 = black, 2 = white>
//! <n: number of legal moves>
//! <n pairs of zero-based "row col">
//! ```
//!
//! The player answers with a single `"row col"` line.

use std::fmt;
use std::io::{self, Write};

use crate::board::{Board, BoardError};
use crate::constants::{BOARD_SIZE, BOARD_SQUARES};
use crate::disc::Disc;
use crate::move_list::MoveList;
use crate::square::Square;

/// Errors raised while reading a board descriptor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DescriptorError {
    #[error("unexpected end of input while reading {0}")]
    UnexpectedEof(&'static str),
    #[error("invalid integer {token:?} at token {index}")]
    InvalidToken { index: usize, token: String },
    #[error("invalid side to move {0}: must be 1 or 2")]
    InvalidSideToMove(i64),
    #[error("invalid cell value {value} at row {row}, column {col}")]
    InvalidCell { row: usize, col: usize, value: i64 },
    #[error("invalid legal move count {0}: must be between 0 and 64")]
    InvalidMoveCount(i64),
    #[error("move coordinate ({row}, {col}) is off the board")]
    InvalidCoordinate { row: i64, col: i64 },
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Whitespace tokenizer that tracks token positions for error reports.
struct Tokens<'a> {
    inner: std::iter::Enumerate<std::str::SplitWhitespace<'a>>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Tokens {
            inner: text.split_whitespace().enumerate(),
        }
    }

    fn next_int(&mut self, what: &'static str) -> Result<i64, DescriptorError> {
        let (index, token) = self
            .inner
            .next()
            .ok_or(DescriptorError::UnexpectedEof(what))?;
        token.parse().map_err(|_| DescriptorError::InvalidToken {
            index,
            token: token.to_string(),
        })
    }
}

/// A parsed position request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardDescriptor {
    pub side_to_move: Disc,
    pub cells: [Disc; BOARD_SQUARES],
    /// Legal moves as supplied by the host, in their given order.
    pub legal_moves: Vec<Square>,
}

impl BoardDescriptor {
    /// Parses a descriptor. Tokens after the declared moves are ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`DescriptorError`] if the input is truncated, contains a
    /// non-integer token, or any value is out of range.
    pub fn parse(text: &str) -> Result<BoardDescriptor, DescriptorError> {
        let mut tokens = Tokens::new(text);

        let side = tokens.next_int("side to move")?;
        let side_to_move = match u8::try_from(side).ok().and_then(Disc::from_u8) {
            Some(disc) if disc != Disc::Empty => disc,
            _ => return Err(DescriptorError::InvalidSideToMove(side)),
        };

        let mut cells = [Disc::Empty; BOARD_SQUARES];
        for (i, cell) in cells.iter_mut().enumerate() {
            let value = tokens.next_int("board cells")?;
            *cell = u8::try_from(value)
                .ok()
                .and_then(Disc::from_u8)
                .ok_or(DescriptorError::InvalidCell {
                    row: i / BOARD_SIZE,
                    col: i % BOARD_SIZE,
                    value,
                })?;
        }

        let count = tokens.next_int("legal move count")?;
        let n_moves = usize::try_from(count)
            .ok()
            .filter(|&n| n <= BOARD_SQUARES)
            .ok_or(DescriptorError::InvalidMoveCount(count))?;

        let mut legal_moves = Vec::with_capacity(n_moves);
        for _ in 0..n_moves {
            let row = tokens.next_int("legal moves")?;
            let col = tokens.next_int("legal moves")?;
            let sq = usize::try_from(row)
                .ok()
                .zip(usize::try_from(col).ok())
                .and_then(|(r, c)| Square::from_coords(r, c))
                .ok_or(DescriptorError::InvalidCoordinate { row, col })?;
            legal_moves.push(sq);
        }

        Ok(BoardDescriptor {
            side_to_move,
            cells,
            legal_moves,
        })
    }

    /// Describes `board`, listing its legal moves in scan order.
    pub fn from_board(board: &Board) -> BoardDescriptor {
        BoardDescriptor {
            side_to_move: board.side_to_move(),
            cells: *board.cells(),
            legal_moves: board.legal_moves().as_slice().to_vec(),
        }
    }

    /// Builds the board, keeping the supplied legal moves as its candidates.
    ///
    /// # Errors
    ///
    /// Returns [`DescriptorError::Board`] if a supplied move is not legal for
    /// the side to move.
    pub fn into_board(self) -> Result<Board, DescriptorError> {
        let grid: Vec<u8> = self.cells.iter().map(|disc| disc.as_u8()).collect();
        let count = self.legal_moves.len();
        let moves = MoveList::from_squares(self.legal_moves)
            .ok_or(DescriptorError::InvalidMoveCount(count as i64))?;
        Ok(Board::from_grid(&grid, self.side_to_move.as_u8(), Some(moves))?)
    }
}

impl fmt::Display for BoardDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.side_to_move.as_u8())?;
        for row in self.cells.chunks_exact(BOARD_SIZE) {
            let line: Vec<String> = row.iter().map(|disc| disc.as_u8().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        writeln!(f, "{}", self.legal_moves.len())?;
        for sq in &self.legal_moves {
            writeln!(f, "{} {}", sq.row(), sq.col())?;
        }
        Ok(())
    }
}

/// Writes the chosen move as a zero-based `"row col"` line and flushes.
pub fn write_move<W: Write>(writer: &mut W, sq: Square) -> io::Result<()> {
    writeln!(writer, "{} {}", sq.row(), sq.col())?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    const INITIAL: &str = "1
        0 0 0 0 0 0 0 0
        0 0 0 0 0 0 0 0
        0 0 0 0 0 0 0 0
        0 0 0 2 1 0 0 0
        0 0 0 1 2 0 0 0
        0 0 0 0 0 0 0 0
        0 0 0 0 0 0 0 0
        0 0 0 0 0 0 0 0
        4
        2 3
        3 2
        4 5
        5 4";

    #[test]
    fn test_parse_initial_position() {
        let desc = BoardDescriptor::parse(INITIAL).unwrap();
        assert_eq!(desc.side_to_move, Disc::Black);
        assert_eq!(desc.cells[Square::D4.index()], Disc::White);
        assert_eq!(desc.cells[Square::E4.index()], Disc::Black);
        assert_eq!(
            desc.legal_moves,
            vec![Square::D3, Square::C4, Square::F5, Square::E6]
        );
        assert_eq!(desc.into_board().unwrap(), Board::new());
    }

    #[test]
    fn test_display_matches_parse() {
        let board = Board::new().play(Square::F5);
        let desc = BoardDescriptor::from_board(&board);
        let parsed = BoardDescriptor::parse(&desc.to_string()).unwrap();
        assert_eq!(parsed, desc);
        assert_eq!(parsed.into_board().unwrap(), board);
    }

    #[test]
    fn test_trailing_tokens_ignored() {
        let text = format!("{INITIAL} 7 7 garbage");
        assert!(BoardDescriptor::parse(&text).is_ok());
    }

    #[test]
    fn test_truncated() {
        assert_eq!(
            BoardDescriptor::parse(""),
            Err(DescriptorError::UnexpectedEof("side to move"))
        );
        assert_eq!(
            BoardDescriptor::parse("1 0 0 0"),
            Err(DescriptorError::UnexpectedEof("board cells"))
        );
        let cut = INITIAL.rsplit_once('5').unwrap().0;
        assert_eq!(
            BoardDescriptor::parse(cut),
            Err(DescriptorError::UnexpectedEof("legal moves"))
        );
    }

    #[test]
    fn test_out_of_range_values() {
        assert_eq!(
            BoardDescriptor::parse("3"),
            Err(DescriptorError::InvalidSideToMove(3))
        );
        assert_eq!(
            BoardDescriptor::parse("x"),
            Err(DescriptorError::InvalidToken {
                index: 0,
                token: "x".to_string()
            })
        );

        let bad_cell = INITIAL.replacen("0", "7", 1);
        assert_eq!(
            BoardDescriptor::parse(&bad_cell),
            Err(DescriptorError::InvalidCell {
                row: 0,
                col: 0,
                value: 7
            })
        );

        let grid = "0 ".repeat(64);
        assert_eq!(
            BoardDescriptor::parse(&format!("2 {grid} 65")),
            Err(DescriptorError::InvalidMoveCount(65))
        );
        assert_eq!(
            BoardDescriptor::parse(&format!("2 {grid} -1")),
            Err(DescriptorError::InvalidMoveCount(-1))
        );
        assert_eq!(
            BoardDescriptor::parse(&format!("2 {grid} 1 8 0")),
            Err(DescriptorError::InvalidCoordinate { row: 8, col: 0 })
        );
    }

    #[test]
    fn test_into_board_rejects_illegal_supplied_move() {
        let text = INITIAL.replace("5 4", "0 0");
        let desc = BoardDescriptor::parse(&text).unwrap();
        assert_eq!(
            desc.into_board(),
            Err(DescriptorError::Board(BoardError::IllegalMove(Square::A1)))
        );
    }

    #[test]
    fn test_write_move() {
        let mut out = Vec::new();
        write_move(&mut out, Square::D3).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "2 3\n");
    }
}
