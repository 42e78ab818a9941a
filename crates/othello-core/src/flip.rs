//! Disc flip calculation for move execution.

use arrayvec::ArrayVec;

use crate::constants::{BOARD_SIZE, BOARD_SQUARES};
use crate::disc::Disc;
use crate::square::{Direction, Square};

/// Upper bound on discs captured by a single placement (six per direction).
const MAX_FLIPS: usize = 8 * (BOARD_SIZE - 2);

/// Squares captured by a single placement.
pub type Flips = ArrayVec<Square, MAX_FLIPS>;

/// Counts the opponent discs captured in one direction.
///
/// Walks outward from `sq` collecting contiguous opponent discs. The run counts
/// only if it is closed by a disc of `mover`; hitting an empty cell or the
/// board edge discards it.
///
/// # Returns
///
/// The length of the captured run, or 0 when nothing is captured.
#[inline]
pub fn captures_in_direction(
    cells: &[Disc; BOARD_SQUARES],
    sq: Square,
    mover: Disc,
    dir: Direction,
) -> usize {
    debug_assert!(mover != Disc::Empty);
    let opponent = mover.opposite();

    let mut run = 0;
    let mut cursor = sq.offset(dir);
    while let Some(next) = cursor {
        match cells[next.index()] {
            Disc::Empty => return 0,
            disc if disc == opponent => {
                run += 1;
                cursor = next.offset(dir);
            }
            _ => return run,
        }
    }
    0
}

/// Checks whether `mover` may place a disc at `sq`.
///
/// The cell must be empty and at least one direction must capture.
#[inline]
pub fn is_legal(cells: &[Disc; BOARD_SQUARES], sq: Square, mover: Disc) -> bool {
    cells[sq.index()] == Disc::Empty
        && Direction::ALL
            .iter()
            .any(|&dir| captures_in_direction(cells, sq, mover, dir) > 0)
}

/// Calculates which opponent discs would be flipped by placing a disc at `sq`.
///
/// # Returns
///
/// Every captured square, grouped by direction in scan order.
/// Empty if the placement captures nothing (invalid move).
pub fn flip(cells: &[Disc; BOARD_SQUARES], sq: Square, mover: Disc) -> Flips {
    let mut flipped = Flips::new();
    for dir in Direction::ALL {
        let run = captures_in_direction(cells, sq, mover, dir);
        let mut cursor = sq;
        for _ in 0..run {
            match cursor.offset(dir) {
                Some(next) => {
                    flipped.push(next);
                    cursor = next;
                }
                None => break,
            }
        }
    }
    flipped
}
