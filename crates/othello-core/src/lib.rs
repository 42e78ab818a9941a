//! Othello board engine and fixed-depth alpha-beta move selection.

pub mod board;
pub mod constants;
pub mod descriptor;
pub mod disc;
pub mod eval;
mod flip;
pub mod move_list;
pub mod perft;
pub mod search;
pub mod square;
pub mod types;
