//! Colored terminal output for `--analyze`.

use colored::Colorize;
use othello_core::board::Board;
use othello_core::constants::BOARD_SIZE;
use othello_core::disc::Disc;
use othello_core::search::search_result::SearchResult;
use othello_core::square::Square;

/// Prints the position with the chosen move highlighted, followed by the
/// score of every candidate.
pub fn print_analysis(board: &Board, result: &SearchResult) {
    print_board(board, Some(result.best_move));
    println!();
    print_root_moves(result);
}

fn print_board(board: &Board, best_move: Option<Square>) {
    let counts = board.disc_counts();

    println!("      a   b   c   d   e   f   g   h");
    println!("    ┌───┬───┬───┬───┬───┬───┬───┬───┐");

    for row in 0..BOARD_SIZE {
        print!("  {} │", row + 1);

        for col in 0..BOARD_SIZE {
            let Some(sq) = Square::from_coords(row, col) else {
                continue;
            };
            let is_best = Some(sq) == best_move;
            let is_legal = board.legal_moves().contains(sq);

            let symbol = match board.get_disc_at(sq) {
                Disc::Black => " X ".bright_green(),
                Disc::White => " O ".bright_yellow(),
                Disc::Empty if is_best => " * ".on_bright_black().bright_red(),
                Disc::Empty if is_legal => " · ".bright_cyan(),
                Disc::Empty => "   ".black(),
            };
            print!("{symbol}│");
        }

        match row {
            2 => {
                let side = match board.side_to_move() {
                    Disc::Black => "Black to move (X)".bright_green(),
                    _ => "White to move (O)".bright_yellow(),
                };
                println!("   {side}");
            }
            3 => println!("   Black: {}", format!("{:2}", counts.black).bright_green()),
            4 => println!("   White: {}", format!("{:2}", counts.white).bright_yellow()),
            _ => println!(),
        }

        if row < BOARD_SIZE - 1 {
            println!("    ├───┼───┼───┼───┼───┼───┼───┼───┤");
        }
    }

    println!("    └───┴───┴───┴───┴───┴───┴───┴───┘");
}

fn print_root_moves(result: &SearchResult) {
    println!(
        "  depth {}, {} nodes",
        result.depth,
        result.n_nodes.to_string().bright_cyan()
    );
    println!("  move  row col     score");
    for rm in &result.root_moves {
        let score = rm
            .score
            .map_or_else(|| "-".to_string(), |score| score.to_string());
        let line = format!(
            "  {:<4}  {:>3} {:>3}  {:>8}",
            rm.sq.to_string(),
            rm.sq.row(),
            rm.sq.col(),
            score
        );
        if rm.sq == result.best_move {
            println!("{}", line.bright_green().bold());
        } else {
            println!("{line}");
        }
    }
}
