//! One request/response round: read a position, search, write the move.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use anyhow::Context;
use othello_core::board::Board;
use othello_core::descriptor::{self, BoardDescriptor};
use othello_core::search::Search;
use othello_core::search::options::SearchOptions;
use othello_core::square::Square;
use tracing::{debug, info};

use crate::report;

/// Loads the position described in `path`.
pub fn read_board(path: &Path) -> anyhow::Result<Board> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let board = BoardDescriptor::parse(&text)
        .and_then(BoardDescriptor::into_board)
        .with_context(|| format!("invalid board descriptor in {}", path.display()))?;
    debug!("position loaded\n{board}");
    Ok(board)
}

/// Answers the request in `input` by writing the chosen move to `output`.
///
/// The output file is only created once a move has been found.
pub fn play(input: &Path, output: &Path, options: SearchOptions, analyze: bool) -> anyhow::Result<Square> {
    let board = read_board(input)?;
    info!(
        side = ?board.side_to_move(),
        moves = board.legal_moves().count(),
        depth = options.limit_depth,
        cutoff = %options.cutoff,
        "searching"
    );

    let result = Search::new(options)
        .run(&board)
        .with_context(|| format!("cannot choose a move for {}", input.display()))?;
    if analyze {
        report::print_analysis(&board, &result);
    }

    let file = File::create(output)
        .with_context(|| format!("failed to create {}", output.display()))?;
    descriptor::write_move(&mut BufWriter::new(file), result.best_move)
        .with_context(|| format!("failed to write {}", output.display()))?;
    info!(mv = %result.best_move, output = %output.display(), "move written");
    Ok(result.best_move)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("othello-player-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_play_initial_position() {
        let input = scratch("initial.in");
        let output = scratch("initial.out");
        fs::write(&input, BoardDescriptor::from_board(&Board::new()).to_string()).unwrap();

        let mv = play(&input, &output, SearchOptions::new(3), false).unwrap();
        assert_eq!(mv, Square::D3);
        assert_eq!(fs::read_to_string(&output).unwrap(), "2 3\n");

        fs::remove_file(input).ok();
        fs::remove_file(output).ok();
    }

    #[test]
    fn test_malformed_input_writes_nothing() {
        let input = scratch("bad.in");
        let output = scratch("bad.out");
        fs::write(&input, "1 0 0 x").unwrap();

        let err = play(&input, &output, SearchOptions::default(), false).unwrap_err();
        assert!(format!("{err:#}").contains("invalid integer"));
        assert!(!output.exists());

        fs::remove_file(input).ok();
    }

    #[test]
    fn test_no_moves_writes_nothing() {
        let input = scratch("blocked.in");
        let output = scratch("blocked.out");
        let board = Board::from_string(&"X".repeat(64), othello_core::disc::Disc::White);
        fs::write(&input, BoardDescriptor::from_board(&board).to_string()).unwrap();

        assert!(play(&input, &output, SearchOptions::default(), false).is_err());
        assert!(!output.exists());

        fs::remove_file(input).ok();
    }

    #[test]
    fn test_missing_input() {
        let err = play(
            &scratch("missing.in"),
            &scratch("missing.out"),
            SearchOptions::default(),
            false,
        )
        .unwrap_err();
        assert!(err.to_string().starts_with("failed to read"));
    }
}
