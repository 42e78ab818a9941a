use othello_core::board::Board;
use othello_core::descriptor::BoardDescriptor;
use othello_core::disc::Disc;
use othello_core::eval::CutoffEval;
use othello_core::move_list::MoveList;
use othello_core::search::options::SearchOptions;
use othello_core::search::{Search, SearchError, select_best_move};
use othello_core::square::Square;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;

/// Plays up to `plies` random moves from the initial position, passing when
/// forced. Returns `None` if the game ends or the side to move must pass.
fn random_board(rng: &mut StdRng, plies: usize) -> Option<Board> {
    let mut board = Board::new();
    for _ in 0..plies {
        if board.is_terminal() {
            board.pass();
            if board.is_terminal() {
                return None;
            }
        }
        let sq = board.legal_moves().iter().choose(rng)?;
        board.make_move(sq).ok()?;
    }
    (!board.is_terminal()).then_some(board)
}

fn random_boards(seed: u64, count: usize, plies: usize) -> Vec<Board> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut boards = Vec::with_capacity(count);
    while boards.len() < count {
        if let Some(board) = random_board(&mut rng, plies) {
            boards.push(board);
        }
    }
    boards
}

#[test]
fn test_alpha_beta_matches_plain_minimax() {
    for cutoff in [CutoffEval::Board, CutoffEval::Square] {
        for (i, board) in random_boards(0x5eed, 12, 20).iter().enumerate() {
            let depth = 3 + (i % 2) as u32;
            let pruned = SearchOptions::new(depth).with_cutoff(cutoff);
            let full = pruned.clone().with_pruning(false);

            let a = Search::new(pruned).run(board).unwrap();
            let b = Search::new(full).run(board).unwrap();

            assert_eq!(a.best_move, b.best_move, "{cutoff} depth {depth}\n{board}");
            assert_eq!(a.score, b.score, "{cutoff} depth {depth}\n{board}");
            assert_eq!(a.root_moves, b.root_moves);
            assert!(a.n_nodes <= b.n_nodes);
        }
    }
}

#[test]
fn test_selected_move_is_legal() {
    for board in random_boards(42, 16, 30) {
        let best = select_best_move(&board, &SearchOptions::new(3)).unwrap();
        assert!(board.is_legal_move(best), "{best} on\n{board}");
    }
}

#[test]
fn test_search_is_deterministic() {
    let options = SearchOptions::new(4);
    for board in random_boards(7, 4, 16) {
        let first = Search::new(options.clone()).run(&board).unwrap();
        let second = Search::new(options.clone()).run(&board).unwrap();
        assert_eq!(first.best_move, second.best_move);
        assert_eq!(first.score, second.score);
        assert_eq!(first.n_nodes, second.n_nodes);
    }
}

#[test]
fn test_color_swap_symmetry() {
    let options = SearchOptions::new(3);
    for board in random_boards(99, 10, 24) {
        let a = Search::new(options.clone()).run(&board).unwrap();
        let b = Search::new(options.clone())
            .run(&board.swap_colors())
            .unwrap();
        assert_eq!(a.best_move, b.best_move);
        assert_eq!(a.score, b.score);
    }
}

#[test]
fn test_initial_position_picks_first_move() {
    let best = select_best_move(&Board::new(), &SearchOptions::default()).unwrap();
    assert_eq!(best, Square::D3);
}

#[test]
fn test_ties_follow_supplied_move_order() {
    let reversed = MoveList::from_squares([Square::E6, Square::F5, Square::C4, Square::D3]).unwrap();
    let grid: Vec<u8> = Board::new().cells().iter().map(|d| d.as_u8()).collect();
    let board = Board::from_grid(&grid, 1, Some(reversed)).unwrap();

    let best = select_best_move(&board, &SearchOptions::new(3)).unwrap();
    assert_eq!(best, Square::E6);
}

#[test]
fn test_takes_corner() {
    let board = Board::from_string(
        "-OX-----\
         --------\
         --------\
         ---OX---\
         --------\
         --------\
         --------\
         --------",
        Disc::Black,
    );
    assert_eq!(board.legal_moves().as_slice(), &[Square::A1, Square::C4]);

    for cutoff in [CutoffEval::Square, CutoffEval::Board] {
        for depth in 1..=2 {
            let options = SearchOptions::new(depth).with_cutoff(cutoff);
            assert_eq!(
                select_best_move(&board, &options).unwrap(),
                Square::A1,
                "{cutoff} depth {depth}"
            );
        }
    }
}

#[test]
fn test_no_legal_moves() {
    let board = Board::from_string(&"O".repeat(64), Disc::Black);
    assert_eq!(
        select_best_move(&board, &SearchOptions::default()),
        Err(SearchError::NoLegalMoves(Disc::Black))
    );
}

#[test]
fn test_descriptor_to_move() {
    let text = BoardDescriptor::from_board(&Board::new().play(Square::F5)).to_string();
    let board = BoardDescriptor::parse(&text).unwrap().into_board().unwrap();
    assert_eq!(board.side_to_move(), Disc::White);

    let best = select_best_move(&board, &SearchOptions::new(2)).unwrap();
    assert!(board.legal_moves().contains(best));
}
