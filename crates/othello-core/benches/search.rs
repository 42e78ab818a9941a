use std::hint::black_box;
use std::time::Duration;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use othello_core::board::Board;
use othello_core::eval::CutoffEval;
use othello_core::search::Search;
use othello_core::search::options::SearchOptions;
use othello_core::square::Square;

/// A midgame position reached by a fixed opening line.
fn midgame_board() -> Board {
    [
        Square::F5,
        Square::F6,
        Square::E6,
        Square::F4,
        Square::E3,
        Square::C5,
        Square::C4,
        Square::E7,
    ]
    .into_iter()
    .fold(Board::new(), |board, sq| board.play(sq))
}

fn search_benchmark(c: &mut Criterion) {
    let board = midgame_board();
    let mut group = c.benchmark_group("search");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(8));

    for cutoff in [CutoffEval::Square, CutoffEval::Board] {
        for depth in [4, 5] {
            for pruning in [true, false] {
                let options = SearchOptions::new(depth)
                    .with_cutoff(cutoff)
                    .with_pruning(pruning);
                let search = Search::new(options);
                let id = format!("{cutoff}/pruning={pruning}");
                group.bench_with_input(BenchmarkId::new(id, depth), &board, |b, board| {
                    b.iter(|| black_box(search.run(black_box(board))));
                });
            }
        }
    }

    group.finish();
}

criterion_group!(benches, search_benchmark);
criterion_main!(benches);
