mod play;
mod report;

use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};
use othello_core::constants::DEFAULT_LIMIT_DEPTH;
use othello_core::eval::{CutoffEval, WeightTable};
use othello_core::search::options::SearchOptions;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug, Clone)]
struct EngineParams {
    /// Search horizon in plies
    #[arg(short, long, default_value_t = DEFAULT_LIMIT_DEPTH, value_parser = clap::value_parser!(u32).range(1..))]
    depth: u32,

    /// Evaluation applied at the search horizon
    #[arg(long, default_value_t = CutoffEval::Board, value_name = "square|board")]
    eval: CutoffEval,

    /// File with 64 whitespace-separated square weights, row-major
    #[arg(long, value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    weights: Option<PathBuf>,

    /// Disable alpha-beta pruning (plain minimax)
    #[arg(long)]
    no_pruning: bool,
}

impl EngineParams {
    fn search_options(&self) -> anyhow::Result<SearchOptions> {
        let weights = match &self.weights {
            Some(path) => WeightTable::from_file(path)
                .with_context(|| format!("failed to load weights from {}", path.display()))?,
            None => WeightTable::default(),
        };
        Ok(SearchOptions::new(self.depth)
            .with_cutoff(self.eval)
            .with_weights(weights)
            .with_pruning(!self.no_pruning))
    }
}

/// Reads a position from INPUT and writes the chosen move to OUTPUT.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// Board descriptor written by the game host
    #[arg(value_hint = clap::ValueHint::FilePath)]
    input: PathBuf,

    /// File receiving the chosen move as "row col"
    #[arg(value_hint = clap::ValueHint::FilePath)]
    output: PathBuf,

    #[command(flatten)]
    engine_params: EngineParams,

    /// Print the board and the score of every candidate move
    #[arg(long)]
    analyze: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Cli::parse();
    init_logging(args.verbose);

    let result = args
        .engine_params
        .search_options()
        .and_then(|options| play::play(&args.input, &args.output, options, args.analyze));
    if let Err(err) = result {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
