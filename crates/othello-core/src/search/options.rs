//! Search configuration.

use crate::constants::DEFAULT_LIMIT_DEPTH;
use crate::eval::{CutoffEval, WeightTable};
use crate::types::Depth;

/// Tunable parameters of the move search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    /// Search horizon in plies, counting the root move as ply 1.
    pub limit_depth: Depth,
    /// Evaluation used when the horizon is reached.
    pub cutoff: CutoffEval,
    /// Positional weights shared by every evaluation.
    pub weights: WeightTable,
    /// Alpha-beta pruning. Disabling it yields a plain minimax search with the
    /// same result, which is useful for verification.
    pub pruning: bool,
}

impl SearchOptions {
    /// Create search options with the desired horizon while relying on
    /// defaults for everything else.
    #[must_use]
    pub fn new(limit_depth: Depth) -> Self {
        SearchOptions {
            limit_depth,
            ..Default::default()
        }
    }

    /// Override the search horizon.
    #[must_use]
    pub fn with_depth(mut self, limit_depth: Depth) -> Self {
        self.limit_depth = limit_depth;
        self
    }

    /// Select the evaluation applied at the horizon.
    #[must_use]
    pub fn with_cutoff(mut self, cutoff: CutoffEval) -> Self {
        self.cutoff = cutoff;
        self
    }

    /// Supply a custom weight table, e.g. one loaded by the CLI.
    #[must_use]
    pub fn with_weights(mut self, weights: WeightTable) -> Self {
        self.weights = weights;
        self
    }

    /// Enable or disable alpha-beta pruning.
    #[must_use]
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            limit_depth: DEFAULT_LIMIT_DEPTH,
            cutoff: CutoffEval::default(),
            weights: WeightTable::default(),
            pruning: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = SearchOptions::default();
        assert_eq!(options.limit_depth, 5);
        assert_eq!(options.cutoff, CutoffEval::Board);
        assert!(options.pruning);
    }

    #[test]
    fn test_builders() {
        let options = SearchOptions::new(3)
            .with_cutoff(CutoffEval::Square)
            .with_pruning(false);
        assert_eq!(options.limit_depth, 3);
        assert_eq!(options.cutoff, CutoffEval::Square);
        assert!(!options.pruning);
        assert_eq!(options.with_depth(7).limit_depth, 7);
    }
}
