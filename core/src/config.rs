use serde::{Deserialize, Serialize};

use crate::{feedback_table::FeedbackTable, structs::Lexicon};

/// Tunable constants of the search.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub max_depth: usize,
    /// Guesses given a full recursive evaluation per position.
    pub max_candidates: usize,
    /// A guess is worthwhile only if its expected bucket size is below
    /// `prune_ratio` times the number of candidates.
    pub prune_ratio: f64,
    /// At or below this many candidates, the candidates are tried as guesses first.
    pub small_pool: usize,
    /// Leaf estimate is `leaf_horizon - depth` further guesses.
    pub leaf_horizon: f64,
    /// Score of a position with a single candidate left.
    pub terminal_score: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            max_candidates: 100,
            prune_ratio: 0.8,
            small_pool: 10,
            leaf_horizon: 5.,
            terminal_score: 0.,
        }
    }
}

/// Shared, read-only state handed to every scoring and search call.
#[derive(Copy, Clone, Debug)]
pub struct Context<'a> {
    pub lexicon: &'a Lexicon,
    pub table: &'a FeedbackTable,
    pub config: &'a SolverConfig,
}

impl<'a> Context<'a> {
    pub fn new(lexicon: &'a Lexicon, table: &'a FeedbackTable, config: &'a SolverConfig) -> Self {
        Self {
            lexicon,
            table,
            config,
        }
    }
}
