pub mod algo;
pub mod config;
pub mod data;
pub mod feedback_table;
pub mod scoring;
pub mod solvers;
pub mod structs;

pub use config::{Context, SolverConfig};
pub use feedback_table::FeedbackTable;
pub use solvers::{best_guess, simulate_game, solve, Choice, SearchError, Solution, Suggestion};
pub use structs::{FeedbackCode, Hints, Lexicon, Outcome, Word};
