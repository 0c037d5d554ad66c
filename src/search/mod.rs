//! Game-tree search.
//!
//! [`minimax_value`] and [`minimax_decision`] are the plain exhaustive
//! search. [`Searcher`] runs the same search with optional alpha-beta pruning
//! and memoization, chosen through [`SearchConfig`], and can report node
//! counts or play a game out.

pub mod config;
pub mod minimax;
pub mod searcher;

pub use config::{ConfigError, SearchConfig};
pub use minimax::{minimax_decision, minimax_value};
pub use searcher::{Decision, Searcher};
