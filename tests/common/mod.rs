//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::collections::HashSet;

use tictactoe_minimax::{Board, apply, initial_state, is_terminal, legal_actions};
use tracing_subscriber::EnvFilter;

/// Installs a test-friendly subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Parses the text form of a board.
pub fn board(text: &str) -> Board {
    text.parse().expect("test board should parse")
}

/// Every board reachable from the empty board by legal play.
pub fn reachable_boards() -> HashSet<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![initial_state()];
    while let Some(position) = stack.pop() {
        if !seen.insert(position) {
            continue;
        }
        if is_terminal(&position) {
            continue;
        }
        for action in legal_actions(&position) {
            stack.push(apply(&position, action).expect("legal action applies"));
        }
    }
    seen
}
