//! Full-board and terminal-state detection for tic-tac-toe.

use super::win::winner;
use crate::types::Board;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(level = "trace", skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.iter().all(|(_, cell)| !cell.is_empty())
}

/// Checks if the game is over: somebody has a line or no cell is left.
///
/// This is the only termination test; the search stops on it and callers
/// should use it to decide when to announce the end of the game.
#[instrument(level = "trace", skip(board))]
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}
