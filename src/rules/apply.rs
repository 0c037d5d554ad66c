//! Move application.

use tracing::{instrument, warn};

use super::turn::current_player;
use crate::action::Action;
use crate::error::{ActionError, EngineError};
use crate::types::{Board, Cell};

/// Returns the starting board: every cell empty, X to move.
#[instrument]
pub fn initial_state() -> Board {
    Board::new()
}

/// Returns the board that results from the player to move taking `action`.
///
/// The input board is left untouched, so callers can keep it for undo or to
/// explore sibling moves.
///
/// # Errors
///
/// - [`ActionError::OutOfBounds`] if either coordinate is 3 or more.
/// - [`ActionError::CellOccupied`] if the target cell holds a mark.
/// - [`EngineError::InvalidBoardState`] if the board's mark counts are
///   inconsistent, since then nobody can be on turn.
#[instrument(level = "trace", skip_all, fields(action = %action))]
pub fn apply(board: &Board, action: Action) -> Result<Board, EngineError> {
    let Action { row, col } = action;
    match board.get(action) {
        None => {
            warn!(row, col, "Action outside the board");
            Err(ActionError::OutOfBounds { row, col }.into())
        }
        Some(Cell::Marked(_)) => {
            warn!(row, col, "Action targets an occupied cell");
            Err(ActionError::CellOccupied { row, col }.into())
        }
        Some(Cell::Empty) => {
            let player = current_player(board)?;
            Ok(board.with_cell(action, Cell::Marked(player)))
        }
    }
}
