//! Scoring a board: the signed utility and the unambiguous game status.

use tracing::instrument;

use super::draw::is_full;
use super::turn::current_player;
use super::win::winner;
use crate::error::EngineError;
use crate::types::{Board, GameStatus, Player, Utility};

/// Returns `XWins` if X has a line, `OWins` if O has one, `Even` otherwise.
///
/// `Even` is returned for drawn boards and for boards still in play alike.
/// Gate on [`super::is_terminal`] first, or call [`status`].
#[instrument(level = "trace", skip(board))]
pub fn utility(board: &Board) -> Utility {
    winner(board).map_or(Utility::Even, Player::win)
}

/// Returns where the game stands: in progress (with the player to move),
/// won, or drawn.
///
/// # Errors
///
/// Returns [`EngineError::InvalidBoardState`] for a non-terminal board whose
/// mark counts leave nobody on turn.
#[instrument(skip(board))]
pub fn status(board: &Board) -> Result<GameStatus, EngineError> {
    if let Some(player) = winner(board) {
        return Ok(GameStatus::Won(player));
    }
    if is_full(board) {
        return Ok(GameStatus::Draw);
    }
    current_player(board).map(GameStatus::InProgress)
}
