//! Plain exhaustive minimax.
//!
//! X maximizes [`Utility`], O minimizes it. The search walks the whole game
//! tree below the given board with no pruning and no caching; see
//! [`super::Searcher`] for the optimized variants.

use tracing::{debug, instrument, warn};

use crate::action::Action;
use crate::error::EngineError;
use crate::rules::{apply, current_player, is_terminal, legal_actions, utility};
use crate::types::{Board, Player, Utility};

/// True if `candidate` is strictly better for `player` than `incumbent`.
///
/// Strict comparison is what makes the first optimal action in enumeration
/// order win ties.
pub(crate) fn improves(player: Player, candidate: Utility, incumbent: Utility) -> bool {
    match player {
        Player::X => candidate > incumbent,
        Player::O => candidate < incumbent,
    }
}

/// Returns the minimax value of a board under optimal play from both sides.
///
/// Terminal boards score their [`utility`]. Otherwise the value is the
/// maximum over children when X is to move and the minimum when O is.
///
/// # Errors
///
/// Propagates [`EngineError::InvalidBoardState`] from a corrupt board.
#[instrument(skip(board), fields(board = %board))]
pub fn minimax_value(board: &Board) -> Result<Utility, EngineError> {
    value_of(board)
}

fn value_of(board: &Board) -> Result<Utility, EngineError> {
    if is_terminal(board) {
        return Ok(utility(board));
    }

    let player = current_player(board)?;
    let mut best: Option<Utility> = None;
    for action in legal_actions(board) {
        let value = value_of(&apply(board, action)?)?;
        if best.is_none_or(|incumbent| improves(player, value, incumbent)) {
            best = Some(value);
        }
    }
    Ok(best.unwrap_or_else(|| utility(board)))
}

/// Returns the optimal action for the player to move.
///
/// Actions are tried in row-major order and the first one reaching the best
/// value is kept; later actions with the same value do not replace it.
///
/// # Errors
///
/// - [`EngineError::GameOver`] if the board is already terminal.
/// - [`EngineError::InvalidBoardState`] from a corrupt board.
#[instrument(skip(board), fields(board = %board))]
pub fn minimax_decision(board: &Board) -> Result<Action, EngineError> {
    if is_terminal(board) {
        warn!("Decision requested on a finished game");
        return Err(EngineError::GameOver);
    }

    let player = current_player(board)?;
    let mut best: Option<(Action, Utility)> = None;
    for action in legal_actions(board) {
        let value = value_of(&apply(board, action)?)?;
        if best.is_none_or(|(_, incumbent)| improves(player, value, incumbent)) {
            best = Some((action, value));
        }
    }

    // A non-terminal board always has an empty cell.
    let (action, value) = best.ok_or(EngineError::GameOver)?;
    debug!(%player, %action, %value, "Minimax decision");
    Ok(action)
}
