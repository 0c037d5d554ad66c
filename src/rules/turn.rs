//! Whose turn it is and which cells are still open.

use std::collections::BTreeSet;

use tracing::{instrument, warn};

use crate::action::Action;
use crate::error::EngineError;
use crate::types::{Board, Player};

/// Returns the player who moves next on this board.
///
/// X always opens, so equal counts mean X to move and one extra X means O to
/// move. Any other balance cannot come from alternating play.
///
/// # Errors
///
/// Returns [`EngineError::InvalidBoardState`] when O is ahead or X is ahead
/// by more than one.
#[instrument(level = "trace", skip(board))]
pub fn current_player(board: &Board) -> Result<Player, EngineError> {
    let x_count = board.count(Player::X);
    let o_count = board.count(Player::O);

    if x_count == o_count {
        Ok(Player::X)
    } else if x_count == o_count + 1 {
        Ok(Player::O)
    } else {
        warn!(x_count, o_count, "Mark counts inconsistent with alternating play");
        Err(EngineError::InvalidBoardState { x_count, o_count })
    }
}

/// Returns the set of empty cells.
///
/// Callers should treat the result as a set. It happens to iterate row-major
/// because of [`Action`]'s ordering, and the search relies on that for its
/// tie-break.
#[instrument(level = "trace", skip(board))]
pub fn legal_actions(board: &Board) -> BTreeSet<Action> {
    board
        .iter()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(action, _)| action)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn test_x_opens() {
        assert_eq!(current_player(&Board::new()), Ok(Player::X));
    }

    #[test]
    fn test_o_after_x() {
        assert_eq!(current_player(&board("... .X. ...")), Ok(Player::O));
        assert_eq!(current_player(&board("O.. .X. ...")), Ok(Player::X));
    }

    #[test]
    fn test_o_ahead_is_invalid() {
        assert_eq!(
            current_player(&board("O.. ... ...")),
            Err(EngineError::InvalidBoardState {
                x_count: 0,
                o_count: 1
            })
        );
    }

    #[test]
    fn test_x_two_ahead_is_invalid() {
        assert_eq!(
            current_player(&board("XX. ... ...")),
            Err(EngineError::InvalidBoardState {
                x_count: 2,
                o_count: 0
            })
        );
    }

    #[test]
    fn test_legal_actions_empty_board() {
        let actions = legal_actions(&Board::new());
        assert_eq!(actions.len(), 9);
        assert!(actions.iter().copied().eq(Action::ALL));
    }

    #[test]
    fn test_legal_actions_filters_occupied() {
        let actions = legal_actions(&board("X.. .O. ..."));
        assert_eq!(actions.len(), 7);
        assert!(!actions.contains(&Action::new(0, 0)));
        assert!(!actions.contains(&Action::new(1, 1)));
        assert!(actions.contains(&Action::new(2, 2)));
    }

    #[test]
    fn test_legal_actions_full_board() {
        assert!(legal_actions(&board("XOX XOO OXX")).is_empty());
    }
}
