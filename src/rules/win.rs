//! Win detection logic for tic-tac-toe.

use crate::action::Action;
use crate::types::{Board, Cell, Player};
use tracing::instrument;

/// Every line of three, in scan order: rows 0-2, columns 0-2, main
/// diagonal, anti-diagonal.
pub const LINES: [[Action; 3]; 8] = [
    // Rows
    [Action::new(0, 0), Action::new(0, 1), Action::new(0, 2)],
    [Action::new(1, 0), Action::new(1, 1), Action::new(1, 2)],
    [Action::new(2, 0), Action::new(2, 1), Action::new(2, 2)],
    // Columns
    [Action::new(0, 0), Action::new(1, 0), Action::new(2, 0)],
    [Action::new(0, 1), Action::new(1, 1), Action::new(2, 1)],
    [Action::new(0, 2), Action::new(1, 2), Action::new(2, 2)],
    // Diagonals
    [Action::new(0, 0), Action::new(1, 1), Action::new(2, 2)],
    [Action::new(0, 2), Action::new(1, 1), Action::new(2, 0)],
];

/// Returns the owner of a completed line, if any.
fn line_owner(board: &Board, [a, b, c]: [Action; 3]) -> Option<Player> {
    match board[a] {
        Cell::Marked(player) if board[b] == board[a] && board[c] == board[a] => Some(player),
        _ => None,
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the mark of the first completed line in [`LINES`] order, or
/// `None`. A reachable board never has two owners, but the scan order is
/// fixed so even a corrupted board gives a reproducible answer.
#[instrument(level = "trace", skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    LINES.into_iter().find_map(|line| line_owner(board, line))
}

/// Lists the owner of every completed line, in scan order.
///
/// Used by validation to spot boards where both players have a line.
pub(crate) fn line_owners(board: &Board) -> impl Iterator<Item = Player> + '_ {
    LINES.into_iter().filter_map(|line| line_owner(board, line))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        assert_eq!(winner(&board("XXX OO. ...")), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        assert_eq!(winner(&board("XO. XO. .OX")), Some(Player::O));
    }

    #[test]
    fn test_winner_diagonal() {
        assert_eq!(winner(&board("OX. XO. X.O")), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        assert_eq!(winner(&board("OOX .X. XO.")), Some(Player::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(winner(&board("XX. ... ...")), None);
    }

    #[test]
    fn test_scan_order_on_corrupt_boards() {
        assert_eq!(winner(&board("OOO ... XXX")), Some(Player::O));
        assert_eq!(winner(&board("X.O X.O X.O")), Some(Player::X));
        assert_eq!(
            line_owners(&board("XXX ... OOO")).collect::<Vec<_>>(),
            vec![Player::X, Player::O]
        );
    }
}
