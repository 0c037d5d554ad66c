//! Winner-moved-last invariant: a line is completed by the move that ends
//! the game, so the winner must be the player who moved last.

use super::Invariant;
use crate::rules::win::line_owners;
use crate::types::{Board, Player};

/// Invariant: every line owner has made the most recent move.
///
/// X moving last leaves one extra X mark; O moving last leaves the counts
/// equal.
pub struct WinnerMovedLastInvariant;

impl Invariant<Board> for WinnerMovedLastInvariant {
    fn holds(board: &Board) -> bool {
        let x_count = board.count(Player::X);
        let o_count = board.count(Player::O);
        line_owners(board).all(|owner| match owner {
            Player::X => x_count == o_count + 1,
            Player::O => x_count == o_count,
        })
    }

    fn description() -> &'static str {
        "The player with three in a row made the last move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holds(text: &str) -> bool {
        WinnerMovedLastInvariant::holds(&text.parse().unwrap())
    }

    #[test]
    fn test_no_winner_holds() {
        assert!(holds("X.. ... ..."));
    }

    #[test]
    fn test_x_win_after_x_move_holds() {
        assert!(holds("XXX OO. ..."));
    }

    #[test]
    fn test_x_win_with_equal_counts_violates() {
        // O moved after X had already won.
        assert!(!holds("XXX OO. O.."));
    }

    #[test]
    fn test_o_win_after_o_move_holds() {
        assert!(holds("OOO XX. X.."));
    }

    #[test]
    fn test_o_win_with_x_ahead_violates() {
        assert!(!holds("OOO XX. XX."));
    }
}
