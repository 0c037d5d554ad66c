//! Mark balance invariant: X moves first and players alternate.

use super::Invariant;
use crate::types::{Board, Player};

/// Invariant: X has as many marks as O, or exactly one more.
pub struct MarkBalanceInvariant;

impl Invariant<Board> for MarkBalanceInvariant {
    fn holds(board: &Board) -> bool {
        let x_count = board.count(Player::X);
        let o_count = board.count(Player::O);
        x_count == o_count || x_count == o_count + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O or one more (X, O, X, O, ...)"
    }
}
