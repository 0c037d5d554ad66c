//! Single winner invariant: the game stops at the first completed line.

use std::collections::BTreeSet;

use super::Invariant;
use crate::rules::win::line_owners;
use crate::types::Board;

/// Invariant: at most one player owns a completed line.
///
/// A single move can complete two lines at once, so one player may own
/// several; both players owning one means play continued after a win.
pub struct SingleWinnerInvariant;

impl Invariant<Board> for SingleWinnerInvariant {
    fn holds(board: &Board) -> bool {
        line_owners(board).collect::<BTreeSet<_>>().len() <= 1
    }

    fn description() -> &'static str {
        "At most one player has three in a row"
    }
}
