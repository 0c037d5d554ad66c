//! Actions: prospective placements of the current player's mark.

use serde::{Deserialize, Serialize};

use crate::types::BOARD_SIZE;

/// A coordinate on the board where the player to move would place a mark.
///
/// An action is only meaningful relative to the board it was derived from.
/// Construction does not validate; [`crate::apply`] rejects coordinates that
/// are off the board or already taken.
///
/// Actions order row-major, which is the enumeration order the search uses
/// to break ties.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Action {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index, left to right.
    pub col: usize,
}

impl Action {
    /// Creates a new action.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// True if both coordinates fall inside the 3x3 grid.
    pub fn in_bounds(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// All 9 on-board coordinates, row-major.
    pub const ALL: [Action; 9] = [
        Action::new(0, 0),
        Action::new(0, 1),
        Action::new(0, 2),
        Action::new(1, 0),
        Action::new(1, 1),
        Action::new(1, 2),
        Action::new(2, 0),
        Action::new(2, 1),
        Action::new(2, 2),
    ];
}

impl From<(usize, usize)> for Action {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
