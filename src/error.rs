//! Error types for the game engine.

use derive_more::{Display, Error};

/// Why an action cannot be applied to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ActionError {
    /// The coordinate lies outside the 3x3 grid.
    #[display("({row}, {col}) is outside the 3x3 board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The target cell already holds a mark.
    #[display("cell ({row}, {col}) is already occupied")]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

/// Error returned by board queries, move application and search.
///
/// Every variant is a contract violation at the call site. None of them is
/// transient, so there is nothing to retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// Mark counts cannot come from alternating play starting with X.
    #[display("Invalid board state: {x_count} X marks and {o_count} O marks")]
    InvalidBoardState {
        /// Number of X marks on the board.
        x_count: usize,
        /// Number of O marks on the board.
        o_count: usize,
    },

    /// The action cannot be applied to the board.
    #[display("Invalid action: {_0}")]
    InvalidAction(#[error(source)] ActionError),

    /// A decision was requested on a board where the game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl From<ActionError> for EngineError {
    fn from(err: ActionError) -> Self {
        EngineError::InvalidAction(err)
    }
}

/// Error parsing the text form of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// A character that is neither a mark, an empty marker nor a separator.
    #[display("Unknown cell symbol {_0:?}")]
    UnknownSymbol(#[error(not(source))] char),

    /// The text did not describe exactly nine cells.
    #[display("Expected 9 cells, found {_0}")]
    WrongCellCount(#[error(not(source))] usize),
}
