//! Tic-tac-toe minimax - optimal play by exhaustive game-tree search
//!
//! This library is a pure decision engine. The caller owns the game loop and
//! the display; the engine answers questions about a board and picks moves.
//!
//! # Architecture
//!
//! - **Types**: boards, cells, players, actions and utilities, all plain `Copy` values
//! - **Rules**: whose turn it is, legal actions, move application, win/draw detection
//! - **Invariants**: checks that a hand-built board is reachable by legal play
//! - **Search**: plain minimax plus a configurable searcher with pruning and memoization
//!
//! # Example
//!
//! ```
//! use tictactoe_minimax::{Action, Utility, apply, initial_state, is_terminal, minimax_decision, utility};
//!
//! # fn main() -> Result<(), tictactoe_minimax::EngineError> {
//! let mut board = initial_state();
//! while !is_terminal(&board) {
//!     let action: Action = minimax_decision(&board)?;
//!     board = apply(&board, action)?;
//! }
//! assert_eq!(utility(&board), Utility::Even);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod error;
mod invariants;
mod notation;
mod rules;
mod search;
mod types;

// Crate-level exports - Domain types
pub use action::Action;
pub use types::{BOARD_SIZE, Board, Cell, GameStatus, Player, Utility};

/// Alias for the symbol a player places on a cell.
pub type Mark = Player;

// Crate-level exports - Errors
pub use error::{ActionError, EngineError, ParseBoardError};

// Crate-level exports - Rules
pub use rules::{
    LINES, apply, current_player, initial_state, is_full, is_terminal, legal_actions, status,
    utility, winner,
};

// Crate-level exports - Invariants
pub use invariants::{
    BoardInvariants, Invariant, InvariantSet, InvariantViolation, MarkBalanceInvariant,
    SingleWinnerInvariant, WinnerMovedLastInvariant, validate,
};

// Crate-level exports - Search
pub use search::{
    ConfigError, Decision, SearchConfig, Searcher, minimax_decision, minimax_value,
};
