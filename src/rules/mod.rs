//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Every function takes a board by reference
//! and returns a fresh value; none of them keeps state between calls.

pub mod apply;
pub mod draw;
pub mod score;
pub mod turn;
pub mod win;

pub use apply::{apply, initial_state};
pub use draw::{is_full, is_terminal};
pub use score::{status, utility};
pub use turn::{current_player, legal_actions};
pub use win::{LINES, winner};
