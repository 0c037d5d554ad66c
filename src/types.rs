//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::action::Action;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter,
)]
pub enum Player {
    /// Player X (goes first, maximizes utility).
    X,
    /// Player O (goes second, minimizes utility).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Utility of a position this player has won.
    pub fn win(self) -> Utility {
        match self {
            Player::X => Utility::XWins,
            Player::O => Utility::OWins,
        }
    }

    /// Character used for this player's mark in the text form of a board.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a player's mark.
    Marked(Player),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Marked(player) => Some(player),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Side length of the board.
pub const BOARD_SIZE: usize = 3;

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values. Nothing in this crate mutates a board after it
/// has been handed out; moves produce a new board through [`crate::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed as `cells[row][col]`.
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Creates a board from an explicit grid.
    ///
    /// No consistency check is made here; use [`crate::validate`] on boards
    /// that come from outside the engine.
    pub fn from_cells(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Gets the cell targeted by an action, or `None` if it is off the board.
    pub fn get(&self, action: Action) -> Option<Cell> {
        self.cells
            .get(action.row)
            .and_then(|row| row.get(action.col))
            .copied()
    }

    /// Returns all cells as a grid.
    pub fn cells(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Iterates over every cell together with its coordinate, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Action, Cell)> + '_ {
        Action::ALL.iter().map(move |&action| (action, self[action]))
    }

    /// Counts the marks a player has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Cell::Marked(player))
            .count()
    }

    /// Returns a copy of this board with one cell replaced.
    ///
    /// The action must be on the board; callers in this crate check bounds
    /// first.
    pub(crate) fn with_cell(mut self, action: Action, cell: Cell) -> Self {
        self.cells[action.row][action.col] = cell;
        self
    }
}

/// Reads the cell at an on-board coordinate.
///
/// # Panics
///
/// Panics if `action` is off the board. Use [`Board::get`] for coordinates
/// that have not been checked.
impl std::ops::Index<Action> for Board {
    type Output = Cell;

    fn index(&self, action: Action) -> &Cell {
        &self.cells[action.row][action.col]
    }
}

/// Signed score of a board from X's point of view.
///
/// `Even` means nobody has a line. That covers both a drawn board and a board
/// still in play, so check [`crate::is_terminal`] (or use [`crate::status`])
/// before reading it as a result.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Utility {
    /// O has three in a row.
    OWins = -1,
    /// No line for either player.
    Even = 0,
    /// X has three in a row.
    XWins = 1,
}

impl Utility {
    /// Numeric value in `{-1, 0, 1}`.
    pub fn value(self) -> i8 {
        self as i8
    }

    /// True if this is the best result the given player can hope for.
    pub fn is_best_for(self, player: Player) -> bool {
        self == player.win()
    }
}

impl From<Utility> for i8 {
    fn from(utility: Utility) -> Self {
        utility.value()
    }
}

impl std::fmt::Display for Utility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing; the player to move is attached.
    InProgress(Player),
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has concluded.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress(_))
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress(player) => write!(f, "{} to move", player),
            GameStatus::Won(player) => write!(f, "Player {} wins", player),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.iter().all(|(_, cell)| cell.is_empty()));
        assert_eq!(board.count(Player::X), 0);
        assert_eq!(board.count(Player::O), 0);
    }

    #[test]
    fn test_get_off_board() {
        let board = Board::new();
        assert_eq!(board.get(Action::new(3, 0)), None);
        assert_eq!(board.get(Action::new(0, 7)), None);
        assert_eq!(board.get(Action::new(2, 2)), Some(Cell::Empty));
    }

    #[test]
    fn test_with_cell_leaves_input_board() {
        let board = Board::new();
        let next = board.with_cell(Action::new(1, 1), Cell::Marked(Player::X));
        assert_eq!(board, Board::new());
        assert_eq!(next[Action::new(1, 1)], Cell::Marked(Player::X));
        assert_eq!(next.count(Player::X), 1);
    }

    #[test]
    fn test_utility_ordering() {
        assert!(Utility::OWins < Utility::Even);
        assert!(Utility::Even < Utility::XWins);
        assert_eq!(i8::from(Utility::OWins), -1);
        assert_eq!(Utility::XWins.value(), 1);
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
        assert!(Utility::OWins.is_best_for(Player::O));
        assert!(!Utility::Even.is_best_for(Player::X));
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_index_off_board_panics() {
        let _ = Board::new()[Action::new(5, 5)];
    }

    #[test]
    fn test_get_agrees_with_index_on_board() {
        let board = Board::new().with_cell(Action::new(0, 2), Cell::Marked(Player::O));
        for action in Action::ALL {
            assert_eq!(board.get(action), Some(board[action]));
        }
    }
}
