//! Human-readable text form of a board.
//!
//! A board renders as three lines of `X`, `O` and `.`:
//!
//! ```text
//! XO.
//! .X.
//! ..O
//! ```
//!
//! Parsing is lenient about layout. Whitespace and `|` are ignored, and
//! `-` or `_` also mark an empty cell, so `"XO-|-X-|--O"` parses to the same
//! board.

use std::str::FromStr;

use strum::IntoEnumIterator;
use tracing::{instrument, warn};

use crate::error::ParseBoardError;
use crate::types::{BOARD_SIZE, Board, Cell, Player};

const EMPTY_SYMBOL: char = '.';

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, row) in self.cells().iter().enumerate() {
            for cell in row {
                let symbol = match cell {
                    Cell::Empty => EMPTY_SYMBOL,
                    Cell::Marked(player) => player.symbol(),
                };
                write!(f, "{}", symbol)?;
            }
            if index + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE);
        for c in s.chars() {
            let cell = match c {
                '.' | '-' | '_' => Cell::Empty,
                '|' => continue,
                c if c.is_whitespace() => continue,
                c => match Player::iter().find(|p| p.symbol() == c.to_ascii_uppercase()) {
                    Some(player) => Cell::Marked(player),
                    None => {
                        warn!(symbol = ?c, "Rejecting board text");
                        return Err(ParseBoardError::UnknownSymbol(c));
                    }
                },
            };
            cells.push(cell);
        }

        if cells.len() != BOARD_SIZE * BOARD_SIZE {
            warn!(found = cells.len(), "Rejecting board text");
            return Err(ParseBoardError::WrongCellCount(cells.len()));
        }

        let mut grid = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (index, cell) in cells.into_iter().enumerate() {
            grid[index / BOARD_SIZE][index % BOARD_SIZE] = cell;
        }
        Ok(Board::from_cells(grid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;

    #[test]
    fn test_display_empty() {
        assert_eq!(Board::new().to_string(), "...\n...\n...");
    }

    #[test]
    fn test_parse_layouts_agree() {
        let compact: Board = "XO..X...O".parse().unwrap();
        let framed: Board = "XO-|-X-|--O".parse().unwrap();
        let lines: Board = "xo.\n.x.\n..o".parse().unwrap();
        assert_eq!(compact, framed);
        assert_eq!(compact, lines);
        assert_eq!(compact[Action::new(0, 1)], Cell::Marked(Player::O));
        assert_eq!(compact[Action::new(2, 2)], Cell::Marked(Player::O));
    }

    #[test]
    fn test_display_parses_back() {
        let board: Board = "XOX\n.O.\nX..".parse().unwrap();
        assert_eq!(board.to_string().parse::<Board>(), Ok(board));
    }

    #[test]
    fn test_parse_unknown_symbol() {
        assert_eq!(
            "XO?......".parse::<Board>(),
            Err(ParseBoardError::UnknownSymbol('?'))
        );
    }

    #[test]
    fn test_parse_wrong_count() {
        assert_eq!(
            "XO.".parse::<Board>(),
            Err(ParseBoardError::WrongCellCount(3))
        );
        assert_eq!(
            "..........".parse::<Board>(),
            Err(ParseBoardError::WrongCellCount(10))
        );
    }
}
