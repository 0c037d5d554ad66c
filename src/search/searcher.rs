//! Configurable minimax search with optional alpha-beta pruning and a
//! per-search transposition table.

use std::collections::HashMap;

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use super::config::SearchConfig;
use super::minimax::improves;
use crate::action::Action;
use crate::error::EngineError;
use crate::rules::{apply, current_player, is_terminal, legal_actions, utility};
use crate::types::{Board, Player, Utility};

/// Window bounds wide enough to never cut a utility value off.
const WINDOW_MIN: i8 = -1;
const WINDOW_MAX: i8 = 1;

/// Outcome of a top-level search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct Decision {
    /// First action in row-major order that reaches the best value.
    action: Action,
    /// Minimax value of the position after `action`.
    value: Utility,
    /// Boards examined, the root's children included.
    nodes: u64,
}

/// Minimax searcher.
///
/// A searcher only holds its configuration. Every call builds its own
/// bookkeeping and drops it on return, so results never depend on earlier
/// calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Searcher {
    config: SearchConfig,
}

impl Searcher {
    /// Creates a searcher with the given configuration.
    #[instrument]
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Returns the minimax value of a board.
    ///
    /// # Errors
    ///
    /// Propagates [`EngineError::InvalidBoardState`] from a corrupt board.
    #[instrument(skip(self, board), fields(board = %board, config = ?self.config))]
    pub fn value(&self, board: &Board) -> Result<Utility, EngineError> {
        let mut run = Run::new(self.config);
        let value = run.value(board, WINDOW_MIN, WINDOW_MAX)?;
        debug!(%value, nodes = run.nodes, "Search finished");
        Ok(value)
    }

    /// Returns the optimal action for the player to move.
    ///
    /// # Errors
    ///
    /// See [`Searcher::best_move`].
    pub fn decide(&self, board: &Board) -> Result<Action, EngineError> {
        self.best_move(board).map(|decision| decision.action)
    }

    /// Searches the board and reports the chosen action with its value.
    ///
    /// Ties go to the first optimal action in row-major order, whatever the
    /// configuration.
    ///
    /// # Errors
    ///
    /// - [`EngineError::GameOver`] if the board is already terminal.
    /// - [`EngineError::InvalidBoardState`] from a corrupt board.
    #[instrument(skip(self, board), fields(board = %board, config = ?self.config))]
    pub fn best_move(&self, board: &Board) -> Result<Decision, EngineError> {
        if is_terminal(board) {
            warn!("Decision requested on a finished game");
            return Err(EngineError::GameOver);
        }

        let player = current_player(board)?;
        let mut run = Run::new(self.config);
        let mut best: Option<(Action, Utility)> = None;

        for action in legal_actions(board) {
            let child = apply(board, action)?;
            // Once an incumbent exists only a strictly better child matters,
            // so the window starts at the incumbent's value.
            let (alpha, beta) = match (*self.config.alpha_beta(), best) {
                (true, Some((_, incumbent))) => match player {
                    Player::X => (incumbent.value(), WINDOW_MAX),
                    Player::O => (WINDOW_MIN, incumbent.value()),
                },
                _ => (WINDOW_MIN, WINDOW_MAX),
            };
            let value = run.value(&child, alpha, beta)?;

            if best.is_none_or(|(_, incumbent)| improves(player, value, incumbent)) {
                best = Some((action, value));
            }
            if *self.config.alpha_beta() && value.is_best_for(player) {
                break;
            }
        }

        // A non-terminal board always has an empty cell.
        let (action, value) = best.ok_or(EngineError::GameOver)?;
        debug!(%player, %action, %value, nodes = run.nodes, "Search finished");
        Ok(Decision {
            action,
            value,
            nodes: run.nodes,
        })
    }

    /// Plays optimal moves for both sides until the game ends.
    ///
    /// Returns the actions in the order they were played; empty if the board
    /// is already terminal.
    ///
    /// # Errors
    ///
    /// Propagates [`EngineError::InvalidBoardState`] from a corrupt board.
    #[instrument(skip(self, board), fields(board = %board))]
    pub fn optimal_line(&self, board: &Board) -> Result<Vec<Action>, EngineError> {
        let mut line = Vec::new();
        let mut position = *board;
        while !is_terminal(&position) {
            let action = self.decide(&position)?;
            position = apply(&position, action)?;
            line.push(action);
        }
        debug!(moves = line.len(), result = %utility(&position), "Line played out");
        Ok(line)
    }
}

/// How a cached value relates to the true minimax value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound {
    Exact,
    Lower,
    Upper,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    value: Utility,
    bound: Bound,
}

/// Bookkeeping for a single search call.
struct Run {
    config: SearchConfig,
    table: HashMap<Board, Entry>,
    nodes: u64,
}

impl Run {
    fn new(config: SearchConfig) -> Self {
        Self {
            config,
            table: HashMap::new(),
            nodes: 0,
        }
    }

    /// Fail-soft minimax over the window `[alpha, beta]`.
    ///
    /// Without pruning the window is ignored and every value is exact. With
    /// pruning, a result at or below `alpha` is an upper bound and one at or
    /// above `beta` a lower bound; anything strictly inside is exact.
    fn value(&mut self, board: &Board, mut alpha: i8, mut beta: i8) -> Result<Utility, EngineError> {
        self.nodes += 1;
        if is_terminal(board) {
            return Ok(utility(board));
        }

        let alpha_beta = *self.config.alpha_beta();
        let memoize = *self.config.memoize();

        if memoize && let Some(entry) = self.table.get(board) {
            match entry.bound {
                Bound::Exact => return Ok(entry.value),
                Bound::Lower => alpha = alpha.max(entry.value.value()),
                Bound::Upper => beta = beta.min(entry.value.value()),
            }
            if alpha >= beta {
                return Ok(entry.value);
            }
        }

        let player = current_player(board)?;
        let (window_alpha, window_beta) = (alpha, beta);
        let mut best: Option<Utility> = None;

        for action in legal_actions(board) {
            let value = self.value(&apply(board, action)?, alpha, beta)?;
            if best.is_none_or(|incumbent| improves(player, value, incumbent)) {
                best = Some(value);
            }
            if alpha_beta {
                match player {
                    Player::X => alpha = alpha.max(value.value()),
                    Player::O => beta = beta.min(value.value()),
                }
                if alpha >= beta {
                    break;
                }
            }
        }

        let best = best.unwrap_or_else(|| utility(board));
        if memoize {
            let bound = if !alpha_beta {
                Bound::Exact
            } else if best.value() <= window_alpha {
                Bound::Upper
            } else if best.value() >= window_beta {
                Bound::Lower
            } else {
                Bound::Exact
            };
            self.table.insert(*board, Entry { value: best, bound });
        }
        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::minimax::minimax_value;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    fn all_configs() -> [SearchConfig; 4] {
        [
            SearchConfig::new(),
            SearchConfig::new().with_alpha_beta(true),
            SearchConfig::new().with_memoize(true),
            SearchConfig::fast(),
        ]
    }

    #[test]
    fn test_plain_search_visits_whole_tree() {
        let searcher = Searcher::default();
        let mut run = Run::new(*searcher.config());
        assert_eq!(run.value(&Board::new(), WINDOW_MIN, WINDOW_MAX), Ok(Utility::Even));
        assert_eq!(run.nodes, 549_946);
    }

    #[test]
    fn test_optimizations_visit_fewer_nodes() {
        let plain = Searcher::default().best_move(&Board::new()).unwrap();
        let fast = Searcher::new(SearchConfig::fast())
            .best_move(&Board::new())
            .unwrap();
        assert_eq!(plain.action(), fast.action());
        assert_eq!(plain.value(), fast.value());
        assert!(fast.nodes() < plain.nodes());
    }

    #[test]
    fn test_configs_agree_on_midgame_value() {
        let position = board("X.. .O. ..X");
        let expected = minimax_value(&position).unwrap();
        for config in all_configs() {
            assert_eq!(Searcher::new(config).value(&position), Ok(expected), "{config:?}");
        }
    }

    #[test]
    fn test_first_optimal_action_wins_ties() {
        // O wins either by completing the middle row at (1, 2) or by taking
        // (0, 2) for a double threat. (0, 2) comes first in row-major order.
        let position = board("XX. OO. ..X");
        for config in all_configs() {
            let decision = Searcher::new(config).best_move(&position).unwrap();
            assert_eq!(*decision.action(), Action::new(0, 2), "{config:?}");
            assert_eq!(*decision.value(), Utility::OWins, "{config:?}");
        }
    }

    #[test]
    fn test_best_move_on_terminal_board() {
        for config in all_configs() {
            assert_eq!(
                Searcher::new(config).best_move(&board("OOO XX. X..")),
                Err(EngineError::GameOver)
            );
        }
    }

    #[test]
    fn test_optimal_line_on_terminal_board_is_empty() {
        assert_eq!(
            Searcher::default().optimal_line(&board("XOX OXX OXO")),
            Ok(Vec::new())
        );
    }
}
