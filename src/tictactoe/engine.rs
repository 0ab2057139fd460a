//! Turn management and win/draw detection

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Board, CELLS, LineAnalyzer, Player};
use crate::{
    Result,
    engine::{Engine, Outcome},
    error::InvalidMove,
};

/// Tic-Tac-Toe rule engine: a 3x3 board plus the player to move.
///
/// This type implements `Copy`; it is 10 bytes (9 cells + the player).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TicTacToe {
    board: Board,
    to_move: Player,
}

impl TicTacToe {
    /// Create a new empty board with X to move
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an engine from a board string, inferring whose turn it is.
    ///
    /// X opens, so equal piece counts mean X to move and one extra X means O
    /// to move.
    ///
    /// # Errors
    ///
    /// Returns error if the string is malformed or the piece counts cannot
    /// arise from alternating play.
    pub fn from_string(s: &str) -> Result<Self> {
        let board = Board::from_string(s)?;
        let (x, o) = (board.count(Player::X), board.count(Player::O));
        let to_move = if x == o {
            Player::X
        } else if x == o + 1 {
            Player::O
        } else {
            return Err(crate::Error::InvalidConfiguration {
                message: format!(
                    "piece counts (X={x}, O={o}) cannot arise from alternating play in '{s}'"
                ),
            });
        };
        Ok(TicTacToe { board, to_move })
    }

    /// Build an engine from an arbitrary board without consistency checks.
    ///
    /// Useful for fixtures that do not arise from alternating play.
    pub fn with_board(board: Board, to_move: Player) -> Self {
        TicTacToe { board, to_move }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Winning line of the finished game, for highlighting
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        let winner = self.winner()?;
        LineAnalyzer::completed_line(&self.board, winner)
    }
}

impl Engine for TicTacToe {
    type Mark = Player;
    type Input = usize;

    fn apply_move(&mut self, pos: usize) -> Result<Outcome<Player>> {
        if self.is_game_over() {
            return Err(InvalidMove::GameOver.into());
        }
        if pos >= CELLS {
            return Err(InvalidMove::OutOfRange {
                position: pos,
                limit: CELLS,
            }
            .into());
        }
        if !self.board.is_empty(pos) {
            return Err(InvalidMove::Occupied { position: pos }.into());
        }

        let mover = self.to_move;
        self.board.cells[pos] = mover.to_cell();

        if LineAnalyzer::has_won(&self.board, mover) {
            return Ok(Outcome::Win(mover));
        }
        if self.board.is_full() {
            return Ok(Outcome::Draw);
        }

        self.to_move = mover.opponent();
        Ok(Outcome::Continue(self.to_move))
    }

    fn check_win(&self) -> bool {
        LineAnalyzer::winner(&self.board).is_some()
    }

    fn winner(&self) -> Option<Player> {
        LineAnalyzer::winner(&self.board)
    }

    fn is_game_over(&self) -> bool {
        self.check_win() || self.board.is_full()
    }

    fn current_player(&self) -> Player {
        self.to_move
    }

    fn legal_moves(&self) -> Vec<usize> {
        if self.is_game_over() {
            return Vec::new();
        }
        self.board.empty_positions()
    }

    fn occupied_count(&self) -> usize {
        self.board.occupied_count()
    }

    fn capacity(&self) -> usize {
        CELLS
    }

    fn clear(&mut self) {
        *self = Self::new();
    }
}

impl fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}
