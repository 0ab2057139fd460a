//! JSON bodies exchanged with the remote AI services.
//!
//! Tic-tac-toe services answer `POST /get_move`; connect-four services answer
//! `POST /ai-move`. Empty cells travel as `null`.

use serde::{Deserialize, Serialize};

use crate::{
    connect4::{COLUMNS, Color, ConnectFour, ROWS},
    engine::Engine,
    tictactoe::{CELLS, Player, TicTacToe},
    types::Strategy,
};

/// Body of a tic-tac-toe move request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToeRequest {
    pub board: [Option<Player>; CELLS],
    pub player: Player,
    #[serde(rename = "aiMode")]
    pub ai_mode: Strategy,
}

impl TicTacToeRequest {
    pub fn new(game: &TicTacToe, strategy: Strategy) -> Self {
        Self {
            board: game.board().to_wire(),
            player: game.current_player(),
            ai_mode: strategy,
        }
    }
}

/// Tic-tac-toe service answer; `move` is `null` when the board is full
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToeResponse {
    #[serde(rename = "move", default)]
    pub position: Option<usize>,
}

/// Body of a connect-four move request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectFourRequest {
    pub board: [[Option<Color>; COLUMNS]; ROWS],
    pub player: Color,
}

impl ConnectFourRequest {
    pub fn new(game: &ConnectFour) -> Self {
        Self {
            board: game.grid().to_wire(),
            player: game.current_player(),
        }
    }
}

/// Connect-four service answer.
///
/// Only `col` drives the move; the engine recomputes the landing row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectFourResponse {
    #[serde(default)]
    pub row: Option<usize>,
    #[serde(default)]
    pub col: Option<usize>,
}
