//! Tic-Tac-Toe rule engine

pub mod board;
pub mod engine;
pub mod lines;

pub use board::{Board, CELLS, Cell, Player};
pub use engine::TicTacToe;
pub use lines::{LineAnalyzer, WINNING_LINES};
