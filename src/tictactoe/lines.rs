//! Winning line analysis for Tic-Tac-Toe

use super::{Board, Cell, Player};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player has won by having three in a row
    pub fn has_won(board: &Board, player: Player) -> bool {
        Self::completed_line(board, player).is_some()
    }

    /// First line fully owned by the player, if any
    pub fn completed_line(board: &Board, player: Player) -> Option<[usize; 3]> {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .copied()
            .find(|line| line.iter().all(|&idx| board.cells[idx] == target))
    }

    /// Owner of any completed line.
    ///
    /// Only one player can complete a line on a given move, so the first match
    /// is the winner.
    pub fn winner(board: &Board) -> Option<Player> {
        WINNING_LINES.iter().find_map(|line| {
            let first = board.cells[line[0]];
            if first != Cell::Empty && line.iter().all(|&idx| board.cells[idx] == first) {
                first.to_player()
            } else {
                None
            }
        })
    }
}
