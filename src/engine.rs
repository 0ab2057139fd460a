//! Shared contract for the two rule engines

use std::{fmt, hash::Hash};

use serde::{Deserialize, Serialize};

use crate::Result;

/// A player's board symbol (X/O or Red/Yellow).
///
/// Exactly two marks exist per game; `FIRST` opens every board.
pub trait Mark:
    Copy + Eq + Hash + fmt::Debug + fmt::Display + Serialize + Send + Sync + 'static
{
    /// The mark that moves first on an empty board
    const FIRST: Self;

    /// Get the other mark
    fn opponent(self) -> Self;

    /// Stable slot (0 for `FIRST`, 1 for its opponent) used by per-player tables
    fn index(self) -> usize {
        if self == Self::FIRST { 0 } else { 1 }
    }

    /// Both marks in turn order
    fn both() -> [Self; 2] {
        [Self::FIRST, Self::FIRST.opponent()]
    }
}

/// Result of an accepted move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome<M> {
    /// Game goes on; the contained mark moves next
    Continue(M),
    /// The contained mark completed a line
    Win(M),
    /// Board filled without a line
    Draw,
}

impl<M> Outcome<M> {
    /// True for `Win` and `Draw`
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Continue(_))
    }
}

/// A two-player board game rule engine.
///
/// Engines validate and apply moves, then report what happened. They never
/// clear themselves after a terminal move; that is left to the owner.
pub trait Engine: fmt::Display {
    type Mark: Mark;
    /// What a player (or AI) supplies: a cell index or a column
    type Input: Copy + Eq + fmt::Debug + fmt::Display + Send;

    /// Validate and apply a move for the current player.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidMove`] for out-of-range input, occupied
    /// targets, or a board that is already terminal. The board is unchanged.
    fn apply_move(&mut self, input: Self::Input) -> Result<Outcome<Self::Mark>>;

    /// True if some mark owns a complete line
    fn check_win(&self) -> bool;

    /// The mark owning a complete line, if any
    fn winner(&self) -> Option<Self::Mark>;

    /// True if the board is won or full
    fn is_game_over(&self) -> bool;

    /// Mark that places the next piece
    fn current_player(&self) -> Self::Mark;

    /// Inputs that `apply_move` would accept right now
    fn legal_moves(&self) -> Vec<Self::Input>;

    /// Number of pieces on the board
    fn occupied_count(&self) -> usize;

    /// Total cells on the board
    fn capacity(&self) -> usize;

    /// Empty the board and hand the turn back to `Mark::FIRST`
    fn clear(&mut self);
}
