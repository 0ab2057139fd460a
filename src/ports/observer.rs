//! Observer port - how a presentation layer hears about state changes
//!
//! Sessions return a [`MoveReport`] from every accepted move; observers get
//! the same report pushed to them, plus notifications for changes that do not
//! come from a move.

use crate::{engine::Engine, session::MoveReport};

/// Subscriber to session events.
///
/// # Event Sequence
///
/// 1. `on_move(report)` - after every accepted move, once scores are updated
/// 2. `on_board_cleared()` - whenever the board is emptied (immediately after
///    `on_move` under an immediate clear policy, or when the owner clears a
///    held board)
/// 3. `on_reset()` - after scores and board were both reset
///
/// All methods default to doing nothing.
pub trait SessionObserver<E: Engine> {
    fn on_move(&mut self, _report: &MoveReport<E>) {}

    fn on_board_cleared(&mut self) {}

    fn on_reset(&mut self) {}
}
