//! Move source port - where AI-controlled marks get their moves

use crate::{Result, engine::Engine, types::Strategy};

/// Anything that can propose a move for the player to move.
///
/// The answer is treated as untrusted input: the session pushes it through
/// the same [`Engine::apply_move`] validation as a human click, so an
/// out-of-range or occupied answer is rejected rather than applied.
///
/// # Examples
///
/// ```
/// use arcade::{Result, engine::Engine, ports::MoveSource, types::Strategy};
///
/// /// Always picks the first legal move.
/// struct FirstLegal;
///
/// impl<E: Engine> MoveSource<E> for FirstLegal {
///     fn request_move(&mut self, engine: &E, _strategy: Strategy) -> Result<E::Input> {
///         engine.legal_moves().first().copied().ok_or_else(|| arcade::Error::AiTransport {
///             endpoint: "first-legal".to_string(),
///             message: "no legal moves".to_string(),
///         })
///     }
/// }
/// ```
pub trait MoveSource<E: Engine> {
    /// Ask for a move for `engine.current_player()` using `strategy`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::AiTransport`] if the source cannot be reached or
    /// its answer cannot be decoded into an input.
    fn request_move(&mut self, engine: &E, strategy: Strategy) -> Result<E::Input>;
}

impl<E: Engine, S: MoveSource<E> + ?Sized> MoveSource<E> for Box<S> {
    fn request_move(&mut self, engine: &E, strategy: Strategy) -> Result<E::Input> {
        (**self).request_move(engine, strategy)
    }
}
