//! Scripted move source for testing.
//!
//! Replays a fixed queue of answers, including failures, without any
//! network I/O.

use std::collections::VecDeque;

use crate::{Result, engine::Engine, error::Error, ports::MoveSource, types::Strategy};

const ENDPOINT: &str = "script";

/// One scripted answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scripted<I> {
    Move(I),
    /// Answer with a transport failure carrying this message
    Fail(String),
}

/// Move source that answers from a queue.
///
/// Every request pops one entry, so a rejected answer is consumed just like
/// an accepted one. An empty queue answers with a transport failure.
///
/// # Examples
///
/// ```
/// use arcade::adapters::ScriptedMoves;
/// use arcade::session::Session;
/// use arcade::tictactoe::TicTacToe;
/// use arcade::types::{PlayerType, Strategy};
///
/// let mut ai = ScriptedMoves::new([4]);
/// let mut session = Session::<TicTacToe>::new()
///     .with_seats(PlayerType::Ai(Strategy::RuleBased), PlayerType::Human);
/// session.ai_move(&mut ai)?;
/// assert_eq!(ai.requests().len(), 1);
/// # Ok::<(), arcade::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedMoves<I> {
    script: VecDeque<Scripted<I>>,
    requests: Vec<Strategy>,
}

impl<I> ScriptedMoves<I> {
    /// Queue plain moves
    pub fn new(moves: impl IntoIterator<Item = I>) -> Self {
        Self::from_script(moves.into_iter().map(Scripted::Move))
    }

    pub fn from_script(script: impl IntoIterator<Item = Scripted<I>>) -> Self {
        Self {
            script: script.into_iter().collect(),
            requests: Vec::new(),
        }
    }

    pub fn push(&mut self, input: I) {
        self.script.push_back(Scripted::Move(input));
    }

    pub fn push_failure(&mut self, message: impl Into<String>) {
        self.script.push_back(Scripted::Fail(message.into()));
    }

    /// Answers not yet handed out
    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    /// Strategies requested so far, in order
    pub fn requests(&self) -> &[Strategy] {
        &self.requests
    }
}

impl<E: Engine> MoveSource<E> for ScriptedMoves<E::Input> {
    fn request_move(&mut self, _engine: &E, strategy: Strategy) -> Result<E::Input> {
        self.requests.push(strategy);
        match self.script.pop_front() {
            Some(Scripted::Move(input)) => Ok(input),
            Some(Scripted::Fail(message)) => Err(Error::AiTransport {
                endpoint: ENDPOINT.to_string(),
                message,
            }),
            None => Err(Error::AiTransport {
                endpoint: ENDPOINT.to_string(),
                message: "script exhausted".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::TicTacToe;

    #[test]
    fn replays_moves_then_failures() {
        let mut source = ScriptedMoves::from_script([Scripted::Move(3), Scripted::Fail("boom".into())]);
        let game = TicTacToe::new();

        assert_eq!(source.request_move(&game, Strategy::RuleBased).unwrap(), 3);
        let err = MoveSource::<TicTacToe>::request_move(&mut source, &game, Strategy::QLearning)
            .unwrap_err();
        assert!(err.to_string().contains("boom"));
        let err = MoveSource::<TicTacToe>::request_move(&mut source, &game, Strategy::QLearning)
            .unwrap_err();
        assert!(err.to_string().contains("exhausted"));
        assert_eq!(
            source.requests(),
            &[Strategy::RuleBased, Strategy::QLearning, Strategy::QLearning]
        );
    }
}
