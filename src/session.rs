//! Game sessions: state ownership, scoring and turn control
//!
//! A [`Session`] owns one [`GameState`] and is the only path through which
//! moves reach the engine. Human input and AI answers both end up in the same
//! `apply_move` call, so a move from either source follows the same rules.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{
    Result,
    engine::{Engine, Mark, Outcome},
    error::InvalidMove,
    ports::{MoveSource, SessionObserver},
    types::{PlayerType, Strategy},
};

/// Win counters for both marks plus the draw counter.
///
/// Survives board clears; only [`Session::reset`] zeroes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    wins: [u32; 2],
    draws: u32,
}

impl Scoreboard {
    pub fn wins<M: Mark>(&self, mark: M) -> u32 {
        self.wins[mark.index()]
    }

    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Wins for either side plus draws
    pub fn games_played(&self) -> u32 {
        self.wins.iter().sum::<u32>() + self.draws
    }

    fn record_win<M: Mark>(&mut self, mark: M) {
        self.wins[mark.index()] += 1;
    }

    fn record_draw(&mut self) {
        self.draws += 1;
    }
}

/// Board, player to move and scores for one game type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState<E> {
    pub engine: E,
    pub scores: Scoreboard,
}

/// When to empty the board after a game ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClearTiming {
    /// Clear as part of the finishing move
    #[default]
    Immediate,
    /// Keep the final board until [`Session::clear_board`] is called
    Deferred,
}

/// Board-clearing policy, chosen by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ClearPolicy {
    pub on_win: ClearTiming,
    pub on_draw: ClearTiming,
}

impl ClearPolicy {
    /// Clear right away after wins and draws
    pub const IMMEDIATE: ClearPolicy = ClearPolicy {
        on_win: ClearTiming::Immediate,
        on_draw: ClearTiming::Immediate,
    };

    /// Keep a winning board on display, clear draws right away
    pub const HOLD_WINS: ClearPolicy = ClearPolicy {
        on_win: ClearTiming::Deferred,
        on_draw: ClearTiming::Immediate,
    };

    fn clears_after<M>(&self, outcome: &Outcome<M>) -> bool {
        match outcome {
            Outcome::Continue(_) => false,
            Outcome::Win(_) => self.on_win == ClearTiming::Immediate,
            Outcome::Draw => self.on_draw == ClearTiming::Immediate,
        }
    }
}

/// Who is moving a mark right now
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mover {
    Human,
    Ai,
}

/// What happened on an accepted move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport<E: Engine> {
    /// Mark that moved
    pub player: E::Mark,
    /// Cell index or column that was played
    pub input: E::Input,
    pub mover: Mover,
    pub outcome: Outcome<E::Mark>,
    /// True if the board was emptied as part of this move
    pub cleared: bool,
}

/// One game type played between two configured controllers.
pub struct Session<E: Engine> {
    state: GameState<E>,
    seats: [PlayerType; 2],
    policy: ClearPolicy,
    observers: Vec<Box<dyn SessionObserver<E>>>,
}

impl<E: Engine + Default> Session<E> {
    /// Start a session on an empty board with both marks human-controlled
    pub fn new() -> Self {
        Self::with_engine(E::default())
    }
}

impl<E: Engine + Default> Default for Session<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Engine> Session<E> {
    /// Start a session from an existing engine state
    pub fn with_engine(engine: E) -> Self {
        Session {
            state: GameState {
                engine,
                scores: Scoreboard::default(),
            },
            seats: [PlayerType::Human; 2],
            policy: ClearPolicy::default(),
            observers: Vec::new(),
        }
    }

    /// Set the controllers for the first and second mark
    pub fn with_seats(mut self, first: PlayerType, second: PlayerType) -> Self {
        self.seats = [first, second];
        self
    }

    pub fn with_policy(mut self, policy: ClearPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Register an observer for move, clear and reset notifications
    pub fn subscribe(&mut self, observer: Box<dyn SessionObserver<E>>) {
        self.observers.push(observer);
    }

    pub fn state(&self) -> &GameState<E> {
        &self.state
    }

    pub fn engine(&self) -> &E {
        &self.state.engine
    }

    pub fn scores(&self) -> &Scoreboard {
        &self.state.scores
    }

    pub fn policy(&self) -> ClearPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: ClearPolicy) {
        self.policy = policy;
    }

    pub fn player_type(&self, mark: E::Mark) -> PlayerType {
        self.seats[mark.index()]
    }

    pub fn set_player_type(&mut self, mark: E::Mark, player_type: PlayerType) {
        debug!(%mark, %player_type, "controller changed");
        self.seats[mark.index()] = player_type;
    }

    pub fn current_player(&self) -> E::Mark {
        self.state.engine.current_player()
    }

    /// True if the mark to move is human-controlled
    pub fn is_human_turn(&self) -> bool {
        self.player_type(self.current_player()).is_human()
    }

    /// True while a finished board is held on display under a deferred policy
    pub fn awaiting_clear(&self) -> bool {
        self.state.engine.is_game_over()
    }

    /// Apply a move from a human.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove::AwaitingAi`] if the mark to move is AI-controlled,
    /// or any rejection from the engine. State is unchanged on error.
    pub fn human_move(&mut self, input: E::Input) -> Result<MoveReport<E>> {
        let player = self.current_player();
        if let Some(strategy) = self.player_type(player).strategy() {
            return Err(InvalidMove::AwaitingAi {
                player: player.to_string(),
                strategy: strategy.to_string(),
            }
            .into());
        }
        self.apply(input, Mover::Human)
    }

    /// Ask `source` for a move for the AI-controlled mark to move and apply it.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove::GameOver`] without contacting the source if the
    /// board is finished, [`InvalidMove::AwaitingHuman`] if the mark to move
    /// is human, [`crate::Error::AiTransport`] if the source fails, and any
    /// engine rejection of the proposed move. State is unchanged on error.
    pub fn ai_move<S>(&mut self, source: &mut S) -> Result<MoveReport<E>>
    where
        S: MoveSource<E> + ?Sized,
    {
        let input = self.request_ai_move(source)?;
        self.apply_ai_move(input)
    }

    /// First half of [`Session::ai_move`]: ask `source` for a move without
    /// touching the board.
    ///
    /// Lets a caller drop the answer, e.g. when play was cancelled while the
    /// request was outstanding.
    pub fn request_ai_move<S>(&self, source: &mut S) -> Result<E::Input>
    where
        S: MoveSource<E> + ?Sized,
    {
        if self.state.engine.is_game_over() {
            return Err(InvalidMove::GameOver.into());
        }
        let player = self.current_player();
        let strategy = self.ai_strategy(player)?;
        source
            .request_move(&self.state.engine, strategy)
            .inspect_err(|e| warn!(%player, %strategy, error = %e, "AI move request failed"))
    }

    /// Second half of [`Session::ai_move`]: apply an answer from a move source.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove::AwaitingHuman`] if the mark to move is human, or
    /// any engine rejection of `input`. State is unchanged on error.
    pub fn apply_ai_move(&mut self, input: E::Input) -> Result<MoveReport<E>> {
        let player = self.current_player();
        let strategy = self.ai_strategy(player)?;
        self.apply(input, Mover::Ai)
            .inspect_err(|e| warn!(%player, %strategy, %input, error = %e, "AI proposed a rejected move"))
    }

    fn ai_strategy(&self, player: E::Mark) -> Result<Strategy> {
        self.player_type(player).strategy().ok_or_else(|| {
            InvalidMove::AwaitingHuman {
                player: player.to_string(),
            }
            .into()
        })
    }

    /// Empty the board and give the turn back to the first mark; scores stay.
    pub fn clear_board(&mut self) {
        self.state.engine.clear();
        debug!("board cleared");
        for observer in &mut self.observers {
            observer.on_board_cleared();
        }
    }

    /// Empty the board and zero all counters
    pub fn reset(&mut self) {
        self.state.engine.clear();
        self.state.scores = Scoreboard::default();
        info!("session reset");
        for observer in &mut self.observers {
            observer.on_reset();
        }
    }

    fn apply(&mut self, input: E::Input, mover: Mover) -> Result<MoveReport<E>> {
        let player = self.current_player();
        let outcome = self.state.engine.apply_move(input)?;

        match outcome {
            Outcome::Continue(next) => debug!(%player, %input, %next, "move accepted"),
            Outcome::Win(winner) => {
                self.state.scores.record_win(winner);
                info!(%winner, %input, score = self.state.scores.wins(winner), "game won");
            }
            Outcome::Draw => {
                self.state.scores.record_draw();
                info!(%input, draws = self.state.scores.draws(), "game drawn");
            }
        }

        let cleared = self.policy.clears_after(&outcome);
        if cleared {
            self.state.engine.clear();
        }

        let report = MoveReport {
            player,
            input,
            mover,
            outcome,
            cleared,
        };
        for observer in &mut self.observers {
            observer.on_move(&report);
            if cleared {
                observer.on_board_cleared();
            }
        }
        Ok(report)
    }
}

impl<E: Engine + fmt::Debug> fmt::Debug for Session<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state)
            .field("seats", &self.seats)
            .field("policy", &self.policy)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::{
        Error,
        connect4::{Color, ConnectFour},
        tictactoe::{Player, TicTacToe},
    };

    #[derive(Default)]
    struct Recorder {
        events: Rc<RefCell<Vec<String>>>,
    }

    impl<E: Engine> SessionObserver<E> for Recorder {
        fn on_move(&mut self, report: &MoveReport<E>) {
            self.events
                .borrow_mut()
                .push(format!("{}@{}", report.player, report.input));
        }

        fn on_board_cleared(&mut self) {
            self.events.borrow_mut().push("cleared".to_string());
        }

        fn on_reset(&mut self) {
            self.events.borrow_mut().push("reset".to_string());
        }
    }

    #[test]
    fn immediate_policy_scores_and_clears_win() {
        let mut session = Session::<TicTacToe>::new();
        for pos in [0, 3, 1, 4] {
            session.human_move(pos).unwrap();
        }
        let report = session.human_move(2).unwrap();
        assert_eq!(report.outcome, Outcome::Win(Player::X));
        assert!(report.cleared);
        assert_eq!(session.scores().wins(Player::X), 1);
        assert_eq!(session.scores().wins(Player::O), 0);
        assert_eq!(session.engine().occupied_count(), 0);
        assert_eq!(session.current_player(), Player::X);
    }

    #[test]
    fn deferred_win_holds_board_until_cleared() {
        let mut session = Session::<ConnectFour>::new().with_policy(ClearPolicy::HOLD_WINS);
        for _ in 0..3 {
            session.human_move(0).unwrap();
            session.human_move(1).unwrap();
        }
        let report = session.human_move(0).unwrap();
        assert_eq!(report.outcome, Outcome::Win(Color::Red));
        assert!(!report.cleared);
        assert!(session.awaiting_clear());
        assert_eq!(session.scores().wins(Color::Red), 1);

        let err = session.human_move(3).unwrap_err();
        assert!(matches!(err, Error::InvalidMove(InvalidMove::GameOver)));
        assert_eq!(session.engine().occupied_count(), 7);

        session.clear_board();
        assert!(!session.awaiting_clear());
        assert_eq!(session.current_player(), Color::Red);
        assert_eq!(session.scores().wins(Color::Red), 1);
    }

    #[test]
    fn draw_increments_draw_counter() {
        let mut session = Session::<TicTacToe>::new();
        for pos in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            session.human_move(pos).unwrap();
        }
        assert_eq!(session.scores().draws(), 1);
        assert_eq!(session.scores().games_played(), 1);
        assert_eq!(session.engine().occupied_count(), 0);
    }

    #[test]
    fn human_input_ignored_on_ai_turn() {
        let mut session = Session::<TicTacToe>::new().with_seats(
            PlayerType::Human,
            PlayerType::Ai(crate::types::Strategy::RuleBased),
        );
        session.human_move(4).unwrap();
        let before = session.state().clone();
        let err = session.human_move(0).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidMove(InvalidMove::AwaitingAi { .. })
        ));
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn held_board_reports_game_over_even_on_human_seat() {
        let mut session = Session::<ConnectFour>::new()
            .with_seats(PlayerType::Human, PlayerType::Ai(crate::types::Strategy::RuleBased))
            .with_policy(ClearPolicy::HOLD_WINS);
        let mut ai = crate::adapters::ScriptedMoves::new([1, 2, 3, 5]);
        for _ in 0..3 {
            session.human_move(0).unwrap();
            session.ai_move(&mut ai).unwrap();
        }
        session.human_move(0).unwrap();

        // Red (human) won and keeps the turn while the board is held
        let err = session.ai_move(&mut ai).unwrap_err();
        assert!(matches!(err, Error::InvalidMove(InvalidMove::GameOver)));
        assert_eq!(ai.remaining(), 1);
    }

    #[test]
    fn reset_zeroes_scores() {
        let mut session = Session::<TicTacToe>::new();
        for pos in [0, 3, 1, 4, 2] {
            session.human_move(pos).unwrap();
        }
        session.human_move(8).unwrap();
        session.reset();
        assert_eq!(session.scores(), &Scoreboard::default());
        assert_eq!(session.engine().occupied_count(), 0);
    }

    #[test]
    fn observers_see_moves_clears_and_resets() {
        let recorder = Recorder::default();
        let events = Rc::clone(&recorder.events);
        let mut session = Session::<TicTacToe>::new();
        session.subscribe(Box::new(recorder));

        for pos in [0, 3, 1, 4, 2] {
            session.human_move(pos).unwrap();
        }
        session.reset();

        assert_eq!(
            *events.borrow(),
            vec!["X@0", "O@3", "X@1", "O@4", "X@2", "cleared", "reset"]
        );
    }
}
