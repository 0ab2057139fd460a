//! Rule engines for tic-tac-toe and 6x6 connect-four, played by humans or
//! by remote AI services
//!
//! This crate provides:
//! - Tic-tac-toe and connect-four engines behind one [`Engine`] trait
//! - Sessions that keep scores and route human and AI moves through the same
//!   validation
//! - An HTTP client for the rule-based and Q-learning move services
//! - Cancelable timer-driven AI-vs-AI play
//! - A small CLI on top

pub mod adapters;
pub mod app;
pub mod autoplay;
pub mod cli;
pub mod connect4;
pub mod engine;
pub mod error;
pub mod ports;
pub mod session;
pub mod tictactoe;
pub mod types;
pub mod wire;

pub use autoplay::{AutoPlay, AutoPlaySummary, CancelToken, Tick};
pub use connect4::{Color, ConnectFour};
pub use engine::{Engine, Mark, Outcome};
pub use error::{Error, InvalidMove, Result};
pub use session::{ClearPolicy, ClearTiming, GameState, MoveReport, Scoreboard, Session};
pub use tictactoe::{Player, TicTacToe};
pub use types::{PlayerType, Strategy};
