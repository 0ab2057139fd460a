//! Error types for the arcade crate

use thiserror::Error;

/// Reasons a move is rejected.
///
/// Every rejection leaves the game untouched; callers may simply ignore it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidMove {
    #[error("position {position} is out of bounds (must be below {limit})")]
    OutOfRange { position: usize, limit: usize },

    #[error("position {position} is already occupied")]
    Occupied { position: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("game already over")]
    GameOver,

    #[error("{player} is controlled by the {strategy} AI, human input ignored")]
    AwaitingAi { player: String, strategy: String },

    #[error("{player} is controlled by a human, no AI move requested")]
    AwaitingHuman { player: String },
}

/// Main error type for the arcade crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: {0}")]
    InvalidMove(#[from] InvalidMove),

    #[error("AI request to {endpoint} failed: {message}")]
    AiTransport { endpoint: String, message: String },

    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid player type '{input}'. Expected one of: {expected}")]
    ParsePlayerType { input: String, expected: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// True for rejected moves (bad index, occupied cell, wrong controller, game over).
    pub fn is_invalid_move(&self) -> bool {
        matches!(self, Error::InvalidMove(_))
    }

    /// True when a remote move source could not produce a usable answer.
    pub fn is_ai_transport(&self) -> bool {
        matches!(self, Error::AiTransport { .. })
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
