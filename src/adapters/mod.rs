//! Adapters implementing domain ports.
//!
//! `HttpAiClient` reaches the real AI services; `ScriptedMoves` and
//! `RandomMoves` stand in for them in tests and offline play.

pub mod http_ai;
pub mod random_moves;
pub mod scripted;

pub use http_ai::{Endpoints, HttpAiClient};
pub use random_moves::RandomMoves;
pub use scripted::{Scripted, ScriptedMoves};
