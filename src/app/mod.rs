//! Application layer.
//!
//! Owns the configuration and wires domain objects to infrastructure,
//! following the ports-and-adapters split:
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  app: App (container) + ArcadeConfig         │
//! └──────────────┬───────────────────────────────┘
//!                │ builds
//!                ▼
//! ┌──────────────────────────────────────────────┐
//! │  adapters: HttpAiClient, RandomMoves,        │
//! │            ScriptedMoves (tests)             │
//! └──────────────┬───────────────────────────────┘
//!                │ implement
//!                ▼
//! ┌──────────────────────────────────────────────┐
//! │  ports: MoveSource, SessionObserver          │
//! └──────────────┬───────────────────────────────┘
//!                │ used by
//!                ▼
//! ┌──────────────────────────────────────────────┐
//! │  domain: Session, AutoPlay,                  │
//! │          TicTacToe, ConnectFour              │
//! └──────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod container;

pub use config::{ArcadeConfig, GameConfig};
pub use container::{App, AppBuilder, ArcadeGame};
