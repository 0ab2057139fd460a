//! Shared configuration types for CLI commands

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use crate::app::{App, ArcadeConfig};

/// Which board to play on
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GameArg {
    /// 3x3 tic-tac-toe
    #[value(alias = "ttt")]
    Tictactoe,
    /// 6x6 connect-four
    #[value(alias = "c4")]
    Connect4,
}

/// Options shared by every command that runs a session
#[derive(Args, Debug, Clone)]
pub struct SessionArgs {
    /// Game to play
    #[arg(value_enum)]
    pub game: GameArg,

    /// Play AI seats with random legal moves instead of the HTTP services
    #[arg(long)]
    pub offline: bool,

    /// Random seed for offline moves
    #[arg(long)]
    pub seed: Option<u64>,
}

impl SessionArgs {
    /// Build the app container from the loaded configuration and these flags
    pub fn app(&self, config: ArcadeConfig) -> App {
        let mut builder = App::builder().with_config(config).offline(self.offline);
        if let Some(seed) = self.seed {
            builder = builder.with_seed(seed);
        }
        builder.build()
    }
}

/// Load the config file if one was given, otherwise the defaults
pub fn load_config(path: Option<&Path>) -> Result<ArcadeConfig> {
    match path {
        Some(path) => ArcadeConfig::load(path)
            .with_context(|| format!("loading configuration from {}", path.display())),
        None => Ok(ArcadeConfig::default()),
    }
}
