//! Arcade CLI - tic-tac-toe and connect-four against remote AI services
//!
//! - `play`: interactive games, human or AI on either seat
//! - `autoplay`: AI against AI on a timer, with a live scoreboard

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use arcade::cli::{
    commands::{autoplay, play},
    config::load_config,
    init_tracing,
};

#[derive(Parser)]
#[command(name = "arcade")]
#[command(version, about = "Tic-tac-toe and connect-four against remote AI services", long_about = None)]
struct Cli {
    /// JSON configuration file (endpoints, clear policy, intervals)
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal
    Play(play::PlayArgs),

    /// Let two AI seats play each other
    Autoplay(autoplay::AutoplayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Play(args) => play::execute(args, config),
        Commands::Autoplay(args) => autoplay::execute(args, config),
    }
}
