//! Play command - Interactive play in the terminal

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    app::{App, ArcadeConfig, ArcadeGame},
    cli::{
        config::{GameArg, SessionArgs},
        output::{print_scoreboard, print_section},
    },
    connect4::ConnectFour,
    engine::{Engine, Outcome},
    session::{MoveReport, Session},
    tictactoe::TicTacToe,
    types::PlayerType,
};

#[derive(Parser, Debug)]
#[command(about = "Play interactively against a human or an AI service")]
pub struct PlayArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// Controller of the first mark (X / Red): me, rule-based or q-learning
    #[arg(long, default_value = "me")]
    pub first: PlayerType,

    /// Controller of the second mark (O / Yellow): me, rule-based or q-learning
    #[arg(long, default_value = "rule-based")]
    pub second: PlayerType,
}

enum Command {
    Move(usize),
    Continue,
    Reset,
    Quit,
    Unknown(String),
}

fn parse_command(line: &str) -> Command {
    match line.trim().to_ascii_lowercase().as_str() {
        "" => Command::Continue,
        "q" | "quit" | "exit" => Command::Quit,
        "r" | "reset" => Command::Reset,
        other => other
            .parse()
            .map(Command::Move)
            .unwrap_or_else(|_| Command::Unknown(other.to_string())),
    }
}

pub fn execute(args: PlayArgs, config: ArcadeConfig) -> Result<()> {
    let app = args.session.app(config);
    match args.session.game {
        GameArg::Tictactoe => run::<TicTacToe>(&app, args.first, args.second),
        GameArg::Connect4 => run::<ConnectFour>(&app, args.first, args.second),
    }
}

fn run<G>(app: &App, first: PlayerType, second: PlayerType) -> Result<()>
where
    G: ArcadeGame<Input = usize>,
{
    let mut session = app.session::<G>(first, second);
    let mut source = app.move_source::<G>();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    print_section(&format!("{} ({first} vs {second})", G::NAME));
    if app.is_offline() {
        println!("Offline: AI seats play random legal moves");
    }

    loop {
        println!("\n{}", session.engine());

        let prompt = if session.awaiting_clear() {
            "Game over. Enter for a new board".to_string()
        } else if session.is_human_turn() {
            format!("{} to move {:?}", session.current_player(), session.engine().legal_moves())
        } else {
            let mark = session.current_player();
            format!("{mark} ({}) - Enter for the AI move", session.player_type(mark))
        };
        print!("{prompt} > ");
        io::stdout().flush().context("flushing prompt")?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("reading from stdin")?;

        match parse_command(&line) {
            Command::Quit => break,
            Command::Reset => {
                session.reset();
                println!("Scores reset");
            }
            Command::Unknown(text) => println!("Unknown command '{text}' (number, reset, quit)"),
            _ if session.awaiting_clear() => session.clear_board(),
            Command::Move(input) => match session.human_move(input) {
                Ok(report) => announce(&session, &report),
                Err(e) => println!("{e}"),
            },
            Command::Continue if session.is_human_turn() => {}
            Command::Continue => match session.ai_move(source.as_mut()) {
                Ok(report) => announce(&session, &report),
                Err(e) => println!("{e}"),
            },
        }
    }

    print_section("Final score");
    print_scoreboard::<G::Mark>(session.scores());
    Ok(())
}

fn announce<G: Engine>(session: &Session<G>, report: &MoveReport<G>) {
    match report.outcome {
        Outcome::Continue(_) => println!("{} played {}", report.player, report.input),
        Outcome::Win(winner) => {
            println!("{} played {}: {winner} wins!", report.player, report.input);
            print_scoreboard::<G::Mark>(session.scores());
        }
        Outcome::Draw => {
            println!("{} played {}: draw", report.player, report.input);
            print_scoreboard::<G::Mark>(session.scores());
        }
    }
}
