//! Autoplay command - Let two AI seats play each other

use std::time::Duration;

use anyhow::{Result, bail};
use clap::Parser;

use crate::{
    app::{App, ArcadeConfig, ArcadeGame},
    autoplay::{AutoPlay, Tick},
    cli::{
        config::{GameArg, SessionArgs},
        output::{ProgressObserver, create_games_progress, print_kv, print_scoreboard, print_section},
    },
    connect4::ConnectFour,
    tictactoe::TicTacToe,
    types::{PlayerType, Strategy},
};

#[derive(Parser, Debug)]
#[command(about = "Run AI against AI on a timer")]
pub struct AutoplayArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// Strategy of the first mark (X / Red)
    #[arg(long, default_value = "rule-based")]
    pub first: PlayerType,

    /// Strategy of the second mark (O / Yellow)
    #[arg(long, default_value = "q-learning")]
    pub second: PlayerType,

    /// Number of games to play
    #[arg(long, short = 'g', default_value_t = 10)]
    pub games: u32,

    /// Delay between moves (defaults to the game's configured interval)
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Give up after this many failed AI requests in a row
    #[arg(long, default_value_t = 5)]
    pub max_failures: u32,
}

pub fn execute(args: AutoplayArgs, config: ArcadeConfig) -> Result<()> {
    if args.first.is_human() || args.second.is_human() {
        bail!("autoplay needs two AI seats (got {} vs {})", args.first, args.second);
    }
    if args.games == 0 {
        bail!("--games must be positive");
    }

    let app = args.session.app(config);
    match args.session.game {
        GameArg::Tictactoe => run::<TicTacToe>(&app, &args),
        GameArg::Connect4 => run::<ConnectFour>(&app, &args),
    }
}

fn run<G: ArcadeGame>(app: &App, args: &AutoplayArgs) -> Result<()> {
    let mut session = app.session::<G>(args.first, args.second);
    let mut source = app.move_source::<G>();
    let autoplay = match args.interval_ms {
        Some(ms) => AutoPlay::new(Duration::from_millis(ms)),
        None => app.autoplay::<G>(),
    };

    print_section(&format!("{} autoplay: {} vs {}", G::NAME, args.first, args.second));
    print_kv("Games", &args.games.to_string());
    print_kv("Interval", &format!("{} ms", autoplay.interval().as_millis()));
    print_kv(
        "Source",
        if app.is_offline() { "offline (random legal moves)" } else { "HTTP" },
    );

    let progress = create_games_progress(u64::from(args.games))?;
    session.subscribe(Box::new(ProgressObserver::new(progress.clone())));

    let token = autoplay.token();
    let mut consecutive_failures = 0;
    let summary = autoplay.run(&mut session, source.as_mut(), |session, tick| {
        match tick {
            Tick::Failed(e) => {
                consecutive_failures += 1;
                progress.println(format!("AI request failed: {e}"));
                if consecutive_failures >= args.max_failures {
                    token.cancel();
                }
            }
            _ => consecutive_failures = 0,
        }
        session.scores().games_played() >= args.games
    });
    progress.finish();

    print_section("Results");
    print_scoreboard::<G::Mark>(session.scores());
    print_kv("Moves", &summary.moves.to_string());
    print_kv("Failed requests", &summary.failures.to_string());

    if token.is_cancelled() {
        bail!(
            "stopped after {} consecutive failed AI requests; are the {} services running? ({})",
            args.max_failures,
            G::NAME,
            strategies(args)
        );
    }
    Ok(())
}

fn strategies(args: &AutoplayArgs) -> String {
    [args.first, args.second]
        .iter()
        .filter_map(|seat| seat.strategy())
        .map(Strategy::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
