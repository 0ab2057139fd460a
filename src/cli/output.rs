//! Output formatting and progress bars for CLI

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    engine::{Engine, Mark, Outcome},
    ports::SessionObserver,
    session::{MoveReport, Scoreboard},
};

/// Create a progress bar counting resolved games
pub fn create_games_progress(total_games: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::new(total_games);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")?
            .progress_chars("=>-"),
    );
    Ok(pb)
}

/// Advances a progress bar each time a game is resolved
pub struct ProgressObserver {
    progress_bar: ProgressBar,
    wins: [u32; 2],
    draws: u32,
}

impl ProgressObserver {
    pub fn new(progress_bar: ProgressBar) -> Self {
        Self {
            progress_bar,
            wins: [0; 2],
            draws: 0,
        }
    }
}

impl<E: Engine> SessionObserver<E> for ProgressObserver {
    fn on_move(&mut self, report: &MoveReport<E>) {
        match report.outcome {
            Outcome::Continue(_) => return,
            Outcome::Win(winner) => self.wins[winner.index()] += 1,
            Outcome::Draw => self.draws += 1,
        }
        let [first, second] = <E::Mark as Mark>::both();
        self.progress_bar.set_message(format!(
            "{first}:{} {second}:{} D:{}",
            self.wins[first.index()],
            self.wins[second.index()],
            self.draws
        ));
        self.progress_bar.inc(1);
    }

    fn on_reset(&mut self) {
        self.wins = [0; 2];
        self.draws = 0;
        self.progress_bar.reset();
    }
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print win counters for both marks and the draw counter
pub fn print_scoreboard<M: Mark>(scores: &Scoreboard) {
    let [first, second] = M::both();
    print_kv(&format!("{first} wins"), &scores.wins(first).to_string());
    print_kv(&format!("{second} wins"), &scores.wins(second).to_string());
    print_kv("Draws", &scores.draws().to_string());
    print_kv("Games", &scores.games_played().to_string());
}
