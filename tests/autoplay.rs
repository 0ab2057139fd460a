//! Timer-driven AI play against scripted and random sources.

mod common;

use std::{thread, time::Duration};

use arcade::{
    AutoPlay, ClearPolicy, Color, ConnectFour, Engine, PlayerType, Result, Session, Strategy,
    TicTacToe, Tick,
    adapters::{RandomMoves, ScriptedMoves},
    ports::MoveSource,
};

/// Answers only after a delay, like a slow AI service
struct SlowSource {
    delay: Duration,
}

impl MoveSource<TicTacToe> for SlowSource {
    fn request_move(&mut self, engine: &TicTacToe, _strategy: Strategy) -> Result<usize> {
        thread::sleep(self.delay);
        Ok(engine.legal_moves()[0])
    }
}

fn ai_seats<E: Engine + Default>() -> Session<E> {
    Session::new().with_seats(
        PlayerType::Ai(Strategy::RuleBased),
        PlayerType::Ai(Strategy::QLearning),
    )
}

#[test]
fn random_games_resolve_and_score() {
    let autoplay = AutoPlay::new(Duration::ZERO);
    let mut session = ai_seats::<ConnectFour>().with_policy(ClearPolicy::HOLD_WINS);
    let mut source = RandomMoves::new(Some(42));

    let summary = autoplay.run(&mut session, &mut source, |s, _| s.scores().games_played() >= 5);

    let scores = session.scores();
    assert_eq!(scores.games_played(), 5);
    assert_eq!(
        scores.wins(Color::Red) + scores.wins(Color::Yellow) + scores.draws(),
        5
    );
    assert_eq!(summary.failures, 0);
    // Every held win costs one clearing tick
    assert!(summary.clears <= 4);
    assert_eq!(summary.ticks, summary.moves + summary.clears);
}

#[test]
fn cancel_from_another_thread_stops_run() {
    let autoplay = AutoPlay::new(Duration::from_millis(5));
    let token = autoplay.token();
    let mut session = ai_seats::<TicTacToe>();
    let mut source = RandomMoves::new(Some(7));

    let canceller = thread::spawn(move || {
        thread::sleep(Duration::from_millis(50));
        token.cancel();
    });
    let summary = autoplay.run(&mut session, &mut source, |_, _| false);
    canceller.join().unwrap();

    assert!(autoplay.token().is_cancelled());
    assert!(summary.ticks > 0);
}

#[test]
fn no_move_after_cancellation() {
    let autoplay = AutoPlay::new(Duration::ZERO);
    let mut session = ai_seats::<TicTacToe>();
    let mut source = ScriptedMoves::new([0, 1, 2, 3]);

    assert!(matches!(autoplay.tick(&mut session, &mut source), Tick::Moved(_)));
    autoplay.cancel();
    for _ in 0..3 {
        assert!(matches!(autoplay.tick(&mut session, &mut source), Tick::Cancelled));
    }
    assert_eq!(session.engine().occupied_count(), 1);
    assert_eq!(source.remaining(), 3);
}

#[test]
fn failing_source_keeps_board_and_reports() {
    let autoplay = AutoPlay::new(Duration::ZERO);
    let mut session = ai_seats::<TicTacToe>();
    let mut source = ScriptedMoves::<usize>::default();
    source.push_failure("timed out");

    match autoplay.tick(&mut session, &mut source) {
        Tick::Failed(err) => assert!(err.is_ai_transport()),
        other => panic!("expected failure, got {other:?}"),
    }
    assert_eq!(session.engine().occupied_count(), 0);
    assert_eq!(session.current_player(), arcade::Player::X);
}

#[test]
fn cancel_during_slow_request_discards_answer() {
    let autoplay = AutoPlay::new(Duration::ZERO);
    let token = autoplay.token();
    let mut session = ai_seats::<TicTacToe>();
    let mut source = SlowSource {
        delay: Duration::from_millis(200),
    };

    let canceller = thread::spawn(move || {
        thread::sleep(Duration::from_millis(20));
        token.cancel();
    });
    let tick = autoplay.tick(&mut session, &mut source);
    canceller.join().unwrap();

    assert!(matches!(tick, Tick::Cancelled));
    assert_eq!(session.engine().occupied_count(), 0);
    assert_eq!(session.current_player(), arcade::Player::X);
}
