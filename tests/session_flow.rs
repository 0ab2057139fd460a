//! Session behavior with human and AI seats.

mod common;

use arcade::{
    ClearPolicy, Color, ConnectFour, Engine, Error, InvalidMove, Outcome, Player, PlayerType,
    Session, Strategy, TicTacToe,
    adapters::ScriptedMoves,
    session::Mover,
};

fn human_vs_ai() -> Session<TicTacToe> {
    Session::new().with_seats(PlayerType::Human, PlayerType::Ai(Strategy::RuleBased))
}

#[test]
fn ai_answers_go_through_engine_validation() {
    let mut session = human_vs_ai();
    let mut ai = ScriptedMoves::new([4, 4, 9, 2]);
    session.human_move(4).unwrap();

    // Occupied and out-of-range answers are rejected, the turn stays with O
    for _ in 0..2 {
        let err = session.ai_move(&mut ai).unwrap_err();
        assert!(err.is_invalid_move());
        assert_eq!(session.current_player(), Player::O);
        assert_eq!(session.engine().occupied_count(), 1);
    }

    let report = session.ai_move(&mut ai).unwrap();
    assert_eq!(report.input, 2);
    assert_eq!(report.mover, Mover::Ai);
    assert_eq!(report.outcome, Outcome::Continue(Player::X));
}

#[test]
fn transport_failure_leaves_state_unchanged() {
    let mut session = human_vs_ai();
    session.human_move(0).unwrap();
    let before = session.state().clone();

    let mut ai = ScriptedMoves::<usize>::default();
    ai.push_failure("connection refused");
    let err = session.ai_move(&mut ai).unwrap_err();

    assert!(err.is_ai_transport());
    assert_eq!(session.state(), &before);
    assert_eq!(session.current_player(), Player::O);
}

#[test]
fn ai_request_carries_seat_strategy() {
    let mut session = Session::<ConnectFour>::new().with_seats(
        PlayerType::Ai(Strategy::RuleBased),
        PlayerType::Ai(Strategy::QLearning),
    );
    let mut ai = ScriptedMoves::new([3, 3, 4]);
    for _ in 0..3 {
        session.ai_move(&mut ai).unwrap();
    }
    assert_eq!(
        ai.requests(),
        &[Strategy::RuleBased, Strategy::QLearning, Strategy::RuleBased]
    );
}

#[test]
fn ai_move_refused_on_human_turn_without_request() {
    let mut session = human_vs_ai();
    let mut ai = ScriptedMoves::new([4]);
    let err = session.ai_move(&mut ai).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidMove(InvalidMove::AwaitingHuman { .. })
    ));
    assert_eq!(ai.remaining(), 1);
}

#[test]
fn held_board_refuses_ai_move_before_contacting_source() {
    let mut session = Session::<ConnectFour>::new()
        .with_seats(PlayerType::Human, PlayerType::Ai(Strategy::QLearning))
        .with_policy(ClearPolicy::HOLD_WINS);
    let mut ai = ScriptedMoves::new([1, 2, 3, 5]);

    for _ in 0..3 {
        session.human_move(0).unwrap();
        session.ai_move(&mut ai).unwrap();
    }
    let report = session.human_move(0).unwrap();
    assert_eq!(report.outcome, Outcome::Win(Color::Red));
    assert!(!report.cleared);

    // Red's seat is human, but the held board is reported first
    let err = session.ai_move(&mut ai).unwrap_err();
    assert!(matches!(err, Error::InvalidMove(InvalidMove::GameOver)));
    assert_eq!(ai.remaining(), 1);
    assert_eq!(session.engine().occupied_count(), 7);
}

#[test]
fn scores_accumulate_across_cleared_boards() {
    let mut session = Session::<TicTacToe>::new();
    let games: [&[usize]; 3] = [
        &[0, 3, 1, 4, 2],
        &[0, 3, 1, 4, 8, 5],
        &[0, 1, 2, 4, 3, 5, 7, 6, 8],
    ];
    for moves in games {
        for &pos in moves {
            session.human_move(pos).unwrap();
        }
        assert_eq!(session.engine().occupied_count(), 0);
    }
    assert_eq!(session.scores().wins(Player::X), 1);
    assert_eq!(session.scores().wins(Player::O), 1);
    assert_eq!(session.scores().draws(), 1);
    assert_eq!(session.scores().games_played(), 3);
}
