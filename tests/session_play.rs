//! Full games through `GameSession` with a background computer player.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;
use tictactoe_model::boards::tic_tac_toe::{Cell, Move, Player, TicTacToeBoard};
use tictactoe_model::config::SessionConfig;
use tictactoe_model::error::SessionError;
use tictactoe_model::model::{GameModel, Outcome};
use tictactoe_model::random::CustomNumberGenerator;
use tictactoe_model::session::GameSession;
use tictactoe_model::strategist::RandomStrategist;

#[test]
fn computer_against_computer_runs_to_completion() {
    // arrange
    let config = SessionConfig::from_toml_str("computer_seat = 1\nseed = 5").unwrap();
    let session = GameSession::from_config(TicTacToeBoard::<()>::new(), &config);
    let mut strategist = RandomStrategist::new(config.seeded_generator().unwrap());
    let mut moves = 0;

    // act
    loop {
        let pending = session.request_computer_move(strategist);
        let committed = session.commit(pending).unwrap();
        strategist = committed.strategist;
        moves += 1;
        if committed.outcome.is_terminal() {
            break;
        }
    }

    // assert
    let board = session.snapshot();
    assert!(board.is_terminal());
    assert_eq!(moves, board.grid().iter().filter(|c| **c != Cell::Empty).count());
    assert_eq!(session.revision(), moves as u64);
    assert!(matches!(
        session.play(&Move::new(0)),
        Err(SessionError::GameOver)
    ));
}

#[test]
fn observers_never_see_half_a_move() {
    // arrange
    let session = GameSession::builder(TicTacToeBoard::<()>::new()).build();
    let done = Arc::new(AtomicBool::new(false));
    let observer = {
        let session = session.clone();
        let done = Arc::clone(&done);
        thread::spawn(move || {
            let mut observed = 0;
            while !done.load(Ordering::SeqCst) {
                let board = session.snapshot();
                assert!(board.mark_counts_consistent(), "{board}");
                let marks = board.grid().iter().filter(|c| **c != Cell::Empty).count();
                let expected = if marks % 2 == 0 { Player::One } else { Player::Two };
                assert_eq!(board.active_player(), expected);
                observed += 1;
            }
            observed
        })
    };

    // act
    let mut strategist = RandomStrategist::new(CustomNumberGenerator::new(99));
    for _ in 0..20 {
        session.new_game(TicTacToeBoard::new());
        while session.outcome() == Outcome::Playing {
            let pending = session.request_computer_move(strategist);
            strategist = session.commit(pending).unwrap().strategist;
        }
    }
    done.store(true, Ordering::SeqCst);

    // assert
    let observed = observer.join().unwrap();
    assert!(observed > 0);
}

#[test]
fn polling_reports_readiness_before_commit() {
    let session = GameSession::builder(TicTacToeBoard::<()>::new())
        .with_min_think_time(Duration::from_millis(20))
        .build();
    let mut pending =
        session.request_computer_move(RandomStrategist::new(CustomNumberGenerator::default()));

    while !pending.is_ready() {
        thread::sleep(Duration::from_millis(1));
    }
    let committed = session.commit(pending).unwrap();

    assert_eq!(session.snapshot().cell_at(committed.played.cell), Ok(Cell::X));
    assert_eq!(session.active_player(), Player::Two);
}

#[test]
fn cancelled_search_is_reported() {
    let session = GameSession::builder(TicTacToeBoard::<()>::new())
        .with_min_think_time(Duration::from_millis(200))
        .build();
    let pending =
        session.request_computer_move(RandomStrategist::new(CustomNumberGenerator::default()));
    pending.cancel();

    // the random strategist checks the token only before choosing, so it may already
    // have picked a move; both results leave the board consistent
    match session.commit(pending) {
        Ok(committed) => assert_eq!(committed.outcome, Outcome::Playing),
        Err(e) => assert_eq!(e, SessionError::Cancelled),
    }
    assert!(session.snapshot().mark_counts_consistent());
}
