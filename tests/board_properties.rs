//! Properties that hold for every board reachable by legal play.

use tictactoe_model::boards::tic_tac_toe::Cell::{Empty as E, O, X};
use tictactoe_model::boards::tic_tac_toe::{Cell, Player, TicTacToeBoard};
use tictactoe_model::model::{GameModel, Outcome};

/// Visits every position reachable from `board`, stopping at terminal positions.
fn visit_reachable(board: &mut TicTacToeBoard, visit: &mut dyn FnMut(&mut TicTacToeBoard)) {
    visit(board);
    if board.is_terminal() {
        return;
    }
    for m in board.legal_moves() {
        board.apply_move(&m);
        visit_reachable(board, visit);
        board.undo_move(&m);
    }
}

fn relabel(board: &TicTacToeBoard) -> TicTacToeBoard {
    TicTacToeBoard::from_marks(board.grid().map(Cell::swapped))
}

#[test]
fn legal_moves_plus_occupied_cells_is_nine() {
    let mut count = 0;
    visit_reachable(&mut TicTacToeBoard::new(), &mut |board| {
        let occupied = board.grid().iter().filter(|c| **c != E).count();
        assert_eq!(board.legal_moves().len() + occupied, 9, "{board}");
        count += 1;
    });
    // full game tree of tic-tac-toe, counting the root
    assert_eq!(count, 549_946);
}

#[test]
fn reachable_boards_keep_mark_counts_consistent() {
    visit_reachable(&mut TicTacToeBoard::new(), &mut |board| {
        assert!(board.mark_counts_consistent(), "{board}");
        let expected = if board.grid().iter().filter(|c| **c != E).count() % 2 == 0 {
            Player::One
        } else {
            Player::Two
        };
        assert_eq!(board.active_player(), expected);
    });
}

#[test]
fn apply_then_undo_is_identity() {
    visit_reachable(&mut TicTacToeBoard::new(), &mut |board| {
        let grid = board.grid();
        let player = board.active_player();
        for m in board.legal_moves() {
            board.apply_move(&m);
            assert_ne!(board.active_player(), player);
            board.undo_move(&m);
            assert_eq!(board.grid(), grid);
            assert_eq!(board.active_player(), player);
        }
    });
}

#[test]
fn outcome_is_symmetric_under_relabelling() {
    visit_reachable(&mut TicTacToeBoard::new(), &mut |board| {
        let swapped = relabel(board).determine_outcome();
        match board.determine_outcome() {
            Outcome::Winner(p) => assert_eq!(swapped, Outcome::Winner(p.opponent())),
            other => assert_eq!(swapped, other),
        }
    });
}

#[test]
fn row_win_on_full_board_is_not_a_draw() {
    let board = TicTacToeBoard::from_marks([X, X, X, O, O, X, O, X, O]);
    assert!(board.legal_moves().is_empty());
    assert_eq!(board.determine_outcome(), Outcome::Winner(Player::One));
}

#[test]
fn one_move_from_winning_fixture() {
    let board = TicTacToeBoard::from_marks([X, X, E, E, E, E, E, E, E]);
    assert!(board.is_one_move_from_winning(X));
    assert!(!board.is_one_move_from_winning(O));
}

#[test]
fn score_accumulates_from_win_to_neutral() {
    // arrange
    let mut board = TicTacToeBoard::from_marks([X, X, X, O, O, E, E, E, E]);

    // act
    let first = board.score(Player::One);
    for m in [0, 1, 2, 3, 4] {
        board.set_cell(m, E).unwrap();
    }
    board.set_cell(0, X).unwrap();
    let second = board.score(Player::One);

    // assert
    assert_eq!(first, 4);
    assert_eq!(second, 5);
}

#[test]
fn end_to_end_fixtures() {
    let won = TicTacToeBoard::from_marks([X, X, X, O, O, E, E, E, E]);
    assert_eq!(won.determine_outcome(), Outcome::Winner(Player::One));
    assert_eq!(won.determine_outcome().winner(), Some(Player::One));

    let drawn = TicTacToeBoard::from_marks([X, O, X, O, X, O, O, X, O]);
    assert_eq!(drawn.determine_outcome(), Outcome::Draw);
    assert_eq!(drawn.determine_outcome().winner(), None);

    let empty = TicTacToeBoard::<()>::new();
    assert_eq!(empty.determine_outcome(), Outcome::Playing);
    assert_eq!(empty.determine_outcome().winner(), None);
    assert_eq!(empty.legal_moves().len(), 9);
}

#[test]
fn generic_opponent_matches_player_opponent() {
    let board = TicTacToeBoard::<()>::new();
    for p in board.players() {
        assert_eq!(GameModel::opponent(&board, p), p.opponent());
    }
}
