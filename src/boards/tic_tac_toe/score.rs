//! Heuristic position scoring.

use super::board::TicTacToeBoard;
use super::cell::Player;
use crate::model::Outcome;
use tracing::trace;

const WIN_BONUS: i32 = 4;
const BLOCK_BONUS: i32 = 3;
const THREAT_BONUS: i32 = 2;
const NEUTRAL_BONUS: i32 = 1;

impl<T> TicTacToeBoard<T> {
    /// Scores the current position for `player`.
    ///
    /// The first matching rule picks a bonus, which is added to the player's running
    /// score; the new running score is returned:
    ///
    /// | position                               | bonus |
    /// |----------------------------------------|-------|
    /// | `player` has won                       | 4     |
    /// | `player` has lost                      | none, returns 0 |
    /// | opponent is one move from a line       | 3     |
    /// | `player` is one move from a line       | 2     |
    /// | anything else                          | 1     |
    ///
    /// Scores accumulate for the lifetime of the board and never go down. They are reset
    /// only by [`TicTacToeBoard::reset`] or by cloning.
    pub fn score(&mut self, player: Player) -> i32 {
        let bonus = match self.determine_outcome() {
            Outcome::Winner(winner) if winner == player => WIN_BONUS,
            Outcome::Winner(_) => return 0,
            Outcome::Draw | Outcome::Playing => {
                if self.is_one_move_from_winning(player.opponent().mark()) {
                    BLOCK_BONUS
                } else if self.is_one_move_from_winning(player.mark()) {
                    THREAT_BONUS
                } else {
                    NEUTRAL_BONUS
                }
            }
        };

        let total = &mut self.scores[player.index()];
        *total += bonus;
        trace!(%player, bonus, total = *total, "scored position");
        *total
    }
}

#[cfg(test)]
mod tests {
    use crate::boards::tic_tac_toe::Cell::{Empty as E, O, X};
    use crate::boards::tic_tac_toe::{Player, TicTacToeBoard};

    #[test]
    fn won_board_scores_four() {
        let mut board = TicTacToeBoard::from_marks([X, X, X, O, O, E, E, E, E]);
        assert_eq!(board.score(Player::One), 4);
    }

    #[test]
    fn lost_board_returns_zero_without_accumulating() {
        let mut board = TicTacToeBoard::from_marks([X, X, X, O, O, E, E, E, E]);
        assert_eq!(board.score(Player::Two), 0);
        assert_eq!(board.score(Player::Two), 0);
        assert_eq!(board.scores(), [0, 0]);
    }

    #[test]
    fn scores_accumulate_across_positions() {
        // arrange
        let mut board = TicTacToeBoard::from_marks([X, X, X, O, O, E, E, E, E]);
        assert_eq!(board.score(Player::One), 4);

        // act
        for i in 0..9 {
            board.set_cell(i, E).unwrap();
        }
        board.set_cell(4, X).unwrap();

        // assert
        assert_eq!(board.score(Player::One), 5);
    }

    #[test]
    fn opponent_threat_outranks_own_threat() {
        // X threatens the top row, O threatens the middle row
        let mut board = TicTacToeBoard::from_marks([X, X, E, O, O, E, X, E, E]);
        assert_eq!(board.score(Player::One), 3);
        assert_eq!(board.score(Player::Two), 3);
    }

    #[test]
    fn own_threat_scores_two() {
        let mut board = TicTacToeBoard::from_marks([X, X, E, E, O, E, E, E, E]);
        assert_eq!(board.score(Player::One), 2);
        assert_eq!(board.score(Player::Two), 3);
    }

    #[test]
    fn neutral_position_scores_one() {
        let mut board = TicTacToeBoard::from_marks([X, E, E, E, O, E, E, E, E]);
        assert_eq!(board.score(Player::One), 1);
        assert_eq!(board.score(Player::One), 2);
        assert_eq!(board.scores(), [2, 0]);
    }

    #[test]
    fn draw_scores_as_neutral() {
        let mut board = TicTacToeBoard::from_marks([X, O, X, O, X, O, O, X, O]);
        assert_eq!(board.score(Player::Two), 1);
    }
}
