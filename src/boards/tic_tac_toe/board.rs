use super::cell::{BoardCell, Cell, Player};
use super::rules;
use crate::error::BoardError;
use crate::model::{GameModel, Outcome};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, instrument, trace};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Place the active player's mark at `cell`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Row-major cell index, `0..=8`.
    pub cell: usize,
}

impl Move {
    /// Creates a move targeting `cell`.
    pub const fn new(cell: usize) -> Self {
        Self { cell }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cell {}", self.cell)
    }
}

/// The tic-tac-toe game model.
///
/// The board is a row-major array of nine cells, each carrying an opaque caller tag `T`.
/// Alongside the grid it tracks whose turn it is and a running heuristic score per player
/// (see [`TicTacToeBoard::score`]).
///
/// Cloning copies the grid, the tags and the active player, but the clone starts with
/// both scores at zero.
pub struct TicTacToeBoard<T = ()> {
    pub(super) cells: [BoardCell<T>; CELL_COUNT],
    pub(super) active_player: Player,
    pub(super) scores: [i32; 2],
}

impl<T: Default> TicTacToeBoard<T> {
    /// Creates an empty board with `Player::One` to move.
    pub fn new() -> Self {
        Self::with_cells(std::array::from_fn(|_| BoardCell::default()))
    }
}

impl<T: Default> Default for TicTacToeBoard<T> {
    fn default() -> Self {
        TicTacToeBoard::new()
    }
}

impl TicTacToeBoard<()> {
    /// Creates an untagged board from nine cell values, `Player::One` to move.
    pub fn from_marks(marks: [Cell; CELL_COUNT]) -> Self {
        Self::with_cells(marks.map(|value| BoardCell::new(value, ())))
    }
}

impl<T: Clone> Clone for TicTacToeBoard<T> {
    fn clone(&self) -> Self {
        Self {
            cells: self.cells.clone(),
            active_player: self.active_player,
            scores: [0; 2],
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for TicTacToeBoard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TicTacToeBoard")
            .field("cells", &self.cells)
            .field("active_player", &self.active_player)
            .field("scores", &self.scores)
            .finish()
    }
}

impl<T> TicTacToeBoard<T> {
    /// Creates a board seeded with the given cells, `Player::One` to move, scores at zero.
    ///
    /// The tags are kept with their cells for the board's lifetime.
    #[instrument(level = "debug", skip(cells))]
    pub fn with_cells(cells: [BoardCell<T>; CELL_COUNT]) -> Self {
        Self {
            cells,
            active_player: Player::One,
            scores: [0; 2],
        }
    }

    /// Returns the fixed player at `index` (0 or 1).
    pub fn player_at_index(index: usize) -> Result<Player, BoardError> {
        Player::ALL
            .get(index)
            .copied()
            .ok_or(BoardError::NoSuchPlayer(index))
    }

    /// Returns `true` if `player` is the first player.
    pub fn is_player_one(&self, player: Player) -> bool {
        player == Player::ALL[0]
    }

    /// Returns the player whose turn it is.
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    /// Replaces the active player.
    pub fn set_active_player(&mut self, player: Player) {
        self.active_player = player;
    }

    /// Hands the turn to the other player. There is no game-over guard.
    pub fn toggle_active_player(&mut self) {
        self.active_player = self.active_player.opponent();
    }

    /// Returns `true` when the second player is to move.
    pub fn is_player_two_turn(&self) -> bool {
        self.active_player == Player::Two
    }

    /// Returns the value at `index`.
    pub fn cell_at(&self, index: usize) -> Result<Cell, BoardError> {
        self.cells
            .get(index)
            .map(|c| c.value)
            .ok_or(BoardError::OutOfRange(index))
    }

    /// Returns the presentation tag stored at `index`.
    pub fn tag_at(&self, index: usize) -> Result<&T, BoardError> {
        self.cells
            .get(index)
            .map(|c| &c.tag)
            .ok_or(BoardError::OutOfRange(index))
    }

    /// Writes `value` at `index` without touching the active player.
    ///
    /// This does not check that the cell is empty, so it also serves to clear a cell.
    pub fn set_cell(&mut self, index: usize, value: Cell) -> Result<(), BoardError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(BoardError::OutOfRange(index))?;
        cell.value = value;
        Ok(())
    }

    /// Returns every cell with its tag.
    pub fn cells(&self) -> &[BoardCell<T>; CELL_COUNT] {
        &self.cells
    }

    /// Returns the nine cell values, without tags.
    pub fn grid(&self) -> [Cell; CELL_COUNT] {
        std::array::from_fn(|i| self.cells[i].value)
    }

    /// Returns the running scores, indexed like [`Player::ALL`].
    pub fn scores(&self) -> [i32; 2] {
        self.scores
    }

    /// Returns one move per empty cell, in ascending cell order.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.value == Cell::Empty)
            .map(|(i, _)| Move::new(i))
            .collect()
    }

    /// Places the active player's mark at `m.cell` and passes the turn.
    ///
    /// Nothing is written when the move is rejected.
    pub fn try_apply(&mut self, m: &Move) -> Result<(), BoardError> {
        match self.cell_at(m.cell)? {
            Cell::Empty => {}
            _ => return Err(BoardError::IllegalMove(m.cell)),
        }
        let mark = self.active_player.mark();
        self.cells[m.cell].value = mark;
        trace!(cell = m.cell, %mark, "applied move");
        self.toggle_active_player();
        Ok(())
    }

    /// Places the active player's mark at `m.cell` and passes the turn.
    ///
    /// # Panics
    ///
    /// Panics if the cell is out of range or already occupied, which means the move did
    /// not come from [`TicTacToeBoard::legal_moves`] on this board state.
    pub fn apply(&mut self, m: &Move) {
        if let Err(e) = self.try_apply(m) {
            panic!("{e}");
        }
    }

    /// Clears `m.cell` and hands the turn back. Exact inverse of [`TicTacToeBoard::apply`].
    ///
    /// # Panics
    ///
    /// Panics if the cell is out of range.
    pub fn undo(&mut self, m: &Move) {
        if let Err(e) = self.set_cell(m.cell, Cell::Empty) {
            panic!("{e}");
        }
        trace!(cell = m.cell, "undid move");
        self.toggle_active_player();
    }

    /// Classifies the current position. Recomputed on every call.
    pub fn determine_outcome(&self) -> Outcome<Player> {
        rules::determine_outcome(&self.grid())
    }

    /// Returns `true` if `player` has completed a line.
    pub fn is_win_for_player(&self, player: Player) -> bool {
        self.determine_outcome() == Outcome::Winner(player)
    }

    /// Returns `true` if the opponent of `player` has completed a line.
    pub fn is_loss_for_player(&self, player: Player) -> bool {
        self.determine_outcome() == Outcome::Winner(player.opponent())
    }

    /// Returns `true` if `mark` could complete a line with one more placement.
    pub fn is_one_move_from_winning(&self, mark: Cell) -> bool {
        rules::is_one_move_from_winning(&self.grid(), mark)
    }

    /// Clears every cell, keeping the tags, and starts a fresh game with zero scores.
    #[instrument(level = "debug", skip(self))]
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.value = Cell::Empty;
        }
        self.active_player = Player::One;
        self.scores = [0; 2];
    }

    /// Returns `true` if the mark counts are consistent with strict alternation from an
    /// empty board, `Player::One` first.
    pub fn mark_counts_consistent(&self) -> bool {
        let count = |mark| self.cells.iter().filter(|c| c.value == mark).count();
        let (x, o) = (count(Cell::X), count(Cell::O));
        x == o || x == o + 1
    }
}

impl<T: Clone> TicTacToeBoard<T> {
    /// Takes the cells, tags and active player of `other`. This board's scores are kept.
    pub fn copy_from(&mut self, other: &TicTacToeBoard<T>) {
        self.cells = other.cells.clone();
        self.active_player = other.active_player;
        debug!(active_player = %self.active_player, "copied board state");
    }
}

impl<T> fmt::Display for TicTacToeBoard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                write!(f, "{}", self.cells[row * 3 + col].value)?;
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

impl<T: Clone> GameModel for TicTacToeBoard<T> {
    type Move = Move;
    type Player = Player;

    fn players(&self) -> [Player; 2] {
        Player::ALL
    }

    fn active_player(&self) -> Player {
        self.active_player
    }

    fn legal_moves(&self) -> Vec<Move> {
        TicTacToeBoard::legal_moves(self)
    }

    fn apply_move(&mut self, m: &Move) {
        self.apply(m);
    }

    fn undo_move(&mut self, m: &Move) {
        self.undo(m);
    }

    fn outcome(&self) -> Outcome<Player> {
        self.determine_outcome()
    }

    fn score(&mut self, player: Player) -> i32 {
        TicTacToeBoard::score(self, player)
    }
}
