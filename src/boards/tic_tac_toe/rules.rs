//! Win, draw and threat detection over a row-major 3x3 grid.

use super::cell::{Cell, Player};
use crate::model::Outcome;

/// Every winning triple, in the order they are checked: rows, columns, diagonals.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Classifies a grid. A completed line takes priority over a full board.
pub fn determine_outcome(grid: &[Cell; 9]) -> Outcome<Player> {
    for [a, b, c] in LINES {
        let first = grid[a];
        if first != Cell::Empty && first == grid[b] && first == grid[c] {
            if let Some(winner) = first.owner() {
                return Outcome::Winner(winner);
            }
        }
    }

    if grid.contains(&Cell::Empty) {
        Outcome::Playing
    } else {
        Outcome::Draw
    }
}

/// Returns `true` if some line holds two of `mark` and one empty cell.
///
/// This does not look at whose turn it is; it answers whether `mark` could complete a
/// line with one more placement.
pub fn is_one_move_from_winning(grid: &[Cell; 9], mark: Cell) -> bool {
    if mark == Cell::Empty {
        return false;
    }

    LINES.iter().any(|line| {
        let mine = line.iter().filter(|&&i| grid[i] == mark).count();
        let empty = line.iter().filter(|&&i| grid[i] == Cell::Empty).count();
        mine == 2 && empty == 1
    })
}
