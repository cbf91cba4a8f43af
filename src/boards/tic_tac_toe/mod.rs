//! Tic-tac-toe on a row-major 3x3 grid.
//!
//! ```text
//! 0 1 2
//! 3 4 5
//! 6 7 8
//! ```
//!
//! [`Player::One`] plays [`Cell::X`] and moves first.

mod board;
mod cell;
pub mod rules;
mod score;

pub use board::{CELL_COUNT, Move, TicTacToeBoard};
pub use cell::{BoardCell, Cell, Player};
