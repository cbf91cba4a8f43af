//! Contains implementations of the `GameModel` trait.

/// A `GameModel` implementation for the game of Tic-Tac-Toe.
pub mod tic_tac_toe;
