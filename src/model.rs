use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// The central trait of the library, defining the interface a game exposes to an
/// adversarial search engine.
///
/// A search engine needs exactly six things from a game: enumerate moves, apply a move,
/// undo it, detect a terminal position, evaluate a position and tell whose turn it is.
/// Engines explore one mutable model in place, so `undo_move` must be the exact inverse
/// of `apply_move` for the same model state.
pub trait GameModel: Clone {
    /// The type representing a move in the game.
    type Move: Clone + Debug + PartialEq;

    /// The type identifying a participant. Both participants live for the whole game.
    type Player: Copy + Debug + PartialEq;

    /// Returns both participants, the one who moves first at index 0.
    fn players(&self) -> [Self::Player; 2];

    /// Returns the player whose turn it is to make a move.
    fn active_player(&self) -> Self::Player;

    /// Returns every legal move from the current state, in a stable order.
    ///
    /// An empty list means no move can be made.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Applies a move obtained from [`GameModel::legal_moves`] on this exact state.
    ///
    /// # Panics
    ///
    /// Implementations panic when handed a move that is not legal here.
    fn apply_move(&mut self, m: &Self::Move);

    /// Retracts a move previously applied with [`GameModel::apply_move`].
    fn undo_move(&mut self, m: &Self::Move);

    /// Returns the current outcome of the game, recomputed on every call.
    fn outcome(&self) -> Outcome<Self::Player>;

    /// Evaluates the position for `player`. Higher is better for that player.
    fn score(&mut self, player: Self::Player) -> i32;

    /// Returns the other participant.
    fn opponent(&self, player: Self::Player) -> Self::Player {
        let [first, second] = self.players();
        if player == first { second } else { first }
    }

    /// Returns `true` once the game is won or drawn.
    fn is_terminal(&self) -> bool {
        self.outcome().is_terminal()
    }
}

/// Represents the possible outcomes of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome<P> {
    /// The given player completed a winning pattern.
    Winner(P),
    /// The game ended with no winner.
    Draw,
    /// The game is still ongoing.
    Playing,
}

impl<P: Copy> Outcome<P> {
    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<P> {
        match self {
            Outcome::Winner(p) => Some(*p),
            Outcome::Draw | Outcome::Playing => None,
        }
    }

    /// Returns `true` for `Winner` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Playing)
    }
}
