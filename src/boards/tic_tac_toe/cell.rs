//! Cell and player primitives.

use serde::{Deserialize, Serialize};

/// The value held by a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display)]
pub enum Cell {
    /// Mark placed by [`Player::One`].
    X,
    /// Mark placed by [`Player::Two`].
    O,
    /// Nobody has played here yet.
    #[default]
    #[strum(to_string = "_")]
    Empty,
}

impl Cell {
    /// Returns the player owning this mark, `None` for an empty cell.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::One),
            Cell::O => Some(Player::Two),
            Cell::Empty => None,
        }
    }

    /// Returns the other mark. `Empty` stays `Empty`.
    pub fn swapped(self) -> Self {
        match self {
            Cell::X => Cell::O,
            Cell::O => Cell::X,
            Cell::Empty => Cell::Empty,
        }
    }
}

/// One of the two fixed participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// Moves first and plays [`Cell::X`].
    #[strum(to_string = "Player 1")]
    One,
    /// Moves second and plays [`Cell::O`].
    #[strum(to_string = "Player 2")]
    Two,
}

impl Player {
    /// Both players, in turn order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// Returns the mark this player places.
    pub fn mark(self) -> Cell {
        match self {
            Player::One => Cell::X,
            Player::Two => Cell::O,
        }
    }

    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Index into per-player tables.
    pub(crate) fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

/// A board cell together with the caller's presentation tag.
///
/// The tag is opaque to the game model: it is stored, copied and handed back, never read.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoardCell<T = ()> {
    /// Current occupant.
    pub value: Cell,
    /// Caller-owned metadata, such as the name of a UI node.
    pub tag: T,
}

impl<T> BoardCell<T> {
    /// Creates an empty cell carrying `tag`.
    pub fn empty(tag: T) -> Self {
        Self {
            value: Cell::Empty,
            tag,
        }
    }

    /// Creates a cell with the given value and tag.
    pub fn new(value: Cell, tag: T) -> Self {
        Self { value, tag }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn players_map_to_marks_both_ways() {
        for player in Player::ALL {
            assert_eq!(player.mark().owner(), Some(player));
        }
        assert_eq!(Cell::Empty.owner(), None);
    }

    #[test]
    fn opponent_alternates() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent(), Player::One);
    }

    #[test]
    fn display_names() {
        assert_eq!(Player::One.to_string(), "Player 1");
        assert_eq!(Cell::O.to_string(), "O");
        assert_eq!(Cell::Empty.to_string(), "_");
    }
}
