//! Error types for board access, the game session and configuration.

/// Contract violations on a [`TicTacToeBoard`](crate::boards::tic_tac_toe::TicTacToeBoard).
///
/// Both variants are programming errors in the caller: a coordinate-mapping bug or a
/// move that was not sourced from `legal_moves()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// A cell index outside `0..=8`.
    #[display("Cell index {_0} is out of range (must be 0-8)")]
    OutOfRange(#[error(not(source))] usize),

    /// A move onto a cell that is already occupied.
    #[display("Cell {_0} is already occupied")]
    IllegalMove(#[error(not(source))] usize),

    /// A player index other than 0 or 1.
    #[display("Player index {_0} is out of range (must be 0 or 1)")]
    NoSuchPlayer(#[error(not(source))] usize),
}

/// Errors reported by a [`GameSession`](crate::session::GameSession).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SessionError {
    /// The game is already won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// A move was played from the interactive side while the computer is to move.
    #[display("It is the computer's turn")]
    ComputerTurn,

    /// The move is not among the legal moves of the live board.
    #[display("Move {_0} is not legal on the current board")]
    IllegalMove(#[error(not(source))] String),

    /// The strategist found nothing to play.
    #[display("Strategist returned no move")]
    NoMoveAvailable,

    /// The search was cancelled before it produced a move.
    #[display("Search was cancelled")]
    Cancelled,

    /// The live board changed while the search was running.
    #[display("Search started at revision {expected} but the board is at revision {found}")]
    StaleSearch {
        /// Revision the search was started from.
        expected: u64,
        /// Revision of the live board at commit time.
        found: u64,
    },

    /// The background worker went away without reporting a result.
    #[display("Search worker terminated without a result")]
    WorkerLost,
}

/// Errors that can occur when loading a [`SessionConfig`](crate::config::SessionConfig).
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ConfigError {
    /// The TOML document could not be parsed.
    #[display("Failed to parse config: {_0}")]
    Parse(toml::de::Error),

    /// A value parsed but is out of bounds.
    #[display("Config validation error: {_0}")]
    #[from(ignore)]
    Validation(#[error(not(source))] String),
}
