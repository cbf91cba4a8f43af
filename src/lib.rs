//! A tic-tac-toe game model behind a generic adversarial search contract.
//!
//! The [`model::GameModel`] trait is everything a minimax-style search engine needs from a
//! game: enumerate moves, apply and undo them on one mutable state, detect the end of the
//! game, score a position and report whose turn it is. [`boards::tic_tac_toe`] implements
//! it for tic-tac-toe, including a cumulative heuristic scorer. The search engine itself
//! plugs in through [`strategist::Strategist`], and [`session::GameSession`] runs it off
//! the interactive path against a single live board.
//!
//! # Example
//!
//! ```rust
//! use tictactoe_model::boards::tic_tac_toe::{Move, Player, TicTacToeBoard};
//! use tictactoe_model::model::Outcome;
//! use tictactoe_model::random::CustomNumberGenerator;
//! use tictactoe_model::session::GameSession;
//! use tictactoe_model::strategist::RandomStrategist;
//!
//! // Create a new session; player two is played by the computer
//! let session = GameSession::builder(TicTacToeBoard::<()>::new()).build();
//!
//! // The human takes the center
//! assert_eq!(session.play(&Move::new(4)).unwrap(), Outcome::Playing);
//!
//! // The computer answers from a background thread
//! let pending = session.request_computer_move(RandomStrategist::new(CustomNumberGenerator::default()));
//! let committed = session.commit(pending).unwrap();
//! println!("The computer played {}", committed.played);
//!
//! assert_eq!(session.active_player(), Player::One);
//! assert_eq!(session.snapshot().legal_moves().len(), 7);
//! ```

/// Contains pre-made implementations of the `GameModel` trait.
pub mod boards;
/// Session configuration loaded from TOML.
pub mod config;
/// Error types for the board, the session and configuration.
pub mod error;
/// Contains the `GameModel` trait and the `Outcome` enum that define the interface for a game.
pub mod model;
/// Contains traits and implementations for random number generation.
pub mod random;
/// Drives a live game with a background computer player.
pub mod session;
/// Contains the `Strategist` trait, the seam for search engines.
pub mod strategist;
