//! A live game shared between an interactive front end and a background strategist.
//!
//! The session owns the one board that front ends read and write. Human moves are applied
//! with [`GameSession::play`]. Computer moves are searched on a copy of the board in a
//! worker thread and then committed with [`GameSession::commit`], which refuses the
//! result if the live board changed in the meantime. Every mutation (mark placed and turn
//! passed) happens inside a single critical section, so readers never observe half a move.

use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::model::{GameModel, Outcome};
use crate::strategist::{CancelToken, Strategist};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, instrument, warn};

struct Live<G> {
    board: G,
    revision: u64,
    wins: [u32; 2],
}

/// A single live game.
pub struct GameSession<G: GameModel> {
    live: Arc<Mutex<Live<G>>>,
    computer: Option<G::Player>,
    min_think_time: Duration,
}

/// A builder for creating instances of `GameSession`.
pub struct GameSessionBuilder<G: GameModel> {
    board: G,
    computer_seat: Option<usize>,
    computer_player: Option<G::Player>,
    min_think_time: Duration,
}

impl<G: GameModel> GameSessionBuilder<G> {
    /// Creates a new builder around the initial board. By default the second player is
    /// computer-controlled and there is no minimum think time.
    pub fn new(board: G) -> Self {
        Self::with_config(board, &SessionConfig::default())
    }

    fn with_config(board: G, config: &SessionConfig) -> Self {
        Self {
            board,
            computer_seat: config.computer_seat,
            computer_player: None,
            min_think_time: config.min_think_time(),
        }
    }

    /// Applies every setting from `config`.
    pub fn with_session_config(mut self, config: &SessionConfig) -> Self {
        self.computer_seat = config.computer_seat;
        self.computer_player = None;
        self.min_think_time = config.min_think_time();
        self
    }

    /// Hands control of `player` to the computer.
    pub fn with_computer_player(mut self, player: G::Player) -> Self {
        self.computer_player = Some(player);
        self.computer_seat = None;
        self
    }

    /// Makes both players human.
    pub fn without_computer(mut self) -> Self {
        self.computer_player = None;
        self.computer_seat = None;
        self
    }

    /// Sets the minimum time a computer move takes.
    pub fn with_min_think_time(mut self, min_think_time: Duration) -> Self {
        self.min_think_time = min_think_time;
        self
    }

    /// Builds the `GameSession` instance with the configured parameters.
    pub fn build(self) -> GameSession<G> {
        let computer = self.computer_player.or_else(|| {
            self.computer_seat
                .and_then(|seat| self.board.players().get(seat).copied())
        });
        GameSession {
            live: Arc::new(Mutex::new(Live {
                board: self.board,
                revision: 0,
                wins: [0; 2],
            })),
            computer,
            min_think_time: self.min_think_time,
        }
    }
}

/// A computer move being searched in the background.
pub struct PendingMove<G: GameModel, S> {
    revision: u64,
    cancel: CancelToken,
    rx: Receiver<(Option<G::Move>, S)>,
    ready: Option<(Option<G::Move>, S)>,
}

impl<G: GameModel, S> PendingMove<G, S> {
    /// Asks the strategist to stop. The pending move then commits as `Cancelled`.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Returns `true` once the worker has reported, without blocking.
    pub fn is_ready(&mut self) -> bool {
        if self.ready.is_some() {
            return true;
        }
        match self.rx.try_recv() {
            Ok(result) => {
                self.ready = Some(result);
                true
            }
            Err(TryRecvError::Empty) => false,
            // A lost worker is reported by commit.
            Err(TryRecvError::Disconnected) => true,
        }
    }

    /// Revision of the live board the search was started from.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

/// A computer move that was applied to the live board.
#[derive(Debug)]
pub struct CommittedMove<G: GameModel, S> {
    /// The move played.
    pub played: G::Move,
    /// Outcome of the live board right after the move.
    pub outcome: Outcome<G::Player>,
    /// The strategist, handed back for the next turn.
    pub strategist: S,
}

impl<G: GameModel> GameSession<G> {
    /// Returns a new builder for `GameSession`.
    pub fn builder(board: G) -> GameSessionBuilder<G> {
        GameSessionBuilder::new(board)
    }

    /// Creates a session configured from `config`.
    pub fn from_config(board: G, config: &SessionConfig) -> Self {
        GameSessionBuilder::with_config(board, config).build()
    }

    fn lock(&self) -> MutexGuard<'_, Live<G>> {
        self.live.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns an independent copy of the live board.
    pub fn snapshot(&self) -> G {
        self.lock().board.clone()
    }

    /// Returns the outcome of the live board.
    pub fn outcome(&self) -> Outcome<G::Player> {
        self.lock().board.outcome()
    }

    /// Returns the player to move on the live board.
    pub fn active_player(&self) -> G::Player {
        self.lock().board.active_player()
    }

    /// Number of mutations applied to the live board so far.
    pub fn revision(&self) -> u64 {
        self.lock().revision
    }

    /// Games won by each player since the session was built, indexed like
    /// [`GameModel::players`]. The tally survives [`GameSession::new_game`].
    pub fn wins(&self) -> [u32; 2] {
        self.lock().wins
    }

    /// Returns the computer-controlled player, if any.
    pub fn computer_player(&self) -> Option<G::Player> {
        self.computer
    }

    /// Returns `true` if the game is still running and the computer is to move.
    pub fn is_computer_turn(&self) -> bool {
        let live = self.lock();
        !live.board.is_terminal() && Some(live.board.active_player()) == self.computer
    }

    /// Applies a human move to the live board and returns the resulting outcome.
    ///
    /// Refused with [`SessionError::ComputerTurn`] while the computer-controlled player is
    /// to move; computer moves go through [`GameSession::commit`].
    #[instrument(level = "debug", skip(self))]
    pub fn play(&self, m: &G::Move) -> Result<Outcome<G::Player>, SessionError> {
        let mut live = self.lock();
        if !live.board.is_terminal() && Some(live.board.active_player()) == self.computer {
            warn!(?m, "rejected human move on the computer's turn");
            return Err(SessionError::ComputerTurn);
        }
        Self::apply_checked(&mut live, m)
    }

    /// Replaces the live board with a fresh game.
    #[instrument(level = "debug", skip_all)]
    pub fn new_game(&self, board: G) {
        let mut live = self.lock();
        live.board = board;
        live.revision += 1;
        debug!(revision = live.revision, "started new game");
    }

    /// Starts searching for a move for the active player on a copy of the live board.
    ///
    /// The strategist runs on its own thread and never touches the live board.
    #[instrument(level = "debug", skip_all)]
    pub fn request_computer_move<S>(&self, strategist: S) -> PendingMove<G, S>
    where
        G: Send + 'static,
        G::Move: Send + 'static,
        S: Strategist<G> + Send + 'static,
    {
        let (mut model, revision) = {
            let live = self.lock();
            (live.board.clone(), live.revision)
        };
        let cancel = CancelToken::new();
        let worker_cancel = cancel.clone();
        let min_think_time = self.min_think_time;
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let started = Instant::now();
            let mut strategist = strategist;
            let chosen = strategist.best_move(&mut model, &worker_cancel);
            let elapsed = started.elapsed();
            if elapsed < min_think_time && !worker_cancel.is_cancelled() {
                thread::sleep(min_think_time - elapsed);
            }
            debug!(?chosen, ?elapsed, "search finished");
            // The receiver may already be gone if the pending move was dropped.
            let _ = tx.send((chosen, strategist));
        });

        PendingMove {
            revision,
            cancel,
            rx,
            ready: None,
        }
    }

    /// Waits for a pending search and applies its move to the live board.
    ///
    /// Fails with [`SessionError::StaleSearch`] if the live board was changed after the
    /// search started.
    #[instrument(level = "debug", skip_all, fields(revision = pending.revision))]
    pub fn commit<S>(&self, pending: PendingMove<G, S>) -> Result<CommittedMove<G, S>, SessionError> {
        let PendingMove {
            revision,
            cancel,
            rx,
            ready,
        } = pending;
        let (chosen, strategist) = match ready {
            Some(result) => result,
            None => rx.recv().map_err(|_| SessionError::WorkerLost)?,
        };

        let played = match chosen {
            Some(m) => m,
            None if cancel.is_cancelled() => return Err(SessionError::Cancelled),
            None => return Err(SessionError::NoMoveAvailable),
        };

        let mut live = self.lock();
        if live.revision != revision {
            warn!(
                expected = revision,
                found = live.revision,
                "discarding search result for an outdated board"
            );
            return Err(SessionError::StaleSearch {
                expected: revision,
                found: live.revision,
            });
        }
        let outcome = Self::apply_checked(&mut live, &played)?;
        Ok(CommittedMove {
            played,
            outcome,
            strategist,
        })
    }

    fn apply_checked(live: &mut Live<G>, m: &G::Move) -> Result<Outcome<G::Player>, SessionError> {
        if live.board.is_terminal() {
            warn!(?m, "rejected move on finished game");
            return Err(SessionError::GameOver);
        }
        if !live.board.legal_moves().contains(m) {
            warn!(?m, "rejected illegal move");
            return Err(SessionError::IllegalMove(format!("{m:?}")));
        }
        live.board.apply_move(m);
        live.revision += 1;
        let outcome = live.board.outcome();
        if let Outcome::Winner(winner) = outcome {
            if let Some(seat) = live.board.players().iter().position(|p| *p == winner) {
                live.wins[seat] += 1;
            }
        }
        debug!(?m, ?outcome, revision = live.revision, "applied move");
        Ok(outcome)
    }
}

impl<G: GameModel> Clone for GameSession<G> {
    fn clone(&self) -> Self {
        Self {
            live: Arc::clone(&self.live),
            computer: self.computer,
            min_think_time: self.min_think_time,
        }
    }
}
