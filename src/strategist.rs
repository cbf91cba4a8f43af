use crate::model::GameModel;
use crate::random::{RandomGenerator, StandardRandomGenerator};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, instrument};

/// A move-choosing algorithm plugged into a [`GameModel`].
///
/// Strategists may explore by applying and undoing moves on `model`, but must hand it back
/// in the state they received it. A strategist that honours `cancel` should return `None`
/// soon after it is cancelled.
pub trait Strategist<G: GameModel> {
    /// Picks a move for `model.active_player()`, or `None` if there is nothing to play.
    fn best_move(&mut self, model: &mut G, cancel: &CancelToken) -> Option<G::Move>;
}

/// Shared flag asking a running search to stop.
///
/// Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Plays a uniformly random legal move.
#[derive(Debug, Default)]
pub struct RandomStrategist<K: RandomGenerator = StandardRandomGenerator> {
    random: K,
}

impl<K: RandomGenerator> RandomStrategist<K> {
    pub fn new(random: K) -> Self {
        Self { random }
    }
}

impl<G: GameModel, K: RandomGenerator> Strategist<G> for RandomStrategist<K> {
    #[instrument(level = "debug", skip_all)]
    fn best_move(&mut self, model: &mut G, cancel: &CancelToken) -> Option<G::Move> {
        if cancel.is_cancelled() || model.is_terminal() {
            return None;
        }
        let moves = model.legal_moves();
        let chosen = self.random.choose(&moves).cloned();
        debug!(candidates = moves.len(), ?chosen, "picked random move");
        chosen
    }
}
