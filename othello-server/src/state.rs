//! The single game shared by every request.

use othello_rules::{Game, MoveError, Placement, Snapshot};
use parking_lot::Mutex;
use std::sync::Arc;

/// A cloneable handle to the process-wide game.
///
/// Every method holds the lock for the whole operation, including the
/// snapshot it returns, so concurrent callers observe some serial order of
/// whole operations and never a partial one.
#[derive(Clone, Debug, Default)]
pub struct SharedGame {
    game: Arc<Mutex<Game>>,
}

impl SharedGame {
    pub fn new(game: Game) -> Self {
        Self {
            game: Arc::new(Mutex::new(game)),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        self.game.lock().snapshot()
    }

    /// Place a piece for the player to move, then capture the resulting state.
    /// On failure the game is untouched.
    pub fn place_disc(&self, row: i64, col: i64) -> Result<(Placement, Snapshot), MoveError> {
        let mut game = self.game.lock();
        let placement = game.place_disc(row, col)?;
        Ok((placement, game.snapshot()))
    }

    /// Start over from the opening position.
    pub fn reset(&self) -> Snapshot {
        let mut game = self.game.lock();
        game.reset();
        game.snapshot()
    }
}
