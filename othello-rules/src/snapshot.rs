//! A serializable picture of a [`crate::Game`] for clients.

use crate::board::Cell;
use crate::game::{Player, Score, Winner};
use crate::EDGE_LENGTH;
use serde::Serialize;

/// Everything a client needs to render a game.
///
/// Serializes with the front-end's numeric codes: cells and players are
/// 0 empty, 1 black, 2 white; a tied winner is 0, and a running game has
/// a `null` winner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub board: [[Cell; EDGE_LENGTH]; EDGE_LENGTH],
    pub current_turn: Player,
    pub game_over: bool,
    pub winner: Option<Winner>,
    pub scores: Score,
    pub valid_moves: Vec<(usize, usize)>,
}
