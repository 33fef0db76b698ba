//! `othello-rules` implements the rules of Othello for engines and UIs.
//!
//! This package implements three levels of abstraction:
//!
//!  - [`bitboard`] contains the raw, unchecked operations for working with Othello boards:
//!    compass steps, the flanking walk, move masks and move application.
//!  - [`Board`] pairs one bitboard per colour and offers a per-cell view of the position.
//!    It applies moves without knowing whose turn it is.
//!  - [`Game`] is the checked interface to all of the Othello game logic: turn order,
//!    automatic passes, the end of the game and scoring. Clients should use it.
pub mod bitboard;
pub mod test_utils;

mod board;
mod error;
mod game;
mod location;
mod snapshot;
mod utils;

pub use board::*;
pub use error::*;
pub use game::*;
pub use location::*;
pub use snapshot::*;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;
