//! Implements game-level Othello logic.
//!
//! For correctness, this higher-level interface is preferred, but for
//! performance you may use [`crate::Board`] or [`crate::bitboard`] directly.

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::error::MoveError;
use crate::location::{Location, LocationList};
use crate::snapshot::Snapshot;
use serde::{Serialize, Serializer};
use std::fmt;

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Default for Player {
    /// Gets the starting player (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl Player {
    /// Numeric code shared with the front-end: 1 black, 2 white.
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            Player::Black => 1,
            Player::White => 2,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => f.write_str("Black"),
            Player::White => f.write_str("White"),
        }
    }
}

impl Serialize for Player {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

/// The result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Winner {
    Black,
    White,
    Tie,
}

impl Winner {
    /// Numeric code shared with the front-end: 1 black, 2 white, 0 for a tie.
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            Winner::Black => 1,
            Winner::White => 2,
            Winner::Tie => 0,
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::Black => f.write_str("Black"),
            Winner::White => f.write_str("White"),
            Winner::Tie => f.write_str("Tie"),
        }
    }
}

impl Serialize for Winner {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

/// Piece counts for both colours.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Score {
    pub black: u8,
    pub white: u8,
}

/// Who moves after a successful placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handover {
    /// The opponent moves next.
    Opponent,
    /// The opponent had no legal move and was skipped; the mover goes again.
    Pass,
    /// Neither player can move, so the game ended.
    GameOver(Winner),
}

/// A successful placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub player: Player,
    pub location: Location,
    pub flipped: LocationList,
    pub handover: Handover,
}

/// The complete state of an Othello game.
///
/// The game is over exactly when a winner has been recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Game {
    board: Board,
    turn: Player,
    winner: Option<Winner>,
}

impl Default for Game {
    /// Gets the opening position with Black to move.
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// The opening position with Black to move.
    pub const fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Player::Black,
            winner: None,
        }
    }

    /// Start an in-progress game from an arbitrary position.
    /// Whether anyone can move is only evaluated after the next placement.
    pub fn from_position(board: Board, turn: Player) -> Self {
        Self {
            board,
            turn,
            winner: None,
        }
    }

    #[inline]
    pub fn board(&self) -> Board {
        self.board
    }

    /// The player to move.
    #[inline]
    pub fn turn(&self) -> Player {
        self.turn
    }

    #[inline]
    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Place a piece for the player to move at zero-based `(row, col)`.
    ///
    /// Checks run in order and stop at the first failure: the game is still
    /// running, the coordinates are on the board, the location is empty, and
    /// the move flanks at least one opponent piece.
    pub fn place_disc(&mut self, row: i64, col: i64) -> Result<Placement, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let loc = Location::from_signed_coords(row, col).ok_or(MoveError::OutOfBounds)?;
        self.play(loc)
    }

    /// Place a piece for the player to move at `loc`.
    /// See [`Game::place_disc`] for the checks applied.
    pub fn play(&mut self, loc: Location) -> Result<Placement, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if self.board.occupied_mask().intersects(loc.into()) {
            return Err(MoveError::CellOccupied);
        }

        let mover = self.turn;
        let flipped = self.board.flips(mover, loc);
        if flipped.is_empty() {
            return Err(MoveError::NoFlip);
        }

        self.board = self.board.place(mover, loc, flipped);
        let handover = self.advance_turn();

        Ok(Placement {
            player: mover,
            location: loc,
            flipped: flipped.into(),
            handover,
        })
    }

    /// Hand the turn to the opponent, skipping them at most once.
    fn advance_turn(&mut self) -> Handover {
        let mover = self.turn;
        self.turn = !mover;
        if self.has_valid_moves(self.turn) {
            return Handover::Opponent;
        }

        self.turn = mover;
        if self.has_valid_moves(mover) {
            return Handover::Pass;
        }

        Handover::GameOver(self.end_game())
    }

    /// Get the legal moves for the player to move, in row-major order.
    /// Empty once the game is over.
    pub fn valid_moves(&self) -> LocationList {
        if self.is_over() {
            return LocationList::from(Bitboard::EMPTY);
        }
        self.board.legal_moves(self.turn)
    }

    fn has_valid_moves(&self, player: Player) -> bool {
        self.board.has_legal_move(player)
    }

    /// Count the pieces of each colour.
    pub fn score(&self) -> Score {
        Score {
            black: self.board.count(Player::Black),
            white: self.board.count(Player::White),
        }
    }

    pub fn empty_count(&self) -> u8 {
        self.board.count_empty()
    }

    fn end_game(&mut self) -> Winner {
        let Score { black, white } = self.score();
        let winner = if black > white {
            Winner::Black
        } else if white > black {
            Winner::White
        } else {
            Winner::Tie
        };
        self.winner = Some(winner);
        winner
    }

    /// Return to the opening position with Black to move.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Capture everything a client needs to render the game.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.cells(),
            current_turn: self.turn,
            game_over: self.is_over(),
            winner: self.winner,
            scores: self.score(),
            valid_moves: self.valid_moves().coords(),
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        match self.winner {
            Some(Winner::Tie) => write!(f, "Game over: tie"),
            Some(winner) => write!(f, "Game over: {} wins", winner),
            None => write!(f, "{} to move", self.turn),
        }
    }
}
