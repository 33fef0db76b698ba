//! The Othello board: one [`Bitboard`] per colour, plus a per-cell view.
//!
//! [`Board`] applies moves without checking whose turn it is or whether the
//! game is over. That bookkeeping lives in [`crate::Game`].

use crate::bitboard::{self, Bitboard, BLACK_START, WHITE_START};
use crate::game::Player;
use crate::location::{Location, LocationList};
use crate::{utils, EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error};
use serde::{Serialize, Serializer};
use std::fmt;

/// The contents of a single location.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Cell {
    /// Numeric code shared with the front-end: 0 empty, 1 black, 2 white.
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Black => 1,
            Cell::White => 2,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

/// The pieces of both colours. The two bitboards never overlap.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
}

impl Default for Board {
    /// Gets the standard opening position.
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard opening position: two pieces of each colour on the centre diagonals.
    pub const fn new() -> Self {
        Self {
            black: BLACK_START,
            white: WHITE_START,
        }
    }

    /// Get the pieces belonging to `player`.
    #[inline]
    pub fn pieces(self, player: Player) -> Bitboard {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    /// Get a mask of every occupied location.
    #[inline]
    pub fn occupied_mask(self) -> Bitboard {
        self.black | self.white
    }

    /// Get the contents of a single location.
    pub fn cell(self, loc: Location) -> Cell {
        let loc: Bitboard = loc.into();
        if self.black.intersects(loc) {
            Cell::Black
        } else if self.white.intersects(loc) {
            Cell::White
        } else {
            Cell::Empty
        }
    }

    /// Get every cell as a grid indexed by `[row][col]`.
    pub fn cells(self) -> [[Cell; EDGE_LENGTH]; EDGE_LENGTH] {
        let mut grid = [[Cell::Empty; EDGE_LENGTH]; EDGE_LENGTH];
        for loc in Location::all() {
            let (row, col) = loc.to_coords();
            grid[row][col] = self.cell(loc);
        }
        grid
    }

    /// Count the pieces belonging to `player`.
    #[inline]
    pub fn count(self, player: Player) -> u8 {
        self.pieces(player).count_occupied()
    }

    /// Count the empty locations.
    #[inline]
    pub fn count_empty(self) -> u8 {
        self.occupied_mask().count_empty()
    }

    /// Get the opponent pieces that `player` would flip by placing at `loc`.
    /// Empty if the move is illegal. Does not check that `loc` is empty.
    #[inline]
    pub fn flips(self, player: Player, loc: Location) -> Bitboard {
        bitboard::flips(self.pieces(player), self.pieces(!player), loc.into())
    }

    /// Get the legal moves for `player`, in row-major order.
    #[inline]
    pub fn legal_moves(self, player: Player) -> LocationList {
        bitboard::get_move_mask(self.pieces(player), self.pieces(!player)).into()
    }

    /// Returns whether `player` has any legal move.
    #[inline]
    pub fn has_legal_move(self, player: Player) -> bool {
        bitboard::has_move(self.pieces(player), self.pieces(!player))
    }

    /// Place a piece for `player` at `loc` and recolor `flip_mask`.
    /// `flip_mask` must come from [`Board::flips`] on this board.
    pub fn place(self, player: Player, loc: Location, flip_mask: Bitboard) -> Self {
        let (active, opponent) = bitboard::apply_move(
            self.pieces(player),
            self.pieces(!player),
            loc.into(),
            flip_mask,
        );
        match player {
            Player::Black => Self {
                black: active,
                white: opponent,
            },
            Player::White => Self {
                black: opponent,
                white: active,
            },
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(
            Location::all().map(|loc| match self.cell(loc) {
                Cell::Empty => '.',
                Cell::Black => 'X',
                Cell::White => 'O',
            }),
            f,
        )
    }
}

#[derive(Debug, PartialEq, Display, Error)]
pub enum ParseBoardError {
    #[display(fmt = "board string must describe exactly 64 locations")]
    WrongLength,
    #[display(fmt = "unrecognized board character {:?}", _0)]
    BadCharacter(#[error(not(source))] char),
}

/// Parse a board from 64 characters in row-major order: `X` for black,
/// `O` for white, and `-` or `.` for empty. Whitespace is ignored.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Self {
            black: Bitboard::EMPTY,
            white: Bitboard::EMPTY,
        };
        let mut cells = s.chars().filter(|c| !c.is_whitespace());

        for loc in Location::all() {
            let mask: Bitboard = loc.into();
            match cells.next().ok_or(ParseBoardError::WrongLength)? {
                'X' | 'x' => board.black |= mask,
                'O' | 'o' => board.white |= mask,
                '-' | '.' => {}
                c => return Err(ParseBoardError::BadCharacter(c)),
            }
        }

        if cells.next().is_some() {
            return Err(ParseBoardError::WrongLength);
        }

        debug_assert_eq!(
            board.count(Player::Black) + board.count(Player::White) + board.count_empty(),
            NUM_SPACES as u8
        );
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_cells() {
        let cells = Board::new().cells();
        assert_eq!(cells[3][3], Cell::White);
        assert_eq!(cells[4][4], Cell::White);
        assert_eq!(cells[3][4], Cell::Black);
        assert_eq!(cells[4][3], Cell::Black);

        let occupied = cells.iter().flatten().filter(|&&c| c != Cell::Empty).count();
        assert_eq!(occupied, 4);
    }

    #[test]
    fn parse_matches_opening() {
        let board: Board = "
            --------
            --------
            --------
            ---OX---
            ---XO---
            --------
            --------
            --------"
            .parse()
            .unwrap();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn parse_errors() {
        assert_eq!("X".parse::<Board>(), Err(ParseBoardError::WrongLength));
        assert_eq!(
            "-".repeat(65).parse::<Board>(),
            Err(ParseBoardError::WrongLength)
        );
        assert_eq!(
            format!("Z{}", "-".repeat(63)).parse::<Board>(),
            Err(ParseBoardError::BadCharacter('Z'))
        );
    }

    #[test]
    fn place_changes_only_move_and_flips() {
        let board = Board::new();
        let loc = Location::from_coords(2, 3).unwrap();
        let flipped = board.flips(Player::Black, loc);
        let after = board.place(Player::Black, loc, flipped);

        assert_eq!(after.cell(loc), Cell::Black);
        assert_eq!(
            after.cell(Location::from_coords(3, 3).unwrap()),
            Cell::Black
        );
        assert_eq!(after.count(Player::Black), 4);
        assert_eq!(after.count(Player::White), 1);
        assert_eq!(after.count_empty(), 59);
    }

    #[test]
    fn cell_codes() {
        assert_eq!(Cell::Empty.code(), 0);
        assert_eq!(Cell::Black.code(), 1);
        assert_eq!(Cell::White.code(), 2);
        assert_eq!(serde_json::to_string(&Cell::White).unwrap(), "2");
    }

    #[test]
    fn display_grid() {
        let text = Board::new().to_string();
        assert!(text.starts_with("   A B C D E F G H"));
        assert!(text.contains("\n 4 . . . O X . . ."));
        assert!(text.contains("\n 5 . . . X O . . ."));
    }
}
