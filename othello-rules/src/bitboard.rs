//! Low-level bitboard operations.
//!
//! [`Bitboard`] operations are unchecked: they assume the two masks they
//! are given never share a bit, and that move masks are one-hot.
//! Callers that want checked behavior should go through [`crate::Game`].
//!
//! Under the hood, all these operations work on u64 bitboards. By convention,
//! the MSB is the upper-left of the board, and uses row-major order.

use crate::{utils, NUM_SPACES};
use derive_more::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, From, Into, Not,
};
use std::fmt::{self, Display, Formatter};

/// Holds a single bit per location on an Othello board.
/// Wraps [`u64`] for efficient bit-twiddling, but avoids mixing with numerics.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    Default,
    From,
    Into,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    BitXor,
    BitXorAssign,
    Not,
)]
pub struct Bitboard(u64);

/// Starting bitboard for Black: D5 and E4.
pub const BLACK_START: Bitboard = Bitboard(0x0000000810000000);

/// Starting bitboard for White: D4 and E5.
pub const WHITE_START: Bitboard = Bitboard(0x0000001008000000);

/// Every location in the leftmost column.
const A_FILE: u64 = 0x8080808080808080;

/// Every location in the rightmost column.
const H_FILE: u64 = 0x0101010101010101;

impl Display for Bitboard {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        utils::format_grid(
            self.into_iter().map(|bit| match bit {
                false => '.',
                true => '#',
            }),
            f,
        )
    }
}

impl Bitboard {
    /// The bitboard with no locations set.
    pub const EMPTY: Self = Self(0);

    /// Count the number of occupied spaces in the bitboard.
    #[inline]
    pub fn count_occupied(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Count the number of empty spaces in the bitboard.
    #[inline]
    pub fn count_empty(self) -> u8 {
        self.0.count_zeros() as u8
    }

    /// Return true if this bitboard is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return true if this bitboard shares any location with `other`.
    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        !(self & other).is_empty()
    }
}

/// One of the eight compass directions a flanking run can travel in.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Move every location in `bitboard` one step in this direction.
    /// Locations that would leave the board are dropped rather than
    /// wrapping around onto the neighbouring row.
    #[inline]
    pub fn step(self, bitboard: Bitboard) -> Bitboard {
        let bits = bitboard.0;
        Bitboard(match self {
            Direction::North => bits << 8,
            Direction::South => bits >> 8,
            Direction::East => (bits >> 1) & !A_FILE,
            Direction::West => (bits << 1) & !H_FILE,
            Direction::NorthEast => (bits << 7) & !A_FILE,
            Direction::NorthWest => (bits << 9) & !H_FILE,
            Direction::SouthEast => (bits >> 9) & !A_FILE,
            Direction::SouthWest => (bits >> 7) & !H_FILE,
        })
    }
}

/// Compute the opponent pieces flipped if the active player places at `move_mask`.
///
/// Each direction walks outward over a run of opponent pieces. The run is
/// captured only when the walk stops on one of the active player's pieces;
/// stopping on an empty location or the board edge captures nothing.
/// An empty result means the move is illegal.
pub fn flips(active: Bitboard, opponent: Bitboard, move_mask: Bitboard) -> Bitboard {
    let mut flipped = Bitboard::EMPTY;

    for direction in Direction::ALL.iter() {
        let mut run = Bitboard::EMPTY;
        let mut cursor = direction.step(move_mask);

        while cursor.intersects(opponent) {
            run |= cursor;
            cursor = direction.step(cursor);
        }

        if cursor.intersects(active) {
            flipped |= run;
        }
    }

    flipped
}

/// Compute a mask of the legal moves for the active player from
/// masks of the active player's pieces and the opponent's pieces.
pub fn get_move_mask(active: Bitboard, opponent: Bitboard) -> Bitboard {
    let empties = !(active | opponent);

    singletons(empties)
        .filter(|&loc| !flips(active, opponent, loc).is_empty())
        .fold(Bitboard::EMPTY, |moves, loc| moves | loc)
}

/// Return true if the active player has at least one legal move.
/// Stops scanning at the first one found.
pub fn has_move(active: Bitboard, opponent: Bitboard) -> bool {
    let empties = !(active | opponent);
    singletons(empties).any(|loc| !flips(active, opponent, loc).is_empty())
}

/// Compute an updated board after a given move is made, returning new bitboards
/// for the active player and the opponent. `move_mask` must be a one-hot bitboard
/// indicating the move location, and `flip_mask` must come from [`flips`].
#[inline]
pub fn apply_move(
    active: Bitboard,
    opponent: Bitboard,
    move_mask: Bitboard,
    flip_mask: Bitboard,
) -> (Bitboard, Bitboard) {
    let new_active = active | flip_mask | move_mask;
    let new_opponent = opponent ^ flip_mask;

    (new_active, new_opponent)
}

/// Split `bitboard` into one-hot bitboards, in row-major order.
fn singletons(bitboard: Bitboard) -> impl Iterator<Item = Bitboard> {
    let mut remaining = bitboard.0;
    std::iter::from_fn(move || {
        if remaining == 0 {
            return None;
        }
        let top = 1u64 << (63 - remaining.leading_zeros());
        remaining ^= top;
        Some(Bitboard(top))
    })
}

/// Iterator for the bits in a [`Bitboard`].
#[derive(Clone, Copy, Debug)]
pub struct Bits {
    remaining: usize,
    bitboard: Bitboard,
}

impl Iterator for Bits {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let bitmask = Bitboard::from(1u64 << (self.remaining - 1));
        let bit = self.bitboard.intersects(bitmask);
        self.remaining -= 1;

        Some(bit)
    }
}

impl ExactSizeIterator for Bits {
    fn len(&self) -> usize {
        self.remaining
    }
}

/// Iterate over the bits in row-major order.
impl IntoIterator for Bitboard {
    type Item = bool;
    type IntoIter = Bits;

    fn into_iter(self) -> Self::IntoIter {
        Bits {
            remaining: NUM_SPACES,
            bitboard: self,
        }
    }
}
