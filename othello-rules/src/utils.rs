//! Miscellaneous project utilities.

use crate::{EDGE_LENGTH, NUM_SPACES};
use itertools::Itertools;
use std::fmt::{self, Formatter};

/// Format 64 characters, given in row-major order, into a labelled grid:
///
/// ```text
///    A B C D E F G H
///  1 . . . . . . . .
/// ```
///
/// Fails with [`fmt::Error`] unless `cells` yields exactly 64 items.
pub fn format_grid<T: Iterator<Item = char>>(cells: T, f: &mut Formatter) -> fmt::Result {
    let cells: Vec<char> = cells.collect();
    if cells.len() != NUM_SPACES {
        return Err(fmt::Error);
    }

    write!(f, "   A B C D E F G H")?;
    for (row, chunk) in cells.chunks(EDGE_LENGTH).enumerate() {
        write!(f, "\n {} {}", row + 1, chunk.iter().join(" "))?;
    }
    Ok(())
}
