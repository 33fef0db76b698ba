use derive_more::{Display, Error};

/// Why a placement was rejected. A rejected placement never changes the game.
///
/// The `Display` text of each variant is the reason reported to clients.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, Error)]
pub enum MoveError {
    /// The game has already ended.
    #[display(fmt = "Game is over")]
    GameOver,
    /// The coordinates are off the board.
    #[display(fmt = "Invalid position")]
    OutOfBounds,
    /// The target location already holds a piece.
    #[display(fmt = "Cell occupied")]
    CellOccupied,
    /// The move would not flank any opponent pieces.
    #[display(fmt = "Invalid move: Must flank opponent")]
    NoFlip,
}
