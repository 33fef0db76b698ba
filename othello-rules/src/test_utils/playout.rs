use crate::{Game, MoveError, Placement};
use rand::seq::IteratorRandom;
use rand::Rng;

/// Play uniformly random legal moves from the opening until the game ends.
/// Returns the finished game and every placement made, in order.
///
/// Fails only if the game rejects a move it listed as legal.
pub fn random_playout<R: Rng + ?Sized>(
    rng: &mut R,
) -> Result<(Game, Vec<Placement>), MoveError> {
    let mut game = Game::new();
    let mut placements = Vec::new();

    while let Some(loc) = game.valid_moves().choose(rng) {
        placements.push(game.play(loc)?);
    }

    Ok((game, placements))
}
