//! "Perft" performance test: count the number of leaves at a given depth.
//! Useful for checking move generation against published counts.
//! See: http://www.aartbik.com/MISC/reversi.html
//!
//! Passes are taken automatically by [`Game`] and do not use up a ply, so
//! counts match the published ones only until the first pass (depth 9).

use crate::Game;

pub fn run_perft(depth: u64) -> u64 {
    leaves_below(Game::new(), depth)
}

fn leaves_below(game: Game, depth: u64) -> u64 {
    // Leaf node for this depth, or a finished game
    if depth == 0 || game.is_over() {
        return 1;
    }

    game.valid_moves()
        .map(|loc| {
            let mut child = game;
            match child.play(loc) {
                Ok(_) => leaves_below(child, depth - 1),
                Err(_) => 0,
            }
        })
        .sum()
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(3), 56);
}

#[test]
fn perft_04() {
    assert_eq!(run_perft(4), 244);
}

#[test]
fn perft_05() {
    assert_eq!(run_perft(5), 1396);
}

#[test]
fn perft_06() {
    assert_eq!(run_perft(6), 8200);
}

#[test]
fn perft_07() {
    assert_eq!(run_perft(7), 55092);
}
