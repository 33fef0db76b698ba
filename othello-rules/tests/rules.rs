use othello_rules::test_utils::random_playout;
use othello_rules::{Board, Cell, Game, Handover, Location, MoveError, Player, Score, Winner};
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;

const PLAYOUTS: u64 = 25;

fn cell(game: &Game, row: usize, col: usize) -> Cell {
    game.board().cells()[row][col]
}

#[test]
fn opening_position() {
    let game = Game::new();
    let cells = game.board().cells();

    for (row, line) in cells.iter().enumerate() {
        for (col, &c) in line.iter().enumerate() {
            let expected = match (row, col) {
                (3, 3) | (4, 4) => Cell::White,
                (3, 4) | (4, 3) => Cell::Black,
                _ => Cell::Empty,
            };
            assert_eq!(c, expected, "cell ({}, {})", row, col);
        }
    }
    assert_eq!(game.turn(), Player::Black);
}

#[test]
fn first_move_flips_center() {
    let mut game = Game::new();
    assert!(game.place_disc(2, 3).is_ok());
    assert_eq!(cell(&game, 2, 3), Cell::Black);
    assert_eq!(cell(&game, 3, 3), Cell::Black);
    assert_eq!(game.turn(), Player::White);
}

#[test]
fn unflanking_move_is_rejected() {
    let mut game = Game::new();
    let err = game.place_disc(0, 0).unwrap_err();
    assert_eq!(err, MoveError::NoFlip);
    assert_eq!(err.to_string(), "Invalid move: Must flank opponent");
    assert_eq!(game, Game::new());
    assert_eq!(game.turn(), Player::Black);
}

#[test]
fn occupied_cell_is_rejected() {
    let mut game = Game::new();
    let err = game.place_disc(3, 3).unwrap_err();
    assert_eq!(err, MoveError::CellOccupied);
    assert_eq!(err.to_string(), "Cell occupied");
    assert_eq!(game, Game::new());
}

#[test]
fn out_of_bounds_is_rejected() {
    let mut game = Game::new();
    for &(row, col) in &[(-1, 0), (0, -1), (8, 0), (0, 8), (i64::MAX, i64::MIN)] {
        let err = game.place_disc(row, col).unwrap_err();
        assert_eq!(err, MoveError::OutOfBounds);
        assert_eq!(err.to_string(), "Invalid position");
    }
    assert_eq!(game, Game::new());
}

#[test]
fn move_after_game_over_is_rejected() {
    let board: Board = format!("XO{}", "-".repeat(62)).parse().unwrap();
    let mut game = Game::from_position(board, Player::Black);
    game.place_disc(0, 2).unwrap();
    assert!(game.is_over());

    let before = game;
    let err = game.place_disc(5, 5).unwrap_err();
    assert_eq!(err, MoveError::GameOver);
    assert_eq!(err.to_string(), "Game is over");
    assert_eq!(game, before);
}

#[test]
fn reset_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(11);
    let (mut game, _) = random_playout(&mut rng).unwrap();
    game.reset();
    assert_eq!(game.snapshot(), Game::new().snapshot());
    game.reset();
    assert_eq!(game.snapshot(), Game::new().snapshot());
}

#[test]
fn legality_matches_valid_moves() {
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..PLAYOUTS {
        let mut game = Game::new();
        while !game.is_over() {
            let moves = game.valid_moves();

            for loc in Location::all() {
                let before = game.board();
                let mut trial = game;
                match trial.play(loc) {
                    Ok(placement) => {
                        assert!(moves.contains(loc), "{} accepted but not listed", loc);
                        let after = trial.board();
                        let mover = Cell::from(placement.player);
                        for other in Location::all() {
                            let changed = before.cell(other) != after.cell(other);
                            let expected = other == loc || placement.flipped.contains(other);
                            assert_eq!(changed, expected, "{} changed unexpectedly", other);
                            if expected {
                                assert_eq!(after.cell(other), mover);
                            }
                        }
                    }
                    Err(_) => {
                        assert!(!moves.contains(loc), "{} listed but rejected", loc);
                        assert_eq!(trial, game);
                    }
                }
            }

            let loc = moves.choose(&mut rng).unwrap();
            game.play(loc).unwrap();
        }
    }
}

#[test]
fn turn_passes_at_most_once() {
    let mut rng = StdRng::seed_from_u64(5);

    for _ in 0..PLAYOUTS {
        let mut game = Game::new();
        while let Some(loc) = game.valid_moves().choose(&mut rng) {
            let mover = game.turn();
            let placement = game.play(loc).unwrap();
            let board = game.board();

            match placement.handover {
                Handover::Opponent => {
                    assert_eq!(game.turn(), !mover);
                    assert!(board.has_legal_move(!mover));
                }
                Handover::Pass => {
                    assert_eq!(game.turn(), mover);
                    assert!(!board.has_legal_move(!mover));
                    assert!(board.has_legal_move(mover));
                }
                Handover::GameOver(_) => {
                    assert!(game.is_over());
                    assert!(!board.has_legal_move(mover));
                    assert!(!board.has_legal_move(!mover));
                }
            }
        }
    }
}

#[test]
fn score_accounts_for_every_cell() {
    let mut rng = StdRng::seed_from_u64(9);

    for _ in 0..PLAYOUTS {
        let mut game = Game::new();
        loop {
            let Score { black, white } = game.score();
            assert_eq!(black + white + game.empty_count(), 64);

            match game.valid_moves().choose(&mut rng) {
                Some(loc) => {
                    game.play(loc).unwrap();
                }
                None => break,
            }
        }
    }
}

#[test]
fn winner_follows_final_score() {
    let mut rng = StdRng::seed_from_u64(13);

    for _ in 0..PLAYOUTS {
        let (game, placements) = random_playout(&mut rng).unwrap();
        let Score { black, white } = game.score();
        let expected = if black > white {
            Winner::Black
        } else if white > black {
            Winner::White
        } else {
            Winner::Tie
        };

        assert_eq!(game.winner(), Some(expected));
        assert_eq!(
            placements.last().map(|p| p.handover),
            Some(Handover::GameOver(expected))
        );
        assert!(game.valid_moves().is_empty());
    }
}
