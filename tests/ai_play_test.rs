//! End-to-end play tests for the search and selection policy.

use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use solo_tictactoe::{
    Difficulty, Game, GameStatus, Player, Position, Square, best_move, select_move, wins,
};

#[test]
fn test_minimax_vs_minimax_draws() {
    let mut game = Game::new();
    while !game.status().is_over() {
        let pos = best_move(game.board(), game.to_move()).unwrap();
        game.make_move(pos).unwrap();
    }
    assert_eq!(game.status(), GameStatus::Draw);
}

#[test]
fn test_ai_never_loses_to_random_play() {
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..20 {
        let mut game = Game::new();
        while !game.status().is_over() {
            let pos = if game.to_move() == Player::HUMAN {
                *Position::valid_moves(game.board()).choose(&mut rng).unwrap()
            } else {
                best_move(game.board(), Player::AI).unwrap()
            };
            game.make_move(pos).unwrap();

            // Two simultaneous winners are impossible under
            // alternating turns.
            assert!(!(wins(game.board(), Player::X) && wins(game.board(), Player::O)));
        }
        assert_ne!(game.status(), GameStatus::Won(Player::HUMAN));
    }
}

#[test]
fn test_blended_difficulty_plays_legal_games() {
    let mut rng = StdRng::seed_from_u64(7);
    let difficulty = Difficulty::new(0.5).unwrap();

    for _ in 0..10 {
        let mut game = Game::new();
        while !game.status().is_over() {
            let pos = if game.to_move() == Player::HUMAN {
                Position::valid_moves(game.board())[0]
            } else {
                select_move(game.board(), difficulty, &mut rng).unwrap()
            };
            let report = game.make_move(pos).unwrap();

            assert_eq!(
                game.board().get(report.position),
                Square::Occupied(report.player)
            );
            let x = game.board().count(Square::Occupied(Player::X));
            let o = game.board().count(Square::Occupied(Player::O));
            assert!(x.abs_diff(o) <= 1);
        }
    }
}
