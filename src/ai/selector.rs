//! Move selection policy for the computer opponent.

use super::difficulty::Difficulty;
use super::minimax;
use crate::game::{Board, Player, Position};
use rand::Rng;
use rand::prelude::IndexedRandom;
use tracing::{debug, instrument};

/// Picks the computer's next move.
///
/// With probability `difficulty` the move comes from the exhaustive
/// search; otherwise it is drawn uniformly from the empty squares.
/// The difficulty roll and the uniform draw both come from `rng`, so a
/// seeded source makes the selection deterministic under test.
///
/// Returns `None` when the board has no empty square or is already
/// won; callers are expected to invoke this only on a game in
/// progress.
#[instrument(skip(rng))]
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Position> {
    let open = Position::valid_moves(board);
    if open.is_empty() {
        return None;
    }

    if rng.random::<f64>() < difficulty.value() {
        minimax::best_move(board, Player::AI)
    } else {
        let pos = open.choose(rng).copied();
        debug!(position = ?pos, "Chose random move");
        pos
    }
}
