//! Pure game rules: win patterns, draw detection, status derivation.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, winning_line, wins};

use super::types::{Board, GameStatus};
use tracing::instrument;

/// Derives the game status from the board.
///
/// Recomputed from scratch on every call rather than maintained
/// incrementally, so the status can never drift out of sync with the
/// board.
#[instrument]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
