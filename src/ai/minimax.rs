//! Exhaustive minimax search over the game tree.

use crate::game::rules;
use crate::game::{Board, Player, Position, Square};
use tracing::{debug, instrument};

const AI_WIN: i32 = 10;
const HUMAN_WIN: i32 = -10;
const DRAW: i32 = 0;

/// A candidate move and the score of its subtree.
struct ScoredMove {
    position: Option<Position>,
    score: i32,
}

/// Returns the optimal move for `player`, searching every line of play
/// to the end of the game.
///
/// Scores are a flat ±10 for a win or loss regardless of depth, so the
/// search does not prefer a quicker win over a slower guaranteed one.
/// Ties break toward the lowest board index. Returns `None` only when
/// the board is already terminal.
#[instrument]
pub fn best_move(board: &Board, player: Player) -> Option<Position> {
    let mut scratch = board.clone();
    let chosen = search(&mut scratch, player);
    debug!(position = ?chosen.position, score = chosen.score, "Search complete");
    chosen.position
}

fn search(board: &mut Board, player: Player) -> ScoredMove {
    // Terminal cases before recursing.
    if rules::wins(board, Player::HUMAN) {
        return ScoredMove {
            position: None,
            score: HUMAN_WIN,
        };
    }
    if rules::wins(board, Player::AI) {
        return ScoredMove {
            position: None,
            score: AI_WIN,
        };
    }
    let open = Position::valid_moves(board);
    if open.is_empty() {
        return ScoredMove {
            position: None,
            score: DRAW,
        };
    }

    let mut best = ScoredMove {
        position: None,
        score: if player == Player::AI {
            i32::MIN
        } else {
            i32::MAX
        },
    };
    for pos in open {
        board.set(pos, Square::Occupied(player));
        let score = search(board, player.opponent()).score;
        // Sibling candidates probe the same board; the cell must be
        // empty again before the next one.
        board.set(pos, Square::Empty);

        let improves = if player == Player::AI {
            score > best.score
        } else {
            score < best.score
        };
        if improves {
            best = ScoredMove {
                position: Some(pos),
                score,
            };
        }
    }
    best
}
