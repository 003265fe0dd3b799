//! Move outcomes and errors.

use super::position::Position;
use super::types::{GameStatus, Player};
use serde::{Deserialize, Serialize};

/// Error that can occur when applying a move.
///
/// The board is never mutated on the error path.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    OutOfTurn(Player),
}

impl std::error::Error for MoveError {}

/// Outcome of a single placed mark.
///
/// Carries everything the presentation layer needs to render the turn:
/// who moved where, the freshly derived status, and the completed line
/// to highlight when the move won the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// The player who moved.
    pub player: Player,
    /// Where the mark was placed.
    pub position: Position,
    /// Status of the game after the move.
    pub status: GameStatus,
    /// The three winning cells, when the game is won.
    pub winning_line: Option<[Position; 3]>,
}
