//! Single-player tic-tac-toe engine with a minimax computer opponent.
//!
//! The human plays X, the computer plays O. Rendering and event wiring
//! belong to an embedding presentation layer; this crate supplies the
//! pieces it drives:
//!
//! - **Game core**: board, turn bookkeeping, and win/draw rules, with
//!   the status always derived from the board.
//! - **Move selection**: an exhaustive minimax search blended with
//!   uniformly random play through a [`Difficulty`] probability.
//! - **Session**: a [`GameSession`] owning the game, the difficulty,
//!   and a seeded random source, exposing the human move, the delayed
//!   computer reply, difficulty updates, and restart.
//!
//! # Example
//!
//! ```no_run
//! use solo_tictactoe::{Difficulty, GameSession, Position};
//!
//! # async fn example() -> Result<(), solo_tictactoe::MoveError> {
//! let mut session = GameSession::new(Difficulty::PERFECT);
//! session.play_human(Position::Center)?;
//! let reply = session.play_ai().await?;
//! println!("{} -> {}", reply.position, session.status_message());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod ai;
mod game;
mod session;

// Crate-level exports - AI move selection
pub use ai::{Difficulty, DifficultyError, best_move, select_move};

// Crate-level exports - Game core
pub use game::{
    Board, Game, GameStatus, LINES, MoveError, Player, Position, Square, TurnReport, check_winner,
    evaluate, is_full, winning_line, wins,
};

// Crate-level exports - Session
pub use session::{AI_MOVE_DELAY, GameSession};
