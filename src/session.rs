//! Game session owned by the presentation layer.
//!
//! A [`GameSession`] bundles the game, the difficulty setting, and a
//! seeded random source into one explicit object, so nothing about a
//! running game lives in process-global state. The presentation layer
//! maps its events onto the session: a cell click onto
//! [`GameSession::play_human`] followed by [`GameSession::play_ai`], a
//! difficulty control onto [`GameSession::set_difficulty`], and a
//! restart control onto [`GameSession::restart`].

use crate::ai::{self, Difficulty};
use crate::game::{Board, Game, GameStatus, MoveError, Player, Position, TurnReport};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tracing::{info, instrument, warn};

/// Pause between the human's move and the computer's reply.
///
/// Purely cosmetic: it lets the human see their own mark land before
/// the opponent answers. Board state is untouched while it elapses.
pub const AI_MOVE_DELAY: Duration = Duration::from_millis(500);

/// A single-player game session: the human plays X, the computer
/// plays O.
#[derive(Debug)]
pub struct GameSession {
    game: Game,
    difficulty: Difficulty,
    rng: StdRng,
    thinking_delay: Duration,
}

impl GameSession {
    /// Creates a session seeded from entropy.
    #[instrument]
    pub fn new(difficulty: Difficulty) -> Self {
        let seed: u64 = rand::rng().random();
        Self::with_seed(difficulty, seed)
    }

    /// Creates a session with an explicit seed, for deterministic
    /// behavior under test.
    #[instrument]
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        info!(seed, difficulty = difficulty.value(), "Creating game session");
        Self {
            game: Game::new(),
            difficulty,
            rng: StdRng::seed_from_u64(seed),
            thinking_delay: AI_MOVE_DELAY,
        }
    }

    /// Overrides the cosmetic delay before the computer replies.
    pub fn set_thinking_delay(&mut self, delay: Duration) {
        self.thinking_delay = delay;
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.game.board()
    }

    /// Returns the current status, derived from the board.
    pub fn status(&self) -> GameStatus {
        self.game.status()
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.game.to_move()
    }

    /// Returns the three winning cells to highlight, when won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        self.game.winning_line()
    }

    /// Returns the current difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Updates the difficulty used for subsequent computer turns.
    ///
    /// Out-of-range values are clamped to the nearest bound and logged;
    /// the change never applies retroactively to moves already made.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, value: f64) -> Difficulty {
        let clamped = Difficulty::clamped(value);
        if clamped.value() != value {
            warn!(
                value,
                clamped = clamped.value(),
                "Difficulty out of range, clamped"
            );
        }
        self.difficulty = clamped;
        clamped
    }

    /// Applies the human's move at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfTurn`] when it is the computer's
    /// turn, and propagates occupied-square and game-over rejections
    /// from the engine.
    #[instrument(skip(self))]
    pub fn play_human(&mut self, pos: Position) -> Result<TurnReport, MoveError> {
        if !self.game.status().is_over() && self.game.to_move() != Player::HUMAN {
            warn!(position = %pos, "Human moved out of turn");
            return Err(MoveError::OutOfTurn(Player::HUMAN));
        }
        let report = self.game.make_move(pos)?;
        info!(position = %pos, status = %report.status, "Human move placed");
        Ok(report)
    }

    /// Waits the thinking delay, then selects and applies the
    /// computer's move.
    ///
    /// The difficulty is read once per call, so a slider change takes
    /// effect on the next computer turn, never retroactively.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] when the game has ended and
    /// [`MoveError::OutOfTurn`] when it is the human's turn.
    #[instrument(skip(self))]
    pub async fn play_ai(&mut self) -> Result<TurnReport, MoveError> {
        if self.game.status().is_over() {
            return Err(MoveError::GameOver);
        }
        if self.game.to_move() != Player::AI {
            return Err(MoveError::OutOfTurn(Player::AI));
        }

        tokio::time::sleep(self.thinking_delay).await;

        let pos = ai::select_move(self.game.board(), self.difficulty, &mut self.rng)
            .ok_or(MoveError::GameOver)?;
        let report = self.game.make_move(pos)?;
        info!(position = %pos, status = %report.status, "Computer move placed");
        Ok(report)
    }

    /// Resets the board to all-empty with X to move.
    ///
    /// The winning-line highlight clears with it, since the line is
    /// derived from the board. Difficulty and the random source carry
    /// over.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.game.reset();
    }

    /// Display text for the current state of the game.
    pub fn status_message(&self) -> String {
        match self.status() {
            GameStatus::Won(player) => format!("Player {} Wins!", player),
            GameStatus::Draw => "It's a Draw!".to_string(),
            GameStatus::InProgress => {
                if self.to_move() == Player::HUMAN {
                    "Your Turn (X)".to_string()
                } else {
                    "AI's Turn (O)".to_string()
                }
            }
        }
    }
}
