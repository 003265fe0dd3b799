//! Game engine: board mutation and turn bookkeeping.

use super::action::{MoveError, TurnReport};
use super::position::Position;
use super::rules;
use super::types::{Board, GameStatus, Player, Square};
use tracing::instrument;

/// A tic-tac-toe game: the board plus whose-turn bookkeeping.
///
/// The status is not stored; [`Game::status`] derives it from the
/// board on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    to_move: Player,
    history: Vec<Position>,
}

impl Game {
    /// Creates a new game with an empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the positions played so far, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Derives the current status from the board.
    pub fn status(&self) -> GameStatus {
        rules::evaluate(&self.board)
    }

    /// Returns the three winning cells, when the game is won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        rules::winning_line(&self.board).map(|(_, line)| line)
    }

    /// Places the current player's mark at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the game has ended and
    /// [`MoveError::SquareOccupied`] if the square is taken. The board
    /// is untouched in both cases.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn make_move(&mut self, pos: Position) -> Result<TurnReport, MoveError> {
        if self.status().is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.to_move;
        self.board.set(pos, Square::Occupied(player));
        self.history.push(pos);
        self.to_move = player.opponent();

        // X moves first, so the mark counts may differ by at most one.
        debug_assert!(
            self.board
                .count(Square::Occupied(Player::X))
                .abs_diff(self.board.count(Square::Occupied(Player::O)))
                <= 1
        );

        Ok(TurnReport {
            player,
            position: pos,
            status: self.status(),
            winning_line: self.winning_line(),
        })
    }

    /// Resets to the empty board with X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new();
        assert_eq!(game.to_move(), Player::X);
        game.make_move(Position::Center).unwrap();
        assert_eq!(game.to_move(), Player::O);
        game.make_move(Position::TopLeft).unwrap();
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.history(), &[Position::Center, Position::TopLeft]);
    }

    #[test]
    fn test_occupied_square_rejected() {
        let mut game = Game::new();
        game.make_move(Position::Center).unwrap();
        let before = game.board().clone();
        assert_eq!(
            game.make_move(Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(game.board(), &before);
        assert_eq!(game.to_move(), Player::O);
    }

    #[test]
    fn test_win_reported_with_line() {
        let mut game = Game::new();
        // X takes the top row while O fills the middle row.
        game.make_move(Position::TopLeft).unwrap();
        game.make_move(Position::MiddleLeft).unwrap();
        game.make_move(Position::TopCenter).unwrap();
        game.make_move(Position::Center).unwrap();
        let report = game.make_move(Position::TopRight).unwrap();

        assert_eq!(report.player, Player::X);
        assert_eq!(report.status, GameStatus::Won(Player::X));
        assert_eq!(
            report.winning_line,
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
    }

    #[test]
    fn test_no_moves_after_game_over() {
        let mut game = Game::new();
        game.make_move(Position::TopLeft).unwrap();
        game.make_move(Position::MiddleLeft).unwrap();
        game.make_move(Position::TopCenter).unwrap();
        game.make_move(Position::Center).unwrap();
        game.make_move(Position::TopRight).unwrap();

        assert_eq!(
            game.make_move(Position::BottomLeft),
            Err(MoveError::GameOver)
        );
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut game = Game::new();
        game.make_move(Position::Center).unwrap();
        game.make_move(Position::TopLeft).unwrap();
        game.reset();

        assert_eq!(game, Game::new());
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_in_progress_report_has_no_line() {
        let mut game = Game::new();
        let report = game.make_move(Position::Center).unwrap();
        assert_eq!(report.status, GameStatus::InProgress);
        assert_eq!(report.winning_line, None);
    }
}
