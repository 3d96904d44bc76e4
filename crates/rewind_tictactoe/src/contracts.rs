//! Move preconditions.
//!
//! Each precondition looks at the board at the cursor and either allows
//! the move or names why it must be ignored. [`LegalMove`] runs them in
//! the order the engine relies on: a finished game is reported as
//! finished even when the requested square is also taken.

use super::action::MoveRejection;
use super::rules::{Outcome, evaluate};
use super::{Board, Position};
use tracing::instrument;

/// Precondition: nobody has completed a line yet.
pub struct GameNotWon;

impl GameNotWon {
    /// Checks the board for a winner.
    #[instrument(skip(board))]
    pub fn check(board: &Board) -> Result<(), MoveRejection> {
        match evaluate(board) {
            Outcome::Won { .. } => Err(MoveRejection::GameOver),
            _ => Ok(()),
        }
    }
}

/// Precondition: the square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Checks that `pos` is free.
    #[instrument(skip(board))]
    pub fn check(board: &Board, pos: Position) -> Result<(), MoveRejection> {
        if board.is_empty(pos) {
            Ok(())
        } else {
            Err(MoveRejection::SquareOccupied(pos))
        }
    }
}

/// Composite precondition: a move is legal if the game is not won and the square is empty.
///
/// A drawn board passes the first check and fails the second for every
/// square, so no separate draw check is needed.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(board))]
    pub fn check(board: &Board, pos: Position) -> Result<(), MoveRejection> {
        GameNotWon::check(board)?;
        SquareIsEmpty::check(board, pos)?;
        Ok(())
    }
}
