//! Terminal classification of a board snapshot.

use super::super::{Board, Player, Position};
use super::draw::is_full;
use super::win::{Line, check_winner};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Classification of a single snapshot.
///
/// Always derived from a board with [`evaluate`], never stored alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Empty squares remain and nobody has a line.
    InProgress,
    /// A player completed `line`.
    Won {
        /// The winning player.
        player: Player,
        /// The completed line.
        line: Line,
    },
    /// Board is full with no completed line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<Line> {
        match self {
            Outcome::Won { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Positions to highlight: the winning line, or nothing.
    pub fn highlighted(&self) -> Vec<Position> {
        self.line()
            .map(|l| l.positions().to_vec())
            .unwrap_or_default()
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won { player, .. } => write!(f, "Winner: {}", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Classifies a snapshot.
///
/// Total over every combination of squares: a winning line takes
/// precedence over a full board, and boards that cannot occur in play
/// are classified the same way as reachable ones.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((player, line)) = check_winner(board) {
        return Outcome::Won { player, line };
    }
    if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    #[test]
    fn test_empty_board_in_progress() {
        let outcome = evaluate(&Board::new());
        assert_eq!(outcome, Outcome::InProgress);
        assert_eq!(outcome.winner(), None);
        assert!(outcome.highlighted().is_empty());
    }

    #[test]
    fn test_win_on_last_square_beats_draw() {
        // X X X / O O X / X O O: full, but the top row is complete.
        let x = Square::Occupied(Player::X);
        let o = Square::Occupied(Player::O);
        let board = Board::from_squares([x, x, x, o, o, x, x, o, o]);
        let outcome = evaluate(&board);
        assert_eq!(outcome.winner(), Some(Player::X));
        assert_eq!(
            outcome.highlighted(),
            vec![Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
    }

    #[test]
    fn test_evaluate_is_deterministic_over_every_board() {
        // Walk all 3^9 boards, including unreachable ones.
        let choices = [Square::Empty, Square::Occupied(Player::X), Square::Occupied(Player::O)];
        for code in 0..3usize.pow(9) {
            let mut squares = [Square::Empty; 9];
            let mut rest = code;
            for square in squares.iter_mut() {
                *square = choices[rest % 3];
                rest /= 3;
            }
            let board = Board::from_squares(squares);
            let first = evaluate(&board);
            assert_eq!(first, evaluate(&board));
            match first {
                Outcome::Won { player, line } => {
                    for pos in line.positions() {
                        assert_eq!(board.get(pos), Square::Occupied(player));
                    }
                }
                Outcome::Draw => assert!(squares.iter().all(|s| *s != Square::Empty)),
                Outcome::InProgress => assert!(squares.contains(&Square::Empty)),
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Outcome::Draw.to_string(), "Draw");
        let won = Outcome::Won {
            player: Player::O,
            line: crate::WINNING_LINES[1],
        };
        assert_eq!(won.to_string(), "Winner: O");
    }
}
