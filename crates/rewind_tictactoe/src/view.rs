//! Read-only projection of an engine for renderers.

use super::history::{HistoryEntry, HistoryOrder, Step};
use super::rules::Outcome;
use super::{Board, Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Who moves next, plus the outcome of the board at the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Status {
    /// Player whose turn it is by step parity.
    to_move: Player,
    /// Classification of the current board.
    outcome: Outcome,
}

impl Status {
    /// Creates a status.
    pub fn new(to_move: Player, outcome: Outcome) -> Self {
        Self { to_move, outcome }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.outcome {
            Outcome::InProgress => write!(f, "Next player: {}", self.to_move),
            Outcome::Won { player, .. } => write!(f, "Winner: {}", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// One row of the history listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HistoryItem {
    /// Identity of the listed entry.
    step: Step,
    /// Square played to reach it.
    origin: Option<Position>,
    /// Whether the cursor is on this entry.
    current: bool,
}

impl HistoryItem {
    /// Lists `entry`, marking it current when it sits under `cursor`.
    pub fn from_entry(entry: &HistoryEntry, cursor: Step) -> Self {
        Self {
            step: entry.step(),
            origin: entry.origin(),
            current: entry.step() == cursor,
        }
    }

    /// Button text, derived from the step alone.
    pub fn label(&self) -> String {
        self.step.label()
    }
}

/// Everything a renderer needs after a state change.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameView {
    /// Board at the cursor.
    board: Board,
    /// Winning line squares, empty unless the board is won.
    highlighted: Vec<Position>,
    /// History in display order.
    history: Vec<HistoryItem>,
    /// Step on display.
    cursor: Step,
    /// Order `history` is listed in.
    order: HistoryOrder,
    /// Turn and outcome summary.
    status: Status,
}

impl GameView {
    /// Assembles a view.
    pub fn new(
        board: Board,
        highlighted: Vec<Position>,
        history: Vec<HistoryItem>,
        cursor: Step,
        order: HistoryOrder,
        status: Status,
    ) -> Self {
        Self {
            board,
            highlighted,
            history,
            cursor,
            order,
            status,
        }
    }

    /// Checks whether `pos` belongs to the winning line.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.highlighted.contains(&pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameEngine, WINNING_LINES};

    #[test]
    fn test_status_messages() {
        assert_eq!(
            Status::new(Player::O, Outcome::InProgress).to_string(),
            "Next player: O"
        );
        let won = Outcome::Won {
            player: Player::X,
            line: WINNING_LINES[0],
        };
        assert_eq!(Status::new(Player::O, won).to_string(), "Winner: X");
        assert_eq!(Status::new(Player::X, Outcome::Draw).to_string(), "Draw");
    }

    #[test]
    fn test_view_marks_current_item() {
        let mut engine = GameEngine::replay([Position::Center, Position::TopLeft]);
        engine.seek(Step::new(1)).unwrap();
        let view = engine.view();

        let current: Vec<_> = view.history().iter().filter(|i| *i.current()).collect();
        assert_eq!(current.len(), 1);
        assert_eq!(*current[0].step(), Step::new(1));
        assert_eq!(*current[0].origin(), Some(Position::Center));
        assert_eq!(current[0].label(), "Go to move #1");
        assert!(view.highlighted().is_empty());
    }

    #[test]
    fn test_view_serializes_to_json() {
        let view = GameEngine::replay([Position::Center]).view();
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["cursor"], 1);
        assert_eq!(json["order"], "forward");
        assert_eq!(json["history"].as_array().unwrap().len(), 2);
    }
}
