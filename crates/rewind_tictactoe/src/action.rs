//! First-class renderer intents and their results.
//!
//! A renderer never touches engine state directly. It emits an
//! [`Intent`] and redraws from the engine's view afterwards.

use super::Position;
use super::history::{HistoryOrder, Step};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Something the player asked the engine to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "intent", content = "target", rename_all = "snake_case")]
pub enum Intent {
    /// Place the current player's mark.
    Move(Position),
    /// Jump to a recorded step.
    Seek(Step),
    /// Flip the history listing order.
    ToggleOrder,
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intent::Move(pos) => write!(f, "move {}", pos.to_index()),
            Intent::Seek(step) => write!(f, "seek {}", step),
            Intent::ToggleOrder => write!(f, "toggle"),
        }
    }
}

/// A line of input that is not an intent.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum IntentParseError {
    /// Nothing but whitespace.
    #[display("Empty command")]
    Empty,
    /// Unrecognised verb.
    #[display("Unknown command: {}", _0)]
    UnknownCommand(#[error(not(source))] String),
    /// Verb needs an argument that was not given.
    #[display("Command '{}' needs an argument", _0)]
    MissingArgument(#[error(not(source))] String),
    /// Verb takes no argument but one was given.
    #[display("Command '{}' takes no argument", _0)]
    UnexpectedArgument(#[error(not(source))] String),
    /// Argument is not a square.
    #[display("Invalid position: {}", _0)]
    InvalidPosition(#[error(not(source))] String),
    /// Argument is not a step number.
    #[display("Invalid step: {}", _0)]
    InvalidStep(#[error(not(source))] String),
}

impl FromStr for Intent {
    type Err = IntentParseError;

    /// Parses `move <0-8|label>`, `seek <n>`, or `toggle`, plus short forms.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let verb = parts.next().ok_or(IntentParseError::Empty)?.to_lowercase();
        let argument = parts.collect::<Vec<_>>().join(" ");

        match verb.as_str() {
            "move" | "m" | "play" => {
                if argument.is_empty() {
                    return Err(IntentParseError::MissingArgument(verb));
                }
                Position::from_label_or_number(&argument)
                    .map(Intent::Move)
                    .ok_or(IntentParseError::InvalidPosition(argument))
            }
            "seek" | "jump" | "s" => {
                if argument.is_empty() {
                    return Err(IntentParseError::MissingArgument(verb));
                }
                argument
                    .parse::<usize>()
                    .map(|n| Intent::Seek(Step::new(n)))
                    .map_err(|_| IntentParseError::InvalidStep(argument))
            }
            "toggle" | "sort" | "t" => {
                if !argument.is_empty() {
                    return Err(IntentParseError::UnexpectedArgument(verb));
                }
                Ok(Intent::ToggleOrder)
            }
            _ => Err(IntentParseError::UnknownCommand(verb)),
        }
    }
}

/// Why a move left the game unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum MoveRejection {
    /// The board at the cursor already has a winner.
    #[display("Game is already over")]
    GameOver,
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),
}

/// Result of asking the engine to play a square.
///
/// Illegal moves are not errors: they are reported as
/// [`MoveResult::Ignored`] and the engine stays exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveResult {
    /// A new entry was recorded at this step.
    Applied(Step),
    /// Nothing changed.
    Ignored(MoveRejection),
}

impl MoveResult {
    /// True if a new entry was recorded.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveResult::Applied(_))
    }
}

/// Result of a dispatched intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntentResult {
    /// Outcome of a move intent.
    Moved(MoveResult),
    /// The cursor now sits on this step.
    Sought(Step),
    /// The listing now uses this order.
    Toggled(HistoryOrder),
}
