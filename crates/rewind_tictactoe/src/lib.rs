//! Rewind tic-tac-toe - game logic with an immutable move timeline
//!
//! Every move is recorded as an immutable board snapshot with a permanent
//! step number. The cursor can be moved to any recorded step and back
//! again; playing a new move from an earlier step discards the entries
//! after it.
//!
//! # Architecture
//!
//! - **Rules**: pure outcome evaluation of a single snapshot
//! - **History**: timeline of snapshots keyed by step
//! - **Engine**: owns the timeline and cursor, applies intents
//! - **View**: read-only projection handed to renderers
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameEngine, Outcome, Player, Position, Step};
//!
//! let mut engine = GameEngine::new();
//! for pos in [0, 4, 1, 3, 2] {
//!     engine.apply_move(Position::from_index(pos).unwrap());
//! }
//! assert_eq!(engine.outcome().winner(), Some(Player::X));
//!
//! engine.seek(Step::new(2)).unwrap();
//! engine.apply_move(Position::MiddleLeft);
//! assert_eq!(engine.latest(), Step::new(3));
//! assert_eq!(engine.outcome(), Outcome::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod engine;
mod history;
mod invariants;
mod position;
mod rules;
mod types;
mod view;

// Crate-level exports - Board types
pub use position::{Position, PositionError};
pub use types::{Board, Player, Square};

// Crate-level exports - Rules
pub use rules::{Line, Outcome, WINNING_LINES, check_winner, evaluate, is_draw, is_full};

// Crate-level exports - History and engine
pub use engine::{GameEngine, SeekError};
pub use history::{HistoryEntry, HistoryOrder, Step, Timeline};

// Crate-level exports - Intents and contracts
pub use action::{Intent, IntentParseError, IntentResult, MoveRejection, MoveResult};
pub use contracts::{GameNotWon, LegalMove, SquareIsEmpty};

// Crate-level exports - Invariants
pub use invariants::{
    ContiguousStepsInvariant, CursorInBoundsInvariant, EngineInvariants, Invariant, InvariantSet,
    InvariantViolation, SingleCellDeltaInvariant, assert_invariants,
};

// Crate-level exports - Rendering
pub use view::{GameView, HistoryItem, Status};
