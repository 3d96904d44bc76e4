//! Move timeline: immutable snapshots keyed by step.
//!
//! Every entry carries its own [`Step`], assigned when the entry is
//! recorded and never changed afterwards. Lookups go through the step,
//! not through an entry's index in any list, so presenting the history
//! in a different order cannot relabel an entry.

use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Sequence number of a history entry. Step 0 is the empty board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
    derive_more::Display, derive_more::From,
)]
#[serde(transparent)]
pub struct Step(usize);

impl Step {
    /// The initial, empty board.
    pub const START: Step = Step(0);

    /// Creates a step from its number.
    pub const fn new(n: usize) -> Self {
        Self(n)
    }

    /// The step number.
    pub fn value(self) -> usize {
        self.0
    }

    /// The step that follows this one.
    pub fn next(self) -> Step {
        Step(self.0 + 1)
    }

    /// True for step 0.
    pub fn is_start(self) -> bool {
        self.0 == 0
    }

    /// Player whose turn it is on the board at this step.
    ///
    /// Moves strictly alternate, so even steps belong to X.
    pub fn to_move(self) -> Player {
        if self.0 % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Listing label for this step.
    pub fn label(self) -> String {
        if self.is_start() {
            "Go to move start".to_string()
        } else {
            format!("Go to move #{}", self.0)
        }
    }
}

/// Order in which history is listed. Presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryOrder {
    /// Oldest first.
    #[default]
    Forward,
    /// Newest first.
    Reversed,
}

impl HistoryOrder {
    /// The other order.
    pub fn toggled(self) -> Self {
        match self {
            HistoryOrder::Forward => HistoryOrder::Reversed,
            HistoryOrder::Reversed => HistoryOrder::Forward,
        }
    }
}

impl std::fmt::Display for HistoryOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HistoryOrder::Forward => write!(f, "forward"),
            HistoryOrder::Reversed => write!(f, "reversed"),
        }
    }
}

/// One snapshot in the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub(crate) board: Board,
    pub(crate) origin: Option<Position>,
    pub(crate) step: Step,
}

impl HistoryEntry {
    /// The board after this entry's move.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Square played to reach this entry; `None` for the initial board.
    pub fn origin(&self) -> Option<Position> {
        self.origin
    }

    /// Permanent identity of this entry.
    pub fn step(&self) -> Step {
        self.step
    }

    /// Player who made this entry's move.
    pub fn mover(&self) -> Option<Player> {
        self.origin.and_then(|pos| self.board.get(pos).player())
    }
}

/// Entries in creation order, steps contiguous from 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timeline {
    pub(crate) entries: Vec<HistoryEntry>,
}

impl Timeline {
    /// Creates a timeline holding only the empty board at step 0.
    #[instrument]
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry {
                board: Board::new(),
                origin: None,
                step: Step::START,
            }],
        }
    }

    /// Entries in creation order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Looks up an entry by step.
    pub fn get(&self, step: Step) -> Option<&HistoryEntry> {
        self.entries
            .binary_search_by_key(&step, |entry| entry.step)
            .ok()
            .map(|idx| &self.entries[idx])
    }

    /// Highest recorded step.
    pub fn latest(&self) -> Step {
        self.entries.last().map(|e| e.step).unwrap_or(Step::START)
    }

    /// Number of entries, including the initial board.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the initial entry is never removed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records `board` as the child of `parent`.
    ///
    /// Entries after `parent` are discarded first, then the new entry is
    /// appended as `parent + 1`. Discarding and appending happen together;
    /// there is no way to drop entries without recording a move.
    #[instrument(skip(self, board), fields(parent = %parent, origin = %origin))]
    pub(crate) fn record(&mut self, parent: Step, board: Board, origin: Position) -> Step {
        let keep = self.entries.partition_point(|entry| entry.step <= parent);
        let discarded = self.entries.len() - keep;
        if discarded > 0 {
            debug!(discarded, "Discarding abandoned branch");
        }
        self.entries.truncate(keep);

        let step = parent.next();
        self.entries.push(HistoryEntry {
            board,
            origin: Some(origin),
            step,
        });
        step
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}
