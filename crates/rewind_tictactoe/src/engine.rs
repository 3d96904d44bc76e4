//! History engine: the single owner of a game's timeline and cursor.
//!
//! All mutation goes through [`GameEngine::apply_move`],
//! [`GameEngine::seek`] and [`GameEngine::toggle_order`]. Turn and outcome
//! are never stored; they are recomputed from the board at the cursor
//! each time they are needed, so they cannot drift from the snapshots.

use super::action::{Intent, IntentResult, MoveResult};
use super::contracts::LegalMove;
use super::history::{HistoryEntry, HistoryOrder, Step, Timeline};
use super::rules::{Outcome, evaluate};
use super::view::{GameView, HistoryItem, Status};
use super::{Board, Player, Position};
use tracing::{debug, info, instrument, warn};

/// A seek target that is not in the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeekError {
    /// The step is past the latest recorded step.
    #[display("Step {} is out of range (latest step is {})", requested, latest)]
    OutOfRange {
        /// Step that was asked for.
        requested: Step,
        /// Latest step the timeline holds.
        latest: Step,
    },
}

/// One game: a timeline of snapshots, a cursor into it, and a listing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    pub(crate) timeline: Timeline,
    pub(crate) cursor: Step,
    pub(crate) order: HistoryOrder,
}

impl GameEngine {
    /// Creates a game at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::with_order(HistoryOrder::Forward)
    }

    /// Creates a game whose history is listed in `order`.
    #[instrument]
    pub fn with_order(order: HistoryOrder) -> Self {
        Self {
            timeline: Timeline::new(),
            cursor: Step::START,
            order,
        }
    }

    /// Plays `positions` in sequence from the empty board.
    ///
    /// Illegal moves are skipped exactly as [`GameEngine::apply_move`]
    /// would skip them.
    #[instrument(skip(positions))]
    pub fn replay(positions: impl IntoIterator<Item = Position>) -> Self {
        let mut engine = Self::new();
        for pos in positions {
            engine.apply_move(pos);
        }
        engine
    }

    // ─────────────────────────────────────────────────────────────
    //  Mutation
    // ─────────────────────────────────────────────────────────────

    /// Plays the current player's mark at `pos`.
    ///
    /// Ignored, with no change at all, when the board at the cursor is
    /// already won or the square is taken. Otherwise every entry after
    /// the cursor is discarded, the new snapshot is recorded as
    /// `cursor + 1`, and the cursor moves onto it.
    #[instrument(skip(self), fields(position = %pos, cursor = %self.cursor))]
    pub fn apply_move(&mut self, pos: Position) -> MoveResult {
        let current = *self.board();
        if let Err(rejection) = LegalMove::check(&current, pos) {
            debug!(%rejection, "Ignoring illegal move");
            return MoveResult::Ignored(rejection);
        }

        let player = self.to_move();
        let next = current.with_mark(pos, player);
        let step = self.timeline.record(self.cursor, next, pos);
        self.cursor = step;
        info!(step = %step, player = %player, "Move recorded");

        #[cfg(debug_assertions)]
        super::invariants::assert_invariants(self);

        MoveResult::Applied(step)
    }

    /// Moves the cursor to `step` without touching the timeline.
    ///
    /// Entries after `step` stay available until the next move is
    /// recorded from an earlier point.
    ///
    /// # Errors
    ///
    /// Returns [`SeekError::OutOfRange`] if `step` is not recorded. The
    /// cursor is left where it was; the target is never clamped.
    #[instrument(skip(self), fields(step = %step))]
    pub fn seek(&mut self, step: Step) -> Result<(), SeekError> {
        let latest = self.latest();
        if self.timeline.get(step).is_none() {
            warn!(latest = %latest, "Seek target out of range");
            return Err(SeekError::OutOfRange {
                requested: step,
                latest,
            });
        }

        self.cursor = step;
        info!("Cursor moved");
        Ok(())
    }

    /// Flips the history listing order and returns the new order.
    #[instrument(skip(self))]
    pub fn toggle_order(&mut self) -> HistoryOrder {
        self.order = self.order.toggled();
        info!(order = %self.order, "History order toggled");
        self.order
    }

    /// Routes a renderer intent to the matching operation.
    ///
    /// # Errors
    ///
    /// Only seeks can fail; see [`GameEngine::seek`].
    #[instrument(skip(self), fields(intent = %intent))]
    pub fn dispatch(&mut self, intent: Intent) -> Result<IntentResult, SeekError> {
        match intent {
            Intent::Move(pos) => Ok(IntentResult::Moved(self.apply_move(pos))),
            Intent::Seek(step) => {
                self.seek(step)?;
                Ok(IntentResult::Sought(step))
            }
            Intent::ToggleOrder => Ok(IntentResult::Toggled(self.toggle_order())),
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Derived state
    // ─────────────────────────────────────────────────────────────

    /// The full timeline, in creation order.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Step currently displayed and played from.
    pub fn cursor(&self) -> Step {
        self.cursor
    }

    /// Latest recorded step.
    pub fn latest(&self) -> Step {
        self.timeline.latest()
    }

    /// Current listing order.
    pub fn order(&self) -> HistoryOrder {
        self.order
    }

    /// Looks up a recorded entry.
    pub fn entry(&self, step: Step) -> Option<&HistoryEntry> {
        self.timeline.get(step)
    }

    /// Entry at the cursor.
    pub fn current_entry(&self) -> &HistoryEntry {
        self.timeline
            .get(self.cursor)
            .expect("cursor always names a recorded step")
    }

    /// Board at the cursor.
    pub fn board(&self) -> &Board {
        self.current_entry().board()
    }

    /// Player whose turn it is at the cursor.
    pub fn to_move(&self) -> Player {
        self.cursor.to_move()
    }

    /// Outcome of the board at the cursor.
    #[instrument(skip(self))]
    pub fn outcome(&self) -> Outcome {
        evaluate(self.board())
    }

    /// Who moves next and how the board at the cursor stands.
    #[instrument(skip(self))]
    pub fn status(&self) -> Status {
        Status::new(self.to_move(), self.outcome())
    }

    /// Squares to highlight: the winning line, or none.
    pub fn highlighted(&self) -> Vec<Position> {
        self.outcome().highlighted()
    }

    /// Squares that would be accepted as a move right now.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Position> {
        let board = self.board();
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| LegalMove::check(board, *pos).is_ok())
            .collect()
    }

    /// History listing in the current order.
    ///
    /// Items carry their own step; reversing the order moves items
    /// around but never renumbers them.
    #[instrument(skip(self), fields(order = %self.order))]
    pub fn history(&self) -> Vec<HistoryItem> {
        let items = self
            .timeline
            .entries()
            .iter()
            .map(|entry| HistoryItem::from_entry(entry, self.cursor));
        match self.order {
            HistoryOrder::Forward => items.collect(),
            HistoryOrder::Reversed => items.rev().collect(),
        }
    }

    /// Everything a renderer needs to draw the current state.
    #[instrument(skip(self))]
    pub fn view(&self) -> GameView {
        let status = self.status();
        GameView::new(
            *self.board(),
            status.outcome().highlighted(),
            self.history(),
            self.cursor,
            self.order,
            status,
        )
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
