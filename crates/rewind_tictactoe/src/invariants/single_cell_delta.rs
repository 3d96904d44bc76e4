//! Single cell delta invariant: each snapshot adds exactly one mark to its parent.

use super::super::{Board, GameEngine, Square};
use super::Invariant;

/// Invariant: snapshot `k` equals snapshot `k - 1` plus one mark.
///
/// The only differing square is the entry's origin, it was empty in the
/// parent, and it now holds the mark whose turn it was at `k - 1`.
/// The initial snapshot must be the empty board.
pub struct SingleCellDeltaInvariant;

impl Invariant<GameEngine> for SingleCellDeltaInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let entries = engine.timeline().entries();
        let starts_empty = entries
            .first()
            .is_some_and(|first| *first.board() == Board::new());

        starts_empty
            && entries.windows(2).all(|pair| {
                let (parent, child) = (&pair[0], &pair[1]);
                let Some(origin) = child.origin() else {
                    return false;
                };
                parent.board().diff(child.board()) == vec![origin]
                    && parent.board().is_empty(origin)
                    && child.board().get(origin) == Square::Occupied(parent.step().to_move())
            })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark, at its origin, for the player to move"
    }
}
