//! Cursor invariant: the cursor names a recorded step.

use super::super::GameEngine;
use super::Invariant;

/// Invariant: `cursor <= latest`.
pub struct CursorInBoundsInvariant;

impl Invariant<GameEngine> for CursorInBoundsInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.cursor() <= engine.latest() && engine.entry(engine.cursor()).is_some()
    }

    fn description() -> &'static str {
        "Cursor names a recorded step"
    }
}
