//! Contiguous steps invariant: the timeline holds steps 0..=latest, in order.

use super::super::{GameEngine, Step};
use super::Invariant;

/// Invariant: entry `k` of the timeline carries step `k`.
///
/// Only the initial entry lacks an origin square.
pub struct ContiguousStepsInvariant;

impl Invariant<GameEngine> for ContiguousStepsInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let entries = engine.timeline().entries();
        !entries.is_empty()
            && entries.iter().enumerate().all(|(k, entry)| {
                entry.step() == Step::new(k) && entry.origin().is_none() == (k == 0)
            })
    }

    fn description() -> &'static str {
        "Timeline steps are contiguous from 0 and only step 0 lacks an origin"
    }
}
