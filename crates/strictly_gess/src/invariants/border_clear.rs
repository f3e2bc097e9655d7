//! Border invariant: no stone survives on the outer ring.

use super::{Invariant, Transition};

/// Invariant: every border cell is empty after a move.
pub struct BorderClearInvariant;

impl Invariant for BorderClearInvariant {
    fn holds(transition: &Transition<'_>) -> bool {
        transition.after.border_is_clear()
    }

    fn description() -> &'static str {
        "Border ring is empty after every move"
    }
}
