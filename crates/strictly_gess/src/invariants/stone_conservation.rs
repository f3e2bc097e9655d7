//! Stone conservation invariant: moves only ever remove stones.

use super::{Invariant, Transition};
use crate::types::Color;
use strum::IntoEnumIterator;

/// Invariant: no color has more stones after a move than before.
///
/// Captures and border attrition remove stones; nothing adds them.
pub struct StoneConservationInvariant;

impl Invariant for StoneConservationInvariant {
    fn holds(transition: &Transition<'_>) -> bool {
        Color::iter().all(|color| {
            transition.after.stone_count(color) <= transition.before.stone_count(color)
        })
    }

    fn description() -> &'static str {
        "No color gains stones during a move"
    }
}
