//! First-class invariants for Gess.
//!
//! Each invariant is evaluated over a `Transition`, the board before and
//! after a move, so it can relate the two and be tested without a game.

use crate::types::Board;

/// A property of a move transition that every applied move must preserve.
pub trait Invariant {
    /// True when the invariant holds across `transition`.
    fn holds(transition: &Transition<'_>) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// A broken invariant, named by its description.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// The board on either side of an applied move.
#[derive(Debug, Clone, Copy)]
pub struct Transition<'a> {
    /// Board before the move.
    pub before: &'a Board,
    /// Board after the move.
    pub after: &'a Board,
}

impl<'a> Transition<'a> {
    /// Creates a transition.
    pub fn new(before: &'a Board, after: &'a Board) -> Self {
        Self { before, after }
    }
}

pub mod border_clear;
pub mod stone_conservation;

pub use border_clear::BorderClearInvariant;
pub use stone_conservation::StoneConservationInvariant;

type Check = (fn(&Transition<'_>) -> bool, fn() -> &'static str);

/// Every invariant a Gess move must preserve.
pub struct GessInvariants;

impl GessInvariants {
    const CHECKS: [Check; 2] = [
        (BorderClearInvariant::holds, BorderClearInvariant::description),
        (StoneConservationInvariant::holds, StoneConservationInvariant::description),
    ];

    /// Checks every invariant, reporting all that fail in a fixed order.
    pub fn check_all(transition: &Transition<'_>) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = Self::CHECKS
            .iter()
            .filter(|(holds, _)| !holds(transition))
            .map(|(_, description)| InvariantViolation::new(description()))
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}
