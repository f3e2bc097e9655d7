//! Contract-based move validation for Gess.
//!
//! Each rule a move must satisfy is its own precondition type with a
//! `check` function. `LegalMove` runs them in a fixed order and stops at the
//! first failure, so the reported reason is deterministic. None of the checks
//! mutate the board.

use super::action::{Move, MoveError};
use super::coordinate::Coordinate;
use super::game::GameState;
use super::geometry::{direction, distance, footprint, FOOTPRINT_OFFSETS};
use super::invariants::{GessInvariants, InvariantViolation, Transition};
use super::rules::{rings_of, Footprint};
use super::types::{Board, Cell, Color, GameStatus};
use tracing::{debug, instrument};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: must hold before applying the action
/// - Postcondition: must hold between the state before and after
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the source footprint holds no opponent stone.
///
/// Empty cells are fine; a footprint of nothing but empties passes here and
/// is rejected later for lacking a leading stone.
pub struct FootprintOwned;

impl FootprintOwned {
    /// Checks the precondition.
    pub fn check(board: &Board, mover: Color, mv: &Move) -> Result<(), MoveError> {
        let foreign = footprint(mv.from).any(|at| board.get(at) == Cell::Occupied(mover.opponent()));
        if foreign {
            Err(MoveError::FootprintOwnership)
        } else {
            Ok(())
        }
    }
}

/// Precondition: both centers lie in the playable region.
pub struct CentersOnBoard;

impl CentersOnBoard {
    /// Checks the precondition.
    pub fn check(mv: &Move) -> Result<(), MoveError> {
        match [mv.from, mv.to].into_iter().find(|c| !c.is_playable()) {
            Some(outside) => Err(MoveError::OutOfBounds(outside)),
            None => Ok(()),
        }
    }
}

/// Precondition: the footprint actually moves.
pub struct NotNullMove;

impl NotNullMove {
    /// Checks the precondition.
    pub fn check(mv: &Move) -> Result<(), MoveError> {
        if mv.from == mv.to {
            Err(MoveError::NullMove)
        } else {
            Ok(())
        }
    }
}

/// Precondition: a footprint with an empty center moves at most three cells.
pub struct EmptyCenterReach;

impl EmptyCenterReach {
    /// Longest move allowed when the center cell holds no stone.
    pub const MAX_DISTANCE: u8 = 3;

    /// Checks the precondition.
    pub fn check(board: &Board, mv: &Move) -> Result<(), MoveError> {
        let distance = distance(mv.from, mv.to);
        if board.is_empty(mv.from) && distance > Self::MAX_DISTANCE {
            Err(MoveError::OverDistance { distance })
        } else {
            Ok(())
        }
    }
}

/// Precondition: a mover stone sits next to the center in the direction of travel.
pub struct LeadingStone;

impl LeadingStone {
    /// Checks the precondition.
    pub fn check(board: &Board, mover: Color, mv: &Move) -> Result<(), MoveError> {
        let dir = direction(mv.from, mv.to).ok_or(MoveError::NullMove)?;
        if Footprint::read(board, mv.from).at(dir.dr, dir.dc) == Cell::Occupied(mover) {
            Ok(())
        } else {
            Err(MoveError::NoLeadingStone)
        }
    }
}

/// Precondition: every intermediate footprint position is empty.
///
/// The board is read as if the source footprint had already been lifted, so
/// a footprint may slide through its own starting cells. The landing window
/// is not checked; whatever is there gets captured.
pub struct PathClear;

impl PathClear {
    /// Checks the precondition.
    pub fn check(board: &Board, mv: &Move) -> Result<(), MoveError> {
        let dir = direction(mv.from, mv.to).ok_or(MoveError::NullMove)?;
        let lifted = |at: Coordinate| distance(at, mv.from) <= 1;
        let occupied = |at: Coordinate| !lifted(at) && !board.is_empty(at);

        for step in 1..distance(mv.from, mv.to) as i32 {
            // windows centered off the grid only cover the border ring
            let Some(center) = dir.step(mv.from, step) else {
                continue;
            };
            let blocked = FOOTPRINT_OFFSETS
                .iter()
                .filter_map(|&(dr, dc)| center.offset(dr, dc))
                .any(|at| occupied(at));
            if blocked {
                return Err(MoveError::PathObstructed(center));
            }
        }

        Ok(())
    }
}

/// Precondition: the mover does not lift stones of their only ring.
///
/// Only applies while the mover has exactly one ring. With two or more, losing
/// one is not fatal; with none, the game is already decided.
pub struct LastRingPreserved;

impl LastRingPreserved {
    /// Checks the precondition.
    pub fn check(board: &Board, mover: Color, mv: &Move) -> Result<(), MoveError> {
        let rings = rings_of(board, mover);
        if let [ring] = rings.as_slice()
            && ring.touches_footprint(mv.from)
        {
            return Err(MoveError::LastRing(ring.center));
        }
        Ok(())
    }
}

/// Composite precondition: every Gess movement rule, in order.
pub struct LegalMove;

impl LegalMove {
    /// Validates all movement rules for `mover` on `board`.
    ///
    /// Order: ownership, bounds, null move, empty-center reach, leading stone,
    /// path, last ring. The first failing rule is reported.
    #[instrument(skip(board), fields(mv = %mv))]
    pub fn check(board: &Board, mover: Color, mv: &Move) -> Result<(), MoveError> {
        let result = FootprintOwned::check(board, mover, mv)
            .and_then(|()| CentersOnBoard::check(mv))
            .and_then(|()| NotNullMove::check(mv))
            .and_then(|()| EmptyCenterReach::check(board, mv))
            .and_then(|()| LeadingStone::check(board, mover, mv))
            .and_then(|()| PathClear::check(board, mv))
            .and_then(|()| LastRingPreserved::check(board, mover, mv));

        if let Err(reason) = &result {
            debug!(%reason, "Move failed legality check");
        }
        result
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for footprint moves.
///
/// Preconditions:
/// - Game still in progress
/// - All `LegalMove` rules for the player to move
///
/// Postconditions:
/// - Border ring is empty
/// - Neither color gained stones
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    fn pre(game: &GameState, action: &Move) -> Result<(), MoveError> {
        if game.status() != GameStatus::InProgress {
            return Err(MoveError::GameAlreadyOver);
        }
        LegalMove::check(game.board(), game.to_move(), action)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), Vec<InvariantViolation>> {
        GessInvariants::check_all(&Transition::new(before.board(), after.board()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::neighbors;

    fn at(text: &str) -> Coordinate {
        text.parse().unwrap()
    }

    fn mv(from: &str, to: &str) -> Move {
        Move::parse(from, to).unwrap()
    }

    #[test]
    fn test_ownership_rejects_any_opponent_stone() {
        let mut board = Board::empty();
        board.place_all(Color::Black, [at("e5"), at("e6"), at("f6")]);
        board.set(at("d4"), Cell::Occupied(Color::White));

        assert_eq!(
            FootprintOwned::check(&board, Color::Black, &mv("e5", "e7")),
            Err(MoveError::FootprintOwnership)
        );
        assert!(FootprintOwned::check(&board, Color::Black, &mv("f6", "f8")).is_ok());
    }

    #[test]
    fn test_bounds_reports_offending_center() {
        assert_eq!(
            CentersOnBoard::check(&mv("a5", "b5")),
            Err(MoveError::OutOfBounds(at("a5")))
        );
        assert_eq!(
            CentersOnBoard::check(&mv("s19", "s20")),
            Err(MoveError::OutOfBounds(at("s20")))
        );
        assert!(CentersOnBoard::check(&mv("b2", "s19")).is_ok());
    }

    #[test]
    fn test_null_move() {
        assert_eq!(NotNullMove::check(&mv("h8", "h8")), Err(MoveError::NullMove));
        assert!(NotNullMove::check(&mv("h8", "h9")).is_ok());
    }

    #[test]
    fn test_empty_center_reach() {
        let mut board = Board::empty();
        assert!(EmptyCenterReach::check(&board, &mv("h8", "h11")).is_ok());
        assert_eq!(
            EmptyCenterReach::check(&board, &mv("h8", "h12")),
            Err(MoveError::OverDistance { distance: 4 })
        );

        board.set(at("h8"), Cell::Occupied(Color::Black));
        assert!(EmptyCenterReach::check(&board, &mv("h8", "h16")).is_ok());
    }

    #[test]
    fn test_leading_stone_follows_direction() {
        let mut board = Board::empty();
        board.set(at("i9"), Cell::Occupied(Color::White));

        // i9 is the diagonal neighbor of h8 on the way to j10
        assert!(LeadingStone::check(&board, Color::White, &mv("h8", "j10")).is_ok());
        assert_eq!(
            LeadingStone::check(&board, Color::White, &mv("h8", "h10")),
            Err(MoveError::NoLeadingStone)
        );
        assert_eq!(
            LeadingStone::check(&board, Color::Black, &mv("h8", "j10")),
            Err(MoveError::NoLeadingStone)
        );
    }

    #[test]
    fn test_path_ignores_own_starting_cells() {
        let mut board = Board::empty();
        board.place_all(Color::Black, footprint(at("e5")));
        assert!(PathClear::check(&board, &mv("e5", "e8")).is_ok());
    }

    #[test]
    fn test_path_blocked_by_stone_in_intermediate_window() {
        let mut board = Board::empty();
        board.place_all(Color::Black, [at("e5"), at("e6")]);
        // f9 sits in the window around e8 (step 3) but not around e6 or e7
        board.set(at("f9"), Cell::Occupied(Color::White));

        assert_eq!(
            PathClear::check(&board, &mv("e5", "e9")),
            Err(MoveError::PathObstructed(at("e8")))
        );
        // the landing window itself is not checked
        assert!(PathClear::check(&board, &mv("e5", "e8")).is_ok());
    }

    #[test]
    fn test_last_ring_only_guards_a_sole_ring() {
        let mut board = Board::empty();
        board.place_all(Color::Black, neighbors(at("h8")));

        assert_eq!(
            LastRingPreserved::check(&board, Color::Black, &mv("h8", "h9")),
            Err(MoveError::LastRing(at("h8")))
        );
        assert_eq!(
            LastRingPreserved::check(&board, Color::Black, &mv("g10", "g11")),
            Err(MoveError::LastRing(at("h8")))
        );
        assert!(LastRingPreserved::check(&board, Color::Black, &mv("l12", "l13")).is_ok());

        // a second ring makes the first one expendable
        board.place_all(Color::Black, neighbors(at("o15")));
        assert!(LastRingPreserved::check(&board, Color::Black, &mv("h8", "h9")).is_ok());
    }

    #[test]
    fn test_last_ring_ignores_opponent_rings() {
        let mut board = Board::empty();
        board.place_all(Color::White, neighbors(at("h8")));
        assert!(LastRingPreserved::check(&board, Color::Black, &mv("h8", "h9")).is_ok());
    }

    #[test]
    fn test_legal_move_reports_first_failure() {
        let board = Board::starting();
        // out of bounds and null at once: bounds comes first
        assert_eq!(
            LegalMove::check(&board, Color::Black, &mv("a1", "a1")),
            Err(MoveError::OutOfBounds(at("a1")))
        );
        // ownership comes before bounds
        assert_eq!(
            LegalMove::check(&board, Color::Black, &mv("l18", "t20")),
            Err(MoveError::FootprintOwnership)
        );
        assert!(LegalMove::check(&board, Color::Black, &mv("o6", "o7")).is_ok());
    }
}
