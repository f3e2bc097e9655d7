//! Move application: lifting a footprint, overlaying it, border attrition.
//!
//! A footprint is copied cell for cell, empties included. Landing it
//! overwrites all nine destination cells, so any stone under the landing
//! window is captured, whether it sits under a stone or under an empty slot.

use crate::action::{Move, StoneTally};
use crate::coordinate::Coordinate;
use crate::geometry::FOOTPRINT_OFFSETS;
use crate::types::{Board, Cell, Color};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A 3x3 block of cells in `FOOTPRINT_OFFSETS` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Footprint {
    cells: [Cell; 9],
}

impl Footprint {
    /// Copies the window around `center` without touching the board.
    ///
    /// Cells beyond the grid read as empty.
    pub fn read(board: &Board, center: Coordinate) -> Self {
        let mut cells = [Cell::Empty; 9];
        for (slot, &(dr, dc)) in cells.iter_mut().zip(FOOTPRINT_OFFSETS.iter()) {
            if let Some(at) = center.offset(dr, dc) {
                *slot = board.get(at);
            }
        }
        Self { cells }
    }

    /// Copies the window around `center` and clears it on the board.
    pub fn lift(board: &mut Board, center: Coordinate) -> Self {
        let footprint = Self::read(board, center);
        for &(dr, dc) in &FOOTPRINT_OFFSETS {
            if let Some(at) = center.offset(dr, dc) {
                board.set(at, Cell::Empty);
            }
        }
        footprint
    }

    /// Writes every cell of the footprint onto the window around `center`.
    pub fn place(&self, board: &mut Board, center: Coordinate) {
        for (&cell, &(dr, dc)) in self.cells.iter().zip(FOOTPRINT_OFFSETS.iter()) {
            if let Some(at) = center.offset(dr, dc) {
                board.set(at, cell);
            }
        }
    }

    /// Cell at a window offset, each component in `-1..=1`.
    pub fn at(&self, dr: i32, dc: i32) -> Cell {
        FOOTPRINT_OFFSETS
            .iter()
            .position(|&offset| offset == (dr, dc))
            .map_or(Cell::Empty, |i| self.cells[i])
    }

    /// Number of stones of `color` in the footprint.
    pub fn stones(&self, color: Color) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == Cell::Occupied(color))
            .count()
    }
}

/// Applies a footprint move to the board.
///
/// The move must already have passed `LegalMove`; no rule is checked here.
/// Returns the stones each color lost to overlap and border attrition.
#[instrument(skip(board), fields(mv = %mv))]
pub fn apply_move(board: &mut Board, mv: Move) -> StoneTally {
    let black_before = board.stone_count(Color::Black);
    let white_before = board.stone_count(Color::White);

    let footprint = Footprint::lift(board, mv.from);
    debug!(
        black_lifted = footprint.stones(Color::Black),
        white_lifted = footprint.stones(Color::White),
        "Footprint lifted"
    );
    footprint.place(board, mv.to);
    let (black_edge, white_edge) = board.clear_border();

    let removed = StoneTally {
        black: black_before - board.stone_count(Color::Black),
        white: white_before - board.stone_count(Color::White),
    };

    debug!(
        black_removed = removed.black,
        white_removed = removed.white,
        black_off_edge = black_edge,
        white_off_edge = white_edge,
        "Footprint landed"
    );

    removed
}
