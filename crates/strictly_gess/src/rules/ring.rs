//! Ring detection.
//!
//! A ring is an empty playable cell whose eight neighbors are all stones of
//! one color. A player with no ring left has lost.

use crate::coordinate::Coordinate;
use crate::geometry::{footprint, neighbors};
use crate::types::{Board, Color};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// A ring of stones around an empty center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ring {
    /// Color of the eight surrounding stones.
    pub color: Color,
    /// The empty center cell.
    pub center: Coordinate,
}

impl Ring {
    /// The eight stone cells around the center.
    pub fn stones(&self) -> impl Iterator<Item = Coordinate> {
        neighbors(self.center)
    }

    /// All nine cells of the ring, center included.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        footprint(self.center)
    }

    /// True when any of the ring's stones is inside the 3x3 window at `center`.
    pub fn touches_footprint(&self, center: Coordinate) -> bool {
        self.stones().any(|stone| footprint(center).any(|cell| cell == stone))
    }
}

fn is_ring_center(board: &Board, at: Coordinate, color: Color) -> bool {
    board.is_empty(at) && neighbors(at).all(|n| board.is_color(n, color))
}

/// Finds every ring of `color`, scanning the playable region row by row.
#[instrument(skip(board))]
pub fn rings_of(board: &Board, color: Color) -> Vec<Ring> {
    let rings: Vec<Ring> = Coordinate::playable()
        .filter(|&at| is_ring_center(board, at, color))
        .map(|center| Ring { color, center })
        .collect();
    trace!(count = rings.len(), "Rings found");
    rings
}

/// Number of rings of `color`.
pub fn ring_count(board: &Board, color: Color) -> usize {
    Coordinate::playable()
        .filter(|&at| is_ring_center(board, at, color))
        .count()
}
