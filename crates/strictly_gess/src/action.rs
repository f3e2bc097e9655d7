//! First-class move and outcome types for Gess.
//!
//! A move names two footprint centers. It can be validated against a board
//! before anything is mutated, and the outcome of applying it is a value the
//! caller can log or display.

use super::coordinate::Coordinate;
use super::types::{Color, GameStatus};
use serde::{Deserialize, Serialize};

/// A footprint move from one center to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Center of the footprint being lifted.
    pub from: Coordinate,
    /// Center where the footprint lands.
    pub to: Coordinate,
}

impl Move {
    /// Creates a new move.
    pub fn new(from: Coordinate, to: Coordinate) -> Self {
        Self { from, to }
    }

    /// Decodes a move from two `l3`-style coordinates.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::InvalidCoordinate` for the first bad coordinate.
    pub fn parse(from: &str, to: &str) -> Result<Self, MoveError> {
        Ok(Self::new(from.parse()?, to.parse()?))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Reason a move was rejected.
///
/// Every variant is recoverable: the game state is untouched and the caller
/// may simply ask for another move.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum MoveError {
    /// Text is not a coordinate on the grid.
    #[display("Invalid coordinate {:?}", _0)]
    InvalidCoordinate(String),

    /// The source footprint holds an opponent stone.
    #[display("Footprint contains stones that do not belong to the mover")]
    FootprintOwnership,

    /// A footprint center lies outside the playable region.
    #[display("Center {} is outside the playable area", _0)]
    OutOfBounds(Coordinate),

    /// Source and destination are the same cell.
    #[display("Footprint must move at least one cell")]
    NullMove,

    /// A footprint with an empty center tried to move more than three cells.
    #[display("Footprint with an empty center can move at most 3 cells, not {}", distance)]
    OverDistance {
        /// Requested distance.
        distance: u8,
    },

    /// No mover stone sits next to the center in the direction of travel.
    #[display("No stone in the direction of movement")]
    NoLeadingStone,

    /// An intermediate footprint position is not empty.
    #[display("Path obstructed around {}", _0)]
    PathObstructed(Coordinate),

    /// The move would lift stones of the mover's only ring.
    #[display("Cannot break the mover's last ring at {}", _0)]
    LastRing(Coordinate),

    /// The game has already been decided.
    #[display("Game is already over")]
    GameAlreadyOver,
}

impl std::error::Error for MoveError {}

/// Stones removed from each color by a single move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoneTally {
    /// Black stones removed.
    pub black: usize,
    /// White stones removed.
    pub white: usize,
}

impl StoneTally {
    /// Stones removed for `color`.
    pub fn of(&self, color: Color) -> usize {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    /// Total stones removed.
    pub fn total(&self) -> usize {
        self.black + self.white
    }
}

/// Result of an accepted move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Color that made the move.
    pub mover: Color,
    /// The move that was applied.
    pub mv: Move,
    /// Stones lost by each color to overlap and border attrition.
    pub removed: StoneTally,
    /// Black rings left on the board.
    pub black_rings: usize,
    /// White rings left on the board.
    pub white_rings: usize,
    /// Game status after the move.
    pub status: GameStatus,
}

impl MoveOutcome {
    /// True when this move ended the game.
    pub fn game_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// The winner, when this move ended the game.
    pub fn winner(&self) -> Option<Color> {
        self.status.winner()
    }
}
