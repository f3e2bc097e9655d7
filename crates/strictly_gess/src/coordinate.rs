//! Board coordinates and the `l3` text notation.

use super::action::MoveError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Width and height of the full grid, border ring included.
pub const GRID_SIZE: usize = 20;

/// First playable row/column index.
pub const PLAY_MIN: u8 = 1;

/// Last playable row/column index.
pub const PLAY_MAX: u8 = 18;

/// Column letters, one per grid column.
pub const ALPHABET: &str = "abcdefghijklmnopqrst";

/// A cell address on the 20x20 grid.
///
/// Text form is a column letter followed by a 1-based row number: `l3` is
/// row index 2, column index 11. Letters `a` and `t` and numbers `1` and `20`
/// name the border ring; the playable region is `b..=s` by `2..=19`.
///
/// A `Coordinate` is always on the grid: the fields are private and every
/// constructor, deserialization included, checks the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "GridIndex")]
pub struct Coordinate {
    row: u8,
    col: u8,
}

/// Unchecked wire form of a `Coordinate`.
#[derive(Deserialize)]
struct GridIndex {
    row: u8,
    col: u8,
}

impl TryFrom<GridIndex> for Coordinate {
    type Error = MoveError;

    fn try_from(index: GridIndex) -> Result<Self, Self::Error> {
        Self::try_new(index.row.into(), index.col.into()).ok_or_else(|| {
            MoveError::InvalidCoordinate(format!("row {}, col {}", index.row, index.col))
        })
    }
}

impl Coordinate {
    /// Creates a coordinate from grid indices.
    ///
    /// # Panics
    ///
    /// Panics when either index is `GRID_SIZE` or more. Use `try_new` for
    /// indices that are not known to be on the grid.
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        assert!(
            (row as usize) < GRID_SIZE && (col as usize) < GRID_SIZE,
            "({row}, {col}) is off the {GRID_SIZE}x{GRID_SIZE} grid"
        );
        Self { row, col }
    }

    /// Zero-based row index.
    #[inline]
    pub fn row(self) -> u8 {
        self.row
    }

    /// Zero-based column index.
    #[inline]
    pub fn col(self) -> u8 {
        self.col
    }

    /// Creates a coordinate from signed indices, `None` when off the grid.
    #[inline]
    pub fn try_new(row: i32, col: i32) -> Option<Self> {
        let in_grid = |v: i32| v >= 0 && (v as usize) < GRID_SIZE;
        (in_grid(row) && in_grid(col)).then(|| Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Returns the coordinate shifted by `(dr, dc)`, `None` when off the grid.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32) -> Option<Self> {
        Self::try_new(self.row as i32 + dr, self.col as i32 + dc)
    }

    /// True when the coordinate lies in the 18x18 playable region.
    #[inline]
    pub fn is_playable(self) -> bool {
        (PLAY_MIN..=PLAY_MAX).contains(&self.row) && (PLAY_MIN..=PLAY_MAX).contains(&self.col)
    }

    /// True when the coordinate lies on the outermost border ring.
    #[inline]
    pub fn is_border(self) -> bool {
        let last = (GRID_SIZE - 1) as u8;
        self.row == 0 || self.col == 0 || self.row == last || self.col == last
    }

    /// Decodes `l3`-style notation.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::InvalidCoordinate` when the letter is outside
    /// `a..=t` or the number is not a plain decimal in `1..=20`.
    #[instrument]
    pub fn decode(text: &str) -> Result<Self, MoveError> {
        let invalid = || MoveError::InvalidCoordinate(text.to_string());

        let mut chars = text.chars();
        let letter = chars.next().ok_or_else(invalid)?;
        let col = ALPHABET.find(letter).ok_or_else(invalid)?;

        // digits only: no sign, no leading zero
        let digits = chars.as_str();
        if digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let number: usize = digits.parse().map_err(|_| invalid())?;
        if number == 0 || number > GRID_SIZE {
            return Err(invalid());
        }

        Ok(Self::new((number - 1) as u8, col as u8))
    }

    /// Iterates the playable region in row-major order.
    pub fn playable() -> impl Iterator<Item = Coordinate> {
        (PLAY_MIN..=PLAY_MAX).flat_map(|row| (PLAY_MIN..=PLAY_MAX).map(move |col| Coordinate { row, col }))
    }

    /// Iterates every cell of the border ring.
    pub fn border() -> impl Iterator<Item = Coordinate> {
        let size = GRID_SIZE as u8;
        (0..size)
            .flat_map(move |row| (0..size).map(move |col| Coordinate { row, col }))
            .filter(|c| c.is_border())
    }
}

impl FromStr for Coordinate {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = ALPHABET.as_bytes()[self.col as usize] as char;
        write!(f, "{}{}", letter, self.row as usize + 1)
    }
}
