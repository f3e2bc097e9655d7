//! Core domain types for Gess.

use super::coordinate::{Coordinate, GRID_SIZE};
use serde::{Deserialize, Serialize};

/// Player color.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Color {
    /// Black (moves first).
    Black,
    /// White.
    White,
}

impl Color {
    /// Returns the opposing color.
    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

/// A cell on the Gess board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No stone.
    #[default]
    Empty,
    /// A stone of the given color.
    Occupied(Color),
}

impl Cell {
    /// True when no stone is present.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Color of the stone, if any.
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(color) => Some(color),
        }
    }
}

/// Stones each color has on the starting board.
pub const STARTING_STONES: usize = 43;

// Columns occupied on each home row, mirrored for White.
const BACK_ROW: [u8; 12] = [2, 4, 6, 7, 8, 9, 10, 11, 12, 13, 15, 17];
const MIDDLE_ROW: [u8; 13] = [1, 2, 3, 5, 7, 8, 9, 10, 12, 14, 16, 17, 18];
const FRONT_ROW: [u8; 6] = [2, 5, 8, 11, 14, 17];

/// The 20x20 Gess grid.
///
/// The 18x18 playable region is surrounded by a one-cell border ring so that
/// a footprint centered on an edge cell still has all nine cells addressable.
/// Stones that land on the border are removed at the end of every move.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
}

impl Board {
    /// Creates a board with no stones.
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Creates the standard starting position.
    pub fn starting() -> Self {
        let mut board = Self::empty();
        let last = (GRID_SIZE - 1) as u8;

        for (black_row, columns) in [
            (1, &BACK_ROW[..]),
            (2, &MIDDLE_ROW[..]),
            (3, &BACK_ROW[..]),
            (6, &FRONT_ROW[..]),
        ] {
            for &col in columns {
                board.set(Coordinate::new(black_row, col), Cell::Occupied(Color::Black));
                board.set(
                    Coordinate::new(last - black_row, col),
                    Cell::Occupied(Color::White),
                );
            }
        }

        board
    }

    /// Gets the cell at a coordinate.
    #[inline]
    pub fn get(&self, at: Coordinate) -> Cell {
        self.cells[at.row() as usize][at.col() as usize]
    }

    /// Sets the cell at a coordinate.
    #[inline]
    pub fn set(&mut self, at: Coordinate, cell: Cell) {
        self.cells[at.row() as usize][at.col() as usize] = cell;
    }

    /// Places a stone of `color` at each coordinate.
    pub fn place_all(&mut self, color: Color, at: impl IntoIterator<Item = Coordinate>) {
        for c in at {
            self.set(c, Cell::Occupied(color));
        }
    }

    /// Checks if a cell is empty.
    #[inline]
    pub fn is_empty(&self, at: Coordinate) -> bool {
        self.get(at).is_empty()
    }

    /// Checks if a cell holds a stone of `color`.
    #[inline]
    pub fn is_color(&self, at: Coordinate, color: Color) -> bool {
        self.get(at) == Cell::Occupied(color)
    }

    /// Number of stones of `color` anywhere on the grid.
    pub fn stone_count(&self, color: Color) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Occupied(color))
            .count()
    }

    /// Rows of cells, top to bottom (row index 0 first).
    pub fn rows(&self) -> &[[Cell; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    /// Clears every cell of the border ring.
    ///
    /// Returns how many stones of each color were removed, Black first.
    pub fn clear_border(&mut self) -> (usize, usize) {
        let mut removed = (0, 0);
        for at in Coordinate::border() {
            match self.get(at) {
                Cell::Occupied(Color::Black) => removed.0 += 1,
                Cell::Occupied(Color::White) => removed.1 += 1,
                Cell::Empty => continue,
            }
            self.set(at, Cell::Empty);
        }
        removed
    }

    /// True when no border cell holds a stone.
    pub fn border_is_clear(&self) -> bool {
        Coordinate::border().all(|at| self.is_empty(at))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a winner.
    Won(Color),
}

impl GameStatus {
    /// Returns the winner, if the game is over.
    pub fn winner(self) -> Option<Color> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(color) => Some(color),
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(color) => write!(f, "{} won", color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Color::Black.opponent(), Color::White);
        assert_eq!(Color::White.opponent(), Color::Black);
    }

    #[test]
    fn test_starting_stone_counts() {
        let board = Board::starting();
        assert_eq!(board.stone_count(Color::Black), STARTING_STONES);
        assert_eq!(board.stone_count(Color::White), STARTING_STONES);
        assert!(board.border_is_clear());
    }

    #[test]
    fn test_starting_layout_is_mirrored() {
        let board = Board::starting();
        for at in Coordinate::playable() {
            let mirror = Coordinate::new(19 - at.row(), at.col());
            let flipped = board.get(at).color().map(Color::opponent);
            assert_eq!(board.get(mirror).color(), flipped, "mismatch at {at}");
        }
    }

    #[test]
    fn test_starting_layout_samples() {
        let board = Board::starting();
        assert!(board.is_color("o7".parse().unwrap(), Color::Black));
        assert!(board.is_empty("l3".parse().unwrap()));
        assert!(board.is_color("r14".parse().unwrap(), Color::White));
        assert!(board.is_empty("o6".parse().unwrap()));
    }

    #[test]
    fn test_clear_border_counts_removed_stones() {
        let mut board = Board::empty();
        board.set(Coordinate::new(0, 4), Cell::Occupied(Color::Black));
        board.set(Coordinate::new(7, 19), Cell::Occupied(Color::White));
        board.set(Coordinate::new(19, 0), Cell::Occupied(Color::White));
        board.set(Coordinate::new(5, 5), Cell::Occupied(Color::Black));

        assert!(!board.border_is_clear());
        assert_eq!(board.clear_border(), (1, 2));
        assert!(board.border_is_clear());
        assert_eq!(board.stone_count(Color::Black), 1);
    }

    #[test]
    fn test_status_winner() {
        assert_eq!(GameStatus::InProgress.winner(), None);
        assert_eq!(GameStatus::Won(Color::White).winner(), Some(Color::White));
        assert_eq!(GameStatus::Won(Color::Black).to_string(), "Black won");
    }
}
