//! Footprint geometry: windows, directions and distances between centers.

use super::coordinate::Coordinate;
use serde::{Deserialize, Serialize};

/// Offsets of the 3x3 footprint window in row-major order, center included.
pub const FOOTPRINT_OFFSETS: [(i32, i32); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Unit step between two centers; each component is -1, 0 or 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Direction {
    /// Row step.
    pub dr: i32,
    /// Column step.
    pub dc: i32,
}

impl Direction {
    /// Applies the step `times` times to `from`, `None` when off the grid.
    #[inline]
    pub fn step(self, from: Coordinate, times: i32) -> Option<Coordinate> {
        from.offset(self.dr * times, self.dc * times)
    }
}

/// In-grid cells of the 3x3 window around `center`.
pub fn footprint(center: Coordinate) -> impl Iterator<Item = Coordinate> {
    FOOTPRINT_OFFSETS
        .iter()
        .filter_map(move |&(dr, dc)| center.offset(dr, dc))
}

/// In-grid cells surrounding `center`, the center itself excluded.
pub fn neighbors(center: Coordinate) -> impl Iterator<Item = Coordinate> {
    FOOTPRINT_OFFSETS
        .iter()
        .filter(|&&offset| offset != (0, 0))
        .filter_map(move |&(dr, dc)| center.offset(dr, dc))
}

/// Direction of travel from one center to another.
///
/// Each component is the sign of the delta on that axis, so moves that are
/// not on a straight line still resolve to one of the eight compass steps.
/// Returns `None` for a zero-length move.
pub fn direction(from: Coordinate, to: Coordinate) -> Option<Direction> {
    let dr = (to.row() as i32 - from.row() as i32).signum();
    let dc = (to.col() as i32 - from.col() as i32).signum();
    if (dr, dc) == (0, 0) {
        None
    } else {
        Some(Direction { dr, dc })
    }
}

/// Chebyshev distance between two centers.
pub fn distance(from: Coordinate, to: Coordinate) -> u8 {
    from.row().abs_diff(to.row()).max(from.col().abs_diff(to.col()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(text: &str) -> Coordinate {
        text.parse().unwrap()
    }

    #[test]
    fn test_neighbors_of_interior_center() {
        let center = Coordinate::new(5, 5);
        let cells: Vec<_> = neighbors(center).collect();
        assert_eq!(cells.len(), 8);
        assert!(!cells.contains(&center));
        assert!(cells.iter().all(|c| super::distance(center, *c) == 1));
    }

    #[test]
    fn test_footprint_clips_at_grid_edge() {
        assert_eq!(footprint(Coordinate::new(5, 5)).count(), 9);
        assert_eq!(footprint(Coordinate::new(0, 0)).count(), 4);
        assert_eq!(neighbors(Coordinate::new(0, 7)).count(), 5);
    }

    #[test]
    fn test_direction_is_per_axis_sign() {
        assert_eq!(direction(at("o6"), at("o7")), Some(Direction { dr: 1, dc: 0 }));
        assert_eq!(direction(at("r15"), at("r14")), Some(Direction { dr: -1, dc: 0 }));
        assert_eq!(direction(at("i15"), at("g13")), Some(Direction { dr: -1, dc: -1 }));
        // off-line move still resolves to a diagonal step
        assert_eq!(direction(at("g13"), at("b9")), Some(Direction { dr: -1, dc: -1 }));
    }

    #[test]
    fn test_direction_of_null_move_is_none() {
        assert_eq!(direction(at("k10"), at("k10")), None);
    }

    #[test]
    fn test_distance_is_chebyshev() {
        assert_eq!(distance(at("o7"), at("o10")), 3);
        assert_eq!(distance(at("i15"), at("g13")), 2);
        assert_eq!(distance(at("g13"), at("b9")), 5);
        assert_eq!(distance(at("c3"), at("c3")), 0);
    }

    #[test]
    fn test_step_walks_the_path() {
        let dir = Direction { dr: 1, dc: 1 };
        assert_eq!(dir.step(at("c3"), 2), Some(at("e5")));
        assert_eq!(dir.step(Coordinate::new(18, 18), 2), None);
    }
}
