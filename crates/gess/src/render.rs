//! Text rendering of a Gess board.

use crate::config::RenderConfig;
use std::fmt;
use strictly_gess::{ALPHABET, Board, Cell, Color, GRID_SIZE, PLAY_MAX, PLAY_MIN};

/// Borrowed view of a board that renders with the configured symbols.
///
/// Row 1 is printed first so that the layout reads the same way the
/// coordinates are written.
pub struct BoardView<'a> {
    board: &'a Board,
    render: &'a RenderConfig,
}

impl<'a> BoardView<'a> {
    /// Creates a view over `board`.
    pub fn new(board: &'a Board, render: &'a RenderConfig) -> Self {
        Self { board, render }
    }

    fn span(&self) -> std::ops::RangeInclusive<usize> {
        if *self.render.show_border() {
            0..=GRID_SIZE - 1
        } else {
            PLAY_MIN as usize..=PLAY_MAX as usize
        }
    }

    fn symbol(&self, cell: Cell) -> &str {
        match cell {
            Cell::Empty => self.render.empty(),
            Cell::Occupied(Color::Black) => self.render.black(),
            Cell::Occupied(Color::White) => self.render.white(),
        }
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels = *self.render.show_labels();

        if labels {
            let letters: Vec<String> = self
                .span()
                .filter_map(|col| ALPHABET.chars().nth(col))
                .map(String::from)
                .collect();
            writeln!(f, "    {}", letters.join(" "))?;
        }

        for row in self.span() {
            let symbols: Vec<&str> = self
                .span()
                .map(|col| self.symbol(self.board.rows()[row][col]))
                .collect();
            if labels {
                write!(f, "{:>3} ", row + 1)?;
            }
            writeln!(f, "{}", symbols.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_board_rows() {
        let board = Board::starting();
        let render = RenderConfig::default();
        let text = BoardView::new(&board, &render).to_string();
        let lines: Vec<&str> = text.lines().collect();

        // header plus 18 playable rows
        assert_eq!(lines.len(), 19);
        assert!(lines[0].trim_start().starts_with("b c d"));
        assert!(lines[0].trim_end().ends_with('s'));
        // row 2 holds the black back row: c2, e2, g2..n2, p2, r2
        assert_eq!(lines[1], "  2 . b . b . b b b b b b b b . b . b .");
        // row 3 is black's ring row with l3 empty
        assert_eq!(lines[2], "  3 b b b . b . b b b b . b . b . b b b");
    }

    #[test]
    fn test_border_and_no_labels() {
        let board = Board::empty();
        let toml = "show_border = true\nshow_labels = false\nempty = \"+\"";
        let render: RenderConfig = toml::from_str(toml).unwrap();
        let text = BoardView::new(&board, &render).to_string();

        assert_eq!(text.lines().count(), GRID_SIZE);
        assert!(text.lines().all(|line| line == vec!["+"; GRID_SIZE].join(" ")));
    }
}
