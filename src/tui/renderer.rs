use super::error::Result;
use crate::engine::grid::Grid;
use crate::engine::row::Cell;

/// Width of the field every cell is right-justified in.
pub(crate) const CELL_WIDTH: usize = 5;

pub(crate) const GREETING: [&str; 19] = [
    "",
    "    *********************************************************",
    "    *                                                       *",
    "    *   Welcome to 2048.                                    *",
    "    *                                                       *",
    "    *   Equal numbers are summed when pressed together.     *",
    "    *                                                       *",
    "    *   The sums may get as high as you like,               *",
    "    *   as long as the board can be moved.                  *",
    "    *                                                       *",
    "    *   Press [H J K L] to move [LEFT DOWN UP RIGHT].       *",
    "    *   (These are the Vim navigation keys.)                *",
    "    *                                                       *",
    "    *   Press Q to QUIT.                                    *",
    "    *                                                       *",
    "    *   Enjoy!                                              *",
    "    *                                                       *",
    "    *********************************************************",
    "",
];

/// Renderer draws the session onto some output surface.
pub(crate) trait Renderer {
    fn clear(&mut self) -> Result<()>;
    fn greet(&mut self) -> Result<()>;
    fn render(&mut self, grid: &Grid) -> Result<()>;
}

pub(crate) fn cell_text(value: Cell) -> String {
    format!("{:>width$}", value, width = CELL_WIDTH)
}

/// Lay the grid out as one line of cells per row, framed by a blank line above and below.
pub(crate) fn grid_lines<const N: usize>(grid: &Grid<N>) -> Vec<&[Cell]> {
    let mut lines: Vec<&[Cell]> = Vec::with_capacity(N + 2);
    lines.push(&[]);
    lines.extend(grid.rows().iter().map(|row| &row[..]));
    lines.push(&[]);
    lines
}

#[cfg(test)]
pub(crate) fn line_text(line: &[Cell]) -> String {
    line.iter().map(|v| cell_text(*v)).collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::engine::grid::SIZE;

    #[test]
    fn cells_are_right_justified() {
        assert_eq!(cell_text(0), "    0");
        assert_eq!(cell_text(1), "    1");
        assert_eq!(cell_text(1024), " 1024");
        assert_eq!(cell_text(131072), "131072");
    }

    #[test]
    fn grid_is_framed_by_blank_lines() {
        let grid = Grid::from([[1, 0], [16, 2]]);
        let lines = grid_lines(&grid)
            .into_iter()
            .map(line_text)
            .collect::<Vec<_>>();
        assert_eq!(lines, vec!["", "    1    0", "   16    2", ""]);
    }

    #[test]
    fn default_grid_lines() {
        let grid = Grid::<SIZE>::default();
        let lines = grid_lines(&grid);
        assert_eq!(lines.len(), SIZE + 2);
        assert!(lines[1..=SIZE]
            .iter()
            .all(|l| line_text(l).len() == SIZE * CELL_WIDTH));
    }

    #[test]
    fn greeting_names_every_key() {
        let greeting = GREETING.join("\n");
        for key in ["H J K L", "Q to QUIT"] {
            assert!(greeting.contains(key), "missing {}", key);
        }
    }
}
