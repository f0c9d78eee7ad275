use super::row::{compress, reverse, Cell, EMPTY};
use crate::error::Error;

/// Number of rows and columns of the playing grid.
pub(crate) const SIZE: usize = 5;

const _: () = assert!(SIZE >= 2, "a grid needs at least two rows and columns");

/// Direction represents the direction the player slides the tiles in.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
        }
    }
}

/// Directions are named by the vim navigation keys, case-insensitively.
impl TryFrom<char> for Direction {
    type Error = Error;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'H' => Ok(Self::Left),
            'J' => Ok(Self::Down),
            'K' => Ok(Self::Up),
            'L' => Ok(Self::Right),
            _ => Err(Error::InvalidDirection(c)),
        }
    }
}

/// Idx addresses a grid cell by column (x) and row (y).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) struct Idx(pub(crate) usize, pub(crate) usize);

impl std::fmt::Display for Idx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "idx({0},{1})", self.0, self.1)
    }
}

impl Idx {
    pub(crate) fn x(&self) -> usize {
        self.0
    }

    pub(crate) fn y(&self) -> usize {
        self.1
    }
}

/// Grid is an immutable snapshot of an N by N board of cells.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Grid<const N: usize = SIZE> {
    rows: [[Cell; N]; N],
}

impl<const N: usize> Default for Grid<N> {
    fn default() -> Self {
        Self {
            rows: [[EMPTY; N]; N],
        }
    }
}

impl<const N: usize> From<[[Cell; N]; N]> for Grid<N> {
    fn from(rows: [[Cell; N]; N]) -> Self {
        Self { rows }
    }
}

// public methods
impl<const N: usize> Grid<N> {
    pub(crate) fn rows(&self) -> &[[Cell; N]; N] {
        &self.rows
    }

    #[cfg(test)]
    pub(crate) fn get(&self, idx: &Idx) -> Cell {
        self.rows[idx.y()][idx.x()]
    }

    /// Return a copy of the grid with the cell at idx replaced by value.
    pub(crate) fn with(&self, idx: &Idx, value: Cell) -> Self {
        let mut rows = self.rows;
        rows[idx.y()][idx.x()] = value;
        Self { rows }
    }

    /// All empty cells in row-major order.
    pub(crate) fn empty_cells(&self) -> Vec<Idx> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .filter(|(_, value)| **value == EMPTY)
                    .map(move |(x, _)| Idx(x, y))
            })
            .collect()
    }

    pub(crate) fn sum(&self) -> Cell {
        self.rows.iter().flatten().sum()
    }

    /// Slide and merge every row or column of the grid in the given direction.
    ///
    /// Only the leftward row compression is a real algorithm; the remaining directions reduce to
    /// it by reversing rows (right), transposing (up) or both (down).
    pub(crate) fn shift(&self, direction: Direction) -> Self {
        match direction {
            Direction::Left => self.map_rows(compress),
            Direction::Right => self.reverse_rows().shift(Direction::Left).reverse_rows(),
            Direction::Up => self.transpose().shift(Direction::Left).transpose(),
            Direction::Down => self.transpose().shift(Direction::Right).transpose(),
        }
    }

    pub(crate) fn transpose(&self) -> Self {
        let mut rows = [[EMPTY; N]; N];
        for (y, row) in self.rows.iter().enumerate() {
            for (x, value) in row.iter().enumerate() {
                rows[x][y] = *value;
            }
        }
        Self { rows }
    }

    pub(crate) fn reverse_rows(&self) -> Self {
        self.map_rows(reverse)
    }
}

// private methods
impl<const N: usize> Grid<N> {
    fn map_rows<F>(&self, f: F) -> Self
    where
        F: Fn([Cell; N]) -> [Cell; N],
    {
        Self {
            rows: self.rows.map(f),
        }
    }
}
