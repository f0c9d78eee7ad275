use rand::seq::SliceRandom;
use rand::RngCore;

use super::grid::{Direction, Grid, Idx};
use super::row::Cell;

/// Value of every newly spawned tile.
pub(crate) const NEW_TILE: Cell = 1;

/// Shift reports whether a requested move changed the board.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Shift {
    /// The grid changed; spawned holds the new tile's position unless the board was full.
    Accepted { spawned: Option<Idx> },
    Unchanged,
}

/// Place one NEW_TILE at the empty cell picked by choose. A full grid is returned untouched
/// without consulting choose.
pub(crate) fn spawn_one<const N: usize, F>(grid: &Grid<N>, choose: F) -> (Grid<N>, Option<Idx>)
where
    F: FnOnce(&[Idx]) -> Option<Idx>,
{
    let empty = grid.empty_cells();
    if empty.is_empty() {
        return (grid.clone(), None);
    }
    match choose(&empty) {
        Some(idx) => (grid.with(&idx, NEW_TILE), Some(idx)),
        None => (grid.clone(), None),
    }
}

/// Apply direction to grid and, if anything moved, spawn a tile. An unchanged grid is a rejected
/// move and never spawns.
pub(crate) fn step<const N: usize, F>(
    grid: &Grid<N>,
    direction: Direction,
    choose: F,
) -> (Grid<N>, Shift)
where
    F: FnOnce(&[Idx]) -> Option<Idx>,
{
    let updated = grid.shift(direction);
    debug_assert_eq!(updated.sum(), grid.sum(), "shifting must conserve the tile sum");
    if updated == *grid {
        return (updated, Shift::Unchanged);
    }
    let (spawned_grid, spawned) = spawn_one(&updated, choose);
    (spawned_grid, Shift::Accepted { spawned })
}

/// Board owns the grid of the current session along with its random number generator.
pub(crate) struct Board {
    rng: Box<dyn RngCore>,
    grid: Grid,
}

impl Board {
    /// Initialize an empty board holding a single random tile.
    pub(crate) fn new(rng: impl RngCore + 'static) -> Self {
        let mut rng: Box<dyn RngCore> = Box::new(rng);
        let (grid, spawned) =
            spawn_one(&Grid::default(), |cells| cells.choose(&mut rng).copied());
        if let Some(idx) = spawned {
            log::debug!("initial tile at {}", idx);
        }
        Self { rng, grid }
    }

    /// Shift the board in the given direction, spawning a tile at a uniformly random empty cell
    /// when the grid changed.
    pub(crate) fn shift(&mut self, direction: Direction) -> Shift {
        let rng = &mut self.rng;
        let (grid, shift) = step(&self.grid, direction, |cells| cells.choose(rng).copied());
        self.grid = grid;
        shift
    }

    pub(crate) fn current(&self) -> &Grid {
        &self.grid
    }

    #[cfg(test)]
    pub(crate) fn set_grid(&mut self, grid: Grid) {
        self.grid = grid;
    }
}
