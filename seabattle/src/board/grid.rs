//! Defines the cell matrix shared between the board's setup and playing
//! phases.

use crate::board::Coordinate;
use crate::ships::Ship;

/// State of a single cell as the owning player sees it.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CellState {
    /// Open water nobody has fired at.
    Empty,
    /// An intact ship segment.
    Ship,
    /// A ship segment that has been hit.
    Hit,
    /// A shot that landed in open water.
    Miss,
    /// Water marked as known empty around a sunk ship.
    Contour,
}

/// Square cell matrix shared between [`BoardSetup`][crate::board::BoardSetup]
/// and [`Board`][crate::board::Board].
#[derive(Debug)]
pub(super) struct Grid {
    /// Side length of the board.
    pub(super) size: usize,
    /// Cells in row-major order.
    cells: Box<[CellState]>,
}

impl Grid {
    pub(super) fn new(size: usize) -> Self {
        assert!(size > 0);
        Self {
            size,
            cells: vec![CellState::Empty; size * size].into_boxed_slice(),
        }
    }

    /// Whether `coord` is on the board.
    pub(super) fn in_bounds(&self, coord: Coordinate) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    /// Convert a coordinate to an index in `cells`.
    /// Returns `None` if the coordinate is out of bounds.
    fn try_linearize(&self, coord: Coordinate) -> Option<usize> {
        if self.in_bounds(coord) {
            Some(coord.row * self.size + coord.col)
        } else {
            None
        }
    }

    /// Get the state of the cell at `coord`, if it is on the board.
    pub(super) fn get(&self, coord: Coordinate) -> Option<CellState> {
        self.try_linearize(coord).map(|idx| self.cells[idx])
    }

    /// Set the state of the cell at `coord`.
    /// Panics if the coordinate is out of bounds.
    pub(super) fn set(&mut self, coord: Coordinate, state: CellState) {
        match self.try_linearize(coord) {
            Some(idx) => self.cells[idx] = state,
            None => panic!("{0:?} is out of bounds for a {1}x{1} board", coord, self.size),
        }
    }

    /// Iterate the rows of the grid, top to bottom.
    pub(super) fn rows(&self) -> impl Iterator<Item = &[CellState]> + '_ {
        self.cells.chunks(self.size)
    }

    /// Iterate the one-cell halo of `ship`: each of its cells plus all their
    /// in-bounds neighbors, diagonals included. Cells shared between
    /// neighborhoods are yielded more than once.
    pub(super) fn halo(&self, ship: &Ship) -> impl Iterator<Item = Coordinate> {
        let size = self.size;
        ship.cells().flat_map(move |cell| {
            let rows = cell.row.saturating_sub(1)..=(cell.row + 1).min(size - 1);
            rows.flat_map(move |row| {
                let cols = cell.col.saturating_sub(1)..=(cell.col + 1).min(size - 1);
                cols.map(move |col| Coordinate::new(row, col))
            })
        })
    }
}
