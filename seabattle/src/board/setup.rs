//! Implements the setup phase of the board.
use std::collections::HashSet;

use crate::board::{Board, CannotPlaceReason, CellState, Coordinate, Grid, PlaceError};
use crate::ships::Ship;

/// Setup phase for a [`Board`]. Allows placing ships and does not allow
/// shooting.
pub struct BoardSetup {
    /// Grid that ships are being placed into.
    grid: Grid,

    /// Ships placed so far.
    ships: Vec<Ship>,

    /// Cells no further ship may use: every occupied cell plus the one-cell
    /// buffer around each placed ship.
    blocked: HashSet<Coordinate>,
}

impl BoardSetup {
    /// Begin setup of a `size` by `size` board with no ships placed.
    pub fn new(size: usize) -> Self {
        Self {
            grid: Grid::new(size),
            ships: Vec::new(),
            blocked: HashSet::new(),
        }
    }

    /// Side length of the board under setup.
    pub fn size(&self) -> usize {
        self.grid.size
    }

    /// Ships placed so far.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Attempts to place `ship`. Fails if any of its cells is off the board,
    /// overlaps a placed ship, or touches one (diagonals included). The
    /// board is not modified unless the whole ship fits.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), PlaceError> {
        for coord in ship.cells() {
            if !self.grid.in_bounds(coord) {
                return Err(PlaceError::new(CannotPlaceReason::OutOfBounds, ship));
            }
            if self.blocked.contains(&coord) {
                return Err(PlaceError::new(CannotPlaceReason::Blocked, ship));
            }
        }
        // Every cell is on the board and free, commit.
        for coord in ship.cells() {
            self.grid.set(coord, CellState::Ship);
            self.blocked.insert(coord);
        }
        for coord in self.grid.halo(&ship) {
            self.blocked.insert(coord);
        }
        self.ships.push(ship);
        Ok(())
    }

    /// End the setup phase. The placement buffer is discarded; the returned
    /// [`Board`] starts play with an empty shot history.
    pub fn start(self) -> Board {
        Board {
            grid: self.grid,
            ships: self.ships,
            shots: HashSet::new(),
            sunk: 0,
        }
    }
}
