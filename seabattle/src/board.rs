//! Types that make up the game board.

use std::collections::HashSet;

use crate::ships::Ship;

use self::grid::Grid;
pub use self::{
    coordinate::Coordinate,
    errors::{CannotPlaceReason, CannotShootReason, PlaceError, ShotError},
    grid::CellState,
    setup::BoardSetup,
};

mod coordinate;
mod errors;
mod grid;
pub mod setup;

/// Result of a shot on a single player's board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShotOutcome {
    /// The shot landed in open water.
    Miss,
    /// The shot hit a ship without sinking it.
    Hit,
    /// The shot sank a ship.
    Sunk,
}

impl ShotOutcome {
    /// Whether the shooter keeps the turn. Hitting a ship, sinking it
    /// included, grants another shot; a miss passes the turn.
    pub fn keeps_turn(self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

/// Represents a single player's board during play: their ships, their side
/// of the sea, and every shot taken at it.
pub struct Board {
    /// Grid of cells as the owning player sees them.
    grid: Grid,

    /// The player's fleet.
    ships: Vec<Ship>,

    /// Cells that may no longer be targeted: every resolved shot, plus the
    /// known-empty halo around sunk ships.
    shots: HashSet<Coordinate>,

    /// Number of the player's ships sunk so far.
    sunk: usize,
}

impl Board {
    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.grid.size
    }

    /// The player's ships.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of the player's ships that have been sunk.
    pub fn sunk_count(&self) -> usize {
        self.sunk
    }

    /// Returns true once every ship on this board has been sunk.
    pub fn defeated(&self) -> bool {
        self.sunk == self.ships.len()
    }

    /// State of the cell at `coord`, or `None` if it is off the board.
    pub fn cell(&self, coord: Coordinate) -> Option<CellState> {
        self.grid.get(coord)
    }

    /// Iterate the rows of the board, top to bottom, for rendering. Hiding
    /// intact ships from the opponent is the renderer's concern.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> + '_ {
        self.grid.rows()
    }

    /// Fire a shot at this board, returning either the result of the shot
    /// or the reason it was rejected. Rejected shots leave the board
    /// untouched.
    pub fn shoot(&mut self, coord: Coordinate) -> Result<ShotOutcome, ShotError> {
        if !self.grid.in_bounds(coord) {
            return Err(ShotError::new(CannotShootReason::OutOfBounds, coord));
        }
        if self.shots.contains(&coord) {
            return Err(ShotError::new(CannotShootReason::AlreadyShot, coord));
        }
        self.shots.insert(coord);
        match self.ships.iter().position(|ship| ship.covers(coord)) {
            Some(idx) => {
                self.ships[idx].register_hit();
                self.grid.set(coord, CellState::Hit);
                if self.ships[idx].sunk() {
                    self.sunk += 1;
                    self.mark_contour(idx);
                    Ok(ShotOutcome::Sunk)
                } else {
                    Ok(ShotOutcome::Hit)
                }
            }
            None => {
                self.grid.set(coord, CellState::Miss);
                Ok(ShotOutcome::Miss)
            }
        }
    }

    /// Mark the halo of a freshly sunk ship. The surrounding water is known
    /// to be empty, so it joins the shot set and is shown as contour.
    fn mark_contour(&mut self, idx: usize) {
        let ship = self.ships[idx];
        let halo: Vec<Coordinate> = self.grid.halo(&ship).collect();
        for coord in halo {
            if self.shots.insert(coord) {
                self.grid.set(coord, CellState::Contour);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ships::Orientation;

    fn board_with(ships: &[(usize, usize, usize, Orientation)]) -> Board {
        let mut setup = BoardSetup::new(6);
        for &(row, col, length, orientation) in ships {
            setup
                .place_ship(Ship::new(Coordinate::new(row, col), length, orientation))
                .unwrap();
        }
        setup.start()
    }

    #[test]
    fn miss_marks_the_cell() {
        let mut board = board_with(&[(2, 2, 1, Orientation::Horizontal)]);
        assert_eq!(board.shoot(Coordinate::new(0, 0)).unwrap(), ShotOutcome::Miss);
        assert_eq!(board.cell(Coordinate::new(0, 0)), Some(CellState::Miss));
        assert_eq!(board.sunk_count(), 0);
    }

    #[test]
    fn out_of_bounds_shot_is_rejected() {
        let mut board = board_with(&[(2, 2, 1, Orientation::Horizontal)]);
        let err = board.shoot(Coordinate::new(6, 0)).unwrap_err();
        assert_eq!(err.reason(), CannotShootReason::OutOfBounds);
        assert_eq!(err.coord(), Coordinate::new(6, 0));
    }

    #[test]
    fn second_shot_at_the_same_cell_is_rejected() {
        let mut board = board_with(&[(2, 2, 2, Orientation::Horizontal)]);
        // After a miss.
        board.shoot(Coordinate::new(0, 0)).unwrap();
        let err = board.shoot(Coordinate::new(0, 0)).unwrap_err();
        assert_eq!(err.reason(), CannotShootReason::AlreadyShot);
        // After a hit.
        assert_eq!(board.shoot(Coordinate::new(2, 2)).unwrap(), ShotOutcome::Hit);
        let err = board.shoot(Coordinate::new(2, 2)).unwrap_err();
        assert_eq!(err.reason(), CannotShootReason::AlreadyShot);
    }

    #[test]
    fn sinking_takes_exactly_length_hits() {
        let mut board = board_with(&[(1, 1, 3, Orientation::Horizontal)]);
        assert_eq!(board.shoot(Coordinate::new(1, 1)).unwrap(), ShotOutcome::Hit);
        assert_eq!(board.shoot(Coordinate::new(1, 2)).unwrap(), ShotOutcome::Hit);
        assert_eq!(board.shoot(Coordinate::new(1, 3)).unwrap(), ShotOutcome::Sunk);
        assert_eq!(board.sunk_count(), 1);
        assert!(board.defeated());
    }

    #[test]
    fn sinking_marks_the_contour_as_shot() {
        let mut board = board_with(&[(2, 2, 1, Orientation::Horizontal)]);
        board.shoot(Coordinate::new(2, 2)).unwrap();
        assert_eq!(board.cell(Coordinate::new(1, 1)), Some(CellState::Contour));
        // The contour counts as already targeted.
        let err = board.shoot(Coordinate::new(3, 3)).unwrap_err();
        assert_eq!(err.reason(), CannotShootReason::AlreadyShot);
    }

    #[test]
    fn contour_marking_leaves_misses_alone() {
        let mut board = board_with(&[(2, 2, 1, Orientation::Horizontal)]);
        board.shoot(Coordinate::new(1, 1)).unwrap();
        board.shoot(Coordinate::new(2, 2)).unwrap();
        assert_eq!(board.cell(Coordinate::new(1, 1)), Some(CellState::Miss));
    }

    #[test]
    fn defeat_requires_every_ship() {
        let mut board = board_with(&[
            (0, 0, 1, Orientation::Horizontal),
            (5, 5, 1, Orientation::Horizontal),
        ]);
        assert_eq!(board.shoot(Coordinate::new(0, 0)).unwrap(), ShotOutcome::Sunk);
        assert!(!board.defeated());
        assert_eq!(board.shoot(Coordinate::new(5, 5)).unwrap(), ShotOutcome::Sunk);
        assert_eq!(board.sunk_count(), 2);
        assert!(board.defeated());
    }

    #[test]
    fn single_ship_scenario() {
        let mut board = board_with(&[(2, 2, 1, Orientation::Horizontal)]);
        assert_eq!(board.shoot(Coordinate::new(0, 0)).unwrap(), ShotOutcome::Miss);
        let err = board.shoot(Coordinate::new(0, 0)).unwrap_err();
        assert_eq!(err.reason(), CannotShootReason::AlreadyShot);
        assert_eq!(board.shoot(Coordinate::new(2, 2)).unwrap(), ShotOutcome::Sunk);
        assert_eq!(board.sunk_count(), 1);
    }

    #[test]
    fn outcome_turn_law() {
        assert!(!ShotOutcome::Miss.keeps_turn());
        assert!(ShotOutcome::Hit.keeps_turn());
        assert!(ShotOutcome::Sunk.keeps_turn());
    }
}
