//! Types used for defining ships and their positions.
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use crate::board::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Orientation {
    /// The ship extends along a row, one column per cell.
    Horizontal,
    /// The ship extends along a column, one row per cell.
    Vertical,
}

impl Distribution<Orientation> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        if rng.gen() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// A ship occupying a straight line of cells, with a hit-point pool equal to
/// its length.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Ship {
    origin: Coordinate,
    length: usize,
    orientation: Orientation,
    hits_left: usize,
}

impl Ship {
    /// Construct a ship with its bow at `origin`, extending `length` cells
    /// along `orientation`. Panics if `length` is 0.
    pub fn new(origin: Coordinate, length: usize, orientation: Orientation) -> Self {
        assert!(length > 0);
        Self {
            origin,
            length,
            orientation,
            hits_left: length,
        }
    }

    /// The cell the ship's bow occupies.
    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    /// Number of cells the ship occupies.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Which way the ship extends from its bow.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Iterate the cells this ship occupies, bow first. Performs no bounds
    /// checking; keeping ships on the board is the board's job.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let Self {
            origin,
            length,
            orientation,
            ..
        } = *self;
        (0..length).map(move |step| match orientation {
            Orientation::Horizontal => Coordinate::new(origin.row, origin.col + step),
            Orientation::Vertical => Coordinate::new(origin.row + step, origin.col),
        })
    }

    /// Whether `coord` is one of this ship's cells.
    pub fn covers(&self, coord: Coordinate) -> bool {
        self.cells().any(|cell| cell == coord)
    }

    /// Record a hit on this ship. Panics if the ship is already sunk.
    pub fn register_hit(&mut self) {
        assert!(self.hits_left > 0, "hit registered on a sunk ship");
        self.hits_left -= 1;
    }

    /// Hit points remaining before the ship sinks.
    pub fn hits_left(&self) -> usize {
        self.hits_left
    }

    /// A ship sinks once every one of its cells has been hit.
    pub fn sunk(&self) -> bool {
        self.hits_left == 0
    }
}
