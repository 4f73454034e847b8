//! Random placement of the standard fleet.

use log::debug;
use rand::Rng;

use crate::board::{Board, BoardSetup, Coordinate};
use crate::ships::Ship;

/// Ship lengths making up the standard fleet: one three-cell, two two-cell
/// and four one-cell ships.
pub const DEFAULT_LENGTHS: &[usize] = &[3, 2, 2, 1, 1, 1, 1];

/// Placement attempts allowed across one whole fleet before the board is
/// thrown away as a lost cause.
const ATTEMPT_BUDGET: u32 = 2000;

/// Try to place one fleet on a fresh board, redrawing each rejected
/// position. Returns `None` if the attempt budget runs out before the whole
/// fleet fits.
pub fn try_random_board(rng: &mut impl Rng, size: usize, lengths: &[usize]) -> Option<Board> {
    let mut setup = BoardSetup::new(size);
    let mut attempts = 0u32;
    for &length in lengths {
        loop {
            attempts += 1;
            if attempts > ATTEMPT_BUDGET {
                return None;
            }
            let origin = Coordinate::new(rng.gen_range(0, size), rng.gen_range(0, size));
            let ship = Ship::new(origin, length, rng.gen());
            if setup.place_ship(ship).is_ok() {
                break;
            }
        }
    }
    Some(setup.start())
}

/// Build a board with the given fleet placed at random, restarting from an
/// empty board whenever the attempt budget runs out. With a fleet sparse
/// enough for the board this always terminates.
pub fn random_board(rng: &mut impl Rng, size: usize, lengths: &[usize]) -> Board {
    loop {
        match try_random_board(rng, size, lengths) {
            Some(board) => return board,
            None => debug!("placement budget exhausted, restarting on a fresh board"),
        }
    }
}
