//! Implementation of the classic Sea Battle rules of battleship: every ship
//! is a straight line of cells, ships may never touch each other (not even
//! diagonally), and a player who scores a hit shoots again.
//!
//! The crate is split between the per-player [`board`] (ship placement and
//! shooting), the [`fleet`] module which fills a board with the standard
//! fleet at random positions, and the [`game`] module which runs the
//! two-player turn loop.

pub mod board;
pub mod fleet;
pub mod game;
pub mod ships;
