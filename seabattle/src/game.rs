//! The two-player turn loop.

use log::trace;
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use crate::board::{Board, Coordinate, ShotError, ShotOutcome};

/// Player ID. Either `P1` or `P2`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Player {
    P1,
    P2,
}

impl Player {
    /// Get the opponent of this player.
    pub fn opponent(self) -> Self {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }

    /// Index of this player's own board in the game.
    fn index(self) -> usize {
        match self {
            Player::P1 => 0,
            Player::P2 => 1,
        }
    }
}

impl Distribution<Player> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Player {
        if rng.gen() {
            Player::P1
        } else {
            Player::P2
        }
    }
}

/// Supplies target coordinates for one side, human or automated.
///
/// Injected into [`Game::step`]; the engine keeps asking for targets until
/// the opposing board accepts one.
pub trait TargetSource {
    /// Produce the next candidate target.
    fn next_target(&mut self) -> Coordinate;

    /// Called when the previous candidate was rejected. The source will be
    /// asked for another target; the turn is not consumed.
    fn target_rejected(&mut self, _error: &ShotError) {}
}

/// Report of one resolved turn.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TurnReport {
    /// The player who fired.
    pub player: Player,
    /// The cell the accepted shot landed on.
    pub target: Coordinate,
    /// What the shot did.
    pub outcome: ShotOutcome,
}

/// A game in progress: both players' boards and the turn marker.
pub struct Game {
    /// The players' own boards, indexed by [`Player`].
    boards: [Board; 2],

    /// Player whose turn it is.
    current: Player,

    /// Set once, when either fleet is destroyed.
    winner: Option<Player>,
}

impl Game {
    /// Start a game from the two players' boards. `P1` moves first.
    pub fn new(first: Board, second: Board) -> Self {
        Self {
            boards: [first, second],
            current: Player::P1,
            winner: None,
        }
    }

    /// The player whose turn it is.
    pub fn current(&self) -> Player {
        self.current
    }

    /// The winner, once either fleet is destroyed.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// The given player's own board.
    pub fn board(&self, player: Player) -> &Board {
        &self.boards[player.index()]
    }

    /// Play one turn for the current player: keep querying `source` until it
    /// produces a target the opposing board accepts, then resolve the shot.
    /// A miss passes the turn; a hit or a sink keeps it. Destroying the last
    /// ship ends the game. Panics if called after the game has ended.
    pub fn step(&mut self, source: &mut impl TargetSource) -> TurnReport {
        assert!(self.winner.is_none(), "step called on a finished game");
        let player = self.current;
        let defender = player.opponent();
        loop {
            let target = source.next_target();
            match self.boards[defender.index()].shoot(target) {
                Err(error) => {
                    trace!("target {:?} from {:?} rejected: {}", target, player, error);
                    source.target_rejected(&error);
                }
                Ok(outcome) => {
                    if self.boards[defender.index()].defeated() {
                        self.winner = Some(player);
                    } else if !outcome.keeps_turn() {
                        self.current = defender;
                    }
                    return TurnReport {
                        player,
                        target,
                        outcome,
                    };
                }
            }
        }
    }
}
