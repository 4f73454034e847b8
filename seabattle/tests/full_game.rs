//! Whole-game flows through the public API.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use seabattle::board::{Board, BoardSetup, Coordinate, ShotOutcome};
use seabattle::fleet;
use seabattle::game::{Game, Player, TargetSource};
use seabattle::ships::{Orientation, Ship};

/// Feeds a fixed list of targets in order.
struct Script {
    targets: Vec<Coordinate>,
    next: usize,
}

impl Script {
    fn new(targets: Vec<(usize, usize)>) -> Self {
        Self {
            targets: targets
                .into_iter()
                .map(|(row, col)| Coordinate::new(row, col))
                .collect(),
            next: 0,
        }
    }
}

impl TargetSource for Script {
    fn next_target(&mut self) -> Coordinate {
        let target = self.targets[self.next];
        self.next += 1;
        target
    }
}

/// Redraws uniformly random cells until one is accepted.
struct RandomSource {
    rng: StdRng,
    size: usize,
}

impl TargetSource for RandomSource {
    fn next_target(&mut self) -> Coordinate {
        Coordinate::new(
            self.rng.gen_range(0, self.size),
            self.rng.gen_range(0, self.size),
        )
    }
}

/// The standard fleet at fixed, legally spaced positions.
fn fixed_fleet_board() -> Board {
    let mut setup = BoardSetup::new(6);
    let placements = [
        (0, 0, 3, Orientation::Horizontal),
        (2, 0, 2, Orientation::Horizontal),
        (2, 3, 2, Orientation::Horizontal),
        (4, 0, 1, Orientation::Horizontal),
        (4, 2, 1, Orientation::Horizontal),
        (4, 4, 1, Orientation::Horizontal),
        (0, 5, 1, Orientation::Horizontal),
    ];
    for &(row, col, length, orientation) in &placements {
        setup
            .place_ship(Ship::new(Coordinate::new(row, col), length, orientation))
            .unwrap();
    }
    setup.start()
}

#[test]
fn sweeping_the_fleet_wins_without_ceding_the_turn() {
    let mut game = Game::new(fixed_fleet_board(), fixed_fleet_board());
    let ship_cells = vec![
        (0, 0),
        (0, 1),
        (0, 2),
        (2, 0),
        (2, 1),
        (2, 3),
        (2, 4),
        (4, 0),
        (4, 2),
        (4, 4),
        (0, 5),
    ];
    let total = ship_cells.len();
    let mut script = Script::new(ship_cells);

    let mut sinks = 0;
    for shot in 0..total {
        assert_eq!(game.current(), Player::P1, "hits must keep the turn");
        let report = game.step(&mut script);
        assert!(report.outcome.keeps_turn());
        if report.outcome == ShotOutcome::Sunk {
            sinks += 1;
        }
        if shot + 1 < total {
            assert!(game.winner().is_none());
        }
    }
    assert_eq!(sinks, 7);
    assert_eq!(game.winner(), Some(Player::P1));
    assert_eq!(game.board(Player::P2).sunk_count(), 7);
    assert!(game.board(Player::P2).defeated());
    assert!(!game.board(Player::P1).defeated());
}

#[test]
fn random_duel_terminates() {
    let mut rng = StdRng::seed_from_u64(42);
    let first = fleet::random_board(&mut rng, 6, fleet::DEFAULT_LENGTHS);
    let second = fleet::random_board(&mut rng, 6, fleet::DEFAULT_LENGTHS);
    let mut game = Game::new(first, second);

    let mut p1 = RandomSource {
        rng: StdRng::seed_from_u64(1),
        size: 6,
    };
    let mut p2 = RandomSource {
        rng: StdRng::seed_from_u64(2),
        size: 6,
    };

    // Every step resolves one fresh cell on a 36-cell board, so the game
    // must end within 72 resolved shots.
    let mut steps = 0;
    while game.winner().is_none() {
        steps += 1;
        assert!(steps <= 72, "game did not terminate");
        match game.current() {
            Player::P1 => game.step(&mut p1),
            Player::P2 => game.step(&mut p2),
        };
    }

    let winner = game.winner().unwrap();
    let loser = winner.opponent();
    assert!(game.board(loser).defeated());
    assert!(!game.board(winner).defeated());
    assert_eq!(game.board(loser).sunk_count(), fleet::DEFAULT_LENGTHS.len());
}
