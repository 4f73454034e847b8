use std::{
    fmt,
    io::{self, BufRead, Write},
};

use clap::{App, Arg, ArgMatches};
use once_cell::sync::Lazy;
use rand::{rngs::ThreadRng, Rng};
use regex::Regex;

use seabattle::{
    board::{Board, CannotShootReason, CellState, Coordinate, ShotError, ShotOutcome},
    fleet,
    game::{Game, Player, TargetSource, TurnReport},
};

mod logging;

fn main() -> io::Result<()> {
    logging::init();

    let matches = App::new("Sea Battle")
        .version("1.0")
        .about("Command line battleship, classic rules: ships cannot touch and a hit grants another shot.")
        .arg(
            Arg::with_name("first_player")
                .short("f")
                .long("first-player")
                .value_name("FIRST_PLAYER")
                .help("pre-specify which player goes first")
                .takes_value(true)
                .possible_values(&["human", "me", "computer", "bot", "random", "rand"])
                .case_insensitive(true),
        )
        .arg(
            Arg::with_name("size")
                .short("s")
                .long("size")
                .value_name("SIZE")
                .help("side length of the board")
                .takes_value(true)
                .default_value("6")
                .validator(|value| match value.parse::<usize>() {
                    Ok(size) if size >= 6 && size <= 12 => Ok(()),
                    _ => Err(String::from("size must be a number between 6 and 12")),
                }),
        )
        .get_matches();

    let size: usize = matches.value_of("size").unwrap().parse().unwrap();

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());
    let mut rng = rand::thread_rng();

    let human = choose_player(&matches, &mut input)?;

    let human_board = fleet::random_board(&mut rng, size, fleet::DEFAULT_LENGTHS);
    let bot_board = fleet::random_board(&mut rng, size, fleet::DEFAULT_LENGTHS);
    let mut game = match human {
        Player::P1 => Game::new(human_board, bot_board),
        Player::P2 => Game::new(bot_board, human_board),
    };

    let mut human_gunner = HumanGunner { input };
    let mut bot_gunner = RandomGunner { rng, size };

    greet(size);
    loop {
        println!("{}", "-".repeat(20));
        println!("Your board:");
        show_board(game.board(human), false);
        println!("Computer's board:");
        show_board(game.board(human.opponent()), true);

        let report = if game.current() == human {
            println!("Your turn!");
            game.step(&mut human_gunner)
        } else {
            println!("Computer's turn!");
            game.step(&mut bot_gunner)
        };
        report_shot(human, &report);

        if let Some(winner) = game.winner() {
            println!("{}", "-".repeat(20));
            if winner == human {
                println!("You win!");
            } else {
                println!("The computer wins! Its fleet was:");
                show_board(game.board(human.opponent()), false);
            }
            return Ok(());
        }
    }
}

/// Choose which [`Player`] the human plays based on either args or cli input.
fn choose_player<B: BufRead>(
    matches: &ArgMatches,
    input: &mut InputReader<B>,
) -> io::Result<Player> {
    Ok(if let Some(choice) = matches.value_of("first_player") {
        match choice.to_ascii_lowercase().as_str() {
            "human" | "me" => Player::P1,
            "computer" | "bot" => Player::P2,
            "random" | "rand" => rand::random(),
            _ => unreachable!(),
        }
    } else {
        input.read_input_lower("Do you want to go first? (Y/n)", |line| match line {
            "yes" | "y" | "first" | "1" | "1st" | "" => Some(Player::P1),
            "no" | "n" | "second" | "2" | "2nd" => Some(Player::P2),
            _ => {
                println!("Invalid selection.");
                None
            }
        })?
    })
}

/// Print the input format reminder before the first turn.
fn greet(size: usize) {
    println!();
    println!("Enter shots as: row column");
    println!("both counted from 1 to {}.", size);
}

/// Announce a resolved shot. The computer's moves are only displayed here,
/// once the board has accepted them.
fn report_shot(human: Player, report: &TurnReport) {
    if report.player != human {
        println!(
            "Computer fires at {} {}.",
            report.target.row + 1,
            report.target.col + 1
        );
    }
    match report.outcome {
        ShotOutcome::Miss => println!("Miss!"),
        ShotOutcome::Hit => println!("Hit!"),
        ShotOutcome::Sunk => println!("Ship destroyed!"),
    }
}

/// Move source that asks the player for coordinates.
struct HumanGunner<B> {
    input: InputReader<B>,
}

impl<B: BufRead> TargetSource for HumanGunner<B> {
    fn next_target(&mut self) -> Coordinate {
        /// Matcher for a pair of 1-based coordinates.
        static TARGET: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^(?P<row>[0-9]+)(?:\s*,\s*|\s+)(?P<col>[0-9]+)$").unwrap());

        let target = self.input.read_input("Your move:", |line| {
            let captures = match TARGET.captures(line) {
                Some(captures) => captures,
                None => {
                    println!("Enter two numbers: row and column.");
                    return None;
                }
            };
            let row: usize = match captures.name("row").unwrap().as_str().parse() {
                Ok(row) => row,
                Err(_) => {
                    println!("Row is out of range.");
                    return None;
                }
            };
            let col: usize = match captures.name("col").unwrap().as_str().parse() {
                Ok(col) => col,
                Err(_) => {
                    println!("Column is out of range.");
                    return None;
                }
            };
            if row == 0 || col == 0 {
                println!("Rows and columns are numbered from 1.");
                return None;
            }
            Some(Coordinate::new(row - 1, col - 1))
        });
        match target {
            Ok(target) => target,
            Err(error) => {
                eprintln!("failed to read input: {}", error);
                std::process::exit(1);
            }
        }
    }

    fn target_rejected(&mut self, error: &ShotError) {
        match error.reason() {
            CannotShootReason::OutOfBounds => println!("That shot is off the board!"),
            CannotShootReason::AlreadyShot => println!("You already fired at that cell."),
        }
    }
}

/// Move source that fires at a uniformly random cell. Rejected candidates
/// are simply redrawn.
struct RandomGunner {
    rng: ThreadRng,
    size: usize,
}

impl TargetSource for RandomGunner {
    fn next_target(&mut self) -> Coordinate {
        Coordinate::new(
            self.rng.gen_range(0, self.size),
            self.rng.gen_range(0, self.size),
        )
    }
}

/// Symbol for one cell as shown to the player.
struct CellSymbol {
    state: CellState,
    hide_ships: bool,
}

impl fmt::Display for CellSymbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let symbol = match self.state {
            CellState::Empty => "O",
            CellState::Ship if self.hide_ships => "O",
            CellState::Ship => "■",
            CellState::Hit => "X",
            CellState::Miss | CellState::Contour => ".",
        };
        f.pad(symbol)
    }
}

/// Print a board with 1-based row and column labels. `hide_ships` renders
/// intact ships as open water, for the opponent's view.
fn show_board(board: &Board, hide_ships: bool) {
    print!("  ");
    for col in 1..=board.size() {
        print!("| {} ", col);
    }
    println!("|");
    for (row, cells) in board.rows().enumerate() {
        print!("{} ", row + 1);
        for &state in cells {
            print!("| {} ", CellSymbol { state, hide_ships });
        }
        println!("|");
    }
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns
    /// `Some`. Converts to ascii lower before running the checker.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Repeatedly tries to read input until the input checker returns `Some`.
    fn read_input<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line.
    /// Exits cleanly at end of input.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            std::process::exit(0);
        }
        Ok(())
    }
}
