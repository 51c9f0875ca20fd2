// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::{
    error::Error,
    io::{self, BufRead, Write},
};

use clap::{App, Arg, ArgMatches};
use once_cell::sync::Lazy;
use rand::{rngs::StdRng, SeedableRng};
use regex::Regex;
use tracing_subscriber::EnvFilter;

use seabattle::{
    board::rectangular::RectDimensions, fleet::random_fleet, Board, Coordinate, FleetRules,
    VesselSpec,
};

/// Environment variable holding the log filter.
const LOG_ENV: &str = "BATTLESHIP_LOG";

/// Matcher for a single cell, `row,column` or `row column`.
static CELL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<row>[0-9]+)(?:\s*,\s*|\s+)(?P<column>[0-9]+)$").unwrap()
});

/// Matcher for a ship's endpoints, `row,column-row,column`. A single cell is a
/// single-deck ship.
static SHIP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?x)
        (?P<start>[0-9]+\s*,\s*[0-9]+)
        (?:\s*-\s*(?P<end>[0-9]+\s*,\s*[0-9]+))?$",
    )
    .unwrap()
});

const HELP: &str = "Available Commands:
    <row>,<column>      fire at the given cell, e.g. \"3,4\" or \"3 4\".
    show                print the board.
    help                show this message.
    quit                leave the game.

Board legend:
    ~  water
    \u{25A1}  undamaged ship
    *  damaged ship
    x  sunk ship";

fn main() {
    init_logging();
    let matches = App::new("Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Single-player command line battleship: sink the fleet on a 10x10 grid.")
        .arg(
            Arg::with_name("ship")
                .short("s")
                .long("ship")
                .value_name("R,C[-R,C]")
                .help("place a ship between two cells; repeat for every ship of the fleet")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("seed for the random fleet used when no ships are given")
                .takes_value(true)
                .conflicts_with("ship")
                .validator(|s| s.parse::<u64>().map(|_| ()).map_err(|e| e.to_string())),
        )
        .arg(
            Arg::with_name("hidden")
                .long("hidden")
                .help("don't print the board after each shot"),
        )
        .get_matches();

    if let Err(err) = run(&matches) {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

/// Install the log subscriber, filtered by `BATTLESHIP_LOG` and defaulting to `warn`.
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Build and validate the board, then play on stdin.
fn run(matches: &ArgMatches) -> io::Result<()> {
    let specs = choose_fleet(matches)?;
    tracing::info!(ships = specs.len(), "starting game");
    let mut board = Board::new(specs).map_err(invalid_input)?;
    board.validate().map_err(invalid_input)?;

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());
    let shots = play(&mut board, &mut input, !matches.is_present("hidden"))?;
    if board.defeated() {
        println!("All ships sunk in {} shots.", shots);
    }
    Ok(())
}

/// Take the fleet from the `--ship` arguments, or generate a random one.
fn choose_fleet(matches: &ArgMatches) -> io::Result<Vec<VesselSpec>> {
    if let Some(ships) = matches.values_of("ship") {
        return ships
            .map(|ship| parse_ship(ship).map_err(invalid_input))
            .collect();
    }
    let mut rng = match matches.value_of("seed") {
        Some(seed) => StdRng::seed_from_u64(seed.parse().map_err(invalid_input)?),
        None => StdRng::from_entropy(),
    };
    random_fleet(&mut rng, &FleetRules::standard(), &RectDimensions::default())
        .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "unable to place a random fleet"))
}

fn invalid_input<E: Into<Box<dyn Error + Send + Sync>>>(err: E) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, err)
}

/// Commands accepted during play.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Command {
    Fire(Coordinate),
    Show,
    Help,
    Quit,
}

/// Parse one line of player input. Expects the line to be trimmed and lowercase.
fn parse_command(input: &str) -> Result<Command, String> {
    match input {
        "?" | "help" | "h" => Ok(Command::Help),
        "show" | "board" | "s" => Ok(Command::Show),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other if CELL.is_match(other) => parse_cell(other).map(Command::Fire),
        other => Err(format!("Invalid command \"{}\". Use '?' for help", other)),
    }
}

/// Parse a `row,column` cell, both in range [0,9].
fn parse_cell(input: &str) -> Result<Coordinate, String> {
    let captures = CELL
        .captures(input.trim())
        .ok_or_else(|| format!("invalid cell \"{}\", expected <row>,<column>", input))?;
    let row = parse_axis("row", &captures["row"])?;
    let column = parse_axis("column", &captures["column"])?;
    Ok(Coordinate::new(row, column))
}

fn parse_axis(name: &str, value: &str) -> Result<usize, String> {
    match value.parse() {
        Err(_) => Err(format!("invalid {}: {}, must be a number in range [0,9]", name, value)),
        Ok(v) if v >= 10 => Err(format!("{} must be in range [0,9], got {}", name, v)),
        Ok(v) => Ok(v),
    }
}

/// Parse a ship given as `row,column-row,column` or a single `row,column`.
fn parse_ship(input: &str) -> Result<VesselSpec, String> {
    let captures = SHIP
        .captures(input.trim())
        .ok_or_else(|| {
            format!(
                "invalid ship \"{}\", expected <row>,<column>-<row>,<column>",
                input
            )
        })?;
    let start = parse_cell(&captures["start"])?;
    let end = match captures.name("end") {
        Some(end) => parse_cell(end.as_str())?,
        None => start,
    };
    Ok((start, end))
}

/// Read and run commands until the fleet is sunk, the player quits, or input runs out.
/// Returns the number of shots fired.
fn play<B: BufRead>(
    board: &mut Board,
    input: &mut InputReader<B>,
    show: bool,
) -> io::Result<usize> {
    let mut shots = 0;
    println!("Sink the fleet. Type help or ? for commands.");
    if show {
        show_board(board);
    }
    while !board.defeated() {
        let cmd = input.read_input_lower(">", |line| match parse_command(line) {
            Ok(cmd) => Some(cmd),
            Err(msg) => {
                println!("{}", msg);
                None
            }
        })?;
        match cmd {
            None | Some(Command::Quit) => break,
            Some(Command::Fire(coord)) => {
                shots += 1;
                println!("{}", board.fire(coord));
                if show {
                    show_board(board);
                }
            }
            Some(Command::Show) => show_board(board),
            Some(Command::Help) => println!("{}", HELP),
        }
    }
    Ok(shots)
}

/// Print the board with row and column labels.
fn show_board(board: &Board) {
    print!("   ");
    for i in 0..board.dimensions().columns() {
        print!("{} ", i);
    }
    println!();
    for (i, row) in board.render().lines().enumerate() {
        println!("{:>2} {}", i, row);
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
    /// Repeatedly tries to read input until the input checker returns `Some`. Converts
    /// to ascii lower before running the checker. Returns `None` at end of input.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<Option<T>>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            if !self.read_input_inner(prompt)? {
                return Ok(None);
            }
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(Some(val));
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line. Returns
    /// false at end of input.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<bool> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            return Ok(false);
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use seabattle::FireResult;

    use super::*;

    fn c(row: usize, column: usize) -> Coordinate {
        Coordinate::new(row, column)
    }

    #[test]
    fn parses_cells() {
        assert_eq!(parse_cell("3,4"), Ok(c(3, 4)));
        assert_eq!(parse_cell("3 , 4"), Ok(c(3, 4)));
        assert_eq!(parse_cell("9 0"), Ok(c(9, 0)));
        assert!(parse_cell("10,0").is_err());
        assert!(parse_cell("a,b").is_err());
    }

    #[test]
    fn parses_ships() {
        assert_eq!(parse_ship("0,0-0,3"), Ok((c(0, 0), c(0, 3))));
        assert_eq!(parse_ship(" 5,5 - 7,5 "), Ok((c(5, 5), c(7, 5))));
        assert_eq!(parse_ship("4,4"), Ok((c(4, 4), c(4, 4))));
        assert!(parse_ship("0,0-").is_err());
        assert!(parse_ship("0,0-0,12").is_err());
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command("2,7"), Ok(Command::Fire(c(2, 7))));
        assert_eq!(parse_command("?"), Ok(Command::Help));
        assert_eq!(parse_command("show"), Ok(Command::Show));
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
        assert!(parse_command("fire!").is_err());
        assert!(parse_command("11,2").is_err());
    }

    #[test]
    fn play_until_sunk() {
        let mut board = Board::new(vec![(c(0, 0), c(0, 1)), (c(5, 5), c(5, 5))]).unwrap();
        let mut input =
            InputReader::new(Cursor::new(&b"0,0\nnonsense\n9,9\nSHOW\n0 1\n5,5\n0,0\n"[..]));
        let shots = play(&mut board, &mut input, false).unwrap();
        assert_eq!(shots, 4);
        assert!(board.defeated());
        // The last line was never read.
        assert_eq!(board.fire(c(0, 0)), FireResult::Sunk);
    }

    #[test]
    fn play_stops_at_end_of_input() {
        let mut board = Board::new(vec![(c(0, 0), c(0, 1))]).unwrap();
        let mut input = InputReader::new(Cursor::new(&b"0,0\n"[..]));
        assert_eq!(play(&mut board, &mut input, true).unwrap(), 1);
        assert!(!board.defeated());
    }

    #[test]
    fn play_stops_on_quit() {
        let mut board = Board::new(vec![(c(0, 0), c(0, 1))]).unwrap();
        let mut input = InputReader::new(Cursor::new(&b"quit\n0,0\n"[..]));
        assert_eq!(play(&mut board, &mut input, false).unwrap(), 0);
    }
}
