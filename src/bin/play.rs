use std::io::{self, BufRead};

use clap::Parser;
use click_chess::move_generation::{legal_destinations, legal_moves};
use click_chess::{Game, GameConfig, Move, MoveOutcome, ParseSquareError, Square};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Play chess in the terminal by typing the squares you would click.
#[derive(Parser, Debug)]
#[command(name = "play")]
struct Args {
    /// Play this many random plies from the start position, print the board and exit
    #[arg(long)]
    autoplay: Option<u32>,
    /// Seed for the random plies of --autoplay
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Never flag check after a move
    #[arg(long)]
    no_check_detection: bool,
}

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] ParseSquareError),
    #[error("unknown command {0:?}, try `e2`, `6 4`, `e2e4`, `moves`, `board` or `quit`")]
    UnknownCommand(String),
}

enum Command {
    Click(Square),
    Play(Move),
    Moves,
    Board,
    Quit,
}

fn main() -> Result<(), CliError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();

    let args = Args::parse();
    let game = Game::new(GameConfig { detect_check: !args.no_check_detection });

    match args.autoplay {
        Some(plies) => {
            let mut session = Session::new(game);
            session.autoplay(plies, args.seed);
            println!("{}", session.game.board());
            Ok(())
        }
        None => Session::new(game).run(),
    }
}

struct Session {
    game: Game,
    is_running: bool,
}

impl Session {
    fn new(game: Game) -> Self {
        Self { game, is_running: true }
    }
    fn run(&mut self) -> Result<(), CliError> {
        println!("{}", self.game.board());
        self.print_status();

        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();
        while self.is_running {
            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match parse_command(&line) {
                Ok(command) => self.execute(command),
                Err(error) => println!("{error}"),
            }
        }
        Ok(())
    }
    fn execute(&mut self, command: Command) {
        match command {
            Command::Click(square) => {
                let outcomes = self.game.square_clicked(square);
                self.report(&outcomes);
            }
            Command::Play(mov) => match self.game.play(mov) {
                Ok(outcomes) => self.report(&outcomes),
                Err(error) => println!("{error}"),
            },
            Command::Moves => self.print_moves(),
            Command::Board => println!("{}", self.game.board()),
            Command::Quit => self.is_running = false,
        }
    }
    fn report(&self, outcomes: &[MoveOutcome]) {
        for outcome in outcomes {
            match outcome {
                MoveOutcome::Ignored(error) => println!("ignored: {error}"),
                MoveOutcome::Selected(square) => {
                    if let Some(piece) = self.game.piece_at(*square) {
                        println!("selected {} on {square}", piece.glyph());
                    }
                }
                MoveOutcome::Unselected(square) => println!("unselected {square}"),
                MoveOutcome::MoveApplied { from, to, captured } => {
                    match captured {
                        Some(piece) => println!("{from}{to} takes {}", piece.glyph()),
                        None => println!("{from}{to}"),
                    }
                    println!("{}", self.game.board());
                }
                MoveOutcome::NewTurn(_) | MoveOutcome::CheckFlag(_) => {}
            }
        }
        if outcomes.iter().any(|outcome| matches!(outcome, MoveOutcome::NewTurn(_))) {
            self.print_status();
        }
    }
    fn print_status(&self) {
        println!("Turn: {}", self.game.turn());
        if self.game.check() == Some(self.game.turn()) {
            println!("Check");
        }
    }
    fn print_moves(&self) {
        let moves: Vec<String> = match self.game.selection() {
            Some(from) => legal_destinations(self.game.board(), from).iter().map(|to| format!("{from}{to}")).collect(),
            None => legal_moves(self.game.board(), self.game.turn()).iter().map(Move::to_string).collect(),
        };
        println!("{}", moves.join(" "));
    }

    fn autoplay(&mut self, plies: u32, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for ply in 0..plies {
            let side = self.game.turn();
            let moves = legal_moves(self.game.board(), side);
            let Some(&mov) = moves.choose(&mut rng) else {
                info!(ply, %side, "no legal moves left");
                break;
            };
            match self.game.play(mov) {
                Ok(_) => info!(ply, %side, %mov, check = ?self.game.check(), "autoplay"),
                Err(error) => {
                    warn!(%error, "generated move was rejected");
                    break;
                }
            }
        }
    }
}

fn parse_command(line: &str) -> Result<Command, CliError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        ["quit"] => Ok(Command::Quit),
        ["board"] => Ok(Command::Board),
        ["moves"] => Ok(Command::Moves),
        [row, col] => match (row.parse::<i8>(), col.parse::<i8>()) {
            (Ok(row), Ok(col)) => Ok(Command::Click(Square::new(row, col))),
            _ => Err(CliError::UnknownCommand(line.trim().to_string())),
        },
        [word] if word.len() == 2 => Ok(Command::Click(word.parse()?)),
        [word] if word.len() == 4 => Ok(Command::Play(word.parse()?)),
        _ => Err(CliError::UnknownCommand(line.trim().to_string())),
    }
}
