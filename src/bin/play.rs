use std::collections::BTreeSet;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::thread;

use clap::Parser;
use crossbeam_channel::{select, unbounded, Receiver};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use knight_hunt::clock::{Clock, IntervalClock, ManualClock};
use knight_hunt::config::GameConfig;
use knight_hunt::core::square::Square;
use knight_hunt::game::{GameController, MoveOutcome, Phase, Transition};
use knight_hunt::levels::LevelSpec;
use knight_hunt::observer::GameObserver;

/// Play the knight-versus-queens puzzle in a terminal.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON game config; defaults to the standard ten levels on 8x8.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for queen placement and the knight start square.
    #[arg(long)]
    seed: Option<u64>,

    /// Disable the countdown (moves only).
    #[arg(long)]
    no_clock: bool,
}

/// Prints the board and status lines to stdout.
struct TerminalObserver {
    size: u8,
}

impl GameObserver for TerminalObserver {
    fn on_board_changed(&mut self, knight: Square, queens: &BTreeSet<Square>, legal: &[Square]) {
        let mut out = String::new();
        out.push_str("   ");
        for c in 0..self.size {
            out.push_str(&format!("{c} "));
        }
        out.push('\n');
        for r in 0..self.size {
            out.push_str(&format!("{r:>2} "));
            for c in 0..self.size {
                let sq = Square::new(r, c);
                let ch = if sq == knight {
                    'N'
                } else if queens.contains(&sq) {
                    if legal.contains(&sq) {
                        'X'
                    } else {
                        'Q'
                    }
                } else if legal.contains(&sq) {
                    '*'
                } else {
                    '.'
                };
                out.push(ch);
                out.push(' ');
            }
            out.push('\n');
        }
        out.push_str(&format!("queens left: {}\n", queens.len()));
        print!("{out}");
    }

    fn on_score_changed(&mut self, total: u32, level: u32) {
        println!("score: {total} (this level: {level})");
    }

    fn on_time_changed(&mut self, seconds_remaining: u32) {
        if seconds_remaining % 10 == 0 || seconds_remaining <= 5 {
            println!("time left: {seconds_remaining}s");
        }
    }

    fn on_level_started(&mut self, level: &LevelSpec) {
        println!(
            "== level {}: {} queens, {}s ==",
            level.number, level.queens, level.time_limit
        );
    }

    fn on_level_complete(&mut self, level: u32, level_total: u32, total: u32) {
        println!("level {level} complete! level score {level_total}, total {total}. 'n' for next level");
    }

    fn on_game_over(&mut self, victory: bool, final_score: u32) {
        if victory {
            println!("Congratulations! You have completed all levels! final score {final_score}");
        } else {
            println!("Time's up! final score {final_score}. 'r' to restart");
        }
    }

    fn on_paused(&mut self) {
        println!("-- paused ('p' to resume) --");
    }

    fn on_resumed(&mut self) {
        println!("-- resumed --");
    }
}

enum Command {
    Move(Square),
    Start,
    TogglePause,
    Next,
    Restart,
    Quit,
    Help,
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    match line {
        "s" | "start" => return Some(Command::Start),
        "p" | "pause" => return Some(Command::TogglePause),
        "n" | "next" => return Some(Command::Next),
        "r" | "restart" => return Some(Command::Restart),
        "q" | "quit" => return Some(Command::Quit),
        "?" | "h" | "help" => return Some(Command::Help),
        _ => {}
    }
    let mut parts = line.split(|c: char| c == ',' || c.is_whitespace()).filter(|p| !p.is_empty());
    let row = parts.next()?.parse::<u8>().ok()?;
    let col = parts.next()?.parse::<u8>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Command::Move(Square::new(row, col)))
}

fn spawn_stdin_reader() -> Receiver<String> {
    let (tx, rx) = unbounded();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

const HELP: &str = "commands: <row> <col> move | s start | p pause/resume | n next level | r restart | q quit";

/// Returns `false` when the player asked to quit.
fn handle_line<C: Clock>(
    game: &mut GameController<StdRng, C, TerminalObserver>,
    line: &str,
) -> bool {
    let Some(cmd) = parse_command(line) else {
        println!("?? {HELP}");
        return true;
    };
    let result = match cmd {
        Command::Quit => return false,
        Command::Help => {
            println!("{HELP}");
            Ok(Transition::Applied)
        }
        Command::Move(sq) => {
            match game.attempt_move(sq) {
                MoveOutcome::Illegal => println!("{sq} is not a knight move away"),
                MoveOutcome::Ignored => println!("no level in play"),
                _ => {}
            }
            Ok(Transition::Applied)
        }
        Command::Start => game.start(),
        Command::TogglePause => Ok(game.toggle_pause()),
        Command::Next => game.advance_to_next_level(),
        Command::Restart => game.restart(),
    };
    match result {
        Ok(Transition::Ignored) => println!("not now (phase: {:?})", game.phase()),
        Ok(Transition::Applied) => {}
        Err(e) => eprintln!("error: {e}"),
    }
    let _ = io::stdout().flush();
    true
}

fn run_with_clock(
    mut game: GameController<StdRng, IntervalClock, TerminalObserver>,
    input: Receiver<String>,
) {
    loop {
        let ticks = game.clock().receiver();
        select! {
            recv(input) -> line => {
                let Ok(line) = line else { break };
                if !handle_line(&mut game, &line) {
                    break;
                }
            }
            recv(ticks) -> _ => {
                let _ = game.tick();
            }
        }
    }
}

fn run_without_clock(
    mut game: GameController<StdRng, ManualClock, TerminalObserver>,
    input: Receiver<String>,
) {
    for line in input.iter() {
        if !handle_line(&mut game, &line) {
            break;
        }
        if matches!(game.phase(), Phase::GameOver { victory: true }) {
            break;
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match GameConfig::load(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Failed to load config: {e}");
                std::process::exit(1);
            }
        },
        None => GameConfig::default(),
    };
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let observer = TerminalObserver {
        size: config.board_size,
    };

    println!("{HELP}");
    let input = spawn_stdin_reader();

    if args.no_clock {
        match GameController::from_config(config, rng, ManualClock::new(), observer) {
            Ok(game) => run_without_clock(game, input),
            Err(e) => {
                eprintln!("Invalid config: {e}");
                std::process::exit(2);
            }
        }
    } else {
        match GameController::from_config(config, rng, IntervalClock::new(), observer) {
            Ok(game) => run_with_clock(game, input),
            Err(e) => {
                eprintln!("Invalid config: {e}");
                std::process::exit(2);
            }
        }
    }
}
