#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};

use knight_hunt::clock::ManualClock;
use knight_hunt::config::GameConfig;
use knight_hunt::core::square::Square;
use knight_hunt::game::{GameController, MoveOutcome};
use knight_hunt::levels::LevelSpec;
use knight_hunt::moves::legal_moves;
use knight_hunt::observer::EventLog;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub type TestGame = GameController<StdRng, ManualClock, EventLog>;

pub fn standard_game(seed: u64) -> TestGame {
    GameController::new(StdRng::seed_from_u64(seed), ManualClock::new(), EventLog::new())
}

pub fn custom_game(seed: u64, levels: &[(u32, u32)], start: Square) -> TestGame {
    let config = GameConfig {
        levels: levels
            .iter()
            .enumerate()
            .map(|(i, &(queens, time))| LevelSpec::new(i as u32 + 1, queens, time))
            .collect(),
        start_squares: vec![start],
        ..GameConfig::default()
    };
    GameController::from_config(config, StdRng::seed_from_u64(seed), ManualClock::new(), EventLog::new())
        .unwrap()
}

/// Shortest knight path from `from` to `to`, excluding `from`.
pub fn knight_path(from: Square, to: Square, size: u8) -> Vec<Square> {
    let mut prev: HashMap<Square, Square> = HashMap::new();
    let mut q = VecDeque::from([from]);
    while let Some(sq) = q.pop_front() {
        if sq == to {
            break;
        }
        for next in legal_moves(sq, size) {
            if next != from && !prev.contains_key(&next) {
                prev.insert(next, sq);
                q.push_back(next);
            }
        }
    }
    let mut path = vec![to];
    let mut cur = to;
    while let Some(&p) = prev.get(&cur) {
        if p == from {
            break;
        }
        path.push(p);
        cur = p;
    }
    path.reverse();
    path
}

/// Walk the knight onto every remaining queen. Returns the last move outcome.
pub fn clear_level(game: &mut TestGame) -> MoveOutcome {
    let mut last = MoveOutcome::Ignored;
    loop {
        let Some(target) = game.queens().and_then(|q| q.first().copied()) else {
            break;
        };
        let from = game.knight().unwrap();
        for step in knight_path(from, target, game.board_size()) {
            last = game.attempt_move(step);
            assert!(last.is_legal(), "path step {step} rejected: {last:?}");
        }
    }
    last
}
