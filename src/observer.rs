//! Notifications from the engine to a presentation layer.

use std::collections::BTreeSet;

use crate::core::square::Square;
use crate::levels::LevelSpec;

/// Receives state changes from [`crate::game::GameController`].
///
/// All methods default to doing nothing, so a renderer only implements what it shows.
pub trait GameObserver {
    fn on_board_changed(&mut self, _knight: Square, _queens: &BTreeSet<Square>, _legal: &[Square]) {
    }

    fn on_score_changed(&mut self, _total: u32, _level: u32) {}

    fn on_time_changed(&mut self, _seconds_remaining: u32) {}

    fn on_level_started(&mut self, _level: &LevelSpec) {}

    fn on_level_complete(&mut self, _level: u32, _level_total: u32, _total: u32) {}

    fn on_game_over(&mut self, _victory: bool, _final_score: u32) {}

    fn on_paused(&mut self) {}

    fn on_resumed(&mut self) {}
}

/// Discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl GameObserver for NoopObserver {}

/// One recorded notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    BoardChanged {
        knight: Square,
        queens: BTreeSet<Square>,
        legal: Vec<Square>,
    },
    ScoreChanged {
        total: u32,
        level: u32,
    },
    TimeChanged(u32),
    LevelStarted(LevelSpec),
    LevelComplete {
        level: u32,
        level_total: u32,
        total: u32,
    },
    GameOver {
        victory: bool,
        final_score: u32,
    },
    Paused,
    Resumed,
}

/// Records notifications in arrival order.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn last(&self) -> Option<&GameEvent> {
        self.events.last()
    }

    pub fn count(&self, pred: impl Fn(&GameEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl GameObserver for EventLog {
    fn on_board_changed(&mut self, knight: Square, queens: &BTreeSet<Square>, legal: &[Square]) {
        self.events.push(GameEvent::BoardChanged {
            knight,
            queens: queens.clone(),
            legal: legal.to_vec(),
        });
    }

    fn on_score_changed(&mut self, total: u32, level: u32) {
        self.events.push(GameEvent::ScoreChanged { total, level });
    }

    fn on_time_changed(&mut self, seconds_remaining: u32) {
        self.events.push(GameEvent::TimeChanged(seconds_remaining));
    }

    fn on_level_started(&mut self, level: &LevelSpec) {
        self.events.push(GameEvent::LevelStarted(*level));
    }

    fn on_level_complete(&mut self, level: u32, level_total: u32, total: u32) {
        self.events.push(GameEvent::LevelComplete {
            level,
            level_total,
            total,
        });
    }

    fn on_game_over(&mut self, victory: bool, final_score: u32) {
        self.events.push(GameEvent::GameOver {
            victory,
            final_score,
        });
    }

    fn on_paused(&mut self) {
        self.events.push(GameEvent::Paused);
    }

    fn on_resumed(&mut self) {
        self.events.push(GameEvent::Resumed);
    }
}
