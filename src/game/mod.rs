//! The game state machine.
//!
//! ```text
//! NotStarted --start--> Running <--pause/resume--> Paused
//!                        |   \
//!         last queen     |    \ time runs out
//!                        v     v
//!              LevelComplete   GameOver { victory: false }
//!                        |
//!   advance_to_next_level|      (final level cleared -> GameOver { victory: true })
//!                        v
//!                     Running
//! GameOver --start/restart--> Running (level 1)
//! ```
//!
//! Calls that don't apply to the current phase are ignored and reported as such;
//! they never touch the session.

mod session;

pub use session::{GameSession, Phase};

use std::collections::BTreeSet;

use rand::Rng;
use tracing::{debug, info, trace};

use crate::board::BoardState;
use crate::clock::{Clock, ManualClock};
use crate::config::GameConfig;
use crate::core::square::Square;
use crate::error::{ConfigError, GameResult};
use crate::levels::{LevelCatalog, LevelSpec};
use crate::observer::{GameObserver, NoopObserver};
use crate::placement::place_queens;
use crate::scoring::ScoringEngine;

/// Result of a lifecycle call (`start`, `pause`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Applied,
    /// The call does not apply to the current phase.
    Ignored,
}

/// Result of [`GameController::attempt_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// No level in play, or paused.
    Ignored,
    /// Target is not one knight move away.
    Illegal,
    Moved,
    Captured { remaining: usize },
    LevelComplete { level: u32, level_total: u32 },
    /// The final level was cleared.
    Victory { final_score: u32 },
}

impl MoveOutcome {
    /// True iff the knight actually moved.
    pub fn is_legal(self) -> bool {
        !matches!(self, MoveOutcome::Ignored | MoveOutcome::Illegal)
    }
}

/// Result of [`GameController::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running, paused, or no subscription open.
    Ignored,
    Counted { remaining: u32 },
    TimeUp,
}

/// A level that has been fully prepared but not yet committed to the session.
struct PreparedLevel {
    spec: LevelSpec,
    knight: Square,
    queens: BTreeSet<Square>,
}

/// Drives one player's game: level setup, moves, the countdown and scoring.
///
/// Owns the session exclusively. `R` supplies randomness for the knight start and
/// queen placement, `C` is the tick subscription, and `O` receives notifications.
#[derive(Debug)]
pub struct GameController<R, C = ManualClock, O = NoopObserver> {
    catalog: LevelCatalog,
    board_size: u8,
    start_squares: Vec<Square>,
    session: GameSession,
    rng: R,
    clock: C,
    observer: O,
}

impl<R: Rng, C: Clock, O: GameObserver> GameController<R, C, O> {
    /// A controller for the standard ten-level game on an 8x8 board.
    pub fn new(rng: R, clock: C, observer: O) -> Self {
        let config = GameConfig::default();
        Self {
            catalog: LevelCatalog::standard(),
            board_size: config.board_size,
            start_squares: config.start_squares,
            session: GameSession::new(ScoringEngine::new(config.scoring)),
            rng,
            clock,
            observer,
        }
    }

    pub fn from_config(
        config: GameConfig,
        rng: R,
        clock: C,
        observer: O,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let catalog = config.catalog()?;
        Ok(Self {
            catalog,
            board_size: config.board_size,
            start_squares: config.start_squares,
            session: GameSession::new(ScoringEngine::new(config.scoring)),
            rng,
            clock,
            observer,
        })
    }

    // ----- queries -------------------------------------------------------

    #[inline]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.session.phase
    }

    #[inline]
    pub fn level(&self) -> u32 {
        self.session.level
    }

    #[inline]
    pub fn total_score(&self) -> u32 {
        self.session.total_score()
    }

    #[inline]
    pub fn level_score(&self) -> u32 {
        self.session.level_score()
    }

    #[inline]
    pub fn time_remaining(&self) -> u32 {
        self.session.time_remaining
    }

    pub fn knight(&self) -> Option<Square> {
        self.session.knight()
    }

    pub fn queens(&self) -> Option<&BTreeSet<Square>> {
        self.session.queens()
    }

    pub fn legal_moves(&self) -> &[Square] {
        self.session.legal_moves()
    }

    #[inline]
    pub fn board_size(&self) -> u8 {
        self.board_size
    }

    #[inline]
    pub fn catalog(&self) -> &LevelCatalog {
        &self.catalog
    }

    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    #[inline]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    #[inline]
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    // ----- lifecycle -----------------------------------------------------

    /// Begin a game at level 1 with a zero score.
    ///
    /// Valid from `NotStarted` and `GameOver`. The knight keeps its square if it has
    /// one; otherwise one of the start squares is picked at random.
    pub fn start(&mut self) -> GameResult<Transition> {
        if !matches!(
            self.session.phase,
            Phase::NotStarted | Phase::GameOver { .. }
        ) {
            return Ok(Transition::Ignored);
        }
        let knight = match self.session.knight() {
            Some(sq) => sq,
            None => self.pick_start_square(),
        };
        self.begin_game(knight)
    }

    /// Start over after a game ends, with a freshly randomized knight square.
    pub fn restart(&mut self) -> GameResult<Transition> {
        if !matches!(self.session.phase, Phase::GameOver { .. }) {
            return Ok(Transition::Ignored);
        }
        info!("restarting game");
        let knight = self.pick_start_square();
        self.begin_game(knight)
    }

    /// Move from `LevelComplete` into the next level.
    pub fn advance_to_next_level(&mut self) -> GameResult<Transition> {
        if self.session.phase != Phase::LevelComplete {
            return Ok(Transition::Ignored);
        }
        let Some(knight) = self.session.knight() else {
            return Ok(Transition::Ignored);
        };
        let prepared = self.prepare_level(self.session.level + 1, knight)?;
        self.session.scoring.reset_level_score();
        self.commit_level(prepared);
        Ok(Transition::Applied)
    }

    pub fn pause(&mut self) -> Transition {
        if self.session.phase != Phase::Running {
            return Transition::Ignored;
        }
        self.session.phase = Phase::Paused;
        self.clock.stop();
        debug!(level = self.session.level, time = self.session.time_remaining, "paused");
        self.observer.on_paused();
        Transition::Applied
    }

    pub fn resume(&mut self) -> Transition {
        if self.session.phase != Phase::Paused {
            return Transition::Ignored;
        }
        self.session.phase = Phase::Running;
        self.restart_clock();
        debug!(level = self.session.level, time = self.session.time_remaining, "resumed");
        self.observer.on_resumed();
        Transition::Applied
    }

    pub fn toggle_pause(&mut self) -> Transition {
        match self.session.phase {
            Phase::Running => self.pause(),
            Phase::Paused => self.resume(),
            _ => Transition::Ignored,
        }
    }

    // ----- play ----------------------------------------------------------

    /// Advance the countdown by one second.
    ///
    /// Only counts while running with an open clock subscription.
    pub fn tick(&mut self) -> TickOutcome {
        if self.session.phase != Phase::Running || !self.clock.is_active() {
            return TickOutcome::Ignored;
        }
        self.session.time_remaining = self.session.time_remaining.saturating_sub(1);
        let remaining = self.session.time_remaining;
        trace!(remaining, "tick");
        self.observer.on_time_changed(remaining);

        if remaining == 0 {
            self.end_game(false);
            TickOutcome::TimeUp
        } else {
            TickOutcome::Counted { remaining }
        }
    }

    /// Move the knight to `target` if that is a legal knight move.
    pub fn attempt_move(&mut self, target: Square) -> MoveOutcome {
        if self.session.phase != Phase::Running {
            return MoveOutcome::Ignored;
        }
        let Some(board) = self.session.board.as_mut() else {
            return MoveOutcome::Ignored;
        };
        if !board.can_move_to(target) {
            debug!(from = %board.knight(), to = %target, "illegal move");
            return MoveOutcome::Illegal;
        }

        let from = board.knight();
        let captured = board.move_knight(target);
        let remaining = board.queens().len();
        self.observer
            .on_board_changed(board.knight(), board.queens(), board.legal_moves());

        if !captured {
            debug!(%from, to = %target, "knight moved");
            return MoveOutcome::Moved;
        }

        self.session.scoring.award_capture();
        debug!(%from, to = %target, remaining, "queen captured");
        self.notify_score();

        if remaining > 0 {
            MoveOutcome::Captured { remaining }
        } else {
            self.complete_level()
        }
    }

    // ----- internals -----------------------------------------------------

    fn pick_start_square(&mut self) -> Square {
        let idx = self.rng.random_range(0..self.start_squares.len());
        self.start_squares[idx]
    }

    fn begin_game(&mut self, knight: Square) -> GameResult<Transition> {
        let prepared = self.prepare_level(1, knight)?;
        self.session.scoring.reset();
        info!(knight = %knight, "game started");
        self.commit_level(prepared);
        Ok(Transition::Applied)
    }

    /// Everything that can fail happens here, before the session is touched.
    fn prepare_level(&mut self, level: u32, knight: Square) -> GameResult<PreparedLevel> {
        let spec = self.catalog.spec_for(level)?;
        let queens = place_queens(spec.queens, self.board_size, knight, &mut self.rng)?;
        Ok(PreparedLevel {
            spec,
            knight,
            queens,
        })
    }

    fn commit_level(&mut self, prepared: PreparedLevel) {
        let PreparedLevel {
            spec,
            knight,
            queens,
        } = prepared;

        let mut board = BoardState::new(self.board_size, knight);
        board.set_queens(queens);
        self.session.board = Some(board);
        self.session.level = spec.number;
        self.session.time_remaining = spec.time_limit;
        self.session.phase = Phase::Running;
        self.restart_clock();

        info!(
            level = spec.number,
            queens = spec.queens,
            time_limit = spec.time_limit,
            "level started"
        );
        self.observer.on_level_started(&spec);
        self.notify_score();
        self.observer.on_time_changed(spec.time_limit);
        self.notify_board();
    }

    fn complete_level(&mut self) -> MoveOutcome {
        let level = self.session.level;
        let level_total = self
            .session
            .scoring
            .award_level_completion(self.session.time_remaining);
        self.clock.stop();
        self.notify_score();

        if self.catalog.is_final(level) {
            self.end_game(true);
            return MoveOutcome::Victory {
                final_score: self.session.total_score(),
            };
        }

        self.session.phase = Phase::LevelComplete;
        let total = self.session.total_score();
        info!(level, level_total, total, "level complete");
        self.observer.on_level_complete(level, level_total, total);
        MoveOutcome::LevelComplete { level, level_total }
    }

    fn end_game(&mut self, victory: bool) {
        self.session.phase = Phase::GameOver { victory };
        self.clock.stop();
        let final_score = self.session.total_score();
        info!(victory, final_score, level = self.session.level, "game over");
        self.observer.on_game_over(victory, final_score);
    }

    /// Never more than one subscription: always close before opening.
    fn restart_clock(&mut self) {
        self.clock.stop();
        self.clock.start();
    }

    fn notify_score(&mut self) {
        self.observer
            .on_score_changed(self.session.total_score(), self.session.level_score());
    }

    fn notify_board(&mut self) {
        if let Some(board) = &self.session.board {
            self.observer
                .on_board_changed(board.knight(), board.queens(), board.legal_moves());
        }
    }
}
