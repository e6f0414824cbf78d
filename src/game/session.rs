use std::collections::BTreeSet;

use crate::board::BoardState;
use crate::core::square::Square;
use crate::scoring::ScoringEngine;

/// Where the game is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    NotStarted,
    Running,
    Paused,
    /// All queens captured; waiting for the next level to be requested.
    LevelComplete,
    /// Time ran out (`victory == false`) or the final level was cleared.
    GameOver { victory: bool },
}

/// All mutable state of one game, owned by [`super::GameController`].
///
/// `board` is `None` until the first start and again after a restart request;
/// while it is set, the knight square carries over from level to level.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub(super) phase: Phase,
    pub(super) level: u32,
    pub(super) time_remaining: u32,
    pub(super) board: Option<BoardState>,
    pub(super) scoring: ScoringEngine,
}

impl GameSession {
    pub(super) fn new(scoring: ScoringEngine) -> Self {
        Self {
            phase: Phase::NotStarted,
            level: 0,
            time_remaining: 0,
            board: None,
            scoring,
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current level number; 0 before the first start.
    #[inline]
    pub fn current_level(&self) -> u32 {
        self.level
    }

    #[inline]
    pub fn total_score(&self) -> u32 {
        self.scoring.total()
    }

    #[inline]
    pub fn level_score(&self) -> u32 {
        self.scoring.level()
    }

    #[inline]
    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    /// True while a level is in play, paused or not.
    #[inline]
    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running | Phase::Paused)
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    #[inline]
    pub fn board(&self) -> Option<&BoardState> {
        self.board.as_ref()
    }

    pub fn knight(&self) -> Option<Square> {
        self.board.as_ref().map(BoardState::knight)
    }

    pub fn queens(&self) -> Option<&BTreeSet<Square>> {
        self.board.as_ref().map(BoardState::queens)
    }

    pub fn legal_moves(&self) -> &[Square] {
        self.board
            .as_ref()
            .map(BoardState::legal_moves)
            .unwrap_or(&[])
    }
}
