//! Score bookkeeping.

use serde::{Deserialize, Serialize};

/// Point values used by [`ScoringEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    pub per_queen: u32,
    /// Points per second left on the clock when a level is cleared.
    pub time_bonus: u32,
    pub completion_bonus: u32,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            per_queen: 100,
            time_bonus: 5,
            completion_bonus: 500,
        }
    }
}

/// Running total score plus the score earned in the current level.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    rules: ScoringRules,
    total: u32,
    level: u32,
}

impl ScoringEngine {
    pub fn new(rules: ScoringRules) -> Self {
        Self {
            rules,
            total: 0,
            level: 0,
        }
    }

    #[inline]
    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    #[inline]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[inline]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Credit one captured queen. Returns the points awarded.
    pub fn award_capture(&mut self) -> u32 {
        self.add(self.rules.per_queen)
    }

    /// Credit the time and completion bonuses. Returns the level total.
    pub fn award_level_completion(&mut self, time_remaining: u32) -> u32 {
        let bonus = time_remaining
            .saturating_mul(self.rules.time_bonus)
            .saturating_add(self.rules.completion_bonus);
        self.add(bonus);
        self.level
    }

    pub fn reset_level_score(&mut self) {
        self.level = 0;
    }

    pub fn reset(&mut self) {
        self.total = 0;
        self.level = 0;
    }

    fn add(&mut self, points: u32) -> u32 {
        self.total = self.total.saturating_add(points);
        self.level = self.level.saturating_add(points);
        points
    }
}
