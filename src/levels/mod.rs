//! Built-in level table.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, GameError, GameResult};

/// Parameters for one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSpec {
    pub number: u32,
    pub queens: u32,
    /// Countdown length in seconds.
    pub time_limit: u32,
}

impl LevelSpec {
    pub const fn new(number: u32, queens: u32, time_limit: u32) -> Self {
        Self {
            number,
            queens,
            time_limit,
        }
    }
}

pub const STANDARD_LEVELS: [LevelSpec; 10] = [
    LevelSpec::new(1, 25, 120),
    LevelSpec::new(2, 27, 100),
    LevelSpec::new(3, 29, 90),
    LevelSpec::new(4, 31, 80),
    LevelSpec::new(5, 33, 75),
    LevelSpec::new(6, 35, 70),
    LevelSpec::new(7, 36, 65),
    LevelSpec::new(8, 37, 60),
    LevelSpec::new(9, 38, 55),
    LevelSpec::new(10, 39, 50),
];

/// An ordered, validated table of levels numbered `1..=max_level()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelCatalog {
    levels: Vec<LevelSpec>,
}

impl LevelCatalog {
    /// Validate and wrap a level table.
    ///
    /// Levels must be numbered `1, 2, 3, ...` in order with positive queen counts
    /// and time limits.
    pub fn new(levels: Vec<LevelSpec>) -> Result<Self, ConfigError> {
        if levels.is_empty() {
            return Err(ConfigError::invalid("level table is empty"));
        }
        for (i, spec) in levels.iter().enumerate() {
            let expected = i as u32 + 1;
            if spec.number != expected {
                return Err(ConfigError::invalid(format!(
                    "level at position {i} is numbered {}, expected {expected}",
                    spec.number
                )));
            }
            if spec.queens == 0 {
                return Err(ConfigError::invalid(format!(
                    "level {} has no queens",
                    spec.number
                )));
            }
            if spec.time_limit == 0 {
                return Err(ConfigError::invalid(format!(
                    "level {} has a zero time limit",
                    spec.number
                )));
            }
        }
        Ok(Self { levels })
    }

    pub fn standard() -> Self {
        Self {
            levels: STANDARD_LEVELS.to_vec(),
        }
    }

    pub fn spec_for(&self, level: u32) -> GameResult<LevelSpec> {
        if level == 0 {
            return Err(self.out_of_range(level));
        }
        self.levels
            .get(level as usize - 1)
            .copied()
            .ok_or_else(|| self.out_of_range(level))
    }

    #[inline]
    pub fn max_level(&self) -> u32 {
        self.levels.len() as u32
    }

    #[inline]
    pub fn is_final(&self, level: u32) -> bool {
        level == self.max_level()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LevelSpec> + '_ {
        self.levels.iter()
    }

    fn out_of_range(&self, level: u32) -> GameError {
        GameError::OutOfRange {
            level,
            max: self.max_level(),
        }
    }
}

impl Default for LevelCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
