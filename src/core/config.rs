//! Engine configuration types.
//!
//! - `Difficulty`: which move-selection policy the engine uses
//! - `EngineConfig`: difficulty, the engine's symbol and the RNG seed
//!
//! Both are fixed for the lifetime of an engine; build a new engine to
//! change them.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ParseDifficultyError;
use super::symbol::Symbol;

/// Strength tier of the automated player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Uniformly random empty cell.
    Easy,
    /// 40% random, otherwise a 2-ply search.
    Medium,
    /// Full-depth alpha-beta search. Never loses.
    #[default]
    Hard,
}

impl Difficulty {
    /// Map a numeric level (1 = Easy, 2 = Medium, 3 = Hard).
    ///
    /// Levels outside `1..=3` fall back to Hard.
    #[must_use]
    pub const fn from_level(level: u8) -> Self {
        match level {
            1 => Difficulty::Easy,
            2 => Difficulty::Medium,
            _ => Difficulty::Hard,
        }
    }

    /// Numeric level of this tier.
    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    /// All tiers, weakest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => f.write_str("Easy"),
            Difficulty::Medium => f.write_str("Medium"),
            Difficulty::Hard => f.write_str("Hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" | "1" => Ok(Difficulty::Easy),
            "medium" | "2" => Ok(Difficulty::Medium),
            "hard" | "3" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError {
                input: s.to_string(),
            }),
        }
    }
}

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Policy tier.
    pub difficulty: Difficulty,

    /// Symbol the engine plays. The opponent plays the other one.
    pub engine_symbol: Symbol,

    /// Seed for the default random source.
    /// Same seed produces the same Easy/Medium choices.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Hard,
            engine_symbol: Symbol::O,
            seed: 42,
        }
    }
}

impl EngineConfig {
    /// Set the difficulty.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the engine's symbol.
    #[must_use]
    pub fn with_symbol(mut self, symbol: Symbol) -> Self {
        self.engine_symbol = symbol;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// The symbol the engine plays against.
    #[must_use]
    pub fn opponent_symbol(&self) -> Symbol {
        self.engine_symbol.opponent()
    }
}
