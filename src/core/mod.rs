//! Core types: symbols, the board, configuration, errors and RNG.

pub mod symbol;
pub mod board;
pub mod config;
pub mod error;
pub mod rng;

pub use symbol::{Cell, Symbol};
pub use board::{
    empty_cells, is_full, terminal_status, Board, Cells, EmptyCells, Status, CELL_COUNT,
    WINNING_LINES,
};
pub use config::{Difficulty, EngineConfig};
pub use error::{MoveError, ParseDifficultyError};
pub use rng::{GameRng, GameRngState, RandomSource, ScriptedRng};
