//! # rust-ttt
//!
//! Tic-tac-toe with an automated opponent built on game-tree search.
//!
//! ## Design Principles
//!
//! 1. **Pure evaluation**: terminal detection works on any 9-cell array, so
//!    search can score hypothetical positions without touching the real
//!    board.
//!
//! 2. **Owned scratch state**: each search copies the board once and
//!    explores by place/undo pairs on that copy. Nothing is shared between
//!    calls.
//!
//! 3. **Injected randomness**: the engine is generic over a
//!    [`RandomSource`], so the Easy and Medium policies are reproducible in
//!    tests.
//!
//! ## Difficulty
//!
//! - **Easy**: uniformly random empty cell
//! - **Medium**: 40% random, otherwise a 2-ply minimax
//! - **Hard**: full-depth minimax with alpha-beta pruning; never loses
//!
//! ## Modules
//!
//! - `core`: symbols, board, terminal detection, configuration, errors, RNG
//! - `search`: minimax/alpha-beta and the difficulty-tiered engine
//! - `game`: turn driver and win/loss/draw records

pub mod core;
pub mod search;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    terminal_status, is_full, empty_cells,
    Board, Cell, Cells, Status, Symbol,
    Difficulty, EngineConfig,
    MoveError, ParseDifficultyError,
    GameRng, GameRngState, RandomSource, ScriptedRng,
};

pub use crate::search::{Minimax, Pruning, RootChoice, SearchEngine, SearchStats};

pub use crate::game::{Game, GameOutcome, Leaderboard, Record};
