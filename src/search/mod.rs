//! Game-tree search for the automated player.
//!
//! ## Usage
//!
//! ```rust
//! use rust_ttt::core::{Board, Difficulty, EngineConfig, Symbol};
//! use rust_ttt::search::SearchEngine;
//!
//! let mut board = Board::new();
//! board.place(4, Symbol::X);
//!
//! let config = EngineConfig::default()
//!     .with_difficulty(Difficulty::Hard)
//!     .with_symbol(Symbol::O);
//! let mut engine = SearchEngine::new(config);
//!
//! let reply = engine.select_move(&board.snapshot()).unwrap();
//! assert!([0, 2, 6, 8].contains(&reply));
//! ```

pub mod engine;
pub mod minimax;
pub mod stats;

pub use engine::{SearchEngine, HARD_DEPTH, MEDIUM_DEPTH, MEDIUM_RANDOM_PERCENT};
pub use minimax::{Minimax, Pruning, RootChoice, RootScores, WIN_SCORE};
pub use stats::SearchStats;
