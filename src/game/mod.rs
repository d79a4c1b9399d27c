//! Playing games against the engine and keeping score.
//!
//! - `match_play`: the turn loop for a single game
//! - `record`: per-player win/loss/draw tallies

pub mod match_play;
pub mod record;

pub use match_play::Game;
pub use record::{GameOutcome, Leaderboard, Record, DEFAULT_PLAYER_NAME};
