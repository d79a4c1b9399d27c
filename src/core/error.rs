//! Error types for move validation and configuration parsing.
//!
//! All errors here are local and recoverable: a rejected move leaves the
//! board untouched, and the caller decides what to do next.

use derive_more::{Display, Error};

use super::symbol::Symbol;

/// Reasons a move can be rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Index outside `0..=8`.
    #[display("cell index {index} is out of range")]
    OutOfRange { index: usize },

    /// The target cell already holds a symbol.
    #[display("cell {index} is already occupied by {by}")]
    Occupied { index: usize, by: Symbol },

    /// Attempted to place the empty marker.
    #[display("cannot place an empty marker at cell {index}")]
    EmptyMarker { index: usize },

    /// The game has already reached a terminal state.
    #[display("game is already over")]
    GameOver,

    /// The automated side was asked to move out of turn.
    #[display("it is not the engine's turn ({to_move} to move)")]
    NotEngineTurn { to_move: Symbol },
}

/// Failure to parse a [`Difficulty`](super::config::Difficulty) from text.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
#[display("unknown difficulty {input:?} (expected easy, medium, hard or 1-3)")]
pub struct ParseDifficultyError {
    pub input: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        assert_eq!(
            MoveError::OutOfRange { index: 9 }.to_string(),
            "cell index 9 is out of range"
        );
        assert_eq!(
            MoveError::Occupied { index: 4, by: Symbol::X }.to_string(),
            "cell 4 is already occupied by X"
        );
        assert_eq!(MoveError::GameOver.to_string(), "game is already over");
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&MoveError::GameOver);
        assert_error(&ParseDifficultyError { input: "x".into() });
    }
}
