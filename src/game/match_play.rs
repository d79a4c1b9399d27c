//! One game between a human and the engine.
//!
//! The driver owns the authoritative [`Board`], tracks whose turn it is and
//! refuses moves once the game is over. Each accepted move is followed by a
//! terminal check, so `status()` is always current.

use tracing::{debug, instrument};

use crate::core::{Board, MoveError, RandomSource, Status, Symbol};
use crate::search::SearchEngine;

use super::record::GameOutcome;

/// A single game in progress.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    human: Symbol,
    first: Symbol,
    to_move: Symbol,
    status: Status,
    history: Vec<usize>,
}

impl Game {
    /// Start a game where the human plays `human` and `first` moves first.
    pub fn new(human: Symbol, first: Symbol) -> Self {
        Self {
            board: Board::new(),
            human,
            first,
            to_move: first,
            status: Status::Ongoing,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Symbol due to move next.
    pub fn to_move(&self) -> Symbol {
        self.to_move
    }

    pub fn human(&self) -> Symbol {
        self.human
    }

    /// Symbol played by the engine.
    pub fn engine(&self) -> Symbol {
        self.human.opponent()
    }

    /// Cells played so far, in order.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    pub fn is_human_turn(&self) -> bool {
        self.to_move == self.human
    }

    /// Apply a move for the side to move.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn play(&mut self, index: usize) -> Result<Status, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }

        self.board.try_place(index, self.to_move)?;
        self.history.push(index);
        self.status = self.board.status();
        self.to_move = self.to_move.opponent();

        debug!(status = ?self.status, "move applied");
        Ok(self.status)
    }

    /// Let the engine make its move.
    ///
    /// Returns the cell played, or `None` if the engine found no move.
    #[instrument(skip(self, engine))]
    pub fn play_engine<R: RandomSource>(
        &mut self,
        engine: &mut SearchEngine<R>,
    ) -> Result<Option<usize>, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if self.is_human_turn() || engine.symbol() != self.to_move {
            return Err(MoveError::NotEngineTurn {
                to_move: self.to_move,
            });
        }

        match engine.select_move(&self.board.snapshot()) {
            Some(index) => {
                self.play(index)?;
                Ok(Some(index))
            }
            None => Ok(None),
        }
    }

    /// Result from the human's point of view, once the game is over.
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.status {
            Status::Ongoing => None,
            Status::Draw => Some(GameOutcome::Draw),
            Status::Win(s) if s == self.human => Some(GameOutcome::Win),
            Status::Win(_) => Some(GameOutcome::Loss),
        }
    }

    /// Start over with the same sides.
    pub fn reset(&mut self) {
        self.board.reset();
        self.to_move = self.first;
        self.status = Status::Ongoing;
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Difficulty, EngineConfig, ScriptedRng};

    fn hard_engine(symbol: Symbol) -> SearchEngine {
        SearchEngine::new(EngineConfig::default().with_symbol(symbol))
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new(Symbol::X, Symbol::X);
        assert!(game.is_human_turn());
        assert_eq!(game.play(4), Ok(Status::Ongoing));
        assert_eq!(game.to_move(), Symbol::O);
        assert_eq!(game.play(0), Ok(Status::Ongoing));
        assert_eq!(game.to_move(), Symbol::X);
        assert_eq!(game.history(), &[4, 0]);
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut game = Game::new(Symbol::X, Symbol::X);
        game.play(4).unwrap();
        let err = game.play(4).unwrap_err();
        assert_eq!(err, MoveError::Occupied { index: 4, by: Symbol::X });
        assert_eq!(game.to_move(), Symbol::O);
        assert_eq!(game.history(), &[4]);

        assert_eq!(game.play(11), Err(MoveError::OutOfRange { index: 11 }));
    }

    #[test]
    fn test_win_ends_game() {
        let mut game = Game::new(Symbol::X, Symbol::X);
        for index in [0, 3, 1, 4] {
            game.play(index).unwrap();
        }
        assert_eq!(game.play(2), Ok(Status::Win(Symbol::X)));
        assert_eq!(game.outcome(), Some(GameOutcome::Win));
        assert_eq!(game.play(8), Err(MoveError::GameOver));
    }

    #[test]
    fn test_engine_refuses_human_turn() {
        let mut game = Game::new(Symbol::X, Symbol::X);
        let mut engine = hard_engine(Symbol::O);
        assert_eq!(
            game.play_engine(&mut engine),
            Err(MoveError::NotEngineTurn { to_move: Symbol::X })
        );
    }

    #[test]
    fn test_engine_with_wrong_symbol_refused() {
        let mut game = Game::new(Symbol::X, Symbol::X);
        game.play(4).unwrap();
        let mut engine = hard_engine(Symbol::X);
        assert!(matches!(
            game.play_engine(&mut engine),
            Err(MoveError::NotEngineTurn { .. })
        ));
    }

    #[test]
    fn test_engine_replies_to_center_with_corner() {
        let mut game = Game::new(Symbol::X, Symbol::X);
        let mut engine = hard_engine(Symbol::O);
        game.play(4).unwrap();
        let reply = game.play_engine(&mut engine).unwrap().unwrap();
        assert!([0, 2, 6, 8].contains(&reply));
        assert!(game.is_human_turn());
    }

    #[test]
    fn test_engine_first_move() {
        let mut game = Game::new(Symbol::X, Symbol::O);
        let config = EngineConfig::default().with_difficulty(Difficulty::Easy);
        let mut engine = SearchEngine::with_rng(config, ScriptedRng::new(vec![6]));
        assert_eq!(game.play_engine(&mut engine), Ok(Some(6)));
        assert_eq!(game.board().cell(6), Some(crate::core::Cell::Occupied(Symbol::O)));
    }

    #[test]
    fn test_reset() {
        let mut game = Game::new(Symbol::O, Symbol::X);
        game.play(0).unwrap();
        game.reset();
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.to_move(), Symbol::X);
        assert!(game.history().is_empty());
        assert_eq!(game.outcome(), None);
    }
}
