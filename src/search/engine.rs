//! Difficulty-tiered move selection.
//!
//! `SearchEngine` dispatches once per call on [`Difficulty`]:
//!
//! - **Easy**: a random empty cell
//! - **Medium**: random 40% of the time, otherwise a 2-ply search
//! - **Hard**: a full-depth alpha-beta search
//!
//! Medium's shallow search is deliberately exploitable: most root moves
//! evaluate to the cutoff score of `0`.

use std::time::Instant;

use tracing::{debug, instrument, trace};

use crate::core::{empty_cells, Cells, Difficulty, EngineConfig, GameRng, RandomSource, Symbol};

use super::minimax::{Minimax, Pruning, RootChoice};
use super::stats::SearchStats;

/// Chance (in percent) that Medium plays a random move.
pub const MEDIUM_RANDOM_PERCENT: usize = 40;

/// Depth cutoff for Medium's search.
pub const MEDIUM_DEPTH: u32 = 2;

/// Depth cutoff for Hard. Covers the whole game.
pub const HARD_DEPTH: u32 = 9;

/// Automated player.
///
/// Generic over the random source so tests can inject a deterministic one.
/// Holds no board state between calls; each search works on its own
/// scratch copy.
#[derive(Clone, Debug)]
pub struct SearchEngine<R = GameRng> {
    config: EngineConfig,
    rng: R,
    pruning: Pruning,
    stats: SearchStats,
}

impl SearchEngine<GameRng> {
    /// Create an engine with a `GameRng` seeded from `config.seed`.
    pub fn new(config: EngineConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self::with_rng(config, rng)
    }
}

impl<R: RandomSource> SearchEngine<R> {
    /// Create an engine with an injected random source.
    pub fn with_rng(config: EngineConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            pruning: Pruning::Enabled,
            stats: SearchStats::default(),
        }
    }

    /// Turn alpha-beta pruning on or off. The chosen move is the same
    /// either way.
    #[must_use]
    pub fn with_pruning(mut self, pruning: Pruning) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn difficulty(&self) -> Difficulty {
        self.config.difficulty
    }

    /// Symbol the engine plays.
    pub fn symbol(&self) -> Symbol {
        self.config.engine_symbol
    }

    /// Statistics of the most recent call.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Choose a move at the configured difficulty.
    pub fn select_move(&mut self, cells: &Cells) -> Option<usize> {
        self.select_move_with(cells, self.config.difficulty)
    }

    /// Choose a move at `difficulty`.
    ///
    /// Returns `None` only when the board has no empty cell. No random draw
    /// is consumed in that case.
    #[instrument(skip(self, cells), fields(engine = %self.config.engine_symbol))]
    pub fn select_move_with(&mut self, cells: &Cells, difficulty: Difficulty) -> Option<usize> {
        self.stats.reset();
        let start = Instant::now();

        let choice = if empty_cells(cells).is_empty() {
            None
        } else {
            match difficulty {
                Difficulty::Easy => self.random_move(cells),
                Difficulty::Medium => {
                    if self.rng.next_below(100) < MEDIUM_RANDOM_PERCENT {
                        trace!("medium: random branch");
                        self.random_move(cells)
                    } else {
                        trace!("medium: shallow search");
                        self.search_move(cells, MEDIUM_DEPTH)
                    }
                }
                Difficulty::Hard => self.search_move(cells, HARD_DEPTH),
            }
        };

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            index = ?choice,
            score = ?self.stats.root_score,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            "selected move"
        );
        choice
    }

    /// Exact root evaluation at `max_depth`: the move the search would
    /// pick together with its score. Does not consume randomness.
    pub fn evaluate(&mut self, cells: &Cells, max_depth: u32) -> Option<RootChoice> {
        self.stats.reset();
        let best = self.minimax(max_depth).best_move(cells, &mut self.stats);
        self.stats.root_score = best.map(|b| b.score);
        best
    }

    fn minimax(&self, max_depth: u32) -> Minimax {
        Minimax::new(self.config.engine_symbol, max_depth).with_pruning(self.pruning)
    }

    fn random_move(&mut self, cells: &Cells) -> Option<usize> {
        let empty = empty_cells(cells);
        if empty.is_empty() {
            return None;
        }
        let pick = self.rng.next_below(empty.len());
        empty.get(pick).copied()
    }

    fn search_move(&mut self, cells: &Cells, max_depth: u32) -> Option<usize> {
        let minimax = self.minimax(max_depth);
        let scores = minimax.root_scores(cells, &mut self.stats);
        trace!(?scores, max_depth, "root scores");

        let mut best: Option<RootChoice> = None;
        for choice in scores {
            if best.map_or(true, |b| choice.score > b.score) {
                best = Some(choice);
            }
        }

        self.stats.root_score = best.map(|b| b.score);
        best.map(|b| b.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Cell, ScriptedRng};

    const X: Cell = Cell::Occupied(Symbol::X);
    const O: Cell = Cell::Occupied(Symbol::O);
    const E: Cell = Cell::Empty;

    fn scripted(difficulty: Difficulty, script: Vec<usize>) -> SearchEngine<ScriptedRng> {
        let config = EngineConfig::default().with_difficulty(difficulty);
        SearchEngine::with_rng(config, ScriptedRng::new(script))
    }

    #[test]
    fn test_full_board_returns_none() {
        let cells = [X, O, X, X, O, O, O, X, X];
        for d in Difficulty::ALL {
            let mut engine = scripted(d, vec![0]);
            assert_eq!(engine.select_move(&cells), None);
            assert_eq!(engine.rng.draws(), 0);
        }
    }

    #[test]
    fn test_easy_picks_from_empty_cells() {
        let cells = [X, E, O, E, X, E, E, O, E];
        // Empty cells are [1, 3, 5, 6, 8]
        let mut engine = scripted(Difficulty::Easy, vec![0, 2, 4, 7]);
        assert_eq!(engine.select_move(&cells), Some(1));
        assert_eq!(engine.select_move(&cells), Some(5));
        assert_eq!(engine.select_move(&cells), Some(8));
        // 7 % 5 == 2
        assert_eq!(engine.select_move(&cells), Some(5));
    }

    #[test]
    fn test_medium_random_branch() {
        let cells = [X, E, E, E, E, E, E, E, E];
        // 39 < 40 takes the random branch, then picks empty cell #3 -> index 4
        let mut engine = scripted(Difficulty::Medium, vec![39, 3]);
        assert_eq!(engine.select_move(&cells), Some(4));
        assert_eq!(engine.stats().root_score, None);
    }

    #[test]
    fn test_medium_search_branch() {
        // O can win at 2; a 2-ply search sees it.
        let cells = [O, O, E, X, X, E, X, E, E];
        let mut engine = scripted(Difficulty::Medium, vec![40]);
        assert_eq!(engine.select_move(&cells), Some(2));
        assert_eq!(engine.rng.draws(), 1);
        assert_eq!(engine.stats().root_score, Some(10));
    }

    #[test]
    fn test_hard_takes_win() {
        let cells = [O, O, E, X, X, E, X, E, E];
        let mut engine = SearchEngine::new(EngineConfig::default());
        assert_eq!(engine.select_move(&cells), Some(2));
        assert!(engine.stats().nodes > 0);
    }

    #[test]
    fn test_select_move_with_overrides_difficulty() {
        let cells = [O, O, E, X, X, E, X, E, E];
        let mut engine = scripted(Difficulty::Easy, vec![1]);
        assert_eq!(engine.select_move_with(&cells, Difficulty::Hard), Some(2));
        assert_eq!(engine.rng.draws(), 0);
        assert_eq!(engine.difficulty(), Difficulty::Easy);
    }

    #[test]
    fn test_evaluate_matches_selection() {
        let cells = [X, E, E, E, E, E, E, E, E];
        let mut engine = SearchEngine::new(EngineConfig::default());
        let choice = engine.evaluate(&cells, HARD_DEPTH).unwrap();
        assert_eq!(engine.select_move(&cells), Some(choice.index));
        assert_eq!(choice.score, 0);
    }
}
