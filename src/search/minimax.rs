//! Bounded-depth minimax with optional alpha-beta pruning.
//!
//! The search runs on an owned scratch copy of the cells. Every hypothetical
//! move is placed, searched and cleared again before the next sibling is
//! tried, so the scratch buffer is back in its original state whenever a
//! call returns.
//!
//! ## Scoring
//!
//! Leaves are scored from the engine's point of view:
//!
//! | Outcome | Score |
//! |---|---|
//! | engine wins at depth `d` | `10 - d` |
//! | opponent wins at depth `d` | `d - 10` |
//! | draw or depth cutoff | `0` |
//!
//! Shallow wins outscore deep ones and deep losses outscore shallow ones.

use smallvec::SmallVec;

use crate::core::{terminal_status, Cell, Cells, Status, Symbol, CELL_COUNT};

use super::stats::SearchStats;

/// Base value of a win before the depth adjustment.
pub const WIN_SCORE: i32 = 10;

/// Whether alpha-beta cutoffs are taken.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Pruning {
    #[default]
    Enabled,
    /// Plain exhaustive minimax. Same result, more nodes.
    Disabled,
}

/// A root move and its minimax value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RootChoice {
    pub index: usize,
    pub score: i32,
}

/// Per-root-move scores in index order.
pub type RootScores = SmallVec<[RootChoice; CELL_COUNT]>;

/// Minimax searcher for one side.
#[derive(Clone, Copy, Debug)]
pub struct Minimax {
    me: Symbol,
    max_depth: u32,
    pruning: Pruning,
}

impl Minimax {
    /// Search for `me`, cutting off at `max_depth` plies below the root move.
    #[must_use]
    pub fn new(me: Symbol, max_depth: u32) -> Self {
        Self {
            me,
            max_depth,
            pruning: Pruning::Enabled,
        }
    }

    #[must_use]
    pub fn with_pruning(mut self, pruning: Pruning) -> Self {
        self.pruning = pruning;
        self
    }

    #[must_use]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Leaf value of `status` reached at `depth`.
    #[must_use]
    pub fn leaf_score(&self, status: Status, depth: u32) -> i32 {
        let depth = depth as i32;
        match status {
            Status::Win(s) if s == self.me => WIN_SCORE - depth,
            Status::Win(_) => depth - WIN_SCORE,
            Status::Draw | Status::Ongoing => 0,
        }
    }

    /// Best move for `me`, or `None` when no cell is empty.
    ///
    /// Ties keep the lowest index.
    pub fn best_move(&self, cells: &Cells, stats: &mut SearchStats) -> Option<RootChoice> {
        let mut best: Option<RootChoice> = None;
        for choice in self.root_scores(cells, stats) {
            if best.map_or(true, |b| choice.score > b.score) {
                best = Some(choice);
            }
        }
        best
    }

    /// Value of every empty root cell, in index order.
    ///
    /// Each root child is searched with a full window, so the values are
    /// exact whether or not pruning is enabled.
    pub fn root_scores(&self, cells: &Cells, stats: &mut SearchStats) -> RootScores {
        let mut scratch = *cells;
        let mut scores = RootScores::new();

        for index in 0..CELL_COUNT {
            if !scratch[index].is_empty() {
                continue;
            }
            scratch[index] = Cell::Occupied(self.me);
            let score = self.search(&mut scratch, 0, false, i32::MIN, i32::MAX, stats);
            scratch[index] = Cell::Empty;
            scores.push(RootChoice { index, score });
        }

        debug_assert_eq!(&scratch, cells);
        scores
    }

    fn search(
        &self,
        scratch: &mut Cells,
        depth: u32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
        stats: &mut SearchStats,
    ) -> i32 {
        stats.nodes += 1;

        let status = terminal_status(scratch);
        if status.is_terminal() || depth >= self.max_depth {
            return self.leaf_score(status, depth);
        }

        let mover = if maximizing { self.me } else { self.me.opponent() };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for index in 0..CELL_COUNT {
            if !scratch[index].is_empty() {
                continue;
            }

            scratch[index] = Cell::Occupied(mover);
            let value = self.search(scratch, depth + 1, !maximizing, alpha, beta, stats);
            scratch[index] = Cell::Empty;

            if maximizing {
                best = best.max(value);
                alpha = alpha.max(best);
            } else {
                best = best.min(value);
                beta = beta.min(best);
            }

            if self.pruning == Pruning::Enabled && beta <= alpha {
                stats.cutoffs += 1;
                break;
            }
        }

        best
    }
}
