//! Search statistics for diagnostics and tests.

use serde::{Deserialize, Serialize};

/// Statistics collected during one `select_move` call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions visited by the recursion (root children included).
    pub nodes: u64,

    /// Alpha-beta cutoffs taken.
    pub cutoffs: u64,

    /// Score of the chosen root move, if a search ran.
    pub root_score: Option<i32>,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate nodes per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
