//! Win/loss/draw tallies for human players.
//!
//! Everything here is in memory. Saving and loading records is left to the
//! caller.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Name used when a player gives a blank name.
pub const DEFAULT_PLAYER_NAME: &str = "Player";

/// Result of one game from the human's side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win,
    Loss,
    Draw,
}

/// Counts of finished games.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one finished game.
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win => self.wins += 1,
            GameOutcome::Loss => self.losses += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }

    /// Add another record's counts into this one.
    pub fn merge(&mut self, other: &Record) {
        self.wins += other.wins;
        self.losses += other.losses;
        self.draws += other.draws;
    }

    /// Total games played.
    #[must_use]
    pub fn games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Entry {
    name: String,
    record: Record,
}

/// Records keyed by player name.
///
/// Names are trimmed, and matched case-insensitively. The spelling from the
/// first time a player is seen is kept for display.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Leaderboard {
    entries: FxHashMap<String, Entry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn normalize(name: &str) -> &str {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            DEFAULT_PLAYER_NAME
        } else {
            trimmed
        }
    }

    fn entry_mut(&mut self, name: &str) -> &mut Entry {
        let display = Self::normalize(name);
        self.entries
            .entry(display.to_lowercase())
            .or_insert_with(|| Entry {
                name: display.to_string(),
                record: Record::default(),
            })
    }

    /// Count one game for `name`.
    pub fn record(&mut self, name: &str, outcome: GameOutcome) {
        self.entry_mut(name).record.record(outcome);
    }

    /// Fold a session record into `name`'s cumulative record.
    pub fn merge(&mut self, name: &str, session: &Record) {
        self.entry_mut(name).record.merge(session);
    }

    /// Record for `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.entries
            .get(&Self::normalize(name).to_lowercase())
            .map(|e| &e.record)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All players, most wins first. Ties are ordered by name.
    #[must_use]
    pub fn ranked(&self) -> Vec<(&str, &Record)> {
        let mut rows: Vec<_> = self
            .entries
            .iter()
            .map(|(key, e)| (key.as_str(), e))
            .collect();
        rows.sort_by(|(ka, a), (kb, b)| b.record.wins.cmp(&a.record.wins).then_with(|| ka.cmp(kb)));
        rows.into_iter()
            .map(|(_, e)| (e.name.as_str(), &e.record))
            .collect()
    }

    /// Every player sharing the highest win count, in ranked order.
    #[must_use]
    pub fn leaders(&self) -> Vec<&str> {
        let ranked = self.ranked();
        let Some(top) = ranked.first().map(|(_, r)| r.wins) else {
            return Vec::new();
        };
        ranked
            .into_iter()
            .take_while(|(_, r)| r.wins == top)
            .map(|(name, _)| name)
            .collect()
    }
}
