//! Per-agent standings and pairwise rating tables.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::tourney::elo::INITIAL_RATING;

/// One agent's tournament record.
#[derive(Clone, Debug, Serialize)]
pub struct AgentRecord {
    pub rating: f64,
    pub games_played: u64,
    pub games_won: u64,
    pub games_lost: u64,
    pub games_drawn: u64,
    pub matches_played: u64,
    pub matches_won: u64,
    pub matches_lost: u64,
    pub matches_drawn: u64,
}

impl AgentRecord {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rating: INITIAL_RATING,
            games_played: 0,
            games_won: 0,
            games_lost: 0,
            games_drawn: 0,
            matches_played: 0,
            matches_won: 0,
            matches_lost: 0,
            matches_drawn: 0,
        }
    }
}

impl Default for AgentRecord {
    fn default() -> Self {
        Self::new()
    }
}

/// Ratings tracked separately for each unordered pair of agents.
///
/// The global rating mixes results against the whole pool; the pairwise
/// table answers "how does A do specifically against B". Keys are the
/// two names joined in sorted order.
#[derive(Clone, Debug, Default, Serialize)]
pub struct PairwiseRatings {
    table: FxHashMap<String, (f64, f64)>,
}

impl PairwiseRatings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn key(a: &str, b: &str) -> (String, bool) {
        if a <= b {
            (format!("{a}|{b}"), false)
        } else {
            (format!("{b}|{a}"), true)
        }
    }

    /// Ratings for the pair, returned in the order the names were passed.
    /// Unseen pairs start at the initial rating.
    #[must_use]
    pub fn get(&self, a: &str, b: &str) -> (f64, f64) {
        let (key, swapped) = Self::key(a, b);
        let (x, y) = self
            .table
            .get(&key)
            .copied()
            .unwrap_or((INITIAL_RATING, INITIAL_RATING));
        if swapped {
            (y, x)
        } else {
            (x, y)
        }
    }

    /// Store updated ratings for the pair.
    pub fn set(&mut self, a: &str, b: &str, rating_a: f64, rating_b: f64) {
        let (key, swapped) = Self::key(a, b);
        let entry = if swapped {
            (rating_b, rating_a)
        } else {
            (rating_a, rating_b)
        };
        self.table.insert(key, entry);
    }

    /// Number of pairs seen so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
