//! Per-game leaderboard of fastest times

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::storage::{keys, read_json, read_or_default, write_or_log, SharedStore};

/// One finished round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub elapsed_seconds: f64,
    pub timestamp: DateTime<Utc>,
    pub player_name: String,
}

pub struct Leaderboard {
    store: SharedStore,
    max_entries: usize,
    default_player_name: String,
}

impl Leaderboard {
    pub fn new(store: SharedStore, max_entries: usize, default_player_name: impl Into<String>) -> Self {
        Self {
            store,
            max_entries,
            default_player_name: default_player_name.into(),
        }
    }

    /// Stored entries, fastest first
    pub fn scores(&self, game: &str) -> Vec<LeaderboardEntry> {
        read_or_default(&*self.store, &keys::leaderboard(game))
    }

    /// Add a finished round under the current player name.
    ///
    /// Returns the rank (1-based) when the time made it onto the board.
    pub fn add_score(&self, game: &str, elapsed_seconds: f64) -> Option<usize> {
        self.add_score_at(game, elapsed_seconds, Utc::now())
    }

    pub fn add_score_at(&self, game: &str, elapsed_seconds: f64, now: DateTime<Utc>) -> Option<usize> {
        if !elapsed_seconds.is_finite() || elapsed_seconds <= 0.0 {
            log::debug!("Ignoring non-positive time {} for {}", elapsed_seconds, game);
            return None;
        }

        let entry = LeaderboardEntry {
            elapsed_seconds,
            timestamp: now,
            player_name: self.player_name(),
        };

        let mut scores = self.scores(game);
        scores.sort_by(|a, b| a.elapsed_seconds.total_cmp(&b.elapsed_seconds));

        // An equal time recorded later ranks below the earlier one
        let index = scores
            .partition_point(|e| e.elapsed_seconds.total_cmp(&elapsed_seconds) != Ordering::Greater);
        scores.insert(index, entry);
        scores.truncate(self.max_entries);

        write_or_log(&*self.store, &keys::leaderboard(game), &scores);

        (index < self.max_entries).then_some(index + 1)
    }

    /// Display name, or the placeholder when none was set
    pub fn player_name(&self) -> String {
        read_json::<String>(&*self.store, keys::DISPLAY_NAME)
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| self.default_player_name.clone())
    }

    /// Whether the learner picked a name of their own
    pub fn has_player_name(&self) -> bool {
        self.player_name() != self.default_player_name
    }

    /// Save a display name. Blank names are ignored.
    pub fn set_player_name(&self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        write_or_log(&*self.store, keys::DISPLAY_NAME, name)
    }
}
