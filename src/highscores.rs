//! Session leaderboard
//!
//! Fastest completed rounds for this run of the game. Lower tick counts are
//! better. Kept in memory only.

use serde::{Deserialize, Serialize};

/// Maximum number of rounds to keep
pub const MAX_RECORDS: usize = 10;

/// A completed round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Ticks taken to fill the gauge
    pub score: u64,
    /// Angular velocity when the gauge filled
    pub velocity: i64,
    /// 1-based round number within the session
    pub round: u32,
}

/// Fastest rounds, sorted ascending by score
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SessionRecords {
    pub entries: Vec<RoundRecord>,
    rounds_played: u32,
}

impl SessionRecords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a score would make the board
    pub fn qualifies(&self, score: u64) -> bool {
        if self.entries.len() < MAX_RECORDS {
            return true;
        }
        self.entries.last().map(|e| score < e.score).unwrap_or(true)
    }

    /// Record a completed round. Returns the rank achieved, if any.
    pub fn add_score(&mut self, score: u64, velocity: i64) -> Option<usize> {
        self.rounds_played += 1;
        if !self.qualifies(score) {
            return None;
        }

        let entry = RoundRecord {
            score,
            velocity,
            round: self.rounds_played,
        };

        // Ties keep the earlier round ahead
        let pos = self.entries.iter().position(|e| score < e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_RECORDS);

        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fastest round so far
    pub fn best(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    /// Completed rounds this session (including ones that fell off the board)
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }
}
