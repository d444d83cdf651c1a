//! Persisted best score
//!
//! The simulation only compares against this; the host owns reading and
//! writing it.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::sim::Stats;

/// Best score seen on this device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HighScore {
    pub best: u32,
}

impl HighScore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a score beats the stored best
    pub fn qualifies(&self, score: u32) -> bool {
        score > self.best
    }

    /// Record a finished life. Returns true if it set a new best.
    pub fn submit(&mut self, stats: &Stats) -> bool {
        if !self.qualifies(stats.score) {
            return false;
        }
        log::info!("New high score: {} (was {})", stats.score, self.best);
        self.best = stats.score;
        true
    }

    /// Final stats with the high score filled in for display
    pub fn annotate(&self, stats: Stats) -> Stats {
        Stats {
            high_score: self.best.max(stats.score),
            ..stats
        }
    }

    /// Load the best score from `path` (0 if absent or unreadable)
    pub fn load(path: &Path) -> Self {
        let loaded = fs::read_to_string(path)
            .map_err(crate::Error::from)
            .and_then(|json| serde_json::from_str::<HighScore>(&json).map_err(crate::Error::from));
        match loaded {
            Ok(score) => {
                log::info!("Loaded high score {}", score.best);
                score
            }
            Err(e) => {
                log::info!("No high score found, starting fresh ({})", e);
                Self::new()
            }
        }
    }

    /// Save the best score to `path`
    pub fn save(&self, path: &Path) -> crate::error::Result<()> {
        fs::write(path, serde_json::to_string(self)?)?;
        log::info!("High score saved ({})", self.best);
        Ok(())
    }
}
