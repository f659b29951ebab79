use serde::{Deserialize, Serialize};

/// Running score plus the best score seen across games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTracker {
    score: u64,
    best: u64,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh run that remembers an earlier best.
    pub fn with_best(best: u64) -> Self {
        Self { score: 0, best }
    }

    /// Rehydrate from persisted counters. `best` never trails `score`.
    pub fn restore(score: u64, best: u64) -> Self {
        Self {
            score,
            best: best.max(score),
        }
    }

    pub fn add_points(&mut self, points: u64) {
        self.score += points;
        if self.score > self.best {
            self.best = self.score;
        }
    }

    /// Zero the running score; the best score is kept.
    pub fn reset(&mut self) {
        self.score = 0;
    }

    #[inline]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[inline]
    pub fn best(&self) -> u64 {
        self.best
    }
}
