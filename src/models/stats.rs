use serde::{Deserialize, Serialize};

/// Read-only streak projection handed to the presentation layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakStats {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_completed: u32,
}

/// Aggregate guess counts, overall or per difficulty.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PracticeStats {
    pub attempts: u32,
    pub correct: u32,
}

impl PracticeStats {
    pub fn accuracy(&self) -> f64 {
        if self.attempts == 0 {
            0.0
        } else {
            self.correct as f64 / self.attempts as f64
        }
    }
}

/// One day's guessing activity, for the weekly grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyAccuracy {
    pub date: String,
    pub attempts: u32,
    pub correct: u32,
}
