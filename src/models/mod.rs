pub mod scripture;
pub mod stats;
pub mod streak;

pub use scripture::{Difficulty, Scripture};
pub use stats::{DailyAccuracy, PracticeStats, StreakStats};
pub use streak::StreakRecord;
