pub mod evaluator;
pub mod tracker;

pub use tracker::{Clock, DailyTracker, LocalClock, StoreError, StreakStore};
