use chrono::NaiveDate;
use thiserror::Error;

use crate::daily::evaluator;
use crate::models::{StreakRecord, StreakStats};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Durable home of the one `StreakRecord`. Absence is a normal empty state:
/// `load` returns the zero record, not an error.
pub trait StreakStore {
    fn load(&self) -> Result<StreakRecord, StoreError>;
    fn save(&mut self, record: &StreakRecord) -> Result<(), StoreError>;
}

pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Device-local calendar date. Streaks are a local-day concept, so this must
/// never be swapped for UTC.
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// The one boundary the presentation layer talks to.
///
/// Owns the record exclusively; callers only ever see read projections.
/// Storage failures degrade instead of surfacing: the user can always play,
/// at worst an increment is lost for the session.
pub struct DailyTracker<S: StreakStore, C: Clock> {
    store: S,
    clock: C,
    record: StreakRecord,
}

impl<S: StreakStore, C: Clock> DailyTracker<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        let record = load_or_zero(&store);
        Self { store, clock, record }
    }

    pub fn stats(&self) -> StreakStats {
        StreakStats {
            current_streak: self.record.current_streak,
            longest_streak: self.record.longest_streak,
            total_completed: self.record.total_completed,
        }
    }

    /// Answers against the clock's current date, so a midnight rollover
    /// while the process sits idle flips this back to false on its own.
    pub fn today_completed(&self) -> bool {
        self.record.completed_on(self.clock.today())
    }

    /// Re-read from the store. Call when returning to the stats surface;
    /// mutates nothing.
    pub fn refresh(&mut self) {
        self.record = load_or_zero(&self.store);
    }

    /// Record today's completion. Idempotent: a second call on the same day
    /// returns the record unchanged.
    ///
    /// Reloads from the store and re-checks the gate before writing, so a
    /// caller that raced a previous completion still observes its effect.
    pub fn complete_today(&mut self) -> StreakRecord {
        let today = self.clock.today();
        self.refresh();

        if self.record.completed_on(today) {
            return self.record.clone();
        }

        let next = evaluator::evaluate(&self.record, today);
        if let Err(first) = self.store.save(&next) {
            log::warn!("saving streak record failed, retrying once: {}", first);
            if let Err(second) = self.store.save(&next) {
                // Keep the in-memory record so this session still shows the
                // streak; it may be lost on restart.
                log::warn!("retry failed, accepting lost update: {}", second);
            }
        }
        self.record = next;
        self.record.clone()
    }
}

fn load_or_zero<S: StreakStore>(store: &S) -> StreakRecord {
    match store.load() {
        Ok(record) => record,
        Err(err) => {
            log::warn!("loading streak record failed, starting from zero: {}", err);
            StreakRecord::default()
        }
    }
}
