use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Persisted daily-challenge record. One per install.
///
/// `last_played` is a local calendar date; day boundaries are local
/// midnight, so two completions in different timezones on the same UTC
/// instant may land on different dates. That is intentional — streaks are
/// a local-day concept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakRecord {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_completed: u32,
    pub last_played: Option<NaiveDate>,
}

impl StreakRecord {
    /// True iff today's challenge has already been completed.
    /// Must be re-checked against a fresh "today" on every read — never
    /// cached across a midnight rollover.
    pub fn completed_on(&self, today: NaiveDate) -> bool {
        self.last_played == Some(today)
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn zero_record_is_never_completed() {
        let record = StreakRecord::default();
        assert!(record.last_played.is_none());
        assert!(!record.completed_on(date(2025, 1, 1)));
    }

    #[test]
    fn completed_only_on_exact_date() {
        let record = StreakRecord {
            current_streak: 3,
            longest_streak: 5,
            total_completed: 9,
            last_played: Some(date(2025, 1, 5)),
        };
        assert!(record.completed_on(date(2025, 1, 5)));
        assert!(!record.completed_on(date(2025, 1, 4)));
        assert!(!record.completed_on(date(2025, 1, 6)));
    }
}
