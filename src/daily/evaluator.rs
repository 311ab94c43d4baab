use chrono::NaiveDate;

use crate::models::StreakRecord;

/// Apply one daily-challenge completion to `record`.
///
/// Pure transition function: no I/O, caller persists the result. The caller
/// must have already checked the completion gate — a same-day call is a
/// caller bug and comes back unchanged.
pub fn evaluate(record: &StreakRecord, today: NaiveDate) -> StreakRecord {
    let current_streak = match record.last_played {
        None => 1,
        Some(last) => {
            let gap = (today - last).num_days();
            if gap == 0 {
                log::error!(
                    "evaluate called twice for {} — completion gate bypassed",
                    today
                );
                return record.clone();
            }
            if gap == 1 {
                record.current_streak + 1
            } else {
                // Broken streak, including a clock that moved backward.
                1
            }
        }
    };

    StreakRecord {
        current_streak,
        longest_streak: record.longest_streak.max(current_streak),
        total_completed: record.total_completed + 1,
        last_played: Some(today),
    }
}
