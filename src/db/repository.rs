use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

use crate::daily::{StoreError, StreakStore};
use crate::models::{DailyAccuracy, Difficulty, PracticeStats, Scripture, StreakRecord};

// ─── Scriptures ──────────────────────────────────────────────────────────────

pub struct ScriptureRepo;

impl ScriptureRepo {
    pub fn get_all_active(conn: &Connection) -> Result<Vec<Scripture>> {
        let mut stmt = conn.prepare(
            "SELECT id, book, chapter, verse_start, verse_end, text
             FROM scriptures WHERE active = 1
             ORDER BY id",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(Scripture {
                id: row.get(0)?,
                book: row.get(1)?,
                chapter: row.get::<_, i64>(2)? as u32,
                verse_start: row.get::<_, i64>(3)? as u32,
                verse_end: row.get::<_, Option<i64>>(4)?.map(|v| v as u32),
                text: row.get(5)?,
            })
        })?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(anyhow::Error::from)
    }

    pub fn get_by_id(conn: &Connection, id: i64) -> Result<Option<Scripture>> {
        conn.query_row(
            "SELECT id, book, chapter, verse_start, verse_end, text
             FROM scriptures WHERE id = ?1",
            params![id],
            |row| {
                Ok(Scripture {
                    id: row.get(0)?,
                    book: row.get(1)?,
                    chapter: row.get::<_, i64>(2)? as u32,
                    verse_start: row.get::<_, i64>(3)? as u32,
                    verse_end: row.get::<_, Option<i64>>(4)?.map(|v| v as u32),
                    text: row.get(5)?,
                })
            },
        )
        .optional()
        .map_err(anyhow::Error::from)
    }
}

// ─── Guess log ───────────────────────────────────────────────────────────────

pub struct GuessRepo;

impl GuessRepo {
    pub fn log_attempt(
        conn: &Connection,
        scripture_id: i64,
        date: &str,
        difficulty: Difficulty,
        guess: &str,
        correct: bool,
        is_daily: bool,
    ) -> Result<()> {
        conn.execute(
            "INSERT INTO guess_log (scripture_id, date, difficulty, guess, correct, is_daily)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                scripture_id,
                date,
                difficulty.as_str(),
                guess,
                correct as i32,
                is_daily as i32
            ],
        )?;
        Ok(())
    }

    pub fn overall_stats(conn: &Connection) -> Result<PracticeStats> {
        conn.query_row(
            "SELECT COUNT(*), COALESCE(SUM(correct), 0) FROM guess_log",
            [],
            |row| {
                Ok(PracticeStats {
                    attempts: row.get::<_, i64>(0)? as u32,
                    correct: row.get::<_, i64>(1)? as u32,
                })
            },
        )
        .map_err(anyhow::Error::from)
    }

    pub fn stats_for_difficulty(conn: &Connection, difficulty: Difficulty) -> Result<PracticeStats> {
        conn.query_row(
            "SELECT COUNT(*), COALESCE(SUM(correct), 0)
             FROM guess_log WHERE difficulty = ?1",
            params![difficulty.as_str()],
            |row| {
                Ok(PracticeStats {
                    attempts: row.get::<_, i64>(0)? as u32,
                    correct: row.get::<_, i64>(1)? as u32,
                })
            },
        )
        .map_err(anyhow::Error::from)
    }

    /// Attempts today's daily challenge has taken so far.
    pub fn count_daily_attempts(conn: &Connection, date: &str) -> Result<u32> {
        conn.query_row(
            "SELECT COUNT(*) FROM guess_log WHERE date = ?1 AND is_daily = 1",
            params![date],
            |row| row.get::<_, i64>(0).map(|n| n as u32),
        )
        .map_err(anyhow::Error::from)
    }

    pub fn daily_grid(conn: &Connection, start: &str, end: &str) -> Result<Vec<DailyAccuracy>> {
        let mut stmt = conn.prepare(
            "SELECT date, COUNT(*), COALESCE(SUM(correct), 0)
             FROM guess_log
             WHERE date >= ?1 AND date <= ?2
             GROUP BY date
             ORDER BY date",
        )?;

        let rows = stmt.query_map(params![start, end], |row| {
            Ok(DailyAccuracy {
                date: row.get(0)?,
                attempts: row.get::<_, i64>(1)? as u32,
                correct: row.get::<_, i64>(2)? as u32,
            })
        })?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(anyhow::Error::from)
    }
}

// ─── Streak record ───────────────────────────────────────────────────────────

const STREAK_KEY: &str = "daily_streak";

pub struct StreakRepo;

impl StreakRepo {
    /// Absent row is the normal empty state; a row that no longer decodes
    /// is reset to zero rather than surfaced.
    pub fn load(conn: &Connection) -> Result<StreakRecord, StoreError> {
        let raw: Option<String> = conn
            .query_row(
                "SELECT value FROM app_meta WHERE key = ?1",
                params![STREAK_KEY],
                |row| row.get(0),
            )
            .optional()?;

        match raw {
            None => Ok(StreakRecord::default()),
            Some(json) => match serde_json::from_str(&json) {
                Ok(record) => Ok(record),
                Err(err) => {
                    log::warn!("streak record corrupt, resetting: {}", err);
                    Ok(StreakRecord::default())
                }
            },
        }
    }

    /// Whole-record replace, atomic at the row level.
    pub fn save(conn: &Connection, record: &StreakRecord) -> Result<(), StoreError> {
        let json = serde_json::to_string(record)
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        conn.execute(
            "INSERT INTO app_meta (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = ?2",
            params![STREAK_KEY, json],
        )?;
        Ok(())
    }
}

/// `StreakStore` over the app database, for injecting into the tracker.
pub struct SqliteStreakStore<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteStreakStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl StreakStore for SqliteStreakStore<'_> {
    fn load(&self) -> Result<StreakRecord, StoreError> {
        StreakRepo::load(self.conn)
    }

    fn save(&mut self, record: &StreakRecord) -> Result<(), StoreError> {
        StreakRepo::save(self.conn, record)
    }
}

// ─── App meta ────────────────────────────────────────────────────────────────

pub struct MetaRepo;

impl MetaRepo {
    pub fn get(conn: &Connection, key: &str) -> Result<Option<String>> {
        conn.query_row(
            "SELECT value FROM app_meta WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()
        .map_err(anyhow::Error::from)
    }

    pub fn set(conn: &Connection, key: &str, value: &str) -> Result<()> {
        conn.execute(
            "INSERT INTO app_meta (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = ?2",
            params![key, value],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::run_migrations;
    use chrono::NaiveDate;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        conn
    }

    #[test]
    fn streak_record_round_trips() {
        let conn = test_conn();
        let record = StreakRecord {
            current_streak: 4,
            longest_streak: 11,
            total_completed: 40,
            last_played: NaiveDate::from_ymd_opt(2025, 2, 3),
        };
        StreakRepo::save(&conn, &record).unwrap();
        assert_eq!(StreakRepo::load(&conn).unwrap(), record);
    }

    #[test]
    fn absent_record_loads_as_zero() {
        let conn = test_conn();
        assert_eq!(StreakRepo::load(&conn).unwrap(), StreakRecord::default());
    }

    #[test]
    fn corrupt_record_resets_to_zero() {
        let conn = test_conn();
        MetaRepo::set(&conn, "daily_streak", "{not json").unwrap();
        assert_eq!(StreakRepo::load(&conn).unwrap(), StreakRecord::default());
    }

    #[test]
    fn save_replaces_the_whole_record() {
        let conn = test_conn();
        let first = StreakRecord {
            current_streak: 1,
            longest_streak: 1,
            total_completed: 1,
            last_played: NaiveDate::from_ymd_opt(2025, 2, 3),
        };
        let second = StreakRecord {
            current_streak: 2,
            longest_streak: 2,
            total_completed: 2,
            last_played: NaiveDate::from_ymd_opt(2025, 2, 4),
        };
        StreakRepo::save(&conn, &first).unwrap();
        StreakRepo::save(&conn, &second).unwrap();
        assert_eq!(StreakRepo::load(&conn).unwrap(), second);
    }

    #[test]
    fn record_survives_reopening_the_database() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("versemaster.db");

        let record = StreakRecord {
            current_streak: 3,
            longest_streak: 3,
            total_completed: 3,
            last_played: NaiveDate::from_ymd_opt(2025, 2, 3),
        };
        {
            let conn = Connection::open(&path).unwrap();
            run_migrations(&conn).unwrap();
            StreakRepo::save(&conn, &record).unwrap();
        }
        let conn = Connection::open(&path).unwrap();
        run_migrations(&conn).unwrap();
        assert_eq!(StreakRepo::load(&conn).unwrap(), record);
    }

    #[test]
    fn guess_log_aggregates_by_difficulty_and_day() {
        let conn = test_conn();
        GuessRepo::log_attempt(&conn, 1, "2025-02-03", Difficulty::Easy, "alma", true, false).unwrap();
        GuessRepo::log_attempt(&conn, 2, "2025-02-03", Difficulty::Hard, "ether 12:6", false, true).unwrap();
        GuessRepo::log_attempt(&conn, 2, "2025-02-04", Difficulty::Hard, "ether 12:6", true, true).unwrap();

        let overall = GuessRepo::overall_stats(&conn).unwrap();
        assert_eq!(overall.attempts, 3);
        assert_eq!(overall.correct, 2);

        let hard = GuessRepo::stats_for_difficulty(&conn, Difficulty::Hard).unwrap();
        assert_eq!(hard.attempts, 2);
        assert_eq!(hard.correct, 1);

        assert_eq!(GuessRepo::count_daily_attempts(&conn, "2025-02-03").unwrap(), 1);

        let grid = GuessRepo::daily_grid(&conn, "2025-02-01", "2025-02-07").unwrap();
        assert_eq!(grid.len(), 2);
        assert_eq!(grid[0].date, "2025-02-03");
        assert_eq!(grid[0].attempts, 2);
    }

    #[test]
    fn corpus_queries_return_seeded_passages() {
        let conn = test_conn();
        let all = ScriptureRepo::get_all_active(&conn).unwrap();
        assert_eq!(all.len(), 25);

        let first = ScriptureRepo::get_by_id(&conn, all[0].id).unwrap().unwrap();
        assert_eq!(first.reference(), all[0].reference());
        assert!(ScriptureRepo::get_by_id(&conn, 9999).unwrap().is_none());
    }

    #[test]
    fn tracker_over_sqlite_store_completes_and_reloads() {
        use crate::daily::{Clock, DailyTracker};

        struct Jan5;
        impl Clock for Jan5 {
            fn today(&self) -> NaiveDate {
                NaiveDate::from_ymd_opt(2025, 1, 5).unwrap()
            }
        }

        let conn = test_conn();
        let mut tracker = DailyTracker::new(SqliteStreakStore::new(&conn), Jan5);
        let record = tracker.complete_today();
        assert_eq!(record.current_streak, 1);

        // A fresh tracker over the same database sees the completion.
        let tracker2 = DailyTracker::new(SqliteStreakStore::new(&conn), Jan5);
        assert!(tracker2.today_completed());
        assert_eq!(tracker2.stats().total_completed, 1);
    }
}
