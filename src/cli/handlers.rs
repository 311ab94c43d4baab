use anyhow::{anyhow, Result};
use chrono::Local;
use rusqlite::Connection;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::config::AppConfig;
use crate::daily::{DailyTracker, LocalClock};
use crate::db::repository::{GuessRepo, MetaRepo, ScriptureRepo, SqliteStreakStore};
use crate::game::picker;
use crate::game::{check_guess, GuessOutcome};
use crate::models::{Difficulty, Scripture};
use crate::utils::format::{format_pct, progress_bar};

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const GOLD: &str = "\x1b[38;2;196;160;68m";

fn tracker(conn: &Connection) -> DailyTracker<SqliteStreakStore<'_>, LocalClock> {
    DailyTracker::new(SqliteStreakStore::new(conn), LocalClock)
}

// ─── Daily challenge ─────────────────────────────────────────────────────────

pub fn handle_daily(conn: &Connection, config: &AppConfig) -> Result<()> {
    let today = Local::now().date_naive();
    let today_str = today.format("%Y-%m-%d").to_string();
    let mut tracker = tracker(conn);

    if tracker.today_completed() {
        let stats = tracker.stats();
        println!();
        println_colored!(GREEN, "  ✓ Today's challenge is already done");
        println_colored!(
            BOLD,
            "  Streak: {} days  |  Best: {}  |  Total: {}",
            stats.current_streak,
            stats.longest_streak,
            stats.total_completed
        );
        println!();
        return Ok(());
    }

    let corpus = ScriptureRepo::get_all_active(conn)?;
    let passage = picker::daily_passage(&corpus, today)
        .ok_or_else(|| anyhow!("No passages available"))?;
    let difficulty = parse_difficulty(&config.daily.difficulty)?;

    println!();
    println_colored!(GOLD, "  Daily Challenge — {}", today_str);
    println_colored!(DIM, "  Name the {} for this passage:", difficulty.requirement());
    println!();
    print_passage(passage);
    println!();

    loop {
        let input = prompt("  Your guess (blank to give up for now): ")?;
        if input.trim().is_empty() {
            println_colored!(DIM, "  Come back later — the streak waits for a correct guess.");
            println!();
            return Ok(());
        }

        match check_guess(passage, &input, difficulty) {
            GuessOutcome::Unrecognized => {
                println_colored!(AMBER, "  Couldn't read that as a reference. Try e.g. \"Alma 32:21\".");
                continue;
            }
            outcome => {
                let correct = outcome == GuessOutcome::Correct;
                GuessRepo::log_attempt(
                    conn,
                    passage.id,
                    &today_str,
                    difficulty,
                    input.trim(),
                    correct,
                    true,
                )?;

                match outcome {
                    GuessOutcome::Correct => break,
                    GuessOutcome::RightBook => {
                        println_colored!(
                            AMBER,
                            "  ◑ Right book — but the challenge asks for the {}.",
                            difficulty.requirement()
                        );
                    }
                    _ => {
                        println_colored!(RED, "  ✗ Not it. Read the passage again.");
                    }
                }
            }
        }
    }

    let record = tracker.complete_today();
    let attempts = GuessRepo::count_daily_attempts(conn, &today_str)?;

    println!();
    println_colored!(GREEN, "  ✓ {} — got it in {} guess{}", passage.reference(), attempts, if attempts == 1 { "" } else { "es" });
    println_colored!(
        BOLD,
        "  Streak: {} days  |  Best: {}  |  Total: {}",
        record.current_streak,
        record.longest_streak,
        record.total_completed
    );
    if config.daily.show_streak_bar {
        println_colored!(GREEN, "  {}", progress_bar(record.current_streak, 30, 12));
    }
    println!();
    Ok(())
}

// ─── Practice ────────────────────────────────────────────────────────────────

pub fn handle_play(
    conn: &Connection,
    config: &AppConfig,
    difficulty_arg: Option<&str>,
    rounds_arg: Option<u32>,
) -> Result<()> {
    let today_str = Local::now().date_naive().format("%Y-%m-%d").to_string();
    let difficulty = parse_difficulty(difficulty_arg.unwrap_or(config.practice.difficulty.as_str()))?;
    let rounds = rounds_arg.unwrap_or(config.practice.rounds).max(1);

    let corpus = ScriptureRepo::get_all_active(conn)?;
    if corpus.is_empty() {
        return Err(anyhow!("No passages available"));
    }

    let mut last_id: Option<i64> = MetaRepo::get(conn, "last_practice_id")?
        .and_then(|v| v.parse().ok());

    println!();
    println_colored!(GOLD, "  Practice — {} ({} rounds)", difficulty.display_name(), rounds);
    println!();

    let mut correct_count = 0u32;
    let mut played = 0u32;

    for round in 1..=rounds {
        let passage = picker::next_random(&corpus, last_id)
            .ok_or_else(|| anyhow!("No passages available"))?;
        last_id = Some(passage.id);
        MetaRepo::set(conn, "last_practice_id", &passage.id.to_string())?;

        println_colored!(DIM, "  Round {}/{}", round, rounds);
        print_passage(passage);
        println!();

        let input = prompt("  Your guess (blank to stop): ")?;
        if input.trim().is_empty() {
            break;
        }
        played += 1;

        let outcome = check_guess(passage, &input, difficulty);
        let correct = outcome == GuessOutcome::Correct;
        if outcome != GuessOutcome::Unrecognized {
            GuessRepo::log_attempt(
                conn,
                passage.id,
                &today_str,
                difficulty,
                input.trim(),
                correct,
                false,
            )?;
        }

        match outcome {
            GuessOutcome::Correct => {
                correct_count += 1;
                println_colored!(GREEN, "  ✓ {}", passage.reference());
            }
            GuessOutcome::RightBook => {
                println_colored!(AMBER, "  ◑ Right book — it was {}", passage.reference());
            }
            GuessOutcome::Wrong => {
                println_colored!(RED, "  ✗ It was {}", passage.reference());
            }
            GuessOutcome::Unrecognized => {
                println_colored!(AMBER, "  Couldn't read that as a reference — it was {}", passage.reference());
            }
        }
        println!();
    }

    if played > 0 {
        println_colored!(
            BOLD,
            "  Session: {}/{} correct ({})",
            correct_count,
            played,
            format_pct(correct_count as f64 / played as f64)
        );
        println!();
    }
    Ok(())
}

// ─── Stats ───────────────────────────────────────────────────────────────────

pub fn handle_stats(conn: &Connection, week: bool) -> Result<()> {
    let today = Local::now().date_naive();
    let today_str = today.format("%Y-%m-%d").to_string();

    let tracker = tracker(conn);
    let streak = tracker.stats();
    let overall = GuessRepo::overall_stats(conn)?;

    println!();
    println_colored!(GOLD, "  Statistics");
    println!();
    println_colored!(
        BOLD,
        "  Streak:    {} days current  |  {} days best  |  {} dailies total",
        streak.current_streak,
        streak.longest_streak,
        streak.total_completed
    );
    if tracker.today_completed() {
        println_colored!(GREEN, "  Today:     done ✓");
    } else {
        println_colored!(AMBER, "  Today:     not yet played");
    }

    if overall.attempts == 0 {
        println_colored!(DIM, "  Guesses:   none yet");
    } else {
        println!(
            "  Guesses:   {}/{} correct ({})",
            overall.correct,
            overall.attempts,
            format_pct(overall.accuracy())
        );
        for difficulty in Difficulty::all() {
            let s = GuessRepo::stats_for_difficulty(conn, difficulty)?;
            if s.attempts > 0 {
                println_colored!(
                    DIM,
                    "    {:<8} {}/{} ({})",
                    difficulty.display_name(),
                    s.correct,
                    s.attempts,
                    format_pct(s.accuracy())
                );
            }
        }
    }

    if week {
        let week_start = today - chrono::Duration::days(6);
        let week_start_str = week_start.format("%Y-%m-%d").to_string();
        let grid = GuessRepo::daily_grid(conn, &week_start_str, &today_str)?;

        println!();
        println_colored!(DIM, "  Last 7 days  (● = all correct, ◕ = most, ◑ = some, ○ = none)");
        println!();
        print!("  ");
        for offset in 0..7 {
            let date = (week_start + chrono::Duration::days(offset)).format("%Y-%m-%d").to_string();
            let icon = match grid.iter().find(|d| d.date == date) {
                None => format!("{}·\x1b[0m ", DIM),
                Some(d) if d.correct == d.attempts => format!("{}●\x1b[0m ", GREEN),
                Some(d) if d.correct * 2 >= d.attempts => format!("{}◕\x1b[0m ", AMBER),
                Some(d) if d.correct > 0 => format!("{}◑\x1b[0m ", AMBER),
                Some(_) => format!("{}○\x1b[0m ", DIM),
            };
            print!("{}", icon);
        }
        println!();
    }

    println!();
    Ok(())
}

// ─── Export ──────────────────────────────────────────────────────────────────

pub fn handle_export(conn: &Connection) -> Result<()> {
    let today = Local::now().date_naive();
    let week_start = today - chrono::Duration::days(6);
    let today_str = today.format("%Y-%m-%d").to_string();
    let week_start_str = week_start.format("%Y-%m-%d").to_string();

    let tracker = tracker(conn);
    let streak = tracker.stats();
    let overall = GuessRepo::overall_stats(conn)?;
    let grid = GuessRepo::daily_grid(conn, &week_start_str, &today_str)?;

    println!("# versemaster — Weekly Summary");
    println!("# {}", today_str);
    println!();
    println!("## Guessing (last 7 days)");
    for day in &grid {
        println!(
            "  {}  {}/{}  {}",
            day.date,
            day.correct,
            day.attempts,
            progress_bar(day.correct, day.attempts, 5)
        );
    }
    println!();
    println!("## Summary");
    println!(
        "  Streak:     {} days (best: {})",
        streak.current_streak, streak.longest_streak
    );
    println!("  Dailies:    {} completed", streak.total_completed);
    if overall.attempts > 0 {
        println!(
            "  Accuracy:   {}/{} ({})",
            overall.correct,
            overall.attempts,
            format_pct(overall.accuracy())
        );
    }
    Ok(())
}

// ─── List ────────────────────────────────────────────────────────────────────

pub fn handle_list(conn: &Connection) -> Result<()> {
    let corpus = ScriptureRepo::get_all_active(conn)?;
    println!();
    println_colored!(GOLD, "  Passages ({})", corpus.len());
    println!();
    for passage in &corpus {
        println!("  {}", passage.reference());
    }
    println!();
    Ok(())
}

// ─── Status dashboard (no subcommand) ────────────────────────────────────────

pub fn handle_status(conn: &Connection) -> Result<()> {
    let today_str = Local::now().date_naive().format("%Y-%m-%d").to_string();
    let mut tracker = tracker(conn);
    tracker.refresh();
    let streak = tracker.stats();

    println!();
    println_colored!(GOLD, "  versemaster — {}", today_str);
    println!();
    if tracker.today_completed() {
        println_colored!(GREEN, "  ✓ Daily challenge done");
    } else {
        println_colored!(AMBER, "  ○ Daily challenge waiting — run `versemaster daily`");
    }
    println_colored!(
        BOLD,
        "  Streak: {} days  |  Best: {}  |  Total: {}",
        streak.current_streak,
        streak.longest_streak,
        streak.total_completed
    );
    println_colored!(GREEN, "  {}", progress_bar(streak.current_streak, 30, 12));
    println!();
    Ok(())
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn print_passage(passage: &Scripture) {
    for line in wrap(&passage.text, 68) {
        println_colored!(BOLD, "  {}", line);
    }
}

/// Naive word wrap; passages are short excerpts.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.len() + word.len() + 1 > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

fn parse_difficulty(s: &str) -> Result<Difficulty> {
    Difficulty::from_str(s)
        .map_err(|_| anyhow!("Unknown difficulty '{}'. Use: easy, medium, hard", s))
}

fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().lock().read_line(&mut buf)?;
    Ok(buf.trim_end_matches('\n').trim_end_matches('\r').to_string())
}
