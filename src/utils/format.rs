/// Format a 0.0–1.0 ratio as a whole percentage.
pub fn format_pct(ratio: f64) -> String {
    format!("{}%", (ratio * 100.0).round() as i64)
}

/// Create a simple ASCII progress bar
pub fn progress_bar(filled: u32, total: u32, width: usize) -> String {
    if total == 0 {
        return "░".repeat(width);
    }
    let ratio = (filled as f64 / total as f64).min(1.0);
    let filled_count = (ratio * width as f64).round() as usize;
    let empty_count = width.saturating_sub(filled_count);
    format!("{}{}", "█".repeat(filled_count), "░".repeat(empty_count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_clamps_and_handles_zero_total() {
        assert_eq!(progress_bar(0, 0, 4), "░░░░");
        assert_eq!(progress_bar(2, 4, 4), "██░░");
        assert_eq!(progress_bar(9, 4, 4), "████");
    }

    #[test]
    fn pct_rounds() {
        assert_eq!(format_pct(0.756), "76%");
        assert_eq!(format_pct(0.0), "0%");
    }
}
