/// Countdown display, e.g. `01:05`.
pub fn format_countdown(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Total quiz time for the results screen, e.g. `3m 07s`.
pub fn format_duration(total_seconds: u64) -> String {
    format!("{}m {:02}s", total_seconds / 60, total_seconds % 60)
}
