//! Time utilities: splitting and validating HH:MM, formatting elapsed durations.

use chrono::{Duration, NaiveDateTime};

/// Split `"HH:MM"` into its hour and minute parts.
/// A value without a colon is returned as the hour with an empty minute.
pub fn split_hhmm(t: &str) -> (String, String) {
    match t.split_once(':') {
        Some((h, m)) => (h.to_string(), m.to_string()),
        None => (t.to_string(), String::new()),
    }
}

/// Re-join hour and minute as zero padded `HH:MM`.
/// Both parts must be non-empty decimal digits, hour 0..=23 and minute 0..=59.
pub fn join_hhmm(hour: &str, minute: &str) -> Option<String> {
    let (h, m) = (parse_digits(hour)?, parse_digits(minute)?);
    (h < 24 && m < 60).then(|| format!("{:02}:{:02}", h, m))
}

fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    // overlong digit strings are simply out of range
    s.parse::<u32>().ok()
}

pub fn format_hhmm(t: NaiveDateTime) -> String {
    t.format("%H:%M").to_string()
}

/// `HH:MM:SS`, hours keep counting past 24.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.num_seconds().max(0);
    format!(
        "{:02}:{:02}:{:02}",
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60
    )
}
