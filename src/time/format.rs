/// Countdown and label formatting
use chrono::{DateTime, Utc};
use chrono_tz::America::New_York;

pub const STATUS_OPEN: &str = "MARKET OPEN";
pub const STATUS_CLOSED: &str = "MARKET CLOSED";
pub const LABEL_UNTIL_CLOSE: &str = "TIME UNTIL MARKET CLOSE";
pub const LABEL_UNTIL_OPEN: &str = "TIME UNTIL MARKET OPEN";

/// Format a countdown as zero-padded HH:MM:SS. Hours run past 24 across
/// weekends and holiday gaps; there is no wraparound.
pub fn format_countdown(total_seconds: i64) -> String {
    let total = total_seconds.max(0);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Label for the day the market next opens, relative to `now`.
///
/// Calendar-day difference in the exchange zone: 0 is "TODAY", 1 is
/// "TOMORROW", anything further is the upper-cased English weekday name.
pub fn next_day_label(now: DateTime<Utc>, next_open: DateTime<Utc>) -> String {
    let now_day = now.with_timezone(&New_York).date_naive();
    let open_day = next_open.with_timezone(&New_York).date_naive();
    let diff = (open_day - now_day).num_days();

    match diff {
        0 => "TODAY".to_string(),
        1 => "TOMORROW".to_string(),
        _ => open_day.format("%A").to_string().to_uppercase(),
    }
}
