/// Market clock engine: one snapshot per polled instant
use chrono::{DateTime, Local, Timelike, Utc};
use chrono_tz::Tz;
use tracing::{error, warn};

use crate::error::{ClockError, Result};
use crate::time::format::{
    format_countdown, next_day_label, LABEL_UNTIL_CLOSE, LABEL_UNTIL_OPEN, STATUS_CLOSED,
    STATUS_OPEN,
};
use crate::time::holidays::is_trading_day;
use crate::time::session::{next_market_open, MARKET_CLOSE, MARKET_OPEN};
use crate::types::MarketSnapshot;

/// IANA identifier for the exchange zone; all market-hours logic runs here
const NY_ZONE: &str = "America/New_York";

/// Stateless engine. Holds only the timezone handles resolved at startup;
/// every snapshot is derived fresh from the instant passed in.
pub struct MarketClock {
    ny: Tz,
    local: Option<Tz>,
}

impl MarketClock {
    /// Resolve timezones once. Failing to resolve the exchange zone is fatal;
    /// an unresolvable local zone only degrades the local display.
    pub fn new() -> Result<Self> {
        let ny: Tz = NY_ZONE
            .parse()
            .map_err(|_| ClockError::TimezoneUnavailable(NY_ZONE.to_string()))?;

        let local = match iana_time_zone::get_timezone() {
            Ok(name) => match name.parse::<Tz>() {
                Ok(tz) => Some(tz),
                Err(_) => {
                    warn!("Unrecognized local timezone {:?} - abbreviation unavailable", name);
                    None
                }
            },
            Err(e) => {
                warn!("Local timezone lookup failed: {} - abbreviation unavailable", e);
                None
            }
        };

        Ok(MarketClock { ny, local })
    }

    /// Classify `now` and compute the countdown to the next state boundary
    pub fn snapshot(&self, now: DateTime<Utc>) -> MarketSnapshot {
        let now_ny = now.with_timezone(&self.ny);

        let now_secs = now_ny.time().num_seconds_from_midnight() as i64;
        let open_secs = MARKET_OPEN.num_seconds_from_midnight() as i64;
        let close_secs = MARKET_CLOSE.num_seconds_from_midnight() as i64;

        let trading_day = is_trading_day(now_ny.date_naive());
        let during_hours = now_secs >= open_secs && now_secs < close_secs;
        let is_open = trading_day && during_hours;

        let (seconds_remaining, status_label, countdown_label, next_trading_day) = if is_open {
            (
                close_secs - now_secs,
                STATUS_OPEN,
                LABEL_UNTIL_CLOSE,
                "TODAY".to_string(),
            )
        } else {
            match next_market_open(now) {
                Ok(next_open) => (
                    (next_open - now).num_seconds().max(0),
                    STATUS_CLOSED,
                    LABEL_UNTIL_OPEN,
                    next_day_label(now, next_open),
                ),
                Err(e) => {
                    // Unreachable via real calendar input; degrade to a zero
                    // countdown instead of failing the poll
                    error!("Next-open search failed: {} ({})", e, e.error_code());
                    debug_assert!(false, "next-open search failed: {}", e);
                    (0, STATUS_CLOSED, LABEL_UNTIL_OPEN, "TODAY".to_string())
                }
            }
        };

        let local_tz_abbr = match self.local {
            Some(tz) => now.with_timezone(&tz).format("%Z").to_string(),
            None => "LOCAL".to_string(),
        };

        MarketSnapshot {
            is_open,
            seconds_remaining,
            countdown: format_countdown(seconds_remaining),
            status_label: status_label.to_string(),
            countdown_label: countdown_label.to_string(),
            next_trading_day,
            ny_clock: now_ny.format("%H:%M:%S").to_string(),
            local_clock: now.with_timezone(&Local).format("%H:%M:%S").to_string(),
            local_tz_abbr,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::America::New_York;

    fn ny(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> DateTime<Utc> {
        New_York
            .with_ymd_and_hms(year, month, day, hour, min, sec)
            .unwrap()
            .with_timezone(&Utc)
    }

    fn clock() -> MarketClock {
        MarketClock::new().unwrap()
    }

    #[test]
    fn test_snapshot_during_open_hours() {
        let snap = clock().snapshot(ny(2024, 7, 1, 10, 0, 0)); // Monday
        assert!(snap.is_open);
        assert_eq!(snap.seconds_remaining, 6 * 3600);
        assert_eq!(snap.countdown, "06:00:00");
        assert_eq!(snap.status_label, "MARKET OPEN");
        assert_eq!(snap.countdown_label, "TIME UNTIL MARKET CLOSE");
        assert_eq!(snap.next_trading_day, "TODAY");
        assert_eq!(snap.ny_clock, "10:00:00");
    }

    #[test]
    fn test_snapshot_on_weekend() {
        let snap = clock().snapshot(ny(2024, 7, 6, 14, 0, 0)); // Saturday
        assert!(!snap.is_open);
        assert!(snap.seconds_remaining > 0);
        assert_eq!(snap.status_label, "MARKET CLOSED");
        assert_eq!(snap.countdown_label, "TIME UNTIL MARKET OPEN");
        assert_eq!(snap.next_trading_day, "MONDAY");
    }

    #[test]
    fn test_snapshot_after_close_labels_tomorrow() {
        let snap = clock().snapshot(ny(2024, 7, 1, 17, 0, 0)); // Monday evening
        assert!(!snap.is_open);
        assert_eq!(snap.next_trading_day, "TOMORROW");
    }

    #[test]
    fn test_open_countdown_reaches_the_close() {
        let now = ny(2024, 7, 1, 10, 0, 0);
        let snap = clock().snapshot(now);
        assert!(snap.is_open);

        // Advancing by the countdown lands exactly on the close boundary
        let at_close = clock().snapshot(now + chrono::Duration::seconds(snap.seconds_remaining));
        assert!(!at_close.is_open);
    }

    #[test]
    fn test_closed_countdown_reaches_the_open() {
        let now = ny(2024, 7, 6, 14, 0, 0);
        let snap = clock().snapshot(now);
        assert!(!snap.is_open);

        let at_open = clock().snapshot(next_market_open(now).unwrap());
        assert!(at_open.is_open);
    }

    #[test]
    fn test_exactly_one_state_holds() {
        for instant in [
            ny(2024, 7, 1, 9, 29, 59),
            ny(2024, 7, 1, 9, 30, 0),
            ny(2024, 7, 1, 15, 59, 59),
            ny(2024, 7, 1, 16, 0, 0),
            ny(2024, 7, 4, 12, 0, 0),
            ny(2024, 7, 7, 3, 0, 0),
        ] {
            let snap = clock().snapshot(instant);
            assert!(snap.seconds_remaining >= 0);
            assert_eq!(snap.is_open, snap.status_label == "MARKET OPEN");
        }
    }

    #[test]
    fn test_clock_strings_are_formatted() {
        let snap = clock().snapshot(ny(2024, 7, 1, 10, 0, 0));
        assert_eq!(snap.ny_clock.len(), 8);
        assert_eq!(snap.local_clock.len(), 8);
        assert!(!snap.local_tz_abbr.is_empty());
    }

    #[test]
    fn test_holiday_skipped_in_countdown() {
        // Christmas Eve 2024 (Tuesday) after the close; Wednesday is closed,
        // so the countdown targets Thursday's bell
        let now = ny(2024, 12, 24, 17, 0, 0);
        let snap = clock().snapshot(now);
        assert!(!snap.is_open);
        assert_eq!(snap.next_trading_day, "THURSDAY");

        let expected = (ny(2024, 12, 26, 9, 30, 0) - now).num_seconds();
        assert_eq!(snap.seconds_remaining, expected);
    }
}
