/// NYSE session timing: open/close window and next-open search
use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeZone, Timelike, Utc};
use chrono_tz::America::New_York;

use crate::error::{ClockError, Result};
use crate::time::holidays::is_trading_day;

const fn session_time(hour: u32, min: u32, sec: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(hour, min, sec) {
        Some(t) => t,
        None => panic!("invalid session time"),
    }
}

/// NYSE regular session bounds, Eastern Time
pub const MARKET_OPEN: NaiveTime = session_time(9, 30, 0);
pub const MARKET_CLOSE: NaiveTime = session_time(16, 0, 0);

/// Days scanned past today before the next-open search gives up. The fixed
/// holiday set can never produce this many consecutive closed days.
pub const NEXT_OPEN_SCAN_DAYS: i64 = 14;

/// Check if the market is open at `now`: a trading day, within regular hours
pub fn is_market_open(now: DateTime<Utc>) -> bool {
    let now_ny = now.with_timezone(&New_York);
    if !is_trading_day(now_ny.date_naive()) {
        return false;
    }

    let time = now_ny.time();
    time >= MARKET_OPEN && time < MARKET_CLOSE
}

/// Find the next market open at or after `now`.
///
/// Before the bell on a trading day this is today's 09:30 Eastern; otherwise
/// the scan walks forward one calendar day at a time. Exhausting the scan
/// window is an invariant violation, not a reachable input.
pub fn next_market_open(now: DateTime<Utc>) -> Result<DateTime<Utc>> {
    let now_ny = now.with_timezone(&New_York);
    let today = now_ny.date_naive();

    if is_trading_day(today) && now_ny.time() < MARKET_OPEN {
        return Ok(open_instant(today));
    }

    for offset in 1..=NEXT_OPEN_SCAN_DAYS {
        let date = today + chrono::Duration::days(offset);
        if is_trading_day(date) {
            return Ok(open_instant(date));
        }
    }

    Err(ClockError::NextOpenExhausted(format!(
        "no trading day within {} days of {}",
        NEXT_OPEN_SCAN_DAYS, today
    )))
}

/// 09:30 Eastern on `date`, as UTC. The open never falls inside the 02:00
/// DST transition, so the civil time is always unambiguous.
fn open_instant(date: NaiveDate) -> DateTime<Utc> {
    New_York
        .with_ymd_and_hms(
            date.year(),
            date.month(),
            date.day(),
            MARKET_OPEN.hour(),
            MARKET_OPEN.minute(),
            MARKET_OPEN.second(),
        )
        .unwrap()
        .with_timezone(&Utc)
}
