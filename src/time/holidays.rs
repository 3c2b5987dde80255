/// US market holiday calendar (rule-based, valid for any year)
use chrono::{Datelike, NaiveDate, Weekday};

/// Easter Sunday for a Gregorian year, via the anonymous Gregorian
/// algorithm (Meeus/Jones/Butcher). Pure integer arithmetic.
pub fn easter_sunday(year: i32) -> NaiveDate {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    // The algorithm only ever yields a valid March or April date
    NaiveDate::from_ymd_opt(year, month as u32, day as u32).unwrap()
}

/// Good Friday: two days before Easter Sunday
pub fn good_friday(year: i32) -> NaiveDate {
    easter_sunday(year) - chrono::Duration::days(2)
}

/// Check if US equity markets are closed on `date` for a named holiday.
///
/// Fixed-date holidays shift when the nominal date lands on a weekend:
/// Saturday is observed the preceding Friday, Sunday the following Monday.
/// The checks are a flat list of disjoint tests; order does not matter.
pub fn is_market_holiday(date: NaiveDate) -> bool {
    let month = date.month();
    let day = date.day();
    let weekday = date.weekday();
    let on_weekday = !matches!(weekday, Weekday::Sat | Weekday::Sun);

    // New Year's Day (January 1)
    if month == 1 && day == 1 && on_weekday {
        return true;
    }
    if month == 1 && day == 2 && weekday == Weekday::Mon {
        return true; // Jan 1 fell on Sunday
    }
    if month == 12 && day == 31 && weekday == Weekday::Fri {
        return true; // Jan 1 of next year falls on Saturday
    }

    // Martin Luther King Jr. Day (3rd Monday in January)
    if month == 1 && weekday == Weekday::Mon && (15..=21).contains(&day) {
        return true;
    }

    // Presidents' Day (3rd Monday in February)
    if month == 2 && weekday == Weekday::Mon && (15..=21).contains(&day) {
        return true;
    }

    // Good Friday (two days before Easter Sunday)
    if date == good_friday(date.year()) {
        return true;
    }

    // Memorial Day (last Monday in May)
    if month == 5 && weekday == Weekday::Mon && (date + chrono::Duration::days(7)).month() == 6 {
        return true;
    }

    // Juneteenth National Independence Day (June 19)
    if month == 6 && day == 19 && on_weekday {
        return true;
    }
    if month == 6 && day == 20 && weekday == Weekday::Mon {
        return true; // Jun 19 fell on Sunday
    }
    if month == 6 && day == 18 && weekday == Weekday::Fri {
        return true; // Jun 19 falls on Saturday
    }

    // Independence Day (July 4)
    if month == 7 && day == 4 && on_weekday {
        return true;
    }
    if month == 7 && day == 5 && weekday == Weekday::Mon {
        return true; // Jul 4 fell on Sunday
    }
    if month == 7 && day == 3 && weekday == Weekday::Fri {
        return true; // Jul 4 falls on Saturday
    }

    // Labor Day (1st Monday in September)
    if month == 9 && weekday == Weekday::Mon && (1..=7).contains(&day) {
        return true;
    }

    // Thanksgiving Day (4th Thursday in November)
    if month == 11 && weekday == Weekday::Thu && (22..=28).contains(&day) {
        return true;
    }

    // Christmas Day (December 25)
    if month == 12 && day == 25 && on_weekday {
        return true;
    }
    if month == 12 && day == 26 && weekday == Weekday::Mon {
        return true; // Dec 25 fell on Sunday
    }
    if month == 12 && day == 24 && weekday == Weekday::Fri {
        return true; // Dec 25 falls on Saturday
    }

    false
}

/// Check if a date is a trading day (not weekend, not holiday)
pub fn is_trading_day(date: NaiveDate) -> bool {
    let weekday = date.weekday();
    if weekday == Weekday::Sat || weekday == Weekday::Sun {
        return false;
    }

    !is_market_holiday(date)
}
