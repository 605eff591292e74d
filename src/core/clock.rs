//! Pure calendar arithmetic for statutory timers.
//!
//! Dates are calendar dates with no time of day; an instant is taken to be
//! midnight UTC of the given date, which is how intake forms record them.
//! Every function here is total over valid dates.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

/// Hours in a calendar day.
pub const HOURS_PER_DAY: i64 = 24;

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Absolute difference in whole hours between two dates.
///
/// Argument order does not matter:
///
/// ```rust
/// use chrono::NaiveDate;
/// use probate_path::core::clock::hours_between;
///
/// let death = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let filing = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap();
///
/// assert_eq!(hours_between(death, filing), 120);
/// assert_eq!(hours_between(filing, death), 120);
/// ```
pub fn hours_between(a: NaiveDate, b: NaiveDate) -> i64 {
    midnight(a)
        .signed_duration_since(midnight(b))
        .num_hours()
        .abs()
}

/// Midnight of `date` plus `hours`, truncated back to a calendar date.
///
/// Saturates at the chrono date bounds.
pub fn add_hours(date: NaiveDate, hours: i64) -> NaiveDate {
    let delta = TimeDelta::try_hours(hours).unwrap_or(TimeDelta::MAX);
    midnight(date)
        .checked_add_signed(delta)
        .map(|instant| instant.date())
        .unwrap_or(NaiveDate::MAX)
}

/// Add calendar years, keeping month and day.
///
/// February 29 landing in a common year rolls over to March 1, the same
/// overflow a lenient date constructor produces.
pub fn add_years(date: NaiveDate, years: i32) -> NaiveDate {
    let Some(year) = date.year().checked_add(years) else {
        return NaiveDate::MAX;
    };

    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(NaiveDate::MAX)
}

/// Whole days elapsed from `date_of_death` to `as_of`, floored.
///
/// Negative when `as_of` precedes the date of death.
pub fn days_since_death(date_of_death: NaiveDate, as_of: NaiveDate) -> i64 {
    as_of.signed_duration_since(date_of_death).num_days()
}

/// `YYYY-MM-DD` rendering used in notes and previews.
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
