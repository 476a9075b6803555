//! Calendar arithmetic used by the stepping rules.
//!
//! Every helper returns `None` instead of panicking when the result would
//! fall outside the range `NaiveDate` can represent.

use chrono::{Datelike, Days, Months, NaiveDate};

/// Number of days in `month` (1-based) of `year`.
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = first.checked_add_months(Months::new(1))?;
    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}

#[must_use]
pub fn add_days(date: NaiveDate, days: u64) -> Option<NaiveDate> {
    date.checked_add_days(Days::new(days))
}

#[must_use]
pub fn sub_days(date: NaiveDate, days: u64) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(days))
}

/// Adds whole months, clamping to the end of a shorter target month
/// (Jan 31 + 1 month = Feb 29 in a leap year).
#[must_use]
pub fn add_months(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(months))
}

#[must_use]
pub fn first_of_month(date: NaiveDate) -> Option<NaiveDate> {
    date.with_day(1)
}

#[must_use]
pub fn last_of_month(date: NaiveDate) -> Option<NaiveDate> {
    date.with_day(days_in_month(date.year(), date.month())?)
}

/// ## Summary
/// Builds `year-month-day`, clamping `day` into `1..=days_in_month`.
///
/// Requesting day 31 of a 30-day month yields day 30.
#[must_use]
pub fn clamped_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let last = days_in_month(year, month)?;
    NaiveDate::from_ymd_opt(year, month, day.clamp(1, last))
}
