//! Per-kind stepping: from one occurrence to the next.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};

use super::calendar::{
    add_days, add_months, clamped_date, first_of_month, last_of_month, sub_days,
};
use crate::rule::{DayOfWeek, MonthlyPattern, RecurrenceKind, RecurrenceRule, WeekOfMonth};

/// Longest forward scan, in days, when looking for a matching weekday.
pub const WEEKLY_SCAN_LIMIT_DAYS: i64 = 365;

/// ## Summary
/// Computes the occurrence that follows `cursor` under `rule`.
///
/// Returns `None` when the rule's kind is unrecognized or the next date
/// cannot be represented. Neither `cursor` nor `rule` is modified.
#[must_use]
pub fn step_once(cursor: NaiveDate, rule: &RecurrenceRule) -> Option<NaiveDate> {
    let interval = rule.interval;
    match &rule.kind {
        RecurrenceKind::Daily => add_days(cursor, u64::from(interval)),
        RecurrenceKind::Weekly { days_of_week } => next_weekly(cursor, interval, days_of_week),
        RecurrenceKind::Monthly { pattern } => next_monthly(cursor, interval, pattern.as_ref()),
        RecurrenceKind::Yearly {
            month_of_year,
            day_of_month,
        } => next_yearly(cursor, interval, *month_of_year, *day_of_month),
        RecurrenceKind::Unrecognized => None,
    }
}

fn next_weekly(
    cursor: NaiveDate,
    interval: u32,
    days_of_week: &BTreeSet<DayOfWeek>,
) -> Option<NaiveDate> {
    if days_of_week.is_empty() {
        return add_days(cursor, 7 * u64::from(interval));
    }

    // A Sunday is a week boundary. A day is accepted once `interval`
    // boundaries have been crossed and it is one of the selected days.
    let mut candidate = cursor.succ_opt()?;
    let mut boundaries: u32 = 0;
    loop {
        let weekday = DayOfWeek::of(candidate);
        if weekday == DayOfWeek::Sunday {
            boundaries = boundaries.saturating_add(1);
        }
        if boundaries >= interval && days_of_week.contains(&weekday) {
            return Some(candidate);
        }

        candidate = candidate.succ_opt()?;
        if candidate.signed_duration_since(cursor).num_days() > WEEKLY_SCAN_LIMIT_DAYS {
            tracing::debug!(
                %cursor,
                %candidate,
                interval,
                "Weekly scan bound reached without a matching day"
            );
            return Some(candidate);
        }
    }
}

fn next_monthly(
    cursor: NaiveDate,
    interval: u32,
    pattern: Option<&MonthlyPattern>,
) -> Option<NaiveDate> {
    match pattern {
        Some(MonthlyPattern::ByDate {
            day_of_month: Some(day),
        }) if *day > 0 => {
            let shifted = add_months(cursor, interval)?;
            clamped_date(shifted.year(), shifted.month(), *day)
        }
        Some(MonthlyPattern::ByWeekday {
            week_of_month: Some(week),
            day_of_week: Some(day),
        }) => nth_weekday_of_month(cursor, interval, *week, *day),
        // Missing or incomplete pattern: same day of month, `interval` months on.
        Some(MonthlyPattern::ByDate { .. } | MonthlyPattern::ByWeekday { .. }) | None => {
            add_months(cursor, interval)
        }
    }
}

/// ## Summary
/// Resolves "the Nth `day` of the month `interval` months after `cursor`".
///
/// `last` walks backwards from the final day of the month. `first` through
/// `fourth` walk forward to the first matching day and add whole weeks; when
/// the fourth occurrence spills into the next month the result falls back by
/// one week, i.e. to the last occurrence inside the target month.
fn nth_weekday_of_month(
    cursor: NaiveDate,
    interval: u32,
    week: WeekOfMonth,
    day: DayOfWeek,
) -> Option<NaiveDate> {
    let month_start = add_months(first_of_month(cursor)?, interval)?;

    let Some(ordinal) = week.ordinal() else {
        let mut date = last_of_month(month_start)?;
        while DayOfWeek::of(date) != day {
            date = date.pred_opt()?;
        }
        return Some(date);
    };

    let mut date = month_start;
    while DayOfWeek::of(date) != day {
        date = date.succ_opt()?;
    }
    let date = add_days(date, 7 * u64::from(ordinal))?;

    if date.month() == month_start.month() {
        Some(date)
    } else {
        sub_days(date, 7)
    }
}

fn next_yearly(
    cursor: NaiveDate,
    interval: u32,
    month_of_year: Option<u32>,
    day_of_month: Option<u32>,
) -> Option<NaiveDate> {
    let shifted = add_months(cursor, interval.checked_mul(12)?)?;
    let month = month_of_year.unwrap_or_else(|| shifted.month());
    let day = day_of_month.unwrap_or_else(|| cursor.day());
    clamped_date(shifted.year(), month, day)
}
