//! ## Summary
//! Consistency checks for recurrence rules.
//!
//! Every check runs independently; violations accumulate into a
//! [`ValidationResult`] instead of short-circuiting on the first one.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::rule::{MonthlyPattern, RecurrenceKind, RecurrenceRule};

pub const START_DATE_REQUIRED: &str = "Start date is required";
pub const INTERVAL_TOO_SMALL: &str = "Interval must be at least 1";
pub const END_BEFORE_START: &str = "End date must be after start date";
pub const WEEKLY_DAYS_REQUIRED: &str =
    "At least one day of the week must be selected for weekly recurrence";
pub const DAY_OF_MONTH_REQUIRED: &str = "Day of month is required for monthly date pattern";
pub const WEEK_OF_MONTH_REQUIRED: &str =
    "Week of month is required for monthly day-of-week pattern";
pub const DAY_OF_WEEK_REQUIRED: &str = "Day of week is required for monthly day-of-week pattern";
pub const MONTH_OF_YEAR_OUT_OF_RANGE: &str = "Month of year must be between 1 and 12";
pub const DAY_OF_MONTH_OUT_OF_RANGE: &str = "Day of month must be between 1 and 31";

/// ## Summary
/// Outcome of [`validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// ## Summary
    /// Converts the result into an `EngineResult` for callers that want `?`.
    ///
    /// ## Errors
    /// Returns `EngineError::InvalidRule` carrying every message if the rule
    /// is not valid.
    pub fn into_result(self) -> EngineResult<()> {
        if self.is_valid {
            Ok(())
        } else {
            Err(EngineError::InvalidRule(self.errors))
        }
    }
}

/// ## Summary
/// Checks a rule's field combination for logical consistency.
///
/// Never fails. The returned `errors` lists one message per violated check,
/// in check order, and `is_valid` is true iff that list is empty.
#[must_use]
pub fn validate(rule: &RecurrenceRule) -> ValidationResult {
    let mut errors: Vec<String> = Vec::new();
    let mut push = |message: &str| {
        if !errors.iter().any(|existing| existing == message) {
            errors.push(message.to_string());
        }
    };

    if rule.start_date.is_none() {
        push(START_DATE_REQUIRED);
    }

    if rule.interval < 1 {
        push(INTERVAL_TOO_SMALL);
    }

    if matches!((rule.start_date, rule.end_date), (Some(start), Some(end)) if end <= start) {
        push(END_BEFORE_START);
    }

    match &rule.kind {
        RecurrenceKind::Weekly { days_of_week } => {
            if days_of_week.is_empty() {
                push(WEEKLY_DAYS_REQUIRED);
            }
        }
        RecurrenceKind::Monthly {
            pattern: Some(MonthlyPattern::ByDate { day_of_month }),
        } => match day_of_month {
            None | Some(0) => push(DAY_OF_MONTH_REQUIRED),
            Some(day) if *day > 31 => push(DAY_OF_MONTH_OUT_OF_RANGE),
            Some(_) => {}
        },
        RecurrenceKind::Monthly {
            pattern:
                Some(MonthlyPattern::ByWeekday {
                    week_of_month,
                    day_of_week,
                }),
        } => {
            if week_of_month.is_none() {
                push(WEEK_OF_MONTH_REQUIRED);
            }
            if day_of_week.is_none() {
                push(DAY_OF_WEEK_REQUIRED);
            }
        }
        RecurrenceKind::Yearly {
            month_of_year,
            day_of_month,
        } => {
            if month_of_year.is_some_and(|month| !(1..=12).contains(&month)) {
                push(MONTH_OF_YEAR_OUT_OF_RANGE);
            }
            if day_of_month.is_some_and(|day| !(1..=31).contains(&day)) {
                push(DAY_OF_MONTH_OUT_OF_RANGE);
            }
        }
        RecurrenceKind::Daily
        | RecurrenceKind::Monthly { pattern: None }
        | RecurrenceKind::Unrecognized => {}
    }

    tracing::trace!(
        kind = rule.kind.name(),
        error_count = errors.len(),
        "Validated recurrence rule"
    );

    ValidationResult::from_errors(errors)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use chrono::NaiveDate;

    use super::*;
    use crate::rule::{DayOfWeek, WeekOfMonth};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_log::test]
    fn valid_weekly_rule() {
        let rule = RecurrenceRule::weekly(date(2024, 1, 1), 1, [DayOfWeek::Monday]);
        let result = validate(&rule);
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert!(result.into_result().is_ok());
    }

    #[test]
    fn zero_interval_and_empty_days_both_reported() {
        let rule = RecurrenceRule::weekly(date(2024, 1, 1), 0, []);
        let result = validate(&rule);

        assert!(!result.is_valid);
        assert_eq!(
            result.errors,
            vec![
                INTERVAL_TOO_SMALL.to_string(),
                WEEKLY_DAYS_REQUIRED.to_string()
            ]
        );
    }

    #[test]
    fn end_before_start() {
        let rule = RecurrenceRule::daily(date(2024, 1, 5), 1).with_end_date(date(2024, 1, 1));
        let result = validate(&rule);
        assert!(!result.is_valid);
        assert!(result.errors.contains(&"End date must be after start date".to_string()));
    }

    #[test]
    fn end_equal_to_start_is_rejected() {
        let rule = RecurrenceRule::daily(date(2024, 1, 5), 1).with_end_date(date(2024, 1, 5));
        assert_eq!(validate(&rule).errors, vec![END_BEFORE_START.to_string()]);
    }

    #[test]
    fn missing_start_date() {
        let mut rule = RecurrenceRule::daily(date(2024, 1, 1), 1).with_end_date(date(2024, 2, 1));
        rule.start_date = None;
        let result = validate(&rule);
        assert_eq!(result.errors, vec![START_DATE_REQUIRED.to_string()]);
    }

    #[test]
    fn monthly_by_date_requires_day() {
        for day_of_month in [None, Some(0)] {
            let rule = RecurrenceRule::new(
                RecurrenceKind::Monthly {
                    pattern: Some(MonthlyPattern::ByDate { day_of_month }),
                },
                date(2024, 1, 1),
                1,
            );
            assert_eq!(validate(&rule).errors, vec![DAY_OF_MONTH_REQUIRED.to_string()]);
        }
    }

    #[test]
    fn monthly_by_date_day_out_of_range() {
        let rule = RecurrenceRule::monthly_by_date(date(2024, 1, 1), 1, 32);
        assert_eq!(validate(&rule).errors, vec![DAY_OF_MONTH_OUT_OF_RANGE.to_string()]);
    }

    #[test]
    fn monthly_by_weekday_reports_each_missing_field() {
        let rule = RecurrenceRule::new(
            RecurrenceKind::Monthly {
                pattern: Some(MonthlyPattern::ByWeekday {
                    week_of_month: None,
                    day_of_week: None,
                }),
            },
            date(2024, 1, 1),
            1,
        );
        assert_eq!(
            validate(&rule).errors,
            vec![
                WEEK_OF_MONTH_REQUIRED.to_string(),
                DAY_OF_WEEK_REQUIRED.to_string()
            ]
        );

        let rule = RecurrenceRule::new(
            RecurrenceKind::Monthly {
                pattern: Some(MonthlyPattern::ByWeekday {
                    week_of_month: Some(WeekOfMonth::Last),
                    day_of_week: None,
                }),
            },
            date(2024, 1, 1),
            1,
        );
        assert_eq!(validate(&rule).errors, vec![DAY_OF_WEEK_REQUIRED.to_string()]);
    }

    #[test]
    fn yearly_month_out_of_range() {
        for month in [0, 13] {
            let rule = RecurrenceRule::yearly(date(2024, 1, 1), 1, Some(month), None);
            assert_eq!(
                validate(&rule).errors,
                vec![MONTH_OF_YEAR_OUT_OF_RANGE.to_string()]
            );
        }

        let rule = RecurrenceRule::yearly(date(2024, 1, 1), 1, None, None);
        assert!(validate(&rule).is_valid);
    }

    #[test]
    fn fields_of_other_kinds_are_not_checked() {
        let rule = RecurrenceRule::new(
            RecurrenceKind::Weekly {
                days_of_week: BTreeSet::from([DayOfWeek::Sunday]),
            },
            date(2024, 1, 1),
            3,
        );
        assert!(validate(&rule).is_valid);
        assert!(validate(&RecurrenceRule::daily(date(2024, 1, 1), 1)).is_valid);
    }

    #[test]
    fn many_violations_accumulate() {
        let rule = RecurrenceRule::yearly(date(2024, 3, 1), 0, Some(14), Some(40))
            .with_end_date(date(2024, 2, 1));
        let result = validate(&rule);
        assert_eq!(result.errors.len(), 4);

        let err = result.into_result().unwrap_err();
        assert!(err.to_string().contains(INTERVAL_TOO_SMALL));
        assert!(err.to_string().contains(END_BEFORE_START));
    }

    #[test]
    fn result_serializes_camel_case() {
        let result = validate(&RecurrenceRule::daily(date(2024, 1, 1), 0));
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["isValid"], false);
        assert_eq!(value["errors"][0], INTERVAL_TOO_SMALL);
    }
}
