//! ## Summary
//! The validate-then-generate contract used by every caller that displays a
//! rule's dates.
//!
//! A valid rule yields its generated occurrences and no errors. An invalid
//! rule yields no occurrences and the validator's messages; the generator is
//! not consulted.

use chrono::NaiveDate;
use kairos_engine::occurrence::recurring_count;
use kairos_engine::{Occurrence, OccurrenceRole, RecurrenceRule, generate, validate};
use serde::Serialize;

/// ## Summary
/// A rule together with either its occurrences or its validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub rule: RecurrenceRule,
    pub occurrences: Vec<Occurrence>,
    pub is_valid: bool,
    pub errors: Vec<String>,
}

/// Counts shown alongside a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSummary {
    pub total: usize,
    pub recurring: usize,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// ## Summary
/// Validates `rule` and, only if it is valid, generates up to `cap`
/// recurring occurrences for it.
#[must_use]
pub fn refresh(rule: &RecurrenceRule, cap: usize) -> Schedule {
    let validation = validate(rule);

    if validation.is_valid {
        let occurrences = generate(rule, cap);
        tracing::debug!(
            kind = rule.kind.name(),
            occurrence_count = occurrences.len(),
            "Schedule refreshed"
        );
        Schedule {
            rule: rule.clone(),
            occurrences,
            is_valid: true,
            errors: Vec::new(),
        }
    } else {
        tracing::debug!(
            kind = rule.kind.name(),
            errors = ?validation.errors,
            "Schedule rule is invalid"
        );
        Schedule {
            rule: rule.clone(),
            occurrences: Vec::new(),
            is_valid: false,
            errors: validation.errors,
        }
    }
}

impl Schedule {
    #[must_use]
    pub fn summary(&self) -> ScheduleSummary {
        let find = |role: OccurrenceRole| {
            self.occurrences
                .iter()
                .find(|occurrence| occurrence.role == role)
                .map(|occurrence| occurrence.date)
        };

        ScheduleSummary {
            total: self.occurrences.len(),
            recurring: recurring_count(&self.occurrences),
            start: find(OccurrenceRole::Start),
            end: find(OccurrenceRole::End),
        }
    }
}

#[cfg(test)]
mod tests {
    use kairos_engine::DayOfWeek;
    use kairos_engine::generate::DEFAULT_MAX_OCCURRENCES;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_log::test]
    fn valid_rule_is_generated() {
        let rule = RecurrenceRule::weekly(date(2024, 1, 1), 1, [DayOfWeek::Monday]);
        let schedule = refresh(&rule, DEFAULT_MAX_OCCURRENCES);

        assert!(schedule.is_valid);
        assert!(schedule.errors.is_empty());
        assert_eq!(schedule.occurrences.len(), DEFAULT_MAX_OCCURRENCES + 1);
        assert_eq!(schedule.occurrences, generate(&rule, DEFAULT_MAX_OCCURRENCES));
    }

    #[test_log::test]
    fn invalid_rule_clears_occurrences() {
        let rule = RecurrenceRule::weekly(date(2024, 1, 1), 0, []);
        let schedule = refresh(&rule, DEFAULT_MAX_OCCURRENCES);

        assert!(!schedule.is_valid);
        assert!(schedule.occurrences.is_empty());
        assert_eq!(schedule.errors.len(), 2);
        assert_eq!(schedule.summary().total, 0);
    }

    #[test]
    fn summary_counts_roles() {
        let rule = RecurrenceRule::daily(date(2024, 1, 1), 1).with_end_date(date(2024, 1, 5));
        let summary = refresh(&rule, 10).summary();

        assert_eq!(
            summary,
            ScheduleSummary {
                total: 6,
                recurring: 4,
                start: Some(date(2024, 1, 1)),
                end: Some(date(2024, 1, 5)),
            }
        );
    }

    #[test]
    fn summary_without_end() {
        let rule = RecurrenceRule::daily(date(2024, 1, 1), 2);
        let summary = refresh(&rule, 3).summary();
        assert_eq!(summary.recurring, 3);
        assert_eq!(summary.end, None);
    }

    #[test]
    fn serializes_camel_case() {
        let rule = RecurrenceRule::daily(date(2024, 1, 1), 0);
        let value = serde_json::to_value(refresh(&rule, 5)).unwrap();
        assert_eq!(value["isValid"], false);
        assert_eq!(value["rule"]["kind"], "daily");
        assert_eq!(value["occurrences"].as_array().map(Vec::len), Some(0));
    }
}
