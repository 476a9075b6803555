//! Catalogue of ready-made rules.
//!
//! Presets carry no start date of their own; each is anchored at the date
//! the caller supplies.

use chrono::NaiveDate;
use kairos_core::util::slug::generate_slug;
use kairos_engine::{DayOfWeek, RecurrenceRule, WeekOfMonth};
use serde::Serialize;

use crate::error::{ServiceError, ServiceResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preset {
    pub slug: String,
    pub name: &'static str,
    pub description: &'static str,
    pub rule: RecurrenceRule,
}

impl Preset {
    fn new(name: &'static str, description: &'static str, rule: RecurrenceRule) -> Self {
        Self {
            slug: generate_slug(name),
            name,
            description,
            rule,
        }
    }
}

/// ## Summary
/// Returns every preset anchored at `start`.
#[must_use]
pub fn presets(start: NaiveDate) -> Vec<Preset> {
    vec![
        Preset::new(
            "Daily Standup",
            "Monday to Friday; each step takes the first selected day of a new week, so it lands on Mondays",
            RecurrenceRule::weekly(
                start,
                1,
                [
                    DayOfWeek::Monday,
                    DayOfWeek::Tuesday,
                    DayOfWeek::Wednesday,
                    DayOfWeek::Thursday,
                    DayOfWeek::Friday,
                ],
            ),
        ),
        Preset::new(
            "Monthly Team Meeting",
            "First Monday of every month",
            RecurrenceRule::monthly_by_weekday(start, 1, WeekOfMonth::First, DayOfWeek::Monday),
        ),
        Preset::new(
            "Quarterly Review",
            "Every 3 months on the 15th",
            RecurrenceRule::monthly_by_date(start, 3, 15),
        ),
        Preset::new(
            "Weekend Workout",
            "Saturday and Sunday; each step takes the first selected day of a new week, so it lands on Sundays",
            RecurrenceRule::weekly(start, 1, [DayOfWeek::Saturday, DayOfWeek::Sunday]),
        ),
        Preset::new(
            "Annual Birthday",
            "Same date every year",
            RecurrenceRule::yearly(start, 1, Some(6), Some(15)),
        ),
        Preset::new(
            "Every Other Day",
            "Every 2 days",
            RecurrenceRule::daily(start, 2),
        ),
    ]
}

/// ## Summary
/// Looks up a preset by slug and anchors it at `start`.
///
/// ## Errors
/// Returns `ServiceError::NotFound` if no preset has that slug.
pub fn preset_by_slug(slug: &str, start: NaiveDate) -> ServiceResult<Preset> {
    presets(start)
        .into_iter()
        .find(|preset| preset.slug == slug)
        .ok_or_else(|| ServiceError::NotFound(format!("preset '{slug}'")))
}
