//! Recurrence rule model.
//!
//! A rule is a common header (interval, start and end dates) plus a
//! [`RecurrenceKind`] that carries only the refinements meaningful for its
//! period. The JSON form is flat and tagged by `kind`:
//!
//! ```json
//! { "kind": "monthly", "interval": 1, "startDate": "2024-01-01",
//!   "monthlyPattern": "by-weekday", "weekOfMonth": "second", "dayOfWeekInMonth": "tuesday" }
//! ```
//!
//! A monthly rule may omit `monthlyPattern`; it then repeats on the start
//! date's day of month.

mod weekday;

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

pub use weekday::DayOfWeek;

/// Which occurrence of a weekday inside a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekOfMonth {
    First,
    Second,
    Third,
    Fourth,
    Last,
}

impl WeekOfMonth {
    /// Zero-based ordinal for `first` through `fourth`; `None` for `last`,
    /// which is resolved backwards from the end of the month.
    #[must_use]
    pub const fn ordinal(self) -> Option<u32> {
        match self {
            Self::First => Some(0),
            Self::Second => Some(1),
            Self::Third => Some(2),
            Self::Fourth => Some(3),
            Self::Last => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Second => "second",
            Self::Third => "third",
            Self::Fourth => "fourth",
            Self::Last => "last",
        }
    }
}

impl fmt::Display for WeekOfMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeekOfMonth {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" => Ok(Self::First),
            "second" => Ok(Self::Second),
            "third" => Ok(Self::Third),
            "fourth" => Ok(Self::Fourth),
            "last" => Ok(Self::Last),
            _ => Err(EngineError::UnknownWeekOfMonth(s.to_string())),
        }
    }
}

/// How a monthly rule picks its day.
///
/// Sub-fields are optional so that an incomplete pattern can still be
/// represented and reported by the validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "monthlyPattern",
    rename_all = "kebab-case",
    rename_all_fields = "camelCase"
)]
pub enum MonthlyPattern {
    /// Fixed day of the month, clamped to the month's length.
    #[serde(alias = "date")]
    ByDate {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        day_of_month: Option<u32>,
    },
    /// Nth weekday of the month, e.g. "second tuesday".
    #[serde(alias = "day-of-week")]
    ByWeekday {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        week_of_month: Option<WeekOfMonth>,
        #[serde(
            default,
            rename = "dayOfWeekInMonth",
            alias = "dayOfWeek",
            skip_serializing_if = "Option::is_none"
        )]
        day_of_week: Option<DayOfWeek>,
    },
}

/// Period of a rule and the refinements that apply to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum RecurrenceKind {
    Daily,
    Weekly {
        #[serde(default)]
        days_of_week: BTreeSet<DayOfWeek>,
    },
    Monthly {
        /// `None` when the document names no readable pattern.
        #[serde(flatten)]
        pattern: Option<MonthlyPattern>,
    },
    Yearly {
        /// 1-based month; the start month is kept when absent.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        month_of_year: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        day_of_month: Option<u32>,
    },
    /// Any `kind` tag this engine does not know. Generation stops after the
    /// start occurrence.
    #[serde(other)]
    Unrecognized,
}

impl RecurrenceKind {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly { .. } => "weekly",
            Self::Monthly { .. } => "monthly",
            Self::Yearly { .. } => "yearly",
            Self::Unrecognized => "unrecognized",
        }
    }
}

/// A declarative recurrence rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceRule {
    #[serde(flatten)]
    pub kind: RecurrenceKind,
    /// Every N units of the kind's period.
    pub interval: u32,
    /// Anchor of the sequence. Optional only so that its absence can be
    /// reported by the validator.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound; must be strictly after `start_date`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl RecurrenceRule {
    #[must_use]
    pub const fn new(kind: RecurrenceKind, start_date: NaiveDate, interval: u32) -> Self {
        Self {
            kind,
            interval,
            start_date: Some(start_date),
            end_date: None,
        }
    }

    #[must_use]
    pub const fn daily(start_date: NaiveDate, interval: u32) -> Self {
        Self::new(RecurrenceKind::Daily, start_date, interval)
    }

    #[must_use]
    pub fn weekly(
        start_date: NaiveDate,
        interval: u32,
        days_of_week: impl IntoIterator<Item = DayOfWeek>,
    ) -> Self {
        Self::new(
            RecurrenceKind::Weekly {
                days_of_week: days_of_week.into_iter().collect(),
            },
            start_date,
            interval,
        )
    }

    #[must_use]
    pub const fn monthly_by_date(start_date: NaiveDate, interval: u32, day_of_month: u32) -> Self {
        Self::new(
            RecurrenceKind::Monthly {
                pattern: Some(MonthlyPattern::ByDate {
                    day_of_month: Some(day_of_month),
                }),
            },
            start_date,
            interval,
        )
    }

    #[must_use]
    pub const fn monthly_by_weekday(
        start_date: NaiveDate,
        interval: u32,
        week_of_month: WeekOfMonth,
        day_of_week: DayOfWeek,
    ) -> Self {
        Self::new(
            RecurrenceKind::Monthly {
                pattern: Some(MonthlyPattern::ByWeekday {
                    week_of_month: Some(week_of_month),
                    day_of_week: Some(day_of_week),
                }),
            },
            start_date,
            interval,
        )
    }

    #[must_use]
    pub const fn yearly(
        start_date: NaiveDate,
        interval: u32,
        month_of_year: Option<u32>,
        day_of_month: Option<u32>,
    ) -> Self {
        Self::new(
            RecurrenceKind::Yearly {
                month_of_year,
                day_of_month,
            },
            start_date,
            interval,
        )
    }

    #[must_use]
    pub const fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// ## Summary
    /// Parses a rule from its JSON form.
    ///
    /// ## Errors
    /// Returns `EngineError::InvalidRuleJson` if the document is not a
    /// well-formed rule. Field consistency is not checked here.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
