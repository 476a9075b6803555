//! Generated occurrences.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Why a date appears in a generated sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OccurrenceRole {
    /// The rule's start date. Exactly one per sequence.
    Start,
    /// A date produced by stepping the rule.
    Recurring,
    /// The rule's end date, present iff the rule has one.
    End,
}

impl OccurrenceRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Recurring => "recurring",
            Self::End => "end",
        }
    }
}

impl fmt::Display for OccurrenceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One produced calendar date tagged with its role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Occurrence {
    pub date: NaiveDate,
    pub role: OccurrenceRole,
}

impl Occurrence {
    #[must_use]
    pub const fn start(date: NaiveDate) -> Self {
        Self {
            date,
            role: OccurrenceRole::Start,
        }
    }

    #[must_use]
    pub const fn recurring(date: NaiveDate) -> Self {
        Self {
            date,
            role: OccurrenceRole::Recurring,
        }
    }

    #[must_use]
    pub const fn end(date: NaiveDate) -> Self {
        Self {
            date,
            role: OccurrenceRole::End,
        }
    }

    #[must_use]
    pub fn is_recurring(&self) -> bool {
        self.role == OccurrenceRole::Recurring
    }
}

/// Number of `recurring` entries in a sequence.
#[must_use]
pub fn recurring_count(occurrences: &[Occurrence]) -> usize {
    occurrences.iter().filter(|o| o.is_recurring()).count()
}
