//! Occurrence generation.
//!
//! [`generate`] anchors a sequence at the rule's start date, steps the rule
//! forward until the cap or the end date is reached, appends the end date if
//! there is one, and returns the whole sequence sorted by date.

pub mod calendar;
mod step;

use chrono::NaiveDate;

use crate::occurrence::Occurrence;
use crate::rule::RecurrenceRule;

pub use step::{WEEKLY_SCAN_LIMIT_DAYS, step_once};

/// Cap used when refreshing a schedule preview.
pub const DEFAULT_MAX_OCCURRENCES: usize = 50;

/// Upper bound on the up-front allocation for a sequence.
const PREALLOCATE_LIMIT: usize = 1024;

/// Iterator over the `recurring` dates of a rule, in stepping order.
///
/// Ends when stepping yields nothing or the next date passes the rule's end
/// date. Unbounded otherwise; pair it with [`Iterator::take`].
#[derive(Debug, Clone)]
pub struct RecurringDates<'a> {
    rule: &'a RecurrenceRule,
    cursor: Option<NaiveDate>,
}

impl<'a> RecurringDates<'a> {
    #[must_use]
    pub const fn new(rule: &'a RecurrenceRule) -> Self {
        Self {
            rule,
            cursor: rule.start_date,
        }
    }
}

impl Iterator for RecurringDates<'_> {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let cursor = self.cursor?;

        let Some(next) = step_once(cursor, self.rule) else {
            tracing::debug!(
                kind = self.rule.kind.name(),
                %cursor,
                "Stepping produced no further date"
            );
            self.cursor = None;
            return None;
        };

        if let Some(end) = self.rule.end_date.filter(|end| next > *end) {
            tracing::trace!(%next, %end, "Next date is past the end date");
            self.cursor = None;
            return None;
        }

        self.cursor = Some(next);
        Some(next)
    }
}

/// ## Summary
/// Expands `rule` into at most `max_occurrences` recurring dates, framed by
/// its start and (if set) end occurrences.
///
/// The rule is not validated. A malformed rule yields a best-effort
/// sequence, and an unrecognized kind yields only the start and end
/// occurrences. The end occurrence is always emitted when the rule has an end
/// date, whether or not stepping reached it. The result is sorted ascending
/// by date; occurrences on the same date keep start, recurring, end order.
#[must_use]
pub fn generate(rule: &RecurrenceRule, max_occurrences: usize) -> Vec<Occurrence> {
    let mut occurrences = Vec::with_capacity(max_occurrences.min(PREALLOCATE_LIMIT) + 2);

    if let Some(start) = rule.start_date {
        occurrences.push(Occurrence::start(start));
        occurrences.extend(
            RecurringDates::new(rule)
                .take(max_occurrences)
                .map(Occurrence::recurring),
        );
    } else {
        tracing::debug!("Rule has no start date; nothing to step from");
    }

    if let Some(end) = rule.end_date {
        occurrences.push(Occurrence::end(end));
    }

    occurrences.sort_by_key(|occurrence| occurrence.date);

    tracing::debug!(
        kind = rule.kind.name(),
        interval = rule.interval,
        max_occurrences,
        total = occurrences.len(),
        "Generated occurrences"
    );

    occurrences
}
