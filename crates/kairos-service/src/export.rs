//! ## Summary
//! Serialized forms of a schedule: the JSON export document and the plain
//! text listing.
//!
//! The export document carries the rule, every occurrence as an RFC 3339
//! timestamp at midnight UTC with its role under `type`, and the time of
//! export.

use chrono::{DateTime, NaiveDate, NaiveTime, SecondsFormat, Utc};
use kairos_engine::{EngineError, Occurrence, OccurrenceRole, RecurrenceRule};
use serde::{Deserialize, Serialize};

use crate::error::{ServiceError, ServiceResult};
use crate::schedule::Schedule;

/// One exported occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedDate {
    pub date: String,
    #[serde(rename = "type")]
    pub role: OccurrenceRole,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub rule: RecurrenceRule,
    pub dates: Vec<ExportedDate>,
    pub exported_at: String,
}

impl ExportDocument {
    /// ## Summary
    /// Renders the document as indented JSON.
    ///
    /// ## Errors
    /// Returns `ServiceError::SerializationError` if serialization fails.
    pub fn to_json_pretty(&self) -> ServiceResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Midnight UTC of `date` as an RFC 3339 timestamp with milliseconds.
#[must_use]
pub fn timestamp(date: NaiveDate) -> String {
    date.and_time(NaiveTime::MIN)
        .and_utc()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// ## Summary
/// Builds the export document for a schedule.
///
/// ## Errors
/// Returns `EngineError::InvalidRule` (wrapped) if the schedule's rule failed
/// validation, or `ServiceError::NothingToExport` if it has no occurrences.
pub fn export_schedule(
    schedule: &Schedule,
    exported_at: DateTime<Utc>,
) -> ServiceResult<ExportDocument> {
    if !schedule.is_valid {
        return Err(EngineError::InvalidRule(schedule.errors.clone()).into());
    }
    if schedule.occurrences.is_empty() {
        return Err(ServiceError::NothingToExport);
    }

    let dates = schedule
        .occurrences
        .iter()
        .map(|occurrence| ExportedDate {
            date: timestamp(occurrence.date),
            role: occurrence.role,
        })
        .collect::<Vec<_>>();

    tracing::debug!(date_count = dates.len(), "Built export document");

    Ok(ExportDocument {
        rule: schedule.rule.clone(),
        dates,
        exported_at: exported_at.to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

/// Suggested file name for an export made on `day`.
#[must_use]
pub fn export_file_name(day: NaiveDate) -> String {
    format!("recurring-dates-{}.json", day.format("%Y-%m-%d"))
}

/// One line per occurrence: `YYYY-MM-DD (role)`.
#[must_use]
pub fn plain_text_listing(occurrences: &[Occurrence]) -> String {
    occurrences
        .iter()
        .map(|occurrence| format!("{} ({})", occurrence.date.format("%Y-%m-%d"), occurrence.role))
        .collect::<Vec<_>>()
        .join("\n")
}
