use kairos_engine::{Occurrence, RecurrenceRule};
use kairos_service::schedule::{Schedule, ScheduleSummary};
use serde::{Deserialize, Serialize};

/// ## Summary
/// Generate request payload
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub rule: RecurrenceRule,
    #[serde(default)]
    pub max_occurrences: Option<usize>,
}

/// ## Summary
/// Generate response payload
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub max_occurrences: usize,
    pub occurrences: Vec<Occurrence>,
}

/// ## Summary
/// Schedule response payload
#[derive(Debug, Serialize)]
pub struct ScheduleResponse {
    #[serde(flatten)]
    pub schedule: Schedule,
    pub summary: ScheduleSummary,
}
