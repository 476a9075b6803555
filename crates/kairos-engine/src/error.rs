use thiserror::Error;

/// Rule parsing errors.
///
/// Rule inconsistencies are not reported here; they are collected by
/// [`crate::validate`] into a [`crate::ValidationResult`].
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid rule JSON: {0}")]
    InvalidRuleJson(#[from] serde_json::Error),

    #[error("Unknown day of week: {0}")]
    UnknownWeekday(String),

    #[error("Unknown week of month: {0}")]
    UnknownWeekOfMonth(String),

    #[error("Invalid recurrence rule: {}", .0.join("; "))]
    InvalidRule(Vec<String>),
}

pub type EngineResult<T> = std::result::Result<T, EngineError>;
