use thiserror::Error;

/// Service layer errors
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    EngineError(#[from] kairos_engine::EngineError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Nothing to export: the schedule has no occurrences")]
    NothingToExport,

    #[error("Not found: {0}")]
    NotFound(String),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
