use salvo::http::StatusCode;
use salvo::writing::Json;
use serde::Serialize;
use thiserror::Error;

use kairos_engine::EngineError;
use kairos_service::error::ServiceError;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ServiceError(#[from] ServiceError),

    #[error(transparent)]
    EngineError(#[from] EngineError),

    #[error(transparent)]
    CoreError(#[from] kairos_core::error::CoreError),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

/// ## Summary
/// Error response payload
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl AppError {
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_)
            | Self::EngineError(_)
            | Self::ServiceError(ServiceError::EngineError(_)) => StatusCode::BAD_REQUEST,
            Self::ServiceError(ServiceError::NothingToExport) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::ServiceError(ServiceError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::ServiceError(ServiceError::SerializationError(_)) | Self::CoreError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// ## Summary
    /// Writes this error to the response as a JSON `ErrorResponse`.
    ///
    /// Validation failures list every message under `details`.
    pub fn render(&self, res: &mut salvo::Response) {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, %status, "Request rejected");
        }

        let details = match self {
            Self::EngineError(EngineError::InvalidRule(errors))
            | Self::ServiceError(ServiceError::EngineError(EngineError::InvalidRule(errors))) => {
                errors.clone()
            }
            _ => Vec::new(),
        };

        res.status_code(status);
        res.render(Json(ErrorResponse {
            error: self.to_string(),
            details,
        }));
    }
}
