//! JSON endpoints over the recurrence engine.
//!
//! | Method | Path               | Body / query                  | Response           |
//! |--------|--------------------|-------------------------------|--------------------|
//! | POST   | `validate`         | rule                          | validation result  |
//! | POST   | `generate`         | `{ rule, maxOccurrences? }`   | occurrences        |
//! | POST   | `schedule`         | rule                          | schedule + summary |
//! | POST   | `export`           | rule                          | export document    |
//! | GET    | `presets`          | `?start=YYYY-MM-DD`           | preset list        |
//! | GET    | `presets/{slug}`   | `?start=YYYY-MM-DD`           | one preset         |

mod export;
mod generate;
mod presets;
mod schedule;
mod types;
mod validate;


use salvo::{Request, Router};
use serde::de::DeserializeOwned;

use super::RECURRENCE_ROUTE_COMPONENT;
use crate::error::{AppError, AppResult};

#[must_use]
pub fn routes() -> Router {
    Router::with_path(RECURRENCE_ROUTE_COMPONENT)
        .push(Router::with_path("validate").post(validate::validate_rule))
        .push(Router::with_path("generate").post(generate::generate_occurrences))
        .push(Router::with_path("schedule").post(schedule::refresh_schedule))
        .push(Router::with_path("export").post(export::export_rule))
        .push(
            Router::with_path("presets")
                .get(presets::list_presets)
                .push(Router::with_path("{slug}").get(presets::get_preset)),
        )
}

/// ## Summary
/// Parses the JSON request body.
///
/// ## Errors
/// Returns `AppError::BadRequest` if the body is missing, not JSON, or does
/// not match `T`.
async fn parse_body<T: DeserializeOwned>(req: &mut Request) -> AppResult<T> {
    req.parse_json::<T>().await.map_err(|e| {
        tracing::debug!(error = %e, "Failed to parse request body");
        AppError::BadRequest(format!("request body is not a valid rule document: {e}"))
    })
}
