use chrono::{NaiveDate, Utc};
use salvo::writing::Json;
use salvo::{Request, Response, handler};

use kairos_service::presets::{preset_by_slug, presets};

use crate::error::{AppError, AppResult};

/// Anchor date from `?start=YYYY-MM-DD`, defaulting to today (UTC).
fn start_from_query(req: &Request) -> AppResult<NaiveDate> {
    match req.query::<String>("start") {
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .map_err(|e| AppError::BadRequest(format!("invalid start date '{raw}': {e}"))),
        None => Ok(Utc::now().date_naive()),
    }
}

/// ## Summary
/// GET /api/recurrence/presets - Lists the preset rules anchored at `start`.
///
/// ## Errors
/// Returns HTTP 400 if `start` is not a `YYYY-MM-DD` date.
#[handler]
#[tracing::instrument(skip_all)]
pub async fn list_presets(req: &mut Request, res: &mut Response) {
    match start_from_query(req) {
        Ok(start) => res.render(Json(presets(start))),
        Err(e) => e.render(res),
    }
}

/// ## Summary
/// GET /api/recurrence/presets/{slug} - Returns one preset anchored at `start`.
///
/// ## Errors
/// Returns HTTP 400 if `start` is not a `YYYY-MM-DD` date.
/// Returns HTTP 404 if no preset has that slug.
#[handler]
#[tracing::instrument(skip_all, fields(slug = tracing::field::Empty))]
pub async fn get_preset(req: &mut Request, res: &mut Response) {
    let slug = req.param::<String>("slug").unwrap_or_default();
    tracing::Span::current().record("slug", slug.as_str());

    let preset = start_from_query(req)
        .and_then(|start| preset_by_slug(&slug, start).map_err(AppError::from));
    match preset {
        Ok(preset) => res.render(Json(preset)),
        Err(e) => e.render(res),
    }
}
