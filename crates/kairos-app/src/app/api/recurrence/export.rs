use chrono::Utc;
use salvo::http::header::CONTENT_DISPOSITION;
use salvo::writing::Json;
use salvo::{Depot, Request, Response, handler};

use kairos_engine::RecurrenceRule;
use kairos_service::export::{export_file_name, export_schedule};
use kairos_service::schedule::refresh;

use super::parse_body;
use crate::config::get_config_from_depot;
use crate::error::AppError;

/// ## Summary
/// POST /api/recurrence/export - Returns the export document for a rule's
/// schedule as a JSON attachment.
///
/// ## Errors
/// Returns HTTP 400 if the body is not a rule document or the rule is invalid.
/// Returns HTTP 500 if configuration is missing from the depot.
#[handler]
#[tracing::instrument(skip_all)]
pub async fn export_rule(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let settings = match get_config_from_depot(depot) {
        Ok(settings) => settings,
        Err(e) => {
            e.render(res);
            return;
        }
    };

    let rule: RecurrenceRule = match parse_body(req).await {
        Ok(rule) => rule,
        Err(e) => {
            e.render(res);
            return;
        }
    };

    let now = Utc::now();
    let schedule = refresh(&rule, settings.generation.preview_cap);
    let document = match export_schedule(&schedule, now) {
        Ok(document) => document,
        Err(e) => {
            AppError::from(e).render(res);
            return;
        }
    };

    let disposition = format!(
        "attachment; filename=\"{}\"",
        export_file_name(now.date_naive())
    );
    if let Err(e) = res.add_header(CONTENT_DISPOSITION, disposition, true) {
        tracing::warn!(error = %e, "Failed to set Content-Disposition header");
    }

    res.render(Json(document));
}
