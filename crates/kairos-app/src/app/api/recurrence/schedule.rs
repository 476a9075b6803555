use salvo::writing::Json;
use salvo::{Depot, Request, Response, handler};

use kairos_engine::RecurrenceRule;
use kairos_service::schedule::refresh;

use super::parse_body;
use super::types::ScheduleResponse;
use crate::config::get_config_from_depot;

/// ## Summary
/// POST /api/recurrence/schedule - Validates a rule and, if valid, generates
/// up to `generation.preview_cap` occurrences.
///
/// An invalid rule yields no occurrences and its validation errors.
///
/// ## Errors
/// Returns HTTP 400 if the body is not a rule document.
/// Returns HTTP 500 if configuration is missing from the depot.
#[handler]
#[tracing::instrument(skip_all)]
pub async fn refresh_schedule(req: &mut Request, depot: &mut Depot, res: &mut Response) {
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

    let schedule = refresh(&rule, settings.generation.preview_cap);
    let summary = schedule.summary();
    res.render(Json(ScheduleResponse { schedule, summary }));
}
