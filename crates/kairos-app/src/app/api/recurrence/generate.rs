use salvo::writing::Json;
use salvo::{Depot, Request, Response, handler};

use kairos_engine::generate;

use super::parse_body;
use super::types::{GenerateRequest, GenerateResponse};
use crate::config::get_config_from_depot;

/// ## Summary
/// POST /api/recurrence/generate - Expands a rule without validating it.
///
/// The cap defaults to `generation.default_cap` and is clamped to
/// `generation.max_cap`. Malformed rules produce a best-effort sequence.
///
/// ## Errors
/// Returns HTTP 400 if the body is not a generate request.
/// Returns HTTP 500 if configuration is missing from the depot.
#[handler]
#[tracing::instrument(skip_all)]
pub async fn generate_occurrences(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let settings = match get_config_from_depot(depot) {
        Ok(settings) => settings,
        Err(e) => {
            e.render(res);
            return;
        }
    };

    let request: GenerateRequest = match parse_body(req).await {
        Ok(request) => request,
        Err(e) => {
            e.render(res);
            return;
        }
    };

    let max_occurrences = settings.generation.resolve_cap(request.max_occurrences);
    let occurrences = generate(&request.rule, max_occurrences);

    res.render(Json(GenerateResponse {
        max_occurrences,
        occurrences,
    }));
}
