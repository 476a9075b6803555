use salvo::writing::Json;
use salvo::{Request, Response, handler};

use kairos_engine::{RecurrenceRule, validate};

use super::parse_body;

/// ## Summary
/// POST /api/recurrence/validate - Checks a rule and lists every violation.
///
/// An invalid rule is still a 200 response; `isValid` carries the verdict.
///
/// ## Errors
/// Returns HTTP 400 if the body is not a rule document.
#[handler]
#[tracing::instrument(skip_all)]
pub async fn validate_rule(req: &mut Request, res: &mut Response) {
    let rule: RecurrenceRule = match parse_body(req).await {
        Ok(rule) => rule,
        Err(e) => {
            e.render(res);
            return;
        }
    };

    let result = validate(&rule);
    tracing::debug!(
        kind = rule.kind.name(),
        is_valid = result.is_valid,
        error_count = result.errors.len(),
        "Validated rule"
    );
    res.render(Json(result));
}
