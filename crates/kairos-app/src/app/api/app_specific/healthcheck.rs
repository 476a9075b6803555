use salvo::{Router, handler};

/// Liveness check. Runs the engine on a fixed rule so a broken build of
/// the generator is reported as unhealthy.
#[handler]
async fn healthcheck(res: &mut salvo::Response) {
    let start = chrono::NaiveDate::from_ymd_opt(2024, 1, 1);
    let healthy = start.is_some_and(|start| {
        let rule = kairos_engine::RecurrenceRule::daily(start, 1);
        kairos_engine::validate(&rule).is_valid
            && kairos_engine::occurrence::recurring_count(&kairos_engine::generate(&rule, 1)) == 1
    });

    if healthy {
        res.render("OK");
    } else {
        tracing::error!("Engine self-check failed");
        res.status_code(salvo::http::StatusCode::SERVICE_UNAVAILABLE);
        res.render("UNAVAILABLE");
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("healthcheck").get(healthcheck)
}
