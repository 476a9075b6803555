mod app_specific;
mod recurrence;

use salvo::Router;

pub use kairos_core::constants::{
    API_ROUTE_COMPONENT, API_ROUTE_PREFIX, APP_ROUTE_COMPONENT, APP_ROUTE_PREFIX,
    RECURRENCE_ROUTE_COMPONENT, RECURRENCE_ROUTE_PREFIX,
};

/// ## Summary
/// Constructs the main API router.
#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT)
        .push(app_specific::routes())
        .push(recurrence::routes())
}
