// App-specific API handlers

use salvo::Router;

use super::APP_ROUTE_COMPONENT;

mod healthcheck;

#[must_use]
pub fn routes() -> Router {
    Router::with_path(APP_ROUTE_COMPONENT).push(healthcheck::routes())
}
