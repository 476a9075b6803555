//! Settings plumbing for handlers.
//!
//! The binary loads [`Settings`] once; [`ConfigHandler`] shares that single
//! copy with every request through the salvo `Depot`.

use std::sync::Arc;

use salvo::async_trait;
pub use kairos_core::config::*;

use crate::error::{AppError, AppResult};

/// Hoop that injects the shared `Arc<Settings>` into each request's depot.
#[derive(Debug, Clone)]
pub struct ConfigHandler {
    settings: Arc<Settings>,
}

impl ConfigHandler {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

#[async_trait]
impl salvo::Handler for ConfigHandler {
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(Arc::clone(&self.settings));
    }
}

/// ## Summary
/// Retrieves the shared settings placed in the depot by [`ConfigHandler`].
///
/// ## Errors
/// Returns `CoreError::InvariantViolation` if the router was built without
/// the hoop.
pub fn get_config_from_depot(depot: &salvo::Depot) -> AppResult<Arc<Settings>> {
    depot.obtain::<Arc<Settings>>().cloned().map_err(|_err| {
        tracing::error!("Settings missing from depot; is ConfigHandler installed?");
        AppError::CoreError(kairos_core::error::CoreError::InvariantViolation(
            "Configuration not found in depot",
        ))
    })
}
