//! API endpoint modules.

pub mod children;
pub mod health;
pub mod ingest;
pub mod openapi;
pub mod runs;

use actix_web::web;

use crate::error::AppError;

pub use children::configure_routes as configure_child_routes;
pub use health::configure_health_routes;
pub use ingest::configure_routes as configure_ingest_routes;
pub use openapi::ApiDoc;
pub use runs::configure_routes as configure_run_routes;

/// Mount every `/api/v1` route.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_health_routes)
        .configure(configure_run_routes)
        .configure(configure_child_routes)
        .configure(configure_ingest_routes);
}

/// JSON body limits, with bad bodies reported as `INVALID_INPUT`.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| AppError::InvalidInput(err.to_string()).into())
}

/// Query string errors reported as `INVALID_INPUT`.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| AppError::InvalidInput(err.to_string()).into())
}
