//! API routes configuration
//!
//! - GET /healthz - liveness probe
//! - {prefix}/... - table resources, see [`crate::router`]

use actix_web::web;

use crate::handlers;

/// Configure all routes, mounting table resources under `api_prefix`
/// (e.g. "/api"; empty mounts them at the root).
pub fn configure_routes(cfg: &mut web::ServiceConfig, api_prefix: &str) {
    cfg.route("/healthz", web::get().to(handlers::healthz_handler)).service(
        web::scope(api_prefix)
            .route("/{tail:.*}", web::route().to(handlers::table_resource_handler)),
    );
}
