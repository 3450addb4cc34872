//! Liveness probe handler

use actix_web::{HttpResponse, Responder};
use serde_json::json;

/// GET /healthz - liveness probe
///
/// Returns 200 OK with build information while the server is running.
pub async fn healthz_handler() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "commit": env!("GIT_COMMIT_HASH"),
        "build_date": env!("BUILD_DATE")
    }))
}
