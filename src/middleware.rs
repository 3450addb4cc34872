//! Server-wide middleware configuration helpers.

use actix_web::middleware;

/// Request/response access log.
///
/// Records method, path, status, body size and latency; the `Accept`
/// header is included since it decides the response representation.
pub fn request_logger() -> middleware::Logger {
    middleware::Logger::new(r#"%a "%r" %s %b "%{Accept}i" %Dms"#)
}
