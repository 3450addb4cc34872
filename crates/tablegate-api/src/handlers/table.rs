//! Table resource handler for every method under the API mount point

use actix_web::http::header::{HeaderName, ACCEPT, CONTENT_TYPE};
use actix_web::{web, HttpRequest};
use log::warn;
use std::borrow::Cow;

use crate::error::ApiError;
use crate::router::{TableRequest, TableResourceRouter, TableResponse};

/// Header text, or its lossy UTF-8 form when it holds more than visible
/// ASCII, so a present header is never mistaken for a missing one.
fn header(req: &HttpRequest, name: HeaderName) -> Option<Cow<'_, str>> {
    req.headers().get(name).map(|v| match v.to_str() {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => String::from_utf8_lossy(v.as_bytes()),
    })
}

/// `{prefix}/{tail:.*}` - dispatches to the table resource router.
///
/// Client errors are logged at warn level; downstream failures are already
/// logged by the router.
pub async fn table_resource_handler(
    req: HttpRequest,
    body: web::Bytes,
    router: web::Data<TableResourceRouter>,
) -> Result<TableResponse, ApiError> {
    let tail = req.match_info().query("tail");
    let segments: Vec<&str> = tail.split('/').filter(|s| !s.is_empty()).collect();
    let accept = header(&req, ACCEPT);
    let content_type = header(&req, CONTENT_TYPE);

    let request = TableRequest {
        method: req.method(),
        segments: &segments,
        accept: accept.as_deref(),
        content_type: content_type.as_deref(),
        body: &body,
    };

    let result = router.handle(request).await;
    if let Err(ref e) = result {
        if e.is_client_error() {
            warn!("{} {} rejected: {}", req.method(), req.path(), e);
        }
    }
    result
}
