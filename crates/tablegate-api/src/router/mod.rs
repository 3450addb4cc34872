//! Table resource router
//!
//! Turns `(method, path segments)` into a [`TableOperation`] through a
//! declarative route table, then executes it against the injected
//! [`TableAdmin`].
//!
//! ## Resources (below the API mount point)
//! - GET    /{name}                   - table metadata
//! - GET    /{name}/regions           - region start keys
//! - POST   /{any}                    - create table from the body
//! - POST   /{name}/enable|disable    - enable / disable table
//! - POST   /{scope}/{name}/enable|disable
//! - PUT    /{scope}/{name}/...       - alter column families from the body
//! - DELETE /{scope}/{name}           - delete table
//!
//! Mutations answer 202 Accepted with no body.

mod routes;

use actix_web::body::BoxBody;
use actix_web::http::{Method, StatusCode};
use actix_web::{HttpRequest, HttpResponse, Responder};
use bytes::Bytes;
use log::{debug, error, info};
use std::sync::Arc;
use tablegate_commons::TableAdmin;

use crate::codec;
use crate::error::ApiError;
use crate::negotiate::{negotiate, Representation};

pub use routes::{match_route, TableOperation};

pub const TABLE_NOT_FOUND: &str = "Table not found!";
pub const NOT_HANDLED: &str = "Not handled in TableHandler";
const MULTIPART_NOT_SUPPORTED: &str = "Don't support multipart/related yet...";

/// Transport-independent view of one request.
#[derive(Debug, Clone, Copy)]
pub struct TableRequest<'a> {
    pub method: &'a Method,
    /// Path segments below the mount point, empty segments removed
    pub segments: &'a [&'a str],
    pub accept: Option<&'a str>,
    pub content_type: Option<&'a str>,
    pub body: &'a [u8],
}

/// Status, media type and body produced by a successful operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableResponse {
    pub status: StatusCode,
    pub content_type: Option<&'static str>,
    pub body: Bytes,
}

impl TableResponse {
    pub fn accepted() -> Self {
        Self {
            status: StatusCode::ACCEPTED,
            content_type: None,
            body: Bytes::new(),
        }
    }

    fn ok(encoded: codec::Encoded) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: Some(encoded.content_type),
            body: Bytes::from(encoded.body),
        }
    }

    fn no_content(repr: Representation) -> Self {
        Self {
            status: StatusCode::NO_CONTENT,
            content_type: repr.media_type(),
            body: Bytes::new(),
        }
    }
}

impl Responder for TableResponse {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        let mut builder = HttpResponse::build(self.status);
        if let Some(content_type) = self.content_type {
            builder.content_type(content_type);
        }
        builder.body(self.body)
    }
}

/// Representation for a response body, or 406 echoing the `Accept` value.
fn response_representation(accept: Option<&str>) -> Result<Representation, ApiError> {
    let repr = negotiate(accept);
    if repr.is_supported() {
        Ok(repr)
    } else {
        Err(ApiError::not_acceptable(format!(
            "Unsupported Accept Header Content: {}",
            accept.unwrap_or_default()
        )))
    }
}

/// Representation of a request body. Only XML can be decoded.
fn request_representation(content_type: Option<&str>) -> Result<Representation, ApiError> {
    match negotiate(content_type) {
        Representation::Xml => Ok(Representation::Xml),
        Representation::MultipartNotSupported => {
            Err(ApiError::not_acceptable(MULTIPART_NOT_SUPPORTED))
        },
        Representation::PlainText | Representation::Unrecognized => {
            Err(ApiError::not_acceptable(format!(
                "Unsupported Content-Type Header Content: {}",
                content_type.unwrap_or_default()
            )))
        },
    }
}

/// Stateless dispatcher for table resources.
///
/// Holds nothing but the administration client; every request builds its
/// own descriptors, so concurrent calls need no locking.
#[derive(Clone)]
pub struct TableResourceRouter {
    admin: Arc<dyn TableAdmin>,
}

impl TableResourceRouter {
    pub fn new(admin: Arc<dyn TableAdmin>) -> Self {
        Self { admin }
    }

    /// Route and execute one request.
    pub async fn handle(&self, request: TableRequest<'_>) -> Result<TableResponse, ApiError> {
        let operation = match_route(request.method, request.segments).ok_or_else(|| {
            debug!("No route for {} /{}", request.method, request.segments.join("/"));
            ApiError::not_found(NOT_HANDLED)
        })?;
        debug!("{} /{} -> {:?}", request.method, request.segments.join("/"), operation);

        self.execute(operation, &request).await
    }

    async fn execute(
        &self,
        operation: TableOperation,
        request: &TableRequest<'_>,
    ) -> Result<TableResponse, ApiError> {
        match operation {
            TableOperation::Metadata { table } => self.table_metadata(&table, request.accept).await,
            TableOperation::Regions { table } => self.table_regions(&table, request.accept).await,
            TableOperation::Create => self.create_table(request.content_type, request.body).await,
            TableOperation::Enable { table } => {
                self.admin.enable_table(&table).await.map_err(downstream)?;
                info!("Enabled table '{}'", table);
                Ok(TableResponse::accepted())
            },
            TableOperation::Disable { table } => {
                self.admin.disable_table(&table).await.map_err(downstream)?;
                info!("Disabled table '{}'", table);
                Ok(TableResponse::accepted())
            },
            TableOperation::Alter { table } => {
                self.alter_table(&table, request.content_type, request.body).await
            },
            TableOperation::Delete { table } => {
                self.admin.delete_table(&table).await.map_err(downstream)?;
                info!("Deleted table '{}'", table);
                Ok(TableResponse::accepted())
            },
        }
    }

    /// Linear scan of the client's table list for `name`.
    async fn table_metadata(
        &self,
        name: &str,
        accept: Option<&str>,
    ) -> Result<TableResponse, ApiError> {
        let repr = response_representation(accept)?;
        let tables = self.admin.list_tables().await.map_err(downstream)?;
        let descriptor = tables
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| ApiError::not_found(TABLE_NOT_FOUND))?;

        Ok(TableResponse::ok(codec::encode_table(descriptor, repr)?))
    }

    async fn table_regions(
        &self,
        name: &str,
        accept: Option<&str>,
    ) -> Result<TableResponse, ApiError> {
        let repr = response_representation(accept)?;
        let handle = self.admin.open_table(name).await.map_err(|e| {
            if e.is_not_found() {
                ApiError::not_found(TABLE_NOT_FOUND)
            } else {
                downstream(e)
            }
        })?;
        let start_keys = handle.region_start_keys().await.map_err(downstream)?;

        if start_keys.is_empty() {
            return Ok(TableResponse::no_content(repr));
        }
        Ok(TableResponse::ok(codec::encode_regions(&start_keys, repr)?))
    }

    async fn create_table(
        &self,
        content_type: Option<&str>,
        body: &[u8],
    ) -> Result<TableResponse, ApiError> {
        let repr = request_representation(content_type)?;
        let descriptor = codec::decode_table(body, repr)?;
        let name = descriptor.name.clone();

        self.admin.create_table(descriptor).await.map_err(downstream)?;
        info!("Created table '{}'", name);
        Ok(TableResponse::accepted())
    }

    /// Applies each family in document order; a failure stops the loop and
    /// leaves earlier modifications in place.
    async fn alter_table(
        &self,
        table: &str,
        content_type: Option<&str>,
        body: &[u8],
    ) -> Result<TableResponse, ApiError> {
        let repr = request_representation(content_type)?;
        let families = codec::decode_column_families(body, repr)?;

        for family in families {
            let family_name = family.name.clone();
            self.admin
                .modify_column_family(table, &family_name, family)
                .await
                .map_err(downstream)?;
            info!("Modified column family '{}' of table '{}'", family_name, table);
        }
        Ok(TableResponse::accepted())
    }
}

fn downstream(err: tablegate_commons::AdminError) -> ApiError {
    let err = ApiError::from(err);
    if !err.is_client_error() {
        error!("Administration client failure: {}", err);
    }
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_response_representation_echoes_rejected_accept() {
        assert_eq!(response_representation(None).unwrap(), Representation::Xml);
        assert_eq!(
            response_representation(Some("text/plain")).unwrap(),
            Representation::PlainText
        );

        let err = response_representation(Some("application/json")).unwrap_err();
        assert!(matches!(err, ApiError::NotAcceptable(_)));
        assert_eq!(err.to_string(), "Unsupported Accept Header Content: application/json");

        let err = response_representation(Some("multipart/related")).unwrap_err();
        assert!(err.to_string().contains("multipart/related"));
    }

    #[test]
    fn test_request_representation() {
        assert_eq!(request_representation(None).unwrap(), Representation::Xml);
        assert_eq!(
            request_representation(Some("text/xml; charset=utf-8")).unwrap(),
            Representation::Xml
        );
        assert_eq!(
            request_representation(Some("multipart/related")).unwrap_err().to_string(),
            MULTIPART_NOT_SUPPORTED
        );
        assert_eq!(
            request_representation(Some("text/plain")).unwrap_err().to_string(),
            "Unsupported Content-Type Header Content: text/plain"
        );
    }

    #[actix_web::test]
    async fn test_accepted_response_has_no_body() {
        let req = TestRequest::default().to_http_request();
        let resp = TableResponse::accepted().respond_to(&req);
        assert_eq!(resp.status(), StatusCode::ACCEPTED);
        assert!(resp.headers().get("content-type").is_none());
    }

    #[actix_web::test]
    async fn test_no_content_keeps_media_type() {
        let req = TestRequest::default().to_http_request();
        let resp = TableResponse::no_content(Representation::PlainText).respond_to(&req);
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert_eq!(resp.headers().get("content-type").unwrap(), "text/plain");
    }
}
