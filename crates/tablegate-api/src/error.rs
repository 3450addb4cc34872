//! API error type and its HTTP mapping

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use tablegate_commons::AdminError;
use thiserror::Error;

use crate::codec::CodecError;

/// Failure of a table resource request.
///
/// The `Display` form is the plain diagnostic written as the response body.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Representation kind of the request or response is not supported (406)
    #[error("{0}")]
    NotAcceptable(String),

    /// No resource at the given path or name (404)
    #[error("{0}")]
    NotFound(String),

    /// Request body could not be decoded (400)
    #[error("{0}")]
    MalformedRequest(String),

    /// Administration client failure, message preserved (500)
    #[error("{0}")]
    Downstream(AdminError),

    /// Response could not be encoded (500)
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn not_acceptable(msg: impl Into<String>) -> Self {
        Self::NotAcceptable(msg.into())
    }

    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}

impl From<AdminError> for ApiError {
    fn from(err: AdminError) -> Self {
        match err {
            AdminError::TableNotFound(_) => ApiError::NotFound(err.to_string()),
            other => ApiError::Downstream(other),
        }
    }
}

impl From<CodecError> for ApiError {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::Malformed(msg) => ApiError::MalformedRequest(msg),
            CodecError::Encode(msg) => ApiError::Internal(msg),
            CodecError::Unsupported(repr) => {
                ApiError::NotAcceptable(format!("Unsupported representation: {}", repr))
            },
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotAcceptable(_) => StatusCode::NOT_ACCEPTABLE,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Downstream(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body(self.to_string())
    }
}
