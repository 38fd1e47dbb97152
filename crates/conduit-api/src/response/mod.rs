//! Response types and error handling for API endpoints
//!
//! Every error is answered as `{"errors": {field: message}}`. Errors without a
//! field are reported under `body`.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use conduit_common::AppError;
use conduit_core::DomainError;
use conduit_service::ServiceError;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

/// Message returned for every 5xx; the cause is only logged
pub const INTERNAL_ERROR_MESSAGE: &str =
    "the server encountered a problem and could not process your request";

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Request body could not be decoded
    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        let code = match self {
            Self::Service(e) => e.status_code(),
            Self::Domain(e) => AppError::status_code_for(e),
            Self::BadRequest(_) => 400,
        };
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get error code for logs
    #[must_use]
    pub fn error_code(&self) -> &str {
        match self {
            Self::Service(e) => e.error_code(),
            Self::Domain(e) => e.code(),
            Self::BadRequest(_) => "BAD_REQUEST",
        }
    }

    /// Create a body decoding error
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    /// Field-keyed messages sent to the client
    fn errors(&self) -> BTreeMap<String, String> {
        if self.status_code().is_server_error() {
            return single("body", INTERNAL_ERROR_MESSAGE);
        }

        let fields = match self {
            Self::Service(e) => e.field_errors(),
            Self::Domain(e) => e.field_errors(),
            Self::BadRequest(_) => None,
        };
        fields.unwrap_or_else(|| single("body", &self.to_string()))
    }
}

fn single(field: &str, message: &str) -> BTreeMap<String, String> {
    BTreeMap::from([(field.to_string(), message.to_string())])
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub errors: BTreeMap<String, String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            error!(error = ?self, code = self.error_code(), "Server error occurred");
        } else if status == StatusCode::UNAUTHORIZED {
            warn!(code = self.error_code(), "Unauthorized request");
        }

        let body = ErrorBody {
            errors: self.errors(),
        };
        (status, Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Created response (201) with JSON body
pub struct Created<T>(pub T);

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}

/// No content response (204)
pub struct NoContent;

impl IntoResponse for NoContent {
    fn into_response(self) -> Response {
        StatusCode::NO_CONTENT.into_response()
    }
}
