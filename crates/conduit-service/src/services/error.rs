//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use std::collections::BTreeMap;
use std::fmt;

use conduit_common::AppError;
use conduit_core::{DomainError, ValidationErrors};

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Domain rule violation, lookup miss, or persistence failure
    Domain(DomainError),

    /// Application error (token, config, etc.)
    App(AppError),

    /// Request-level rule violations, keyed by field
    Validation(ValidationErrors),

    /// The caller is authenticated but does not own the resource
    Forbidden(&'static str),

    /// The operation needs an authenticated caller
    Unauthorized,
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::App(e) => write!(f, "{e}"),
            Self::Validation(errors) => write!(f, "validation failed for {} field(s)", errors.len()),
            Self::Forbidden(resource) => write!(f, "Not allowed to modify this {resource}"),
            Self::Unauthorized => write!(f, "Authentication required"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            Self::App(e) => Some(e),
            _ => None,
        }
    }
}

impl ServiceError {
    /// Single-field validation failure
    pub fn validation(field: &str, message: &str) -> Self {
        Self::Validation(BTreeMap::from([(field.to_string(), message.to_string())]))
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => AppError::status_code_for(e),
            Self::App(e) => e.status_code(),
            Self::Validation(_) => 422,
            Self::Forbidden(_) => 403,
            Self::Unauthorized => 401,
        }
    }

    /// Get the error code for logs
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::App(e) => e.error_code(),
            Self::Validation(_) => "VALIDATION_FAILED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::Unauthorized => "UNAUTHORIZED",
        }
    }

    /// Field-keyed messages when the client can correct the request
    pub fn field_errors(&self) -> Option<BTreeMap<String, String>> {
        match self {
            Self::Domain(e) | Self::App(AppError::Domain(e)) => e.field_errors(),
            Self::Validation(errors) => Some(errors.clone()),
            _ => None,
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<AppError> for ServiceError {
    fn from(err: AppError) -> Self {
        Self::App(err)
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
