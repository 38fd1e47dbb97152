//! Domain errors - error types for the domain layer

use std::collections::BTreeMap;

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("article not found")]
    ArticleNotFound,

    #[error("comment not found")]
    CommentNotFound,

    #[error("user not found")]
    UserNotFound,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("duplicate slug")]
    DuplicateSlug,

    #[error("duplicate username")]
    DuplicateUsername,

    #[error("duplicate email")]
    DuplicateEmail,

    // =========================================================================
    // Authentication Errors
    // =========================================================================
    #[error("invalid credentials")]
    InvalidCredentials,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("validation failed for {} field(s)", .0.len())]
    ValidationFailed(BTreeMap<String, String>),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("{0} timed out")]
    Timeout(&'static str),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for logs and API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::ArticleNotFound => "ARTICLE_NOT_FOUND",
            Self::CommentNotFound => "COMMENT_NOT_FOUND",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::DuplicateSlug => "DUPLICATE_SLUG",
            Self::DuplicateUsername => "DUPLICATE_USERNAME",
            Self::DuplicateEmail => "DUPLICATE_EMAIL",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::ValidationFailed(_) => "VALIDATION_FAILED",
            Self::Timeout(_) => "TIMEOUT",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ArticleNotFound | Self::CommentNotFound | Self::UserNotFound
        )
    }

    /// Check if this is a uniqueness conflict
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::DuplicateSlug | Self::DuplicateUsername | Self::DuplicateEmail
        )
    }

    /// Check if the error is reported to the client as field errors
    pub fn is_validation(&self) -> bool {
        self.is_conflict() || matches!(self, Self::ValidationFailed(_))
    }

    /// Field-keyed messages for errors the client can correct
    pub fn field_errors(&self) -> Option<BTreeMap<String, String>> {
        let (field, message) = match self {
            Self::ValidationFailed(errors) => return Some(errors.clone()),
            Self::DuplicateSlug => ("slug", "an article with this title already exists"),
            Self::DuplicateUsername => ("username", "a user with this username already exists"),
            Self::DuplicateEmail => ("email", "a user with this email address already exists"),
            _ => return None,
        };
        Some(BTreeMap::from([(field.to_string(), message.to_string())]))
    }
}
