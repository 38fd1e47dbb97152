//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, ownership checks, and orchestration of domain operations.
//! Request bodies reach the services already validated.

pub mod article;
pub mod comment;
pub mod context;
pub mod error;
pub mod profile;
pub mod tag;
pub mod user;

use conduit_core::ViewerContext;

// Re-export all services for convenience
pub use article::ArticleService;
pub use comment::CommentService;
pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use profile::ProfileService;
pub use tag::TagService;
pub use user::UserService;

/// Id of the authenticated viewer, or `Unauthorized`
pub(crate) fn require_user(viewer: &ViewerContext) -> ServiceResult<i64> {
    viewer.user_id().ok_or(ServiceError::Unauthorized)
}
