//! Repository implementations
//!
//! SQLite implementations of the repository traits defined in conduit-core.
//! Each repository handles database operations for a specific domain entity.

mod article;
mod comment;
mod error;
mod tag;
mod user;

use std::time::Duration;

use chrono::{SecondsFormat, Utc};

pub use article::SqliteArticleRepository;
pub use comment::SqliteCommentRepository;
pub use tag::SqliteTagRepository;
pub use user::SqliteUserRepository;

/// Per-call bound used unless a repository is built with another one
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(30);

/// Current time as stored in timestamp columns (RFC3339, nanosecond precision)
pub(crate) fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Nanos, true)
}
