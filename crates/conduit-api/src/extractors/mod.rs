//! Axum extractors for request handling
//!
//! Custom extractors for authentication, body validation, and query filters.

mod auth;
mod pagination;
mod path;
mod validated;

pub use auth::{AuthUser, TokenCredentials, Viewer};
pub use pagination::{ArticleQuery, FeedQuery};
pub use path::CommentPath;
pub use validated::{decode_strict, ValidatedJson, MAX_BODY_BYTES};
