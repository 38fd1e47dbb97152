//! Path parameter extractors

use serde::Deserialize;

use conduit_service::ServiceError;

use crate::response::ApiError;

/// `/articles/:slug/comments/:id`
#[derive(Debug, Deserialize)]
pub struct CommentPath {
    pub slug: String,
    pub id: String,
}

impl CommentPath {
    /// Parse the comment id
    pub fn comment_id(&self) -> Result<i64, ApiError> {
        self.id
            .parse()
            .map_err(|_| ServiceError::validation("id", "must be an integer").into())
    }
}
