//! Tag service

use tracing::instrument;

use crate::dto::TagsEnvelope;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Tag service
pub struct TagService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TagService<'a> {
    /// Create a new TagService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Every tag in use, in creation order
    #[instrument(skip(self))]
    pub async fn list_tags(&self) -> ServiceResult<TagsEnvelope> {
        let tags = self.ctx.tag_repo().get_all_tags().await?;
        Ok(TagsEnvelope { tags })
    }
}
