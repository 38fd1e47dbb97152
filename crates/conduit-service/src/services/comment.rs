//! Comment service
//!
//! Comments are always addressed through their article's slug.

use conduit_core::{DomainError, ViewerContext};
use tracing::{info, instrument, warn};

use crate::dto::{CommentEnvelope, CommentsEnvelope, CreateCommentRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::require_user;

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All comments on an article, oldest first
    #[instrument(skip(self, viewer))]
    pub async fn list_comments(
        &self,
        viewer: &ViewerContext,
        slug: &str,
    ) -> ServiceResult<CommentsEnvelope> {
        let viewer_id = viewer.user_id();
        let article = self
            .ctx
            .article_repo()
            .get_article_by_slug(slug, viewer_id)
            .await?;

        let comments = self
            .ctx
            .comment_repo()
            .get_comments_for_article(article.id, viewer_id)
            .await?;

        Ok(CommentsEnvelope {
            comments: comments.into_iter().map(Into::into).collect(),
        })
    }

    /// Add a comment by the viewer
    #[instrument(skip(self, viewer, request))]
    pub async fn add_comment(
        &self,
        viewer: &ViewerContext,
        slug: &str,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentEnvelope> {
        let user_id = require_user(viewer)?;
        let article = self
            .ctx
            .article_repo()
            .get_article_by_slug(slug, Some(user_id))
            .await?;

        let comment = self
            .ctx
            .comment_repo()
            .create_comment(article.id, user_id, &request.into_body())
            .await?;

        info!(comment_id = comment.id, article_id = article.id, "Comment added");

        Ok(CommentEnvelope {
            comment: comment.into(),
        })
    }

    /// Delete one of the viewer's comments.
    ///
    /// A comment that exists but belongs to a different article is reported
    /// as not found.
    #[instrument(skip(self, viewer))]
    pub async fn delete_comment(
        &self,
        viewer: &ViewerContext,
        slug: &str,
        comment_id: i64,
    ) -> ServiceResult<()> {
        let user_id = require_user(viewer)?;
        let article = self
            .ctx
            .article_repo()
            .get_article_by_slug(slug, Some(user_id))
            .await?;

        let comment = self
            .ctx
            .comment_repo()
            .get_comment_by_id(comment_id, Some(user_id))
            .await?;

        if !comment.belongs_to(article.id) {
            return Err(DomainError::CommentNotFound.into());
        }
        if !comment.is_authored_by(user_id) {
            warn!(comment_id, user_id, "Rejected deletion of another user's comment");
            return Err(ServiceError::Forbidden("comment"));
        }

        self.ctx.comment_repo().delete_comment(comment.id).await?;
        info!(comment_id, "Comment deleted");
        Ok(())
    }
}
