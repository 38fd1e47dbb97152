//! Article service
//!
//! Listing, authoring and favoriting articles. Ownership is checked here
//! before any mutating repository call.

use conduit_core::{Article, ArticleFilters, PaginationFilters, ViewerContext};
use tracing::{info, instrument, warn};

use crate::dto::{
    ArticleEnvelope, ArticlesEnvelope, CreateArticleRequest, UpdateArticleRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::require_user;

/// Article service
pub struct ArticleService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ArticleService<'a> {
    /// Create a new ArticleService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List articles, most recent first
    #[instrument(skip(self, viewer))]
    pub async fn list_articles(
        &self,
        viewer: &ViewerContext,
        filters: &ArticleFilters,
    ) -> ServiceResult<ArticlesEnvelope> {
        let articles = self
            .ctx
            .article_repo()
            .get_articles(filters, viewer.user_id())
            .await?;

        Ok(ArticlesEnvelope::new(
            articles.into_iter().map(Into::into).collect(),
        ))
    }

    /// Articles written by users the viewer follows
    #[instrument(skip(self, viewer))]
    pub async fn feed(
        &self,
        viewer: &ViewerContext,
        pagination: &PaginationFilters,
    ) -> ServiceResult<ArticlesEnvelope> {
        let user_id = require_user(viewer)?;
        let articles = self.ctx.article_repo().get_feed(pagination, user_id).await?;

        Ok(ArticlesEnvelope::new(
            articles.into_iter().map(Into::into).collect(),
        ))
    }

    /// Get a single article
    #[instrument(skip(self, viewer))]
    pub async fn get_article(&self, viewer: &ViewerContext, slug: &str) -> ServiceResult<ArticleEnvelope> {
        let article = self
            .ctx
            .article_repo()
            .get_article_by_slug(slug, viewer.user_id())
            .await?;

        Ok(ArticleEnvelope {
            article: article.into(),
        })
    }

    /// Publish an article owned by the viewer
    #[instrument(skip(self, viewer, request))]
    pub async fn create_article(
        &self,
        viewer: &ViewerContext,
        request: CreateArticleRequest,
    ) -> ServiceResult<ArticleEnvelope> {
        let user_id = require_user(viewer)?;
        let new_article = request.into_new_article();

        let article = self
            .ctx
            .article_repo()
            .create_article(&new_article, user_id)
            .await?;

        info!(article_id = article.id, slug = %article.slug, "Article created");

        Ok(ArticleEnvelope {
            article: article.into(),
        })
    }

    /// Update an article owned by the viewer
    #[instrument(skip(self, viewer, request))]
    pub async fn update_article(
        &self,
        viewer: &ViewerContext,
        slug: &str,
        request: UpdateArticleRequest,
    ) -> ServiceResult<ArticleEnvelope> {
        let user_id = require_user(viewer)?;
        let existing = self.owned_article(slug, user_id).await?;

        let article = self
            .ctx
            .article_repo()
            .update_article(&request.into_changes(), existing.id, user_id)
            .await?;

        info!(article_id = article.id, slug = %article.slug, "Article updated");

        Ok(ArticleEnvelope {
            article: article.into(),
        })
    }

    /// Delete an article owned by the viewer
    #[instrument(skip(self, viewer))]
    pub async fn delete_article(&self, viewer: &ViewerContext, slug: &str) -> ServiceResult<()> {
        let user_id = require_user(viewer)?;
        let existing = self.owned_article(slug, user_id).await?;

        self.ctx
            .article_repo()
            .delete_article(existing.id, user_id)
            .await?;

        info!(article_id = existing.id, "Article deleted");
        Ok(())
    }

    /// Favorite an article. Favoriting twice is a no-op.
    #[instrument(skip(self, viewer))]
    pub async fn favorite_article(
        &self,
        viewer: &ViewerContext,
        slug: &str,
    ) -> ServiceResult<ArticleEnvelope> {
        let user_id = require_user(viewer)?;
        let repo = self.ctx.article_repo();

        let article = repo.get_article_by_slug(slug, Some(user_id)).await?;
        repo.favorite_article(article.id, user_id).await?;
        let article = repo.get_article_by_slug(slug, Some(user_id)).await?;

        Ok(ArticleEnvelope {
            article: article.into(),
        })
    }

    /// Remove the viewer's favorite. Unfavoriting a non-favorite is a no-op.
    #[instrument(skip(self, viewer))]
    pub async fn unfavorite_article(
        &self,
        viewer: &ViewerContext,
        slug: &str,
    ) -> ServiceResult<ArticleEnvelope> {
        let user_id = require_user(viewer)?;
        let repo = self.ctx.article_repo();

        let article = repo.get_article_by_slug(slug, Some(user_id)).await?;
        repo.unfavorite_article(article.id, user_id).await?;
        let article = repo.get_article_by_slug(slug, Some(user_id)).await?;

        Ok(ArticleEnvelope {
            article: article.into(),
        })
    }

    async fn owned_article(&self, slug: &str, user_id: i64) -> ServiceResult<Article> {
        let article = self
            .ctx
            .article_repo()
            .get_article_by_slug(slug, Some(user_id))
            .await?;

        if !article.is_owned_by(user_id) {
            warn!(article_id = article.id, user_id, "Rejected change to another user's article");
            return Err(ServiceError::Forbidden("article"));
        }
        Ok(article)
    }
}
