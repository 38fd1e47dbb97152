//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Every `viewer_id` is the id of the requesting
//! user, or `None` for anonymous requests; it only influences derived fields
//! such as `favorited` and `following`.

use async_trait::async_trait;

use crate::entities::{
    Article, ArticleChanges, ArticleSummary, Comment, NewArticle, NewUser, Profile, User,
    UserChanges,
};
use crate::error::DomainError;
use crate::validation::{ArticleFilters, PaginationFilters};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Article Repository
// ============================================================================

#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Fetch one article with its viewer-relative fields.
    /// Fails with `ArticleNotFound` when no article has this slug.
    async fn get_article_by_slug(&self, slug: &str, viewer_id: Option<i64>)
        -> RepoResult<Article>;

    /// List articles newest first, applying every present filter
    async fn get_articles(
        &self,
        filters: &ArticleFilters,
        viewer_id: Option<i64>,
    ) -> RepoResult<Vec<ArticleSummary>>;

    /// List articles written by users the viewer follows, newest first
    async fn get_feed(
        &self,
        pagination: &PaginationFilters,
        viewer_id: i64,
    ) -> RepoResult<Vec<ArticleSummary>>;

    /// Insert an article with its tags atomically, then reload it
    async fn create_article(&self, article: &NewArticle, user_id: i64) -> RepoResult<Article>;

    /// Apply `changes` to the article owned by `user_id`, then reload it.
    /// A non-matching owner updates nothing.
    async fn update_article(
        &self,
        changes: &ArticleChanges,
        article_id: i64,
        user_id: i64,
    ) -> RepoResult<Article>;

    /// Delete the article if owned by `user_id`
    async fn delete_article(&self, article_id: i64, user_id: i64) -> RepoResult<()>;

    /// Idempotent
    async fn favorite_article(&self, article_id: i64, user_id: i64) -> RepoResult<()>;

    /// Idempotent
    async fn unfavorite_article(&self, article_id: i64, user_id: i64) -> RepoResult<()>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Insert a comment, then reload it with its author profile
    async fn create_comment(&self, article_id: i64, user_id: i64, body: &str)
        -> RepoResult<Comment>;

    /// Fails with `CommentNotFound` when no row matches
    async fn get_comment_by_id(&self, id: i64, viewer_id: Option<i64>) -> RepoResult<Comment>;

    /// Comments on an article, oldest first
    async fn get_comments_for_article(
        &self,
        article_id: i64,
        viewer_id: Option<i64>,
    ) -> RepoResult<Vec<Comment>>;

    /// Unconditional delete; ownership is checked by the caller
    async fn delete_comment(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Tag Repository
// ============================================================================

#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Distinct tags in creation order
    async fn get_all_tags(&self) -> RepoResult<Vec<String>>;
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user. Fails with `DuplicateEmail` or `DuplicateUsername`.
    async fn register_user(&self, user: &NewUser) -> RepoResult<User>;

    /// Look up by email and check the password.
    /// An unknown email and a wrong password both fail with `InvalidCredentials`.
    async fn get_user_by_credentials(&self, email: &str, password: &str) -> RepoResult<User>;

    async fn get_user_by_id(&self, id: i64) -> RepoResult<User>;

    async fn get_user_by_username(&self, username: &str) -> RepoResult<User>;

    /// Apply a partial update and return the stored user
    async fn update_user(&self, id: i64, changes: &UserChanges) -> RepoResult<User>;

    /// Profile of `username` as seen by the viewer
    async fn get_profile(&self, username: &str, viewer_id: Option<i64>) -> RepoResult<Profile>;

    /// Insert-or-ignore the follow edge
    async fn follow_user(&self, user_id: i64, follow_user_id: i64) -> RepoResult<()>;

    /// Delete-if-exists the follow edge
    async fn unfollow_user(&self, user_id: i64, follow_user_id: i64) -> RepoResult<()>;

    async fn is_following(&self, user_id: i64, follow_user_id: i64) -> RepoResult<bool>;
}
