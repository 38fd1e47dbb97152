//! Service context - dependency container for services
//!
//! Holds the repositories and the token service needed by services.

use std::sync::Arc;
use std::time::Duration;

use conduit_common::auth::JwtService;
use conduit_core::traits::{ArticleRepository, CommentRepository, TagRepository, UserRepository};
use conduit_db::{
    SqliteArticleRepository, SqliteCommentRepository, SqlitePool, SqliteTagRepository,
    SqliteUserRepository,
};

/// Service context containing all dependencies
///
/// Cloned into every request handler. Repositories are trait objects so the
/// services never depend on the storage engine directly.
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: SqlitePool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    article_repo: Arc<dyn ArticleRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    tag_repo: Arc<dyn TagRepository>,

    // Services
    jwt_service: Arc<JwtService>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: SqlitePool,
        user_repo: Arc<dyn UserRepository>,
        article_repo: Arc<dyn ArticleRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        tag_repo: Arc<dyn TagRepository>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            pool,
            user_repo,
            article_repo,
            comment_repo,
            tag_repo,
            jwt_service,
        }
    }

    /// Wire the SQLite repositories over one pool, each with the given per-call timeout
    pub fn sqlite(pool: SqlitePool, jwt_service: JwtService, query_timeout: Duration) -> Self {
        Self::new(
            pool.clone(),
            Arc::new(SqliteUserRepository::new(pool.clone()).with_timeout(query_timeout)),
            Arc::new(SqliteArticleRepository::new(pool.clone()).with_timeout(query_timeout)),
            Arc::new(SqliteCommentRepository::new(pool.clone()).with_timeout(query_timeout)),
            Arc::new(SqliteTagRepository::new(pool).with_timeout(query_timeout)),
            Arc::new(jwt_service),
        )
    }

    // === Database Pool ===

    /// Get the SQLite connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the article repository
    pub fn article_repo(&self) -> &dyn ArticleRepository {
        self.article_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the tag repository
    pub fn tag_repo(&self) -> &dyn TagRepository {
        self.tag_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"SqlitePool")
            .field("repositories", &"...")
            .field("jwt_service", &self.jwt_service)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conduit_db::{create_pool, run_migrations, DatabaseConfig};

    #[tokio::test]
    async fn test_sqlite_context_shares_one_database() {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        let ctx = ServiceContext::sqlite(
            pool,
            JwtService::new("secret", 3600),
            Duration::from_secs(5),
        );

        assert_eq!(ctx.jwt_service().expiry_seconds(), 3600);
        assert!(ctx.tag_repo().get_all_tags().await.unwrap().is_empty());
        let err = ctx.user_repo().get_user_by_username("nobody").await.unwrap_err();
        assert!(err.is_not_found());
    }
}
