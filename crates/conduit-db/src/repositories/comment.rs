//! SQLite implementation of CommentRepository

use std::time::Duration;

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::instrument;

use conduit_core::entities::Comment;
use conduit_core::error::DomainError;
use conduit_core::traits::{CommentRepository, RepoResult};

use crate::models::CommentModel;

use super::error::{map_db_error, timed};
use super::{timestamp_now, DEFAULT_QUERY_TIMEOUT};

macro_rules! comment_select {
    () => {
        r"
        SELECT c.CommentId AS id,
               c.ArticleId AS article_id,
               c.UserId AS user_id,
               c.Body AS body,
               c.CreatedAt AS created_at,
               c.UpdatedAt AS updated_at,
               EXISTS(
                   SELECT 1 FROM Follower f
                   WHERE f.UserId = $1 AND f.FollowUserId = c.UserId
               ) AS following,
               u.Username AS username,
               u.Bio AS bio,
               u.Image AS image
        FROM Comment c
        JOIN User u ON u.UserId = c.UserId
        "
    };
}

const COMMENT_BY_ID: &str = concat!(comment_select!(), "WHERE c.CommentId = $2");

const COMMENTS_FOR_ARTICLE: &str =
    concat!(comment_select!(), "WHERE c.ArticleId = $2 ORDER BY c.CommentId ASC");

/// SQLite implementation of CommentRepository
#[derive(Clone)]
pub struct SqliteCommentRepository {
    pool: SqlitePool,
    timeout: Duration,
}

impl SqliteCommentRepository {
    /// Create a new SqliteCommentRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            timeout: DEFAULT_QUERY_TIMEOUT,
        }
    }

    /// Bound every call by `timeout` instead of the default
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl CommentRepository for SqliteCommentRepository {
    #[instrument(skip(self, body))]
    async fn create_comment(
        &self,
        article_id: i64,
        user_id: i64,
        body: &str,
    ) -> RepoResult<Comment> {
        let id: i64 = timed("create_comment", self.timeout, async {
            let now = timestamp_now();
            sqlx::query_scalar(
                r"
                INSERT INTO Comment (ArticleId, UserId, Body, CreatedAt, UpdatedAt)
                VALUES ($1, $2, $3, $4, $4)
                RETURNING CommentId
                ",
            )
            .bind(article_id)
            .bind(user_id)
            .bind(body)
            .bind(&now)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
        })
        .await?;

        self.get_comment_by_id(id, Some(user_id)).await
    }

    #[instrument(skip(self))]
    async fn get_comment_by_id(&self, id: i64, viewer_id: Option<i64>) -> RepoResult<Comment> {
        timed("get_comment_by_id", self.timeout, async {
            sqlx::query_as::<_, CommentModel>(COMMENT_BY_ID)
                .bind(viewer_id)
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_db_error)?
                .map(Comment::from)
                .ok_or(DomainError::CommentNotFound)
        })
        .await
    }

    #[instrument(skip(self))]
    async fn get_comments_for_article(
        &self,
        article_id: i64,
        viewer_id: Option<i64>,
    ) -> RepoResult<Vec<Comment>> {
        timed("get_comments_for_article", self.timeout, async {
            let rows = sqlx::query_as::<_, CommentModel>(COMMENTS_FOR_ARTICLE)
                .bind(viewer_id)
                .bind(article_id)
                .fetch_all(&self.pool)
                .await
                .map_err(map_db_error)?;

            Ok(rows.into_iter().map(Comment::from).collect())
        })
        .await
    }

    #[instrument(skip(self))]
    async fn delete_comment(&self, id: i64) -> RepoResult<()> {
        timed("delete_comment", self.timeout, async {
            sqlx::query("DELETE FROM Comment WHERE CommentId = $1")
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(map_db_error)?;

            Ok(())
        })
        .await
    }
}
