//! SQLite implementation of TagRepository

use std::time::Duration;

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::instrument;

use conduit_core::traits::{RepoResult, TagRepository};

use super::error::{map_db_error, timed};
use super::DEFAULT_QUERY_TIMEOUT;

/// SQLite implementation of TagRepository
#[derive(Clone)]
pub struct SqliteTagRepository {
    pool: SqlitePool,
    timeout: Duration,
}

impl SqliteTagRepository {
    /// Create a new SqliteTagRepository
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
impl TagRepository for SqliteTagRepository {
    #[instrument(skip(self))]
    async fn get_all_tags(&self) -> RepoResult<Vec<String>> {
        timed("get_all_tags", self.timeout, async {
            sqlx::query_scalar::<_, String>(
                r"
                SELECT Tag
                FROM Tag
                GROUP BY Tag
                ORDER BY MIN(TagId) ASC
                ",
            )
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)
        })
        .await
    }
}
