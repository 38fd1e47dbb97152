//! SQLite implementation of ArticleRepository

use std::time::Duration;

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::instrument;

use conduit_core::entities::{Article, ArticleChanges, ArticleSummary, NewArticle};
use conduit_core::error::DomainError;
use conduit_core::traits::{ArticleRepository, RepoResult};
use conduit_core::validation::{ArticleFilters, PaginationFilters};

use crate::models::{ArticleModel, ArticleSummaryModel};

use super::error::{article_conflict, map_db_error, map_unique_violation, timed};
use super::{timestamp_now, DEFAULT_QUERY_TIMEOUT};

/// Article projection shared by every read. `$1` is the viewer id (NULL when
/// anonymous) and drives `favorited` and `following`.
macro_rules! summary_columns {
    () => {
        r"
        a.ArticleId AS id,
        a.UserId AS user_id,
        a.Slug AS slug,
        a.Title AS title,
        a.Description AS description,
        a.CreatedAt AS created_at,
        a.UpdatedAt AS updated_at,
        EXISTS(
            SELECT 1 FROM ArticleFavorite fav
            WHERE fav.ArticleId = a.ArticleId AND fav.UserId = $1
        ) AS favorited,
        (SELECT COUNT(*) FROM ArticleFavorite fav WHERE fav.ArticleId = a.ArticleId) AS favorites_count,
        COALESCE((
            SELECT GROUP_CONCAT(tg.Tag, ',' ORDER BY atg.rowid)
            FROM ArticleTag atg
            JOIN Tag tg ON tg.TagId = atg.TagId
            WHERE atg.ArticleId = a.ArticleId
        ), '') AS tags,
        EXISTS(
            SELECT 1 FROM Follower fol
            WHERE fol.UserId = $1 AND fol.FollowUserId = a.UserId
        ) AS following,
        u.Username AS username,
        u.Bio AS bio,
        u.Image AS image
        "
    };
}

const ARTICLE_BY_SLUG: &str = concat!(
    "SELECT ",
    summary_columns!(),
    ", a.Body AS body FROM Article a JOIN User u ON u.UserId = a.UserId WHERE a.Slug = $2"
);

const ARTICLE_BY_ID: &str = concat!(
    "SELECT ",
    summary_columns!(),
    ", a.Body AS body FROM Article a JOIN User u ON u.UserId = a.UserId WHERE a.ArticleId = $2"
);

// Each filter is "include all" when its parameter is NULL
const ARTICLES: &str = concat!(
    "SELECT DISTINCT ",
    summary_columns!(),
    r"
    FROM Article a
    JOIN User u ON u.UserId = a.UserId
    LEFT JOIN ArticleTag art ON art.ArticleId = a.ArticleId
    LEFT JOIN Tag t ON t.TagId = art.TagId
    LEFT JOIN ArticleFavorite af ON af.ArticleId = a.ArticleId
    LEFT JOIN User favoriter ON favoriter.UserId = af.UserId
    WHERE ($2 IS NULL OR u.Username = $2)
      AND ($3 IS NULL OR favoriter.Username = $3)
      AND ($4 IS NULL OR t.Tag = $4)
    ORDER BY id DESC
    LIMIT $5 OFFSET $6
    "
);

const FEED: &str = concat!(
    "SELECT ",
    summary_columns!(),
    r"
    FROM Article a
    JOIN User u ON u.UserId = a.UserId
    JOIN Follower f ON f.FollowUserId = a.UserId
    WHERE f.UserId = $1
    ORDER BY a.ArticleId DESC
    LIMIT $2 OFFSET $3
    "
);

/// SQLite implementation of ArticleRepository
#[derive(Clone)]
pub struct SqliteArticleRepository {
    pool: SqlitePool,
    timeout: Duration,
}

impl SqliteArticleRepository {
    /// Create a new SqliteArticleRepository
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

    async fn fetch_by_id(&self, article_id: i64, viewer_id: Option<i64>) -> RepoResult<Article> {
        sqlx::query_as::<_, ArticleModel>(ARTICLE_BY_ID)
            .bind(viewer_id)
            .bind(article_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?
            .map(Article::from)
            .ok_or(DomainError::ArticleNotFound)
    }

    /// Insert the article row, its tags and join rows in one transaction
    async fn insert_article(&self, article: &NewArticle, user_id: i64) -> RepoResult<String> {
        let slug = article.slug().into_inner();
        let now = timestamp_now();

        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let article_id: i64 = sqlx::query_scalar(
            r"
            INSERT INTO Article (UserId, Slug, Title, Description, Body, CreatedAt, UpdatedAt)
            VALUES ($1, $2, $3, $4, $5, $6, $6)
            RETURNING ArticleId
            ",
        )
        .bind(user_id)
        .bind(&slug)
        .bind(&article.title)
        .bind(&article.description)
        .bind(&article.body)
        .bind(&now)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, article_conflict))?;

        for tag in &article.tag_list {
            let existing: Option<i64> = sqlx::query_scalar("SELECT TagId FROM Tag WHERE Tag = $1")
                .bind(tag)
                .fetch_optional(&mut *tx)
                .await
                .map_err(map_db_error)?;

            let tag_id = match existing {
                Some(id) => id,
                None => sqlx::query_scalar("INSERT INTO Tag (Tag) VALUES ($1) RETURNING TagId")
                    .bind(tag)
                    .fetch_one(&mut *tx)
                    .await
                    .map_err(map_db_error)?,
            };

            sqlx::query("INSERT OR IGNORE INTO ArticleTag (ArticleId, TagId) VALUES ($1, $2)")
                .bind(article_id)
                .bind(tag_id)
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(slug)
    }
}

#[async_trait]
impl ArticleRepository for SqliteArticleRepository {
    #[instrument(skip(self))]
    async fn get_article_by_slug(
        &self,
        slug: &str,
        viewer_id: Option<i64>,
    ) -> RepoResult<Article> {
        timed("get_article_by_slug", self.timeout, async {
            sqlx::query_as::<_, ArticleModel>(ARTICLE_BY_SLUG)
                .bind(viewer_id)
                .bind(slug)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_db_error)?
                .map(Article::from)
                .ok_or(DomainError::ArticleNotFound)
        })
        .await
    }

    #[instrument(skip(self))]
    async fn get_articles(
        &self,
        filters: &ArticleFilters,
        viewer_id: Option<i64>,
    ) -> RepoResult<Vec<ArticleSummary>> {
        timed("get_articles", self.timeout, async {
            let rows = sqlx::query_as::<_, ArticleSummaryModel>(ARTICLES)
                .bind(viewer_id)
                .bind(filters.author.as_deref())
                .bind(filters.favorited.as_deref())
                .bind(filters.tag.as_deref())
                .bind(filters.limit())
                .bind(filters.offset())
                .fetch_all(&self.pool)
                .await
                .map_err(map_db_error)?;

            Ok(rows.into_iter().map(ArticleSummary::from).collect())
        })
        .await
    }

    #[instrument(skip(self))]
    async fn get_feed(
        &self,
        pagination: &PaginationFilters,
        viewer_id: i64,
    ) -> RepoResult<Vec<ArticleSummary>> {
        timed("get_feed", self.timeout, async {
            let rows = sqlx::query_as::<_, ArticleSummaryModel>(FEED)
                .bind(viewer_id)
                .bind(pagination.limit)
                .bind(pagination.offset)
                .fetch_all(&self.pool)
                .await
                .map_err(map_db_error)?;

            Ok(rows.into_iter().map(ArticleSummary::from).collect())
        })
        .await
    }

    #[instrument(skip(self, article), fields(title = %article.title))]
    async fn create_article(&self, article: &NewArticle, user_id: i64) -> RepoResult<Article> {
        let slug = timed("create_article", self.timeout, self.insert_article(article, user_id))
            .await?;

        self.get_article_by_slug(&slug, Some(user_id)).await
    }

    #[instrument(skip(self))]
    async fn update_article(
        &self,
        changes: &ArticleChanges,
        article_id: i64,
        user_id: i64,
    ) -> RepoResult<Article> {
        let slug = changes.slug().map(|s| s.into_inner());

        timed("update_article", self.timeout, async {
            // Scoped to the owner; a mismatch updates zero rows
            sqlx::query(
                r"
                UPDATE Article
                SET Title = COALESCE($1, Title),
                    Slug = COALESCE($2, Slug),
                    Description = COALESCE($3, Description),
                    Body = COALESCE($4, Body),
                    UpdatedAt = $5
                WHERE ArticleId = $6 AND UserId = $7
                ",
            )
            .bind(changes.title.as_deref())
            .bind(slug.as_deref())
            .bind(changes.description.as_deref())
            .bind(changes.body.as_deref())
            .bind(timestamp_now())
            .bind(article_id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_unique_violation(e, article_conflict))?;

            self.fetch_by_id(article_id, Some(user_id)).await
        })
        .await
    }

    #[instrument(skip(self))]
    async fn delete_article(&self, article_id: i64, user_id: i64) -> RepoResult<()> {
        timed("delete_article", self.timeout, async {
            sqlx::query("DELETE FROM Article WHERE ArticleId = $1 AND UserId = $2")
                .bind(article_id)
                .bind(user_id)
                .execute(&self.pool)
                .await
                .map_err(map_db_error)?;

            Ok(())
        })
        .await
    }

    #[instrument(skip(self))]
    async fn favorite_article(&self, article_id: i64, user_id: i64) -> RepoResult<()> {
        timed("favorite_article", self.timeout, async {
            sqlx::query("INSERT OR IGNORE INTO ArticleFavorite (ArticleId, UserId) VALUES ($1, $2)")
                .bind(article_id)
                .bind(user_id)
                .execute(&self.pool)
                .await
                .map_err(map_db_error)?;

            Ok(())
        })
        .await
    }

    #[instrument(skip(self))]
    async fn unfavorite_article(&self, article_id: i64, user_id: i64) -> RepoResult<()> {
        timed("unfavorite_article", self.timeout, async {
            sqlx::query("DELETE FROM ArticleFavorite WHERE ArticleId = $1 AND UserId = $2")
                .bind(article_id)
                .bind(user_id)
                .execute(&self.pool)
                .await
                .map_err(map_db_error)?;

            Ok(())
        })
        .await
    }
}
