//! Article row models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Full article row joined with its author and derived fields
#[derive(Debug, Clone, FromRow)]
pub struct ArticleModel {
    pub id: i64,
    pub user_id: i64,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub favorited: bool,
    pub favorites_count: i64,
    /// Comma-joined tag texts in insertion order, empty when untagged
    pub tags: String,
    pub following: bool,
    pub username: String,
    pub bio: String,
    pub image: Option<String>,
}

/// List row: the article projection without the body
#[derive(Debug, Clone, FromRow)]
pub struct ArticleSummaryModel {
    pub id: i64,
    pub user_id: i64,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub favorited: bool,
    pub favorites_count: i64,
    pub tags: String,
    pub following: bool,
    pub username: String,
    pub bio: String,
    pub image: Option<String>,
}
