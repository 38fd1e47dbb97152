//! Comment row model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Comment row joined with its author
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: i64,
    pub article_id: i64,
    pub user_id: i64,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub following: bool,
    pub username: String,
    pub bio: String,
    pub image: Option<String>,
}
