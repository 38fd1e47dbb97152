//! Comment entity - a reply attached to an article

use chrono::{DateTime, Utc};

use crate::entities::Profile;

/// Comment with its author profile as seen by the viewer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: i64,
    pub article_id: i64,
    pub user_id: i64,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author: Profile,
}

impl Comment {
    /// Check if the comment belongs to the given article
    #[inline]
    pub fn belongs_to(&self, article_id: i64) -> bool {
        self.article_id == article_id
    }

    /// Check if the comment was written by the given user
    #[inline]
    pub fn is_authored_by(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }
}
