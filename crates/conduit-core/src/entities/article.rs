//! Article entity - a published post with its derived, viewer-relative fields

use chrono::{DateTime, Utc};

use crate::entities::Profile;
use crate::value_objects::Slug;

/// Full article as returned by single-article lookups.
///
/// `favorited`, `favorites_count`, `tag_list` and `author.following` are
/// derived at query time and are not stored on the article row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: i64,
    pub user_id: i64,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub body: String,
    pub tag_list: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub favorited: bool,
    pub favorites_count: i64,
    pub author: Profile,
}

impl Article {
    /// Check if the article is owned by the given user
    #[inline]
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }
}

/// Article projection used by list queries (no body)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleSummary {
    pub id: i64,
    pub user_id: i64,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub tag_list: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub favorited: bool,
    pub favorites_count: i64,
    pub author: Profile,
}

impl From<Article> for ArticleSummary {
    fn from(article: Article) -> Self {
        Self {
            id: article.id,
            user_id: article.user_id,
            slug: article.slug,
            title: article.title,
            description: article.description,
            tag_list: article.tag_list,
            created_at: article.created_at,
            updated_at: article.updated_at,
            favorited: article.favorited,
            favorites_count: article.favorites_count,
            author: article.author,
        }
    }
}

impl ArticleSummary {
    /// Split the comma-joined tag column produced by the article queries.
    ///
    /// An empty column yields an empty list, never a list holding one empty tag.
    pub fn parse_tag_list(raw: &str) -> Vec<String> {
        if raw.is_empty() {
            Vec::new()
        } else {
            raw.split(',').map(str::to_string).collect()
        }
    }
}

/// Values for creating an article
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: String,
    pub description: String,
    pub body: String,
    pub tag_list: Vec<String>,
}

impl NewArticle {
    /// Slug derived from the title
    pub fn slug(&self) -> Slug {
        Slug::from_title(&self.title)
    }
}

/// Partial article update. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct ArticleChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub body: Option<String>,
}

impl ArticleChanges {
    /// New slug, present only when the title changes
    pub fn slug(&self) -> Option<Slug> {
        self.title.as_deref().map(Slug::from_title)
    }

    /// Check if no field was supplied
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.body.is_none()
    }
}
