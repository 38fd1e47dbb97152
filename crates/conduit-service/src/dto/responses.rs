//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Every payload is
//! wrapped in a single-key envelope named after the resource.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// User Responses
// ============================================================================

/// Authenticated user, including the credential to use on later requests
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub email: String,
    pub token: String,
    pub username: String,
    pub bio: String,
    pub image: Option<String>,
}

/// `{"user": {...}}`
#[derive(Debug, Clone, Serialize)]
pub struct UserEnvelope {
    pub user: UserResponse,
}

/// Public profile as seen by the requesting viewer
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub username: String,
    pub bio: String,
    pub image: Option<String>,
    pub following: bool,
}

/// `{"profile": {...}}`
#[derive(Debug, Clone, Serialize)]
pub struct ProfileEnvelope {
    pub profile: ProfileResponse,
}

// ============================================================================
// Article Responses
// ============================================================================

/// Single article with its body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleResponse {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub body: String,
    pub tag_list: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub favorited: bool,
    pub favorites_count: i64,
    pub author: ProfileResponse,
}

/// `{"article": {...}}`
#[derive(Debug, Clone, Serialize)]
pub struct ArticleEnvelope {
    pub article: ArticleResponse,
}

/// List entry; identical to [`ArticleResponse`] without the body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSummaryResponse {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub tag_list: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub favorited: bool,
    pub favorites_count: i64,
    pub author: ProfileResponse,
}

/// `{"articles": [...], "articlesCount": N}`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlesEnvelope {
    pub articles: Vec<ArticleSummaryResponse>,
    pub articles_count: usize,
}

impl ArticlesEnvelope {
    /// `articlesCount` is the number of articles on the returned page
    pub fn new(articles: Vec<ArticleSummaryResponse>) -> Self {
        Self {
            articles_count: articles.len(),
            articles,
        }
    }
}

// ============================================================================
// Comment Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: i64,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author: ProfileResponse,
}

/// `{"comment": {...}}`
#[derive(Debug, Clone, Serialize)]
pub struct CommentEnvelope {
    pub comment: CommentResponse,
}

/// `{"comments": [...]}`
#[derive(Debug, Clone, Serialize)]
pub struct CommentsEnvelope {
    pub comments: Vec<CommentResponse>,
}

// ============================================================================
// Tag Responses
// ============================================================================

/// `{"tags": [...]}`
#[derive(Debug, Clone, Serialize)]
pub struct TagsEnvelope {
    pub tags: Vec<String>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
