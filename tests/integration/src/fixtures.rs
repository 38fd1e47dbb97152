//! Test fixtures and data generators
//!
//! Request builders and typed response envelopes.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::helpers::{assert_json, TestServer};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Password used by every fixture user
pub const TEST_PASSWORD: &str = "TestPass123!";

/// Registration body
pub fn register_body(username: &str) -> Value {
    json!({
        "user": {
            "username": username,
            "email": format!("{username}@example.com"),
            "password": TEST_PASSWORD,
        }
    })
}

/// Login body
pub fn login_body(email: &str, password: &str) -> Value {
    json!({ "user": { "email": email, "password": password } })
}

/// Article creation body
pub fn article_body(title: &str, tags: &[&str]) -> Value {
    json!({
        "article": {
            "title": title,
            "description": "Ever wonder how?",
            "body": "You have to believe",
            "tagList": tags,
        }
    })
}

/// Comment creation body
pub fn comment_body(body: &str) -> Value {
    json!({ "comment": { "body": body } })
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserEnvelope {
    pub user: User,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub token: String,
    pub username: String,
    pub bio: String,
    pub image: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProfileEnvelope {
    pub profile: Profile,
}

#[derive(Debug, Deserialize)]
pub struct Profile {
    pub username: String,
    pub bio: String,
    pub image: Option<String>,
    pub following: bool,
}

#[derive(Debug, Deserialize)]
pub struct ArticleEnvelope {
    pub article: Article,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub body: Option<String>,
    pub tag_list: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
    pub favorited: bool,
    pub favorites_count: i64,
    pub author: Profile,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlesEnvelope {
    pub articles: Vec<Article>,
    pub articles_count: usize,
}

#[derive(Debug, Deserialize)]
pub struct CommentEnvelope {
    pub comment: Comment,
}

#[derive(Debug, Deserialize)]
pub struct CommentsEnvelope {
    pub comments: Vec<Comment>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub body: String,
    pub created_at: String,
    pub updated_at: String,
    pub author: Profile,
}

#[derive(Debug, Deserialize)]
pub struct TagsEnvelope {
    pub tags: Vec<String>,
}

/// Register a unique user and return it with its token
pub async fn register_user(server: &TestServer, prefix: &str) -> anyhow::Result<User> {
    let username = format!("{prefix}{}", unique_suffix());
    let response = server.post("/api/users", &register_body(&username)).await?;
    let envelope: UserEnvelope = assert_json(response, reqwest::StatusCode::CREATED).await?;
    Ok(envelope.user)
}

/// Publish an article as `token`
pub async fn create_article(
    server: &TestServer,
    token: &str,
    title: &str,
    tags: &[&str],
) -> anyhow::Result<Article> {
    let response = server
        .post_auth("/api/articles", token, &article_body(title, tags))
        .await?;
    let envelope: ArticleEnvelope = assert_json(response, reqwest::StatusCode::CREATED).await?;
    Ok(envelope.article)
}
