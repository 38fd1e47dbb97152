//! API Integration Tests
//!
//! Each test starts its own server over a private in-memory SQLite database.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_errors, assert_json, assert_status, fixtures::*, TestServer, TEST_PASSWORD,
};
use reqwest::StatusCode;
use serde_json::json;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["database"], "healthy");
}

#[tokio::test]
async fn test_request_id_is_returned() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/tags").await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    let server = TestServer::start().await.unwrap();

    let response = server.post("/api/users", &register_body("jake")).await.unwrap();
    let envelope: UserEnvelope = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(envelope.user.username, "jake");
    assert_eq!(envelope.user.email, "jake@example.com");
    assert_eq!(envelope.user.bio, "");
    assert!(envelope.user.image.is_none());
    assert!(!envelope.user.token.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let server = TestServer::start().await.unwrap();
    server.post("/api/users", &register_body("jake")).await.unwrap();

    let body = json!({
        "user": { "username": "jake", "email": "other@example.com", "password": TEST_PASSWORD }
    });
    let response = server.post("/api/users", &body).await.unwrap();
    let errors = assert_errors(response, StatusCode::UNPROCESSABLE_ENTITY).await.unwrap();
    assert!(errors.contains_key("username"));
}

#[tokio::test]
async fn test_register_validation() {
    let server = TestServer::start().await.unwrap();

    let body = json!({ "user": { "username": "", "email": "nope", "password": "short" } });
    let response = server.post("/api/users", &body).await.unwrap();
    let errors = assert_errors(response, StatusCode::UNPROCESSABLE_ENTITY).await.unwrap();

    assert_eq!(errors["username"], "must not be empty");
    assert_eq!(errors["email"], "must be a valid email address");
    assert!(errors.contains_key("password"));
}

#[tokio::test]
async fn test_login() {
    let server = TestServer::start().await.unwrap();
    let user = register_user(&server, "login").await.unwrap();

    let response = server
        .post("/api/users/login", &login_body(&user.email, TEST_PASSWORD))
        .await
        .unwrap();
    let envelope: UserEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(envelope.user.username, user.username);
    assert!(!envelope.user.token.is_empty());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    let server = TestServer::start().await.unwrap();
    let user = register_user(&server, "login").await.unwrap();

    let response = server
        .post("/api/users/login", &login_body(&user.email, "WrongPass123!"))
        .await
        .unwrap();
    let errors = assert_errors(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(errors["body"], "invalid credentials");

    let response = server
        .post("/api/users/login", &login_body("nobody@example.com", TEST_PASSWORD))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_current_user_requires_auth() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/api/user").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server.get_auth("/api/user", "not-a-jwt").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_current_user() {
    let server = TestServer::start().await.unwrap();
    let user = register_user(&server, "me").await.unwrap();

    let response = server.get_auth("/api/user", &user.token).await.unwrap();
    let envelope: UserEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(envelope.user.username, user.username);
    assert_eq!(envelope.user.token, user.token);
}

#[tokio::test]
async fn test_update_user() {
    let server = TestServer::start().await.unwrap();
    let user = register_user(&server, "update").await.unwrap();

    let body = json!({ "user": { "bio": "I like to skateboard", "image": "https://i.imgur.com/a.png" } });
    let response = server.put_auth("/api/user", &user.token, &body).await.unwrap();
    let envelope: UserEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(envelope.user.bio, "I like to skateboard");
    assert_eq!(envelope.user.image.as_deref(), Some("https://i.imgur.com/a.png"));

    let body = json!({ "user": { "image": null } });
    let response = server.put_auth("/api/user", &user.token, &body).await.unwrap();
    let envelope: UserEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(envelope.user.image.is_none());
    assert_eq!(envelope.user.bio, "I like to skateboard");
}

#[tokio::test]
async fn test_update_user_password() {
    let server = TestServer::start().await.unwrap();
    let user = register_user(&server, "pw").await.unwrap();

    let body = json!({ "user": { "password": "BrandNewPass1" } });
    let response = server.put_auth("/api/user", &user.token, &body).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .post("/api/users/login", &login_body(&user.email, "BrandNewPass1"))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .post("/api/users/login", &login_body(&user.email, TEST_PASSWORD))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Request Body Tests
// ============================================================================

#[tokio::test]
async fn test_body_with_unknown_key() {
    let server = TestServer::start().await.unwrap();

    let body = json!({ "user": { "username": "jake", "email": "jake@example.com", "password": TEST_PASSWORD, "admin": true } });
    let response = server.post("/api/users", &body).await.unwrap();
    let errors = assert_errors(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(errors["body"], "body contains unknown key \"admin\"");
}

#[tokio::test]
async fn test_body_empty_and_trailing() {
    let server = TestServer::start().await.unwrap();

    let response = server.post_raw("/api/users/login", "").await.unwrap();
    let errors = assert_errors(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(errors["body"], "body must not be empty");

    let response = server
        .post_raw("/api/users/login", r#"{"user":{"email":"a@b.c","password":"x"}} {}"#)
        .await
        .unwrap();
    let errors = assert_errors(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(errors["body"], "body must only contain a single JSON value");
}

#[tokio::test]
async fn test_body_badly_formed() {
    let server = TestServer::start().await.unwrap();

    let response = server.post_raw("/api/users/login", "{\"user\":").await.unwrap();
    let errors = assert_errors(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert!(errors["body"].starts_with("body contains badly-formed JSON"));
}

// ============================================================================
// Profile Tests
// ============================================================================

#[tokio::test]
async fn test_profile_follow_unfollow() {
    let server = TestServer::start().await.unwrap();
    let fan = register_user(&server, "fan").await.unwrap();
    let celeb = register_user(&server, "celeb").await.unwrap();
    let path = format!("/api/profiles/{}", celeb.username);

    let response = server.get(&path).await.unwrap();
    let envelope: ProfileEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!envelope.profile.following);

    let response = server
        .post_auth(&format!("{path}/follow"), &fan.token, &json!({}))
        .await
        .unwrap();
    let envelope: ProfileEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(envelope.profile.following);

    let response = server.get_auth(&path, &fan.token).await.unwrap();
    let envelope: ProfileEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(envelope.profile.following);

    let response = server
        .delete_auth(&format!("{path}/follow"), &fan.token)
        .await
        .unwrap();
    let envelope: ProfileEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!envelope.profile.following);
}

#[tokio::test]
async fn test_profile_not_found() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/profiles/nobody").await.unwrap();
    let errors = assert_errors(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(errors["body"], "user not found");
}

#[tokio::test]
async fn test_follow_requires_auth() {
    let server = TestServer::start().await.unwrap();
    let celeb = register_user(&server, "celeb").await.unwrap();

    let response = server
        .post(&format!("/api/profiles/{}/follow", celeb.username), &json!({}))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Article Tests
// ============================================================================

#[tokio::test]
async fn test_article_lifecycle() {
    let server = TestServer::start().await.unwrap();
    let author = register_user(&server, "author").await.unwrap();

    let article = create_article(&server, &author.token, "How to train your dragon", &["dragons", "training"])
        .await
        .unwrap();
    assert_eq!(article.slug, "how-to-train-your-dragon");
    assert_eq!(article.body.as_deref(), Some("You have to believe"));
    assert_eq!(article.tag_list, vec!["dragons", "training"]);
    assert_eq!(article.author.username, author.username);
    assert!(!article.favorited);
    assert_eq!(article.favorites_count, 0);

    let response = server.get("/api/articles/how-to-train-your-dragon").await.unwrap();
    let envelope: ArticleEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(envelope.article.title, "How to train your dragon");

    let body = json!({ "article": { "title": "Did you train your dragon" } });
    let response = server
        .put_auth("/api/articles/how-to-train-your-dragon", &author.token, &body)
        .await
        .unwrap();
    let envelope: ArticleEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(envelope.article.slug, "did-you-train-your-dragon");
    assert_eq!(envelope.article.description, "Ever wonder how?");

    let response = server
        .delete_auth("/api/articles/did-you-train-your-dragon", &author.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get("/api/articles/did-you-train-your-dragon").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_article_duplicate_title() {
    let server = TestServer::start().await.unwrap();
    let author = register_user(&server, "author").await.unwrap();
    create_article(&server, &author.token, "Same Title", &[]).await.unwrap();

    let response = server
        .post_auth("/api/articles", &author.token, &article_body("Same Title", &[]))
        .await
        .unwrap();
    let errors = assert_errors(response, StatusCode::UNPROCESSABLE_ENTITY).await.unwrap();
    assert!(errors.contains_key("slug"));
}

#[tokio::test]
async fn test_article_changes_forbidden_for_non_owner() {
    let server = TestServer::start().await.unwrap();
    let author = register_user(&server, "author").await.unwrap();
    let other = register_user(&server, "other").await.unwrap();
    let article = create_article(&server, &author.token, "Mine", &[]).await.unwrap();
    let path = format!("/api/articles/{}", article.slug);

    let body = json!({ "article": { "body": "hijacked" } });
    let response = server.put_auth(&path, &other.token, &body).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.delete_auth(&path, &other.token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.get(&path).await.unwrap();
    let envelope: ArticleEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(envelope.article.body.as_deref(), Some("You have to believe"));
}

#[tokio::test]
async fn test_create_article_requires_auth() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .post("/api/articles", &article_body("Anonymous", &[]))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_favorite_article() {
    let server = TestServer::start().await.unwrap();
    let author = register_user(&server, "author").await.unwrap();
    let fan = register_user(&server, "fan").await.unwrap();
    let article = create_article(&server, &author.token, "Popular", &[]).await.unwrap();
    let path = format!("/api/articles/{}/favorite", article.slug);

    let response = server.post_auth(&path, &fan.token, &json!({})).await.unwrap();
    let envelope: ArticleEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(envelope.article.favorited);
    assert_eq!(envelope.article.favorites_count, 1);

    let response = server
        .get(&format!("/api/articles?favorited={}", fan.username))
        .await
        .unwrap();
    let list: ArticlesEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.articles_count, 1);
    assert!(!list.articles[0].favorited);

    let response = server.delete_auth(&path, &fan.token).await.unwrap();
    let envelope: ArticleEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!envelope.article.favorited);
    assert_eq!(envelope.article.favorites_count, 0);
}

#[tokio::test]
async fn test_list_articles_with_filters() {
    let server = TestServer::start().await.unwrap();
    let jake = register_user(&server, "jake").await.unwrap();
    let jane = register_user(&server, "jane").await.unwrap();
    create_article(&server, &jake.token, "Rust Ownership", &["rust"]).await.unwrap();
    create_article(&server, &jake.token, "Go Channels", &["go"]).await.unwrap();
    create_article(&server, &jane.token, "Rust Lifetimes", &["rust"]).await.unwrap();

    let response = server.get("/api/articles").await.unwrap();
    let list: ArticlesEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.articles_count, 3);
    assert!(list.articles.iter().all(|a| a.body.is_none()));

    let response = server.get("/api/articles?tag=rust").await.unwrap();
    let list: ArticlesEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.articles_count, 2);

    let response = server
        .get(&format!("/api/articles?author={}", jake.username))
        .await
        .unwrap();
    let list: ArticlesEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.articles_count, 2);
    assert!(list.articles.iter().all(|a| a.author.username == jake.username));

    let response = server.get("/api/articles?limit=1&offset=1").await.unwrap();
    let list: ArticlesEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.articles_count, 1);
}

#[tokio::test]
async fn test_list_articles_rejects_bad_pagination() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/api/articles?limit=abc").await.unwrap();
    let errors = assert_errors(response, StatusCode::UNPROCESSABLE_ENTITY).await.unwrap();
    assert!(errors.contains_key("limit"));
}

#[tokio::test]
async fn test_feed() {
    let server = TestServer::start().await.unwrap();
    let reader = register_user(&server, "reader").await.unwrap();
    let writer = register_user(&server, "writer").await.unwrap();
    create_article(&server, &writer.token, "Followed Post", &[]).await.unwrap();

    let response = server.get_auth("/api/articles/feed", &reader.token).await.unwrap();
    let feed: ArticlesEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(feed.articles_count, 0);

    server
        .post_auth(
            &format!("/api/profiles/{}/follow", writer.username),
            &reader.token,
            &json!({}),
        )
        .await
        .unwrap();

    let response = server.get_auth("/api/articles/feed", &reader.token).await.unwrap();
    let feed: ArticlesEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(feed.articles_count, 1);
    assert!(feed.articles[0].author.following);

    let response = server.get("/api/articles/feed").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_invalid_token_is_anonymous_on_public_routes() {
    let server = TestServer::start().await.unwrap();
    let author = register_user(&server, "author").await.unwrap();
    let article = create_article(&server, &author.token, "Public", &[]).await.unwrap();

    let response = server
        .get_auth(&format!("/api/articles/{}", article.slug), "garbage")
        .await
        .unwrap();
    let envelope: ArticleEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!envelope.article.favorited);
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_comment_lifecycle() {
    let server = TestServer::start().await.unwrap();
    let author = register_user(&server, "author").await.unwrap();
    let reader = register_user(&server, "reader").await.unwrap();
    let article = create_article(&server, &author.token, "Discuss", &[]).await.unwrap();
    let path = format!("/api/articles/{}/comments", article.slug);

    let response = server
        .post_auth(&path, &reader.token, &comment_body("Thank you so much!"))
        .await
        .unwrap();
    let envelope: CommentEnvelope = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(envelope.comment.body, "Thank you so much!");
    assert_eq!(envelope.comment.author.username, reader.username);
    let comment_id = envelope.comment.id;

    let response = server.get(&path).await.unwrap();
    let list: CommentsEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.comments.len(), 1);

    let response = server
        .delete_auth(&format!("{path}/{comment_id}"), &author.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .delete_auth(&format!("{path}/{comment_id}"), &reader.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&path).await.unwrap();
    let list: CommentsEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(list.comments.is_empty());
}

#[tokio::test]
async fn test_comment_on_missing_article() {
    let server = TestServer::start().await.unwrap();
    let reader = register_user(&server, "reader").await.unwrap();

    let response = server
        .post_auth("/api/articles/missing/comments", &reader.token, &comment_body("Hello"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_delete_comment_bad_id_and_wrong_article() {
    let server = TestServer::start().await.unwrap();
    let author = register_user(&server, "author").await.unwrap();
    let first = create_article(&server, &author.token, "First", &[]).await.unwrap();
    let second = create_article(&server, &author.token, "Second", &[]).await.unwrap();

    let response = server
        .post_auth(
            &format!("/api/articles/{}/comments", first.slug),
            &author.token,
            &comment_body("On the first article"),
        )
        .await
        .unwrap();
    let envelope: CommentEnvelope = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/articles/{}/comments/abc", first.slug), &author.token)
        .await
        .unwrap();
    let errors = assert_errors(response, StatusCode::UNPROCESSABLE_ENTITY).await.unwrap();
    assert_eq!(errors["id"], "must be an integer");

    let response = server
        .delete_auth(
            &format!("/api/articles/{}/comments/{}", second.slug, envelope.comment.id),
            &author.token,
        )
        .await
        .unwrap();
    let errors = assert_errors(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(errors["body"], "comment not found");
}

// ============================================================================
// Tag Tests
// ============================================================================

#[tokio::test]
async fn test_list_tags() {
    let server = TestServer::start().await.unwrap();
    let author = register_user(&server, "author").await.unwrap();

    let response = server.get("/api/tags").await.unwrap();
    let envelope: TagsEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(envelope.tags.is_empty());

    create_article(&server, &author.token, "Tagged", &["rust", "axum"]).await.unwrap();
    create_article(&server, &author.token, "Tagged Again", &["rust"]).await.unwrap();

    let response = server.get("/api/tags").await.unwrap();
    let mut tags: TagsEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    tags.tags.sort();
    assert_eq!(tags.tags, vec!["axum", "rust"]);
}

#[tokio::test]
async fn test_unknown_route() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/nope").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}
