//! Route definitions
//!
//! All API routes organized by resource and mounted under /api.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{articles, comments, health, profiles, tags, users};
use crate::state::AppState;

/// Create the main router: API routes plus health probes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .nest("/api", api_routes())
        .merge(health_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(user_routes())
        .merge(profile_routes())
        .merge(article_routes())
        .route("/tags", get(tags::list_tags))
}

/// User and authentication routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(users::register))
        .route("/users/login", post(users::login))
        .route(
            "/user",
            get(users::get_current_user).put(users::update_current_user),
        )
}

/// Profile routes
fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/profiles/:username", get(profiles::get_profile))
        .route(
            "/profiles/:username/follow",
            post(profiles::follow).delete(profiles::unfollow),
        )
}

/// Article and comment routes
fn article_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .route("/articles/feed", get(articles::feed))
        .route(
            "/articles/:slug",
            get(articles::get_article)
                .put(articles::update_article)
                .delete(articles::delete_article),
        )
        .route(
            "/articles/:slug/favorite",
            post(articles::favorite_article).delete(articles::unfavorite_article),
        )
        .route(
            "/articles/:slug/comments",
            get(comments::list_comments).post(comments::add_comment),
        )
        .route(
            "/articles/:slug/comments/:id",
            axum::routing::delete(comments::delete_comment),
        )
}
