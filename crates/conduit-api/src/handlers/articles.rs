//! Article handlers
//!
//! Listing, feed, authoring and favorites.

use axum::{
    extract::{Path, State},
    Json,
};
use conduit_service::dto::{
    ArticleEnvelope, ArticlesEnvelope, CreateArticleRequest, UpdateArticleRequest,
};
use conduit_service::ArticleService;

use crate::extractors::{ArticleQuery, AuthUser, FeedQuery, ValidatedJson, Viewer};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List articles, newest first
///
/// GET /api/articles?tag=&author=&favorited=&limit=&offset=
pub async fn list_articles(
    State(state): State<AppState>,
    Viewer(viewer): Viewer,
    ArticleQuery(filters): ArticleQuery,
) -> ApiResult<Json<ArticlesEnvelope>> {
    let service = ArticleService::new(state.service_context());
    let response = service.list_articles(&viewer, &filters).await?;
    Ok(Json(response))
}

/// Articles by followed authors
///
/// GET /api/articles/feed?limit=&offset=
pub async fn feed(
    State(state): State<AppState>,
    AuthUser(viewer): AuthUser,
    FeedQuery(pagination): FeedQuery,
) -> ApiResult<Json<ArticlesEnvelope>> {
    let service = ArticleService::new(state.service_context());
    let response = service.feed(&viewer, &pagination).await?;
    Ok(Json(response))
}

/// GET /api/articles/:slug
pub async fn get_article(
    State(state): State<AppState>,
    Viewer(viewer): Viewer,
    Path(slug): Path<String>,
) -> ApiResult<Json<ArticleEnvelope>> {
    let service = ArticleService::new(state.service_context());
    let response = service.get_article(&viewer, &slug).await?;
    Ok(Json(response))
}

/// POST /api/articles
pub async fn create_article(
    State(state): State<AppState>,
    AuthUser(viewer): AuthUser,
    ValidatedJson(request): ValidatedJson<CreateArticleRequest>,
) -> ApiResult<Created<ArticleEnvelope>> {
    let service = ArticleService::new(state.service_context());
    let response = service.create_article(&viewer, request).await?;
    Ok(Created(response))
}

/// PUT /api/articles/:slug
pub async fn update_article(
    State(state): State<AppState>,
    AuthUser(viewer): AuthUser,
    Path(slug): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateArticleRequest>,
) -> ApiResult<Json<ArticleEnvelope>> {
    let service = ArticleService::new(state.service_context());
    let response = service.update_article(&viewer, &slug, request).await?;
    Ok(Json(response))
}

/// DELETE /api/articles/:slug
pub async fn delete_article(
    State(state): State<AppState>,
    AuthUser(viewer): AuthUser,
    Path(slug): Path<String>,
) -> ApiResult<NoContent> {
    let service = ArticleService::new(state.service_context());
    service.delete_article(&viewer, &slug).await?;
    Ok(NoContent)
}

/// POST /api/articles/:slug/favorite
pub async fn favorite_article(
    State(state): State<AppState>,
    AuthUser(viewer): AuthUser,
    Path(slug): Path<String>,
) -> ApiResult<Json<ArticleEnvelope>> {
    let service = ArticleService::new(state.service_context());
    let response = service.favorite_article(&viewer, &slug).await?;
    Ok(Json(response))
}

/// DELETE /api/articles/:slug/favorite
pub async fn unfavorite_article(
    State(state): State<AppState>,
    AuthUser(viewer): AuthUser,
    Path(slug): Path<String>,
) -> ApiResult<Json<ArticleEnvelope>> {
    let service = ArticleService::new(state.service_context());
    let response = service.unfavorite_article(&viewer, &slug).await?;
    Ok(Json(response))
}
