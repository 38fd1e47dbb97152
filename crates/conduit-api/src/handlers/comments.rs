//! Comment handlers

use axum::{
    extract::{Path, State},
    Json,
};
use conduit_service::dto::{CommentEnvelope, CommentsEnvelope, CreateCommentRequest};
use conduit_service::CommentService;

use crate::extractors::{AuthUser, CommentPath, ValidatedJson, Viewer};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /api/articles/:slug/comments
pub async fn list_comments(
    State(state): State<AppState>,
    Viewer(viewer): Viewer,
    Path(slug): Path<String>,
) -> ApiResult<Json<CommentsEnvelope>> {
    let service = CommentService::new(state.service_context());
    let response = service.list_comments(&viewer, &slug).await?;
    Ok(Json(response))
}

/// POST /api/articles/:slug/comments
pub async fn add_comment(
    State(state): State<AppState>,
    AuthUser(viewer): AuthUser,
    Path(slug): Path<String>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<CommentEnvelope>> {
    let service = CommentService::new(state.service_context());
    let response = service.add_comment(&viewer, &slug, request).await?;
    Ok(Created(response))
}

/// DELETE /api/articles/:slug/comments/:id
pub async fn delete_comment(
    State(state): State<AppState>,
    AuthUser(viewer): AuthUser,
    Path(path): Path<CommentPath>,
) -> ApiResult<NoContent> {
    let comment_id = path.comment_id()?;
    let service = CommentService::new(state.service_context());
    service.delete_comment(&viewer, &path.slug, comment_id).await?;
    Ok(NoContent)
}
