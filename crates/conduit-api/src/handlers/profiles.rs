//! Profile handlers

use axum::{
    extract::{Path, State},
    Json,
};
use conduit_service::dto::ProfileEnvelope;
use conduit_service::ProfileService;

use crate::extractors::{AuthUser, Viewer};
use crate::response::ApiResult;
use crate::state::AppState;

/// GET /api/profiles/:username
pub async fn get_profile(
    State(state): State<AppState>,
    Viewer(viewer): Viewer,
    Path(username): Path<String>,
) -> ApiResult<Json<ProfileEnvelope>> {
    let service = ProfileService::new(state.service_context());
    let response = service.get_profile(&viewer, &username).await?;
    Ok(Json(response))
}

/// POST /api/profiles/:username/follow
pub async fn follow(
    State(state): State<AppState>,
    AuthUser(viewer): AuthUser,
    Path(username): Path<String>,
) -> ApiResult<Json<ProfileEnvelope>> {
    let service = ProfileService::new(state.service_context());
    let response = service.follow(&viewer, &username).await?;
    Ok(Json(response))
}

/// DELETE /api/profiles/:username/follow
pub async fn unfollow(
    State(state): State<AppState>,
    AuthUser(viewer): AuthUser,
    Path(username): Path<String>,
) -> ApiResult<Json<ProfileEnvelope>> {
    let service = ProfileService::new(state.service_context());
    let response = service.unfollow(&viewer, &username).await?;
    Ok(Json(response))
}
