//! Tag handlers

use axum::{extract::State, Json};
use conduit_service::dto::TagsEnvelope;
use conduit_service::TagService;

use crate::response::ApiResult;
use crate::state::AppState;

/// GET /api/tags
pub async fn list_tags(State(state): State<AppState>) -> ApiResult<Json<TagsEnvelope>> {
    let service = TagService::new(state.service_context());
    let response = service.list_tags().await?;
    Ok(Json(response))
}
