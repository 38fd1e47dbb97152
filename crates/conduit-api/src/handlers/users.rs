//! User handlers
//!
//! Registration, login and the current user's account.

use axum::{extract::State, Json};
use conduit_service::dto::{LoginRequest, RegisterRequest, UpdateUserRequest, UserEnvelope};
use conduit_service::UserService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Register a new user
///
/// POST /api/users
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Created<UserEnvelope>> {
    let service = UserService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Created(response))
}

/// Login with email and password
///
/// POST /api/users/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<UserEnvelope>> {
    let service = UserService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Json(response))
}

/// Get current user
///
/// GET /api/user
pub async fn get_current_user(
    State(state): State<AppState>,
    AuthUser(viewer): AuthUser,
) -> ApiResult<Json<UserEnvelope>> {
    let service = UserService::new(state.service_context());
    let response = service.current_user(&viewer).await?;
    Ok(Json(response))
}

/// Update current user
///
/// PUT /api/user
pub async fn update_current_user(
    State(state): State<AppState>,
    AuthUser(viewer): AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<UserEnvelope>> {
    let service = UserService::new(state.service_context());
    let response = service.update_user(&viewer, request).await?;
    Ok(Json(response))
}
