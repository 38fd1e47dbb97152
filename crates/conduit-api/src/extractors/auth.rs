//! Authentication extractors
//!
//! Reads `Authorization: Token <jwt>` and turns it into a [`ViewerContext`].

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts, HeaderValue},
};
use axum_extra::{
    headers::{authorization::Credentials, Authorization},
    TypedHeader,
};
use conduit_core::ViewerContext;
use conduit_service::ServiceError;
use tracing::error;

use crate::response::ApiError;
use crate::state::AppState;

/// Credentials presented with the `Token` scheme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenCredentials(String);

impl TokenCredentials {
    pub fn token(&self) -> &str {
        &self.0
    }
}

impl Credentials for TokenCredentials {
    const SCHEME: &'static str = "Token";

    fn decode(value: &HeaderValue) -> Option<Self> {
        let token = value.to_str().ok()?.get(Self::SCHEME.len()..)?.trim();
        (!token.is_empty()).then(|| Self(token.to_string()))
    }

    fn encode(&self) -> HeaderValue {
        HeaderValue::from_str(&format!("{} {}", Self::SCHEME, self.0))
            .unwrap_or_else(|_| HeaderValue::from_static(""))
    }
}

/// Identity of the caller; never rejects.
///
/// A missing header yields an anonymous viewer. A malformed or unverifiable
/// credential is logged and also yields an anonymous viewer.
#[derive(Debug, Clone)]
pub struct Viewer(pub ViewerContext);

#[async_trait]
impl<S> FromRequestParts<S> for Viewer
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if !parts.headers.contains_key(header::AUTHORIZATION) {
            return Ok(Viewer(ViewerContext::Anonymous));
        }

        let credentials =
            match TypedHeader::<Authorization<TokenCredentials>>::from_request_parts(parts, state)
                .await
            {
                Ok(TypedHeader(Authorization(credentials))) => credentials,
                Err(e) => {
                    error!(error = %e, "Malformed authorization header");
                    return Ok(Viewer(ViewerContext::Anonymous));
                }
            };

        let app_state = AppState::from_ref(state);
        match app_state.jwt_service().verify_token(credentials.token()) {
            Ok(verified) => Ok(Viewer(ViewerContext::authenticated(
                verified.user_id,
                verified.username,
                verified.token,
            ))),
            Err(e) => {
                error!(error = %e, "invalid token");
                Ok(Viewer(ViewerContext::Anonymous))
            }
        }
    }
}

/// Authenticated caller; rejects with 401 otherwise
#[derive(Debug, Clone)]
pub struct AuthUser(pub ViewerContext);

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Viewer(viewer) = Viewer::from_request_parts(parts, state).await?;
        if viewer.is_authenticated() {
            Ok(AuthUser(viewer))
        } else {
            Err(ServiceError::Unauthorized.into())
        }
    }
}
