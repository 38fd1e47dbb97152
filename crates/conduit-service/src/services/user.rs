//! User service
//!
//! Handles registration, login and the current user's account.

use conduit_common::auth::hash_password;
use conduit_core::{NewUser, UserChanges, ViewerContext};
use tracing::{info, instrument, warn};

use crate::dto::{LoginRequest, RegisterRequest, UpdateUserRequest, UserEnvelope, UserResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::require_user;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user and sign them in
    #[instrument(skip(self, request), fields(username = ?request.user.username))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<UserEnvelope> {
        let user = request.user;
        let password_hash = hash_password(user.password.as_deref().unwrap_or_default())?;

        let new_user = NewUser {
            email: user.email.unwrap_or_default(),
            username: user.username.unwrap_or_default(),
            password_hash,
            bio: String::new(),
        };
        let user = self.ctx.user_repo().register_user(&new_user).await?;

        info!(user_id = user.id, "User registered successfully");

        let token = self.ctx.jwt_service().create_token(user.id, &user.username)?;
        Ok(UserEnvelope {
            user: UserResponse::new(user, token),
        })
    }

    /// Login with email and password
    #[instrument(skip(self, request), fields(email = ?request.user.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<UserEnvelope> {
        let email = request.user.email.unwrap_or_default();
        let password = request.user.password.unwrap_or_default();

        let user = self
            .ctx
            .user_repo()
            .get_user_by_credentials(&email, &password)
            .await
            .inspect_err(|e| warn!(error = %e, "Login failed"))?;

        info!(user_id = user.id, "User logged in successfully");

        let token = self.ctx.jwt_service().create_token(user.id, &user.username)?;
        Ok(UserEnvelope {
            user: UserResponse::new(user, token),
        })
    }

    /// Get the authenticated user, echoing the credential they presented
    #[instrument(skip(self, viewer))]
    pub async fn current_user(&self, viewer: &ViewerContext) -> ServiceResult<UserEnvelope> {
        let user_id = require_user(viewer)?;
        let user = self.ctx.user_repo().get_user_by_id(user_id).await?;
        let token = viewer.token().unwrap_or_default().to_string();

        Ok(UserEnvelope {
            user: UserResponse::new(user, token),
        })
    }

    /// Update the authenticated user.
    ///
    /// A fresh token is issued since the username carried in the old one may
    /// have changed.
    #[instrument(skip(self, viewer, request))]
    pub async fn update_user(
        &self,
        viewer: &ViewerContext,
        request: UpdateUserRequest,
    ) -> ServiceResult<UserEnvelope> {
        let user_id = require_user(viewer)?;
        let update = request.user;

        let password_hash = match update.password.as_deref() {
            Some(password) => Some(hash_password(password)?),
            None => None,
        };
        let changes = UserChanges {
            email: update.email,
            username: update.username,
            password_hash,
            bio: update.bio,
            image: update.image,
        };

        let user = self.ctx.user_repo().update_user(user_id, &changes).await?;

        info!(user_id, "User updated");

        let token = self.ctx.jwt_service().create_token(user.id, &user.username)?;
        Ok(UserEnvelope {
            user: UserResponse::new(user, token),
        })
    }
}
