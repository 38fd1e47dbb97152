//! Profile service
//!
//! Public profiles and the follow relation between users.

use conduit_core::ViewerContext;
use tracing::{info, instrument};

use crate::dto::ProfileEnvelope;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::require_user;

/// Profile service
pub struct ProfileService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProfileService<'a> {
    /// Create a new ProfileService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get a profile as seen by the viewer
    #[instrument(skip(self, viewer))]
    pub async fn get_profile(
        &self,
        viewer: &ViewerContext,
        username: &str,
    ) -> ServiceResult<ProfileEnvelope> {
        let profile = self
            .ctx
            .user_repo()
            .get_profile(username, viewer.user_id())
            .await?;

        Ok(ProfileEnvelope {
            profile: profile.into(),
        })
    }

    /// Follow a user. Following someone already followed is a no-op.
    #[instrument(skip(self, viewer))]
    pub async fn follow(&self, viewer: &ViewerContext, username: &str) -> ServiceResult<ProfileEnvelope> {
        let user_id = require_user(viewer)?;
        let target = self.ctx.user_repo().get_user_by_username(username).await?;

        if target.id == user_id {
            return Err(ServiceError::validation("username", "cannot follow yourself"));
        }

        self.ctx.user_repo().follow_user(user_id, target.id).await?;
        info!(user_id, follow_user_id = target.id, "User followed");

        Ok(ProfileEnvelope {
            profile: target.to_profile(true).into(),
        })
    }

    /// Stop following a user. Unfollowing someone not followed is a no-op.
    #[instrument(skip(self, viewer))]
    pub async fn unfollow(
        &self,
        viewer: &ViewerContext,
        username: &str,
    ) -> ServiceResult<ProfileEnvelope> {
        let user_id = require_user(viewer)?;
        let target = self.ctx.user_repo().get_user_by_username(username).await?;

        self.ctx.user_repo().unfollow_user(user_id, target.id).await?;
        info!(user_id, follow_user_id = target.id, "User unfollowed");

        Ok(ProfileEnvelope {
            profile: target.to_profile(false).into(),
        })
    }
}
