//! User model -> entity mappers

use conduit_core::entities::{Profile, User};

use crate::models::{ProfileModel, UserModel};

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            email: model.email,
            username: model.username,
            bio: model.bio,
            image: model.image,
        }
    }
}

impl From<ProfileModel> for Profile {
    fn from(model: ProfileModel) -> Self {
        Profile {
            username: model.username,
            bio: model.bio,
            image: model.image,
            following: model.following,
        }
    }
}
