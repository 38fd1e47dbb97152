//! User row models

use sqlx::FromRow;

/// Database model for the User table, without the password hash
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub bio: String,
    pub image: Option<String>,
}

/// User row including the password hash, only read for credential checks
#[derive(Clone, FromRow)]
pub struct UserCredentialsModel {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub bio: String,
    pub image: Option<String>,
    pub password_hash: String,
}

impl UserCredentialsModel {
    /// Drop the hash once the password has been checked
    pub fn into_user(self) -> UserModel {
        UserModel {
            id: self.id,
            email: self.email,
            username: self.username,
            bio: self.bio,
            image: self.image,
        }
    }
}

impl std::fmt::Debug for UserCredentialsModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserCredentialsModel")
            .field("id", &self.id)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// Profile projection with the viewer-relative following flag
#[derive(Debug, Clone, FromRow)]
pub struct ProfileModel {
    pub username: String,
    pub bio: String,
    pub image: Option<String>,
    pub following: bool,
}
