//! User entity - represents a registered account

/// Registered user account.
///
/// The password hash never leaves the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub bio: String,
    pub image: Option<String>,
}

impl User {
    /// Build the public profile of this user as seen by a viewer
    pub fn to_profile(&self, following: bool) -> crate::entities::Profile {
        crate::entities::Profile {
            username: self.username.clone(),
            bio: self.bio.clone(),
            image: self.image.clone(),
            following,
        }
    }
}

/// Values for inserting a new user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub bio: String,
}

/// Partial user update. `None` leaves the stored value untouched.
///
/// `image` is doubly optional: `Some(None)` clears the image.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password_hash: Option<String>,
    pub bio: Option<String>,
    pub image: Option<Option<String>>,
}

impl UserChanges {
    /// Check if no field was supplied
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.username.is_none()
            && self.password_hash.is_none()
            && self.bio.is_none()
            && self.image.is_none()
    }
}
