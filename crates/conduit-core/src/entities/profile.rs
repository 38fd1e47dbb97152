//! Profile - public view of a user relative to a viewer

/// Public profile. `following` is computed for the requesting viewer and is
/// always `false` for anonymous viewers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub username: String,
    pub bio: String,
    pub image: Option<String>,
    pub following: bool,
}
