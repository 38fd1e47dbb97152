//! Request DTOs for API endpoints
//!
//! Every request body is wrapped in a single-key envelope (`{"user": {...}}`,
//! `{"article": {...}}`, `{"comment": {...}}`). Fields are optional at the
//! decoding stage so that a missing field is reported by validation together
//! with every other violation, instead of aborting the decode.

use conduit_core::validation::is_valid_email;
use conduit_core::{ArticleChanges, NewArticle, Validate, Validator};
use serde::{Deserialize, Deserializer};

/// Minimum accepted password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Distinguish an explicit `null` from an absent field.
///
/// Used with `#[serde(default)]`: absent yields `None`, `null` yields `Some(None)`.
fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |s| s.trim().is_empty())
}

fn check_email(v: &mut Validator, email: &str) {
    v.check(!email.trim().is_empty(), "email", "must not be empty");
    v.check(is_valid_email(email), "email", "must be a valid email address");
}

fn check_password(v: &mut Validator, password: &str) {
    v.check(
        password.chars().count() >= MIN_PASSWORD_LENGTH,
        "password",
        "password must contain at least 8 characters",
    );
}

// ============================================================================
// User Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct RegisterRequest {
    pub user: RegisterUser,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct RegisterUser {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Validate for RegisterRequest {
    fn validate(&self, v: &mut Validator) {
        let user = &self.user;
        check_email(v, user.email.as_deref().unwrap_or_default());
        v.check(!is_blank(user.username.as_deref()), "username", "must not be empty");
        check_password(v, user.password.as_deref().unwrap_or_default());
    }
}

/// User login request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct LoginRequest {
    pub user: LoginUser,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct LoginUser {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl Validate for LoginRequest {
    fn validate(&self, v: &mut Validator) {
        v.check(!is_blank(self.user.email.as_deref()), "email", "must not be empty");
        v.check(
            !self.user.password.as_deref().unwrap_or_default().is_empty(),
            "password",
            "must not be empty",
        );
    }
}

/// Update current user request. Absent fields keep their stored value;
/// `"image": null` clears the image.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct UpdateUserRequest {
    pub user: UpdateUser,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct UpdateUser {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub bio: Option<String>,
    #[serde(deserialize_with = "double_option")]
    pub image: Option<Option<String>>,
}

impl UpdateUser {
    fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.username.is_none()
            && self.password.is_none()
            && self.bio.is_none()
            && self.image.is_none()
    }
}

impl Validate for UpdateUserRequest {
    fn validate(&self, v: &mut Validator) {
        let user = &self.user;
        v.check(!user.is_empty(), "user", "must provide at least one field to update");
        if let Some(email) = user.email.as_deref() {
            check_email(v, email);
        }
        if let Some(username) = user.username.as_deref() {
            v.check(!username.trim().is_empty(), "username", "must not be empty");
        }
        if let Some(password) = user.password.as_deref() {
            check_password(v, password);
        }
    }
}

// ============================================================================
// Article Requests
// ============================================================================

/// Create article request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct CreateArticleRequest {
    pub article: CreateArticle,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields, default, rename_all = "camelCase")]
pub struct CreateArticle {
    pub title: Option<String>,
    pub description: Option<String>,
    pub body: Option<String>,
    pub tag_list: Vec<String>,
}

impl Validate for CreateArticleRequest {
    fn validate(&self, v: &mut Validator) {
        let article = &self.article;
        v.check(!is_blank(article.body.as_deref()), "body", "must not be empty");
        v.check(!is_blank(article.description.as_deref()), "description", "must not be empty");
        v.check(!is_blank(article.title.as_deref()), "title", "must not be empty");
        for tag in &article.tag_list {
            v.check(!tag.trim().is_empty(), "tagList", "tag must not be blank");
            v.check(!tag.contains(','), "tagList", "must not contain ','");
        }
    }
}

impl CreateArticleRequest {
    /// Convert a validated request into domain values
    pub fn into_new_article(self) -> NewArticle {
        let article = self.article;
        NewArticle {
            title: article.title.unwrap_or_default(),
            description: article.description.unwrap_or_default(),
            body: article.body.unwrap_or_default(),
            tag_list: article.tag_list,
        }
    }
}

/// Update article request. Only the supplied fields change.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct UpdateArticleRequest {
    pub article: UpdateArticle,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct UpdateArticle {
    pub title: Option<String>,
    pub description: Option<String>,
    pub body: Option<String>,
}

impl Validate for UpdateArticleRequest {
    fn validate(&self, v: &mut Validator) {
        let article = &self.article;
        v.check(
            article.title.is_some() || article.description.is_some() || article.body.is_some(),
            "article",
            "must provide at least one of body, description or title",
        );
        for (field, value) in [
            ("body", &article.body),
            ("description", &article.description),
            ("title", &article.title),
        ] {
            if let Some(value) = value {
                v.check(!value.trim().is_empty(), field, "must not be blank");
            }
        }
    }
}

impl UpdateArticleRequest {
    /// Convert a validated request into domain values
    pub fn into_changes(self) -> ArticleChanges {
        ArticleChanges {
            title: self.article.title,
            description: self.article.description,
            body: self.article.body,
        }
    }
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Add comment request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct CreateCommentRequest {
    pub comment: CreateComment,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct CreateComment {
    pub body: Option<String>,
}

impl Validate for CreateCommentRequest {
    fn validate(&self, v: &mut Validator) {
        v.check(!is_blank(self.comment.body.as_deref()), "body", "must not be empty");
    }
}

impl CreateCommentRequest {
    pub fn into_body(self) -> String {
        self.comment.body.unwrap_or_default()
    }
}
