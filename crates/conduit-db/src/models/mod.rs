//! Database models - SQLx-compatible row shapes
//!
//! Queries alias their columns to these snake_case field names.

mod article;
mod comment;
mod user;

pub use article::{ArticleModel, ArticleSummaryModel};
pub use comment::CommentModel;
pub use user::{ProfileModel, UserCredentialsModel, UserModel};
