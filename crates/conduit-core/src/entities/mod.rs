//! Domain entities - core business objects

mod article;
mod comment;
mod profile;
mod user;

pub use article::{Article, ArticleChanges, ArticleSummary, NewArticle};
pub use comment::Comment;
pub use profile::Profile;
pub use user::{NewUser, User, UserChanges};
