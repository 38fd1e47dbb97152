//! # conduit-core
//!
//! Domain layer containing entities, value objects, validation, query filters,
//! and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod validation;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Article, ArticleChanges, ArticleSummary, Comment, NewArticle, NewUser, Profile, User,
    UserChanges,
};
pub use error::DomainError;
pub use traits::{
    ArticleRepository, CommentRepository, RepoResult, TagRepository, UserRepository,
};
pub use validation::{
    ArticleFilters, PaginationFilters, Validate, ValidationErrors, Validator,
    DEFAULT_PAGE_LIMIT,
};
pub use value_objects::{Slug, ViewerContext};
