//! Ports implemented by the persistence layer

mod repositories;

pub use repositories::{
    ArticleRepository, CommentRepository, RepoResult, TagRepository, UserRepository,
};
