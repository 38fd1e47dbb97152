//! # conduit-service
//!
//! Application layer containing business logic, services, and DTOs.
//!
//! Every service borrows a [`ServiceContext`] and takes the caller's
//! [`conduit_core::ViewerContext`] explicitly.
//!
//! ```rust,ignore
//! use conduit_service::{ArticleService, ServiceContext};
//!
//! async fn example(ctx: &ServiceContext, viewer: &ViewerContext) -> ServiceResult<()> {
//!     let article = ArticleService::new(ctx).get_article(viewer, "how-to-train-your-dragon").await?;
//!     println!("{}", article.article.title);
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod services;

pub use services::{
    ArticleService, CommentService, ProfileService, ServiceContext,
    ServiceError, ServiceResult, TagService, UserService,
};
