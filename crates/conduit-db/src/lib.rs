//! # conduit-db
//!
//! Database layer implementing repository traits with SQLite via SQLx.
//!
//! ## Overview
//!
//! This crate provides SQLite implementations for all repository traits
//! defined in `conduit-core`. It handles:
//!
//! - Connection pool management and schema bootstrap
//! - Database models with SQLx `FromRow` derives
//! - Model → Entity mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use conduit_db::{create_pool, run_migrations, DatabaseConfig, SqliteArticleRepository};
//! use conduit_core::traits::ArticleRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::in_memory()).await?;
//!     run_migrations(&pool).await?;
//!     let articles = SqliteArticleRepository::new(pool);
//!
//!     let article = articles.get_article_by_slug("how-to-train-your-dragon", None).await;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, DatabaseConfig, SqlitePool};
pub use repositories::{
    SqliteArticleRepository, SqliteCommentRepository, SqliteTagRepository, SqliteUserRepository,
    DEFAULT_QUERY_TIMEOUT,
};
