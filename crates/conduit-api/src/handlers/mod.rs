//! HTTP request handlers
//!
//! Handlers extract, delegate to a service, and wrap the result.

pub mod articles;
pub mod comments;
pub mod health;
pub mod profiles;
pub mod tags;
pub mod users;
