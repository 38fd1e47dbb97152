//! Error handling utilities for repositories

use std::future::Future;
use std::time::Duration;

use conduit_core::error::DomainError;
use conduit_core::traits::RepoResult;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback.
///
/// `on_unique` receives the constraint message, e.g.
/// `UNIQUE constraint failed: User.Email`.
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce(&str) -> Option<DomainError>,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            if let Some(mapped) = on_unique(db_err.message()) {
                return mapped;
            }
        }
    }
    map_db_error(e)
}

/// Unique violations on the User table
pub fn user_conflict(message: &str) -> Option<DomainError> {
    if message.contains("User.Username") {
        Some(DomainError::DuplicateUsername)
    } else if message.contains("User.Email") {
        Some(DomainError::DuplicateEmail)
    } else {
        None
    }
}

/// Unique violations on the Article table
pub fn article_conflict(message: &str) -> Option<DomainError> {
    message
        .contains("Article.Slug")
        .then_some(DomainError::DuplicateSlug)
}

/// Bound a repository call by `limit`.
///
/// Expiry fails with `Timeout(op)`; database failures are prefixed with `op`
/// so the log line names the operation.
pub async fn timed<T, F>(op: &'static str, limit: Duration, fut: F) -> RepoResult<T>
where
    F: Future<Output = RepoResult<T>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(Err(DomainError::DatabaseError(msg))) => {
            Err(DomainError::DatabaseError(format!("{op}: {msg}")))
        }
        Ok(result) => result,
        Err(_) => {
            tracing::error!(op, ?limit, "repository call timed out");
            Err(DomainError::Timeout(op))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_conflict() {
        assert!(matches!(
            user_conflict("UNIQUE constraint failed: User.Username"),
            Some(DomainError::DuplicateUsername)
        ));
        assert!(matches!(
            user_conflict("UNIQUE constraint failed: User.Email"),
            Some(DomainError::DuplicateEmail)
        ));
        assert!(user_conflict("UNIQUE constraint failed: Tag.Tag").is_none());
    }

    #[test]
    fn test_article_conflict() {
        assert!(matches!(
            article_conflict("UNIQUE constraint failed: Article.Slug"),
            Some(DomainError::DuplicateSlug)
        ));
        assert!(article_conflict("something else").is_none());
    }

    #[tokio::test]
    async fn test_timed_passes_result_through() {
        let result = timed("op", Duration::from_secs(1), async { Ok(5) }).await;
        assert_eq!(result.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_timed_prefixes_database_errors() {
        let result: RepoResult<()> = timed("get_feed", Duration::from_secs(1), async {
            Err(DomainError::DatabaseError("disk I/O error".to_string()))
        })
        .await;

        match result {
            Err(DomainError::DatabaseError(msg)) => assert_eq!(msg, "get_feed: disk I/O error"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_timed_expiry_is_not_not_found() {
        let result: RepoResult<()> = timed("get_articles", Duration::from_millis(10), async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(())
        })
        .await;

        let err = result.unwrap_err();
        assert!(matches!(err, DomainError::Timeout("get_articles")));
        assert!(!err.is_not_found());
    }
}
