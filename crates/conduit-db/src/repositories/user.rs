//! SQLite implementation of UserRepository

use std::time::Duration;

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::instrument;

use conduit_common::verify_password;
use conduit_core::entities::{NewUser, Profile, User, UserChanges};
use conduit_core::error::DomainError;
use conduit_core::traits::{RepoResult, UserRepository};

use crate::models::{ProfileModel, UserCredentialsModel, UserModel};

use super::error::{map_db_error, map_unique_violation, timed, user_conflict};
use super::DEFAULT_QUERY_TIMEOUT;

/// SQLite implementation of UserRepository
#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
    timeout: Duration,
}

impl SqliteUserRepository {
    /// Create a new SqliteUserRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            timeout: DEFAULT_QUERY_TIMEOUT,
        }
    }

    /// Bound every call by `timeout` instead of the default
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    #[instrument(skip(self, user), fields(username = %user.username))]
    async fn register_user(&self, user: &NewUser) -> RepoResult<User> {
        timed("register_user", self.timeout, async {
            let model = sqlx::query_as::<_, UserModel>(
                r"
                INSERT INTO User (Email, Username, PasswordHash, Bio)
                VALUES ($1, $2, $3, $4)
                RETURNING UserId AS id, Email AS email, Username AS username, Bio AS bio, Image AS image
                ",
            )
            .bind(&user.email)
            .bind(&user.username)
            .bind(&user.password_hash)
            .bind(&user.bio)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_unique_violation(e, user_conflict))?;

            Ok(User::from(model))
        })
        .await
    }

    #[instrument(skip(self, password))]
    async fn get_user_by_credentials(&self, email: &str, password: &str) -> RepoResult<User> {
        let row = timed("get_user_by_credentials", self.timeout, async {
            sqlx::query_as::<_, UserCredentialsModel>(
                r"
                SELECT UserId AS id, Email AS email, Username AS username, Bio AS bio,
                       Image AS image, PasswordHash AS password_hash
                FROM User
                WHERE Email = $1
                ",
            )
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)
        })
        .await?;

        // Unknown email and wrong password are indistinguishable to the caller
        let Some(row) = row else {
            return Err(DomainError::InvalidCredentials);
        };

        let matches = verify_password(password, &row.password_hash)
            .map_err(|e| DomainError::InternalError(format!("password check failed: {e:?}")))?;

        if matches {
            Ok(User::from(row.into_user()))
        } else {
            Err(DomainError::InvalidCredentials)
        }
    }

    #[instrument(skip(self))]
    async fn get_user_by_id(&self, id: i64) -> RepoResult<User> {
        timed("get_user_by_id", self.timeout, async {
            sqlx::query_as::<_, UserModel>(
                r"
                SELECT UserId AS id, Email AS email, Username AS username, Bio AS bio, Image AS image
                FROM User
                WHERE UserId = $1
                ",
            )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?
            .map(User::from)
            .ok_or(DomainError::UserNotFound)
        })
        .await
    }

    #[instrument(skip(self))]
    async fn get_user_by_username(&self, username: &str) -> RepoResult<User> {
        timed("get_user_by_username", self.timeout, async {
            sqlx::query_as::<_, UserModel>(
                r"
                SELECT UserId AS id, Email AS email, Username AS username, Bio AS bio, Image AS image
                FROM User
                WHERE Username = $1
                ",
            )
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?
            .map(User::from)
            .ok_or(DomainError::UserNotFound)
        })
        .await
    }

    #[instrument(skip(self, changes))]
    async fn update_user(&self, id: i64, changes: &UserChanges) -> RepoResult<User> {
        timed("update_user", self.timeout, async {
            // $5 says whether the image was supplied at all; $6 may be NULL to clear it
            sqlx::query_as::<_, UserModel>(
                r"
                UPDATE User
                SET Email = COALESCE($1, Email),
                    Username = COALESCE($2, Username),
                    PasswordHash = COALESCE($3, PasswordHash),
                    Bio = COALESCE($4, Bio),
                    Image = CASE WHEN $5 THEN $6 ELSE Image END
                WHERE UserId = $7
                RETURNING UserId AS id, Email AS email, Username AS username, Bio AS bio, Image AS image
                ",
            )
            .bind(changes.email.as_deref())
            .bind(changes.username.as_deref())
            .bind(changes.password_hash.as_deref())
            .bind(changes.bio.as_deref())
            .bind(changes.image.is_some())
            .bind(changes.image.clone().flatten())
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_unique_violation(e, user_conflict))?
            .map(User::from)
            .ok_or(DomainError::UserNotFound)
        })
        .await
    }

    #[instrument(skip(self))]
    async fn get_profile(&self, username: &str, viewer_id: Option<i64>) -> RepoResult<Profile> {
        timed("get_profile", self.timeout, async {
            sqlx::query_as::<_, ProfileModel>(
                r"
                SELECT u.Username AS username,
                       u.Bio AS bio,
                       u.Image AS image,
                       EXISTS(
                           SELECT 1 FROM Follower f
                           WHERE f.UserId = $1 AND f.FollowUserId = u.UserId
                       ) AS following
                FROM User u
                WHERE u.Username = $2
                ",
            )
            .bind(viewer_id)
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?
            .map(Profile::from)
            .ok_or(DomainError::UserNotFound)
        })
        .await
    }

    #[instrument(skip(self))]
    async fn follow_user(&self, user_id: i64, follow_user_id: i64) -> RepoResult<()> {
        timed("follow_user", self.timeout, async {
            sqlx::query("INSERT OR IGNORE INTO Follower (UserId, FollowUserId) VALUES ($1, $2)")
                .bind(user_id)
                .bind(follow_user_id)
                .execute(&self.pool)
                .await
                .map_err(map_db_error)?;

            Ok(())
        })
        .await
    }

    #[instrument(skip(self))]
    async fn unfollow_user(&self, user_id: i64, follow_user_id: i64) -> RepoResult<()> {
        timed("unfollow_user", self.timeout, async {
            sqlx::query("DELETE FROM Follower WHERE UserId = $1 AND FollowUserId = $2")
                .bind(user_id)
                .bind(follow_user_id)
                .execute(&self.pool)
                .await
                .map_err(map_db_error)?;

            Ok(())
        })
        .await
    }

    #[instrument(skip(self))]
    async fn is_following(&self, user_id: i64, follow_user_id: i64) -> RepoResult<bool> {
        timed("is_following", self.timeout, async {
            sqlx::query_scalar::<_, bool>(
                "SELECT EXISTS(SELECT 1 FROM Follower WHERE UserId = $1 AND FollowUserId = $2)",
            )
            .bind(user_id)
            .bind(follow_user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
        })
        .await
    }
}
