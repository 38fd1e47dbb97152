//! JWT utilities for authentication
//!
//! Tokens are HS256-signed and carry the user id and username so a request
//! can be attributed without a database lookup.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i64,
    pub username: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Identity carried by a successfully verified token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedToken {
    pub user_id: i64,
    pub username: String,
    /// The raw token as presented by the client
    pub token: String,
}

/// JWT service for issuing and verifying tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiry_seconds: i64,
}

impl JwtService {
    /// Create a new JWT service with the given secret and token lifetime
    #[must_use]
    pub fn new(secret: &str, expiry_seconds: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expiry_seconds,
        }
    }

    /// Issue a signed token for a user
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn create_token(&self, user_id: i64, username: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            user_id,
            username: username.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.expiry_seconds)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to encode JWT: {e}")))
    }

    /// Decode and validate a token, returning its claims
    ///
    /// # Errors
    /// Returns an error if the token is invalid or expired
    pub fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            })
    }

    /// Verify a token and return the identity it carries
    ///
    /// # Errors
    /// Returns `InvalidToken` or `TokenExpired`
    pub fn verify_token(&self, token: &str) -> Result<VerifiedToken, AppError> {
        let claims = self.decode_token(token)?;

        Ok(VerifiedToken {
            user_id: claims.user_id,
            username: claims.username,
            token: token.to_string(),
        })
    }

    /// Token lifetime in seconds
    #[must_use]
    pub fn expiry_seconds(&self) -> i64 {
        self.expiry_seconds
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("expiry_seconds", &self.expiry_seconds)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> JwtService {
        JwtService::new("test-secret-key-that-is-long-enough", 86400)
    }

    #[test]
    fn test_create_and_verify_token() {
        let service = create_test_service();

        let token = service.create_token(42, "jake").unwrap();
        assert!(!token.is_empty());

        let verified = service.verify_token(&token).unwrap();
        assert_eq!(verified.user_id, 42);
        assert_eq!(verified.username, "jake");
        assert_eq!(verified.token, token);
    }

    #[test]
    fn test_claims_expiry() {
        let service = create_test_service();
        let token = service.create_token(1, "jake").unwrap();

        let claims = service.decode_token(&token).unwrap();
        assert!(claims.exp > Utc::now().timestamp());
        assert_eq!(claims.exp - claims.iat, 86400);
    }

    #[test]
    fn test_expired_token() {
        // Well past the default 60s leeway
        let service = JwtService::new("test-secret-key-that-is-long-enough", -3600);
        let token = service.create_token(1, "jake").unwrap();

        let result = service.verify_token(&token);
        assert!(matches!(result, Err(AppError::TokenExpired)));
    }

    #[test]
    fn test_invalid_token() {
        let service = create_test_service();

        let result = service.verify_token("invalid.token.here");
        assert!(matches!(result, Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_wrong_secret() {
        let token = create_test_service().create_token(1, "jake").unwrap();
        let other = JwtService::new("a-completely-different-secret-key", 86400);

        assert!(matches!(other.verify_token(&token), Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_debug_hides_keys() {
        let debug = format!("{:?}", create_test_service());
        assert!(debug.contains("expiry_seconds"));
        assert!(!debug.contains("test-secret"));
    }
}
