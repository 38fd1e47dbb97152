//! Validated JSON extractor
//!
//! Decodes a request body strictly and runs the type's validation rules.
//! Decoding failures are 400s with a message under `body`; rule violations
//! are 422s keyed by field.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use conduit_core::Validate;
use serde::de::DeserializeOwned;
use serde_json::error::Category;

use crate::response::ApiError;

/// Maximum accepted request body, in bytes
pub const MAX_BODY_BYTES: usize = 1_048_576;

/// Validated JSON extractor
///
/// Unknown keys are rejected by the target type (`deny_unknown_fields`);
/// anything after the first JSON value is rejected here.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                ApiError::bad_request(format!(
                    "body must not be larger than {MAX_BODY_BYTES} bytes"
                ))
            } else {
                ApiError::bad_request(e.body_text())
            }
        })?;

        let value: T = decode_strict(&bytes)?;
        value.validated()?;

        Ok(ValidatedJson(value))
    }
}

/// Decode exactly one JSON value from `bytes`
pub fn decode_strict<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::bad_request("body must not be empty"));
    }

    let mut de = serde_json::Deserializer::from_slice(bytes);
    let value = T::deserialize(&mut de).map_err(|e| ApiError::bad_request(describe(&e)))?;
    de.end()
        .map_err(|_| ApiError::bad_request("body must only contain a single JSON value"))?;

    Ok(value)
}

fn describe(e: &serde_json::Error) -> String {
    match e.classify() {
        Category::Eof | Category::Io => "body contains badly-formed JSON".to_string(),
        Category::Syntax => format!(
            "body contains badly-formed JSON (at line {}, column {})",
            e.line(),
            e.column()
        ),
        Category::Data => {
            let message = e.to_string();
            if let Some(key) = unknown_field(&message) {
                format!("body contains unknown key \"{key}\"")
            } else if message.starts_with("invalid type") {
                format!(
                    "body contains incorrect JSON type (at line {}, column {})",
                    e.line(),
                    e.column()
                )
            } else {
                format!("body contains invalid JSON: {message}")
            }
        }
    }
}

/// Field name from serde's "unknown field `name`, expected ..." message
fn unknown_field(message: &str) -> Option<&str> {
    let rest = message.strip_prefix("unknown field `")?;
    rest.split('`').next()
}
