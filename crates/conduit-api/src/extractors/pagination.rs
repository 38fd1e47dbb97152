//! Query string extractors
//!
//! Article listing filters and feed pagination. Every malformed parameter is
//! reported together as a 422.

use std::collections::HashMap;

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use conduit_core::{ArticleFilters, PaginationFilters, Validator};

use crate::response::ApiError;

async fn query_params<S: Send + Sync>(
    parts: &mut Parts,
    state: &S,
) -> Result<HashMap<String, String>, ApiError> {
    let Query(params) = Query::<HashMap<String, String>>::from_request_parts(parts, state)
        .await
        .map_err(|e| ApiError::bad_request(e.body_text()))?;
    Ok(params)
}

/// `?tag=&author=&favorited=&limit=&offset=`
#[derive(Debug, Clone)]
pub struct ArticleQuery(pub ArticleFilters);

#[async_trait]
impl<S> FromRequestParts<S> for ArticleQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = query_params(parts, state).await?;
        let mut v = Validator::new();
        let filters = ArticleFilters::parse(&params, &mut v);
        v.finish()?;
        Ok(ArticleQuery(filters))
    }
}

/// `?limit=&offset=`
#[derive(Debug, Clone, Copy)]
pub struct FeedQuery(pub PaginationFilters);

#[async_trait]
impl<S> FromRequestParts<S> for FeedQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = query_params(parts, state).await?;
        let mut v = Validator::new();
        let pagination = PaginationFilters::parse(&params, &mut v);
        v.finish()?;
        Ok(FeedQuery(pagination))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Request, StatusCode};

    async fn extract(uri: &str) -> Result<ArticleQuery, ApiError> {
        let (mut parts, ()) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        ArticleQuery::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_defaults() {
        let ArticleQuery(filters) = extract("/api/articles").await.unwrap();
        assert_eq!(filters, ArticleFilters::default());
        assert_eq!(filters.limit(), 20);
    }

    #[tokio::test]
    async fn test_filters() {
        let ArticleQuery(filters) = extract("/api/articles?tag=rust&author=jake&limit=5&offset=10")
            .await
            .unwrap();
        assert_eq!(filters.tag.as_deref(), Some("rust"));
        assert_eq!(filters.author.as_deref(), Some("jake"));
        assert!(filters.favorited.is_none());
        assert_eq!(filters.limit(), 5);
        assert_eq!(filters.offset(), 10);
    }

    #[tokio::test]
    async fn test_invalid_pagination_is_unprocessable() {
        let err = extract("/api/articles?limit=abc&offset=-1").await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
