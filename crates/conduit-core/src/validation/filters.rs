//! Query-string filters for article listings
//!
//! Parsing never short-circuits: a malformed value records an error on the
//! validator, the field keeps its default, and the remaining parameters are
//! still parsed so one response can report every problem.

use std::collections::HashMap;

use super::validator::Validator;

/// Page size used when `limit` is absent or rejected
pub const DEFAULT_PAGE_LIMIT: i64 = 20;

/// Limit/offset pagination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationFilters {
    pub limit: i64,
    pub offset: i64,
}

impl Default for PaginationFilters {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_LIMIT,
            offset: 0,
        }
    }
}

impl PaginationFilters {
    /// Parse `limit` (> 0) and `offset` (>= 0) from query parameters
    pub fn parse(query: &HashMap<String, String>, v: &mut Validator) -> Self {
        let mut filters = Self::default();

        if let Some(raw) = query.get("limit") {
            match raw.parse::<i64>() {
                Ok(limit) if limit > 0 => filters.limit = limit,
                Ok(_) => v.add_error("limit", "must be a positive integer"),
                Err(_) => v.add_error("limit", "must be an integer"),
            }
        }

        if let Some(raw) = query.get("offset") {
            match raw.parse::<i64>() {
                Ok(offset) if offset >= 0 => filters.offset = offset,
                Ok(_) => v.add_error("offset", "must be greater than or equal to zero"),
                Err(_) => v.add_error("offset", "must be an integer"),
            }
        }

        filters
    }
}

/// Optional article constraints. `None` means "no constraint", which is
/// different from a present but empty parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilters {
    pub tag: Option<String>,
    /// Author username
    pub author: Option<String>,
    /// Username of a user who favorited the article
    pub favorited: Option<String>,
    pub pagination: PaginationFilters,
}

impl ArticleFilters {
    pub fn parse(query: &HashMap<String, String>, v: &mut Validator) -> Self {
        Self {
            tag: query.get("tag").cloned(),
            author: query.get("author").cloned(),
            favorited: query.get("favorited").cloned(),
            pagination: PaginationFilters::parse(query, v),
        }
    }

    #[inline]
    pub fn limit(&self) -> i64 {
        self.pagination.limit
    }

    #[inline]
    pub fn offset(&self) -> i64 {
        self.pagination.offset
    }
}
