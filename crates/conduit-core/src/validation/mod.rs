//! Request validation and query filter parsing

mod filters;
mod validator;

pub use filters::{ArticleFilters, PaginationFilters, DEFAULT_PAGE_LIMIT};
pub use validator::{is_valid_email, Validate, ValidationErrors, Validator};
