//! Authentication utilities

mod jwt;
mod password;

pub use jwt::{Claims, JwtService, VerifiedToken};
pub use password::{hash_password, verify_password};
