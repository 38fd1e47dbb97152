//! Field-keyed error accumulator
//!
//! Validation is exhaustive: every rule is checked and all violated fields
//! are reported together. Only the first message recorded for a field is kept.

use std::collections::BTreeMap;

use validator::ValidateEmail;

use crate::error::DomainError;

/// Field name to error message, iterated in stable (sorted) order
pub type ValidationErrors = BTreeMap<String, String>;

/// Accumulates validation failures keyed by field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validator {
    errors: ValidationErrors,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no failure has been recorded
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Record `message` for `field` unless `ok` holds
    pub fn check(&mut self, ok: bool, field: &str, message: &str) {
        if !ok {
            self.add_error(field, message);
        }
    }

    /// Record a failure; later messages for an already failed field are dropped
    pub fn add_error(&mut self, field: &str, message: &str) {
        self.errors
            .entry(field.to_string())
            .or_insert_with(|| message.to_string());
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn into_errors(self) -> ValidationErrors {
        self.errors
    }

    /// Convert into a result, failing with every recorded field error
    pub fn finish(self) -> Result<(), DomainError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(DomainError::ValidationFailed(self.errors))
        }
    }
}

/// Check an address against the email format rules
pub fn is_valid_email(email: &str) -> bool {
    email.validate_email()
}

/// Types that can report their own rule violations into a [`Validator`]
pub trait Validate {
    fn validate(&self, v: &mut Validator);

    /// Run all rules and collect the result
    fn validated(&self) -> Result<(), DomainError> {
        let mut v = Validator::new();
        self.validate(&mut v);
        v.finish()
    }
}
