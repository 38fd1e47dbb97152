//! Slug - URL-safe article identifier derived from a title

use serde::{Deserialize, Serialize};
use std::fmt;

/// Article slug: the title lowercased with spaces replaced by hyphens.
///
/// Two titles that normalize to the same slug collide; collisions are
/// reported by the store, never deduplicated here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Derive a slug from an article title
    pub fn from_title(title: &str) -> Self {
        Self(title.replace(' ', "-").to_lowercase())
    }

    /// Borrow the slug text
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the inner string
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_title() {
        assert_eq!(Slug::from_title("How To Train Your Dragon").as_str(), "how-to-train-your-dragon");
    }

    #[test]
    fn test_case_and_spacing_collide() {
        assert_eq!(Slug::from_title("Hello World"), Slug::from_title("hello world"));
        assert_ne!(Slug::from_title("hello  world"), Slug::from_title("hello world"));
    }

    #[test]
    fn test_other_characters_are_kept() {
        assert_eq!(Slug::from_title("Rust: 2024?").as_str(), "rust:-2024?");
    }

    #[test]
    fn test_display() {
        assert_eq!(Slug::from_title("A B").to_string(), "a-b");
    }
}
