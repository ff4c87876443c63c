//! Identifier sanitization and slug validation
//!
//! This module provides the [`Identifier`] type, a source-safe name derived from
//! an arbitrary human label, and [`Slug`], the validated module slug a user
//! passes on the command line.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Placeholder returned when sanitizing an empty label.
const PLACEHOLDER: &str = "_";

/// A sanitized, source-safe name.
///
/// Invariants:
/// - never empty
/// - never starts with a digit
/// - the first character is upper-case (or `_`)
/// - contains only `[A-Za-z0-9_]`
///
/// Identifiers are not unique: two labels that differ only in punctuation map
/// to the same identifier.
///
/// # Examples
///
/// ```
/// use panelgen_core::identifier::Identifier;
///
/// let id = Identifier::sanitize("foo bar");
/// assert_eq!(id, "Foo_bar");
///
/// let id = Identifier::sanitize("3d");
/// assert_eq!(id, "_3d");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    /// Sanitizes an arbitrary label into an [`Identifier`].
    ///
    /// - Empty input yields `_`.
    /// - A leading digit is prefixed with `_`.
    /// - The first character is upper-cased; the rest keep their case.
    /// - Every character outside `[A-Za-z0-9_]` becomes `_`.
    pub fn sanitize(raw: &str) -> Self {
        if raw.is_empty() {
            return Self(PLACEHOLDER.to_string());
        }

        let mut chars = raw.chars();
        let mut prefixed = String::with_capacity(raw.len() + 1);
        if raw.starts_with(|c: char| c.is_ascii_digit()) {
            prefixed.push('_');
        }
        if let Some(first) = chars.next() {
            prefixed.extend(first.to_uppercase());
        }
        prefixed.push_str(chars.as_str());

        let sanitized = prefixed
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();

        Self(sanitized)
    }

    /// Returns the fully upper-cased form used for component enum names.
    ///
    /// # Examples
    ///
    /// ```
    /// use panelgen_core::identifier::Identifier;
    ///
    /// assert_eq!(Identifier::sanitize("gain").to_upper(), "GAIN");
    /// ```
    pub fn to_upper(&self) -> Self {
        Self(self.0.to_ascii_uppercase())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Identifier {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Identifier {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Errors produced while validating a module slug.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlugError {
    #[error("Slug must not be empty.")]
    Empty,

    #[error("Slug must only contain ASCII letters, numbers, '-', and '_'. Found {found:?} in `{slug}`.")]
    InvalidCharacter { slug: String, found: char },
}

/// A validated module slug.
///
/// Slugs may only contain ASCII letters, digits, `-` and `_`.
///
/// # Examples
///
/// ```
/// use panelgen_core::identifier::Slug;
///
/// let slug = Slug::new("My-Module_2").unwrap();
/// assert_eq!(slug.identifier(), "My_Module_2");
///
/// assert!(Slug::new("bad slug").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    /// Validates `slug` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns [`SlugError`] if the slug is empty or contains a character
    /// outside `[a-zA-Z0-9_-]`.
    pub fn new(slug: impl Into<String>) -> Result<Self, SlugError> {
        let slug = slug.into();
        if slug.is_empty() {
            return Err(SlugError::Empty);
        }
        if let Some(found) = slug
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(SlugError::InvalidCharacter { slug, found });
        }
        Ok(Self(slug))
    }

    /// Returns the raw slug.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the sanitized identifier generated files are named after.
    pub fn identifier(&self) -> Identifier {
        Identifier::sanitize(&self.0)
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_empty() {
        assert_eq!(Identifier::sanitize(""), "_");
    }

    #[test]
    fn test_sanitize_leading_digit() {
        let id = Identifier::sanitize("3d");
        assert!(id.as_str().starts_with("_3"));
        assert_eq!(id, "_3d");
    }

    #[test]
    fn test_sanitize_space() {
        assert_eq!(Identifier::sanitize("foo bar"), "Foo_bar");
    }

    #[test]
    fn test_sanitize_only_first_char_uppercased() {
        assert_eq!(Identifier::sanitize("gainKnob"), "GainKnob");
        assert_eq!(Identifier::sanitize("gAIN"), "GAIN");
    }

    #[test]
    fn test_sanitize_special_characters() {
        assert_eq!(Identifier::sanitize("cv-in/L"), "Cv_in_L");
        assert_eq!(Identifier::sanitize("a.b#c"), "A_b_c");
    }

    #[test]
    fn test_sanitize_non_ascii_becomes_single_underscore() {
        assert_eq!(Identifier::sanitize("über"), "_ber");
        assert_eq!(Identifier::sanitize("ab°c"), "Ab_c");
    }

    #[test]
    fn test_sanitize_is_idempotent_on_examples() {
        for raw in ["", "3d", "foo bar", "Gain", "über", "_x", "a-b-c"] {
            let once = Identifier::sanitize(raw);
            let twice = Identifier::sanitize(once.as_str());
            assert_eq!(once, twice, "sanitize not idempotent for {raw:?}");
        }
    }

    #[test]
    fn test_to_upper() {
        assert_eq!(Identifier::sanitize("cutoff freq").to_upper(), "CUTOFF_FREQ");
    }

    #[test]
    fn test_identifiers_collide() {
        assert_eq!(Identifier::sanitize("a b"), Identifier::sanitize("a-b"));
    }

    #[test]
    fn test_slug_valid() {
        let slug = Slug::new("Chaplin").unwrap();
        assert_eq!(slug.as_str(), "Chaplin");
        assert_eq!(slug.identifier(), "Chaplin");
    }

    #[test]
    fn test_slug_with_dash_maps_to_underscore_identifier() {
        let slug = Slug::new("poly-shift").unwrap();
        assert_eq!(slug.identifier(), "Poly_shift");
    }

    #[test]
    fn test_slug_invalid_character() {
        let err = Slug::new("my module").unwrap_err();
        assert_eq!(
            err,
            SlugError::InvalidCharacter {
                slug: "my module".to_string(),
                found: ' ',
            }
        );
    }

    #[test]
    fn test_slug_empty() {
        assert_eq!(Slug::new("").unwrap_err(), SlugError::Empty);
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn check_sanitize_invariants(raw: &str) -> Result<(), TestCaseError> {
        let id = Identifier::sanitize(raw);
        let s = id.as_str();

        prop_assert!(!s.is_empty());
        prop_assert!(!s.starts_with(|c: char| c.is_ascii_digit()));
        prop_assert!(s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
        let first = s.chars().next().unwrap_or('_');
        prop_assert!(!first.is_ascii_lowercase());
        Ok(())
    }

    fn check_sanitize_is_idempotent(raw: &str) -> Result<(), TestCaseError> {
        let once = Identifier::sanitize(raw);
        let twice = Identifier::sanitize(once.as_str());
        prop_assert_eq!(once, twice);
        Ok(())
    }

    proptest! {
        #[test]
        fn sanitize_upholds_invariants(raw in ".*") {
            check_sanitize_invariants(&raw)?;
        }

        #[test]
        fn sanitize_is_idempotent(raw in ".*") {
            check_sanitize_is_idempotent(&raw)?;
        }

        #[test]
        fn valid_slugs_are_accepted(raw in "[a-zA-Z0-9_-]{1,32}") {
            prop_assert!(Slug::new(raw).is_ok());
        }
    }
}
