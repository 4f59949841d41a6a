//! Validation of user-supplied slugs.

use serde::Serialize;
use thiserror::Error;

/// Minimum slug length in characters.
pub const MIN_SLUG_LENGTH: usize = 3;

/// Maximum slug length in characters.
pub const MAX_SLUG_LENGTH: usize = 60;

/// Slugs that collide with dashboard and API routes.
pub const RESERVED_SLUGS: &[&str] = &["new", "edit", "delete", "admin", "dashboard", "api"];

/// A single broken slug rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlugViolation {
    #[error("Slug is required")]
    Required,
    #[error("Slug must be at least 3 characters")]
    TooShort,
    #[error("Slug must be at most 60 characters")]
    TooLong,
    #[error("Slug can only contain lowercase letters, numbers, and hyphens")]
    InvalidCharacters,
    #[error("Slug cannot start or end with a hyphen")]
    EdgeHyphen,
    #[error("Slug cannot contain consecutive hyphens")]
    ConsecutiveHyphens,
    #[error("This slug is reserved")]
    Reserved,
}

impl SlugViolation {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::TooShort => "too_short",
            Self::TooLong => "too_long",
            Self::InvalidCharacters => "invalid_characters",
            Self::EdgeHyphen => "edge_hyphen",
            Self::ConsecutiveHyphens => "consecutive_hyphens",
            Self::Reserved => "reserved",
        }
    }
}

/// Outcome of [`validate_slug`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlugValidation {
    pub is_valid: bool,
    pub errors: Vec<SlugViolation>,
}

impl SlugValidation {
    fn from_errors(errors: Vec<SlugViolation>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Returns true if `violation` is among the reported errors.
    pub fn has(&self, violation: SlugViolation) -> bool {
        self.errors.contains(&violation)
    }
}

/// Checks a slug against every rule and reports all violations in rule order.
///
/// # Rules
///
/// - Required (an empty slug reports only this rule)
/// - Length: 3-60 characters
/// - Allowed characters: lowercase letters, digits, hyphens
/// - Cannot start or end with a hyphen
/// - Cannot contain `--`
/// - Cannot be a reserved word
///
/// Violations are returned as data; nothing here fails.
pub fn validate_slug(slug: &str) -> SlugValidation {
    if slug.is_empty() {
        return SlugValidation::from_errors(vec![SlugViolation::Required]);
    }

    let mut errors = Vec::new();
    let length = slug.chars().count();

    if length < MIN_SLUG_LENGTH {
        errors.push(SlugViolation::TooShort);
    }

    if length > MAX_SLUG_LENGTH {
        errors.push(SlugViolation::TooLong);
    }

    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        errors.push(SlugViolation::InvalidCharacters);
    }

    if slug.starts_with('-') || slug.ends_with('-') {
        errors.push(SlugViolation::EdgeHyphen);
    }

    if slug.contains("--") {
        errors.push(SlugViolation::ConsecutiveHyphens);
    }

    if RESERVED_SLUGS.contains(&slug) {
        errors.push(SlugViolation::Reserved);
    }

    SlugValidation::from_errors(errors)
}
