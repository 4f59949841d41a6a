//! Slug generation, validation and uniqueness resolution.
//!
//! Slugs are URL-safe identifiers derived from free text (usually a title).
//! [`generate_slug`] is a pure transform, [`validate_slug`] reports every rule a
//! user-supplied slug breaks, and [`generate_unique_slug`] probes a caller-supplied
//! [`SlugExists`] capability until it finds a free candidate.

mod unique;
mod validate;

pub use unique::{DEFAULT_MAX_ATTEMPTS, SlugExists, UniqueSlugError, generate_unique_slug};
pub use validate::{
    MAX_SLUG_LENGTH, MIN_SLUG_LENGTH, RESERVED_SLUGS, SlugValidation, SlugViolation,
    validate_slug,
};

use regex::{NoExpand, Regex};
use std::sync::LazyLock;

/// Returned when the source text yields nothing usable.
pub const FALLBACK_SLUG: &str = "untitled";

/// Default upper bound on generated slug length.
pub const DEFAULT_MAX_LENGTH: usize = 60;

/// Everything outside word characters, whitespace and hyphen.
static DISALLOWED_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\s-]").unwrap());

/// Runs of whitespace, underscores and hyphens.
static SEPARATOR_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s_-]+").unwrap());

/// Options controlling [`generate_slug`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugOptions {
    /// Character placed between words.
    pub separator: char,
    /// Maximum length in characters.
    pub max_length: usize,
    /// Keep the source casing instead of lowercasing.
    pub preserve_case: bool,
}

impl Default for SlugOptions {
    fn default() -> Self {
        Self {
            separator: '-',
            max_length: DEFAULT_MAX_LENGTH,
            preserve_case: false,
        }
    }
}

/// Derives a slug from free text.
///
/// The text is trimmed, lowercased (unless [`SlugOptions::preserve_case`]),
/// stripped of punctuation, and runs of whitespace, underscores and hyphens are
/// collapsed into the separator. Results longer than `max_length` are cut back to
/// the last whole word. Returns [`FALLBACK_SLUG`] when nothing survives.
///
/// # Examples
///
/// ```
/// use cms_service::utils::slug::{SlugOptions, generate_slug};
///
/// let options = SlugOptions::default();
/// assert_eq!(generate_slug("Hello, World!!", &options), "hello-world");
/// assert_eq!(generate_slug("", &options), "untitled");
/// ```
pub fn generate_slug(text: &str, options: &SlugOptions) -> String {
    let trimmed = text.trim();
    let cased = if options.preserve_case {
        trimmed.to_string()
    } else {
        trimmed.to_lowercase()
    };

    let stripped = DISALLOWED_CHARS.replace_all(&cased, "");
    let separator = options.separator.to_string();
    let joined = SEPARATOR_RUNS.replace_all(&stripped, NoExpand(&separator));
    let slug = joined.trim_matches(options.separator);

    let slug = truncate_at_boundary(slug, options.max_length, options.separator)
        .trim_matches(options.separator);

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug.to_string()
    }
}

/// Cuts `slug` to `max_length` characters without leaving a partial trailing word.
///
/// A single word longer than the limit is hard-cut.
fn truncate_at_boundary(slug: &str, max_length: usize, separator: char) -> &str {
    let Some((cut, _)) = slug.char_indices().nth(max_length) else {
        return slug;
    };

    let head = &slug[..cut];
    if slug[cut..].starts_with(separator) {
        return head;
    }

    match head.rfind(separator) {
        Some(pos) if pos > 0 => &head[..pos],
        _ => head,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn slug(text: &str) -> String {
        generate_slug(text, &SlugOptions::default())
    }

    #[test]
    fn test_empty_input_falls_back() {
        assert_eq!(slug(""), "untitled");
    }

    #[test]
    fn test_whitespace_only_falls_back() {
        assert_eq!(slug("   \t\n "), "untitled");
    }

    #[test]
    fn test_punctuation_only_falls_back() {
        assert_eq!(slug("!!! ??? ..."), "untitled");
    }

    #[test]
    fn test_strips_punctuation() {
        assert_eq!(slug("Hello, World!!"), "hello-world");
    }

    #[test]
    fn test_collapses_spaces_and_trims_hyphens() {
        assert_eq!(slug("  --Multiple   Spaces--  "), "multiple-spaces");
    }

    #[test]
    fn test_underscores_become_separator() {
        assert_eq!(slug("snake_case__title"), "snake-case-title");
    }

    #[test]
    fn test_non_ascii_letters_are_dropped() {
        assert_eq!(slug("Café Crème 2024"), "caf-crme-2024");
    }

    #[test]
    fn test_preserve_case() {
        let options = SlugOptions {
            preserve_case: true,
            ..SlugOptions::default()
        };
        assert_eq!(generate_slug("Rust In Action", &options), "Rust-In-Action");
    }

    #[test]
    fn test_custom_separator() {
        let options = SlugOptions {
            separator: '_',
            ..SlugOptions::default()
        };
        assert_eq!(generate_slug("Senior Rust - Engineer", &options), "senior_rust_engineer");
    }

    #[test]
    fn test_truncates_at_word_boundary() {
        let options = SlugOptions {
            max_length: 12,
            ..SlugOptions::default()
        };
        // "building-fast-apis" cut at 12 is "building-fas"; back off to "building".
        assert_eq!(generate_slug("Building fast APIs", &options), "building");
    }

    #[test]
    fn test_truncation_keeps_word_ending_on_limit() {
        let options = SlugOptions {
            max_length: 13,
            ..SlugOptions::default()
        };
        assert_eq!(generate_slug("Building fast APIs", &options), "building-fast");
    }

    #[test]
    fn test_truncation_hard_cuts_single_long_word() {
        let options = SlugOptions {
            max_length: 5,
            ..SlugOptions::default()
        };
        assert_eq!(generate_slug("Supercalifragilistic", &options), "super");
    }

    #[test]
    fn test_default_max_length_is_respected() {
        let title = "word ".repeat(40);
        let result = slug(&title);
        assert!(result.len() <= DEFAULT_MAX_LENGTH);
        assert!(!result.ends_with('-'));
    }

    #[test]
    fn test_zero_max_length_falls_back() {
        let options = SlugOptions {
            max_length: 0,
            ..SlugOptions::default()
        };
        assert_eq!(generate_slug("anything", &options), "untitled");
    }

    #[test]
    fn test_generated_slug_passes_validation() {
        let result = slug("Quarterly Product Update: March");
        assert!(validate_slug(&result).is_valid);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn prop_output_is_url_safe(text in "\\PC{1,120}") {
            let result = slug(&text);
            prop_assert!(result.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
            prop_assert!(!result.is_empty());
            prop_assert!(result.len() <= DEFAULT_MAX_LENGTH);
            prop_assert!(!result.starts_with('-'));
            prop_assert!(!result.ends_with('-'));
            prop_assert!(!result.contains("--"));
        }

        #[test]
        fn prop_idempotent(text in "\\PC{0,120}") {
            let once = slug(&text);
            prop_assert_eq!(slug(&once), once);
        }

        #[test]
        fn prop_respects_max_length(text in "[a-zA-Z ]{1,200}", max_length in 8usize..80) {
            let options = SlugOptions { max_length, ..SlugOptions::default() };
            prop_assert!(generate_slug(&text, &options).chars().count() <= max_length);
        }
    }
}
