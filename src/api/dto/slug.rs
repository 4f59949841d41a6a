//! DTOs for slug endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::ContentKind;
use crate::utils::slug::{DEFAULT_MAX_LENGTH, SlugOptions, SlugViolation};

/// Request to derive a slug from free text.
#[derive(Debug, Deserialize, Validate)]
pub struct GenerateSlugRequest {
    #[validate(length(max = 1000))]
    pub text: String,

    /// When present, the slug is made unique within this content kind.
    pub kind: Option<ContentKind>,

    /// Row to ignore during the uniqueness check (editing in place).
    pub exclude_id: Option<i64>,

    pub separator: Option<char>,

    #[validate(range(min = 1, max = 200))]
    pub max_length: Option<usize>,

    #[serde(default)]
    pub preserve_case: bool,
}

impl GenerateSlugRequest {
    pub fn options(&self) -> SlugOptions {
        SlugOptions {
            separator: self.separator.unwrap_or('-'),
            max_length: self.max_length.unwrap_or(DEFAULT_MAX_LENGTH),
            preserve_case: self.preserve_case,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GenerateSlugResponse {
    pub slug: String,
    /// True when the slug was checked against stored content.
    pub unique: bool,
}

/// Request to validate a user-supplied slug.
#[derive(Debug, Deserialize, Validate)]
pub struct ValidateSlugRequest {
    #[validate(length(max = 1000))]
    pub slug: String,

    /// When present and the slug is valid, availability is checked too.
    pub kind: Option<ContentKind>,

    pub exclude_id: Option<i64>,
}

/// One broken slug rule.
#[derive(Debug, Serialize)]
pub struct SlugErrorDto {
    pub code: &'static str,
    pub message: String,
}

impl From<&SlugViolation> for SlugErrorDto {
    fn from(violation: &SlugViolation) -> Self {
        SlugErrorDto {
            code: violation.code(),
            message: violation.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ValidateSlugResponse {
    pub slug: String,
    pub is_valid: bool,
    pub errors: Vec<SlugErrorDto>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}
