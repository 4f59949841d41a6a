//! Slug suggestion and availability checks for content items.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use crate::domain::entities::ContentKind;
use crate::domain::repositories::ContentRepository;
use crate::error::AppError;
use crate::utils::slug::{
    SlugExists, SlugOptions, SlugValidation, SlugViolation, UniqueSlugError, generate_slug,
    generate_unique_slug, validate_slug,
};

/// [`SlugExists`] over one content table, optionally ignoring one row.
pub struct ScopedSlugCheck<'a, C: ContentRepository + ?Sized> {
    repository: &'a C,
    kind: ContentKind,
    exclude_id: Option<i64>,
}

impl<'a, C: ContentRepository + ?Sized> ScopedSlugCheck<'a, C> {
    pub fn new(repository: &'a C, kind: ContentKind, exclude_id: Option<i64>) -> Self {
        Self {
            repository,
            kind,
            exclude_id,
        }
    }
}

#[async_trait]
impl<'a, C> SlugExists for ScopedSlugCheck<'a, C>
where
    C: ContentRepository + ?Sized,
{
    type Error = AppError;

    async fn exists(&self, candidate: &str) -> Result<bool, AppError> {
        self.repository
            .slug_exists(self.kind, candidate, self.exclude_id)
            .await
    }
}

/// Result of [`SlugService::check`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugCheck {
    pub validation: SlugValidation,
    /// `Some` only when the slug is valid and a content kind was given.
    pub available: Option<bool>,
}

/// Service for deriving and vetting slugs against stored content.
pub struct SlugService<C: ContentRepository + ?Sized> {
    content_repository: Arc<C>,
    max_attempts: usize,
}

impl<C: ContentRepository + ?Sized> SlugService<C> {
    /// Creates a new slug service.
    ///
    /// `max_attempts` caps existence probes per suggestion.
    pub fn new(content_repository: Arc<C>, max_attempts: usize) -> Self {
        Self {
            content_repository,
            max_attempts,
        }
    }

    /// Derives a slug without checking storage.
    pub fn generate(&self, text: &str, options: &SlugOptions) -> String {
        generate_slug(text, options)
    }

    /// Derives a slug from `text` that is free within `kind`.
    ///
    /// A base that is too short or reserved (`"AI"`, `"Admin"`) is numbered from
    /// the start, so the result is `ai-1` rather than `ai`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if no free slug was found within the attempt
    /// cap. Repository errors are returned unchanged.
    pub async fn suggest(
        &self,
        kind: ContentKind,
        text: &str,
        exclude_id: Option<i64>,
        options: &SlugOptions,
    ) -> Result<String, AppError> {
        let check = ScopedSlugCheck::new(self.content_repository.as_ref(), kind, exclude_id);

        let base = generate_slug(text, options);
        let base_check = validate_slug(&base);
        let base = if base_check.has(SlugViolation::TooShort)
            || base_check.has(SlugViolation::Reserved)
        {
            format!("{}{}1", base, options.separator)
        } else {
            base
        };

        let slug = generate_unique_slug(&base, &check, options, self.max_attempts)
            .await
            .map_err(|e| match e {
                UniqueSlugError::Exhausted { base, attempts } => AppError::conflict(
                    "Could not find a free slug",
                    json!({ "kind": kind, "base": base, "attempts": attempts }),
                ),
                UniqueSlugError::Check(e) => e,
            })?;

        debug!("Suggested slug {} for {}", slug, kind);
        Ok(slug)
    }

    /// Validates `slug` and, when valid and `kind` is given, checks availability.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn check(
        &self,
        kind: Option<ContentKind>,
        slug: &str,
        exclude_id: Option<i64>,
    ) -> Result<SlugCheck, AppError> {
        let validation = validate_slug(slug);

        let available = match kind {
            Some(kind) if validation.is_valid => Some(
                !self
                    .content_repository
                    .slug_exists(kind, slug, exclude_id)
                    .await?,
            ),
            _ => None,
        };

        Ok(SlugCheck {
            validation,
            available,
        })
    }

    /// Accepts a user-supplied slug only if it is valid and free.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] listing every broken rule, or
    /// [`AppError::Conflict`] if the slug is taken.
    pub async fn ensure_usable(
        &self,
        kind: ContentKind,
        slug: &str,
        exclude_id: Option<i64>,
    ) -> Result<(), AppError> {
        let result = self.check(Some(kind), slug, exclude_id).await?;

        if !result.validation.is_valid {
            let errors: Vec<_> = result
                .validation
                .errors
                .iter()
                .map(|v| json!({ "code": v.code(), "message": v.to_string() }))
                .collect();
            return Err(AppError::bad_request(
                "Invalid slug",
                json!({ "slug": slug, "errors": errors }),
            ));
        }

        if result.available == Some(false) {
            return Err(AppError::conflict(
                "Slug already exists",
                json!({ "slug": slug, "kind": kind }),
            ));
        }

        Ok(())
    }
}
