//! Handlers for slug generation and validation.

use axum::{Json, extract::State};
use serde_json::json;
use validator::Validate;

use crate::api::dto::slug::{
    GenerateSlugRequest, GenerateSlugResponse, SlugErrorDto, ValidateSlugRequest,
    ValidateSlugResponse,
};
use crate::error::AppError;
use crate::state::AppState;

/// Separators accepted from clients.
const ALLOWED_SEPARATORS: &[char] = &['-', '_'];

/// Derives a slug from free text.
///
/// # Endpoint
///
/// `POST /api/slugs/generate`
///
/// # Request Body
///
/// ```json
/// {
///   "text": "My First Post",
///   "kind": "blog_post",      // optional, enables uniqueness resolution
///   "exclude_id": 12,         // optional, row being edited
///   "separator": "-",         // optional
///   "max_length": 60,         // optional
///   "preserve_case": false    // optional
/// }
/// ```
///
/// # Response
///
/// ```json
/// { "slug": "my-first-post-1", "unique": true }
/// ```
///
/// # Errors
///
/// - 400 Bad Request for invalid options
/// - 409 Conflict if no free slug was found within the attempt cap
pub async fn generate_slug_handler(
    State(state): State<AppState>,
    Json(payload): Json<GenerateSlugRequest>,
) -> Result<Json<GenerateSlugResponse>, AppError> {
    payload.validate()?;

    if let Some(separator) = payload.separator
        && !ALLOWED_SEPARATORS.contains(&separator)
    {
        return Err(AppError::bad_request(
            "Unsupported separator",
            json!({ "separator": separator, "allowed": ALLOWED_SEPARATORS }),
        ));
    }

    let options = payload.options();

    let response = match payload.kind {
        Some(kind) => GenerateSlugResponse {
            slug: state
                .slug_service
                .suggest(kind, &payload.text, payload.exclude_id, &options)
                .await?,
            unique: true,
        },
        None => GenerateSlugResponse {
            slug: state.slug_service.generate(&payload.text, &options),
            unique: false,
        },
    };

    Ok(Json(response))
}

/// Validates a slug and optionally checks availability.
///
/// # Endpoint
///
/// `POST /api/slugs/validate`
///
/// Always answers 200 for a well-formed request; rule violations are data:
///
/// ```json
/// {
///   "slug": "my--slug",
///   "is_valid": false,
///   "errors": [
///     { "code": "consecutive_hyphens", "message": "Slug cannot contain consecutive hyphens" }
///   ]
/// }
/// ```
pub async fn validate_slug_handler(
    State(state): State<AppState>,
    Json(payload): Json<ValidateSlugRequest>,
) -> Result<Json<ValidateSlugResponse>, AppError> {
    payload.validate()?;

    let result = state
        .slug_service
        .check(payload.kind, &payload.slug, payload.exclude_id)
        .await?;

    Ok(Json(ValidateSlugResponse {
        slug: payload.slug,
        is_valid: result.validation.is_valid,
        errors: result
            .validation
            .errors
            .iter()
            .map(SlugErrorDto::from)
            .collect(),
        available: result.available,
    }))
}
