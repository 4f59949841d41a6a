//! Collision resolution against an external existence check.

use super::{SlugOptions, generate_slug};
use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

/// Default cap on existence probes per [`generate_unique_slug`] call.
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

/// Answers whether a candidate slug is already taken.
///
/// Usually backed by a row-existence query scoped to one content table. See
/// [`crate::application::services::ScopedSlugCheck`].
#[async_trait]
pub trait SlugExists: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn exists(&self, candidate: &str) -> Result<bool, Self::Error>;
}

/// Errors from [`generate_unique_slug`].
#[derive(Debug, Error)]
pub enum UniqueSlugError<E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    #[error("no free slug for `{base}` after {attempts} attempts")]
    Exhausted { base: String, attempts: usize },
    /// The existence check itself failed; passed through untouched.
    #[error(transparent)]
    Check(E),
}

/// Produces a slug that `exists` reports as free.
///
/// The base slug comes from [`generate_slug`]. While the candidate is taken, the
/// next one is `{base}{separator}{n}` with `n` counting from 1. At most
/// `max_attempts` probes are made before giving up with
/// [`UniqueSlugError::Exhausted`].
///
/// There is no timeout; wrap the call in `tokio::time::timeout` when latency matters.
///
/// # Errors
///
/// - [`UniqueSlugError::Exhausted`] when every probe hit a taken slug
/// - [`UniqueSlugError::Check`] when the existence check fails
pub async fn generate_unique_slug<X>(
    base_text: &str,
    exists: &X,
    options: &SlugOptions,
    max_attempts: usize,
) -> Result<String, UniqueSlugError<X::Error>>
where
    X: SlugExists + ?Sized,
{
    let base = generate_slug(base_text, options);
    let mut candidate = base.clone();

    for attempt in 1..=max_attempts {
        let taken = exists
            .exists(&candidate)
            .await
            .map_err(UniqueSlugError::Check)?;

        if !taken {
            if attempt > 1 {
                debug!("Slug {} taken, resolved to {}", base, candidate);
            }
            return Ok(candidate);
        }

        candidate = format!("{}{}{}", base, options.separator, attempt);
    }

    Err(UniqueSlugError::Exhausted {
        base,
        attempts: max_attempts,
    })
}
