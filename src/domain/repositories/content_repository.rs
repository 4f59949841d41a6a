//! Repository trait for slug lookups across content tables.

use crate::domain::entities::ContentKind;
use crate::error::AppError;
use async_trait::async_trait;

/// Read access used to keep slugs unique within one content kind.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgContentRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Returns true if a row of `kind` already uses `slug`.
    ///
    /// `exclude_id` skips one row, so an item being edited does not collide
    /// with itself.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn slug_exists(
        &self,
        kind: ContentKind,
        slug: &str,
        exclude_id: Option<i64>,
    ) -> Result<bool, AppError>;
}
