//! PostgreSQL implementation of the content repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::ContentKind;
use crate::domain::repositories::ContentRepository;
use crate::error::AppError;

/// Slug lookups over the content tables.
///
/// The table name comes from [`ContentKind::table`], a closed set of
/// literals, so these queries are built at runtime rather than with `query!`.
pub struct PgContentRepository {
    pool: Arc<PgPool>,
}

impl PgContentRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContentRepository for PgContentRepository {
    async fn slug_exists(
        &self,
        kind: ContentKind,
        slug: &str,
        exclude_id: Option<i64>,
    ) -> Result<bool, AppError> {
        let sql = format!(
            "SELECT EXISTS (SELECT 1 FROM {} WHERE slug = $1 AND ($2::bigint IS NULL OR id <> $2))",
            kind.table()
        );

        let exists = sqlx::query_scalar::<_, bool>(&sql)
            .bind(slug)
            .bind(exclude_id)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(exists)
    }
}
